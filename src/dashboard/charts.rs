//! Chart generation and rendering for the dashboard.
//!
//! The expense breakdown is a pie chart built from an [ExpenseChartData]
//! dataset. The dataset is either the fixed demo data or derived from the
//! stored transactions, depending on [ExpenseChartSource].
//!
//! The chart is generated as JSON configuration for the ECharts library and
//! rendered with a HTML container and JavaScript initialization code.

use charming::{
    Chart,
    component::{Legend, Title},
    element::{Color, JsFunction, Tooltip, Trigger},
    series::Pie,
};
use maud::{Markup, PreEscaped, html};
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::{
    dashboard::aggregation::expenses_by_category,
    html::HeadElement,
    transaction::{Category, Transaction},
};

/// Where the ECharts library is loaded from.
pub(super) const ECHARTS_URL: &str =
    "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// Where the expense breakdown chart gets its data from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseChartSource {
    /// The fixed demo breakdown that ships with the app.
    #[default]
    Seed,
    /// Totals per category calculated from the stored transactions.
    Live,
}

/// The labels, values and colors of the expense breakdown pie chart.
///
/// The three vectors always have the same length and the entries at the same
/// index describe one slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseChartData {
    /// The name of each slice.
    pub labels: Vec<String>,
    /// The dollar amount of each slice.
    pub values: Vec<f64>,
    /// The CSS color of each slice.
    pub colors: Vec<String>,
}

impl ExpenseChartData {
    /// The demo breakdown shown until live data is enabled.
    pub fn seed() -> Self {
        Self {
            labels: vec!["Groceries".to_owned(), "Entertainment".to_owned()],
            values: vec![54.75, 12.99],
            colors: vec!["#f87171".to_owned(), "#facc15".to_owned()],
        }
    }

    /// Build the breakdown from the expenses in `transactions`.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut data = Self {
            labels: Vec::new(),
            values: Vec::new(),
            colors: Vec::new(),
        };

        for (category, total) in expenses_by_category(transactions) {
            data.labels.push(category.label().to_owned());
            data.values.push(total.to_f64().unwrap_or_default());
            data.colors.push(category_color(category).to_owned());
        }

        data
    }

    /// Get the dataset for `source`.
    pub fn for_source(source: ExpenseChartSource, transactions: &[Transaction]) -> Self {
        match source {
            ExpenseChartSource::Seed => Self::seed(),
            ExpenseChartSource::Live => Self::from_transactions(transactions),
        }
    }

    /// Whether the dataset has no slices.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Convert the dataset into an ECharts pie chart.
    pub(super) fn to_chart(&self) -> Chart {
        let slices = self
            .values
            .iter()
            .zip(&self.labels)
            .map(|(&value, label)| (value, label.as_str()))
            .collect::<Vec<_>>();

        Chart::new()
            .title(Title::new().text("Expense Breakdown").left("center"))
            .tooltip(
                Tooltip::new()
                    .trigger(Trigger::Item)
                    .value_formatter(currency_formatter()),
            )
            .legend(Legend::new().left("center").bottom(0))
            .color(
                self.colors
                    .iter()
                    .map(|color| Color::Value(color.clone()))
                    .collect(),
            )
            .series(
                Pie::new()
                    .name("Expenses")
                    .radius(vec!["40%", "70%"])
                    .data(slices),
            )
    }
}

/// The slice color used for `category` in the live breakdown.
fn category_color(category: Category) -> &'static str {
    match category {
        Category::Food => "#f87171",
        Category::Transportation => "#60a5fa",
        Category::Entertainment => "#facc15",
        Category::Sport => "#34d399",
        Category::Gift => "#c084fc",
        Category::Others => "#9ca3af",
    }
}

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML container for a dashboard chart.
pub(super) fn chart_container(chart: &DashboardChart) -> Markup {
    html!(
        div
            id=(chart.id)
            class="min-h-[320px] w-full rounded dark:bg-gray-100"
        {}
    )
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Creates scripts that initialize ECharts instances with responsive resizing.
/// The chart theme follows the `dark` class on the root element and is updated
/// whenever the theme toggle fires a `themechange` event.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const updateTheme = () => {{
                        const isDarkMode = document.documentElement.classList.contains('dark');
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    document.addEventListener('themechange', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}
