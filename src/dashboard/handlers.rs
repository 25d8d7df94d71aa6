//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - Route handlers for displaying the dashboard and serving chart data
//! - HTML view functions for rendering the dashboard UI
//! - State types used by the handlers

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    app_state::{LedgerOptions, lock_store},
    dashboard::{
        aggregation::{Summary, summarize},
        cards::summary_cards_view,
        charts::{
            DashboardChart, ECHARTS_URL, ExpenseChartData, chart_container, charts_script,
        },
        list::transaction_list_view,
    },
    endpoints,
    html::{CARD_STYLE, HeadElement, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
    transaction::{Transaction, TransactionStore},
};

const EXPENSE_CHART_ID: &str = "expense-chart";

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The transactions recorded in this session.
    pub store: Arc<Mutex<TransactionStore>>,
    /// Options that control which chart data is used and the list order.
    pub options: LedgerOptions,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            options: state.options,
        }
    }
}

/// Display a page with the summary totals, the transaction list and the
/// expense breakdown.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let store = lock_store(&state.store)?;

    let summary = summarize(store.transactions());
    let transactions = store.in_display_order(state.options.display_order);
    let chart_data =
        ExpenseChartData::for_source(state.options.expense_chart_source, store.transactions());

    Ok(dashboard_view(&summary, &transactions, &chart_data).into_response())
}

/// Serve the expense breakdown dataset as JSON.
pub async fn get_expense_chart_data(
    State(state): State<DashboardState>,
) -> Result<Json<ExpenseChartData>, Error> {
    let store = lock_store(&state.store)?;

    Ok(Json(ExpenseChartData::for_source(
        state.options.expense_chart_source,
        store.transactions(),
    )))
}

/// Renders the main dashboard page.
fn dashboard_view(
    summary: &Summary,
    transactions: &[&Transaction],
    chart_data: &ExpenseChartData,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();
    let chart = DashboardChart {
        id: EXPENSE_CHART_ID,
        options: chart_data.to_chart().to_string(),
    };

    let content = html!(
        (nav_bar)

        div
            id="dashboard-content"
            class={ (PAGE_CONTAINER_STYLE) " max-w-screen-xl" }
        {
            (summary_cards_view(summary))

            div class="grid grid-cols-1 xl:grid-cols-2 gap-4 w-full"
            {
                (transaction_list_view(transactions))

                section
                    id="expense-breakdown"
                    class={ "w-full mb-6 " (CARD_STYLE) }
                {
                    @if chart_data.is_empty() {
                        p class="text-gray-600 dark:text-gray-400"
                        {
                            "The expense breakdown will show up here once you add some expenses."
                        }
                    } @else {
                        (chart_container(&chart))
                    }
                }
            }
        }
    );

    let scripts = if chart_data.is_empty() {
        Vec::new()
    } else {
        vec![
            HeadElement::ScriptLink(ECHARTS_URL.to_owned()),
            charts_script(&[chart]),
        ]
    };

    base("Dashboard", &scripts, &content)
}
