//! Dashboard module
//!
//! Provides an overview page showing the income, expense and net balance
//! totals, the list of recorded transactions and a breakdown of expenses.

mod aggregation;
mod cards;
mod charts;
mod handlers;
mod list;

pub use charts::{ExpenseChartData, ExpenseChartSource};
pub use handlers::{DashboardState, get_dashboard_page, get_expense_chart_data};
