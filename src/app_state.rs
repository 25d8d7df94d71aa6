//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    Error,
    dashboard::ExpenseChartSource,
    transaction::{DisplayOrder, IncomeSignPolicy, TransactionStore},
};

/// Options that control how transactions are validated and displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerOptions {
    /// How negative amounts submitted as income are treated.
    pub income_sign_policy: IncomeSignPolicy,
    /// Where the expense breakdown chart gets its data from.
    pub expense_chart_source: ExpenseChartSource,
    /// The order the transaction list is displayed in.
    pub display_order: DisplayOrder,
}

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// Options that control validation and display.
    pub options: LedgerOptions,

    /// The transactions recorded in this session.
    pub store: Arc<Mutex<TransactionStore>>,
}

impl AppState {
    /// Create a new [AppState] that owns `store`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    pub fn new(store: TransactionStore, local_timezone: &str, options: LedgerOptions) -> Self {
        Self {
            local_timezone: local_timezone.to_owned(),
            options,
            store: Arc::new(Mutex::new(store)),
        }
    }
}

/// Acquire the lock on `store`.
///
/// # Errors
/// Returns [Error::StoreLockError] if the lock is poisoned.
pub fn lock_store(store: &Mutex<TransactionStore>) -> Result<MutexGuard<'_, TransactionStore>, Error> {
    store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire transaction store lock: {error}"))
        .map_err(|_| Error::StoreLockError)
}
