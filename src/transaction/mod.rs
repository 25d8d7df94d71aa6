//! Transaction management for the ledger.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model with its categories and types
//! - Validation of the raw form data into normalized transactions
//! - The in-memory, append-only `TransactionStore`
//! - View and endpoint handlers for adding transactions

mod core;
mod create_endpoint;
mod create_page;
mod form;
mod sign;
mod sign_endpoint;
mod store;

pub use self::core::{Category, MAX_AMOUNT, Transaction, TransactionId, TransactionType};
pub use create_endpoint::{CreateTransactionState, create_transaction_endpoint};
pub use create_page::{CreateTransactionPageState, get_create_transaction_page};
pub use form::{IncomeSignPolicy, RawTransactionForm, validate_transaction};
pub use sign::adjust_amount_sign;
pub use sign_endpoint::{AmountSignForm, adjust_amount_sign_endpoint};
pub use store::{DisplayOrder, TransactionStore};
