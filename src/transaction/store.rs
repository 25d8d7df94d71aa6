//! The in-memory store of transactions for the current session.

use time::{Date, macros::date};

use crate::{
    Error,
    transaction::{
        core::Transaction,
        form::{IncomeSignPolicy, RawTransactionForm, validate_transaction},
    },
};

/// The date of the most recent demo transaction.
const LATEST_SEED_DATE: Date = date!(2025 - 03 - 25);

/// The order in which transactions are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayOrder {
    /// Oldest first, i.e. the order the transactions were added in.
    #[default]
    Insertion,
    /// The most recently added transaction first.
    NewestFirst,
}

/// An append-only, ordered collection of transactions.
///
/// Transactions cannot be edited or removed once added. The store lives for
/// as long as the server process does.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store containing the demo transactions shown on first load.
    pub fn with_seed_data() -> Self {
        let mut store = Self::new();

        for form in seed_forms() {
            match validate_transaction(&form, LATEST_SEED_DATE, IncomeSignPolicy::Preserve)
                .and_then(|transaction| store.append(transaction))
            {
                Ok(()) => {}
                Err(error) => tracing::error!("could not add seed transaction {form:?}: {error}"),
            }
        }

        store
    }

    /// Add `transaction` to the end of the store.
    ///
    /// # Errors
    /// Returns [Error::DuplicateTransactionId] if a transaction with the same
    /// ID is already in the store. The store is unchanged in that case.
    pub fn append(&mut self, transaction: Transaction) -> Result<(), Error> {
        if self
            .transactions
            .iter()
            .any(|existing| existing.id == transaction.id)
        {
            return Err(Error::DuplicateTransactionId);
        }

        self.transactions.push(transaction);
        Ok(())
    }

    /// All transactions in the order they were added.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// All transactions in `order`.
    pub fn in_display_order(&self, order: DisplayOrder) -> Vec<&Transaction> {
        match order {
            DisplayOrder::Insertion => self.transactions.iter().collect(),
            DisplayOrder::NewestFirst => self.transactions.iter().rev().collect(),
        }
    }

    /// The number of transactions in the store.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the store has no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

fn seed_forms() -> [RawTransactionForm; 3] {
    [
        seed_form("Grocery Shopping", "-54.75", "food", "2025-03-25", "expense"),
        seed_form("Salary", "3000", "others", "2025-03-25", "income"),
        seed_form(
            "Netflix Subscription",
            "-12.99",
            "entertainment",
            "2025-03-24",
            "expense",
        ),
    ]
}

fn seed_form(title: &str, amount: &str, category: &str, date: &str, type_: &str) -> RawTransactionForm {
    RawTransactionForm {
        title: title.to_owned(),
        amount: amount.to_owned(),
        category: category.to_owned(),
        date: date.to_owned(),
        type_: type_.to_owned(),
    }
}
