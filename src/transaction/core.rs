//! Defines the core data models for transactions.

use std::{fmt::Display, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

// ============================================================================
// MODELS
// ============================================================================

/// The largest magnitude a transaction amount may have, in dollars.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(99_999_999, 0, 0, false, 0);

/// The number of fractional digits stored for an amount.
pub const AMOUNT_DECIMAL_PLACES: u32 = 2;

/// An opaque, unique identifier for a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money earned, stored with a positive amount.
    Income,
    /// Money spent, stored with a negative amount.
    Expense,
}

impl TransactionType {
    /// The value used for this type in HTML forms.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            _ => Err(()),
        }
    }
}

/// The spending category of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Groceries, eating out and drinks.
    Food,
    /// Fuel, fares and vehicle costs.
    Transportation,
    /// Streaming, events and hobbies.
    Entertainment,
    /// Gym memberships, gear and events.
    Sport,
    /// Presents given or received.
    Gift,
    /// Anything else, including salary.
    Others,
}

impl Category {
    /// Every category, in the order they are offered to the user.
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transportation,
        Category::Entertainment,
        Category::Sport,
        Category::Gift,
        Category::Others,
    ];

    /// The value used for this category in HTML forms.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transportation => "transportation",
            Category::Entertainment => "entertainment",
            Category::Sport => "sport",
            Category::Gift => "gift",
            Category::Others => "others",
        }
    }

    /// The human readable name of the category.
    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Entertainment => "Entertainment",
            Category::Sport => "Sport",
            Category::Gift => "Gift",
            Category::Others => "Others",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or(())
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are only created by [crate::transaction::validate_transaction]
/// and are never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A short description of what the transaction was for.
    pub title: String,
    /// The amount of money spent or earned in this transaction.
    ///
    /// Negative for expenses and positive for income, with two decimal places.
    pub amount: Decimal,
    /// What the money was spent on.
    pub category: Category,
    /// When the transaction happened.
    pub date: Date,
    /// Whether the transaction is an income or an expense.
    #[serde(rename = "type")]
    pub type_: TransactionType,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rust_decimal::Decimal;

    use super::{Category, MAX_AMOUNT, TransactionId, TransactionType};

    #[test]
    fn max_amount_is_ninety_nine_million() {
        assert_eq!(MAX_AMOUNT, Decimal::from(99_999_999));
    }

    #[test]
    fn parses_every_category() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()), Ok(category));
        }
    }

    #[test]
    fn rejects_unknown_category() {
        assert!(Category::from_str("Groceries").is_err());
        assert!(Category::from_str("").is_err());
    }

    #[test]
    fn parses_transaction_type() {
        assert_eq!(
            TransactionType::from_str("income"),
            Ok(TransactionType::Income)
        );
        assert_eq!(
            TransactionType::from_str("expense"),
            Ok(TransactionType::Expense)
        );
        assert!(TransactionType::from_str("Expense").is_err());
    }

    #[test]
    fn ids_are_unique() {
        let first = TransactionId::new();
        let second = TransactionId::new();

        assert_ne!(first, second);
    }
}
