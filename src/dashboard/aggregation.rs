//! Summary totals derived from the transaction store.
//!
//! Every function here is pure and recomputed on each read, so the totals can
//! never drift out of step with the stored transactions.

use rust_decimal::Decimal;

use crate::transaction::{Category, Transaction, TransactionType};

/// The totals shown in the dashboard summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) struct Summary {
    /// The sum of all income amounts.
    pub income_total: Decimal,
    /// The sum of the magnitudes of all expense amounts.
    pub expense_total: Decimal,
    /// Income minus expenses.
    pub net_balance: Decimal,
}

/// Calculate the income, expense and net totals for `transactions`.
///
/// Income amounts are summed as stored, expense amounts by magnitude. An empty
/// slice gives all zeros.
pub(super) fn summarize(transactions: &[Transaction]) -> Summary {
    let (income_total, expense_total) = transactions.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(income, expenses), transaction| match transaction.type_ {
            TransactionType::Income => (income + transaction.amount, expenses),
            TransactionType::Expense => (income, expenses + transaction.amount.abs()),
        },
    );

    Summary {
        income_total,
        expense_total,
        net_balance: income_total - expense_total,
    }
}

/// Total expenses per category.
///
/// Categories are returned in declaration order and categories without any
/// expenses are skipped.
pub(super) fn expenses_by_category(transactions: &[Transaction]) -> Vec<(Category, Decimal)> {
    Category::ALL
        .iter()
        .filter_map(|&category| {
            let expenses = transactions
                .iter()
                .filter(|transaction| {
                    transaction.type_ == TransactionType::Expense
                        && transaction.category == category
                })
                .map(|transaction| transaction.amount.abs())
                .sum::<Decimal>();

            (!expenses.is_zero()).then_some((category, expenses))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rust_decimal::Decimal;
    use time::macros::date;

    use crate::transaction::{
        Category, IncomeSignPolicy, RawTransactionForm, Transaction, TransactionStore,
        validate_transaction,
    };

    use super::{Summary, expenses_by_category, summarize};

    fn decimal(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    fn transaction(amount: &str, category: &str, type_: &str) -> Transaction {
        let form = RawTransactionForm {
            title: "test".to_owned(),
            amount: amount.to_owned(),
            category: category.to_owned(),
            date: "2025-03-25".to_owned(),
            type_: type_.to_owned(),
        };

        validate_transaction(&form, date!(2025 - 03 - 25), IncomeSignPolicy::Preserve).unwrap()
    }

    #[test]
    fn empty_store_gives_zeros() {
        assert_eq!(summarize(&[]), Summary::default());
        assert_eq!(summarize(&[]).net_balance, Decimal::ZERO);
        assert!(expenses_by_category(&[]).is_empty());
    }

    #[test]
    fn summarizes_seed_data() {
        let store = TransactionStore::with_seed_data();

        let summary = summarize(store.transactions());

        assert_eq!(summary.income_total, decimal("3000.00"));
        assert_eq!(summary.expense_total, decimal("67.74"));
        assert_eq!(summary.net_balance, decimal("2932.26"));
    }

    #[test]
    fn net_balance_is_income_minus_expenses() {
        let transactions = [
            transaction("120.10", "gift", "income"),
            transaction("-100", "others", "income"),
            transaction("33.33", "sport", "expense"),
            transaction("-0.67", "food", "expense"),
        ];

        let summary = summarize(&transactions);

        assert_eq!(summary.income_total, decimal("20.10"));
        assert_eq!(summary.expense_total, decimal("34.00"));
        assert_eq!(
            summary.net_balance,
            summary.income_total - summary.expense_total
        );
        assert_eq!(summary.net_balance, decimal("-13.90"));
    }

    #[test]
    fn groups_expenses_in_category_order() {
        let transactions = [
            transaction("10", "sport", "expense"),
            transaction("5.50", "food", "expense"),
            transaction("2.25", "sport", "expense"),
            transaction("1000", "food", "income"),
        ];

        let got = expenses_by_category(&transactions);

        assert_eq!(
            got,
            vec![
                (Category::Food, decimal("5.50")),
                (Category::Sport, decimal("12.25")),
            ]
        );
    }
}
