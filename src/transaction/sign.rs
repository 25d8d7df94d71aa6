//! Live adjustment of the amount field when the transaction type changes.

use crate::transaction::core::TransactionType;

/// Rewrite the amount text so its sign matches `type_`.
///
/// Switching to an expense prefixes the amount with "-" unless it already
/// starts with one, switching to income strips the leading "-". Empty amounts
/// are returned unchanged.
///
/// This only changes what the user sees in the form. Submitted amounts are
/// still normalized by [crate::transaction::validate_transaction].
pub fn adjust_amount_sign(amount: &str, type_: TransactionType) -> String {
    if amount.is_empty() {
        return String::new();
    }

    match type_ {
        TransactionType::Expense if !amount.starts_with('-') => {
            format!("-{}", amount.replacen('-', "", 1))
        }
        TransactionType::Income if amount.starts_with('-') => amount.replacen('-', "", 1),
        _ => amount.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use crate::transaction::core::TransactionType;

    use super::adjust_amount_sign;

    #[test]
    fn expense_prefixes_minus() {
        assert_eq!(adjust_amount_sign("4.5", TransactionType::Expense), "-4.5");
    }

    #[test]
    fn expense_keeps_existing_minus() {
        assert_eq!(adjust_amount_sign("-4.5", TransactionType::Expense), "-4.5");
    }

    #[test]
    fn expense_moves_stray_minus_to_front() {
        assert_eq!(adjust_amount_sign("4-5", TransactionType::Expense), "-45");
    }

    #[test]
    fn income_strips_leading_minus() {
        assert_eq!(adjust_amount_sign("-100", TransactionType::Income), "100");
    }

    #[test]
    fn income_keeps_positive_amount() {
        assert_eq!(adjust_amount_sign("100", TransactionType::Income), "100");
    }

    #[test]
    fn empty_amount_is_left_alone() {
        assert_eq!(adjust_amount_sign("", TransactionType::Expense), "");
        assert_eq!(adjust_amount_sign("", TransactionType::Income), "");
    }

    #[test]
    fn toggling_back_and_forth_round_trips() {
        let expense = adjust_amount_sign("12.99", TransactionType::Expense);
        let income = adjust_amount_sign(&expense, TransactionType::Income);

        assert_eq!(income, "12.99");
    }
}
