//! Validation and normalization of the raw transaction form.
//!
//! The form fields arrive as untrusted strings. [validate_transaction] checks
//! them in a fixed order, stopping at the first failure, and turns valid input
//! into a [Transaction] whose amount sign agrees with its type.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    Error,
    transaction::core::{
        AMOUNT_DECIMAL_PLACES, Category, MAX_AMOUNT, Transaction, TransactionId, TransactionType,
    },
};

const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// How a negative amount submitted as income is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IncomeSignPolicy {
    /// Keep the sign the user entered, so "-100" income is stored as -100.00.
    #[default]
    Preserve,
    /// Always store income as a positive amount.
    ForcePositive,
}

/// The raw form data for creating a transaction.
///
/// Every field is a string so that missing and malformed values can be
/// reported with the same messages the form shows.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawTransactionForm {
    /// A short description of the transaction.
    #[serde(default)]
    pub title: String,
    /// The amount in dollars, e.g. "4.5" or "-12.99".
    #[serde(default)]
    pub amount: String,
    /// One of the [Category] form values.
    #[serde(default)]
    pub category: String,
    /// An ISO 8601 calendar date, e.g. "2025-03-25".
    #[serde(default)]
    pub date: String,
    /// Either "income" or "expense".
    #[serde(default, rename = "type")]
    pub type_: String,
}

/// Validate `form` and build a normalized [Transaction].
///
/// `today` is the current date in the user's timezone. Checks run in order
/// and the first failure is returned:
///
/// 1. every field must be non-empty,
/// 2. the amount must be a non-zero number no larger than [MAX_AMOUNT] in magnitude,
/// 3. the date must be a valid date that is not after `today`,
/// 4. the category and type must be known values.
///
/// Expense amounts are made negative, income amounts are handled according to
/// `income_sign_policy`, and the result is rounded to two decimal places with
/// halves rounded away from zero.
///
/// # Errors
/// Returns [Error::MissingField], [Error::InvalidAmount], [Error::InvalidDate],
/// [Error::FutureDate], [Error::InvalidCategory] or
/// [Error::InvalidTransactionType] for the first check that fails.
pub fn validate_transaction(
    form: &RawTransactionForm,
    today: Date,
    income_sign_policy: IncomeSignPolicy,
) -> Result<Transaction, Error> {
    let title = form.title.trim();
    let amount = form.amount.trim();
    let category = form.category.trim();
    let date = form.date.trim();
    let type_ = form.type_.trim();

    if [title, amount, category, date, type_]
        .iter()
        .any(|field| field.is_empty())
    {
        return Err(Error::MissingField);
    }

    let amount = parse_amount(amount)?;
    let date = parse_date(date, today)?;

    let category =
        Category::from_str(category).map_err(|_| Error::InvalidCategory(category.to_owned()))?;
    let type_ = TransactionType::from_str(type_)
        .map_err(|_| Error::InvalidTransactionType(type_.to_owned()))?;

    let mut amount = normalize_sign(amount, type_, income_sign_policy)
        .round_dp_with_strategy(AMOUNT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    // Pad amounts like "4.5" so they always carry exactly two decimal places.
    amount.rescale(AMOUNT_DECIMAL_PLACES);

    Ok(Transaction {
        id: TransactionId::new(),
        title: title.to_owned(),
        amount,
        category,
        date,
        type_,
    })
}

/// Parse `amount` and check that it is non-zero and within the maximum magnitude.
///
/// Amounts that would round to zero at two decimal places are also rejected.
fn parse_amount(amount: &str) -> Result<Decimal, Error> {
    // `Decimal` accepts "_" as a digit separator, e.g. "1_000".
    if amount.contains('_') {
        tracing::debug!("could not parse amount \"{amount}\": contains a digit separator");
        return Err(Error::InvalidAmount);
    }

    let amount = Decimal::from_str(amount).map_err(|error| {
        tracing::debug!("could not parse amount \"{amount}\": {error}");
        Error::InvalidAmount
    })?;

    let rounded =
        amount.round_dp_with_strategy(AMOUNT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);

    if amount.is_zero() || rounded.is_zero() || amount.abs() > MAX_AMOUNT {
        return Err(Error::InvalidAmount);
    }

    Ok(amount)
}

fn parse_date(date: &str, today: Date) -> Result<Date, Error> {
    let date =
        Date::parse(date, DATE_FORMAT).map_err(|_| Error::InvalidDate(date.to_owned()))?;

    if date > today {
        return Err(Error::FutureDate(date));
    }

    Ok(date)
}

fn normalize_sign(
    amount: Decimal,
    type_: TransactionType,
    income_sign_policy: IncomeSignPolicy,
) -> Decimal {
    match (type_, income_sign_policy) {
        (TransactionType::Expense, _) if amount.is_sign_positive() => -amount,
        (TransactionType::Income, IncomeSignPolicy::ForcePositive) => amount.abs(),
        _ => amount,
    }
}
