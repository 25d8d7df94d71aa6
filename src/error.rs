//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use time::Date;

use crate::{alert::Alert, internal_server_error::InternalServerError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// One or more of the transaction form fields was left empty.
    #[error("All fields are required")]
    MissingField,

    /// The amount was zero, not a number, or larger than the maximum amount.
    #[error("Amount must be a positive number less than or equal to 99,999,999")]
    InvalidAmount,

    /// The date could not be parsed as a calendar date.
    #[error("\"{0}\" is not a valid date, expected a date like 2025-03-25")]
    InvalidDate(String),

    /// A date in the future was used to create a transaction.
    ///
    /// Transactions record events that have already happened, therefore future
    /// dates are not allowed.
    #[error("Date cannot be in the future")]
    FutureDate(Date),

    /// The category is not one of the known categories.
    #[error("\"{0}\" is not a valid category")]
    InvalidCategory(String),

    /// The transaction type was neither "income" nor "expense".
    #[error("\"{0}\" is not a valid transaction type")]
    InvalidTransactionType(String),

    /// A transaction with the same ID is already in the store.
    #[error("a transaction with the same ID already exists")]
    DuplicateTransactionId,

    /// Could not acquire the lock on the transaction store.
    #[error("could not acquire the transaction store lock")]
    StoreLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::StoreLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    ///
    /// Validation errors are shown one at a time with the message the user
    /// needs to correct their input.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::MissingField | Error::InvalidAmount => (
                StatusCode::BAD_REQUEST,
                Alert::ErrorSimple {
                    message: self.to_string(),
                },
            ),
            Error::FutureDate(date) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Date cannot be in the future".to_owned(),
                    details: format!(
                        "{date} is after today. Change the date to today or a date in the past."
                    ),
                },
            ),
            Error::InvalidDate(_) | Error::InvalidCategory(_) | Error::InvalidTransactionType(_) => {
                (
                    StatusCode::BAD_REQUEST,
                    Alert::ErrorSimple {
                        message: self.to_string(),
                    },
                )
            }
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Invalid Timezone Settings".to_owned(),
                    details: format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                    ),
                },
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details:
                        "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}
