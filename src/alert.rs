//! Alert system for displaying error messages to users.
//!
//! Alerts are rendered as HTML fragments that htmx swaps into the
//! `#alert-container` element defined in [crate::html::base].

use axum::response::Html;
use maud::{Markup, html};

const ALERT_ERROR_STYLE: &str = "flex items-start gap-3 p-4 mb-4 text-sm rounded-lg shadow \
    text-red-800 bg-red-50 dark:bg-gray-800 dark:text-red-400";

/// An alert message to display to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// An error message with extra details.
    Error { message: String, details: String },
    /// An error message without details.
    ErrorSimple { message: String },
}

impl Alert {
    /// Render the alert as a HTML fragment.
    pub fn into_markup(self) -> Markup {
        let (message, details) = match self {
            Alert::Error { message, details } => (message, Some(details)),
            Alert::ErrorSimple { message } => (message, None),
        };

        html! {
            div
                id="alert"
                role="alert"
                class=(ALERT_ERROR_STYLE)
            {
                div class="flex-1"
                {
                    p class="font-medium" { (message) }

                    @if let Some(details) = details {
                        p { (details) }
                    }
                }

                button
                    type="button"
                    aria-label="Close"
                    class="ms-auto font-bold"
                    onclick="this.closest('#alert-container').classList.add('hidden')"
                {
                    "×"
                }
            }
        }
    }

    /// Render the alert as a HTML response body.
    pub fn into_html(self) -> Html<String> {
        Html(self.into_markup().into_string())
    }
}
