//! Defines the endpoint that keeps the amount sign in step with the selected transaction type.

use axum::response::{IntoResponse, Response};
use axum_extra::extract::Form;
use serde::Deserialize;

use crate::transaction::{
    core::TransactionType, create_page::amount_field, sign::adjust_amount_sign,
};

/// The form data sent when the transaction type radio changes.
#[derive(Debug, Deserialize)]
pub struct AmountSignForm {
    /// The current text of the amount input.
    #[serde(default)]
    pub amount: String,
    /// The newly selected transaction type.
    #[serde(rename = "type")]
    pub type_: TransactionType,
}

/// Re-render the amount field with its sign matching the selected type.
pub async fn adjust_amount_sign_endpoint(Form(form): Form<AmountSignForm>) -> Response {
    let amount = adjust_amount_sign(form.amount.trim(), form.type_);

    amount_field(&amount).into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_extra::extract::Form;
    use scraper::{Html, Selector};

    use crate::transaction::{TransactionType, sign_endpoint::AmountSignForm};

    use super::adjust_amount_sign_endpoint;

    async fn get_amount_value(amount: &str, type_: TransactionType) -> String {
        let form = AmountSignForm {
            amount: amount.to_owned(),
            type_,
        };

        let response = adjust_amount_sign_endpoint(Form(form)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Could not get response body");
        let html = Html::parse_fragment(&String::from_utf8_lossy(&body));
        let selector = Selector::parse("div#amount-field input#amount").unwrap();
        let input = html
            .select(&selector)
            .next()
            .expect("response should contain the amount input");

        input.value().attr("value").unwrap_or_default().to_owned()
    }

    #[tokio::test]
    async fn switching_to_expense_negates_amount() {
        assert_eq!(get_amount_value("25", TransactionType::Expense).await, "-25");
    }

    #[tokio::test]
    async fn switching_to_income_strips_minus() {
        assert_eq!(get_amount_value("-25", TransactionType::Income).await, "25");
    }

    #[tokio::test]
    async fn empty_amount_stays_empty() {
        assert_eq!(get_amount_value("", TransactionType::Expense).await, "");
    }

    #[test]
    fn decodes_form_body() {
        let form: AmountSignForm = serde_html_form::from_str("amount=12.5&type=income").unwrap();

        assert_eq!(form.amount, "12.5");
        assert_eq!(form.type_, TransactionType::Income);
    }

    #[test]
    fn missing_amount_defaults_to_empty() {
        let form: AmountSignForm = serde_html_form::from_str("type=expense").unwrap();

        assert_eq!(form.amount, "");
        assert_eq!(form.type_, TransactionType::Expense);
    }
}
