//! Defines the route handler for the page for creating a new transaction.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::Date;

use crate::{
    AppState, Error, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE,
        FORM_RADIO_INPUT_STYLE, FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base,
        loading_spinner,
    },
    navigation::NavBar,
    timezone::get_local_date,
    transaction::core::{Category, MAX_AMOUNT, TransactionType},
};

/// The ID of the add transaction form.
///
/// `static/app.js` only clears the alert container for requests sent by this form.
const TRANSACTION_FORM_ID: &str = "transaction-form";

/// The type that is selected when the form is first shown.
const DEFAULT_TRANSACTION_TYPE: TransactionType = TransactionType::Expense;

/// Renders the amount input.
///
/// The whole field is swapped out by the amount sign endpoint whenever the
/// transaction type changes.
pub(super) fn amount_field(amount: &str) -> Markup {
    html! {
        div id="amount-field"
        {
            label
                for="amount"
                class=(FORM_LABEL_STYLE)
            {
                "Amount"
            }

            input
                name="amount"
                id="amount"
                type="number"
                step="0.01"
                max=(MAX_AMOUNT)
                min={"-" (MAX_AMOUNT)}
                placeholder="0.00"
                required
                value=(amount)
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}

fn transaction_type_radio(type_: TransactionType, label: &str) -> Markup {
    let id = format!("transaction-type-{type_}");

    html! {
        div class="flex items-center gap-3"
        {
            input
                name="type"
                id=(id)
                type="radio"
                value=(type_)
                checked[type_ == DEFAULT_TRANSACTION_TYPE]
                required
                tabindex="0"
                hx-post=(endpoints::AMOUNT_SIGN_API)
                hx-trigger="change"
                hx-include="#amount"
                hx-target="#amount-field"
                hx-swap="outerHTML"
                class=(FORM_RADIO_INPUT_STYLE);

            label
                for=(id)
                class=(FORM_RADIO_LABEL_STYLE)
            {
                (label)
            }
        }
    }
}

fn create_transaction_view(max_date: Date) -> Markup {
    let create_transaction_route = endpoints::TRANSACTIONS_API;
    let nav_bar = NavBar::new(endpoints::NEW_TRANSACTION_VIEW).into_html();
    let spinner = loading_spinner();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            form
                id=(TRANSACTION_FORM_ID)
                hx-post=(create_transaction_route)
                hx-target-error="#alert-container"
                class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { "Add Transaction" }

                div
                {
                    label
                        for="title"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Title"
                    }

                    input
                        name="title"
                        id="title"
                        type="text"
                        placeholder="Title"
                        required
                        autofocus
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                (amount_field(""))

                div
                {
                    label
                        for="category"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Category"
                    }

                    select
                        name="category"
                        id="category"
                        required
                        class=(FORM_TEXT_INPUT_STYLE)
                    {
                        option value="" { "Select category" }

                        @for category in Category::ALL {
                            option value=(category.as_str()) { (category.label()) }
                        }
                    }
                }

                div
                {
                    label
                        for="date"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Date"
                    }

                    input
                        name="date"
                        id="date"
                        type="date"
                        max=(max_date)
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                fieldset class="space-y-2"
                {
                    legend class=(FORM_LABEL_STYLE) { "Type" }

                    div class=(FORM_RADIO_GROUP_STYLE)
                    {
                        (transaction_type_radio(TransactionType::Income, "Income"))
                        (transaction_type_radio(TransactionType::Expense, "Expense"))
                    }
                }

                button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                {
                    span
                        id="indicator"
                        class="inline htmx-indicator"
                    {
                        (spinner)
                    }
                    " Save"
                }
            }
        }
    };

    base("Add Transaction", &[], &content)
}

/// The state needed for create new transaction page.
#[derive(Debug, Clone)]
pub struct CreateTransactionPageState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateTransactionPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Renders the page for creating a transaction.
pub async fn get_create_transaction_page(
    State(state): State<CreateTransactionPageState>,
) -> Result<Response, Error> {
    let max_date = get_local_date(&state.local_timezone)?;

    Ok(create_transaction_view(max_date).into_response())
}

#[cfg(test)]
mod view_tests {
    use axum::{body::Body, extract::State, http::StatusCode, response::Response};
    use scraper::{ElementRef, Html, Selector};
    use time::OffsetDateTime;

    use crate::{
        endpoints,
        transaction::{
            create_page::{CreateTransactionPageState, TRANSACTION_FORM_ID},
            get_create_transaction_page,
        },
    };

    #[tokio::test]
    async fn new_transaction_returns_form() {
        let state = CreateTransactionPageState {
            local_timezone: "Etc/UTC".to_owned(),
        };

        let response = get_create_transaction_page(State(state)).await.unwrap();

        assert_status_ok(&response);
        assert_html_content_type(&response);
        let document = parse_html(response).await;
        assert_valid_html(&document);
        assert_correct_form(&document);
    }

    #[tokio::test]
    async fn invalid_timezone_is_an_error() {
        let state = CreateTransactionPageState {
            local_timezone: "Not/AZone".to_owned(),
        };

        let result = get_create_transaction_page(State(state)).await;

        assert!(result.is_err());
    }

    #[track_caller]
    fn assert_status_ok(response: &Response<Body>) {
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[track_caller]
    fn assert_html_content_type(response: &Response<Body>) {
        assert_eq!(
            response
                .headers()
                .get("content-type")
                .unwrap()
                .to_str()
                .unwrap(),
            "text/html; charset=utf-8"
        );
    }

    #[track_caller]
    fn assert_valid_html(html: &Html) {
        assert!(
            html.errors.is_empty(),
            "Got HTML parsing errors: {:?}",
            html.errors
        );
    }

    #[track_caller]
    fn assert_correct_form(document: &Html) {
        let form_selector = Selector::parse("form").unwrap();
        let forms = document.select(&form_selector).collect::<Vec<_>>();
        assert_eq!(forms.len(), 1, "want 1 form, got {}", forms.len());

        let form = forms.first().unwrap();
        assert_eq!(form.value().attr("id"), Some(TRANSACTION_FORM_ID));
        let hx_post = form.value().attr("hx-post");
        assert_eq!(
            hx_post,
            Some(endpoints::TRANSACTIONS_API),
            "want form with attribute hx-post=\"{}\", got {:?}",
            endpoints::TRANSACTIONS_API,
            hx_post
        );

        assert_correct_inputs(form);
        assert_category_options(form);
        assert_type_radios(form);
        assert_has_submit_button(form);
    }

    #[track_caller]
    fn assert_correct_inputs(form: &ElementRef) {
        let expected_input_types = vec![("title", "text"), ("amount", "number"), ("date", "date")];

        for (name, element_type) in expected_input_types {
            let selector_string = format!("input[type={element_type}]");
            let input_selector = Selector::parse(&selector_string).unwrap();
            let inputs = form.select(&input_selector).collect::<Vec<_>>();
            assert_eq!(
                inputs.len(),
                1,
                "want 1 {element_type} input, got {}",
                inputs.len()
            );

            let input = inputs.first().unwrap();

            let input_name = input.value().attr("name");
            assert_eq!(
                input_name,
                Some(name),
                "want {element_type} with name=\"{name}\", got {input_name:?}"
            );
            assert_required(input);

            match input_name {
                Some("amount") => assert_amount_step(input),
                Some("date") => assert_max_date(input),
                _ => {}
            }
        }
    }

    #[track_caller]
    fn assert_required(input: &ElementRef) {
        let required = input.value().attr("required");
        let input_name = input.value().attr("name").unwrap();
        assert!(
            required.is_some(),
            "want {input_name} input to be required, got {required:?}"
        );
    }

    #[track_caller]
    fn assert_max_date(input: &ElementRef) {
        let today = OffsetDateTime::now_utc().date();
        let max_date = input.value().attr("max");

        assert_eq!(
            Some(today.to_string().as_str()),
            max_date,
            "the date for a new transaction should be limited to the current date {today}, but got {max_date:?}"
        );
    }

    #[track_caller]
    fn assert_amount_step(input: &ElementRef) {
        let step = input
            .value()
            .attr("step")
            .expect("amount input should have the attribute 'step'");
        let step: f64 = step
            .parse()
            .expect("the attribute 'step' for the amount input should be a float");
        assert_eq!(
            0.01, step,
            "the amount for a new transaction should increment in steps of 0.01, but got {step}"
        );
        assert_eq!(input.value().attr("max"), Some("99999999"));
    }

    #[track_caller]
    fn assert_category_options(form: &ElementRef) {
        let selector = Selector::parse("select[name=category] option").unwrap();
        let values: Vec<_> = form
            .select(&selector)
            .filter_map(|option| option.value().attr("value"))
            .collect();

        assert_eq!(
            values,
            [
                "",
                "food",
                "transportation",
                "entertainment",
                "sport",
                "gift",
                "others"
            ]
        );
    }

    #[track_caller]
    fn assert_type_radios(form: &ElementRef) {
        let selector = Selector::parse("input[type=radio][name=type]").unwrap();
        let radios = form.select(&selector).collect::<Vec<_>>();
        assert_eq!(radios.len(), 2, "want 2 type radios, got {}", radios.len());

        let checked = radios
            .iter()
            .find(|input| input.value().attr("checked").is_some())
            .and_then(|input| input.value().attr("value"));
        assert_eq!(checked, Some("expense"), "expense should be selected by default");

        for radio in radios {
            assert_eq!(
                radio.value().attr("hx-post"),
                Some(endpoints::AMOUNT_SIGN_API)
            );
            assert_eq!(radio.value().attr("hx-target"), Some("#amount-field"));
        }
    }

    #[test]
    fn alerts_are_only_cleared_by_form_submissions() {
        let script = include_str!("../../static/app.js");

        assert!(
            script.contains(&format!("\"{TRANSACTION_FORM_ID}\"")),
            "app.js should only clear alerts for requests from #{TRANSACTION_FORM_ID}"
        );
    }

    #[track_caller]
    fn assert_has_submit_button(form: &ElementRef) {
        let button_selector = Selector::parse("button").unwrap();
        let buttons = form.select(&button_selector).collect::<Vec<_>>();
        assert_eq!(buttons.len(), 1, "want 1 button, got {}", buttons.len());
        let button_type = buttons.first().unwrap().value().attr("type");
        assert_eq!(
            button_type,
            Some("submit"),
            "want button with type=\"submit\", got {button_type:?}"
        );
    }

    async fn parse_html(response: Response) -> Html {
        let body = response.into_body();
        let body = axum::body::to_bytes(body, usize::MAX)
            .await
            .expect("Could not get response body");
        let text = String::from_utf8_lossy(&body).to_string();

        Html::parse_document(&text)
    }
}
