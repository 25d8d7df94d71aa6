//! Defines the endpoint for creating a new transaction.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since it tolerates missing and empty fields
// which are reported as validation errors instead of a generic rejection.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{
    AppState,
    app_state::lock_store,
    endpoints,
    timezone::get_local_date,
    transaction::{
        form::{IncomeSignPolicy, RawTransactionForm, validate_transaction},
        store::TransactionStore,
    },
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The transactions recorded in this session.
    pub store: Arc<Mutex<TransactionStore>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
    /// How negative amounts submitted as income are treated.
    pub income_sign_policy: IncomeSignPolicy,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            local_timezone: state.local_timezone.clone(),
            income_sign_policy: state.options.income_sign_policy,
        }
    }
}

/// A route handler for creating a new transaction, redirects to the dashboard on success.
///
/// On failure the store is left unchanged and an alert describing the first
/// problem with the form is returned.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<RawTransactionForm>,
) -> Response {
    let today = match get_local_date(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_alert_response(),
    };

    let transaction = match validate_transaction(&form, today, state.income_sign_policy) {
        Ok(transaction) => transaction,
        Err(error) => {
            tracing::debug!("rejected transaction form {form:?}: {error}");
            return error.into_alert_response();
        }
    };

    let mut store = match lock_store(&state.store) {
        Ok(store) => store,
        Err(error) => return error.into_alert_response(),
    };

    if let Err(error) = store.append(transaction) {
        tracing::error!("could not create transaction: {error}");
        return error.into_alert_response();
    }

    tracing::info!("created transaction, {} in store", store.len());

    (
        HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
