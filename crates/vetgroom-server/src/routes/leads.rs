//! Lead submission route

use axum::{Json, Router, extract::State, routing::post};
use tracing::info;
use vetgroom::{FormStatus, LeadFields, LeadForm};

use crate::{
    AppState,
    error::{ApiError, Result},
    models::{ApiResponse, LeadFormResponse},
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(submit_lead))
}

/// Forward a contact form submission to the lead-capture endpoint
async fn submit_lead(
    State(state): State<AppState>,
    Json(fields): Json<LeadFields>,
) -> Result<Json<ApiResponse<LeadFormResponse>>> {
    if fields.name.trim().is_empty() || fields.email.trim().is_empty() {
        return Err(ApiError::bad_request("name and email are required"));
    }

    let mut form = LeadForm::new(fields);
    if let FormStatus::Error(message) = form.submit(&state.leads).await {
        return Err(ApiError::LeadRejected(message.clone()));
    }

    info!("Lead submitted for {}", state.leads.config().business_id);
    Ok(Json(ApiResponse::with_message(
        form.into(),
        "We'll get back to you within 24 hours.".to_string(),
    )))
}
