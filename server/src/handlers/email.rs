use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::StatusCode,
    response::IntoResponse,
};
use request::ComplaintRequest;
use response::EmailResponse;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::AppState;
use crate::error::AppError;
use crate::prompt::build_email_prompt;
use crate::utils::complaint_preview;

// The body is read raw so every rejection is answered with a JSON error.
pub async fn generate_email(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, AppError> {
    let body = body.map_err(|rejection| {
        debug!("Could not read request body: {}", rejection.body_text());
        AppError::UnreadableBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    })?;

    let payload = ComplaintRequest::from_slice(&body).map_err(|e| {
        debug!("Rejected complaint payload: {}", e);
        AppError::MissingComplaint
    })?;

    let complaint = payload.complaint.trim();
    if complaint.is_empty() {
        debug!("Rejected blank complaint");
        return Err(AppError::EmptyComplaint);
    }

    if !state.generation_client.is_available() {
        error!("Gemini model not available, no API key configured");
        return Err(AppError::ModelUnavailable);
    }

    let prompt = build_email_prompt(complaint);
    let email = state
        .generation_client
        .generate(&prompt, &state.generation_config)
        .await
        .map_err(|fault| {
            error!("Error generating email: {}", fault);
            AppError::from(fault)
        })?;

    info!(
        "Successfully generated email response for complaint: {}...",
        complaint_preview(complaint)
    );
    debug!("Generated email:\n{}", email);

    Ok((StatusCode::OK, Json(EmailResponse::now(email))))
}
