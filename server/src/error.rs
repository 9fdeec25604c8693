use axum::{Json, http::StatusCode, response::IntoResponse};
use chat::GenerationFault;
use response::ErrorResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("No complaint text provided")]
    MissingComplaint,

    #[error("Complaint text cannot be empty")]
    EmptyComplaint,

    #[error("{message}")]
    UnreadableBody { status: StatusCode, message: String },

    #[error("AI model not available. Please check configuration.")]
    ModelUnavailable,

    #[error("Failed to generate email response")]
    EmptyGeneration,

    #[error("An error occurred: {0}")]
    Generation(GenerationFault),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingComplaint | Self::EmptyComplaint => StatusCode::BAD_REQUEST,
            Self::UnreadableBody { status, .. } => *status,
            Self::ModelUnavailable | Self::EmptyGeneration | Self::Generation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<GenerationFault> for AppError {
    fn from(fault: GenerationFault) -> Self {
        match fault {
            GenerationFault::Unavailable => Self::ModelUnavailable,
            GenerationFault::EmptyResponse => Self::EmptyGeneration,
            fault => Self::Generation(fault),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
