use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub mod gemini;

pub use gemini::{
    ApiError, ApiErrorResponse, Candidate, GenerateContentResponse, PromptFeedback, UsageMetadata,
};

/// Successful reply of `POST /generate_email`.
#[derive(Debug, Deserialize, Serialize)]
pub struct EmailResponse {
    pub success: bool,
    pub email: String,
    pub timestamp: String,
}

impl EmailResponse {
    pub fn new(email: String, generated_at: DateTime<Utc>) -> Self {
        Self {
            success: true,
            email,
            timestamp: generated_at.to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }

    pub fn now(email: String) -> Self {
        Self::new(email, Utc::now())
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
