use thiserror::Error;

/// Why a generation attempt did not produce an email.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenerationFault {
    #[error("generation client is not configured")]
    Unavailable,

    #[error("no response generated from the model")]
    EmptyResponse,

    #[error("{0}")]
    Transport(String),

    #[error("model API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("failed to decode model response: {0}")]
    Decode(String),

    #[error("prompt was blocked by the model: {0}")]
    Blocked(String),
}
