use serde::{Deserialize, Serialize, de::Error as _};
use serde_json::Value;

pub mod content;
pub mod generation_config;

pub use content::{Content, Part, Role};
pub use generation_config::GenerationConfig;

/// Body accepted by `POST /generate_email`.
#[derive(Debug, Deserialize, Serialize)]
pub struct ComplaintRequest {
    pub complaint: String,
}

impl ComplaintRequest {
    /// Parses a raw request body. Anything that is not a JSON object with a
    /// string `complaint` field is rejected.
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        match serde_json::from_slice::<Value>(body)? {
            object @ Value::Object(_) => serde_json::from_value(object),
            _ => Err(serde_json::Error::custom("expected a JSON object")),
        }
    }
}

/// Body of a Gemini `models/{model}:generateContent` call.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    pub fn from_prompt(prompt: &str, generation_config: &GenerationConfig) -> Self {
        Self {
            contents: vec![Content::user(prompt)],
            generation_config: Some(generation_config.clone()),
        }
    }
}
