use async_trait::async_trait;
use request::{GenerateContentRequest, GenerationConfig};
use response::{ApiErrorResponse, GenerateContentResponse, UsageMetadata};
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::error::GenerationFault;
use crate::providers::GenerateContentProvider;

pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_HEADER: &str = "x-goog-api-key";

pub type UsageCallback = Arc<dyn Fn(&UsageMetadata) + Send + Sync>;

pub struct GeminiGenerateContentProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    usage_callback: Option<UsageCallback>,
}

impl GeminiGenerateContentProvider {
    pub fn new(api_key: &str, model: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: GEMINI_API_BASE_URL.to_string(),
            usage_callback: None,
        }
    }

    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn usage_callback<F>(mut self, usage_callback: F) -> Self
    where
        F: Fn(&UsageMetadata) + Send + Sync + 'static,
    {
        self.usage_callback = Some(Arc::new(usage_callback));
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        let model = self.model.strip_prefix("models/").unwrap_or(&self.model);
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }
}

#[async_trait]
impl GenerateContentProvider for GeminiGenerateContentProvider {
    async fn generate_content(
        &self,
        prompt: &str,
        generation_config: &GenerationConfig,
    ) -> Result<String, GenerationFault> {
        debug!(
            "Starting Gemini generateContent request with model: {}",
            self.model
        );

        let request = GenerateContentRequest::from_prompt(prompt, generation_config);
        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationFault::Transport(e.to_string()))?;

        let status = response.status();
        debug!("Gemini API response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| GenerationFault::Transport(e.to_string()))?;

        let response = parse_generate_content_response(status.as_u16(), &body)?;

        if let (Some(usage), Some(usage_callback)) = (&response.usage_metadata, &self.usage_callback)
        {
            usage_callback(usage);
        }

        let text = extract_text(&response)?;
        info!("Received {} characters from Gemini", text.chars().count());
        Ok(text)
    }
}

fn parse_generate_content_response(
    status: u16,
    body: &str,
) -> Result<GenerateContentResponse, GenerationFault> {
    if !(200..300).contains(&status) {
        let message = match serde_json::from_str::<ApiErrorResponse>(body) {
            Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
            _ => body.trim().to_string(),
        };
        error!("Gemini API error: {} - {}", status, message);
        return Err(GenerationFault::Api { status, message });
    }

    serde_json::from_str(body).map_err(|e| {
        error!("Failed to parse Gemini response: {}", e);
        GenerationFault::Decode(e.to_string())
    })
}

fn extract_text(response: &GenerateContentResponse) -> Result<String, GenerationFault> {
    match response.text() {
        Some(text) => Ok(text),
        None => match response.block_reason() {
            Some(reason) => Err(GenerationFault::Blocked(reason.to_string())),
            None => Err(GenerationFault::EmptyResponse),
        },
    }
}
