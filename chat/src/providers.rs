use async_trait::async_trait;
use request::GenerationConfig;
use std::sync::Arc;
use tracing::debug;

use crate::error::GenerationFault;

#[async_trait]
pub trait GenerateContentProvider: Send + Sync {
    async fn generate_content(
        &self,
        prompt: &str,
        generation_config: &GenerationConfig,
    ) -> Result<String, GenerationFault>;
}

/// Left unavailable when no API key is configured; every call then fails
/// with [`GenerationFault::Unavailable`].
#[derive(Clone, Default)]
pub struct GenerationClient {
    provider: Option<Arc<dyn GenerateContentProvider>>,
}

impl GenerationClient {
    pub fn new<P>(provider: P) -> Self
    where
        P: GenerateContentProvider + 'static,
    {
        Self {
            provider: Some(Arc::new(provider)),
        }
    }

    pub fn unavailable() -> Self {
        Self { provider: None }
    }

    pub fn is_available(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn generate(
        &self,
        prompt: &str,
        generation_config: &GenerationConfig,
    ) -> Result<String, GenerationFault> {
        let provider = self.provider.as_ref().ok_or(GenerationFault::Unavailable)?;

        let text = provider.generate_content(prompt, generation_config).await?;
        let text = text.trim();
        if text.is_empty() {
            debug!("Provider returned only whitespace");
            return Err(GenerationFault::EmptyResponse);
        }

        Ok(text.to_string())
    }
}
