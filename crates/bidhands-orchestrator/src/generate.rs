//! The generation pipeline: credential, prompt, one API call.

use bidhands_protocols::error::GenerateError;
use bidhands_provider_gemini::{GeminiClient, GenerateContentRequest, DEFAULT_MODEL};
use tracing::{debug, info};

use crate::credentials::{CredentialStore, GEMINI_API_KEY};
use crate::prompt::build_prompt;

/// Tunables for a generation call.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f64,
    /// Override for the API endpoint; `None` means the real service.
    pub api_base_url: Option<String>,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            api_base_url: None,
        }
    }
}

/// Generate a bid draft for a job description.
///
/// The credential is resolved fresh for this call. One attempt, no
/// retries; any failure surfaces directly.
pub async fn generate_bid(
    store: &dyn CredentialStore,
    settings: &GenerationSettings,
    description: &str,
) -> Result<String, GenerateError> {
    let api_key = store
        .get(GEMINI_API_KEY)
        .await
        .ok_or(GenerateError::ApiKeyMissing)?;

    let client = match &settings.api_base_url {
        Some(base) => GeminiClient::with_base_url(api_key, base.clone()),
        None => GeminiClient::new(api_key),
    };

    debug!(model = %settings.model, "sending generation request");
    let request = GenerateContentRequest::single_turn(build_prompt(description), settings.temperature);
    let bid = client.generate(&settings.model, request).await?;
    info!(chars = bid.len(), "bid draft generated");
    Ok(bid)
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
