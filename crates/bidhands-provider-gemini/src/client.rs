//! Gemini API client.

use reqwest::Client;
use tracing::debug;

use bidhands_protocols::error::GenerateError;

use crate::types::*;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// Gemini API client.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a new Gemini client.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, BASE_URL.to_string())
    }

    /// Create a client against a non-default endpoint.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(300))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
            api_key,
        }
    }

    /// Generate draft text from a single prompt. One attempt, no retries.
    pub async fn generate(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> Result<String, GenerateError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );

        debug!("Gemini generate: model={}", model);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerateError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerateError::Network(e.to_string()))?;

        if !status.is_success() {
            let error: Result<GeminiError, _> = serde_json::from_str(&body);
            let message = match error {
                Ok(e) => e.error.message,
                Err(_) => format!("HTTP {}", status.as_u16()),
            };
            return Err(GenerateError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|_| GenerateError::MalformedResponse)?;

        if let Some(reason) = parsed.block_reason() {
            return Err(GenerateError::ContentBlocked(reason.to_string()));
        }

        match parsed.first_text().map(str::trim) {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            _ => Err(GenerateError::MalformedResponse),
        }
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
