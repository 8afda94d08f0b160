//! Bid generation errors.

use thiserror::Error;

/// Failure of a single generation attempt. There are no retries anywhere in
/// this path; one failed attempt surfaces directly to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The credential store returned nothing for the API key. The message
    /// must direct the user to the configuration surface.
    #[error(
        "API Key not set. Run `bidhands configure` and add gemini_api_key to the credentials file"
    )]
    ApiKeyMissing,

    /// Non-success HTTP status, with the provider's error detail when the
    /// body carried one.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The prompt was rejected by the provider's safety filters.
    #[error("Content blocked by API safety filters: {0}. Adjust the job description if possible")]
    ContentBlocked(String),

    /// The response lacked the expected nested text payload.
    #[error("Could not parse valid bid text from API response (unexpected format)")]
    MalformedResponse,

    #[error("Network error: {0}")]
    Network(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_names_the_configuration_surface() {
        let msg = GenerateError::ApiKeyMissing.to_string();
        assert!(msg.contains("configure"));
        assert!(msg.contains("gemini_api_key"));
    }

    #[test]
    fn test_api_error_carries_status_and_detail() {
        let err = GenerateError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        };
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn test_block_reason_is_surfaced() {
        let err = GenerateError::ContentBlocked("SAFETY".to_string());
        assert!(err.to_string().contains("SAFETY"));
    }
}
