//! Credential lookup.
//!
//! The store is read-only from this system's perspective and is consulted
//! independently on every request, never cached; editing the credentials
//! file takes effect on the next generation. Store-level failures of any
//! kind resolve to "absent" rather than propagating.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

/// Key under which the Gemini API key is stored.
pub const GEMINI_API_KEY: &str = "gemini_api_key";

#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Read a credential by key. Absent, blank and unreadable all resolve
    /// to `None`.
    async fn get(&self, key: &str) -> Option<String>;
}

/// Credentials in a TOML file of `key = "value"` pairs.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn get(&self, key: &str) -> Option<String> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) => {
                debug!(path = %self.path.display(), %err, "credentials file not readable");
                return None;
            }
        };
        let table: toml::Table = match raw.parse() {
            Ok(table) => table,
            Err(err) => {
                debug!(path = %self.path.display(), %err, "credentials file not valid TOML");
                return None;
            }
        };
        table
            .get(key)
            .and_then(|value| value.as_str())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }
}

/// Fixed in-memory credentials, for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialStore {
    entries: HashMap<String, String>,
}

impl StaticCredentialStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }
}

#[async_trait]
impl CredentialStore for StaticCredentialStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

#[cfg(test)]
#[path = "credentials_tests.rs"]
mod tests;
