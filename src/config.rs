//! Configuration loading with environment variable substitution.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bidhands_page::{SelectorConfig, Timing};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Template written on first `bidhands configure`.
pub const CREDENTIALS_TEMPLATE: &str = r#"# bidhands credentials.
# Get a Gemini API key at https://aistudio.google.com/apikey and paste it
# below, then re-run your command.
gemini_api_key = ""
"#;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// TOML file holding `gemini_api_key`, re-read on every generation.
    pub credentials_path: String,
    pub model: String,
    pub temperature: f64,
    /// Override for the generation endpoint; absent means the real service.
    pub api_base_url: Option<String>,
    pub selectors: SelectorConfig,
    pub timing: Timing,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials_path: "~/.bidhands/credentials.toml".to_string(),
            model: bidhands_provider_gemini::DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            api_base_url: None,
            selectors: SelectorConfig::default(),
            timing: Timing::default(),
        }
    }
}

impl Config {
    /// Load from a TOML file. A missing file yields the defaults; anything
    /// else that goes wrong is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::load_str(&content)
    }

    /// Load from a string.
    pub fn load_str(content: &str) -> Result<Self> {
        let expanded = expand_env_vars(content)?;
        let config: Self = toml::from_str(&expanded).context("invalid config file")?;
        Ok(config)
    }

    /// The credentials file path with `~` expanded.
    pub fn credentials_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.credentials_path).to_string())
    }
}

/// Default config file location, `~/.bidhands/config.toml`.
pub fn default_config_path() -> PathBuf {
    bidhands_dir().join("config.toml")
}

/// The `.bidhands` directory path.
pub fn bidhands_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".bidhands"))
        .unwrap_or_else(|| PathBuf::from(".bidhands"))
}

/// Expand environment variables in the format `${VAR}`.
fn expand_env_vars(content: &str) -> Result<String> {
    let mut result = content.to_string();
    let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

    for cap in re.captures_iter(content) {
        let var_name = &cap[1];
        let var_value = std::env::var(var_name)
            .with_context(|| format!("environment variable not set: {var_name}"))?;
        result = result.replace(&cap[0], &var_value);
    }

    Ok(result)
}
