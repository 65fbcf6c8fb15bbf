use crate::error::CliError;
use playfetch_catalog::{DEFAULT_PAGE_SIZE, DEFAULT_REDIRECT_BASE};
use playfetch_core::{HttpProviderSettings, Locale, ReturnLink};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Environment variable overriding `provider.endpoint`.
pub const ENDPOINT_ENV: &str = "PLAYFETCH_ENDPOINT";

/// Root configuration for playfetch.
///
/// Read from a JSON file; every field falls back to a default, so an empty
/// object is a valid configuration.
///
/// # Examples
///
/// ```
/// use playfetch::config::FinderConfig;
///
/// let json = r#"{
///     "locale": "es",
///     "catalog": { "page_size": 4 }
/// }"#;
///
/// let config: FinderConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.catalog.page_size, 4);
/// assert_eq!(config.locale.tag(), "es");
/// ```
#[derive(Debug, Deserialize, Default)]
pub struct FinderConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub navigation: ReturnLink,
}

impl FinderConfig {
    /// Loads configuration from `path` (or defaults when `None`) and applies
    /// the [`ENDPOINT_ENV`] override.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_endpoint_override(std::env::var(ENDPOINT_ENV).ok()))
    }

    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| CliError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Replaces the provider endpoint with a non-empty override.
    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            tracing::debug!(%endpoint, "provider endpoint overridden from environment");
            self.provider.endpoint = Some(endpoint);
        }
        self
    }
}

/// Metadata provider connection settings.
///
/// # Defaults
///
/// - `endpoint`: none (lookups fail with a configuration error)
/// - `timeout_secs`: `30`
/// - `user_agent`: `"playfetch/<version>"`
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ProviderConfig {
    pub fn settings(&self) -> HttpProviderSettings {
        HttpProviderSettings {
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.clone(),
        }
    }
}

/// Catalog view settings.
///
/// # Defaults
///
/// - `page_size`: `6` (clamped to 1..=50)
/// - `redirect_base`: `"https://nebhulapk.vercel.app/es"`
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(
        default = "default_page_size",
        deserialize_with = "deserialize_page_size"
    )]
    pub page_size: usize,
    #[serde(default = "default_redirect_base")]
    pub redirect_base: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            redirect_base: default_redirect_base(),
        }
    }
}

// Default value functions
const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("playfetch/", env!("CARGO_PKG_VERSION")).to_string()
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_redirect_base() -> String {
    DEFAULT_REDIRECT_BASE.to_string()
}

/// Page size bounds
const MIN_PAGE_SIZE: usize = 1;
const MAX_PAGE_SIZE: usize = 50;

fn validate_page_size(size: usize) -> usize {
    let clamped = size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE);
    if clamped != size {
        tracing::warn!(
            "page_size {} outside {}..={}, using {}",
            size,
            MIN_PAGE_SIZE,
            MAX_PAGE_SIZE,
            clamped
        );
    }
    clamped
}

fn deserialize_page_size<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let size = usize::deserialize(deserializer)?;
    Ok(validate_page_size(size))
}
