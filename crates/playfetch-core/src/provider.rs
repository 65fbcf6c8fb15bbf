//! Metadata provider interface and its HTTP implementation.
//!
//! The provider wraps a Play Store scraping service. It is reached with a
//! single `POST` carrying `{"packageName", "lang"}` and answers with the
//! scraper's loosely typed JSON app record.

use crate::error::{FinderError, Result};
use crate::locale::Locale;
use crate::package::PackageId;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate};
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Validates that an endpoint uses HTTPS.
///
/// In test mode, HTTP endpoints are allowed for mockito compatibility.
#[inline]
fn ensure_https(url: &str) -> Result<()> {
    #[cfg(not(test))]
    if !url.starts_with("https://") {
        return Err(FinderError::InsecureEndpoint(url.to_string()));
    }
    #[cfg(test)]
    let _ = url;
    Ok(())
}

/// App metadata returned by the provider for one lookup.
///
/// Only `free`, `preregister` and `app_id` drive behaviour; everything else is
/// display data and may be missing. The two flags use JavaScript truthiness
/// because the upstream payload is not strictly typed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    #[serde(default)]
    pub app_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub developer: Option<String>,
    #[serde(default)]
    pub developer_website: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub installs: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "lenient_millis")]
    pub updated: Option<i64>,
    #[serde(default, deserialize_with = "truthy")]
    pub free: bool,
    #[serde(default, deserialize_with = "truthy")]
    pub preregister: bool,
}

impl LookupResult {
    /// A result is usable when the app is free and not pre-registration only.
    pub fn is_usable(&self) -> bool {
        self.free && !self.preregister
    }

    /// Last update as a UTC calendar date.
    pub fn updated_date(&self) -> Option<NaiveDate> {
        self.updated
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.date_naive())
    }

    /// Last update formatted as `dd/mm/yyyy`.
    pub fn updated_display(&self) -> Option<String> {
        self.updated_date()
            .map(|date| date.format("%d/%m/%Y").to_string())
    }
}

fn truthy<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

fn lenient_millis<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Source of live app metadata.
///
/// Implementations make exactly one request per call and never retry;
/// failures are reported to the caller as errors.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Fetches metadata for `package`, localized for `locale`.
    ///
    /// # Errors
    ///
    /// Returns a transport-kind [`FinderError`] if the request fails, the
    /// provider answers with a non-success status, or the body cannot be
    /// decoded.
    async fn fetch_app(&self, package: &PackageId, locale: Locale) -> Result<LookupResult>;
}

/// Settings for [`HttpProvider`].
#[derive(Debug, Clone)]
pub struct HttpProviderSettings {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpProviderSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: concat!("playfetch/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProviderRequest<'a> {
    package_name: &'a str,
    lang: &'a str,
}

/// Provider backed by an HTTP scraping endpoint.
///
/// # Examples
///
/// ```no_run
/// use playfetch_core::locale::Locale;
/// use playfetch_core::package::parse_input;
/// use playfetch_core::provider::{HttpProvider, HttpProviderSettings, MetadataProvider};
///
/// # async fn example() -> playfetch_core::Result<()> {
/// let provider = HttpProvider::new("https://example.com/api/app", HttpProviderSettings::default())?;
/// let package = parse_input("com.whatsapp")?;
/// let app = provider.fetch_app(&package, Locale::En).await?;
/// println!("{:?}", app.title);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpProvider {
    endpoint: String,
    client: Client,
}

impl HttpProvider {
    /// Creates a provider for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::InsecureEndpoint`] if the endpoint is not HTTPS.
    pub fn new(endpoint: impl Into<String>, settings: HttpProviderSettings) -> Result<Self> {
        let endpoint = endpoint.into();
        ensure_https(&endpoint)?;

        let client = Client::builder()
            .user_agent(settings.user_agent)
            .timeout(settings.timeout)
            .build()
            .expect("failed to create HTTP client");

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl MetadataProvider for HttpProvider {
    async fn fetch_app(&self, package: &PackageId, locale: Locale) -> Result<LookupResult> {
        tracing::debug!(package = %package, locale = %locale, "requesting app metadata");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&ProviderRequest {
                package_name: package.as_str(),
                lang: locale.tag(),
            })
            .send()
            .await
            .map_err(|e| FinderError::FetchFailed {
                package: package.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(package = %package, %status, "provider rejected request");
            return Err(FinderError::ProviderStatus {
                package: package.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FinderError::FetchFailed {
                package: package.to_string(),
                source: e,
            })?;

        Ok(serde_json::from_slice(&body)?)
    }
}
