use crate::error::{FinderError, Result};
use crate::locale::Locale;
use crate::package::parse_input;
use crate::provider::{LookupResult, MetadataProvider};
use std::sync::Arc;

/// Base of the fabricated download link.
pub const DOWNLOAD_BASE: &str = "https://d.apkpure.com/b/APK";

/// File name suggested for downloads.
pub const DOWNLOAD_FILENAME: &str = "your_app.apk";

/// Builds the download link for an app. The target is never verified.
///
/// # Examples
///
/// ```
/// use playfetch_core::gateway::download_url;
///
/// assert_eq!(
///     download_url("com.whatsapp"),
///     "https://d.apkpure.com/b/APK/com.whatsapp?version=latest"
/// );
/// ```
pub fn download_url(app_id: &str) -> String {
    format!("{}/{}?version=latest", DOWNLOAD_BASE, app_id)
}

/// Turns raw user input into a usable lookup result.
///
/// Validation happens before any network activity. The provider is called
/// once; its answer is accepted only when the app is free and not limited to
/// pre-registration.
#[derive(Clone)]
pub struct LookupGateway {
    provider: Arc<dyn MetadataProvider>,
}

impl LookupGateway {
    pub fn new(provider: Arc<dyn MetadataProvider>) -> Self {
        Self { provider }
    }

    /// Looks up the app named by `input`.
    ///
    /// # Errors
    ///
    /// - [`FinderError::InvalidInput`] for malformed input (no request is sent)
    /// - a transport-kind error if the provider call fails
    /// - [`FinderError::Unavailable`] if the app is paid or pre-registration only
    pub async fn lookup(&self, input: &str, locale: Locale) -> Result<LookupResult> {
        let package = parse_input(input)?;
        let mut result = self.provider.fetch_app(&package, locale).await?;

        if !result.is_usable() {
            tracing::debug!(
                package = %package,
                free = result.free,
                preregister = result.preregister,
                "app not downloadable"
            );
            return Err(FinderError::Unavailable {
                package: package.into_inner(),
            });
        }

        if result.app_id.is_empty() {
            result.app_id = package.into_inner();
        }

        Ok(result)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::package::PackageId;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Canned provider keyed by package name, with optional per-package delay.
    #[derive(Default)]
    pub(crate) struct MockProvider {
        responses: HashMap<String, (Duration, std::result::Result<LookupResult, u16>)>,
        pub(crate) calls: Mutex<Vec<(String, Locale)>>,
    }

    impl MockProvider {
        pub(crate) fn with_app(mut self, package: &str, result: LookupResult) -> Self {
            self.responses
                .insert(package.to_string(), (Duration::ZERO, Ok(result)));
            self
        }

        pub(crate) fn with_delayed_app(
            mut self,
            package: &str,
            delay: Duration,
            result: LookupResult,
        ) -> Self {
            self.responses
                .insert(package.to_string(), (delay, Ok(result)));
            self
        }

        pub(crate) fn with_status(mut self, package: &str, status: u16) -> Self {
            self.responses
                .insert(package.to_string(), (Duration::ZERO, Err(status)));
            self
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl MetadataProvider for MockProvider {
        async fn fetch_app(&self, package: &PackageId, locale: Locale) -> Result<LookupResult> {
            self.calls
                .lock()
                .unwrap()
                .push((package.to_string(), locale));

            let (delay, response) = self
                .responses
                .get(package.as_str())
                .cloned()
                .unwrap_or((Duration::ZERO, Err(404)));

            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            response.map_err(|status| FinderError::ProviderStatus {
                package: package.to_string(),
                status,
            })
        }
    }

    pub(crate) fn app(app_id: &str, free: bool, preregister: bool) -> LookupResult {
        LookupResult {
            app_id: app_id.to_string(),
            title: Some(format!("{app_id} title")),
            free,
            preregister,
            ..LookupResult::default()
        }
    }
}
