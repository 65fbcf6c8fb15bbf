//! Core abstractions for playfetch.
//!
//! This crate turns user input (a package name or a Play Store URL) into app
//! metadata fetched from an external provider, and decides whether that app
//! can be offered for download.
//!
//! # Architecture
//!
//! playfetch-core defines:
//! - **Input handling**: `PackageId`, `parse_input` (validation and URL extraction)
//! - **Providers**: the `MetadataProvider` trait and its HTTP implementation
//! - **Gateway & session**: `LookupGateway` for single lookups, `LookupSession`
//!   for the view state with last-submission-wins semantics
//! - **Side effects**: the injectable `Navigator` capability
//! - **Locales**: the supported locales and their message bundles
//! - **Error Types**: `FinderError` with a user-facing classification
//!
//! # Examples
//!
//! Plugging in a custom provider:
//!
//! ```no_run
//! use playfetch_core::{LookupGateway, LookupResult, Locale, MetadataProvider, PackageId};
//! use async_trait::async_trait;
//! use std::sync::Arc;
//!
//! struct StaticProvider;
//!
//! #[async_trait]
//! impl MetadataProvider for StaticProvider {
//!     async fn fetch_app(
//!         &self,
//!         package: &PackageId,
//!         _locale: Locale,
//!     ) -> playfetch_core::Result<LookupResult> {
//!         Ok(LookupResult {
//!             app_id: package.to_string(),
//!             free: true,
//!             ..LookupResult::default()
//!         })
//!     }
//! }
//!
//! # async fn example() -> playfetch_core::Result<()> {
//! let gateway = LookupGateway::new(Arc::new(StaticProvider));
//! let app = gateway.lookup("com.whatsapp", Locale::En).await?;
//! assert_eq!(app.app_id, "com.whatsapp");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod gateway;
pub mod locale;
pub mod navigator;
pub mod package;
pub mod provider;
pub mod session;

// Re-export commonly used types
pub use error::{ErrorKind, FinderError, Result};
pub use gateway::{DOWNLOAD_FILENAME, LookupGateway, download_url};
pub use locale::{Locale, Messages};
pub use navigator::{Navigator, NavigatorAction, RecordingNavigator, ReturnLink};
pub use package::{PackageId, extract_package_id, is_valid_input, parse_input, validate_input};
pub use provider::{HttpProvider, HttpProviderSettings, LookupResult, MetadataProvider};
pub use session::{LookupOutcome, LookupSession, LookupState};
