//! Side-channel actions on catalog entries.
//!
//! These never touch the view state; they only hand work to a [`Navigator`].

use crate::error::{CatalogError, Result};
use crate::seed::find;
use crate::types::CatalogEntry;
use playfetch_core::{Messages, Navigator};

/// Default target of the "download" redirect.
pub const DEFAULT_REDIRECT_BASE: &str = "https://nebhulapk.vercel.app/es";

/// Builds `<base>?package=<package>` with the package id URL-encoded.
///
/// # Examples
///
/// ```
/// use playfetch_catalog::actions::redirect_url;
///
/// assert_eq!(
///     redirect_url("https://nebhulapk.vercel.app/es", "com.whatsapp"),
///     "https://nebhulapk.vercel.app/es?package=com.whatsapp"
/// );
/// ```
pub fn redirect_url(base: &str, package_id: &str) -> String {
    format!("{}?package={}", base, urlencoding::encode(package_id))
}

fn entry(catalog: &[CatalogEntry], id: u32) -> Result<&CatalogEntry> {
    find(catalog, id).ok_or(CatalogError::UnknownEntry(id))
}

/// Copies an entry's package id to the clipboard.
///
/// Returns the transient notice to display.
pub fn copy_package(
    catalog: &[CatalogEntry],
    navigator: &dyn Navigator,
    id: u32,
    messages: &'static Messages,
) -> Result<&'static str> {
    let entry = entry(catalog, id)?;
    navigator.copy_to_clipboard(entry.package_id);
    Ok(messages.copied)
}

/// Redirects to the external download page for an entry.
///
/// Returns the URL handed to the navigator.
pub fn redirect_to_download(
    catalog: &[CatalogEntry],
    navigator: &dyn Navigator,
    id: u32,
    base: &str,
) -> Result<String> {
    let entry = entry(catalog, id)?;
    let url = redirect_url(base, entry.package_id);
    tracing::debug!(package = entry.package_id, %url, "redirecting to download page");
    navigator.redirect(&url);
    Ok(url)
}
