//! Package identifier validation and extraction.
//!
//! Users may paste either a bare package name (`com.whatsapp`) or a Play Store
//! details URL. Both forms are accepted; the URL form is reduced to its `id`
//! query parameter.

use crate::error::{FinderError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

static PACKAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[a-zA-Z0-9]+\.)+[a-zA-Z0-9]+$").unwrap());

static STORE_URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://play\.google\.com/store/(apps|games)/details\?id=([^&]+)").unwrap()
});

/// A validated Play Store package identifier.
///
/// # Examples
///
/// ```
/// use playfetch_core::package::parse_input;
///
/// let id = parse_input("https://play.google.com/store/apps/details?id=com.whatsapp&hl=en").unwrap();
/// assert_eq!(id.as_str(), "com.whatsapp");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PackageId(String);

impl PackageId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PackageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Returns `true` if the trimmed input is a dotted package name or a store URL.
pub fn is_valid_input(input: &str) -> bool {
    let input = input.trim();
    PACKAGE_PATTERN.is_match(input) || STORE_URL_PATTERN.is_match(input)
}

/// Validates user input without extracting anything.
///
/// # Errors
///
/// Returns [`FinderError::InvalidInput`] when the trimmed input matches
/// neither the package-name nor the store-URL form.
pub fn validate_input(input: &str) -> Result<()> {
    if is_valid_input(input) {
        Ok(())
    } else {
        Err(FinderError::InvalidInput {
            input: input.trim().to_string(),
        })
    }
}

/// Extracts the package identifier from a store URL, or returns the trimmed
/// input unchanged when it is not one.
///
/// No validation is performed; pair with [`validate_input`] or use
/// [`parse_input`].
pub fn extract_package_id(input: &str) -> &str {
    let input = input.trim();
    STORE_URL_PATTERN
        .captures(input)
        .and_then(|caps| caps.get(2))
        .map_or(input, |m| m.as_str())
}

/// Validates input and extracts its package identifier.
///
/// # Errors
///
/// Returns [`FinderError::InvalidInput`] for malformed input. No network
/// activity happens before this succeeds.
pub fn parse_input(input: &str) -> Result<PackageId> {
    validate_input(input)?;
    Ok(PackageId(extract_package_id(input).to_string()))
}
