use crate::locale::Messages;
use thiserror::Error;

/// Core error types for playfetch.
///
/// Every failure of a lookup attempt is represented here. Errors are terminal
/// per attempt: nothing is retried, and the caller is expected to show the
/// localized message from [`FinderError::user_message`] inline.
///
/// # Examples
///
/// ```
/// use playfetch_core::error::{ErrorKind, FinderError};
///
/// let error = FinderError::InvalidInput {
///     input: "com.exa_mple".into(),
/// };
/// assert_eq!(error.kind(), ErrorKind::Validation);
/// ```
#[derive(Error, Debug)]
pub enum FinderError {
    #[error("invalid input format: {input:?}")]
    InvalidInput { input: String },

    #[error("download not currently possible for {package}")]
    Unavailable { package: String },

    #[error("fetch failed for {package}: {source}")]
    FetchFailed {
        package: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("provider returned HTTP {status} for {package}")]
    ProviderStatus { package: String, status: u16 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),

    #[error("provider endpoint must use HTTPS: {0}")]
    InsecureEndpoint(String),

    #[error("no usable lookup result to download")]
    NoUsableResult,
}

/// Coarse classification of a [`FinderError`].
///
/// Mirrors what the user sees: malformed input, an app that cannot be
/// offered, or a failed round trip to the provider. `Usage` covers
/// programming and configuration mistakes that never reach the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Unavailable,
    Transport,
    Usage,
}

impl FinderError {
    /// Classifies this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::Validation,
            Self::Unavailable { .. } => ErrorKind::Unavailable,
            Self::FetchFailed { .. } | Self::ProviderStatus { .. } | Self::Json(_) => {
                ErrorKind::Transport
            }
            Self::UnsupportedLocale(_) | Self::InsecureEndpoint(_) | Self::NoUsableResult => {
                ErrorKind::Usage
            }
        }
    }

    /// Returns the inline message shown to the user in the given bundle.
    ///
    /// Usage errors have no translated text and fall back to the English
    /// `Display` output.
    pub fn user_message(&self, messages: &Messages) -> String {
        match self.kind() {
            ErrorKind::Validation => messages.invalid_input.to_string(),
            ErrorKind::Unavailable => messages.unavailable.to_string(),
            ErrorKind::Transport => messages.fetch_failed.to_string(),
            ErrorKind::Usage => self.to_string(),
        }
    }
}

/// Convenience type alias for `Result<T, FinderError>`.
pub type Result<T> = std::result::Result<T, FinderError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    #[test]
    fn test_error_display() {
        let error = FinderError::Unavailable {
            package: "com.example".into(),
        };
        assert_eq!(
            error.to_string(),
            "download not currently possible for com.example"
        );
    }

    #[test]
    fn test_invalid_input_display() {
        let error = FinderError::InvalidInput {
            input: "not valid".into(),
        };
        assert_eq!(error.to_string(), "invalid input format: \"not valid\"");
    }

    #[test]
    fn test_provider_status() {
        let error = FinderError::ProviderStatus {
            package: "com.whatsapp".into(),
            status: 500,
        };
        assert!(error.to_string().contains("HTTP 500"));
        assert_eq!(error.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: FinderError = json_err.into();
        assert!(error.to_string().contains("JSON error"));
        assert_eq!(error.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(
            FinderError::InvalidInput { input: "x".into() }.kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            FinderError::Unavailable { package: "x".into() }.kind(),
            ErrorKind::Unavailable
        );
        assert_eq!(FinderError::NoUsableResult.kind(), ErrorKind::Usage);
        assert_eq!(
            FinderError::UnsupportedLocale("xx".into()).kind(),
            ErrorKind::Usage
        );
    }

    #[test]
    fn test_user_message_is_localized() {
        let error = FinderError::Unavailable {
            package: "com.x".into(),
        };
        let en = error.user_message(Locale::En.messages());
        let es = error.user_message(Locale::Es.messages());
        assert_eq!(en, Locale::En.messages().unavailable);
        assert_eq!(es, Locale::Es.messages().unavailable);
        assert_ne!(en, es);
    }

    #[test]
    fn test_user_message_usage_falls_back_to_display() {
        let error = FinderError::NoUsableResult;
        assert_eq!(
            error.user_message(Locale::Fr.messages()),
            "no usable lookup result to download"
        );
    }
}
