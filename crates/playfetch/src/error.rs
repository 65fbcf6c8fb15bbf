use playfetch_catalog::CatalogError;
use playfetch_core::{ErrorKind, FinderError, Locale};
use std::path::PathBuf;
use thiserror::Error;

/// Error types for the playfetch command line.
///
/// Wraps the library errors and adds configuration failures. Every variant
/// maps to a process exit code via [`CliError::exit_code`].
#[derive(Error, Debug)]
pub enum CliError {
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no provider endpoint configured (set provider.endpoint or {})", crate::config::ENDPOINT_ENV)]
    MissingEndpoint,

    #[error(transparent)]
    Finder(#[from] FinderError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for `Result<T, CliError>`.
pub type Result<T> = std::result::Result<T, CliError>;

impl CliError {
    /// `1` for lookup and catalog outcomes the user can fix by resubmitting,
    /// `2` for configuration and usage problems.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Finder(err) => match err.kind() {
                ErrorKind::Validation | ErrorKind::Unavailable | ErrorKind::Transport => 1,
                ErrorKind::Usage => 2,
            },
            Self::Catalog(CatalogError::UnknownEntry(_)) => 1,
            _ => 2,
        }
    }

    /// Message printed to the user, localized where a translation exists.
    pub fn user_message(&self, locale: Locale) -> String {
        match self {
            Self::Finder(err) => err.user_message(locale.messages()),
            other => other.to_string(),
        }
    }
}
