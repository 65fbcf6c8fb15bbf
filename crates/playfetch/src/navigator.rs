//! Navigator that reports side effects as lines of text.

use playfetch_core::{Navigator, NavigatorAction};
use std::io::Write;
use std::sync::Mutex;

/// Writes one line per navigator action, e.g. `redirect: https://...`.
///
/// A terminal has no history, clipboard or download manager, so the actions
/// are reported for the caller (or a wrapping script) to carry out.
pub struct TerminalNavigator<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> TerminalNavigator<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn emit(&self, action: NavigatorAction) {
        let mut out = self
            .out
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Err(e) = writeln!(out, "{action}") {
            tracing::warn!("failed to report navigator action '{}': {}", action, e);
        }
    }
}

impl TerminalNavigator<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> Navigator for TerminalNavigator<W> {
    fn navigate_back(&self) {
        self.emit(NavigatorAction::Back);
    }

    fn trigger_file_download(&self, url: &str, filename: &str) {
        self.emit(NavigatorAction::Download {
            url: url.to_string(),
            filename: filename.to_string(),
        });
    }

    fn copy_to_clipboard(&self, text: &str) {
        self.emit(NavigatorAction::Copy(text.to_string()));
    }

    fn redirect(&self, url: &str) {
        self.emit(NavigatorAction::Redirect(url.to_string()));
    }
}
