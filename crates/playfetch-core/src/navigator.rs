//! Navigation, download, and clipboard side effects.
//!
//! Front ends implement [`Navigator`] for whatever host they run in (a
//! terminal, a browser bridge, a test recorder). Every action is
//! fire-and-forget: the core never learns whether it succeeded.

use serde::Deserialize;
use std::fmt;
use std::sync::Mutex;

/// Side-effect capability injected into lookups and catalog actions.
pub trait Navigator: Send + Sync {
    /// Returns to the previous page in the host's history.
    fn navigate_back(&self);

    /// Starts a file download from `url`, saved as `filename`.
    fn trigger_file_download(&self, url: &str, filename: &str);

    /// Writes plain text to the clipboard.
    fn copy_to_clipboard(&self, text: &str);

    /// Leaves the current page for `url`.
    fn redirect(&self, url: &str);
}

/// One side effect requested from a [`Navigator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigatorAction {
    Back,
    Download { url: String, filename: String },
    Copy(String),
    Redirect(String),
}

impl fmt::Display for NavigatorAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Back => f.write_str("back"),
            Self::Download { url, filename } => write!(f, "download: {url} -> {filename}"),
            Self::Copy(text) => write!(f, "copy: {text}"),
            Self::Redirect(url) => write!(f, "redirect: {url}"),
        }
    }
}

/// Navigator that records requested actions instead of performing them.
///
/// Used for dry runs and in tests.
///
/// # Examples
///
/// ```
/// use playfetch_core::navigator::{Navigator, NavigatorAction, RecordingNavigator};
///
/// let nav = RecordingNavigator::default();
/// nav.copy_to_clipboard("com.whatsapp");
/// assert_eq!(nav.actions(), vec![NavigatorAction::Copy("com.whatsapp".into())]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    actions: Mutex<Vec<NavigatorAction>>,
}

impl RecordingNavigator {
    /// Returns a snapshot of recorded actions, oldest first.
    pub fn actions(&self) -> Vec<NavigatorAction> {
        self.actions
            .lock()
            .map(|actions| actions.clone())
            .unwrap_or_default()
    }

    fn record(&self, action: NavigatorAction) {
        if let Ok(mut actions) = self.actions.lock() {
            actions.push(action);
        }
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_back(&self) {
        self.record(NavigatorAction::Back);
    }

    fn trigger_file_download(&self, url: &str, filename: &str) {
        self.record(NavigatorAction::Download {
            url: url.to_string(),
            filename: filename.to_string(),
        });
    }

    fn copy_to_clipboard(&self, text: &str) {
        self.record(NavigatorAction::Copy(text.to_string()));
    }

    fn redirect(&self, url: &str) {
        self.record(NavigatorAction::Redirect(url.to_string()));
    }
}

/// Where the "back" control leads.
///
/// Visitors who arrived from the home site are sent back through history;
/// everyone else lands on the fallback URL.
///
/// # Defaults
///
/// - `home_host`: `"nebhula.com"`
/// - `fallback_url`: `"https://nebhula.com#seccion-especifica"`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReturnLink {
    #[serde(default = "default_home_host")]
    pub home_host: String,
    #[serde(default = "default_fallback_url")]
    pub fallback_url: String,
}

impl Default for ReturnLink {
    fn default() -> Self {
        Self {
            home_host: default_home_host(),
            fallback_url: default_fallback_url(),
        }
    }
}

fn default_home_host() -> String {
    "nebhula.com".to_string()
}

fn default_fallback_url() -> String {
    "https://nebhula.com#seccion-especifica".to_string()
}

impl ReturnLink {
    /// Goes back in history when the visitor came from the home host and has
    /// somewhere to go back to; otherwise redirects to the fallback.
    pub fn go_back(&self, navigator: &dyn Navigator, referrer: Option<&str>, history_len: usize) {
        let from_home = referrer.is_some_and(|r| r.contains(self.home_host.as_str()));

        if from_home && history_len > 1 {
            navigator.navigate_back();
        } else {
            tracing::debug!(?referrer, history_len, "no usable history, using fallback");
            navigator.redirect(&self.fallback_url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_navigator_order() {
        let nav = RecordingNavigator::default();
        nav.copy_to_clipboard("com.a");
        nav.trigger_file_download("https://x/y", "your_app.apk");
        nav.navigate_back();
        nav.redirect("https://z");

        assert_eq!(
            nav.actions(),
            vec![
                NavigatorAction::Copy("com.a".into()),
                NavigatorAction::Download {
                    url: "https://x/y".into(),
                    filename: "your_app.apk".into(),
                },
                NavigatorAction::Back,
                NavigatorAction::Redirect("https://z".into()),
            ]
        );
    }

    #[test]
    fn test_action_display() {
        let action = NavigatorAction::Download {
            url: "https://d.apkpure.com/b/APK/com.x?version=latest".into(),
            filename: "your_app.apk".into(),
        };
        assert_eq!(
            action.to_string(),
            "download: https://d.apkpure.com/b/APK/com.x?version=latest -> your_app.apk"
        );
        assert_eq!(NavigatorAction::Back.to_string(), "back");
    }

    #[test]
    fn test_go_back_from_home_with_history() {
        let nav = RecordingNavigator::default();
        ReturnLink::default().go_back(&nav, Some("https://nebhula.com/apps"), 3);
        assert_eq!(nav.actions(), vec![NavigatorAction::Back]);
    }

    #[test]
    fn test_go_back_from_home_without_history() {
        let nav = RecordingNavigator::default();
        ReturnLink::default().go_back(&nav, Some("https://nebhula.com/"), 1);
        assert_eq!(
            nav.actions(),
            vec![NavigatorAction::Redirect(
                "https://nebhula.com#seccion-especifica".into()
            )]
        );
    }

    #[test]
    fn test_go_back_from_elsewhere() {
        let nav = RecordingNavigator::default();
        ReturnLink::default().go_back(&nav, Some("https://search.example/"), 5);
        ReturnLink::default().go_back(&nav, None, 5);
        assert_eq!(nav.actions().len(), 2);
        assert!(
            nav.actions()
                .iter()
                .all(|a| matches!(a, NavigatorAction::Redirect(_)))
        );
    }

    #[test]
    fn test_return_link_deserialization() {
        let link: ReturnLink = serde_json::from_str(r#"{"home_host": "example.org"}"#).unwrap();
        assert_eq!(link.home_host, "example.org");
        assert_eq!(link.fallback_url, "https://nebhula.com#seccion-especifica");
    }
}
