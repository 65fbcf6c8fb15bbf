//! Per-view lookup state.
//!
//! A session owns what the lookup form currently shows. Overlapping
//! submissions are resolved by generation: only the most recently started
//! submission may publish its outcome.

use crate::error::{ErrorKind, FinderError, Result};
use crate::gateway::{DOWNLOAD_FILENAME, LookupGateway, download_url};
use crate::locale::Locale;
use crate::navigator::Navigator;
use crate::provider::LookupResult;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// What the lookup view is showing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LookupState {
    #[default]
    Idle,
    Loading,
    Ready(LookupResult),
    Failed { kind: ErrorKind, message: String },
}

/// Result of a submission that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Ready(LookupResult),
    /// A newer submission started before this one finished; its outcome was
    /// discarded.
    Superseded,
}

#[derive(Debug, Default)]
struct Slot {
    generation: u64,
    state: LookupState,
}

pub struct LookupSession {
    gateway: LookupGateway,
    slot: Mutex<Slot>,
}

/// Settles the state of a submission whose future was dropped mid-flight.
struct InFlight<'a> {
    slot: &'a Mutex<Slot>,
    generation: u64,
    locale: Locale,
    settled: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.generation == self.generation {
            tracing::debug!(generation = self.generation, "lookup cancelled");
            slot.state = LookupState::Failed {
                kind: ErrorKind::Transport,
                message: self.locale.messages().fetch_failed.to_string(),
            };
        }
    }
}

impl LookupSession {
    pub fn new(gateway: LookupGateway) -> Self {
        Self {
            gateway,
            slot: Mutex::new(Slot::default()),
        }
    }

    fn slot(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> LookupState {
        self.slot().state.clone()
    }

    /// Runs one lookup and publishes its outcome unless superseded.
    ///
    /// The previous result is cleared as soon as the submission starts.
    /// Failure messages are stored in the language of `locale`. Dropping the
    /// returned future before it completes leaves a localized fetch failure
    /// in place of `Loading`, unless a newer submission has started.
    ///
    /// # Errors
    ///
    /// Returns the lookup error when this submission is still the latest.
    /// Errors of superseded submissions are dropped.
    pub async fn submit(&self, input: &str, locale: Locale) -> Result<LookupOutcome> {
        let generation = {
            let mut slot = self.slot();
            slot.generation += 1;
            slot.state = LookupState::Loading;
            slot.generation
        };
        let mut in_flight = InFlight {
            slot: &self.slot,
            generation,
            locale,
            settled: false,
        };

        let outcome = self.gateway.lookup(input, locale).await;
        in_flight.settled = true;

        let mut slot = self.slot();
        if slot.generation != generation {
            tracing::warn!(generation, "discarding superseded lookup");
            return Ok(LookupOutcome::Superseded);
        }

        match outcome {
            Ok(result) => {
                slot.state = LookupState::Ready(result.clone());
                Ok(LookupOutcome::Ready(result))
            }
            Err(err) => {
                slot.state = LookupState::Failed {
                    kind: err.kind(),
                    message: err.user_message(locale.messages()),
                };
                Err(err)
            }
        }
    }

    /// Hands the download link of the current result to `navigator`.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::NoUsableResult`] when nothing usable is shown;
    /// the navigator is not touched in that case.
    pub fn download(&self, navigator: &dyn Navigator) -> Result<String> {
        let slot = self.slot();
        let LookupState::Ready(result) = &slot.state else {
            return Err(FinderError::NoUsableResult);
        };

        let url = download_url(&result.app_id);
        navigator.trigger_file_download(&url, DOWNLOAD_FILENAME);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::test_support::{MockProvider, app};
    use crate::navigator::{NavigatorAction, RecordingNavigator};
    use std::sync::Arc;
    use std::time::Duration;

    fn session(provider: MockProvider) -> LookupSession {
        LookupSession::new(LookupGateway::new(Arc::new(provider)))
    }

    #[tokio::test]
    async fn test_initial_state_is_idle() {
        let session = session(MockProvider::default());
        assert_eq!(session.state(), LookupState::Idle);
    }

    #[tokio::test]
    async fn test_submit_ready_then_download() {
        let session =
            session(MockProvider::default().with_app("com.x", app("com.x", true, false)));

        let outcome = session.submit("com.x", Locale::En).await.unwrap();
        assert!(matches!(outcome, LookupOutcome::Ready(ref r) if r.app_id == "com.x"));
        assert!(matches!(session.state(), LookupState::Ready(_)));

        let nav = RecordingNavigator::default();
        let url = session.download(&nav).unwrap();
        assert_eq!(url, "https://d.apkpure.com/b/APK/com.x?version=latest");
        assert_eq!(
            nav.actions(),
            vec![NavigatorAction::Download {
                url,
                filename: "your_app.apk".into(),
            }]
        );
    }

    #[tokio::test]
    async fn test_failure_is_localized_and_clears_result() {
        let session = session(
            MockProvider::default()
                .with_app("com.x", app("com.x", true, false))
                .with_app("com.paid", app("com.paid", false, false)),
        );

        session.submit("com.x", Locale::En).await.unwrap();
        let err = session.submit("com.paid", Locale::Es).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unavailable);

        assert_eq!(
            session.state(),
            LookupState::Failed {
                kind: ErrorKind::Unavailable,
                message: Locale::Es.messages().unavailable.to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_download_without_result() {
        let session = session(MockProvider::default());
        let nav = RecordingNavigator::default();

        let err = session.download(&nav).unwrap_err();
        assert!(matches!(err, FinderError::NoUsableResult));
        assert!(nav.actions().is_empty());

        let _ = session.submit("bad input", Locale::En).await;
        assert!(session.download(&nav).is_err());
        assert!(nav.actions().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_earlier_submission_is_superseded() {
        let session = session(
            MockProvider::default()
                .with_delayed_app("com.slow", Duration::from_millis(500), app("com.slow", true, false))
                .with_delayed_app("com.fast", Duration::from_millis(10), app("com.fast", true, false)),
        );

        let (slow, fast) = tokio::join!(
            session.submit("com.slow", Locale::En),
            session.submit("com.fast", Locale::En),
        );

        assert_eq!(slow.unwrap(), LookupOutcome::Superseded);
        assert!(matches!(fast.unwrap(), LookupOutcome::Ready(_)));
        match session.state() {
            LookupState::Ready(result) => assert_eq!(result.app_id, "com.fast"),
            other => panic!("Expected Ready, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_earlier_submission_is_superseded() {
        let session = session(
            MockProvider::default()
                .with_delayed_app("com.fast", Duration::from_millis(10), app("com.fast", true, false))
                .with_status("com.broken", 500),
        );

        let (fast, broken) = tokio::join!(
            session.submit("com.fast", Locale::En),
            async {
                tokio::time::sleep(Duration::from_millis(1)).await;
                session.submit("com.broken", Locale::En).await
            },
        );

        assert_eq!(fast.unwrap(), LookupOutcome::Superseded);
        assert!(broken.is_err());
        assert!(matches!(
            session.state(),
            LookupState::Failed {
                kind: ErrorKind::Transport,
                ..
            }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timed_out_submission_does_not_stay_loading() {
        let session = session(MockProvider::default().with_delayed_app(
            "com.slow",
            Duration::from_secs(5),
            app("com.slow", true, false),
        ));

        let result =
            tokio::time::timeout(Duration::from_secs(1), session.submit("com.slow", Locale::Fr))
                .await;

        assert!(result.is_err());
        assert_eq!(
            session.state(),
            LookupState::Failed {
                kind: ErrorKind::Transport,
                message: Locale::Fr.messages().fetch_failed.to_string(),
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelling_superseded_submission_keeps_newer_result() {
        let session = session(
            MockProvider::default()
                .with_delayed_app("com.slow", Duration::from_secs(5), app("com.slow", true, false))
                .with_app("com.fast", app("com.fast", true, false)),
        );

        let (slow, fast) = tokio::join!(
            tokio::time::timeout(Duration::from_secs(1), session.submit("com.slow", Locale::En)),
            async {
                tokio::time::sleep(Duration::from_millis(10)).await;
                session.submit("com.fast", Locale::En).await
            },
        );

        assert!(slow.is_err());
        assert!(matches!(fast.unwrap(), LookupOutcome::Ready(_)));
        match session.state() {
            LookupState::Ready(result) => assert_eq!(result.app_id, "com.fast"),
            other => panic!("Expected Ready, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_is_visible_while_in_flight() {
        let session = Arc::new(session(MockProvider::default().with_delayed_app(
            "com.x",
            Duration::from_millis(50),
            app("com.x", true, false),
        )));

        let task = tokio::spawn({
            let session = Arc::clone(&session);
            async move { session.submit("com.x", Locale::En).await }
        });
        tokio::time::sleep(Duration::from_millis(5)).await;
        assert_eq!(session.state(), LookupState::Loading);

        assert!(matches!(task.await.unwrap().unwrap(), LookupOutcome::Ready(_)));
        assert!(matches!(session.state(), LookupState::Ready(_)));
    }
}
