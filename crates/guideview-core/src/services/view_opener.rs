//! Deferred opener for the shell's external browser view.
//!
//! OAuth-style flows hand a URL to the shell's in-app browser after a short
//! caller-chosen delay (the shell rejects the call if it comes too early in
//! its own startup). The attempt is fire-and-forget: callers usually spawn
//! [`ViewOpener::open_after`] and walk away. There is no cancellation and no
//! retry; failures resolve the outcome and are logged, never propagated.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::ports::{ExternalView, ExternalViewError, ExternalViewEvent, ExternalViewSink};

/// Final resolution of one open attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalViewOutcome {
    /// The view was presented; nothing further was reported.
    Opened,
    /// The requested URL finished loading.
    Loaded,
    /// The user dismissed the view.
    Closed,
    /// The capability was unavailable or reported an error.
    Failed(String),
}

/// Callback invoked when the user dismisses the view.
pub type OnExit = Box<dyn FnOnce() + Send>;

/// Drives the external view capability on behalf of UI callers.
pub struct ViewOpener {
    view: Arc<dyn ExternalView>,
}

/// Sink that logs every signal and remembers the most recent one.
struct LastEventSink {
    last: Mutex<Option<ExternalViewEvent>>,
}

impl ExternalViewSink for LastEventSink {
    fn event(&self, event: ExternalViewEvent) {
        match event {
            ExternalViewEvent::Opened => tracing::info!("external view opened"),
            ExternalViewEvent::Loaded => tracing::info!("external view loaded"),
            ExternalViewEvent::Closed => tracing::info!("external view closed"),
        }
        *self.last.lock().expect("sink mutex poisoned") = Some(event);
    }
}

impl ViewOpener {
    /// Create an opener over the host's external view capability.
    #[must_use]
    pub fn new(view: Arc<dyn ExternalView>) -> Self {
        Self { view }
    }

    /// Attempt to open `url` after `delay`.
    ///
    /// Every lifecycle signal is logged as it arrives. `on_exit` runs only
    /// when the user dismisses the view. The returned outcome reflects the
    /// last signal seen, or the failure that ended the attempt.
    pub async fn open_after(
        &self,
        url: &str,
        delay: Duration,
        on_exit: Option<OnExit>,
    ) -> ExternalViewOutcome {
        tokio::time::sleep(delay).await;

        if !self.view.is_available().await {
            tracing::warn!("external view unavailable, dropping open of {url}");
            return ExternalViewOutcome::Failed(ExternalViewError::Unavailable.to_string());
        }

        let sink = LastEventSink {
            last: Mutex::new(None),
        };
        if let Err(err) = self.view.show(url, &sink).await {
            tracing::warn!("external view failed for {url}: {err}");
            return ExternalViewOutcome::Failed(err.to_string());
        }

        let last = sink.last.lock().expect("sink mutex poisoned").take();
        match last {
            Some(ExternalViewEvent::Closed) => {
                if let Some(on_exit) = on_exit {
                    on_exit();
                }
                ExternalViewOutcome::Closed
            }
            Some(ExternalViewEvent::Loaded) => ExternalViewOutcome::Loaded,
            Some(ExternalViewEvent::Opened) => ExternalViewOutcome::Opened,
            None => {
                tracing::warn!("external view reported no lifecycle signal for {url}");
                ExternalViewOutcome::Failed("no lifecycle signal from host view".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct ScriptedView {
        available: bool,
        events: Vec<ExternalViewEvent>,
        error: Option<String>,
    }

    #[async_trait]
    impl ExternalView for ScriptedView {
        async fn is_available(&self) -> bool {
            self.available
        }

        async fn show(
            &self,
            _url: &str,
            sink: &dyn ExternalViewSink,
        ) -> Result<(), ExternalViewError> {
            for event in &self.events {
                sink.event(*event);
            }
            match &self.error {
                Some(msg) => Err(ExternalViewError::Failed(msg.clone())),
                None => Ok(()),
            }
        }
    }

    fn opener(view: ScriptedView) -> ViewOpener {
        ViewOpener::new(Arc::new(view))
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_session_resolves_closed_and_fires_exit() {
        let opener = opener(ScriptedView {
            available: true,
            events: vec![
                ExternalViewEvent::Opened,
                ExternalViewEvent::Loaded,
                ExternalViewEvent::Closed,
            ],
            error: None,
        });

        let exited = Arc::new(AtomicBool::new(false));
        let flag = exited.clone();
        let outcome = opener
            .open_after(
                "https://example.org/oauth",
                Duration::from_millis(250),
                Some(Box::new(move || flag.store(true, Ordering::SeqCst))),
            )
            .await;

        assert_eq!(outcome, ExternalViewOutcome::Closed);
        assert!(exited.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_exit_callback_only_on_close() {
        let opener = opener(ScriptedView {
            available: true,
            events: vec![ExternalViewEvent::Opened, ExternalViewEvent::Loaded],
            error: None,
        });

        let exited = Arc::new(AtomicBool::new(false));
        let flag = exited.clone();
        let outcome = opener
            .open_after(
                "https://example.org/oauth",
                Duration::from_millis(250),
                Some(Box::new(move || flag.store(true, Ordering::SeqCst))),
            )
            .await;

        assert_eq!(outcome, ExternalViewOutcome::Loaded);
        assert!(!exited.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unavailable_capability_fails() {
        let opener = opener(ScriptedView {
            available: false,
            events: vec![],
            error: None,
        });

        let outcome = opener
            .open_after("https://example.org", Duration::from_secs(1), None)
            .await;

        assert_eq!(
            outcome,
            ExternalViewOutcome::Failed("external view is not available in this host".to_string())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_capability_error_fails() {
        let opener = opener(ScriptedView {
            available: true,
            events: vec![ExternalViewEvent::Opened],
            error: Some("view controller died".to_string()),
        });

        let outcome = opener
            .open_after("https://example.org", Duration::from_millis(50), None)
            .await;

        match outcome {
            ExternalViewOutcome::Failed(reason) => {
                assert!(reason.contains("view controller died"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_silent_capability_fails() {
        let opener = opener(ScriptedView {
            available: true,
            events: vec![],
            error: None,
        });

        let outcome = opener
            .open_after("https://example.org", Duration::from_millis(50), None)
            .await;

        assert_eq!(
            outcome,
            ExternalViewOutcome::Failed("no lifecycle signal from host view".to_string())
        );
    }
}
