//! External browser-view capability port.
//!
//! Packaged shells can present a URL in a system-provided in-app browser
//! view. The capability itself (plugin bridge, view controller) is an
//! external collaborator; this module owns only the signal contract the
//! opener reacts to.
//!
//! # Wire Format
//!
//! Events are serialized with an `event` tag, matching what the shell
//! bridge reports:
//!
//! ```json
//! { "event": "closed" }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle signals reported by the host view while it is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ExternalViewEvent {
    /// The view was presented.
    Opened,
    /// The requested URL finished loading.
    Loaded,
    /// The user dismissed the view.
    Closed,
}

/// Errors surfaced by the external view capability.
#[derive(Debug, Error)]
pub enum ExternalViewError {
    /// The host exposes no external view (plain web, or plugin missing).
    #[error("external view is not available in this host")]
    Unavailable,

    /// The capability reported a failure while presenting the view.
    #[error("external view failed: {0}")]
    Failed(String),
}

/// Port for the shell's external browser view.
#[async_trait]
pub trait ExternalView: Send + Sync {
    /// Whether the host can present an external view at all.
    async fn is_available(&self) -> bool;

    /// Present `url`, reporting lifecycle signals through `sink` until the
    /// view session ends.
    async fn show(
        &self,
        url: &str,
        sink: &dyn ExternalViewSink,
    ) -> Result<(), ExternalViewError>;
}

/// Receiver for view lifecycle signals.
pub trait ExternalViewSink: Send + Sync {
    /// Called once per signal, in the order the host reports them.
    fn event(&self, event: ExternalViewEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_wire_format() {
        let json = serde_json::to_string(&ExternalViewEvent::Closed).unwrap();
        assert_eq!(json, r#"{"event":"closed"}"#);

        let event: ExternalViewEvent = serde_json::from_str(r#"{"event":"opened"}"#).unwrap();
        assert_eq!(event, ExternalViewEvent::Opened);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ExternalViewError::Unavailable.to_string(),
            "external view is not available in this host"
        );
        assert_eq!(
            ExternalViewError::Failed("plugin crashed".to_string()).to_string(),
            "external view failed: plugin crashed"
        );
    }
}
