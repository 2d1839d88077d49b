//! Port definitions for everything host-facing.
//!
//! The core never reads process-wide globals. Browser- or shell-backed
//! implementations of these traits live with the embedding application;
//! the in-repo implementations are fixed snapshots and no-ops for tests
//! and shell-less contexts.

mod external_view;
mod host_environment;
mod route_history;
mod screen_element;

pub use external_view::{ExternalView, ExternalViewError, ExternalViewEvent, ExternalViewSink};
pub use host_environment::{HostEnvironment, StaticEnvironment};
pub use route_history::{NoopHistory, RouteHistory};
pub use screen_element::{BoundingRect, ScreenElement};
