//! Host-environment classification and navigation plumbing for the voter
//! guide UI.
//!
//! The UI ships into two hosts: a plain web browser and a packaged mobile
//! shell wrapping the same markup. Styling and navigation differ between
//! them, so this crate answers "what host am I running in?" as a pure
//! decision table over an injected [`ports::HostEnvironment`] provider, and
//! routes the host-specific side effects (history pushes, the shell's
//! external browser view, layout diagnostics) through ports.
//!
//! Nothing here caches ambient state, touches globals, or owns shared
//! mutable state; every query re-reads the host through the provider.

#![deny(unused_crate_dependencies)]

pub mod diagnostics;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use diagnostics::enclosing_rectangle;
pub use domain::{AndroidSize, DeviceProfile, IphoneClass, Platform, PlatformKind};
pub use ports::{
    BoundingRect, ExternalView, ExternalViewError, ExternalViewEvent, ExternalViewSink,
    HostEnvironment, NoopHistory, RouteHistory, ScreenElement, StaticEnvironment,
};
pub use services::{
    ExternalViewOutcome, Navigator, OnExit, ViewOpener, android_size, asset_path, device_profile,
    device_type_string, has_iphone_notch, heading_size, iphone_class, is_android, is_cordova,
    is_ios, is_iphone_678, is_iphone_678_plus, is_iphone_x_or_xs, is_iphone_xr, is_iphone_xs_max,
    is_web_app, physical_dimensions,
};
