//! Host environment provider port.
//!
//! The classifier answers "what host am I running in?" purely from this
//! port. Implementations re-read live state on every call, so answers can
//! change across calls only if the world changes (orientation, navigating
//! between web and packaged contexts).
//!
//! # Design Notes
//!
//! - Core owns the trait and stays pure
//! - The embedding application owns the live implementation (window/screen
//!   globals on the web, the device bridge inside the shell)
//! - Absence always means a default: no shell marker means "web", no pixel
//!   ratio means 1

use crate::domain::Platform;

/// Ambient host state as seen at a single instant.
pub trait HostEnvironment: Send + Sync {
    /// Whether the packaging-shell marker object is present.
    fn has_packaging_shell(&self) -> bool;

    /// Platform reported by the shell's device bridge.
    ///
    /// `None` when there is no bridge (plain web) or the bridge has not
    /// initialized yet.
    fn platform(&self) -> Option<Platform>;

    /// Logical screen width in CSS pixels.
    fn screen_width(&self) -> u32;

    /// Logical screen height in CSS pixels.
    fn screen_height(&self) -> u32;

    /// Device pixel ratio, `None` when the host does not report one.
    fn pixel_ratio(&self) -> Option<f64>;
}

/// A fixed snapshot of host state.
///
/// For tests and for native contexts where the ambient values are known up
/// front.
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    pub packaging_shell: bool,
    pub platform: Option<Platform>,
    pub screen_width: u32,
    pub screen_height: u32,
    pub pixel_ratio: Option<f64>,
}

impl StaticEnvironment {
    /// Snapshot of a plain web browser host.
    #[must_use]
    pub const fn web(screen_width: u32, screen_height: u32) -> Self {
        Self {
            packaging_shell: false,
            platform: None,
            screen_width,
            screen_height,
            pixel_ratio: None,
        }
    }

    /// Snapshot of a packaged-shell host with an initialized device bridge.
    #[must_use]
    pub const fn packaged(
        platform: Platform,
        screen_width: u32,
        screen_height: u32,
        pixel_ratio: f64,
    ) -> Self {
        Self {
            packaging_shell: true,
            platform: Some(platform),
            screen_width,
            screen_height,
            pixel_ratio: Some(pixel_ratio),
        }
    }
}

impl HostEnvironment for StaticEnvironment {
    fn has_packaging_shell(&self) -> bool {
        self.packaging_shell
    }

    fn platform(&self) -> Option<Platform> {
        self.platform.clone()
    }

    fn screen_width(&self) -> u32 {
        self.screen_width
    }

    fn screen_height(&self) -> u32 {
        self.screen_height
    }

    fn pixel_ratio(&self) -> Option<f64> {
        self.pixel_ratio
    }
}
