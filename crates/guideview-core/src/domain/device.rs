//! Device and size-class vocabulary.
//!
//! The styling layer distinguishes a handful of device buckets by exact
//! physical pixel dimensions (logical screen dimensions multiplied by the
//! device pixel ratio). The bucket constants below are hardware facts, not
//! tunables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform reported by the packaging shell's device bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    /// Apple mobile devices.
    Ios,
    /// Android devices.
    Android,
    /// Any other reported platform string.
    Other(String),
}

impl Platform {
    /// Parse the raw platform string the device bridge reports.
    #[must_use]
    pub fn from_reported(raw: &str) -> Self {
        match raw {
            "iOS" => Self::Ios,
            "Android" => Self::Android,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ios => f.write_str("iOS"),
            Self::Android => f.write_str("Android"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

/// Classifier category: where the UI is actually running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformKind {
    /// Plain web browser, or a packaged shell that has not reported a
    /// platform yet.
    Web,
    /// Packaged shell on an iOS device.
    Ios,
    /// Packaged shell on an Android device.
    Android,
}

/// iPhone hardware classes keyed by exact physical pixel dimensions.
///
/// Only these five get device-specific styling; any other packaged iOS
/// screen falls through to the default heading suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IphoneClass {
    /// iPhone XS Max, 1242x2688.
    XsMax,
    /// iPhone X and XS, 1125x2436.
    XOrXs,
    /// iPhone XR, 828x1792.
    Xr,
    /// iPhone 6/7/8 Plus, 1242x2208.
    Plus678,
    /// iPhone 6/7/8, 750x1334.
    Classic678,
}

impl IphoneClass {
    /// Every known class, in heading-resolution priority order.
    pub const ALL: [Self; 5] = [
        Self::XsMax,
        Self::XOrXs,
        Self::Xr,
        Self::Plus678,
        Self::Classic678,
    ];

    /// Physical pixel dimensions (width, height) of this class.
    #[must_use]
    pub const fn dimensions(self) -> (u32, u32) {
        match self {
            Self::XsMax => (1242, 2688),
            Self::XOrXs => (1125, 2436),
            Self::Xr => (828, 1792),
            Self::Plus678 => (1242, 2208),
            Self::Classic678 => (750, 1334),
        }
    }

    /// Match exact physical dimensions against the known classes.
    #[must_use]
    pub fn from_dimensions(width: u32, height: u32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|class| class.dimensions() == (width, height))
    }

    /// Whether the screen has a sensor notch cutting into the top edge.
    #[must_use]
    pub const fn has_notch(self) -> bool {
        matches!(self, Self::XOrXs | Self::Xr | Self::XsMax)
    }

    /// Style suffix selecting device-specific heading adjustments.
    #[must_use]
    pub const fn heading_suffix(self) -> &'static str {
        match self {
            Self::XsMax => "-cordova-ios-xs-max",
            Self::XOrXs => "-cordova-ios-x",
            Self::Xr => "-cordova-ios-xr",
            Self::Plus678 => "-cordova-ios-678-plus",
            Self::Classic678 => "-cordova-ios-678",
        }
    }
}

/// Android size buckets over physical screen area (width x height).
///
/// Thresholds are reference points for known devices rather than a formula:
/// sm covers 480x800 (Nexus One), md 1080x1920 (Pixel XL, Nexus 5X),
/// lg 1440x2560 (Nexus 6P), xl 2560x1600 (Nexus 10 tablet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AndroidSize {
    Sm,
    Md,
    Lg,
    Xl,
}

impl AndroidSize {
    /// Bucket a physical area. Every threshold is strict greater-than.
    #[must_use]
    pub const fn from_area(area: u64) -> Self {
        if area > 3_700_000 {
            Self::Xl
        } else if area > 3_000_000 {
            Self::Lg
        } else if area > 1_000_000 {
            Self::Md
        } else {
            Self::Sm
        }
    }

    /// Style suffix selecting bucket-specific heading adjustments.
    #[must_use]
    pub const fn heading_suffix(self) -> &'static str {
        match self {
            Self::Sm => "-cordova-android-sm",
            Self::Md => "-cordova-android-md",
            Self::Lg => "-cordova-android-lg",
            Self::Xl => "-cordova-android-xl",
        }
    }
}

/// A point-in-time view of the host device.
///
/// Recomputed from ambient state on every query; never cached and never
/// invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceProfile {
    /// Where the UI is running.
    pub kind: PlatformKind,
    /// Physical pixel width.
    pub physical_width: u32,
    /// Physical pixel height.
    pub physical_height: u32,
}

impl DeviceProfile {
    /// Physical screen area in pixels.
    #[must_use]
    pub fn area(&self) -> u64 {
        u64::from(self.physical_width) * u64::from(self.physical_height)
    }
}
