//! Domain types for host and device classification.
//!
//! These types are pure vocabulary: no host bridge, no caching, no IO.

mod device;

pub use device::{AndroidSize, DeviceProfile, IphoneClass, Platform, PlatformKind};
