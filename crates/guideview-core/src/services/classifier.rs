//! The host/device decision table.
//!
//! Pure functions over the [`HostEnvironment`] port. Nothing here caches:
//! every call re-reads the live host state. In practice the packaged-shell
//! answers never change at runtime; the screen geometry can (orientation).

use crate::domain::{AndroidSize, DeviceProfile, IphoneClass, Platform, PlatformKind};
use crate::ports::HostEnvironment;

/// Physical pixel dimensions of the host screen.
///
/// Logical dimensions multiplied by the device pixel ratio (1 when the host
/// reports none), rounded to whole pixels so the exact-match device buckets
/// compare on integers.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn physical_dimensions(env: &dyn HostEnvironment) -> (u32, u32) {
    let ratio = env.pixel_ratio().unwrap_or(1.0);
    let width = (f64::from(env.screen_width()) * ratio).round() as u32;
    let height = (f64::from(env.screen_height()) * ratio).round() as u32;
    (width, height)
}

/// True when running as a plain web app (no packaging-shell marker).
#[must_use]
pub fn is_web_app(env: &dyn HostEnvironment) -> bool {
    !env.has_packaging_shell()
}

/// True when running inside the packaged (Cordova-style) shell.
#[must_use]
pub fn is_cordova(env: &dyn HostEnvironment) -> bool {
    env.has_packaging_shell()
}

/// True when the packaged shell reports an iOS device.
#[must_use]
pub fn is_ios(env: &dyn HostEnvironment) -> bool {
    is_cordova(env) && env.platform() == Some(Platform::Ios)
}

/// True when the packaged shell reports an Android device.
#[must_use]
pub fn is_android(env: &dyn HostEnvironment) -> bool {
    is_cordova(env) && env.platform() == Some(Platform::Android)
}

/// The iPhone hardware class of the current host, if it is one of the five
/// the styling layer distinguishes.
#[must_use]
pub fn iphone_class(env: &dyn HostEnvironment) -> Option<IphoneClass> {
    if !is_ios(env) {
        return None;
    }
    let (width, height) = physical_dimensions(env);
    IphoneClass::from_dimensions(width, height)
}

/// True for iPhone X / XS screens (1125x2436 physical).
#[must_use]
pub fn is_iphone_x_or_xs(env: &dyn HostEnvironment) -> bool {
    iphone_class(env) == Some(IphoneClass::XOrXs)
}

/// True for iPhone 6/7/8 Plus screens (1242x2208 physical).
#[must_use]
pub fn is_iphone_678_plus(env: &dyn HostEnvironment) -> bool {
    iphone_class(env) == Some(IphoneClass::Plus678)
}

/// True for iPhone 6/7/8 screens (750x1334 physical).
#[must_use]
pub fn is_iphone_678(env: &dyn HostEnvironment) -> bool {
    iphone_class(env) == Some(IphoneClass::Classic678)
}

/// True for iPhone XR screens (828x1792 physical).
#[must_use]
pub fn is_iphone_xr(env: &dyn HostEnvironment) -> bool {
    iphone_class(env) == Some(IphoneClass::Xr)
}

/// True for iPhone XS Max screens (1242x2688 physical).
#[must_use]
pub fn is_iphone_xs_max(env: &dyn HostEnvironment) -> bool {
    iphone_class(env) == Some(IphoneClass::XsMax)
}

/// True when the screen has a sensor notch (X/XS, XR, XS Max).
#[must_use]
pub fn has_iphone_notch(env: &dyn HostEnvironment) -> bool {
    iphone_class(env).is_some_and(IphoneClass::has_notch)
}

/// Android size bucket for the current host's physical area.
///
/// The bucket is computed from the screen alone; callers that care gate on
/// [`is_android`] first, as the heading resolver does.
#[must_use]
pub fn android_size(env: &dyn HostEnvironment) -> AndroidSize {
    let (width, height) = physical_dimensions(env);
    AndroidSize::from_area(u64::from(width) * u64::from(height))
}

/// Point-in-time device profile for the current host.
#[must_use]
pub fn device_profile(env: &dyn HostEnvironment) -> DeviceProfile {
    let (physical_width, physical_height) = physical_dimensions(env);
    let kind = if is_ios(env) {
        PlatformKind::Ios
    } else if is_android(env) {
        PlatformKind::Android
    } else {
        PlatformKind::Web
    };
    DeviceProfile {
        kind,
        physical_width,
        physical_height,
    }
}

/// Style suffix for device-specific heading adjustments.
///
/// Resolves in a fixed priority order: XS Max, X/XS, XR, 6/7/8 Plus, 6/7/8,
/// Android bucket, packaged default. Web apps use no suffix.
#[must_use]
pub fn heading_size(env: &dyn HostEnvironment) -> &'static str {
    if !is_cordova(env) {
        return "";
    }
    if let Some(class) = iphone_class(env) {
        return class.heading_suffix();
    }
    if is_android(env) {
        return android_size(env).heading_suffix();
    }
    "-cordova-default"
}

/// Short device descriptor for logging and analytics.
///
/// `"webapp"` outside the shell, `"cordova"` inside it, with `":<platform>"`
/// appended once the device bridge has reported one.
#[must_use]
pub fn device_type_string(env: &dyn HostEnvironment) -> String {
    if is_web_app(env) {
        return "webapp".to_string();
    }
    match env.platform() {
        Some(platform) => format!("cordova:{platform}"),
        None => "cordova".to_string(),
    }
}
