//! Services built on the ports.
//!
//! - `classifier` - the host/device decision table
//! - `navigator` - history strategy selection and path adaptation
//! - `view_opener` - deferred external browser-view opening

pub mod classifier;
pub mod navigator;
pub mod view_opener;

pub use classifier::{
    android_size, device_profile, device_type_string, has_iphone_notch, heading_size,
    iphone_class, is_android, is_cordova, is_ios, is_iphone_678, is_iphone_678_plus,
    is_iphone_x_or_xs, is_iphone_xr, is_iphone_xs_max, is_web_app, physical_dimensions,
};
pub use navigator::{Navigator, asset_path};
pub use view_opener::{ExternalViewOutcome, OnExit, ViewOpener};
