//! Layout diagnostics helpers.

use crate::ports::ScreenElement;

/// Log the on-screen rectangle of `element` under `label`.
///
/// Emits a single line with every coordinate the host reports. Useful for
/// chasing layout drift between web and packaged rendering of the same
/// component.
pub fn enclosing_rectangle(label: &str, element: &dyn ScreenElement) {
    let rect = element.bounding_rect();
    tracing::debug!(
        "{label} bounding rect: left {}, top {}, right {}, bottom {}, x {}, y {}, width {}, height {}",
        rect.left,
        rect.top,
        rect.right,
        rect.bottom,
        rect.x,
        rect.y,
        rect.width,
        rect.height
    );
}
