//! Follow/ignore control delegation.

use maud::Markup;

/// External control rendering the follow/ignore affordance for the
/// organization a guide belongs to.
///
/// The control's state machine (followed, ignored, pending) lives with the
/// collaborator; the card only hands over the organization identifier,
/// which may be absent.
pub trait FollowControl {
    /// Render the control for `organization_id`.
    fn render(&self, organization_id: Option<&str>) -> Markup;
}

/// Placeholder control rendering an empty slot.
///
/// For tests and for listings that show cards without follow affordances.
#[derive(Debug, Clone, Default)]
pub struct NoopFollowControl;

impl NoopFollowControl {
    /// Create a new placeholder control.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FollowControl for NoopFollowControl {
    fn render(&self, _organization_id: Option<&str>) -> Markup {
        maud::html! {}
    }
}
