//! Voter guide summary card rendering.
//!
//! A pure presentation unit: a [`VoterGuideSummary`] value goes in, static
//! markup comes out. Follow/ignore state belongs to an external control
//! behind the [`FollowControl`] port; nothing here talks to a network or
//! mutates state.

#![deny(unused_crate_dependencies)]

pub mod follow;
pub mod format;
pub mod render;
pub mod summary;
pub mod validation;

// Re-export commonly used types for convenience
pub use follow::{FollowControl, NoopFollowControl};
pub use format::{follower_count_label, group_thousands};
pub use render::render_card;
pub use summary::{OwnerType, VoterGuideSummary};
pub use validation::validate_summary;
