//! Voter guide summary value shape.
//!
//! These are transient display attributes handed over by the upstream API,
//! not owned objects; the renderer consumes one per render call.

use serde::{Deserialize, Serialize};

/// Who a voter guide belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OwnerType {
    Organization,
    PublicFigure,
}

/// Display attributes for one voter guide entry.
///
/// Every field is optional: the upstream API omits what it does not know,
/// and the renderer degrades to an empty slot rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoterGuideSummary {
    /// Name shown on the card.
    pub display_name: Option<String>,
    /// Thumbnail image for the guide owner.
    pub image_url: Option<String>,
    /// Election this guide was written for.
    pub election_id: Option<String>,
    /// Identifier of the guide itself.
    pub guide_id: Option<String>,
    /// Declared owner type; when absent, inferred from the identifiers.
    pub owner_type: Option<OwnerType>,
    /// Populated when an organization owns the guide.
    pub organization_id: Option<String>,
    /// Populated when a public figure owns the guide.
    pub public_figure_id: Option<String>,
    /// Twitter followers of the guide owner.
    pub twitter_followers_count: Option<u64>,
    /// Upstream-formatted timestamp of the last guide edit.
    pub last_updated: Option<String>,
}

impl VoterGuideSummary {
    /// Owner type, falling back to whichever identifier is populated.
    ///
    /// Upstream rows are not validated: when both identifiers are present
    /// the organization wins, matching how the card keys its follow control.
    #[must_use]
    pub fn effective_owner_type(&self) -> Option<OwnerType> {
        self.owner_type.or_else(|| {
            if self.organization_id.is_some() {
                Some(OwnerType::Organization)
            } else if self.public_figure_id.is_some() {
                Some(OwnerType::PublicFigure)
            } else {
                None
            }
        })
    }
}
