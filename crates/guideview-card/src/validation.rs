//! Advisory validation for upstream guide rows.
//!
//! The renderer itself never rejects a summary (absent data degrades to
//! empty slots). These helpers exist for ingest-time logging by embedders
//! that want to notice malformed upstream rows.

use anyhow::{Result, anyhow};

use crate::summary::VoterGuideSummary;

/// Validate the owner-identifier invariant: exactly one of the
/// organization / public-figure identifiers should be populated.
///
/// # Examples
///
/// ```rust
/// use guideview_card::{VoterGuideSummary, validate_summary};
///
/// let row = VoterGuideSummary {
///     organization_id: Some("org123".to_string()),
///     ..Default::default()
/// };
/// assert!(validate_summary(&row).is_ok());
/// assert!(validate_summary(&VoterGuideSummary::default()).is_err());
/// ```
pub fn validate_summary(summary: &VoterGuideSummary) -> Result<()> {
    match (&summary.organization_id, &summary.public_figure_id) {
        (Some(_), Some(_)) => Err(anyhow!("both owner identifiers are populated")),
        (None, None) => Err(anyhow!("no owner identifier is populated")),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_identifier_is_valid() {
        let organization = VoterGuideSummary {
            organization_id: Some("org123".to_string()),
            ..Default::default()
        };
        assert!(validate_summary(&organization).is_ok());

        let public_figure = VoterGuideSummary {
            public_figure_id: Some("pf456".to_string()),
            ..Default::default()
        };
        assert!(validate_summary(&public_figure).is_ok());
    }

    #[test]
    fn test_both_identifiers_flagged() {
        let row = VoterGuideSummary {
            organization_id: Some("org123".to_string()),
            public_figure_id: Some("pf456".to_string()),
            ..Default::default()
        };
        let err = validate_summary(&row).unwrap_err();
        assert!(err.to_string().contains("both owner identifiers"));
    }

    #[test]
    fn test_missing_identifiers_flagged() {
        let err = validate_summary(&VoterGuideSummary::default()).unwrap_err();
        assert!(err.to_string().contains("no owner identifier"));
    }
}
