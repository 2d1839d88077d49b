//! Voter guide card markup.

use maud::{Markup, html};

use crate::follow::FollowControl;
use crate::format::follower_count_label;
use crate::summary::VoterGuideSummary;

/// Route to a guide page, keyed by the owning organization.
fn guide_route(summary: &VoterGuideSummary) -> String {
    format!(
        "/voterguide/{}",
        summary.organization_id.as_deref().unwrap_or_default()
    )
}

/// Render one voter guide entry.
///
/// Produces static markup only: a linked thumbnail, the linked display
/// name, the delegated follow control and the follower-count slot. Absent
/// fields render as empty slots; there are no side effects.
#[must_use]
pub fn render_card(summary: &VoterGuideSummary, follow: &dyn FollowControl) -> Markup {
    let route = guide_route(summary);
    let followers = follower_count_label(summary.twitter_followers_count);

    html! {
        div.row {
            div.ballot-item.well.well-skinny.split-top-skinny.clearfix {
                div.guide-thumbnail {
                    a href=(route) {
                        img.utils-img-contain
                            src=[summary.image_url.as_deref()]
                            alt=[summary.display_name.as_deref()];
                    }
                }
                div.guide-name {
                    a href=(route) {
                        @if let Some(name) = summary.display_name.as_deref() {
                            (name)
                        }
                    }
                }
                div.guide-follow {
                    (follow.render(summary.organization_id.as_deref()))
                }
                div.social-box.fa.fa-twitter {
                    @if let Some(label) = &followers {
                        (label)
                    }
                }
            }
        }
    }
}
