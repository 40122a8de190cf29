//! Placeholder substitution for opening notifications.
//!
//! Link templates and email bodies use bracketed tokens. The token spelling is shared with the
//! templates maintained by the directory site and must not change.

use crate::server::{mail::OutgoingEmail, model::tier::SponsorshipTier};

pub const SPONSORSHIP_TYPE: &str = "[SPONSORSHIP_TYPE]";
pub const CATEGORY_ID: &str = "[CATEGORY_ID]";
pub const SUBCATEGORY_ID: &str = "[SUBCATEGORY_ID]";
pub const DIRECTORY_ENTRY_ID: &str = "[DIRECTORY_ENTRY_ID]";
pub const LISTING_RENEWAL_LINK: &str = "[LISTING_RENEWAL_LINK]";

pub const DEFAULT_SUBJECT: &str = "A [SPONSORSHIP_TYPE] slot is now open";
pub const DEFAULT_TEXT_BODY: &str = "Good news! A [SPONSORSHIP_TYPE] slot you asked about has opened up.\n\n\
Claim it before someone else does:\n[LISTING_RENEWAL_LINK]\n";
pub const DEFAULT_HTML_BODY: &str = "<p>Good news! A <strong>[SPONSORSHIP_TYPE]</strong> slot you asked about has opened up.</p>\
<p><a href=\"[LISTING_RENEWAL_LINK]\">Claim it before someone else does</a></p>";

fn id_or_empty(id: Option<i32>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

/// Fills a link template for `tier`.
///
/// The sponsorship type is substituted by its stored name; absent ids become empty strings.
pub fn render_link(
    template: &str,
    tier: SponsorshipTier,
    directory_entry_id: Option<i32>,
) -> String {
    template
        .replace(SPONSORSHIP_TYPE, tier.kind().as_str())
        .replace(CATEGORY_ID, &id_or_empty(tier.category_id()))
        .replace(SUBCATEGORY_ID, &id_or_empty(tier.subcategory_id()))
        .replace(DIRECTORY_ENTRY_ID, &id_or_empty(directory_entry_id))
        .trim()
        .to_string()
}

/// Fills an email subject or body with the tier's display label and the claim link.
pub fn render_body(template: &str, tier: SponsorshipTier, link: &str) -> String {
    template
        .replace(SPONSORSHIP_TYPE, tier.kind().label())
        .replace(LISTING_RENEWAL_LINK, link)
}

/// Link and email templates used by the opening notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationTemplates {
    /// Used when the subscriber's linked directory entry is still listed
    pub listing_link: String,
    /// Used when there is no linked entry or it was removed
    pub generic_link: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

impl NotificationTemplates {
    /// Link templates with the default email wording.
    pub fn new(listing_link: impl Into<String>, generic_link: impl Into<String>) -> Self {
        Self {
            listing_link: listing_link.into(),
            generic_link: generic_link.into(),
            subject: DEFAULT_SUBJECT.to_string(),
            text_body: DEFAULT_TEXT_BODY.to_string(),
            html_body: DEFAULT_HTML_BODY.to_string(),
        }
    }

    /// Builds the claim link, falling back to the generic template without a live entry.
    pub fn link_for(
        &self,
        tier: SponsorshipTier,
        directory_entry_id: Option<i32>,
        entry_is_active: bool,
    ) -> String {
        match directory_entry_id {
            Some(id) if entry_is_active => render_link(&self.listing_link, tier, Some(id)),
            _ => render_link(&self.generic_link, tier, None),
        }
    }

    /// Builds the opening email for `to` with `link` substituted into every body.
    pub fn render_email(&self, to: &str, tier: SponsorshipTier, link: &str) -> OutgoingEmail {
        OutgoingEmail {
            to: to.to_string(),
            subject: render_body(&self.subject, tier, link),
            text_body: render_body(&self.text_body, tier, link),
            html_body: render_body(&self.html_body, tier, link),
        }
    }
}
