//! Canonical listing data structure.

use serde::Serialize;

use super::Provider;

/// Lowest score a listing can carry.
pub const MIN_MATCH_SCORE: u8 = 60;

/// Highest score a listing can carry.
pub const MAX_MATCH_SCORE: u8 = 98;

/// Heuristic fit between a listing and the user profile, always in
/// `MIN_MATCH_SCORE..=MAX_MATCH_SCORE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MatchScore(u8);

impl MatchScore {
    /// Clamp a raw score into the allowed range.
    pub fn clamped(raw: i64) -> Self {
        let clamped = raw.clamp(MIN_MATCH_SCORE as i64, MAX_MATCH_SCORE as i64);
        Self(clamped as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// Display fields of a listing, as produced by an adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDetails {
    pub title: String,
    pub organization: String,
    pub location: String,
    /// Provider-native compensation text (no currency normalization)
    pub compensation: String,
    pub employment_type: String,
    pub experience_level: String,
    pub required_skills: Vec<String>,
    /// Opaque text, may be HTML
    pub description: String,
    /// Relative age ("2 days ago"), fixed at ingestion time
    pub posted_at: String,
    pub application_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// A provider-independent job or internship posting.
///
/// Listings are immutable: the id is namespaced by the provider tag and the
/// score is fixed when the listing is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    id: String,
    provider: Provider,
    match_score: MatchScore,
    #[serde(flatten)]
    details: ListingDetails,
}

impl Listing {
    /// Build a listing from a provider-local id.
    pub fn new(
        provider: Provider,
        local_id: &str,
        details: ListingDetails,
        match_score: MatchScore,
    ) -> Self {
        Self {
            id: format!("{}{}", provider.id_prefix(), local_id),
            provider,
            match_score,
            details,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn match_score(&self) -> MatchScore {
        self.match_score
    }

    pub fn details(&self) -> &ListingDetails {
        &self.details
    }

    /// Format the listing for display using a template.
    ///
    /// Supported placeholders:
    /// - `{id}`, `{provider}`, `{score}`, `{title}`, `{organization}`
    /// - `{location}`, `{compensation}`, `{type}`, `{experience}`
    /// - `{skills}`, `{posted}`, `{url}`
    pub fn format(&self, template: &str) -> String {
        let d = &self.details;
        template
            .replace("{id}", &self.id)
            .replace("{provider}", self.provider.display_name())
            .replace("{score}", &self.match_score.value().to_string())
            .replace("{title}", &d.title)
            .replace("{organization}", &d.organization)
            .replace("{location}", &d.location)
            .replace("{compensation}", &d.compensation)
            .replace("{type}", &d.employment_type)
            .replace("{experience}", &d.experience_level)
            .replace("{skills}", &d.required_skills.join(", "))
            .replace("{posted}", &d.posted_at)
            .replace("{url}", &d.application_url)
    }
}
