//! SearchResult - what a single search produces for the chat reply

use super::entities::JobListing;

/// Placeholder sent when the job board could not be reached
pub const UNREACHABLE_PLACEHOLDER: &str = "⚠️ Could not connect to Work.ua.";

/// Placeholder sent when the page held no usable listings
pub const NO_MATCHES_PLACEHOLDER: &str = "😔 No jobs found. Try a different keyword.";

/// Separator placed between entries when they are joined into one message
pub const REPLY_SEPARATOR: &str = "\n\n";

/// Outcome of one search
///
/// `Listings` is never empty: an empty extraction becomes `NoMatches`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    Listings(Vec<JobListing>),
    NoMatches,
    Unreachable,
}

impl SearchResult {
    /// Build a result from extracted listings, mapping an empty set to `NoMatches`
    pub fn from_listings(listings: Vec<JobListing>) -> Self {
        if listings.is_empty() {
            Self::NoMatches
        } else {
            Self::Listings(listings)
        }
    }

    /// Display lines: one entry per listing, or a single placeholder
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Listings(listings) => listings.iter().map(JobListing::render).collect(),
            Self::NoMatches => vec![NO_MATCHES_PLACEHOLDER.to_string()],
            Self::Unreachable => vec![UNREACHABLE_PLACEHOLDER.to_string()],
        }
    }

    /// All lines joined into a single chat message
    pub fn to_reply(&self) -> String {
        self.lines().join(REPLY_SEPARATOR)
    }

    /// Number of listings found (placeholders count as zero)
    pub fn listing_count(&self) -> usize {
        match self {
            Self::Listings(listings) => listings.len(),
            Self::NoMatches | Self::Unreachable => 0,
        }
    }
}
