//! Job card extraction
//!
//! Knows the structure of a Work.ua search results page: which elements are
//! job cards and where the title anchor sits inside one.

use jobalerts::{JobListing, SearchResult};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

use crate::config::WorkUaConfig;
use crate::error::SetupError;

/// Pulls listings out of a parsed search results page
#[derive(Debug, Clone)]
pub struct ListingExtractor {
    cards: Selector,
    title: Selector,
    origin: Url,
}

impl ListingExtractor {
    pub fn new(config: &WorkUaConfig) -> Result<Self, SetupError> {
        let origin = Url::parse(&config.origin).map_err(|e| SetupError::InvalidOrigin {
            origin: config.origin.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            cards: parse_selector(&config.card_selector)?,
            title: parse_selector(&config.title_selector)?,
            origin,
        })
    }

    /// Extract listings from the first `max_results` job cards, in page order.
    ///
    /// Cards without a title anchor (or whose anchor has no href) are
    /// skipped but still use up one of the `max_results` cards.
    pub fn extract_listings(&self, document: &Html, max_results: usize) -> Vec<JobListing> {
        document
            .select(&self.cards)
            .take(max_results)
            .filter_map(|card| self.listing_from_card(card))
            .collect()
    }

    /// Extract and render: one two-line entry per listing, or the
    /// no-matches placeholder when nothing was extracted
    pub fn extract_lines(&self, document: &Html, max_results: usize) -> Vec<String> {
        SearchResult::from_listings(self.extract_listings(document, max_results)).lines()
    }

    fn listing_from_card(&self, card: ElementRef<'_>) -> Option<JobListing> {
        let Some(anchor) = card.select(&self.title).next() else {
            debug!("Skipping job card without title anchor");
            return None;
        };

        let Some(href) = anchor.value().attr("href") else {
            debug!("Skipping job card whose title anchor has no href");
            return None;
        };

        let link = absolute_link(&self.origin, href)?;
        let title = anchor
            .text()
            .flat_map(str::split_whitespace)
            .collect::<Vec<_>>()
            .join(" ");

        Some(JobListing::new(title, link))
    }
}

/// Resolve an href found on the page against the site origin.
///
/// Relative paths are appended to the origin; absolute URLs are returned
/// unchanged.
pub fn absolute_link(origin: &Url, href: &str) -> Option<String> {
    match origin.join(href.trim()) {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            debug!(href = %href, error = %e, "Skipping unresolvable job link");
            None
        }
    }
}

fn parse_selector(selector: &str) -> Result<Selector, SetupError> {
    Selector::parse(selector).map_err(|e| SetupError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}
