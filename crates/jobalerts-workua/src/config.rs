//! Work.ua adapter configuration

use std::time::Duration;

/// Origin every search URL and relative job link is built from
pub const WORK_UA_ORIGIN: &str = "https://www.work.ua";

/// Desktop browser identity sent with every request
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Job card container on the search results page
pub const CARD_SELECTOR: &str = "div.card.card-hover.card-visited.job-link";

/// Title anchor inside a job card
pub const TITLE_SELECTOR: &str = "h2 > a";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Configuration for the Work.ua source
#[derive(Debug, Clone)]
pub struct WorkUaConfig {
    /// Site origin, without trailing slash
    pub origin: String,
    /// `User-Agent` header value
    pub user_agent: String,
    /// Upper bound for a single request, connect to last byte
    pub timeout: Duration,
    /// CSS selector for job cards
    pub card_selector: String,
    /// CSS selector for the title anchor, relative to a card
    pub title_selector: String,
}

impl WorkUaConfig {
    /// Point the source at a different origin (mirrors, test servers)
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the card and title selectors, for when the site markup changes
    pub fn with_selectors(
        mut self,
        card_selector: impl Into<String>,
        title_selector: impl Into<String>,
    ) -> Self {
        self.card_selector = card_selector.into();
        self.title_selector = title_selector.into();
        self
    }
}

impl Default for WorkUaConfig {
    fn default() -> Self {
        Self {
            origin: WORK_UA_ORIGIN.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            card_selector: CARD_SELECTOR.to_string(),
            title_selector: TITLE_SELECTOR.to_string(),
        }
    }
}
