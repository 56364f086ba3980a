//! SearchQuery Entity
//!
//! Free-text keyword entered by the user.

use std::fmt;

/// Character substituted for whitespace when the query is embedded in a URL path
pub const PATH_SEPARATOR: char = '+';

/// A non-empty, trimmed search keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Parse user input into a query.
    ///
    /// Returns `None` for blank input. No other validation is performed:
    /// characters that are meaningful in a URL path are passed through as is.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The query as typed (trimmed)
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The query with every whitespace character replaced by [`PATH_SEPARATOR`]
    pub fn path_segment(&self) -> String {
        self.0
            .chars()
            .map(|c| if c.is_whitespace() { PATH_SEPARATOR } else { c })
            .collect()
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
