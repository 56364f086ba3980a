//! JobListing Entity
//!
//! One job posting extracted from a job board's search results page.

use std::fmt;

/// A (title, link) pair taken from a single job card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobListing {
    /// Visible title of the posting, trimmed
    pub title: String,
    /// Absolute URL of the posting
    pub link: String,
}

impl JobListing {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }

    /// Two-line label shown in chat: title line, then link line
    pub fn render(&self) -> String {
        format!("🔗 {}\n{}", self.title, self.link)
    }
}

impl fmt::Display for JobListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_two_lines() {
        let listing = JobListing::new("Rust developer", "https://www.work.ua/jobs/1/");
        let rendered = listing.render();

        assert_eq!(rendered, "🔗 Rust developer\nhttps://www.work.ua/jobs/1/");
        assert_eq!(rendered.lines().count(), 2);
    }
}
