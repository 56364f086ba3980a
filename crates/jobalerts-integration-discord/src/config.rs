//! Discord configuration

/// Queries offered as buttons after a search prompt
pub const DEFAULT_SUGGESTIONS: [&str; 4] = ["Python", "Продавець", "Менеджер", "Дизайнер"];

/// Configuration for the Discord front-end
#[derive(Debug, Clone)]
pub struct DiscordConfig {
    /// Discord bot token
    pub token: String,
    /// Suggested queries shown as buttons
    pub suggestions: Vec<String>,
    /// Whether to answer direct messages
    pub respond_to_dms: bool,
}

impl DiscordConfig {
    /// Create a new Discord configuration with just a token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }

    /// Replace the suggested queries; blank entries are dropped
    pub fn with_suggestions<I, T>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.suggestions = suggestions
            .into_iter()
            .map(Into::into)
            .map(|s: String| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        self
    }

    pub fn with_dms(mut self, enable: bool) -> Self {
        self.respond_to_dms = enable;
        self
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            suggestions: DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
            respond_to_dms: true,
        }
    }
}
