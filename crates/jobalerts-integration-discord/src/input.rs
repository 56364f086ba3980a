//! Inbound chat events
//!
//! Classifies what a user sent: a command, a button click, or search text.

const SEARCH_JOBS_ID: &str = "search_jobs";
const ABOUT_ID: &str = "about";
const QUERY_PREFIX: &str = "query:";

/// Text commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `/start`: show the main menu
    Start,
    /// `/status`: liveness check
    Status,
}

impl Command {
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "/start" => Some(Self::Start),
            "/status" => Some(Self::Status),
            _ => None,
        }
    }
}

/// Button actions, identified by the component's custom id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Callback {
    SearchJobs,
    About,
    /// A suggested query button; same as typing the text
    Query { text: String },
}

impl Callback {
    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        match custom_id {
            SEARCH_JOBS_ID => Some(Self::SearchJobs),
            ABOUT_ID => Some(Self::About),
            other => other
                .strip_prefix(QUERY_PREFIX)
                .filter(|text| !text.trim().is_empty())
                .map(|text| Self::Query {
                    text: text.to_string(),
                }),
        }
    }

    pub fn custom_id(&self) -> String {
        match self {
            Self::SearchJobs => SEARCH_JOBS_ID.to_string(),
            Self::About => ABOUT_ID.to_string(),
            Self::Query { text } => format!("{}{}", QUERY_PREFIX, text),
        }
    }
}

/// Anything the dispatcher can act on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatInput {
    Command { command: Command },
    Callback { callback: Callback },
    Text { text: String },
}

impl ChatInput {
    /// Classify a plain chat message. Blank messages yield `None`.
    pub fn from_message(content: &str) -> Option<Self> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return None;
        }

        Some(match Command::parse(trimmed) {
            Some(command) => Self::Command { command },
            None => Self::Text {
                text: trimmed.to_string(),
            },
        })
    }

    pub fn callback(callback: Callback) -> Self {
        Self::Callback { callback }
    }
}
