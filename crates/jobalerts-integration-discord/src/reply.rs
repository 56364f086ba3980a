//! Outbound replies and button keyboards

use crate::input::Callback;

/// Fixed bot texts
pub mod texts {
    pub const MAIN_MENU: &str = "👋 Choose an option:";
    pub const SEARCH_BUTTON: &str = "🔍 Search jobs";
    pub const ABOUT_BUTTON: &str = "ℹ️ About";
    pub const SEARCH_PROMPT: &str = "Enter a job title or pick one of the suggestions:";
    pub const ABOUT: &str = "🤖 **SmartJobAlertsBot** helps you find job openings quickly and easily.\n\n\
        🔎 Choose search, type the profession or technology you are after, and the bot will send you links to openings on Work.ua.\n\
        🛠 More sites and filters for better search are on the way.";
    pub const STATUS: &str = "🤖 Bot is up and ready to work!";
    pub const SEARCHING: &str = "🔎 Searching for jobs...";
    pub const SEARCH_FAILED: &str = "⚠️ An error occurred while searching. Please try again.";
}

/// Discord rejects message content longer than this many characters
pub const MAX_MESSAGE_LEN: usize = 2000;

/// Discord allows at most five action rows per message
const MAX_ROWS: usize = 5;
const SUGGESTIONS_PER_ROW: usize = 2;
const MAX_LABEL_LEN: usize = 80;
const MAX_CUSTOM_ID_LEN: usize = 100;

/// A single clickable button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub callback: Callback,
}

impl Button {
    fn new(label: impl Into<String>, callback: Callback) -> Self {
        Self {
            label: label.into(),
            callback,
        }
    }
}

/// Buttons attached to a reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keyboard {
    /// "Search jobs" and "About"
    MainMenu,
    /// One button per suggested query, two per row
    Suggestions(Vec<String>),
}

impl Keyboard {
    /// Button rows, within Discord's component limits
    pub fn rows(&self) -> Vec<Vec<Button>> {
        match self {
            Self::MainMenu => vec![vec![
                Button::new(texts::SEARCH_BUTTON, Callback::SearchJobs),
                Button::new(texts::ABOUT_BUTTON, Callback::About),
            ]],
            Self::Suggestions(queries) => {
                let buttons: Vec<Button> = queries
                    .iter()
                    .map(|text| Button::new(text.clone(), Callback::Query { text: text.clone() }))
                    .filter(|b| {
                        b.label.chars().count() <= MAX_LABEL_LEN
                            && b.callback.custom_id().len() <= MAX_CUSTOM_ID_LEN
                    })
                    .collect();

                buttons
                    .chunks(SUGGESTIONS_PER_ROW)
                    .take(MAX_ROWS)
                    .map(<[Button]>::to_vec)
                    .collect()
            }
        }
    }
}

/// A message to send back to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub content: String,
    pub keyboard: Option<Keyboard>,
}

impl Reply {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            keyboard: None,
        }
    }

    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }
}

/// Join entries with `separator`, keeping only the whole entries that fit
/// in one Discord message.
///
/// A first entry that is longer than the limit on its own is cut short.
pub fn join_within_limit(entries: &[String], separator: &str) -> String {
    let separator_len = separator.chars().count();
    let mut message = String::new();
    let mut len = 0;

    for entry in entries {
        let entry_len = entry.chars().count();
        if message.is_empty() {
            if entry_len > MAX_MESSAGE_LEN {
                return truncate_chars(entry, MAX_MESSAGE_LEN);
            }
            message.push_str(entry);
            len = entry_len;
            continue;
        }

        if len + separator_len + entry_len > MAX_MESSAGE_LEN {
            break;
        }
        message.push_str(separator);
        message.push_str(entry);
        len += separator_len + entry_len;
    }

    message
}

fn truncate_chars(text: &str, max: usize) -> String {
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
