//! Discord front-end for Job Alerts
//!
//! Turns Discord messages and button clicks into job searches and replies.
//!
//! # Usage
//!
//! ```rust,ignore
//! use jobalerts_integration_discord::{DiscordBot, DiscordConfig};
//!
//! let config = DiscordConfig::new("your-bot-token");
//! DiscordBot::new(config, search_service).run().await?;
//! ```

mod bot;
mod client;
mod config;
mod dispatch;
mod handler;
mod input;
mod reply;

pub use bot::DiscordBot;
pub use client::{ChannelSink, DiscordClient};
pub use config::{DiscordConfig, DEFAULT_SUGGESTIONS};
pub use dispatch::{DispatchError, Dispatcher, ReplySink};
pub use handler::BotHandler;
pub use input::{Callback, ChatInput, Command};
pub use reply::{texts, Button, Keyboard, Reply};
