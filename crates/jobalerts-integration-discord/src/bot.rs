//! Bot runner
//!
//! Owns the gateway connection for the lifetime of the process.

use jobalerts::{JobSearchService, ListingSource};
use serenity::prelude::GatewayIntents;
use serenity::Client;
use std::sync::Arc;
use tracing::info;

use crate::config::DiscordConfig;
use crate::dispatch::Dispatcher;
use crate::handler::BotHandler;

/// Discord bot wired to a job search service
pub struct DiscordBot<S: ListingSource> {
    config: DiscordConfig,
    dispatcher: Arc<Dispatcher<S>>,
}

impl<S: ListingSource + 'static> DiscordBot<S> {
    pub fn new(config: DiscordConfig, search: Arc<JobSearchService<S>>) -> Self {
        let dispatcher = Arc::new(Dispatcher::new(search, config.suggestions.clone()));
        Self { config, dispatcher }
    }

    /// Gateway intents needed to read commands and search text
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::DIRECT_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT
    }

    /// Connect and process events until the connection ends
    pub async fn run(self) -> Result<(), serenity::Error> {
        let handler = BotHandler::new(self.dispatcher, self.config.respond_to_dms);

        let mut client = Client::builder(&self.config.token, Self::intents())
            .event_handler(handler)
            .await?;

        info!("Starting Discord gateway connection");
        client.start().await
    }
}
