//! Gateway event handler
//!
//! Converts serenity events into `ChatInput` and hands them to the dispatcher.

use async_trait::async_trait;
use jobalerts::ListingSource;
use serenity::builder::CreateInteractionResponse;
use serenity::client::{Context, EventHandler};
use serenity::model::application::Interaction;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::client::{ChannelSink, DiscordClient};
use crate::dispatch::Dispatcher;
use crate::input::{Callback, ChatInput};

/// serenity event handler for the job search bot
pub struct BotHandler<S: ListingSource> {
    dispatcher: Arc<Dispatcher<S>>,
    respond_to_dms: bool,
}

impl<S: ListingSource> BotHandler<S> {
    pub fn new(dispatcher: Arc<Dispatcher<S>>, respond_to_dms: bool) -> Self {
        Self {
            dispatcher,
            respond_to_dms,
        }
    }
}

#[async_trait]
impl<S: ListingSource + 'static> EventHandler for BotHandler<S> {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            bot = %ready.user.name,
            guilds = ready.guilds.len(),
            "Connected to Discord"
        );
    }

    async fn message(&self, ctx: Context, msg: Message) {
        // Ignore bot messages, including our own replies
        if msg.author.bot {
            return;
        }

        if msg.guild_id.is_none() && !self.respond_to_dms {
            debug!(user_id = %msg.author.id, "Ignoring direct message");
            return;
        }

        let Some(input) = ChatInput::from_message(&msg.content) else {
            return;
        };

        let sink = ChannelSink::new(DiscordClient::new(ctx.http.clone()), msg.channel_id);
        let user_id = msg.author.id.to_string();

        if let Err(e) = self.dispatcher.handle(&user_id, input, &sink).await {
            error!(
                user_id = %user_id,
                channel_id = %msg.channel_id,
                error = %e,
                "Failed to handle message"
            );
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Component(component) = interaction else {
            return;
        };

        let user_id = component.user.id.to_string();
        let Some(callback) = Callback::from_custom_id(&component.data.custom_id) else {
            warn!(
                user_id = %user_id,
                custom_id = %component.data.custom_id,
                "Unknown button"
            );
            return;
        };

        if let Err(e) = component
            .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
            .await
        {
            warn!(error = %e, "Failed to acknowledge interaction");
        }

        let sink = ChannelSink::new(DiscordClient::new(ctx.http.clone()), component.channel_id);

        if let Err(e) = self
            .dispatcher
            .handle(&user_id, ChatInput::callback(callback), &sink)
            .await
        {
            error!(
                user_id = %user_id,
                channel_id = %component.channel_id,
                error = %e,
                "Failed to handle button click"
            );
        }
    }
}
