//! Discord API client wrapper

use async_trait::async_trait;
use serenity::builder::{CreateActionRow, CreateButton, CreateMessage};
use serenity::http::Http;
use serenity::model::application::ButtonStyle;
use serenity::model::channel::Message as SerenityMessage;
use serenity::model::id::ChannelId;
use std::sync::Arc;
use tracing::{debug, error};

use crate::dispatch::{DispatchError, ReplySink};
use crate::input::Callback;
use crate::reply::{Keyboard, Reply};

/// Discord API client
#[derive(Clone)]
pub struct DiscordClient {
    http: Arc<Http>,
}

impl DiscordClient {
    /// Wrap an existing HTTP handle (e.g. the one carried by a gateway `Context`)
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Send a reply, with its buttons, to a channel
    pub async fn send_reply(
        &self,
        channel_id: ChannelId,
        reply: &Reply,
    ) -> Result<SerenityMessage, serenity::Error> {
        debug!(
            channel_id = %channel_id,
            content_len = %reply.content.len(),
            "Sending message to Discord"
        );

        let mut builder = CreateMessage::new().content(reply.content.as_str());
        if let Some(keyboard) = &reply.keyboard {
            builder = builder.components(action_rows(keyboard));
        }

        channel_id
            .send_message(&self.http, builder)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to send Discord message"))
    }
}

/// Replies bound for a single Discord channel
pub struct ChannelSink {
    client: DiscordClient,
    channel_id: ChannelId,
}

impl ChannelSink {
    pub fn new(client: DiscordClient, channel_id: ChannelId) -> Self {
        Self { client, channel_id }
    }
}

#[async_trait]
impl ReplySink for ChannelSink {
    async fn send(&self, reply: Reply) -> Result<(), DispatchError> {
        self.client
            .send_reply(self.channel_id, &reply)
            .await
            .map(|_| ())
            .map_err(|e| DispatchError::Send(e.to_string()))
    }
}

fn action_rows(keyboard: &Keyboard) -> Vec<CreateActionRow> {
    let style = match keyboard {
        Keyboard::MainMenu => ButtonStyle::Primary,
        Keyboard::Suggestions(_) => ButtonStyle::Secondary,
    };

    keyboard
        .rows()
        .into_iter()
        .map(|row| {
            CreateActionRow::Buttons(
                row.into_iter()
                    .map(|button| button_for(&button.callback, button.label, style))
                    .collect(),
            )
        })
        .collect()
}

fn button_for(callback: &Callback, label: String, style: ButtonStyle) -> CreateButton {
    CreateButton::new(callback.custom_id())
        .label(label)
        .style(style)
}
