//! Discord adapter (serenity).
//!
//! This crate implements the `keeper-core` ChatPort over the Discord HTTP
//! API and wires the gateway event stream to the moderation handler.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serenity::all::{GetMessages, Http, Message};

pub mod gateway;

use keeper_core::{
    domain::{ChannelId, MessageId, MessageSnapshot, UserId},
    errors::Error,
    ports::ChatPort,
    Result,
};

/// ChatPort implementation backed by serenity's HTTP client.
#[derive(Clone)]
pub struct DiscordChat {
    http: Arc<Http>,
}

impl DiscordChat {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    fn channel(channel: ChannelId) -> serenity::all::ChannelId {
        serenity::all::ChannelId::new(channel.0)
    }

    fn map_err(e: serenity::Error) -> Error {
        Error::Platform(format!("discord error: {e}"))
    }
}

/// Reduce a full platform message to the view the core consumes.
pub fn snapshot(msg: &Message) -> MessageSnapshot {
    MessageSnapshot {
        id: MessageId(msg.id.get()),
        channel: ChannelId(msg.channel_id.get()),
        author: UserId(msg.author.id.get()),
        timestamp: DateTime::from_timestamp(msg.timestamp.unix_timestamp(), 0)
            .unwrap_or(DateTime::<Utc>::MIN_UTC),
    }
}

#[async_trait]
impl ChatPort for DiscordChat {
    async fn recent_messages(&self, channel: ChannelId, limit: u8) -> Result<Vec<MessageSnapshot>> {
        let batch = Self::channel(channel)
            .messages(&self.http, GetMessages::new().limit(limit))
            .await
            .map_err(Self::map_err)?;
        Ok(batch.iter().map(snapshot).collect())
    }

    async fn delete_message(&self, channel: ChannelId, message: MessageId) -> Result<()> {
        Self::channel(channel)
            .delete_message(&self.http, serenity::all::MessageId::new(message.0))
            .await
            .map_err(Self::map_err)
    }

    async fn send_message(&self, channel: ChannelId, text: &str) -> Result<MessageId> {
        let sent = Self::channel(channel)
            .say(&self.http, text)
            .await
            .map_err(Self::map_err)?;
        Ok(MessageId(sent.id.get()))
    }
}
