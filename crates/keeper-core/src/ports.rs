use async_trait::async_trait;

use crate::{
    domain::{ChannelId, MessageId, MessageSnapshot},
    Result,
};

/// Chat-platform port.
///
/// Discord is the first implementation; the shape is the minimal capability
/// set the moderation handler needs, so the handler can be exercised
/// against a fake in tests.
#[async_trait]
pub trait ChatPort: Send + Sync {
    /// Fetch up to `limit` of the most recent messages in a channel, in
    /// whatever order the platform returns them.
    async fn recent_messages(&self, channel: ChannelId, limit: u8) -> Result<Vec<MessageSnapshot>>;

    /// Delete a single message.
    async fn delete_message(&self, channel: ChannelId, message: MessageId) -> Result<()>;

    /// Post a plain-text message, returning its id.
    async fn send_message(&self, channel: ChannelId, text: &str) -> Result<MessageId>;
}
