use chrono::{DateTime, Utc};

/// Discord user id (snowflake).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UserId(pub u64);

impl UserId {
    /// Mention syntax the platform renders as a ping.
    pub fn mention(&self) -> String {
        format!("<@{}>", self.0)
    }
}

/// Discord channel id (snowflake).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChannelId(pub u64);

/// Discord message id (snowflake).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageId(pub u64);

/// A read-only view of a platform message, carrying only what the
/// moderation core needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageSnapshot {
    pub id: MessageId,
    pub channel: ChannelId,
    pub author: UserId,
    pub timestamp: DateTime<Utc>,
}
