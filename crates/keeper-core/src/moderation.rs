use std::time::Duration;

use tracing::{debug, info, warn};

use crate::{
    cooldown::{evaluate, format_duration, CooldownDecision, CooldownPolicy},
    domain::{ChannelId, MessageSnapshot, UserId},
    ports::ChatPort,
    Result,
};

/// How far back the handler looks for the author's previous message. The
/// platform caps a single history fetch at this size.
pub const HISTORY_WINDOW: u8 = 100;

/// What the handler did with one incoming message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Authored by the bot itself, or posted outside the monitored channel.
    Skipped,
    /// No prior message in the window, or the cooldown had elapsed.
    Allowed,
    /// Cooldown violation: the message was removed and the author notified.
    Removed { remaining: Duration },
}

/// Applies the cooldown policy to messages in the monitored channel.
///
/// Stateless apart from its configuration: every decision is re-derived
/// from the channel history fetched at evaluation time.
pub struct ModerationHandler {
    policy: CooldownPolicy,
    monitored_channel: ChannelId,
    log_channel: ChannelId,
}

impl ModerationHandler {
    pub fn new(
        policy: CooldownPolicy,
        monitored_channel: ChannelId,
        log_channel: ChannelId,
    ) -> Self {
        Self {
            policy,
            monitored_channel,
            log_channel,
        }
    }

    /// React to one message-creation event.
    ///
    /// Returns `Err` only when the history fetch fails. Delete and notify
    /// are independent best-effort steps: each failure is logged and the
    /// event still completes.
    pub async fn handle(
        &self,
        chat: &dyn ChatPort,
        self_user: UserId,
        message: &MessageSnapshot,
    ) -> Result<Outcome> {
        if message.author == self_user || message.channel != self.monitored_channel {
            return Ok(Outcome::Skipped);
        }

        let history = chat
            .recent_messages(message.channel, HISTORY_WINDOW)
            .await?;

        let Some(prior) = latest_prior(&history, message) else {
            debug!(user = message.author.0, "no previous message in window");
            return Ok(Outcome::Allowed);
        };

        // A prior timestamped after the trigger counts as zero elapsed, not
        // as a negative span.
        let elapsed = message
            .timestamp
            .signed_duration_since(prior.timestamp)
            .to_std()
            .unwrap_or(Duration::ZERO);

        match evaluate(elapsed, self.policy.cooldown) {
            CooldownDecision::Allowed => {
                debug!(user = message.author.0, ?elapsed, "cooldown satisfied");
                Ok(Outcome::Allowed)
            }
            CooldownDecision::Blocked { remaining } => {
                info!(
                    user = message.author.0,
                    wait = %format_duration(remaining),
                    "cooldown violation, removing message"
                );

                if let Err(e) = chat.delete_message(message.channel, message.id).await {
                    warn!(user = message.author.0, "failed to delete message: {e}");
                }

                let notice = rejection_notice(message.author, remaining);
                if let Err(e) = chat.send_message(self.log_channel, &notice).await {
                    warn!(user = message.author.0, "failed to post violation notice: {e}");
                }

                Ok(Outcome::Removed { remaining })
            }
        }
    }
}

/// The author's most recent message other than the trigger itself.
///
/// The trigger is excluded by id, not by position, and selection goes by
/// timestamp, so no assumption is made about the batch order.
fn latest_prior<'a>(
    history: &'a [MessageSnapshot],
    trigger: &MessageSnapshot,
) -> Option<&'a MessageSnapshot> {
    history
        .iter()
        .filter(|m| m.id != trigger.id && m.author == trigger.author)
        .max_by_key(|m| m.timestamp)
}

/// The notice posted to the log channel when a message is removed.
fn rejection_notice(author: UserId, remaining: Duration) -> String {
    format!(
        "{} The Keeper rejects your proverb. You must wait {} before posting again.",
        author.mention(),
        format_duration(remaining)
    )
}
