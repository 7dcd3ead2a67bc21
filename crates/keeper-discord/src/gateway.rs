use std::sync::Arc;

use serenity::all::{Client, Context, EventHandler, GatewayIntents, Message, Ready};
use serenity::async_trait;
use tracing::{debug, error, info, warn};

use keeper_core::{config::Config, domain::UserId, moderation::ModerationHandler};

use crate::{snapshot, DiscordChat};

/// Routes gateway events into the moderation handler.
struct EventRouter {
    moderation: ModerationHandler,
}

#[async_trait]
impl EventHandler for EventRouter {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("bot is running as {}", ready.user.name);
    }

    async fn message(&self, ctx: Context, msg: Message) {
        debug!(channel = msg.channel_id.get(), "message received");

        let self_user = UserId(ctx.cache.current_user().id.get());
        let chat = DiscordChat::new(ctx.http.clone());

        if let Err(e) = self.moderation.handle(&chat, self_user, &snapshot(&msg)).await {
            warn!("failed to process message: {e}");
        }
    }
}

/// Open the gateway session and block until shutdown.
pub async fn run(cfg: Arc<Config>) -> anyhow::Result<()> {
    let moderation = ModerationHandler::new(
        cfg.cooldown_policy(),
        cfg.monitored_channel,
        cfg.log_channel,
    );

    let mut client = Client::builder(&cfg.auth_token, GatewayIntents::GUILD_MESSAGES)
        .event_handler(EventRouter { moderation })
        .await?;
    info!("bot session created");

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to listen for shutdown signal: {e}");
            return;
        }
        info!("shutting down");
        shard_manager.shutdown_all().await;
    });

    info!(
        cooldown_hours = cfg.cooldown_hours,
        monitored_channel = cfg.monitored_channel.0,
        log_channel = cfg.log_channel.0,
        "starting gateway session"
    );

    client.start().await?;
    Ok(())
}
