use std::sync::Arc;

use keeper_core::config::Config;

mod health;

#[tokio::main]
async fn main() -> Result<(), keeper_core::Error> {
    keeper_core::logging::init("keeper")?;

    let cfg = Arc::new(Config::load()?);

    if cfg.environment.is_production() {
        health::spawn(cfg.health_port)?;
    }

    keeper_discord::gateway::run(cfg)
        .await
        .map_err(|e| keeper_core::Error::Platform(format!("discord gateway failed: {e}")))?;

    Ok(())
}
