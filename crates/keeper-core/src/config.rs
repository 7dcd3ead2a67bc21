use std::env;

use crate::{cooldown::CooldownPolicy, domain::ChannelId, errors::Error, Result};

/// Deployment environment tag; everything except `"production"` counts as
/// development.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeployEnv {
    Production,
    Development,
}

impl DeployEnv {
    pub fn is_production(self) -> bool {
        matches!(self, DeployEnv::Production)
    }
}

/// Typed process configuration, loaded once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub auth_token: String,
    pub environment: DeployEnv,
    pub monitored_channel: ChannelId,
    pub log_channel: ChannelId,
    pub cooldown_hours: u64,
    pub health_port: u16,
}

impl Config {
    /// Read configuration from the environment, with an optional `.env`
    /// file loaded first (existing variables win). Everything except the
    /// health port is required; any missing or malformed value is an error.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let auth_token = require_str("AUTH_TOKEN")?;
        let environment = parse_env_tag(&require_str("ENV")?);
        let monitored_channel = require_channel("MOD_CHANNEL_ID")?;
        let log_channel = require_channel("LOG_CHANNEL_ID")?;
        let cooldown_hours = require_u64("COOLDOWN_HOURS")?;

        let health_port = match env_str("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                Error::Config(format!("PORT must be a port number, got {raw:?}"))
            })?,
            None => 8080,
        };

        Ok(Self {
            auth_token,
            environment,
            monitored_channel,
            log_channel,
            cooldown_hours,
            health_port,
        })
    }

    pub fn cooldown_policy(&self) -> CooldownPolicy {
        CooldownPolicy::from_hours(self.cooldown_hours)
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn require_str(key: &str) -> Result<String> {
    match env_str(key).map(|s| s.trim().to_string()) {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(Error::Config(format!(
            "{key} environment variable is required"
        ))),
    }
}

fn require_channel(key: &str) -> Result<ChannelId> {
    let raw = require_str(key)?;
    parse_channel_id(&raw).ok_or_else(|| {
        Error::Config(format!("{key} must be a numeric channel id, got {raw:?}"))
    })
}

fn require_u64(key: &str) -> Result<u64> {
    let raw = require_str(key)?;
    raw.parse::<u64>()
        .map_err(|_| Error::Config(format!("{key} must be a whole number, got {raw:?}")))
}

fn parse_channel_id(raw: &str) -> Option<ChannelId> {
    match raw.parse::<u64>() {
        Ok(id) if id != 0 => Some(ChannelId(id)),
        _ => None,
    }
}

fn parse_env_tag(raw: &str) -> DeployEnv {
    if raw == "production" {
        DeployEnv::Production
    } else {
        DeployEnv::Development
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_channel_ids() {
        assert_eq!(
            parse_channel_id("123456789012345678"),
            Some(ChannelId(123456789012345678))
        );
        assert_eq!(parse_channel_id("abc"), None);
        assert_eq!(parse_channel_id("0"), None);
        assert_eq!(parse_channel_id(""), None);
    }

    #[test]
    fn production_tag_is_exact() {
        assert!(parse_env_tag("production").is_production());
        assert!(!parse_env_tag("development").is_production());
        assert!(!parse_env_tag("Production").is_production());
    }
}
