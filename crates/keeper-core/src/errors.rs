/// Core error type for the bot.
///
/// Adapter crates map their platform-specific errors into this type so the
/// core can treat failures consistently (fatal at startup vs logged per
/// event).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("platform error: {0}")]
    Platform(String),
}

pub type Result<T> = std::result::Result<T, Error>;
