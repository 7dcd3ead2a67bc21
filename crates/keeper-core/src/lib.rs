//! Core domain + application logic for the Keeper moderation bot.
//!
//! This crate is platform-agnostic. The Discord client lives behind the
//! `ChatPort` trait implemented in the adapter crate.

pub mod config;
pub mod cooldown;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod moderation;
pub mod ports;

pub use errors::{Error, Result};
