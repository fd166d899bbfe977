//! # Configuration
//!
//! Settings are read from the environment, after loading a `.env` file from the
//! working directory when one exists.
//!
//! | Variable | Values | Default |
//! |---|---|---|
//! | `BOARD_LOCALE` | `en`, `de` | `en` |
//! | `BOARD_CHANNEL_CAPACITY` | positive integer | `32` |
//! | `BOARD_DEFAULT_COLLECTION` | `order_items`, `products` | `order_items` |

use crate::lifecycle::DEFAULT_CHANNEL_CAPACITY;
use crate::policy::{Locale, UnsupportedLocale};
use crate::realtime::{Collection, UnknownCollection};
use dotenvy::dotenv;
use std::env;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid BOARD_LOCALE: {0}")]
    Locale(#[from] UnsupportedLocale),

    #[error("Invalid BOARD_CHANNEL_CAPACITY {0:?}: expected a positive integer")]
    ChannelCapacity(String),

    #[error("Invalid BOARD_DEFAULT_COLLECTION: {0}")]
    Collection(#[from] UnknownCollection),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Language of the status labels.
    pub locale: Locale,
    /// Mailbox size of each record actor.
    pub channel_capacity: usize,
    /// Collection assumed for realtime frames that do not name one.
    pub default_collection: Collection,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            default_collection: Collection::default(),
        }
    }
}

impl BoardConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        let config = Self::from_lookup(|name| env::var(name).ok())?;
        tracing::info!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Builds the configuration from `lookup`, which returns a variable's value if set.
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let locale = match get("BOARD_LOCALE") {
            Some(value) => value.parse::<Locale>()?,
            None => defaults.locale,
        };
        let channel_capacity = match get("BOARD_CHANNEL_CAPACITY") {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::ChannelCapacity(value)),
            },
            None => defaults.channel_capacity,
        };
        let default_collection = match get("BOARD_DEFAULT_COLLECTION") {
            Some(value) => value.trim().parse::<Collection>()?,
            None => defaults.default_collection,
        };

        Ok(Self {
            locale,
            channel_capacity,
            default_collection,
        })
    }
}
