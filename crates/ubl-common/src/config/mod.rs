//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, Environment, FailPolicy, FeedConfig, GateConfig,
    KickMessages, LogConfig, DEFAULT_FEED_URL,
};
