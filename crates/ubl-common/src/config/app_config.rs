//! Application configuration structs
//!
//! Loads configuration from an optional `ubl.toml`/`ubl.yaml` file and `UBL__`-prefixed
//! environment variables (e.g. `UBL__FEED__URL`, `UBL__GATE__FAIL_POLICY`).

use std::path::Path;

use config::builder::DefaultState;
use config::{ConfigBuilder, File, FileFormat};
use serde::Deserialize;

/// Public Universal Ban List spreadsheet, exported as CSV
pub const DEFAULT_FEED_URL: &str =
    "https://docs.google.com/spreadsheet/ccc?key=0AjACyg1Jc3_GdEhqWU5PTEVHZDVLYWphd2JfaEZXd2c&output=csv";

/// Config file looked up in the working directory when no path is given
const DEFAULT_CONFIG_NAME: &str = "ubl";

const ENV_PREFIX: &str = "UBL";
const ENV_SEPARATOR: &str = "__";
const ENV_LIST_SEPARATOR: &str = "|";

/// Keys that hold lists of template lines
const LIST_KEYS: [&str; 3] = [
    "kick_messages.permanent",
    "kick_messages.temporary",
    "kick_messages.unavailable",
];

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub gate: GateConfig,
    #[serde(default)]
    pub kick_messages: KickMessages,
    #[serde(default)]
    pub log: LogConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Ban list feed location and transport limits
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Feed URL; unset or blank falls back to [`DEFAULT_FEED_URL`]
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl FeedConfig {
    /// The configured URL, or the public feed when unset
    #[must_use]
    pub fn url(&self) -> &str {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_FEED_URL)
    }
}

/// What the login gate does when the feed cannot be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FailPolicy {
    /// Admit the player
    #[default]
    Open,
    /// Refuse the player with the `unavailable` message
    Closed,
}

/// Login gate settings
#[derive(Debug, Clone, Deserialize)]
pub struct GateConfig {
    /// How long a login waits for the feed before the fail policy applies
    #[serde(default = "default_gate_timeout")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub fail_policy: FailPolicy,
}

/// Kick message templates, one entry per line
///
/// Placeholders: `{reason}`, `{banDate}`, `{banLength}`, `{expireDate}`, `{case}`.
/// `&` color codes are translated when rendered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KickMessages {
    #[serde(default = "default_permanent_message")]
    pub permanent: Vec<String>,
    #[serde(default = "default_temporary_message")]
    pub temporary: Vec<String>,
    #[serde(default = "default_unavailable_message")]
    pub unavailable: Vec<String>,
}

/// Log output settings
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

// Default value functions
fn default_app_name() -> String {
    "UniversalBanList".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_request_timeout() -> u64 {
    30
}

fn default_gate_timeout() -> u64 {
    10_000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(ToString::to_string).collect()
}

fn default_permanent_message() -> Vec<String> {
    lines(&[
        "&cYou are permanently banned on the Universal Ban List.",
        "",
        "&7Reason: &f{reason}",
        "&7Banned on: &f{banDate}",
        "&7Case: &f{case}",
    ])
}

fn default_temporary_message() -> Vec<String> {
    lines(&[
        "&cYou are banned on the Universal Ban List.",
        "",
        "&7Reason: &f{reason}",
        "&7Banned on: &f{banDate}",
        "&7Length: &f{banLength}",
        "&7Expires: &f{expireDate}",
        "&7Case: &f{case}",
    ])
}

fn default_unavailable_message() -> Vec<String> {
    lines(&["&cThe ban list could not be checked. Please try again shortly."])
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            env: default_env(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: None,
            connect_timeout_secs: default_connect_timeout(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_gate_timeout(),
            fail_policy: FailPolicy::default(),
        }
    }
}

impl Default for KickMessages {
    fn default() -> Self {
        Self {
            permanent: default_permanent_message(),
            temporary: default_temporary_message(),
            unavailable: default_unavailable_message(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from `./ubl.{toml,yaml,...}` (if present) and the environment
    ///
    /// # Errors
    /// Returns an error if a source cannot be read or a value is invalid
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_sources(File::with_name(DEFAULT_CONFIG_NAME).required(false))
    }

    /// Load configuration from an explicit file (required) and the environment
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_sources(File::from(path).required(true))
    }

    /// Parse configuration from TOML text only (no environment overrides)
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::build(
            config::Config::builder().add_source(File::from_str(toml, FileFormat::Toml)),
        )
    }

    fn load_sources<F>(file: F) -> Result<Self, ConfigError>
    where
        F: config::Source + Send + Sync + 'static,
    {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let mut env = config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR)
            .list_separator(ENV_LIST_SEPARATOR)
            .try_parsing(true);
        for key in LIST_KEYS {
            env = env.with_list_parse_key(key);
        }

        Self::build(config::Config::builder().add_source(file).add_source(env))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but cannot work
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gate.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue("gate.timeout_ms", "must be positive".into()));
        }
        if self.feed.connect_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "feed.connect_timeout_secs",
                "must be positive".into(),
            ));
        }
        if self.feed.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "feed.request_timeout_secs",
                "must be positive".into(),
            ));
        }
        for (key, template) in [
            ("kick_messages.permanent", &self.kick_messages.permanent),
            ("kick_messages.temporary", &self.kick_messages.temporary),
            ("kick_messages.unavailable", &self.kick_messages.unavailable),
        ] {
            if template.is_empty() {
                return Err(ConfigError::InvalidValue(key, "needs at least one line".into()));
            }
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
