use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_GREETING: &str = "Hello! How can I assist you today?";
pub const DEFAULT_BOT_REPLY: &str =
    "I'm a simple bot. I don't have real responses yet, but I'm here to help!";
pub const DEFAULT_REPLY_DELAY_MS: u32 = 1000;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
reply_delay_ms = 1000
greeting = "Hello! How can I assist you today?"
bot_reply = "I'm a simple bot. I don't have real responses yet, but I'm here to help!"
log_level = "debug"
"#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown log level '{0}', expected one of error|warn|info|debug|trace")]
    LogLevel(String),
}

/// Runtime settings of the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Delay before the scripted bot answers
    pub reply_delay_ms: u32,
    pub greeting: String,
    pub bot_reply: String,
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            greeting: DEFAULT_GREETING.to_string(),
            bot_reply: DEFAULT_BOT_REPLY.to_string(),
            log_level: "debug".to_string(),
        }
    }
}

/// Partial settings, e.g. parsed from the page query string
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfigOverrides {
    pub reply_delay_ms: Option<u32>,
    pub greeting: Option<String>,
    pub bot_reply: Option<String>,
    pub log_level: Option<String>,
}

impl UiConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: UiConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse the embedded defaults
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::LogLevel(self.log_level.clone()));
        }
        Ok(())
    }

    /// Overlay the fields that are set. Rejects the result if it fails validation,
    /// leaving `self` unchanged.
    pub fn apply(&mut self, overrides: UiConfigOverrides) -> Result<(), ConfigError> {
        let mut next = self.clone();
        if let Some(delay) = overrides.reply_delay_ms {
            next.reply_delay_ms = delay;
        }
        if let Some(greeting) = overrides.greeting {
            next.greeting = greeting;
        }
        if let Some(reply) = overrides.bot_reply {
            next.bot_reply = reply;
        }
        if let Some(level) = overrides.log_level {
            next.log_level = level;
        }
        next.validate()?;
        *self = next;
        Ok(())
    }
}
