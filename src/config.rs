//! Configuration loader and validator for the Trello sticker notifier.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::model::MarkerKey;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Root configuration struct mirroring the YAML schema exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub trello: Trello,
    pub slack: Slack,
}

/// Trello API credentials and the board to scan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trello {
    pub api_key: String,
    pub api_token: String,
    pub board_id: String,
    pub target_sticker: MarkerKey,
}

/// Slack delivery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slack {
    pub webhook_url: String,
}

/// Load configuration from a YAML file and validate it.
/// - If `path` is None, uses `config.yaml` in the current working directory.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or_else(|| Path::new("config.yaml"));
    let content = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    validate(&cfg)?;
    Ok(cfg)
}

/// Validate a configuration instance.
fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.trello.api_key.trim().is_empty() {
        return Err(ConfigError::Invalid("trello.api_key must be non-empty"));
    }
    if cfg.trello.api_token.trim().is_empty() {
        return Err(ConfigError::Invalid("trello.api_token must be non-empty"));
    }
    if cfg.trello.board_id.trim().is_empty() {
        return Err(ConfigError::Invalid("trello.board_id must be non-empty"));
    }
    if cfg.trello.target_sticker.value().trim().is_empty() {
        return Err(ConfigError::Invalid(
            "trello.target_sticker.value must be non-empty",
        ));
    }

    let url = cfg.slack.webhook_url.trim();
    if url.is_empty() {
        return Err(ConfigError::Invalid("slack.webhook_url must be non-empty"));
    }
    if reqwest::Url::parse(url).is_err() {
        return Err(ConfigError::Invalid("slack.webhook_url must be a valid URL"));
    }

    Ok(())
}

/// Returns the example YAML shipped as `example.config.yaml`.
pub fn example() -> &'static str {
    r#"trello:
  api_key: "YOUR_TRELLO_API_KEY"
  api_token: "YOUR_TRELLO_API_TOKEN"
  board_id: "TRELLO_BOARD_ID"
  # Match stickers by `image` (e.g. "check", "thumbsup") or by sticker `id`.
  target_sticker:
    by: image
    value: "check"

slack:
  webhook_url: "https://hooks.slack.com/services/T000/B000/XXXX"
"#
}
