//! Application Configuration
//!
//! `config.json` in the app config directory. A missing file is created
//! with defaults; unknown or missing fields fall back to defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{UserId, WidgetStrings};

const CONFIG_FILE: &str = "config.json";
const SECRET_FILE: &str = "secret.key";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Identity of the local user
    pub user_id: u64,
    pub display_name: String,
    /// Only administrators see and write the widget
    pub administrator: bool,
    /// Anti-forgery tokens stay valid between half and all of this
    pub token_lifetime_secs: u64,
    pub strings: WidgetStrings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            user_id: 1,
            display_name: "admin".to_string(),
            administrator: true,
            token_lifetime_secs: 86_400,
            strings: WidgetStrings::default(),
        }
    }
}

impl AppConfig {
    pub fn user(&self) -> UserId {
        UserId(self.user_id)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.user().is_valid() {
            return Err(ConfigError::Invalid("user_id must be non-zero".into()));
        }
        if self.token_lifetime_secs < 2 {
            return Err(ConfigError::Invalid("token_lifetime_secs must be at least 2".into()));
        }
        Ok(())
    }

    /// Load `config.json` from `dir`, writing defaults if it does not exist.
    pub fn load_or_init(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        let config = if path.exists() {
            serde_json::from_str::<AppConfig>(&fs::read_to_string(&path)?)?
        } else {
            let config = AppConfig::default();
            config.save(dir)?;
            config
        };
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, dir: &Path) -> Result<PathBuf, ConfigError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(path)
    }
}

/// Per-install token secret, generated on first use.
pub fn load_or_create_secret(dir: &Path) -> Result<String, ConfigError> {
    let path = dir.join(SECRET_FILE);
    if path.exists() {
        let secret = fs::read_to_string(&path)?.trim().to_string();
        if !secret.is_empty() {
            return Ok(secret);
        }
    }

    fs::create_dir_all(dir)?;
    let secret = uuid::Uuid::new_v4().simple().to_string();
    fs::write(&path, &secret)?;
    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_written_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_init(dir.path()).unwrap();

        assert_eq!(config, AppConfig::default());
        assert!(dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{"user_id": 5, "strings": {"save_notes": "Notizen speichern"}}"#,
        )
        .unwrap();

        let config = AppConfig::load_or_init(dir.path()).unwrap();
        assert_eq!(config.user(), UserId(5));
        assert!(config.administrator);
        assert_eq!(config.strings.save_notes, "Notizen speichern");
        assert_eq!(config.strings.saving, WidgetStrings::default().saving);
    }

    #[test]
    fn test_zero_user_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), r#"{"user_id": 0}"#).unwrap();
        assert!(matches!(AppConfig::load_or_init(dir.path()), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_secret_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        let first = load_or_create_secret(dir.path()).unwrap();
        let second = load_or_create_secret(dir.path()).unwrap();
        assert_eq!(first.len(), 32);
        assert_eq!(first, second);
    }
}
