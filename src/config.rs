//! On-disk configuration.
//!
//! Lives at `<config dir>/termfolio/config.json`. A missing file is not an
//! error: the app falls back to defaults and runs without SMTP delivery.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine the user config directory")]
    NoConfigDir,
    #[error("could not determine the user data directory")]
    NoDataDir,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed config file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// SMTP delivery settings. Absent means contact form sends are dry runs.
    #[serde(default)]
    pub mail: Option<MailConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// Leave both credential fields empty for an unauthenticated relay.
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    pub from_address: String,
    pub to_address: String,
}

fn default_smtp_port() -> u16 {
    587
}

impl Config {
    pub fn load() -> Result<Config, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Config::load_from(&config_dir.join("termfolio").join("config.json"))
    }

    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Directory for runtime artifacts such as the log file, created on demand.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = dirs::data_dir().ok_or(ConfigError::NoDataDir)?.join("termfolio");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert!(config.mail.is_none());
    }

    #[test]
    fn full_mail_section_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "mail": {
                    "smtp_host": "smtp.example.com",
                    "smtp_port": 465,
                    "smtp_username": "user",
                    "smtp_password": "hunter2",
                    "from_address": "portfolio@example.com",
                    "to_address": "owner@example.com"
                }
            }"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        let mail = config.mail.unwrap();
        assert_eq!(mail.smtp_host, "smtp.example.com");
        assert_eq!(mail.smtp_port, 465);
        assert_eq!(mail.smtp_username, "user");
        assert_eq!(mail.to_address, "owner@example.com");
    }

    #[test]
    fn omitted_fields_take_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "mail": {
                    "smtp_host": "smtp.example.com",
                    "from_address": "portfolio@example.com",
                    "to_address": "owner@example.com"
                }
            }"#,
        )
        .unwrap();

        let mail = Config::load_from(&path).unwrap().mail.unwrap();
        assert_eq!(mail.smtp_port, 587);
        assert!(mail.smtp_username.is_empty());
        assert!(mail.smtp_password.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Json(_))
        ));
    }
}
