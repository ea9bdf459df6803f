//! Layout defaults and labels.
//!
//! Loaded from JSON, then adjusted by `MSGBOX_*` environment variables. Every field is
//! optional in the file; missing ones keep their defaults. Widths are terminal cells.

use crate::buttons::ButtonText;
use crate::terminal::ThemeName;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value for {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },
    #[error("max_width ({max}) is smaller than min_width ({min})")]
    WidthRange { min: u16, max: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MessageBoxConfig {
    /// Rows of a multi-line prompt when the request does not say.
    pub default_text_height: u16,
    pub max_width: u16,
    pub min_width: u16,
    pub min_progress_width: u16,
    pub min_prompt_width: u16,
    /// Gap after each footer button.
    pub button_spacing: u16,
    pub button_text: ButtonText,
    pub theme: ThemeName,
}

impl Default for MessageBoxConfig {
    fn default() -> Self {
        Self {
            default_text_height: 4,
            max_width: 72,
            min_width: 20,
            min_progress_width: 40,
            min_prompt_width: 40,
            button_spacing: 1,
            button_text: ButtonText::default(),
            theme: ThemeName::default(),
        }
    }
}

const ENV_MAX_WIDTH: &str = "MSGBOX_MAX_WIDTH";
const ENV_MIN_WIDTH: &str = "MSGBOX_MIN_WIDTH";
const ENV_MIN_PROGRESS_WIDTH: &str = "MSGBOX_MIN_PROGRESS_WIDTH";
const ENV_THEME: &str = "MSGBOX_THEME";

impl MessageBoxConfig {
    pub fn from_json_str(value: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Defaults with process environment overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_MAX_WIDTH) {
            self.max_width = parse_cells(ENV_MAX_WIDTH, &value)?;
        }
        if let Some(value) = lookup(ENV_MIN_WIDTH) {
            self.min_width = parse_cells(ENV_MIN_WIDTH, &value)?;
        }
        if let Some(value) = lookup(ENV_MIN_PROGRESS_WIDTH) {
            self.min_progress_width = parse_cells(ENV_MIN_PROGRESS_WIDTH, &value)?;
        }
        if let Some(value) = lookup(ENV_THEME) {
            self.theme = ThemeName::parse(&value).ok_or(ConfigError::InvalidEnv {
                key: ENV_THEME,
                value,
            })?;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_width < self.min_width {
            return Err(ConfigError::WidthRange {
                min: self.min_width,
                max: self.max_width,
            });
        }
        Ok(())
    }
}

fn parse_cells(key: &'static str, value: &str) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidEnv {
            key,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, MessageBoxConfig};
    use crate::terminal::ThemeName;
    use std::collections::HashMap;

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            MessageBoxConfig::from_json_str(r#"{"max_width": 50, "button_text": {"ok": "Okay"}}"#)
                .unwrap();
        assert_eq!(config.max_width, 50);
        assert_eq!(config.min_width, MessageBoxConfig::default().min_width);
        assert_eq!(config.button_text.ok, "Okay");
        assert_eq!(config.button_text.cancel, "Cancel");
    }

    #[test]
    fn inverted_width_bounds_are_rejected() {
        let err = MessageBoxConfig::from_json_str(r#"{"max_width": 10, "min_width": 30}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::WidthRange { min: 30, max: 10 }));
    }

    #[test]
    fn malformed_json_reports_json_error() {
        let err = MessageBoxConfig::from_json_str("{").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn env_overrides_apply() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("MSGBOX_MAX_WIDTH", "64"),
            ("MSGBOX_THEME", "mono"),
        ]);
        let mut config = MessageBoxConfig::default();
        config
            .apply_env(|key| vars.get(key).map(|value| value.to_string()))
            .unwrap();
        assert_eq!(config.max_width, 64);
        assert_eq!(config.theme, ThemeName::Mono);
    }

    #[test]
    fn env_rejects_non_numeric_width() {
        let mut config = MessageBoxConfig::default();
        let err = config
            .apply_env(|key| (key == "MSGBOX_MIN_WIDTH").then(|| "wide".to_string()))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnv { key: "MSGBOX_MIN_WIDTH", .. }
        ));
    }
}
