//! User settings.
//!
//! [`Settings`] is loaded once at startup from `$HOME/.mikros/config.toml`, or
//! from the file given with `--config`. Every key is optional; a missing
//! default file means built-in defaults, a missing explicit file is an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use surveyor::DEFAULT_FEATURE_PREFIX;
use tracing::debug;

use crate::error::{CliError, CliResult};

const SETTINGS_DIR: &str = ".mikros";
const SETTINGS_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub survey: SurveySettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// `colorful` or `plain`.
    pub theme: String,
    /// Screen-reader friendly prompts; implies the plain theme.
    pub accessible: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: "colorful".into(),
            accessible: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveySettings {
    /// Prefix tried when a selected feature is not registered under its own name.
    pub feature_prefix: String,
}

impl Default for SurveySettings {
    fn default() -> Self {
        Self {
            feature_prefix: DEFAULT_FEATURE_PREFIX.into(),
        }
    }
}

impl Settings {
    /// Load settings from `explicit`, or from the default location.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.is_file() => path,
                _ => {
                    debug!("no settings file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        debug!(path = %path.display(), "loading settings");
        let text = fs::read_to_string(&path).map_err(|source| CliError::Config {
            message: format!("cannot read {}", path.display()),
            source: Some(Box::new(source)),
        })?;
        Self::parse(&text).map_err(|source| CliError::Config {
            message: format!("invalid settings in {}", path.display()),
            source: Some(Box::new(source)),
        })
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// `$HOME/.mikros/config.toml`, when there is a home directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(SETTINGS_DIR).join(SETTINGS_FILE))
    }

    /// Whether prompts should be rendered without colors.
    pub fn plain_theme(&self) -> bool {
        self.ui.accessible || self.ui.theme.eq_ignore_ascii_case("plain")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.ui.theme, "colorful");
        assert!(!settings.ui.accessible);
        assert_eq!(settings.survey.feature_prefix, "mikros_");
        assert!(!settings.plain_theme());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let settings = Settings::parse("[ui]\naccessible = true\n").unwrap();
        assert!(settings.ui.accessible);
        assert_eq!(settings.ui.theme, "colorful");
        assert_eq!(settings.survey.feature_prefix, "mikros_");
        assert!(settings.plain_theme());
    }

    #[test]
    fn plain_theme_by_name() {
        let settings = Settings::parse("[ui]\ntheme = \"Plain\"\n").unwrap();
        assert!(settings.plain_theme());
    }

    #[test]
    fn custom_prefix() {
        let settings = Settings::parse("[survey]\nfeature_prefix = \"acme_\"\n").unwrap();
        assert_eq!(settings.survey.feature_prefix, "acme_");
    }

    #[test]
    fn invalid_toml() {
        assert!(Settings::parse("[ui\n").is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = Settings::load(Some(Path::new("/nonexistent/surveyor.toml"))).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn default_path_ends_with_config_toml() {
        if let Some(path) = Settings::default_path() {
            assert!(path.ends_with(".mikros/config.toml"));
        }
    }
}
