use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use chrono::Locale;
use serde::{Deserialize, Serialize};

use statusboard_core::catalog::{Catalog, Icon, StatusDefinition, StyleTokens};

pub const DEFAULT_TITLE: &str = "Office Status Board";
pub const DEFAULT_SUBTITLE: &str = "Select your current status to display";
pub const DEFAULT_LOCALE: &str = "en_US";

/// Board configuration loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Zero-pad the hour (`03:47 PM` instead of `3:47 PM`).
    #[serde(default)]
    pub pad_hour: bool,
    /// Draw ASCII stand-ins instead of pictographs, for terminals without
    /// emoji fonts.
    #[serde(default)]
    pub ascii_icons: bool,
    /// Replaces the built-in catalog when non-empty.
    #[serde(default, rename = "status")]
    pub statuses: Vec<StatusEntry>,
}

/// One `[[status]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusEntry {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub background: String,
    pub text: String,
    #[serde(default)]
    pub accent: Option<String>,
    #[serde(default)]
    pub shadow: Option<String>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_subtitle() -> String {
    DEFAULT_SUBTITLE.to_string()
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
            locale: default_locale(),
            pad_hour: false,
            ascii_icons: false,
            statuses: Vec::new(),
        }
    }
}

/// Return the config file path.
///
/// Precedence: `STATUSBOARD_CONFIG` env var > `<config_dir>/statusboard/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("STATUSBOARD_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("statusboard").join("config.toml"))
}

impl BoardConfig {
    /// Parse and validate config TOML.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input).context("failed to parse board config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read board config at {}", path.display()))?;

        Self::from_toml_str(&raw)
            .with_context(|| format!("invalid board config at {}", path.display()))
    }

    /// Load from [`config_path`]. A missing file yields the defaults; a file
    /// that exists but does not validate is an error.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => {
                let config = Self::from_path(&path)?;
                tracing::info!(path = %path.display(), statuses = config.statuses.len(), "loaded board config");
                Ok(config)
            }
            Some(path) => {
                tracing::info!(path = %path.display(), "no board config found; using defaults");
                Ok(Self::default())
            }
            None => {
                tracing::warn!("no config directory on this platform; using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validate required fields and semantic constraints.
    pub fn validate(&self) -> Result<()> {
        validate_nonempty("title", &self.title)?;
        self.locale()?;
        // Building the catalog checks ids, labels and icon names.
        self.catalog()?;
        for entry in &self.statuses {
            validate_nonempty("status.background", &entry.background)?;
            validate_nonempty("status.text", &entry.text)?;
        }
        Ok(())
    }

    pub fn locale(&self) -> Result<Locale> {
        Locale::try_from(self.locale.as_str())
            .map_err(|_| anyhow!("unknown locale {:?} (expected e.g. \"en_US\")", self.locale))
    }

    /// The catalog to run with: the configured statuses, or the built-in
    /// set when none are configured.
    pub fn catalog(&self) -> Result<Catalog> {
        if self.statuses.is_empty() {
            return Ok(Catalog::builtin());
        }

        let entries = self
            .statuses
            .iter()
            .map(StatusEntry::to_definition)
            .collect::<Result<Vec<_>>>()?;
        Catalog::new(entries)
    }
}

impl StatusEntry {
    fn to_definition(&self) -> Result<StatusDefinition> {
        let icon: Icon = self
            .icon
            .parse()
            .with_context(|| format!("status {:?} has an invalid icon", self.id))?;
        let style = StyleTokens {
            background: self.background.clone(),
            text: self.text.clone(),
            accent: self.accent.clone().unwrap_or_else(|| self.text.clone()),
            shadow: self
                .shadow
                .clone()
                .unwrap_or_else(|| self.background.clone()),
        };
        Ok(StatusDefinition::new(&self.id, &self.label, icon, style))
    }
}

fn validate_nonempty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        bail!("{field} must not be empty")
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUSTOM: &str = r##"
title = "Lab Door"
subtitle = "Where am I?"
locale = "fr_FR"
pad_hour = true
ascii_icons = true

[[status]]
id = "focus"
label = "Deep Focus"
icon = "monitor"
background = "indigo-500"
text = "indigo-100"

[[status]]
id = "lab"
label = "In the Lab"
icon = "users"
background = "#0f766e"
text = "#ccfbf1"
accent = "#5eead4"
shadow = "#134e4a"
"##;

    #[test]
    fn empty_file_gives_defaults() {
        let config = BoardConfig::from_toml_str("").unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.catalog().unwrap(), Catalog::builtin());
        assert!(matches!(config.locale().unwrap(), Locale::en_US));
    }

    #[test]
    fn parses_custom_catalog() {
        let config = BoardConfig::from_toml_str(CUSTOM).unwrap();
        assert_eq!(config.title, "Lab Door");
        assert!(config.pad_hour);
        assert!(config.ascii_icons);
        assert!(matches!(config.locale().unwrap(), Locale::fr_FR));

        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.len(), 2);
        let focus = catalog.by_id("focus").unwrap();
        assert_eq!(focus.icon, Icon::Monitor);
        // accent/shadow fall back to text/background
        assert_eq!(focus.style.accent, "indigo-100");
        assert_eq!(focus.style.shadow, "indigo-500");
        assert_eq!(catalog.by_id("lab").unwrap().style.shadow, "#134e4a");
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = BoardConfig::from_toml_str("colour = \"red\"")
            .unwrap_err()
            .to_string();
        assert!(err.contains("failed to parse board config TOML"));
    }

    #[test]
    fn duplicate_status_ids_are_rejected() {
        let raw = CUSTOM.replace("id = \"lab\"", "id = \"focus\"");
        let err = format!("{:#}", BoardConfig::from_toml_str(&raw).unwrap_err());
        assert!(err.contains("duplicate id \"focus\""), "{err}");
    }

    #[test]
    fn unknown_icon_is_rejected() {
        let raw = CUSTOM.replace("icon = \"users\"", "icon = \"rocket\"");
        let err = format!("{:#}", BoardConfig::from_toml_str(&raw).unwrap_err());
        assert!(err.contains("status \"lab\" has an invalid icon"), "{err}");
        assert!(err.contains("unknown icon \"rocket\""), "{err}");
    }

    #[test]
    fn unknown_locale_is_rejected() {
        let err = BoardConfig::from_toml_str("locale = \"xx_YY\"")
            .unwrap_err()
            .to_string();
        assert!(err.contains("unknown locale \"xx_YY\""));
    }

    #[test]
    fn blank_title_is_rejected() {
        let err = BoardConfig::from_toml_str("title = \"  \"")
            .unwrap_err()
            .to_string();
        assert!(err.contains("title must not be empty"));
    }

    #[test]
    fn blank_color_token_is_rejected() {
        let raw = CUSTOM.replace("background = \"indigo-500\"", "background = \"\"");
        let err = BoardConfig::from_toml_str(&raw).unwrap_err().to_string();
        assert!(err.contains("status.background must not be empty"));
    }

    #[test]
    fn from_path_reports_file_in_error() {
        let dir = std::env::temp_dir().join("statusboard-config-test");
        let _ = fs::create_dir_all(&dir);
        let path = dir.join("config.toml");
        fs::write(&path, "locale = 5").unwrap();

        let err = format!("{:#}", BoardConfig::from_path(&path).unwrap_err());
        assert!(err.contains("invalid board config at"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_is_read_error() {
        let path = std::env::temp_dir().join("statusboard-definitely-missing.toml");
        let err = BoardConfig::from_path(&path).unwrap_err().to_string();
        assert!(err.contains("failed to read board config"));
    }
}
