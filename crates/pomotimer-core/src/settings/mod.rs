//! User preferences.
//!
//! Stores:
//! - Work and break durations (whole minutes)
//! - Accent colour, as a key into the palette
//! - Theme mode
//! - The colour palette, built-ins first, then user-defined colours
//!
//! The record is persisted as JSON by [`SettingsStore`](crate::storage::SettingsStore).

mod form;

pub use form::SettingsForm;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, ValidationError};

/// Colours every palette contains, in display order.
pub const BUILTIN_COLORS: [(&str, &str); 5] = [
    ("Default", "#1f538d"),
    ("Red", "#C50000"),
    ("Blue", "#0300B6"),
    ("Green", "#028E02"),
    ("Pink", "#FF17ED"),
];

pub const DEFAULT_ACCENT: &str = "Default";

/// Name → `#RRGGBB`, insertion ordered.
pub type Palette = IndexMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::System, ThemeMode::Light, ThemeMode::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::System => "System",
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ThemeMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::UnknownTheme(s.to_string()))
    }
}

/// Persisted application settings.
///
/// Field names on disk follow the established `config.json` layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "work_time")]
    pub work_minutes: u32,
    #[serde(rename = "break_time")]
    pub break_minutes: u32,
    #[serde(rename = "button_color")]
    pub accent: String,
    #[serde(rename = "theme_color")]
    pub theme: ThemeMode,
    #[serde(rename = "colors")]
    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_minutes: 50,
            break_minutes: 10,
            accent: DEFAULT_ACCENT.to_string(),
            theme: ThemeMode::System,
            palette: builtin_palette(),
        }
    }
}

impl Settings {
    pub fn work_secs(&self) -> u64 {
        u64::from(self.work_minutes) * 60
    }

    pub fn break_secs(&self) -> u64 {
        u64::from(self.break_minutes) * 60
    }

    /// Hex code of the accent colour.
    pub fn accent_hex(&self) -> &str {
        self.palette
            .get(&self.accent)
            .map(String::as_str)
            .unwrap_or(BUILTIN_COLORS[0].1)
    }

    /// Check invariants of a freshly parsed record, restoring any missing
    /// built-in colours.
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        if self.work_minutes == 0 {
            return Err(invalid("work_time", "must be positive"));
        }
        if self.break_minutes == 0 {
            return Err(invalid("break_time", "must be positive"));
        }
        if let Some((name, hex)) = self.palette.iter().find(|(_, hex)| !is_hex_color(hex)) {
            return Err(invalid("colors", &format!("'{name}' has invalid hex '{hex}'")));
        }

        for (name, hex) in BUILTIN_COLORS {
            if !self.palette.contains_key(name) {
                self.palette.insert(name.to_string(), hex.to_string());
            }
        }

        if !self.palette.contains_key(&self.accent) {
            return Err(invalid(
                "button_color",
                &format!("'{}' is not in the palette", self.accent),
            ));
        }
        Ok(self)
    }
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::Invalid {
        key: key.to_string(),
        message: message.to_string(),
    }
}

pub fn builtin_palette() -> Palette {
    BUILTIN_COLORS
        .iter()
        .map(|(name, hex)| (name.to_string(), hex.to_string()))
        .collect()
}

/// `#RRGGBB`, either case.
pub fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}
