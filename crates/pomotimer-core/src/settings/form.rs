//! Settings view input and its validation.

use super::{is_hex_color, Settings, ThemeMode};
use crate::error::ValidationError;

/// Raw contents of the settings view, exactly as typed or selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    pub work_minutes: String,
    pub break_minutes: String,
    /// Palette key picked from the colour selector.
    pub color: String,
    /// Optional free-text `"#RRGGBB, name"` entry; overrides `color` when set.
    pub custom_color: String,
    pub theme: String,
}

impl SettingsForm {
    /// Form pre-filled with the current values.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            work_minutes: settings.work_minutes.to_string(),
            break_minutes: settings.break_minutes.to_string(),
            color: settings.accent.clone(),
            custom_color: String::new(),
            theme: settings.theme.to_string(),
        }
    }
}

impl Settings {
    /// Validate `form` and return the settings it describes.
    ///
    /// `self` is never modified; on error the caller keeps its current record.
    pub fn with_form(&self, form: &SettingsForm) -> Result<Settings, ValidationError> {
        let work_minutes = parse_minutes("Work time", &form.work_minutes)?;
        let break_minutes = parse_minutes("Break time", &form.break_minutes)?;
        let custom = parse_custom_color(&form.custom_color)?;
        let theme: ThemeMode = form.theme.parse()?;

        let mut next = self.clone();
        match custom {
            Some((hex, name)) => {
                next.palette.insert(name.clone(), hex);
                next.accent = name;
            }
            None => {
                let color = form.color.trim();
                if !next.palette.contains_key(color) {
                    return Err(ValidationError::UnknownColor(color.to_string()));
                }
                next.accent = color.to_string();
            }
        }
        next.work_minutes = work_minutes;
        next.break_minutes = break_minutes;
        next.theme = theme;
        Ok(next)
    }
}

fn parse_minutes(field: &'static str, raw: &str) -> Result<u32, ValidationError> {
    match raw.trim().parse::<u32>() {
        Ok(minutes) if minutes > 0 => Ok(minutes),
        _ => Err(ValidationError::InvalidDuration {
            field,
            value: raw.to_string(),
        }),
    }
}

/// `"#hex, name"` → `(HEX, name)`; blank → `None`.
fn parse_custom_color(raw: &str) -> Result<Option<(String, String)>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let (hex, name) = raw
        .split_once(',')
        .map(|(hex, name)| (hex.trim(), name.trim()))
        .filter(|(hex, name)| !hex.is_empty() && !name.is_empty())
        .ok_or_else(|| ValidationError::IncompleteCustomColor(raw.to_string()))?;

    if !is_hex_color(hex) {
        return Err(ValidationError::InvalidHexColor(hex.to_string()));
    }
    Ok(Some((hex.to_ascii_uppercase(), name.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(settings: &Settings) -> SettingsForm {
        SettingsForm::from_settings(settings)
    }

    #[test]
    fn unchanged_form_reproduces_settings() {
        let s = Settings::default();
        assert_eq!(s.with_form(&form(&s)).unwrap(), s);
    }

    #[test]
    fn durations_and_theme_are_normalized() {
        let s = Settings::default();
        let f = SettingsForm {
            work_minutes: " 25 ".into(),
            break_minutes: "5".into(),
            theme: "dark".into(),
            color: "Green".into(),
            ..form(&s)
        };
        let next = s.with_form(&f).unwrap();
        assert_eq!(next.work_minutes, 25);
        assert_eq!(next.break_minutes, 5);
        assert_eq!(next.theme, ThemeMode::Dark);
        assert_eq!(next.accent, "Green");
    }

    #[test]
    fn rejects_non_numeric_and_zero_durations() {
        let s = Settings::default();
        let f = SettingsForm {
            work_minutes: "ten".into(),
            ..form(&s)
        };
        assert_eq!(
            s.with_form(&f),
            Err(ValidationError::InvalidDuration {
                field: "Work time",
                value: "ten".into()
            })
        );

        let f = SettingsForm {
            break_minutes: "0".into(),
            ..form(&s)
        };
        assert!(matches!(
            s.with_form(&f),
            Err(ValidationError::InvalidDuration { field: "Break time", .. })
        ));
    }

    #[test]
    fn custom_color_is_added_and_selected() {
        let s = Settings::default();
        let f = SettingsForm {
            custom_color: "#3eb489, Mint".into(),
            color: "Red".into(),
            ..form(&s)
        };
        let next = s.with_form(&f).unwrap();
        assert_eq!(next.accent, "Mint");
        assert_eq!(next.palette.get("Mint").map(String::as_str), Some("#3EB489"));
        assert_eq!(next.palette.get_index(5).map(|(k, _)| k.as_str()), Some("Mint"));
    }

    #[test]
    fn invalid_hex_is_rejected() {
        let s = Settings::default();
        let f = SettingsForm {
            custom_color: "#ZZZZZZ,Bad".into(),
            ..form(&s)
        };
        assert_eq!(
            s.with_form(&f),
            Err(ValidationError::InvalidHexColor("#ZZZZZZ".into()))
        );
    }

    #[test]
    fn incomplete_custom_entry_is_rejected() {
        let s = Settings::default();
        for entry in ["#123456", "#123456,", ",Name", "#123456 Name"] {
            let f = SettingsForm {
                custom_color: entry.into(),
                ..form(&s)
            };
            assert!(
                matches!(s.with_form(&f), Err(ValidationError::IncompleteCustomColor(_))),
                "entry {entry:?} should be incomplete"
            );
        }
    }

    #[test]
    fn bad_duration_blocks_valid_custom_color() {
        let s = Settings::default();
        let f = SettingsForm {
            work_minutes: "".into(),
            custom_color: "#000000,Black".into(),
            ..form(&s)
        };
        assert!(s.with_form(&f).is_err());
        assert!(!s.palette.contains_key("Black"));
    }

    #[test]
    fn unknown_selected_color_is_rejected() {
        let s = Settings::default();
        let f = SettingsForm {
            color: "Teal".into(),
            ..form(&s)
        };
        assert_eq!(
            s.with_form(&f),
            Err(ValidationError::UnknownColor("Teal".into()))
        );
    }
}
