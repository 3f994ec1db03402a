//! Application controller.
//!
//! Owns the in-memory settings and mediates between the window surface
//! ([`View`]), the shared timer, the quote board and the settings store.
//! The front end drives it: `refresh()` on a short cadence, `toggle()` and
//! `save_settings()` on user input, `shutdown()` on window close.

use std::time::Duration;

use tracing::{info, warn};

use crate::error::{ConfigError, ValidationError};
use crate::quote::QuoteBoard;
use crate::settings::{Settings, SettingsForm, ThemeMode};
use crate::storage::SettingsStore;
use crate::timer::{format_clock, Phase, SharedTimer};

/// How often the front end should call [`AppController::refresh`].
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(100);

pub const LABEL_START: &str = "Start";
pub const LABEL_PAUSE: &str = "Pause";

/// Window surface the controller renders into.
pub trait View {
    /// Countdown text (`MM:SS`) and the phase it belongs to.
    fn show_clock(&mut self, clock: &str, phase: Phase);

    fn show_quote(&mut self, quote: &str);

    /// Label of the start/pause control.
    fn set_toggle_label(&mut self, label: &str);

    /// Hex colour for every accent-coloured control.
    fn set_accent(&mut self, hex: &str);

    fn set_theme(&mut self, theme: ThemeMode);
}

pub fn toggle_label(paused: bool) -> &'static str {
    if paused {
        LABEL_START
    } else {
        LABEL_PAUSE
    }
}

pub struct AppController<V> {
    store: SettingsStore,
    settings: Settings,
    timer: SharedTimer,
    quotes: QuoteBoard,
    shown_quote: String,
    view: V,
}

impl<V: View> AppController<V> {
    /// Wire up the controller and paint the initial state.
    pub fn new(
        store: SettingsStore,
        settings: Settings,
        timer: SharedTimer,
        quotes: QuoteBoard,
        view: V,
    ) -> Self {
        let mut controller = Self {
            store,
            settings,
            timer,
            quotes,
            shown_quote: String::new(),
            view,
        };
        controller.apply_appearance();
        let paused = controller.timer.snapshot().paused;
        controller.view.set_toggle_label(toggle_label(paused));
        controller.refresh();
        controller
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Render the countdown, and the quote if it changed.
    pub fn refresh(&mut self) {
        let snap = self.timer.snapshot();
        self.view
            .show_clock(&format_clock(snap.remaining_secs), snap.phase);

        let quote = self.quotes.text();
        if quote != self.shown_quote {
            self.view.show_quote(&quote);
            self.shown_quote = quote;
        }
    }

    /// Start or pause the countdown. Returns the new paused flag.
    pub fn toggle(&mut self) -> bool {
        let paused = self.timer.toggle_pause();
        self.view.set_toggle_label(toggle_label(paused));
        paused
    }

    /// Contents for a freshly opened settings view.
    pub fn settings_form(&self) -> SettingsForm {
        SettingsForm::from_settings(&self.settings)
    }

    /// Validate and apply the settings view.
    ///
    /// On error nothing changes and the view should stay open.
    pub fn save_settings(&mut self, form: &SettingsForm) -> Result<(), ValidationError> {
        let next = self.settings.with_form(form)?;

        let event = self.timer.apply_settings(next.work_secs(), next.break_secs());
        info!(?event, "settings applied");
        self.settings = next;

        if let Err(e) = self.store.save(&self.settings) {
            warn!(error = %e, "could not persist settings");
        }

        self.view.set_toggle_label(LABEL_START);
        self.apply_appearance();
        self.refresh();
        Ok(())
    }

    /// Persist the current settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be written.
    pub fn shutdown(&self) -> Result<(), ConfigError> {
        self.store.save(&self.settings)
    }

    fn apply_appearance(&mut self) {
        self.view.set_accent(self.settings.accent_hex());
        self.view.set_theme(self.settings.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_labels() {
        assert_eq!(toggle_label(true), "Start");
        assert_eq!(toggle_label(false), "Pause");
    }
}
