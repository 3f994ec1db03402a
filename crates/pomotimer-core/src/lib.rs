//! # pomotimer Core Library
//!
//! Business logic for the pomotimer Pomodoro timer. The terminal front end
//! (`pomotimer-cli`) is a thin window over this crate.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a one-second-step work/break state machine, shared
//!   behind a mutex and advanced by a background tokio task
//! - **Storage**: a single JSON settings record, replaced atomically on save
//! - **Quotes**: motivational quotes fetched off the UI thread
//! - **Chime**: a notification sound on every phase change
//! - **Controller**: the UI-facing object that polls and renders state
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: Core timer state machine
//! - [`SettingsStore`]: Settings persistence
//! - [`AppController`]: UI controller, generic over a [`View`]

pub mod chime;
pub mod controller;
pub mod error;
pub mod events;
pub mod quote;
pub mod settings;
pub mod storage;
pub mod timer;

pub use chime::{Chime, SilentChime, SystemChime};
pub use controller::{AppController, View, REFRESH_INTERVAL};
pub use error::{ConfigError, CoreError, PlaybackError, QuoteError, Result, ValidationError};
pub use events::Event;
pub use quote::{QuotableClient, QuoteBoard, QuoteProvider, QuoteRefresher};
pub use settings::{Settings, SettingsForm, ThemeMode};
pub use storage::SettingsStore;
pub use timer::{format_clock, spawn_ticker, Phase, SharedTimer, TimerEngine, TransitionHooks};
