//! Timer engine implementation.
//!
//! The engine is a one-second-step state machine. It has no thread of its
//! own: [`spawn_ticker`](super::spawn_ticker) calls `tick()` once per
//! second and the UI issues commands between ticks.
//!
//! ## State Transitions
//!
//! ```text
//! (Working | Break) x (Paused | Running)
//! Working --0s--> Break --0s--> Working
//! ```
//!
//! ## Usage
//!
//! ```
//! use pomotimer_core::timer::{Phase, TimerEngine};
//!
//! let mut engine = TimerEngine::new(3, 2);
//! engine.toggle_pause();
//! for _ in 0..3 {
//!     assert!(engine.tick().is_none());
//! }
//! assert!(engine.tick().is_some()); // flips to Break
//! assert_eq!(engine.phase(), Phase::Break);
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Working,
    Break,
}

impl Phase {
    pub fn other(self) -> Phase {
        match self {
            Phase::Working => Phase::Break,
            Phase::Break => Phase::Working,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Working => "Work",
            Phase::Break => "Break",
        }
    }
}

/// Copy of the state the UI renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSnapshot {
    pub phase: Phase,
    pub remaining_secs: u64,
    pub paused: bool,
}

/// Core timer engine.
#[derive(Debug, Clone)]
pub struct TimerEngine {
    work_secs: u64,
    break_secs: u64,
    phase: Phase,
    remaining_secs: u64,
    paused: bool,
}

impl TimerEngine {
    /// Create a new engine, paused at the start of a work phase.
    pub fn new(work_secs: u64, break_secs: u64) -> Self {
        Self {
            work_secs,
            break_secs,
            phase: Phase::Working,
            remaining_secs: work_secs,
            paused: true,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.work_secs(), settings.break_secs())
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn duration_of(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Working => self.work_secs,
            Phase::Break => self.break_secs,
        }
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            phase: self.phase,
            remaining_secs: self.remaining_secs,
            paused: self.paused,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Advance by one second. Returns `Some(Event::PhaseChanged)` when the
    /// countdown was already at zero and the phase flips.
    pub fn tick(&mut self) -> Option<Event> {
        if self.paused {
            return None;
        }
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
            return None;
        }

        let from = self.phase;
        self.phase = from.other();
        self.remaining_secs = self.duration_of(self.phase);
        Some(Event::PhaseChanged {
            from,
            to: self.phase,
            duration_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Flip between paused and running. Returns the new paused flag.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Replace both durations and restart the current phase, paused.
    pub fn apply_settings(&mut self, work_secs: u64, break_secs: u64) -> Event {
        self.work_secs = work_secs;
        self.break_secs = break_secs;
        self.remaining_secs = self.duration_of(self.phase);
        self.paused = true;
        Event::SettingsApplied {
            work_secs,
            break_secs,
            phase: self.phase,
            at: Utc::now(),
        }
    }
}
