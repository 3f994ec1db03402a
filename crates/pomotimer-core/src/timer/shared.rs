use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::engine::{TimerEngine, TimerSnapshot};
use crate::events::Event;

/// Timer engine shared between the ticker and the UI.
///
/// Every operation runs under one lock, so a tick never interleaves with a
/// pause toggle or a settings change.
#[derive(Debug, Clone)]
pub struct SharedTimer(Arc<Mutex<TimerEngine>>);

impl SharedTimer {
    pub fn new(engine: TimerEngine) -> Self {
        Self(Arc::new(Mutex::new(engine)))
    }

    pub fn tick(&self) -> Option<Event> {
        self.lock().tick()
    }

    pub fn toggle_pause(&self) -> bool {
        self.lock().toggle_pause()
    }

    pub fn apply_settings(&self, work_secs: u64, break_secs: u64) -> Event {
        self.lock().apply_settings(work_secs, break_secs)
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        self.lock().snapshot()
    }

    // Engine commands cannot panic midway; poisoned data is still consistent.
    fn lock(&self) -> MutexGuard<'_, TimerEngine> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
