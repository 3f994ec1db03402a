use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Phase;

/// State changes worth reacting to outside the engine.
/// The ticker turns phase changes into side effects; the controller logs the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    PhaseChanged {
        from: Phase,
        to: Phase,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    SettingsApplied {
        work_secs: u64,
        break_secs: u64,
        phase: Phase,
        at: DateTime<Utc>,
    },
}
