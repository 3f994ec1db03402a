mod clock;
mod engine;
mod shared;
mod ticker;

pub use clock::format_clock;
pub use engine::{Phase, TimerEngine, TimerSnapshot};
pub use shared::SharedTimer;
pub use ticker::{spawn_ticker, TransitionHooks, TICK_INTERVAL};
