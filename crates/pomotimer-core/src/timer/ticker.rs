//! Background tick loop.
//!
//! Runs as a tokio task for the lifetime of the runtime, calling
//! [`SharedTimer::tick`] once per interval whether or not the timer is paused.
//! Phase changes are handed to [`TransitionHooks`] after the timer lock has
//! been released.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{info, warn};

use super::engine::Phase;
use super::shared::SharedTimer;
use crate::chime::Chime;
use crate::events::Event;
use crate::quote::{QuoteProvider, QuoteRefresher};

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Side effects of a phase change: one chime, and a new quote when work
/// starts again. Failures are logged and never reach the tick loop.
pub struct TransitionHooks<P> {
    chime: Arc<dyn Chime>,
    quotes: Option<QuoteRefresher<P>>,
}

impl<P: QuoteProvider> TransitionHooks<P> {
    pub fn new(chime: Arc<dyn Chime>) -> Self {
        Self {
            chime,
            quotes: None,
        }
    }

    pub fn with_quotes(mut self, quotes: QuoteRefresher<P>) -> Self {
        self.quotes = Some(quotes);
        self
    }

    pub fn on_event(&self, event: &Event) {
        let Event::PhaseChanged {
            from,
            to,
            duration_secs,
            ..
        } = event
        else {
            return;
        };

        info!(from = ?from, to = ?to, duration_secs, "phase changed");
        if let Err(e) = self.chime.play() {
            warn!(error = %e, "notification sound failed");
        }
        if *to == Phase::Working {
            if let Some(quotes) = &self.quotes {
                quotes.refresh();
            }
        }
    }
}

/// Spawn the tick loop on the current tokio runtime.
pub fn spawn_ticker<P: QuoteProvider>(
    timer: SharedTimer,
    hooks: TransitionHooks<P>,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            if let Some(event) = timer.tick() {
                hooks.on_event(&event);
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PlaybackError, QuoteError};
    use crate::quote::QuoteBoard;
    use crate::timer::TimerEngine;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingChime {
        plays: AtomicUsize,
        fail: bool,
    }

    impl Chime for CountingChime {
        fn play(&self) -> Result<(), PlaybackError> {
            self.plays.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(PlaybackError::AssetMissing(PathBuf::from("chime.wav")));
            }
            Ok(())
        }
    }

    struct NumberedQuotes(AtomicUsize);

    impl QuoteProvider for NumberedQuotes {
        async fn fetch(&self) -> Result<String, QuoteError> {
            let n = self.0.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(format!("Quote {n} - Author"))
        }
    }

    fn setup(
        work_secs: u64,
        break_secs: u64,
        chime: Arc<CountingChime>,
    ) -> (SharedTimer, QuoteBoard, JoinHandle<()>) {
        let timer = SharedTimer::new(TimerEngine::new(work_secs, break_secs));
        let board = QuoteBoard::default();
        let hooks = TransitionHooks::new(chime)
            .with_quotes(QuoteRefresher::new(NumberedQuotes(AtomicUsize::new(0)), board.clone()));
        let handle = spawn_ticker(timer.clone(), hooks, TICK_INTERVAL);
        (timer, board, handle)
    }

    #[tokio::test(start_paused = true)]
    async fn paused_timer_does_not_count_down() {
        let chime = Arc::new(CountingChime::default());
        let (timer, _, handle) = setup(3, 2, chime.clone());

        tokio::time::sleep(Duration::from_millis(10_500)).await;
        assert_eq!(timer.snapshot().remaining_secs, 3);
        assert_eq!(chime.plays.load(Ordering::SeqCst), 0);
        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn chimes_once_per_transition() {
        let chime = Arc::new(CountingChime::default());
        let (timer, board, handle) = setup(3, 2, chime.clone());
        timer.toggle_pause();

        // Ticks at 1..=3 count 3 -> 0, tick 4 flips to Break.
        tokio::time::sleep(Duration::from_millis(4_500)).await;
        let snap = timer.snapshot();
        assert_eq!(snap.phase, Phase::Break);
        assert_eq!(snap.remaining_secs, 2);
        assert_eq!(chime.plays.load(Ordering::SeqCst), 1);
        assert_eq!(board.text(), "");

        // Ticks 5, 6 count 2 -> 0, tick 7 flips back to Working and fetches.
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(timer.snapshot().phase, Phase::Working);
        assert_eq!(chime.plays.load(Ordering::SeqCst), 2);
        assert_eq!(board.text(), "Quote 1 - Author");
        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn failing_chime_does_not_stop_the_loop() {
        let chime = Arc::new(CountingChime {
            fail: true,
            ..Default::default()
        });
        let (timer, _, handle) = setup(1, 1, chime.clone());
        timer.toggle_pause();

        // Flips at ticks 2, 4 and 6.
        tokio::time::sleep(Duration::from_millis(6_500)).await;
        assert_eq!(chime.plays.load(Ordering::SeqCst), 3);
        assert!(!handle.is_finished());
        handle.abort();
    }
}
