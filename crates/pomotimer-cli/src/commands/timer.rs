use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use crossterm::event::{self, Event as TermEvent, KeyEventKind};
use tracing::info;
use url::Url;

use pomotimer_core::quote::DEFAULT_QUOTES_URL;
use pomotimer_core::timer::TICK_INTERVAL;
use pomotimer_core::{
    spawn_ticker, AppController, Chime, QuotableClient, QuoteBoard, QuoteRefresher, SettingsStore,
    SharedTimer, SilentChime, SystemChime, TimerEngine, TransitionHooks, REFRESH_INTERVAL,
};

use crate::logging;
use crate::settings_prompt;
use crate::terminal::{Action, TerminalGuard, TerminalView};

#[derive(Args, Debug, Clone)]
pub struct TimerArgs {
    /// Sound played on every phase change
    #[arg(long, env = "POMOTIMER_SOUND", default_value = "assets/chime.wav")]
    pub sound: PathBuf,
    /// Do not play a sound on phase changes
    #[arg(long)]
    pub mute: bool,
    /// Do not fetch motivational quotes
    #[arg(long)]
    pub no_quotes: bool,
    /// Root URL of the quote service
    #[arg(long, env = "POMOTIMER_QUOTES_URL", default_value = DEFAULT_QUOTES_URL)]
    pub quotes_url: Url,
    /// Log file (defaults to the per-user data directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Run the interactive timer until the user quits.
pub fn run(store: SettingsStore, args: TimerArgs) -> pomotimer_core::Result<()> {
    let log_file = args.log_file.clone().unwrap_or_else(logging::default_log_file);
    logging::init_file(&log_file)?;
    info!(settings = %store.path().display(), "starting");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;
    let result = {
        let _guard = runtime.enter();
        run_app(store, &args)
    };
    // Pending quote fetches are abandoned.
    runtime.shutdown_background();
    result
}

fn run_app(store: SettingsStore, args: &TimerArgs) -> pomotimer_core::Result<()> {
    let settings = store.load();
    let timer = SharedTimer::new(TimerEngine::from_settings(&settings));
    let quotes = QuoteBoard::default();

    let chime: Arc<dyn Chime> = if args.mute {
        Arc::new(SilentChime)
    } else {
        Arc::new(SystemChime::new(&args.sound))
    };
    let mut hooks = TransitionHooks::new(chime);
    if !args.no_quotes {
        let refresher = QuoteRefresher::new(QuotableClient::new(&args.quotes_url)?, quotes.clone());
        refresher.refresh();
        hooks = hooks.with_quotes(refresher);
    }
    spawn_ticker(timer.clone(), hooks, TICK_INTERVAL);

    let terminal = TerminalGuard::enter()?;
    let mut controller =
        AppController::new(store, settings, timer, quotes, TerminalView::default());
    let result = event_loop(&mut controller, &terminal);
    drop(terminal);

    controller.shutdown()?;
    info!("settings saved on exit");
    result
}

fn event_loop(
    controller: &mut AppController<TerminalView>,
    terminal: &TerminalGuard,
) -> pomotimer_core::Result<()> {
    loop {
        controller.refresh();
        if !event::poll(REFRESH_INTERVAL)? {
            continue;
        }
        match event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                match Action::from_key(key) {
                    Some(Action::Toggle) => {
                        controller.toggle();
                    }
                    Some(Action::OpenSettings) => settings_prompt::open(controller, terminal)?,
                    Some(Action::Quit) => return Ok(()),
                    None => {}
                }
            }
            TermEvent::Resize(..) => controller.view_mut().invalidate(),
            _ => {}
        }
    }
}
