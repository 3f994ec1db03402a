use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pomotimer_core::storage::{SettingsStore, SETTINGS_FILE};

mod commands;
mod logging;
mod settings_prompt;
mod terminal;

/// Pomodoro work/break timer. Runs the interactive timer when no command is given.
#[derive(Parser)]
#[command(name = "pomotimer", version, about)]
struct Cli {
    /// Settings file
    #[arg(long, global = true, env = "POMOTIMER_CONFIG", default_value = SETTINGS_FILE)]
    config: PathBuf,

    #[command(flatten)]
    timer: commands::timer::TimerArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Settings management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let store = SettingsStore::new(cli.config);
    let result: Result<(), Box<dyn std::error::Error>> = match cli.command {
        None => commands::timer::run(store, cli.timer).map_err(Into::into),
        Some(Commands::Config { action }) => {
            logging::init_stderr();
            commands::config::run(&store, action)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_flags_precede_subcommand() {
        let cli = Cli::try_parse_from(["pomotimer", "--config", "/tmp/x.json", "config", "path"])
            .unwrap();
        assert_eq!(cli.config, PathBuf::from("/tmp/x.json"));
        assert!(matches!(cli.command, Some(Commands::Config { .. })));

        let cli = Cli::try_parse_from(["pomotimer", "--mute", "config", "show"]).unwrap();
        assert!(cli.timer.mute);
        assert!(cli.command.is_some());
    }

    #[test]
    fn no_subcommand_runs_timer() {
        let cli = Cli::try_parse_from(["pomotimer", "--no-quotes"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.timer.no_quotes);
    }
}
