use clap::Subcommand;
use pomotimer_core::{Settings, SettingsStore};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective settings as JSON
    Show,
    /// Print the settings file path
    Path,
    /// Reset settings to defaults
    Reset,
}

pub fn run(store: &SettingsStore, action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let settings = store.load();
            let json = serde_json::to_string_pretty(&settings)?;
            println!("{json}");
        }
        ConfigAction::Path => {
            println!("{}", store.path().display());
        }
        ConfigAction::Reset => {
            store.save(&Settings::default())?;
            println!("settings reset to defaults");
        }
    }
    Ok(())
}
