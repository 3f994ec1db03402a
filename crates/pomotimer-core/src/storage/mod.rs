mod settings_store;

pub use settings_store::SettingsStore;

/// Settings file name, resolved against the working directory by default.
pub const SETTINGS_FILE: &str = "config.json";
