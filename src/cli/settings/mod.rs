//! Settings management for the `set` and `unset` commands.
//!
//! Every configuration key has a [`SettingHandler`]; the
//! [`SettingRegistry`] maps keys to handlers and keeps their display order.
//! Handlers only touch the in-memory [`Config`]. Loading and saving the file
//! happens once per command in [`run_set`] and [`run_unset`].

pub mod error;
pub mod handlers;
pub mod registry;

pub use error::SettingError;
pub use registry::SettingRegistry;

use crate::core::config::data::Config;

/// Handles one configuration key.
pub trait SettingHandler: Send + Sync {
    /// Returns the configuration key this handler manages.
    fn key(&self) -> &'static str;

    /// Validate `args` and store the value, returning a success message.
    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError>;

    /// Clear the value so the default applies again.
    fn unset(&self, config: &mut Config) -> String;

    /// Format the current value for display in `hoper set` output.
    fn format(&self, config: &Config) -> String;
}

/// `hoper set [key] [value...]`. Without a value the current settings are
/// listed instead.
pub fn run_set(key: Option<String>, value: Vec<String>) -> Result<(), SettingError> {
    let registry = SettingRegistry::new();
    let mut config = load_config()?;

    let Some(key) = key.filter(|_| !value.is_empty()) else {
        registry.print_all(&config);
        return Ok(());
    };

    let message = registry.set(&key, &value, &mut config)?;
    save_config(&config)?;
    println!("{message}");
    Ok(())
}

/// `hoper unset <key>`.
pub fn run_unset(key: &str) -> Result<(), SettingError> {
    let registry = SettingRegistry::new();
    let mut config = load_config()?;

    let message = registry.unset(key, &mut config)?;
    save_config(&config)?;
    println!("{message}");
    Ok(())
}

fn load_config() -> Result<Config, SettingError> {
    Config::load().map_err(|e| SettingError::ConfigError(e.to_string()))
}

fn save_config(config: &Config) -> Result<(), SettingError> {
    config
        .save()
        .map_err(|e| SettingError::ConfigError(e.to_string()))
}

#[cfg(test)]
mod tests;
