//! Registry of setting handlers.

use std::collections::HashMap;

use super::handlers::{chat_base_url_handler, site_base_url_handler, RequestTimeoutHandler};
use super::{SettingError, SettingHandler};
use crate::core::config::data::Config;

/// Registry of all available setting handlers.
pub struct SettingRegistry {
    handlers: HashMap<&'static str, Box<dyn SettingHandler>>,
    /// Keys in display order for `hoper set` output.
    display_order: Vec<&'static str>,
}

impl SettingRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            handlers: HashMap::new(),
            display_order: Vec::new(),
        };

        registry.register(Box::new(chat_base_url_handler()));
        registry.register(Box::new(site_base_url_handler()));
        registry.register(Box::new(RequestTimeoutHandler));

        registry
    }

    fn register(&mut self, handler: Box<dyn SettingHandler>) {
        let key = handler.key();
        self.display_order.push(key);
        self.handlers.insert(key, handler);
    }

    pub fn get(&self, key: &str) -> Option<&dyn SettingHandler> {
        self.handlers.get(key).map(|h| h.as_ref())
    }

    pub fn keys_display_order(&self) -> &[&'static str] {
        &self.display_order
    }

    pub fn set(
        &self,
        key: &str,
        args: &[String],
        config: &mut Config,
    ) -> Result<String, SettingError> {
        self.lookup(key)?.set(args, config)
    }

    pub fn unset(&self, key: &str, config: &mut Config) -> Result<String, SettingError> {
        Ok(self.lookup(key)?.unset(config))
    }

    pub fn print_all(&self, config: &Config) {
        println!("Current configuration:");
        for key in &self.display_order {
            if let Some(handler) = self.get(key) {
                println!("{}", handler.format(config));
            }
        }
    }

    fn lookup(&self, key: &str) -> Result<&dyn SettingHandler, SettingError> {
        self.get(key)
            .ok_or_else(|| SettingError::UnknownKey(key.to_string()))
    }
}

impl Default for SettingRegistry {
    fn default() -> Self {
        Self::new()
    }
}
