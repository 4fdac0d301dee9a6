//! Base URL settings.

use crate::cli::settings::error::SettingError;
use crate::cli::settings::SettingHandler;
use crate::core::config::data::Config;
use crate::core::constants::{DEFAULT_CHAT_BASE_URL, DEFAULT_SITE_BASE_URL};
use crate::utils::url::normalize_base_url;

/// Data-driven handler for settings holding an absolute http(s) base URL.
pub struct BaseUrlHandler {
    key: &'static str,
    hint: &'static str,
    example: &'static str,
    default_display: &'static str,
    get: fn(&Config) -> Option<&str>,
    set_field: fn(&mut Config, Option<String>),
}

impl SettingHandler for BaseUrlHandler {
    fn key(&self) -> &'static str {
        self.key
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        let [input] = args else {
            return Err(SettingError::MissingArgs {
                hint: self.hint,
                example: self.example,
            });
        };
        let url = parse_base_url(input)?;
        let message = format!("✅ Set {} to: {url}", self.key);
        (self.set_field)(config, Some(url));
        Ok(message)
    }

    fn unset(&self, config: &mut Config) -> String {
        (self.set_field)(config, None);
        format!(
            "✅ Unset {} (will use default: {})",
            self.key, self.default_display
        )
    }

    fn format(&self, config: &Config) -> String {
        match (self.get)(config) {
            Some(url) => format!("  {}: {url}", self.key),
            None => format!("  {}: (unset, default: {})", self.key, self.default_display),
        }
    }
}

/// Accept `http://` and `https://` URLs with a host, minus trailing slashes.
pub fn parse_base_url(input: &str) -> Result<String, SettingError> {
    let url = normalize_base_url(input);
    let host = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match host {
        Some(rest) if !rest.is_empty() && !rest.starts_with('/') => Ok(url),
        _ => Err(SettingError::InvalidUrl(input.to_string())),
    }
}

pub fn chat_base_url_handler() -> BaseUrlHandler {
    BaseUrlHandler {
        key: "chat-base-url",
        hint: "To set the chat backend, give its base URL:",
        example: "hoper set chat-base-url http://localhost:8000",
        default_display: DEFAULT_CHAT_BASE_URL,
        get: |c| c.chat_base_url.as_deref(),
        set_field: |c, v| c.chat_base_url = v,
    }
}

pub fn site_base_url_handler() -> BaseUrlHandler {
    BaseUrlHandler {
        key: "site-base-url",
        hint: "To set where mood results are saved, give the site's base URL:",
        example: "hoper set site-base-url http://localhost:8080",
        default_display: DEFAULT_SITE_BASE_URL,
        get: |c| c.site_base_url.as_deref(),
        set_field: |c, v| c.site_base_url = v,
    }
}
