//! The `request-timeout` setting.

use crate::cli::settings::error::SettingError;
use crate::cli::settings::SettingHandler;
use crate::core::config::data::Config;
use crate::core::constants::DEFAULT_REQUEST_TIMEOUT_SECS;

pub struct RequestTimeoutHandler;

impl SettingHandler for RequestTimeoutHandler {
    fn key(&self) -> &'static str {
        "request-timeout"
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        let [input] = args else {
            return Err(SettingError::MissingArgs {
                hint: "To set the chat request timeout, give a number of seconds:",
                example: "hoper set request-timeout 30",
            });
        };
        let secs = input
            .trim()
            .trim_end_matches('s')
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(|| SettingError::InvalidTimeout(input.clone()))?;

        config.request_timeout_secs = Some(secs);
        Ok(format!("✅ Set request-timeout to: {secs}s"))
    }

    fn unset(&self, config: &mut Config) -> String {
        config.request_timeout_secs = None;
        format!("✅ Unset request-timeout (will use default: {DEFAULT_REQUEST_TIMEOUT_SECS}s)")
    }

    fn format(&self, config: &Config) -> String {
        match config.request_timeout_secs {
            Some(secs) => format!("  request-timeout: {secs}s"),
            None => format!(
                "  request-timeout: (unset, default: {DEFAULT_REQUEST_TIMEOUT_SECS}s)"
            ),
        }
    }
}
