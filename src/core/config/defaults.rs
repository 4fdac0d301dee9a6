use crate::core::config::data::Config;
use crate::core::constants::{
    CHAT_BASE_URL_ENV, DEFAULT_CHAT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SITE_BASE_URL,
};
use std::time::Duration;

impl Config {
    /// Chat backend to talk to: the command-line flag, then
    /// `HOPER_CHAT_BASE_URL`, then the config file, then the default.
    pub fn chat_base_url(&self, cli_override: Option<&str>) -> String {
        let env_value = std::env::var(CHAT_BASE_URL_ENV).ok();
        self.chat_base_url_from(cli_override, env_value.as_deref())
    }

    pub(crate) fn chat_base_url_from(
        &self,
        cli_override: Option<&str>,
        env_value: Option<&str>,
    ) -> String {
        [cli_override, env_value, self.chat_base_url.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .unwrap_or(DEFAULT_CHAT_BASE_URL)
            .to_string()
    }

    pub fn site_base_url(&self) -> &str {
        self.site_base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_SITE_BASE_URL)
    }

    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}
