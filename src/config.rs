use std::env;
use std::time::Duration;

use crate::error::{Error, Result};

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API: &str = "https://api.telegram.org";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;

#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: String,
    pub telegram_api: String,
    pub poll_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let practicum_token = require("PRACTICUM_TOKEN")?;
        let telegram_token = require("TELEGRAM_TOKEN")?;
        let telegram_chat_id = require("TELEGRAM_CHAT_ID")?;

        let endpoint =
            env::var("PRACTICUM_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let telegram_api =
            env::var("TELEGRAM_API_URL").unwrap_or_else(|_| DEFAULT_TELEGRAM_API.to_string());
        let poll_interval = env::var("POLL_INTERVAL_SECS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS));

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
            telegram_api,
            poll_interval,
        })
    }
}

fn require(name: &'static str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::ConfigMissing(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_required_vars() {
        env::set_var("PRACTICUM_TOKEN", "practicum-secret");
        env::set_var("TELEGRAM_TOKEN", "bot-secret");
        env::set_var("TELEGRAM_CHAT_ID", "42");
    }

    fn clear_all_vars() {
        for name in [
            "PRACTICUM_TOKEN",
            "TELEGRAM_TOKEN",
            "TELEGRAM_CHAT_ID",
            "PRACTICUM_ENDPOINT",
            "TELEGRAM_API_URL",
            "POLL_INTERVAL_SECS",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn from_env_with_defaults() {
        clear_all_vars();
        set_required_vars();

        let config = Config::from_env().unwrap();

        assert_eq!(config.practicum_token, "practicum-secret");
        assert_eq!(config.telegram_chat_id, "42");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.telegram_api, DEFAULT_TELEGRAM_API);
        assert_eq!(config.poll_interval, Duration::from_secs(600));
    }

    #[test]
    #[serial]
    fn missing_chat_id_is_fatal() {
        clear_all_vars();
        set_required_vars();
        env::remove_var("TELEGRAM_CHAT_ID");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, Error::ConfigMissing("TELEGRAM_CHAT_ID")));
    }

    #[test]
    #[serial]
    fn blank_token_counts_as_missing() {
        clear_all_vars();
        set_required_vars();
        env::set_var("PRACTICUM_TOKEN", "   ");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, Error::ConfigMissing("PRACTICUM_TOKEN")));
    }

    #[test]
    #[serial]
    fn overrides_are_honoured() {
        clear_all_vars();
        set_required_vars();
        env::set_var("PRACTICUM_ENDPOINT", "http://localhost:9000/statuses/");
        env::set_var("POLL_INTERVAL_SECS", "5");

        let config = Config::from_env().unwrap();
        assert_eq!(config.endpoint, "http://localhost:9000/statuses/");
        assert_eq!(config.poll_interval, Duration::from_secs(5));
    }

    #[test]
    #[serial]
    fn unparsable_interval_falls_back_to_default() {
        clear_all_vars();
        set_required_vars();
        env::set_var("POLL_INTERVAL_SECS", "soon");

        let config = Config::from_env().unwrap();
        assert_eq!(config.poll_interval, Duration::from_secs(600));
    }
}
