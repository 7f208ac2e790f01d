use serde::Serialize;

use crate::config::Config;
use crate::error::{Error, Result};

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

pub struct TelegramClient {
    http: reqwest::Client,
    api: String,
    token: String,
    chat_id: String,
}

impl TelegramClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api: config.telegram_api.trim_end_matches('/').to_string(),
            token: config.telegram_token.clone(),
            chat_id: config.telegram_chat_id.clone(),
        }
    }

    pub async fn send_message(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api, self.token);
        let request = SendMessage {
            chat_id: &self.chat_id,
            text,
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|err| Error::Delivery(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Delivery(format!(
                "telegram api returned {status}: {body}"
            )));
        }

        tracing::info!(chat_id = %self.chat_id, "Chat notification delivered");
        Ok(())
    }
}
