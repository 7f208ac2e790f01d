use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde_json::Value;

use crate::config::Config;
use crate::error::{Error, Result};

pub struct PracticumClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            token: config.practicum_token.clone(),
        }
    }

    pub async fn homework_statuses(&self, from_date: Option<i64>) -> Result<Value> {
        let from_date = from_date.unwrap_or_else(|| chrono::Utc::now().timestamp());

        tracing::debug!(from_date, "Requesting homework statuses");
        let response = self
            .http
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::EndpointStatus(status));
        }

        Ok(response.json().await?)
    }
}

pub fn check_response(response: &Value) -> Result<&[Value]> {
    let map = response
        .as_object()
        .ok_or_else(|| Error::Shape("response body is not an object".to_string()))?;
    let homeworks = map
        .get("homeworks")
        .ok_or_else(|| Error::Shape("response has no homeworks key".to_string()))?;
    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| Error::Shape("homeworks is not a list".to_string()))
}

pub fn current_date(response: &Value) -> Result<i64> {
    response
        .get("current_date")
        .and_then(Value::as_i64)
        .ok_or_else(|| Error::Shape("response has no integer current_date".to_string()))
}
