mod config;
mod error;
mod logger;
mod models;
mod poller;
mod practicum;
mod telegram;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::poller::PollState;
use crate::practicum::PracticumClient;
use crate::telegram::TelegramClient;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logger::init_logging();

    let config = Config::from_env().context("Startup configuration is incomplete")?;

    tracing::info!(
        endpoint = %config.endpoint,
        interval_secs = config.poll_interval.as_secs(),
        "Starting homework status notifier"
    );

    let practicum = PracticumClient::new(&config);
    let telegram = TelegramClient::new(&config);
    let mut state = PollState::new(chrono::Utc::now().timestamp());

    poller::run(&practicum, &telegram, &mut state, config.poll_interval).await;

    Ok(())
}
