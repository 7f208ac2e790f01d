use std::time::Duration;

use crate::error::{Error, Result};
use crate::models::HomeworkRecord;
use crate::practicum::{self, PracticumClient};
use crate::telegram::TelegramClient;

#[derive(Debug)]
pub struct PollState {
    pub from_date: i64,
    last_sent: Option<String>,
}

impl PollState {
    pub fn new(from_date: i64) -> Self {
        Self {
            from_date,
            last_sent: None,
        }
    }

    fn is_repeat(&self, text: &str) -> bool {
        self.last_sent.as_deref() == Some(text)
    }
}

// Duplicate gate in front of every outgoing message: an exact repeat of the
// previous send is suppressed, anything else goes out and becomes the new
// last-sent value. Returns whether a send actually happened.
pub async fn deliver(
    telegram: &TelegramClient,
    state: &mut PollState,
    text: &str,
) -> Result<bool> {
    if state.is_repeat(text) {
        tracing::debug!("Suppressing repeated notification");
        return Ok(false);
    }

    telegram.send_message(text).await?;
    state.last_sent = Some(text.to_string());
    Ok(true)
}

pub async fn poll_once(
    practicum: &PracticumClient,
    telegram: &TelegramClient,
    state: &mut PollState,
) -> Result<()> {
    let response = practicum.homework_statuses(Some(state.from_date)).await?;
    state.from_date = practicum::current_date(&response)?;

    let homeworks = practicum::check_response(&response)?;
    if homeworks.is_empty() {
        tracing::info!("No status changes");
    }

    for raw in homeworks {
        let record = HomeworkRecord::from_json(raw)?;
        deliver(telegram, state, &record.status_line()).await?;
    }

    Ok(())
}

pub async fn run(
    practicum: &PracticumClient,
    telegram: &TelegramClient,
    state: &mut PollState,
    interval: Duration,
) {
    loop {
        if let Err(err) = poll_once(practicum, telegram, state).await {
            report_failure(telegram, state, err).await;
        }
        tokio::time::sleep(interval).await;
    }
}

// Loop-boundary conversion of an iteration error into a single chat report.
// Delivery errors are logged only: reporting them through the same channel
// that just failed would loop forever.
async fn report_failure(telegram: &TelegramClient, state: &mut PollState, err: Error) {
    tracing::error!(error = %err, "Poll iteration failed");
    if matches!(err, Error::Delivery(_)) {
        return;
    }

    let text = format!("Сбой в работе программы: {err}");
    if let Err(send_err) = deliver(telegram, state, &text).await {
        tracing::error!(error = %send_err, "Could not report the failure to chat");
    }
}
