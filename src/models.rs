use serde_json::Value;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

#[derive(Debug, Clone)]
pub struct HomeworkRecord {
    pub homework_name: String,
    pub status: HomeworkStatus,
}

impl HomeworkRecord {
    pub fn from_json(raw: &Value) -> Result<Self> {
        let homework_name = raw
            .get("homework_name")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::Shape("homework record has no homework_name".to_string()))?;
        let raw_status = raw
            .get("status")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::Shape("homework record has no status".to_string()))?;
        let status = HomeworkStatus::parse(raw_status)
            .ok_or_else(|| Error::UnknownStatus(raw_status.to_string()))?;

        Ok(Self {
            homework_name: homework_name.to_string(),
            status,
        })
    }

    pub fn status_line(&self) -> String {
        format!(
            "Изменился статус проверки работы \"{}\". {}",
            self.homework_name,
            self.status.verdict()
        )
    }
}
