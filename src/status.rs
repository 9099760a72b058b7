use crate::error::{BotError, Result};
use crate::response::json_type;
use serde_json::Value;
use std::str::FromStr;
use tracing::debug;

/// Статус проверки домашней работы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| BotError::UnknownStatus(s.to_string()))
    }
}

/// Формирует текст уведомления для одной домашней работы.
pub fn parse_status(homework: &Value) -> Result<String> {
    let record = homework.as_object().ok_or(BotError::UnexpectedType {
        field: "homework",
        expected: "object",
        actual: json_type(homework),
    })?;

    let name = record
        .get("homework_name")
        .ok_or(BotError::MissingKey("homework_name"))?;
    let name = name.as_str().ok_or(BotError::UnexpectedType {
        field: "homework_name",
        expected: "string",
        actual: json_type(name),
    })?;

    let status = match record.get("status") {
        Some(Value::String(raw)) => raw.parse::<HomeworkStatus>()?,
        Some(other) => return Err(BotError::UnknownStatus(other.to_string())),
        None => return Err(BotError::UnknownStatus(Value::Null.to_string())),
    };

    debug!("Homework '{}' has status '{}'", name, status.as_str());
    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn approved_homework_message() {
        let homework = json!({
            "id": 124,
            "status": "approved",
            "homework_name": "proj1",
            "reviewer_comment": "Всё нравится",
            "date_updated": "2020-02-13T14:40:57Z",
            "lesson_name": "Итоговый проект"
        });

        assert_eq!(
            parse_status(&homework).unwrap(),
            "Изменился статус проверки работы \"proj1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn every_known_status_has_its_verdict() {
        for status in HomeworkStatus::ALL {
            let homework = json!({"homework_name": "hw_python_oop", "status": status.as_str()});
            let message = parse_status(&homework).unwrap();

            assert!(message.contains("\"hw_python_oop\""), "{message}");
            assert!(message.ends_with(status.verdict()), "{message}");
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        for raw in ["", "Approved", "pending", "not_validated"] {
            let homework = json!({"homework_name": "proj1", "status": raw});
            assert_eq!(
                parse_status(&homework),
                Err(BotError::UnknownStatus(raw.to_string()))
            );
        }
    }

    #[test]
    fn missing_or_non_string_status_is_unknown() {
        assert_eq!(
            parse_status(&json!({"homework_name": "proj1"})),
            Err(BotError::UnknownStatus("null".to_string()))
        );
        assert_eq!(
            parse_status(&json!({"homework_name": "proj1", "status": 3})),
            Err(BotError::UnknownStatus("3".to_string()))
        );
    }

    #[test]
    fn missing_name_is_missing_key() {
        let err = parse_status(&json!({"status": "approved"})).unwrap_err();
        assert_eq!(err, BotError::MissingKey("homework_name"));
    }

    #[test]
    fn non_object_homework_is_rejected() {
        let err = parse_status(&json!("proj1")).unwrap_err();
        assert!(matches!(
            err,
            BotError::UnexpectedType {
                field: "homework",
                actual: "string",
                ..
            }
        ));
    }
}
