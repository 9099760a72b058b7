use crate::error::{BotError, Result};
use serde_json::Value;
use tracing::debug;

/// Проверяет ответ API на корректность.
///
/// Returns `true` when the `homeworks` list has at least one entry. An empty
/// list is the normal steady state and is not an error.
pub fn check_response(response: &Value) -> Result<bool> {
    debug!("Checking API response");
    let object = response.as_object().ok_or(BotError::UnexpectedType {
        field: "response",
        expected: "object",
        actual: json_type(response),
    })?;

    let homeworks = object
        .get("homeworks")
        .ok_or(BotError::MissingKey("homeworks"))?;
    let homeworks = homeworks.as_array().ok_or(BotError::UnexpectedType {
        field: "homeworks",
        expected: "array",
        actual: json_type(homeworks),
    })?;

    if homeworks.is_empty() {
        debug!("API response has no homeworks");
        return Ok(false);
    }

    Ok(true)
}

pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_empty_homeworks_is_true() {
        let response = json!({
            "homeworks": [{"homework_name": "proj1", "status": "approved"}],
            "current_date": 1700000000
        });
        assert_eq!(check_response(&response), Ok(true));
    }

    #[test]
    fn empty_homeworks_is_false() {
        assert_eq!(check_response(&json!({"homeworks": []})), Ok(false));
    }

    #[test]
    fn non_object_response_names_actual_type() {
        let err = check_response(&json!([{"homeworks": []}])).unwrap_err();
        assert_eq!(
            err,
            BotError::UnexpectedType {
                field: "response",
                expected: "object",
                actual: "array",
            }
        );
    }

    #[test]
    fn missing_homeworks_key() {
        let err = check_response(&json!({"current_date": 1})).unwrap_err();
        assert_eq!(err, BotError::MissingKey("homeworks"));
    }

    #[test]
    fn homeworks_must_be_a_list() {
        let err = check_response(&json!({"homeworks": {"homework_name": "x"}})).unwrap_err();
        assert_eq!(
            err,
            BotError::UnexpectedType {
                field: "homeworks",
                expected: "array",
                actual: "object",
            }
        );
    }

    #[test]
    fn names_every_json_type() {
        assert_eq!(json_type(&json!(null)), "null");
        assert_eq!(json_type(&json!(true)), "bool");
        assert_eq!(json_type(&json!(1.5)), "number");
        assert_eq!(json_type(&json!("s")), "string");
    }
}
