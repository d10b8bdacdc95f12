//! Homework domain types
//!
//! Review statuses, the fixed verdict table, and the validated homework
//! record. Decoding is done explicitly from `serde_json::Value` so that
//! every distinct malformation of the API payload surfaces as its own
//! [`DecodeError`] variant instead of a generic deserialization failure.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Review status of a homework submission
///
/// The set is fixed by the status API; any other string in the `status`
/// field is rejected during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    /// Parses the wire representation used by the status API.
    pub fn from_api(value: &str) -> Option<Self> {
        match value {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Wire representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable verdict sentence for this status.
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while decoding the status API payload
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Top-level response is not a JSON object
    #[error("API response is not a JSON object")]
    NotAnObject,

    /// Response object has no `homeworks` key
    #[error("API response has no `homeworks` key")]
    MissingHomeworks,

    /// The `homeworks` value is not an array
    #[error("`homeworks` in the API response is not an array")]
    HomeworksNotAnArray,

    /// A homework record lacks a required string field
    #[error("homework record is missing the `{0}` field")]
    MissingField(&'static str),

    /// The `status` field holds a value outside the known set
    #[error("unknown homework status `{0}`")]
    UnknownStatus(String),
}

/// One submission's review state as decoded from the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub name: String,
    pub status: ReviewStatus,
}

impl HomeworkRecord {
    /// Decodes a single homework record from the API payload.
    ///
    /// Requires `homework_name` and `status` to be present as strings and
    /// `status` to be one of the known review statuses.
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let name = value
            .get("homework_name")
            .and_then(Value::as_str)
            .ok_or(DecodeError::MissingField("homework_name"))?;

        let status = value
            .get("status")
            .and_then(Value::as_str)
            .ok_or(DecodeError::MissingField("status"))?;

        let status = ReviewStatus::from_api(status)
            .ok_or_else(|| DecodeError::UnknownStatus(status.to_string()))?;

        Ok(Self {
            name: name.to_string(),
            status,
        })
    }

    /// The notification sentence announcing this record's status.
    pub fn verdict_line(&self) -> String {
        format!(
            "Изменился статус проверки работы \"{}\". {}",
            self.name,
            self.status.verdict()
        )
    }
}

/// Validates the top-level shape of a status API response and returns the
/// homework list.
///
/// The list may be empty; deciding what an empty list means is left to the
/// caller.
pub fn extract_homeworks(response: &Value) -> Result<&Vec<Value>, DecodeError> {
    let object = response.as_object().ok_or(DecodeError::NotAnObject)?;

    let homeworks = object
        .get("homeworks")
        .ok_or(DecodeError::MissingHomeworks)?;

    homeworks
        .as_array()
        .ok_or(DecodeError::HomeworksNotAnArray)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_from_api_known_values() {
        assert_eq!(ReviewStatus::from_api("approved"), Some(ReviewStatus::Approved));
        assert_eq!(ReviewStatus::from_api("reviewing"), Some(ReviewStatus::Reviewing));
        assert_eq!(ReviewStatus::from_api("rejected"), Some(ReviewStatus::Rejected));
    }

    #[test]
    fn status_from_api_unknown_value() {
        assert_eq!(ReviewStatus::from_api("pending"), None);
        assert_eq!(ReviewStatus::from_api(""), None);
        assert_eq!(ReviewStatus::from_api("Approved"), None);
    }

    #[test]
    fn status_round_trips_through_wire_form() {
        for status in [
            ReviewStatus::Approved,
            ReviewStatus::Reviewing,
            ReviewStatus::Rejected,
        ] {
            assert_eq!(ReviewStatus::from_api(status.as_str()), Some(status));
        }
    }

    #[test]
    fn verdict_table() {
        assert_eq!(
            ReviewStatus::Approved.verdict(),
            "Работа проверена: ревьюеру всё понравилось. Ура!"
        );
        assert_eq!(
            ReviewStatus::Reviewing.verdict(),
            "Работа взята на проверку ревьюером."
        );
        assert_eq!(
            ReviewStatus::Rejected.verdict(),
            "Работа проверена: у ревьюера есть замечания."
        );
    }

    #[test]
    fn record_from_valid_value() {
        let value = json!({"homework_name": "hw1", "status": "reviewing"});
        let record = HomeworkRecord::from_value(&value).unwrap();
        assert_eq!(record.name, "hw1");
        assert_eq!(record.status, ReviewStatus::Reviewing);
    }

    #[test]
    fn record_missing_name() {
        let value = json!({"status": "approved"});
        let err = HomeworkRecord::from_value(&value).unwrap_err();
        assert!(matches!(err, DecodeError::MissingField("homework_name")));
    }

    #[test]
    fn record_missing_status() {
        let value = json!({"homework_name": "hw1"});
        let err = HomeworkRecord::from_value(&value).unwrap_err();
        assert!(matches!(err, DecodeError::MissingField("status")));
    }

    #[test]
    fn record_non_string_status_is_a_missing_field() {
        let value = json!({"homework_name": "hw1", "status": 7});
        let err = HomeworkRecord::from_value(&value).unwrap_err();
        assert!(matches!(err, DecodeError::MissingField("status")));
    }

    #[test]
    fn record_unknown_status() {
        let value = json!({"homework_name": "hw1", "status": "resubmitted"});
        let err = HomeworkRecord::from_value(&value).unwrap_err();
        match err {
            DecodeError::UnknownStatus(status) => assert_eq!(status, "resubmitted"),
            other => panic!("expected UnknownStatus, got {other:?}"),
        }
    }

    #[test]
    fn verdict_line_exact_text() {
        let record = HomeworkRecord {
            name: "X".to_string(),
            status: ReviewStatus::Approved,
        };
        assert_eq!(
            record.verdict_line(),
            "Изменился статус проверки работы \"X\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn extract_homeworks_from_valid_response() {
        let response = json!({"homeworks": [{"homework_name": "hw1", "status": "approved"}]});
        let homeworks = extract_homeworks(&response).unwrap();
        assert_eq!(homeworks.len(), 1);
    }

    #[test]
    fn extract_homeworks_allows_empty_list() {
        let response = json!({"homeworks": []});
        let homeworks = extract_homeworks(&response).unwrap();
        assert!(homeworks.is_empty());
    }

    #[test]
    fn extract_homeworks_rejects_non_object() {
        let err = extract_homeworks(&json!(["homeworks"])).unwrap_err();
        assert!(matches!(err, DecodeError::NotAnObject));
    }

    #[test]
    fn extract_homeworks_rejects_missing_key() {
        let err = extract_homeworks(&json!({"current_date": 0})).unwrap_err();
        assert!(matches!(err, DecodeError::MissingHomeworks));
    }

    #[test]
    fn extract_homeworks_rejects_non_array() {
        let err = extract_homeworks(&json!({"homeworks": {}})).unwrap_err();
        assert!(matches!(err, DecodeError::HomeworksNotAnArray));
    }
}
