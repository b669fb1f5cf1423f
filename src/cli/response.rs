use serde::Serialize;

use crate::errors::PricefeedResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Failure,
}

/// The JSON envelope every subcommand prints: `failure` whenever any error
/// was recorded, with `data` still carrying whatever partial results exist.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: Status,
    pub errors: Vec<String>,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(errors: Vec<String>, data: T) -> Self {
        let status = if errors.is_empty() {
            Status::Success
        } else {
            Status::Failure
        };

        Self {
            status,
            errors,
            data,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.status == Status::Failure
    }

    pub fn to_json(&self) -> PricefeedResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_errors_is_success() {
        let envelope = Envelope::new(Vec::new(), vec!["Widget"]);
        assert!(!envelope.is_failure());
        assert_eq!(
            envelope.to_json().unwrap(),
            r#"{"status":"success","errors":[],"data":["Widget"]}"#
        );
    }

    #[test]
    fn test_any_error_is_failure_with_data_kept() {
        let envelope = Envelope::new(vec!["boom".to_string()], vec![1, 2]);
        assert!(envelope.is_failure());
        assert_eq!(
            envelope.to_json().unwrap(),
            r#"{"status":"failure","errors":["boom"],"data":[1,2]}"#
        );
    }
}
