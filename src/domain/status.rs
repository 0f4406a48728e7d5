use serde::Deserialize;
use std::fmt::{Display, Formatter};

pub const SUCCESS_CODE: &str = "000";

/// The status every response carries. A non-success code is a device-reported failure, not a
/// decode error: the record still decodes and the caller decides what to do with it. A missing
/// `errCode` is not a success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Status {
    #[serde(rename = "errCode", deserialize_with = "crate::hitron::null_as_default")]
    pub code: String,
    #[serde(rename = "errMsg", deserialize_with = "crate::hitron::null_as_default")]
    pub message: String,
}

impl Status {
    pub fn success() -> Self {
        Status {
            code: SUCCESS_CODE.to_string(),
            message: String::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_success() {
            return Ok(());
        }
        if self.code.is_empty() {
            return write!(f, "Error: missing status code");
        }
        write!(f, "Error {}: {}", self.code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn success_renders_empty() {
        assert_eq!(Status::success().to_string(), "");
    }

    #[test]
    fn failure_renders_code_and_message() {
        let status = serde_json::from_value::<Status>(json!({"errCode": "001", "errMsg": "Session timeout"})).unwrap();

        assert!(!status.is_success());
        assert_eq!(status.to_string(), "Error 001: Session timeout");
    }

    #[test]
    fn a_missing_code_is_not_a_success() {
        let status = serde_json::from_value::<Status>(json!({})).unwrap();

        assert!(!status.is_success());
        assert_eq!(status, Status::default());
        assert_eq!(status.to_string(), "Error: missing status code");
    }

    #[test]
    fn null_fields_are_empty() {
        let status = serde_json::from_value::<Status>(json!({"errCode": "000", "errMsg": null})).unwrap();
        assert_eq!(status, Status::success());

        let status = serde_json::from_value::<Status>(json!({"errCode": null, "errMsg": null})).unwrap();
        assert!(!status.is_success());
    }
}
