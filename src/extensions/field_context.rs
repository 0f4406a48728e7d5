use crate::hitron::FieldError;
use std::fmt::Display;

/// Attaches the wire field name and raw value to a parse failure, turning it into a [`FieldError`].
pub trait FieldContext<T> {
    fn field(self, name: &'static str, raw: &str) -> Result<T, FieldError>;
}

impl<T, E: Display> FieldContext<T> for Result<T, E> {
    fn field(self, name: &'static str, raw: &str) -> Result<T, FieldError> {
        self.map_err(|e| FieldError {
            field: name,
            value: raw.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::net::IpAddr;

    #[test]
    fn wraps_the_error_with_field_and_value() {
        let result = "7.96.63".parse::<IpAddr>().field("gw", "7.96.63");

        let err = result.expect_err("expected an invalid address");
        assert_eq!(err.field, "gw");
        assert_eq!(err.value, "7.96.63");
        assert_eq!(err.to_string(), "invalid gw \"7.96.63\": invalid IP address syntax");
    }

    #[test]
    fn passes_values_through() {
        assert_eq!("42".parse::<u8>().field("index", "42"), Ok(42));
    }
}
