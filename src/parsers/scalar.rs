use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

pub const ON: &str = "ON";
pub const YES: &str = "YES";
pub const ENABLED: &str = "Enabled";

/// Parses a base-10 integer, falling back to zero for anything unparsable.
pub fn parse_int<T>(s: &str) -> T
where
    T: FromStr + Default,
{
    s.trim().parse().unwrap_or_default()
}

/// Parses a float, falling back to zero for anything unparsable.
pub fn parse_float(s: &str) -> f64 {
    s.trim().parse().unwrap_or_default()
}

/// Parses a port number, an unparsable port is zero.
pub fn parse_port(s: &str) -> u16 {
    parse_int(s)
}

/// Parses an integer where an empty or `-` value means "absent". Any other unparsable value
/// is an error, as it indicates a wire format this client does not know about.
pub fn parse_optional_int<T>(s: &str) -> Result<Option<T>, CoerceError>
where
    T: FromStr,
    T::Err: Display,
{
    parse_optional(s, "an integer")
}

/// Float counterpart of [`parse_optional_int`].
pub fn parse_optional_float(s: &str) -> Result<Option<f64>, CoerceError> {
    parse_optional(s, "a float")
}

fn parse_optional<T>(s: &str, expected: &'static str) -> Result<Option<T>, CoerceError>
where
    T: FromStr,
    T::Err: Display,
{
    let value = s.trim();
    if value.is_empty() || value == "-" {
        return Ok(None);
    }

    value.parse::<T>().map(Some).map_err(|e| CoerceError::UnexpectedFormat {
        value: s.to_string(),
        expected,
        reason: e.to_string(),
    })
}

/// `"ON"`/`"OFF"` flags. Anything but an exact `"ON"` is off.
pub fn is_on(s: &str) -> bool {
    s == ON
}

/// `"YES"`/`"NO"` flags. The match is exact, `" YES"` is not a yes.
pub fn is_yes(s: &str) -> bool {
    s == YES
}

/// `"Enabled"`/`"Disabled"` flags.
pub fn is_enabled(s: &str) -> bool {
    s == ENABLED
}

#[derive(Error, Debug, PartialEq)]
pub enum CoerceError {
    #[error("unexpected value {value:?}, expected {expected}: {reason}")]
    UnexpectedFormat { value: String, expected: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::plain("42", 42)]
    #[case::padded("   42 ", 42)]
    #[case::negative("-70", -70)]
    #[case::empty("", 0)]
    #[case::sentinel("NA", 0)]
    #[case::dash("-", 0)]
    #[case::float("4.2", 0)]
    fn parse_int_never_fails(#[case] input: &str, #[case] expected: i64) {
        assert_eq!(parse_int::<i64>(input), expected);
    }

    #[rstest]
    #[case::plain("38.605", 38.605)]
    #[case::padded("    0.799999", 0.799999)]
    #[case::empty("", 0.0)]
    #[case::sentinel("NA", 0.0)]
    #[case::garbage("abc", 0.0)]
    fn parse_float_never_fails(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(parse_float(input), expected);
    }

    #[rstest]
    #[case::empty("", None)]
    #[case::dash("-", None)]
    #[case::zero("0", Some(0))]
    #[case::value("615000000", Some(615000000))]
    fn parse_optional_int_distinguishes_absent_from_zero(#[case] input: &str, #[case] expected: Option<u64>) {
        assert_eq!(parse_optional_int::<u64>(input), Ok(expected));
    }

    #[rstest]
    #[case::garbage("abc")]
    #[case::float("61.5")]
    #[case::sentinel("NA")]
    fn parse_optional_int_rejects_unknown_formats(#[case] input: &str) {
        let err = parse_optional_int::<u64>(input).expect_err("expected an error");
        assert!(matches!(err, CoerceError::UnexpectedFormat { ref value, .. } if value == input));
    }

    #[test]
    fn parse_optional_float_handles_sentinels() {
        assert_eq!(parse_optional_float("-"), Ok(None));
        assert_eq!(parse_optional_float("3.200"), Ok(Some(3.2)));
        assert!(parse_optional_float("false").is_err());
    }

    #[rstest]
    #[case("8080", 8080)]
    #[case("", 0)]
    #[case("http", 0)]
    #[case("70000", 0)]
    fn parse_port_defaults_to_zero(#[case] input: &str, #[case] expected: u16) {
        assert_eq!(parse_port(input), expected);
    }

    #[test]
    fn flags_match_exactly() {
        assert!(is_on("ON"));
        assert!(!is_on("on"));
        assert!(!is_on("OFF"));
        assert!(is_yes("YES"));
        assert!(!is_yes(" NO"));
        assert!(!is_yes(" YES"));
        assert!(is_enabled("Enabled"));
        assert!(!is_enabled("Disabled"));
    }
}
