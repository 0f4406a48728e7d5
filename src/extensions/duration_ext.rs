use std::time::Duration;

/// Renders a duration the way uptimes are usually written: `130h1m57s`, `4m0s`, `0s`.
/// Sub-second precision is dropped.
pub trait ToHms {
    fn to_hms(&self) -> String;
}

impl ToHms for Duration {
    fn to_hms(&self) -> String {
        let total = self.as_secs();
        let (hours, minutes, seconds) = (total / 3600, total / 60 % 60, total % 60);

        match (hours, minutes) {
            (0, 0) => format!("{seconds}s"),
            (0, _) => format!("{minutes}m{seconds}s"),
            _ => format!("{hours}h{minutes}m{seconds}s"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "0s")]
    #[case(57, "57s")]
    #[case(60, "1m0s")]
    #[case(3600, "1h0m0s")]
    #[case(468117, "130h1m57s")]
    #[case(468083, "130h1m23s")]
    fn renders_hours_minutes_seconds(#[case] seconds: u64, #[case] expected: &str) {
        assert_eq!(Duration::from_secs(seconds).to_hms(), expected);
    }
}
