use std::time::Duration;

const SECOND: u64 = 1;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// Parses the remaining DHCP lease time, reported as `"D: 6 H: 09 M: 25 S: 55"`.
///
/// A unit letter selects the multiplier for the digits that follow it. Digits before any unit
/// letter count as seconds. Characters that are neither unit letters, digits nor separators are
/// ignored, so a truncated or corrupted tail never fails the parse.
pub fn parse_dhcp_lease(s: &str) -> Duration {
    let mut total: u64 = 0;
    let mut multiplier = SECOND;
    let mut chars = s.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        match c {
            'D' => multiplier = DAY,
            'H' => multiplier = HOUR,
            'M' => multiplier = MINUTE,
            'S' => multiplier = SECOND,
            '0'..='9' => {
                let mut end = start + c.len_utf8();
                while let Some(&(i, d)) = chars.peek() {
                    if !d.is_ascii_digit() {
                        break;
                    }
                    end = i + d.len_utf8();
                    chars.next();
                }

                // A digit run too long for u64 saturates rather than wrapping
                let value = s[start..end].parse::<u64>().unwrap_or(u64::MAX);
                total = total.saturating_add(value.saturating_mul(multiplier));
            }
            _ => {}
        }
    }

    Duration::from_secs(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn dhms(days: u64, hours: u64, minutes: u64, seconds: u64) -> Duration {
        Duration::from_secs(days * DAY + hours * HOUR + minutes * MINUTE + seconds)
    }

    #[rstest]
    #[case::empty("", Duration::ZERO)]
    #[case::seconds_only("S: 30", dhms(0, 0, 0, 30))]
    #[case::all_units("D: 0 H: 1 M: 2 S: 3", dhms(0, 1, 2, 3))]
    #[case::padded_hours("D: 6 H: 09 M: 25 S: 55", dhms(6, 9, 25, 55))]
    #[case::corrupt_tail("D: 6 weird {corrupt{ ][entry", dhms(6, 0, 0, 0))]
    #[case::no_unit("90", dhms(0, 0, 1, 30))]
    #[case::no_separators("D1H2M3S4", dhms(1, 2, 3, 4))]
    #[case::repeated_unit("M: 1 2", dhms(0, 0, 3, 0))]
    fn parses_lease_durations(#[case] input: &str, #[case] expected: Duration) {
        assert_eq!(parse_dhcp_lease(input), expected);
    }

    #[test]
    fn saturates_on_overflow() {
        assert_eq!(parse_dhcp_lease("D: 99999999999999999999999"), Duration::from_secs(u64::MAX));
    }
}
