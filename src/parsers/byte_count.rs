const UNITS: [char; 7] = ['B', 'K', 'M', 'G', 'T', 'P', 'E'];

/// Parses a byte count that the device reports either as a bare integer (`"19601748772"`) or
/// human-formatted with a binary unit (`"18.23G Bytes"`, `"10E"`). Fractional bytes are
/// truncated and anything unparsable is zero.
pub fn parse_formatted_byte_count(s: &str) -> u64 {
    let value = s.trim();
    if let Ok(bytes) = value.parse::<u64>() {
        return bytes;
    }

    let value = value.strip_suffix("Bytes").unwrap_or(value).trim_end();
    let split = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '+' || c == '-'))
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(split);

    let Ok(number) = number.parse::<f64>() else {
        return 0;
    };

    // Unknown units count as plain bytes
    let exponent = unit
        .trim()
        .chars()
        .next()
        .and_then(|u| UNITS.iter().position(|&known| known == u))
        .unwrap_or(0);

    // `as` truncates toward zero and saturates, negative values become zero
    (number * 1024f64.powi(exponent as i32)) as u64
}

/// Formats a byte count with the largest binary unit it reaches and one decimal digit, with a
/// trailing `.0` dropped: `19601748772` is `"18.3G"`, `0` is `"0B"`.
pub fn format_byte_count(bytes: u64) -> String {
    let mut exponent = (0..UNITS.len())
        .rev()
        .find(|&exponent| bytes as f64 >= 1024f64.powi(exponent as i32))
        .unwrap_or(0);

    // Rounding may carry into the next unit, 1048575 is "1M" and not "1024K"
    let rounded = (bytes as f64 / 1024f64.powi(exponent as i32) * 10.0).round() / 10.0;
    if rounded >= 1024.0 && exponent < UNITS.len() - 1 {
        exponent += 1;
    }

    let scaled = format!("{:.1}", bytes as f64 / 1024f64.powi(exponent as i32));
    let scaled = scaled.strip_suffix(".0").unwrap_or(&scaled);
    format!("{}{}", scaled, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const KIB: u64 = 1 << 10;
    const GIB: u64 = 1 << 30;
    const EIB: u64 = 1 << 60;

    #[rstest]
    #[case::bare_integer("19601748772", 19601748772)]
    #[case::padded_integer(" 42 ", 42)]
    #[case::bytes_suffix("512B Bytes", 512)]
    #[case::kilobytes("1K Bytes", KIB)]
    #[case::fractional_gigabytes("18.23G Bytes", 19574313451)]
    #[case::without_bytes_suffix("10E", 10 * EIB)]
    #[case::space_before_unit("2 G", 2 * GIB)]
    #[case::unknown_unit("12X", 12)]
    #[case::empty("", 0)]
    #[case::garbage("lots", 0)]
    fn parses_formatted_byte_counts(#[case] input: &str, #[case] expected: u64) {
        assert_eq!(parse_formatted_byte_count(input), expected);
    }

    #[rstest]
    #[case::bytes('B', 0)]
    #[case::kilo('K', 1)]
    #[case::mega('M', 2)]
    #[case::giga('G', 3)]
    #[case::tera('T', 4)]
    #[case::peta('P', 5)]
    #[case::exa('E', 6)]
    fn truncates_fractional_bytes(#[case] unit: char, #[case] exponent: i32) {
        let input = format!("1.7{} Bytes", unit);
        let expected = (1.7 * 1024f64.powi(exponent)) as u64;
        assert_eq!(parse_formatted_byte_count(&input), expected);
    }

    #[rstest]
    #[case::zero(0, "0B")]
    #[case::bytes(1023, "1023B")]
    #[case::one_kilobyte(KIB, "1K")]
    #[case::just_below_a_megabyte(1048524, "1023.9K")]
    #[case::rounds_up_to_a_megabyte(1048575, "1M")]
    #[case::rounds_up_to_a_gigabyte(GIB - 1, "1G")]
    #[case::lan_rx(19601748772, "18.3G")]
    #[case::lan_tx(141585555187, "131.9G")]
    #[case::wan_rx(139788502458, "130.2G")]
    #[case::wan_tx(18787516468, "17.5G")]
    #[case::ten_exabytes(10 * EIB, "10E")]
    #[case::max(u64::MAX, "16E")]
    fn formats_byte_counts(#[case] input: u64, #[case] expected: &str) {
        assert_eq!(format_byte_count(input), expected);
    }

    #[test]
    fn formatting_and_parsing_agree_on_whole_units() {
        let bytes = 10 * EIB;
        assert_eq!(parse_formatted_byte_count(&format_byte_count(bytes)), bytes);
    }
}
