//! Codec for the colon-delimited duration strings the API returns.

/// Converts `"H:M:S"` or `"M:S"` into total seconds.
///
/// Malformed input (empty, non-numeric, wrong segment count) degrades to 0
/// rather than failing; the API occasionally returns blank durations.
pub fn parse_duration(text: &str) -> u32 {
    let parts: Vec<u32> = match text
        .split(':')
        .map(|p| p.trim().parse::<u32>())
        .collect::<Result<_, _>>()
    {
        Ok(parts) => parts,
        Err(_) => return 0,
    };

    match parts.as_slice() {
        [h, m, s] => h * 3600 + m * 60 + s,
        [m, s] => m * 60 + s,
        _ => 0,
    }
}

/// Formats total seconds as `"{m}m {s}s"` for the KPI cards.
///
/// Minutes are not rolled over into hours, so 3661 renders as "61m 1s".
pub fn format_seconds(total: u32) -> String {
    format!("{}m {}s", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_three_segment_durations() {
        assert_eq!(parse_duration("01:02:03"), 3723);
        assert_eq!(parse_duration("00:00:45"), 45);
    }

    #[test]
    fn parses_two_segment_durations() {
        assert_eq!(parse_duration("02:30"), 150);
    }

    #[test]
    fn malformed_input_degrades_to_zero() {
        assert_eq!(parse_duration(""), 0);
        assert_eq!(parse_duration("abc"), 0);
        assert_eq!(parse_duration("42"), 0);
        assert_eq!(parse_duration("1:2:3:4"), 0);
        assert_eq!(parse_duration("1:xx"), 0);
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_seconds(125), "2m 5s");
        assert_eq!(format_seconds(0), "0m 0s");
    }

    #[test]
    fn minutes_do_not_roll_over_into_hours() {
        assert_eq!(format_seconds(3661), "61m 1s");
    }
}
