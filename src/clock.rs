use crate::constants::HALF_MINUTES;

/// Parse a "minutes:seconds" clock string into fractional minutes.
///
/// Unparseable input falls back to a full half (20.0 minutes) instead of
/// failing; the entry boundary treats a bad clock as "half not started".
/// Seconds are not range-checked, so "1:90" reads as 2.5 minutes.
pub fn parse_clock(text: &str) -> f64 {
    match split_clock(text.trim()) {
        Some((minutes, seconds)) => minutes as f64 + seconds as f64 / 60.0,
        None => HALF_MINUTES,
    }
}

fn split_clock(text: &str) -> Option<(u32, u32)> {
    let (minutes, seconds) = text.split_once(':')?;
    let minutes: u32 = minutes.trim().parse().ok()?;
    let seconds: u32 = seconds.trim().parse().ok()?;
    Some((minutes, seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_minutes() {
        assert_eq!(parse_clock("20:00"), 20.0);
        assert_eq!(parse_clock("0:00"), 0.0);
    }

    #[test]
    fn test_fractional_minutes() {
        assert_eq!(parse_clock("12:30"), 12.5);
        assert_eq!(parse_clock("0:45"), 0.75);
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(parse_clock(" 5:30 "), 5.5);
    }

    #[test]
    fn test_overflowing_seconds() {
        assert_eq!(parse_clock("1:90"), 2.5);
    }

    #[test]
    fn test_fallback_on_garbage() {
        assert_eq!(parse_clock(""), 20.0);
        assert_eq!(parse_clock("abc"), 20.0);
        assert_eq!(parse_clock("12"), 20.0);
        assert_eq!(parse_clock("12:"), 20.0);
        assert_eq!(parse_clock("-1:30"), 20.0);
        assert_eq!(parse_clock("12:3x"), 20.0);
    }
}
