//! Centralized number formatting for counter display.
//!
//! The template renderer, the stats readout and the CLI host all format
//! percentages through this module so that `%r` and the win-rate widget
//! always agree.

/// Format a percentage value with 1 decimal place and a trailing `%`.
///
/// # Examples
/// ```
/// use match_counter_types::formatting::format_pct;
/// assert_eq!(format_pct(42.7), "42.7%");
/// assert_eq!(format_pct(100.0), "100.0%");
/// ```
pub fn format_pct(n: f64) -> String {
    format!("{:.1}%", n)
}

/// Format a win rate in `[0.0, 1.0]` as a percentage.
///
/// # Examples
/// ```
/// use match_counter_types::formatting::format_win_rate;
/// assert_eq!(format_win_rate(0.75), "75.0%");
/// assert_eq!(format_win_rate(0.0), "0.0%");
/// ```
pub fn format_win_rate(rate: f64) -> String {
    format_pct(rate * 100.0)
}

/// Format a win/loss record as `W-L`.
///
/// # Examples
/// ```
/// use match_counter_types::formatting::format_record;
/// assert_eq!(format_record(3, 1), "3-1");
/// ```
pub fn format_record(wins: i32, losses: i32) -> String {
    format!("{}-{}", wins, losses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(42.7), "42.7%");
        assert_eq!(format_pct(0.0), "0.0%");
        assert_eq!(format_pct(100.0), "100.0%");
        assert_eq!(format_pct(66.66), "66.7%");
    }

    #[test]
    fn test_format_win_rate() {
        assert_eq!(format_win_rate(0.75), "75.0%");
        assert_eq!(format_win_rate(1.0), "100.0%");
        assert_eq!(format_win_rate(0.5), "50.0%");
        assert_eq!(format_win_rate(0.0), "0.0%");
    }

    #[test]
    fn test_format_record() {
        assert_eq!(format_record(0, 0), "0-0");
        assert_eq!(format_record(12, 7), "12-7");
    }
}
