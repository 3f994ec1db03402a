/// Render seconds as `MM:SS`.
///
/// Minutes are not wrapped into hours, so durations of an hour or more
/// render with three or more minute digits.
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_clock(125), "02:05");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(3599), "59:59");
    }

    #[test]
    fn long_durations_keep_counting_minutes() {
        assert_eq!(format_clock(50 * 60), "50:00");
        assert_eq!(format_clock(90 * 60 + 1), "90:01");
    }
}
