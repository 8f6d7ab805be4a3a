use anyhow::{anyhow, Result};
use chrono::{Datelike, Duration, Local, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a due date typed by a person; surrounding whitespace is ignored.
pub fn parse_due_date(input: &str) -> Result<NaiveDate> {
    parse_date_strict(input.trim())
}

/// Parses exactly `YYYY-MM-DD`, nothing before or after it.
pub fn parse_date_strict(input: &str) -> Result<NaiveDate> {
    // chrono accepts unpadded fields and leading spaces; ours never have them.
    if input.len() != 10 || !input.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
        return Err(anyhow!("Invalid due date (expected YYYY-MM-DD): {:?}", input));
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|e| anyhow!("Invalid due date '{}': {}", input, e))
}

pub fn format_due_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The Monday-to-Sunday week containing `reference`.
pub fn week_of(reference: NaiveDate) -> [NaiveDate; 7] {
    let days_from_monday = reference.weekday().num_days_from_monday() as i64;
    let monday = reference - Duration::days(days_from_monday);
    std::array::from_fn(|i| monday + Duration::days(i as i64))
}

/// Same weekday, `weeks` weeks away (negative goes back).
pub fn shift_weeks(reference: NaiveDate, weeks: i64) -> NaiveDate {
    reference + Duration::weeks(weeks)
}

/// Short weekday name, e.g. "Mon".
pub fn day_name(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

/// Short month and day, e.g. "Jun 5".
pub fn day_month(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_due_date() {
        assert_eq!(parse_due_date("2024-06-05").unwrap(), date(2024, 6, 5));
        assert_eq!(parse_due_date(" 2024-06-05 ").unwrap(), date(2024, 6, 5));
        assert!(parse_due_date("2024-6-5").is_err());
        assert!(parse_due_date("2024-02-30").is_err());
        assert!(parse_due_date("tomorrow").is_err());
        assert!(parse_due_date("").is_err());
    }

    #[test]
    fn test_parse_date_strict_rejects_padding() {
        assert_eq!(parse_date_strict("2024-06-05").unwrap(), date(2024, 6, 5));
        assert!(parse_date_strict(" 2024-06-05").is_err());
        assert!(parse_date_strict("2024-06-05 ").is_err());
        assert!(parse_date_strict("2024-06- 5").is_err());
        assert!(parse_date_strict("+024-06-05").is_err());
    }

    #[test]
    fn test_week_of_sunday_belongs_to_previous_monday() {
        // 2024-06-09 is a Sunday.
        let week = week_of(date(2024, 6, 9));
        assert_eq!(week[0], date(2024, 6, 3));
        assert_eq!(week[6], date(2024, 6, 9));
    }

    #[test]
    fn test_week_of_across_year_boundary() {
        let week = week_of(date(2025, 1, 1));
        assert_eq!(week[0], date(2024, 12, 30));
        assert_eq!(week[6], date(2025, 1, 5));
    }

    #[test]
    fn test_display_helpers() {
        assert_eq!(day_name(date(2024, 6, 5)), "Wed");
        assert_eq!(day_month(date(2024, 6, 5)), "Jun 5");
        assert_eq!(format_due_date(date(2024, 6, 5)), "2024-06-05");
        assert_eq!(shift_weeks(date(2024, 6, 5), -1), date(2024, 5, 29));
    }

    proptest! {
        #[test]
        fn week_of_is_seven_days_from_monday(days in 0i64..40_000) {
            let reference = date(1990, 1, 1) + Duration::days(days);
            let week = week_of(reference);
            prop_assert_eq!(week[0].weekday(), Weekday::Mon);
            prop_assert!(week.contains(&reference));
            for pair in week.windows(2) {
                prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
            }
        }
    }
}
