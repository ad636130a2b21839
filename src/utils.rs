//! Small shared helpers.

use chrono::{DateTime, Local};

/// Format the moment a favorite was saved the way the favorites grid shows it,
/// e.g. "Thursday, Aug 7, 2025".
pub fn format_saved_date(moment: DateTime<Local>) -> String {
    moment.format("%A, %b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn saved_date_is_long_weekday_short_month() {
        let moment = Local.with_ymd_and_hms(2025, 8, 7, 12, 0, 0).unwrap();
        assert_eq!(format_saved_date(moment), "Thursday, Aug 7, 2025");
    }

    #[test]
    fn first_of_the_month_has_no_zero_padding() {
        let moment = Local.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap();
        assert_eq!(format_saved_date(moment), "Sunday, Jun 1, 2025");
    }
}
