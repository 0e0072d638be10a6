use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a date argument for an event.
///
/// `YYYY-MM-DD` is always accepted. When `month_only` is set, a bare
/// `YYYY-MM` is also accepted and pinned to the first day of that month.
pub fn parse_event_date(s: &str, month_only: bool) -> Option<NaiveDate> {
    if let Some(d) = parse_date(s) {
        return Some(d);
    }
    if month_only {
        return NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").ok();
    }
    None
}

/// Render-ready date text: year-month when `month_only`, full date otherwise.
pub fn derive_display_date(date: &NaiveDate, month_only: bool) -> String {
    if month_only {
        date.format("%Y-%m").to_string()
    } else {
        date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_dates() {
        assert_eq!(
            parse_date("2024-01-15"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(parse_date("2024-13-01"), None);
    }

    #[test]
    fn month_argument_pins_to_first_day() {
        assert_eq!(
            parse_event_date("2024-03", true),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert_eq!(parse_event_date("2024-03", false), None);
        assert_eq!(
            parse_event_date("2024-03-20", true),
            NaiveDate::from_ymd_opt(2024, 3, 20)
        );
    }

    #[test]
    fn display_date_honors_month_only() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(derive_display_date(&d, true), "2024-01");
        assert_eq!(derive_display_date(&d, false), "2024-01-15");
    }
}
