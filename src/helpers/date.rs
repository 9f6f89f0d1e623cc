//! Date helper functions

use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, Local, NaiveDate, Utc};
use chrono_tz::Tz;

/// Display format used when the configured one cannot be rendered
pub const DEFAULT_DATE_FORMAT: &str = "DD.MM.YYYY";

/// Format a date using a Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "DD.MM.YYYY") // -> "12.01.2025"
/// ```
///
/// A format chrono cannot render falls back to [`DEFAULT_DATE_FORMAT`].
pub fn format_date(date: &NaiveDate, format: &str) -> String {
    let mut chrono_format = moment_to_chrono_format(format);
    if !is_renderable(&chrono_format) {
        tracing::warn!(
            "Invalid date format {:?}, using {}",
            format,
            DEFAULT_DATE_FORMAT
        );
        chrono_format = moment_to_chrono_format(DEFAULT_DATE_FORMAT);
    }
    date.format(&chrono_format).to_string()
}

fn is_renderable(chrono_format: &str) -> bool {
    !StrftimeItems::new(chrono_format).any(|item| matches!(item, Item::Error))
}

/// Format a date as ISO 8601 (`YYYY-MM-DD`), for `datetime` attributes
pub fn date_iso(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The current calendar year in the given IANA timezone.
///
/// Falls back to the local timezone when the name is empty or unknown.
pub fn current_year(timezone: &str) -> i32 {
    match timezone.parse::<Tz>() {
        Ok(tz) => Utc::now().with_timezone(&tz).year(),
        Err(_) => {
            if !timezone.is_empty() {
                tracing::warn!("Unknown timezone {:?}, using local time", timezone);
            }
            Local::now().year()
        }
    }
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Longest patterns first within each family; the output tokens must not
    // be matched again by a later pattern
    let replacements = [
        // Year
        ("YYYY", "%Y"),
        ("YY", "%y"),
        // Month
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("M", "%-m"),
        // Day of month
        ("DDDD", "%j"),
        ("DD", "%d"),
        ("D", "%-d"),
        // Day of week
        ("dddd", "%A"),
        ("ddd", "%a"),
    ];

    // Literal percent signs must not reach strftime as directives
    let mut result = format.replace('%', "%%");

    for (from, to) in replacements {
        result = result.replace(from, to);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date_german_locale() {
        assert_eq!(format_date(&date(2025, 1, 12), "DD.MM.YYYY"), "12.01.2025");
        assert_eq!(format_date(&date(2025, 3, 9), "DD.MM.YYYY"), "09.03.2025");
    }

    #[test]
    fn test_format_date_other_patterns() {
        assert_eq!(format_date(&date(2025, 3, 9), "YYYY-MM-DD"), "2025-03-09");
        assert_eq!(format_date(&date(2025, 3, 9), "D.M.YY"), "9.3.25");
        assert_eq!(format_date(&date(2025, 3, 9), "MMMM D, YYYY"), "March 9, 2025");
    }

    #[test]
    fn test_date_iso() {
        assert_eq!(date_iso(&date(2025, 2, 3)), "2025-02-03");
    }

    #[test]
    fn test_current_year_is_plausible() {
        let local = Local::now().year();
        for tz in ["Europe/Berlin", "", "Not/AZone"] {
            let year = current_year(tz);
            assert!((local - 1..=local + 1).contains(&year));
        }
    }

    #[test]
    fn test_moment_to_chrono() {
        assert_eq!(moment_to_chrono_format("DD.MM.YYYY"), "%d.%m.%Y");
        assert_eq!(moment_to_chrono_format("dddd"), "%A");
        assert_eq!(moment_to_chrono_format("DD (100%)"), "%d (100%%)");
    }

    #[test]
    fn test_literal_percent_is_kept() {
        assert_eq!(
            format_date(&date(2025, 1, 12), "DD.MM.YYYY (100%)"),
            "12.01.2025 (100%)"
        );
        assert_eq!(format_date(&date(2025, 1, 12), "DD.MM.YYYY %Q"), "12.01.2025 %Q");
        assert_eq!(format_date(&date(2025, 1, 12), "100%D"), "100%12");
    }

    #[test]
    fn test_converted_formats_are_renderable() {
        for format in ["DD.MM.YYYY", "DD.MM.YYYY (100%)", "%", "%Q", "%%-d"] {
            assert!(is_renderable(&moment_to_chrono_format(format)), "{}", format);
        }
        assert!(!is_renderable("%Q"));
    }
}
