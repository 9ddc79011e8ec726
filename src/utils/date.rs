use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

const DATE_TIME_FORMATS: [&str; 3] = [
    DATE_FMT,
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
];

/// Parses the loose date formats accepted for `publishedDate`, e.g.
/// `1965-06-01`, `1965-06-01T00:00:00Z`, `June 1, 1965`, `1965-06` or `1965`.
/// Returns `None` for anything that is not an actual calendar date.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.date_naive());
    }
    if let Ok(date) = DateTime::parse_from_rfc2822(value) {
        return Some(date.date_naive());
    }
    for fmt in DATE_TIME_FORMATS {
        if let Ok(date) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(date.date());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return Some(date);
        }
    }
    parse_partial_date(value)
}

// year-only and year-month forms, which chrono won't parse without a day
fn parse_partial_date(value: &str) -> Option<NaiveDate> {
    let mut parts = value.split('-');
    let year = parts.next().filter(|y| y.len() == 4 && y.bytes().all(|b| b.is_ascii_digit()))?;
    let month = match parts.next() {
        Some(m) if m.len() == 2 && m.bytes().all(|b| b.is_ascii_digit()) => m.parse::<u32>().ok()?,
        Some(_) => return None,
        None => 1,
    };
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse::<i32>().ok()?, month, 1)
}
