use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use regex::Regex;
use std::sync::OnceLock;

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"([0-9]{4})-([0-9]{2})-([0-9]{2})").expect("static date pattern"))
}

/// Upload date of an item. Scraped dates come in several shapes
/// ("2024-02-01", "2024-02-01 13:05", "업로드 2024-02-01"); only the first
/// `YYYY-MM-DD` run is significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadDate {
    Known(NaiveDate),
    /// Matched the pattern but names no representable day (month 13, day 45).
    /// Fails every bounded period.
    Invalid,
    /// No date in the text. Passes every period.
    Unknown,
}

impl UploadDate {
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(caps) = raw.and_then(|raw| date_pattern().captures(raw)) else {
            return UploadDate::Unknown;
        };
        // Only the leftmost match counts, even if it is not a real date.
        let field = |i: usize| caps[i].parse::<u32>().unwrap_or(0);
        let (year, month, day) = (field(1) as i32, field(2), field(3));
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return UploadDate::Invalid;
        }
        // Day overflow rolls into the next month: 2024-02-31 is 2024-03-02.
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|first| first.checked_add_days(Days::new(u64::from(day - 1))))
            .map_or(UploadDate::Invalid, UploadDate::Known)
    }

    /// Midnight UTC of the parsed day.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            UploadDate::Known(date) => Some(date.and_time(NaiveTime::MIN).and_utc()),
            UploadDate::Invalid | UploadDate::Unknown => None,
        }
    }
}
