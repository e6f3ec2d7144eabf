mod common;

use chrono::{
    FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone,
};
use common::{make_item, titles, utc};
use keyword_board::app::{Selection, elapsed_days, filter_items, start_of_day};
use keyword_board::data::UploadDate;

fn select(topic: &str, period: &str) -> Selection {
    Selection::new(topic, period)
}

// --- topic ---

#[test]
fn topic_exact_match_only() {
    let items = vec![
        make_item("a", Some("정치"), None),
        make_item("b", Some("경제"), None),
        make_item("c", Some("정치 "), None),
        make_item("d", Some("정치"), None),
    ];
    let now = utc(2024, 2, 10, 12, 0, 0);
    let filtered = filter_items(&items, &select("정치", "today"), &now);
    assert_eq!(titles(&filtered), vec!["a", "d"]);
    assert!(filtered.iter().all(|i| i.effective_category() == "정치"));
}

#[test]
fn topic_is_case_sensitive() {
    let items = vec![
        make_item("upper", Some("Tech"), None),
        make_item("lower", Some("tech"), None),
    ];
    let now = utc(2024, 2, 10, 12, 0, 0);
    let filtered = filter_items(&items, &select("tech", "1month"), &now);
    assert_eq!(titles(&filtered), vec!["lower"]);
}

#[test]
fn missing_category_falls_back_to_politics() {
    let items = vec![make_item("legacy", None, Some("2024-02-10"))];
    let now = utc(2024, 2, 10, 12, 0, 0);

    let filtered = filter_items(&items, &select("정치", "today"), &now);
    assert_eq!(titles(&filtered), vec!["legacy"]);

    for topic in ["경제", "사회", "장년"] {
        assert!(filter_items(&items, &select(topic, "today"), &now).is_empty());
    }
}

#[test]
fn empty_category_falls_back_to_politics() {
    let items = vec![make_item("blank", Some(""), None)];
    let now = utc(2024, 2, 10, 12, 0, 0);
    assert_eq!(filter_items(&items, &select("정치", "today"), &now).len(), 1);
    assert!(filter_items(&items, &select("경제", "today"), &now).is_empty());
}

#[test]
fn filter_preserves_original_order() {
    let items = vec![
        make_item("z", Some("사회"), Some("2024-02-09")),
        make_item("skip", Some("경제"), Some("2024-02-09")),
        make_item("a", Some("사회"), Some("2024-02-08")),
        make_item("m", Some("사회"), None),
    ];
    let now = utc(2024, 2, 10, 12, 0, 0);
    let filtered = filter_items(&items, &select("사회", "1week"), &now);
    assert_eq!(titles(&filtered), vec!["z", "a", "m"]);
}

// --- period windows ---

#[test]
fn unknown_date_passes_every_period() {
    let items = vec![
        make_item("none", Some("정치"), None),
        make_item("text", Some("정치"), Some("3시간 전")),
        make_item("slashes", Some("정치"), Some("2024/02/01")),
    ];
    let now = utc(2024, 2, 10, 12, 0, 0);
    for period in ["today", "3days", "1week", "1month", "whatever"] {
        let filtered = filter_items(&items, &select("정치", period), &now);
        assert_eq!(filtered.len(), 3, "period {}", period);
    }
}

#[test]
fn invalid_date_fails_bounded_periods() {
    let items = vec![make_item("invalid", Some("정치"), Some("2024-13-45"))];
    let now = utc(2024, 2, 10, 12, 0, 0);
    for period in ["today", "3days", "1week", "1month"] {
        assert!(
            filter_items(&items, &select("정치", period), &now).is_empty(),
            "period {}",
            period
        );
    }
    assert_eq!(filter_items(&items, &select("정치", "whatever"), &now).len(), 1);
}

#[test]
fn overflowing_day_is_filtered_as_rolled_date() {
    // 2024-02-31 is 2024-03-02: 49 days before 2024-04-20.
    let items = vec![make_item("rolled", Some("정치"), Some("2024-02-31"))];
    let now = utc(2024, 4, 20, 0, 0, 0);
    assert_eq!(
        elapsed_days(UploadDate::parse(Some("2024-02-31")), &now),
        Some(49.0)
    );
    assert!(filter_items(&items, &select("정치", "3days"), &now).is_empty());
    assert!(filter_items(&items, &select("정치", "1month"), &now).is_empty());

    let next_day = utc(2024, 3, 3, 0, 0, 0);
    assert_eq!(filter_items(&items, &select("정치", "3days"), &next_day).len(), 1);
}

#[test]
fn unknown_date_still_needs_matching_topic() {
    let items = vec![make_item("none", Some("경제"), None)];
    let now = utc(2024, 2, 10, 12, 0, 0);
    assert!(filter_items(&items, &select("정치", "1month"), &now).is_empty());
}

#[test]
fn week_excludes_and_month_includes_nine_day_old_item() {
    let items = vec![make_item("old", Some("정치"), Some("2024-02-01"))];
    let now = utc(2024, 2, 10, 0, 0, 0);
    assert!(filter_items(&items, &select("정치", "1week"), &now).is_empty());
    assert_eq!(filter_items(&items, &select("정치", "1month"), &now).len(), 1);
}

#[test]
fn rolling_window_is_inclusive_at_boundary() {
    let items = vec![make_item("edge", Some("정치"), Some("2024-02-01"))];

    let exactly_three = utc(2024, 2, 4, 0, 0, 0);
    assert_eq!(elapsed_days(UploadDate::parse(Some("2024-02-01")), &exactly_three), Some(3.0));
    assert_eq!(filter_items(&items, &select("정치", "3days"), &exactly_three).len(), 1);

    let just_over = utc(2024, 2, 4, 0, 0, 1);
    assert!(filter_items(&items, &select("정치", "3days"), &just_over).is_empty());
}

#[test]
fn week_and_month_boundaries() {
    let items = vec![make_item("edge", Some("정치"), Some("2024-01-01"))];
    assert_eq!(
        filter_items(&items, &select("정치", "1week"), &utc(2024, 1, 8, 0, 0, 0)).len(),
        1
    );
    assert!(filter_items(&items, &select("정치", "1week"), &utc(2024, 1, 8, 0, 1, 0)).is_empty());
    assert_eq!(
        filter_items(&items, &select("정치", "1month"), &utc(2024, 1, 31, 0, 0, 0)).len(),
        1
    );
    assert!(filter_items(&items, &select("정치", "1month"), &utc(2024, 1, 31, 1, 0, 0)).is_empty());
}

#[test]
fn spelled_out_period_values() {
    let items = vec![make_item("old", Some("정치"), Some("2024-02-01"))];
    let now = utc(2024, 2, 10, 0, 0, 0);
    assert!(filter_items(&items, &select("정치", "1 week"), &now).is_empty());
    assert_eq!(filter_items(&items, &select("정치", "1 month"), &now).len(), 1);
}

#[test]
fn unrecognized_period_is_permissive() {
    let items = vec![make_item("ancient", Some("정치"), Some("1999-01-01"))];
    let now = utc(2024, 2, 10, 0, 0, 0);
    assert_eq!(filter_items(&items, &select("정치", "all"), &now).len(), 1);
}

#[test]
fn future_dated_item_passes_rolling_windows() {
    let items = vec![make_item("future", Some("정치"), Some("2024-03-01"))];
    let now = utc(2024, 2, 10, 0, 0, 0);
    assert_eq!(filter_items(&items, &select("정치", "3days"), &now).len(), 1);
}

// --- today ---

#[test]
fn today_includes_items_from_midnight_on() {
    let items = vec![
        make_item("today", Some("정치"), Some("2024-02-10 09:00")),
        make_item("yesterday", Some("정치"), Some("2024-02-09 23:59")),
    ];
    let now = utc(2024, 2, 10, 0, 0, 0);
    let filtered = filter_items(&items, &select("정치", "today"), &now);
    assert_eq!(titles(&filtered), vec!["today"]);

    let late = utc(2024, 2, 10, 23, 59, 59);
    let filtered = filter_items(&items, &select("정치", "today"), &late);
    assert_eq!(titles(&filtered), vec!["today"]);
}

#[test]
fn today_differs_from_rolling_window() {
    // 30 hours old: outside "today" yet inside "3days".
    let items = vec![make_item("recent", Some("정치"), Some("2024-02-09"))];
    let now = utc(2024, 2, 10, 6, 0, 0);
    assert!(filter_items(&items, &select("정치", "today"), &now).is_empty());
    assert_eq!(filter_items(&items, &select("정치", "3days"), &now).len(), 1);
}

#[test]
fn today_uses_evaluation_time_zone_midnight() {
    // 2024-02-10 08:00 in UTC+9 is 2024-02-09 23:00 UTC. Local midnight is
    // 2024-02-09 15:00 UTC, so an item dated 2024-02-09 (00:00 UTC) is before it.
    let kst = FixedOffset::east_opt(9 * 3600).unwrap();
    let now = kst.with_ymd_and_hms(2024, 2, 10, 8, 0, 0).unwrap();
    assert_eq!(start_of_day(&now), utc(2024, 2, 9, 15, 0, 0));

    let items = vec![
        make_item("feb9", Some("정치"), Some("2024-02-09")),
        make_item("feb10", Some("정치"), Some("2024-02-10")),
    ];
    let filtered = filter_items(&items, &select("정치", "today"), &now);
    assert_eq!(titles(&filtered), vec!["feb10"]);
}

/// UTC-3 until 2018-11-04 00:00 local, then clocks jump to 01:00 at UTC-2,
/// so that day has no local midnight.
#[derive(Debug, Clone, Copy)]
struct SkippedMidnightZone;

impl SkippedMidnightZone {
    fn switch_local() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2018, 11, 4)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    fn before() -> FixedOffset {
        FixedOffset::west_opt(3 * 3600).unwrap()
    }

    fn after() -> FixedOffset {
        FixedOffset::west_opt(2 * 3600).unwrap()
    }
}

impl TimeZone for SkippedMidnightZone {
    type Offset = FixedOffset;

    fn from_offset(_offset: &FixedOffset) -> Self {
        SkippedMidnightZone
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
        self.offset_from_local_datetime(&local.and_time(NaiveTime::MIN))
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
        let switch = Self::switch_local();
        if *local < switch {
            LocalResult::Single(Self::before())
        } else if *local < switch + TimeDelta::hours(1) {
            LocalResult::None
        } else {
            LocalResult::Single(Self::after())
        }
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
        self.offset_from_utc_datetime(&utc.and_time(NaiveTime::MIN))
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
        // 2018-11-04 00:00 at UTC-3 is 03:00 UTC.
        if *utc < Self::switch_local() + TimeDelta::hours(3) {
            Self::before()
        } else {
            Self::after()
        }
    }
}

#[test]
fn today_starts_at_first_valid_time_when_midnight_is_skipped() {
    // 10:00 local (UTC-2); the day begins at 01:00 local, 03:00 UTC.
    let now = SkippedMidnightZone.from_utc_datetime(&utc(2018, 11, 4, 12, 0, 0).naive_utc());
    assert_eq!(start_of_day(&now), utc(2018, 11, 4, 3, 0, 0));

    let items = vec![make_item("that-day", Some("정치"), Some("2018-11-04"))];
    // Dated 00:00 UTC, before the local day began.
    assert!(filter_items(&items, &select("정치", "today"), &now).is_empty());
}

#[test]
fn today_after_clock_change_uses_offset_at_midnight() {
    // Day after the switch: midnight is at UTC-2 throughout.
    let now = SkippedMidnightZone.from_utc_datetime(&utc(2018, 11, 5, 15, 0, 0).naive_utc());
    assert_eq!(start_of_day(&now), utc(2018, 11, 5, 2, 0, 0));
}

#[test]
fn empty_dataset_yields_empty_result() {
    let now = utc(2024, 2, 10, 0, 0, 0);
    assert!(filter_items(&[], &select("정치", "today"), &now).is_empty());
}
