use chrono::{DateTime, NaiveTime, TimeDelta, TimeZone, Utc};

use super::selection::{Period, Selection};
use crate::data::{Item, UploadDate};

const MILLIS_PER_DAY: f64 = 86_400_000.0;
const MIDNIGHT_GAP_STEP_MINUTES: i64 = 15;

/// Stable filter over the dataset: topic first, then the period window
/// evaluated against `now`. Items without a date pass any period; items with
/// an unrepresentable date only pass an unbounded one.
pub fn filter_items<'a, Tz: TimeZone>(
    items: &'a [Item],
    selection: &Selection,
    now: &DateTime<Tz>,
) -> Vec<&'a Item> {
    let period = selection.period();
    let now_utc = now.with_timezone(&Utc);
    let today_start = start_of_day(now);

    items
        .iter()
        .filter(|item| item.effective_category() == selection.topic)
        .filter(|item| match item.parsed_date() {
            UploadDate::Unknown => true,
            UploadDate::Invalid => period == Period::Unbounded,
            date => within_period(date, period, &now_utc, &today_start),
        })
        .collect()
}

fn within_period(
    date: UploadDate,
    period: Period,
    now: &DateTime<Utc>,
    today_start: &DateTime<Utc>,
) -> bool {
    let Some(instant) = date.instant() else {
        return period == Period::Unbounded;
    };
    match period {
        Period::Today => instant >= *today_start,
        Period::Unbounded => true,
        window => match (window.max_days(), elapsed_days(date, now)) {
            (Some(max), Some(days)) => days <= max,
            _ => true,
        },
    }
}

/// Start of `now`'s calendar day in its own time zone. When the zone skips
/// midnight the day starts at the first local time that exists.
pub fn start_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    let tz = now.timezone();
    let midnight = now.date_naive().and_time(NaiveTime::MIN);
    (0..=24 * 60 / MIDNIGHT_GAP_STEP_MINUTES)
        .map(|step| midnight + TimeDelta::minutes(step * MIDNIGHT_GAP_STEP_MINUTES))
        .find_map(|local| tz.from_local_datetime(&local).earliest())
        .map_or_else(|| now.with_timezone(&Utc), |start| start.with_timezone(&Utc))
}

/// Elapsed fractional days between an item's date and `now`.
pub fn elapsed_days<Tz: TimeZone>(date: UploadDate, now: &DateTime<Tz>) -> Option<f64> {
    let instant = date.instant()?;
    let delta = now.with_timezone(&Utc) - instant;
    Some(delta.num_milliseconds() as f64 / MILLIS_PER_DAY)
}
