//! Effective timestamps for new entries.

use chrono::{DateTime, NaiveDate, Utc};
use fintrack_domain::MILLIS_PER_DAY;

use crate::{error::CoreResult, CoreError};

/// Anchors an entry to the user's calendar date while keeping same-day entries
/// in creation order: start of `date` (UTC) plus the millisecond-of-day of
/// `created_at`.
///
/// The result always falls on `date`. Two entries created at the same
/// millisecond-of-day for the same date collide; uniqueness is carried by
/// the transaction id, not by this value.
pub fn derive_timestamp(date: NaiveDate, created_at: DateTime<Utc>) -> CoreResult<i64> {
    let start_of_day =
        start_of_day_millis(date).ok_or_else(|| CoreError::InvalidDate(date.to_string()))?;
    let offset = created_at.timestamp_millis().rem_euclid(MILLIS_PER_DAY);
    start_of_day
        .checked_add(offset)
        .ok_or_else(|| CoreError::InvalidDate(date.to_string()))
}

/// Millisecond timestamp of midnight UTC on `date`.
pub fn start_of_day_millis(date: NaiveDate) -> Option<i64> {
    date.and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, TimeZone};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn adds_millisecond_of_day_to_selected_date() {
        let created = Utc.with_ymd_and_hms(2025, 3, 2, 13, 45, 10).unwrap();
        let stamp = derive_timestamp(date(2025, 1, 10), created).unwrap();

        let expected_offset = ((13 * 60 + 45) * 60 + 10) * 1000;
        assert_eq!(
            stamp,
            start_of_day_millis(date(2025, 1, 10)).unwrap() + expected_offset
        );
    }

    #[test]
    fn result_stays_on_selected_date() {
        let created = Utc.with_ymd_and_hms(2030, 12, 31, 23, 59, 59).unwrap()
            + chrono::Duration::milliseconds(999);
        let stamp = derive_timestamp(date(2024, 2, 29), created).unwrap();
        let instant = DateTime::<Utc>::from_timestamp_millis(stamp).unwrap();
        assert_eq!(instant.date_naive(), date(2024, 2, 29));
        assert_eq!(instant.day(), 29);
    }

    #[test]
    fn later_creation_sorts_later_on_same_day() {
        let morning = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
        let evening = Utc.with_ymd_and_hms(2025, 6, 1, 20, 0, 0).unwrap();
        let day = date(2025, 5, 20);
        assert!(derive_timestamp(day, morning).unwrap() < derive_timestamp(day, evening).unwrap());
    }

    #[test]
    fn pre_epoch_creation_still_yields_offset_within_day() {
        let created = Utc.with_ymd_and_hms(1969, 12, 31, 23, 0, 0).unwrap();
        let stamp = derive_timestamp(date(2025, 1, 1), created).unwrap();
        let start = start_of_day_millis(date(2025, 1, 1)).unwrap();
        assert_eq!(stamp - start, 23 * 3_600_000);
    }
}
