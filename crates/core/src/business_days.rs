//! Business-day deadline arithmetic.
//!
//! Report uploads get an auto-approval deadline of five business days. The
//! deadline is computed once at upload time and stamped onto the approval
//! record; it is never recomputed afterwards.

use chrono::{Datelike, Duration, Weekday};

use crate::types::Timestamp;

/// Number of business days a customer has to review a report before it is
/// treated as auto-approved.
pub const REPORT_APPROVAL_BUSINESS_DAYS: u32 = 5;

/// Returns `true` for Monday through Friday.
pub fn is_business_day(t: Timestamp) -> bool {
    !matches!(t.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Advance `start` by `n` business days.
///
/// Walks forward one calendar day at a time and counts a day only if it is a
/// weekday. The starting day itself never counts, even when it is a weekday.
/// With `n == 0` the start is returned unchanged.
pub fn add_business_days(start: Timestamp, n: u32) -> Timestamp {
    let mut current = start;
    let mut counted = 0;
    while counted < n {
        current += Duration::days(1);
        if is_business_day(current) {
            counted += 1;
        }
    }
    current
}

/// The auto-approval deadline for a report uploaded at `uploaded_at`.
pub fn report_approval_deadline(uploaded_at: Timestamp) -> Timestamp {
    add_business_days(uploaded_at, REPORT_APPROVAL_BUSINESS_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at(y: i32, m: u32, d: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap()
    }

    #[test]
    fn friday_plus_five_lands_on_next_friday() {
        // 2024-01-05 is a Friday; Jan 6-7 are the weekend. Counting
        // Mon 8, Tue 9, Wed 10, Thu 11, Fri 12.
        assert_eq!(add_business_days(at(2024, 1, 5), 5), at(2024, 1, 12));
    }

    #[test]
    fn starting_day_is_never_counted() {
        // Monday + 1 business day is Tuesday, not Monday itself.
        assert_eq!(add_business_days(at(2024, 1, 8), 1), at(2024, 1, 9));
    }

    #[test]
    fn saturday_start_skips_to_weekdays() {
        // Saturday + 2 -> Monday, Tuesday.
        assert_eq!(add_business_days(at(2024, 1, 6), 2), at(2024, 1, 9));
    }

    #[test]
    fn zero_days_returns_start() {
        let start = at(2024, 1, 5);
        assert_eq!(add_business_days(start, 0), start);
    }

    #[test]
    fn result_never_lands_on_a_weekend() {
        // Walk every start day across four weeks; any positive count must
        // end on a weekday.
        for offset in 0..28 {
            let start = at(2024, 3, 1) + Duration::days(offset);
            for n in 1..=10 {
                let end = add_business_days(start, n);
                assert!(is_business_day(end), "landed on {}", end.weekday());
            }
        }
    }

    #[test]
    fn counts_exactly_n_weekdays_between_start_and_result() {
        for offset in 0..14 {
            let start = at(2024, 6, 3) + Duration::days(offset);
            let n = 5;
            let end = add_business_days(start, n);

            let mut weekdays = 0;
            let mut cursor = start + Duration::days(1);
            while cursor <= end {
                if is_business_day(cursor) {
                    weekdays += 1;
                }
                cursor += Duration::days(1);
            }
            assert_eq!(weekdays, n);
        }
    }

    #[test]
    fn report_deadline_uses_five_business_days() {
        assert_eq!(
            report_approval_deadline(at(2024, 1, 5)),
            add_business_days(at(2024, 1, 5), 5)
        );
    }

    #[test]
    fn time_of_day_is_preserved() {
        let start = Utc.with_ymd_and_hms(2024, 1, 5, 16, 45, 12).unwrap();
        let end = add_business_days(start, 5);
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 1, 12, 16, 45, 12).unwrap());
    }
}
