//! Civil-calendar math over unix timestamps, used for the monthly
//! withdrawal window. Days-to-date conversion follows the standard
//! proleptic Gregorian algorithm.

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// (year, month, day) for a count of days since 1970-01-01.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = (z - era * 146_097) as u64;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let m = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    (if m <= 2 { y + 1 } else { y }, m, d)
}

/// Day of month (1-31) in UTC for a unix timestamp.
pub fn day_of_month(unix_ts: i64) -> u32 {
    civil_from_days(unix_ts.div_euclid(SECONDS_PER_DAY)).2
}

/// Monotonic calendar-month index (months since year 0) in UTC.
/// Seeds the once-per-month withdrawal PDA.
pub fn month_index(unix_ts: i64) -> u32 {
    let (year, month, _) = civil_from_days(unix_ts.div_euclid(SECONDS_PER_DAY));
    (year * 12 + month as i64 - 1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_january_first() {
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(day_of_month(0), 1);
    }

    #[test]
    fn known_dates() {
        // 2000-03-01T00:00:00Z
        assert_eq!(civil_from_days(951_868_800 / 86_400), (2000, 3, 1));
        // 2024-02-29T12:00:00Z (leap day)
        assert_eq!(day_of_month(1_709_164_800 + 12 * 3_600), 29);
        // 2026-08-30T00:00:00Z
        assert_eq!(civil_from_days(1_788_048_000 / 86_400), (2026, 8, 30));
    }

    #[test]
    fn month_index_changes_at_month_boundary() {
        // 2024-01-31T23:59:59Z vs 2024-02-01T00:00:00Z
        let jan_31 = 1_706_745_599;
        let feb_1 = 1_706_745_600;
        assert_eq!(day_of_month(jan_31), 31);
        assert_eq!(day_of_month(feb_1), 1);
        assert_eq!(month_index(jan_31) + 1, month_index(feb_1));
    }

    #[test]
    fn month_index_stable_within_a_month() {
        // First and last second of 2025-06
        assert_eq!(month_index(1_748_736_000), month_index(1_751_327_999));
    }

    #[test]
    fn last_second_of_day_still_counts() {
        // 2025-06-01T23:59:59Z is still day 1
        assert_eq!(day_of_month(1_748_822_399), 1);
        assert_eq!(day_of_month(1_748_822_400), 2);
    }
}
