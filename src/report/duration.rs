//! Elapsed time arithmetic and rendering.

use chrono::{NaiveTime, TimeDelta};

const MICROS_PER_SECOND: i128 = 1_000_000;
const MICROS_PER_DAY: i128 = 86_400 * MICROS_PER_SECOND;

/// Computes the elapsed time between a start and an end time of day.
///
/// A forward difference under one second (including a negative one) is
/// treated as a logging anomaly and the difference is taken the other way
/// round, `start - end`.
pub fn elapsed_between(start: NaiveTime, end: NaiveTime) -> TimeDelta {
    let forward = end - start;
    if forward < TimeDelta::seconds(1) {
        start - end
    } else {
        forward
    }
}

/// Renders a duration as `H:MM:SS.ffffff`.
///
/// Hours are unpadded, the fraction always has six digits. Durations outside
/// `[0, 24h)` get a day prefix with a floored day count, so -0.5s renders as
/// `-1 day, 23:59:59.500000`.
///
/// Ranking compares this text, which matches numeric order only while the
/// hour field stays a single digit.
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let total_micros = i128::from(elapsed.num_seconds()) * MICROS_PER_SECOND
        + i128::from(elapsed.subsec_nanos() / 1_000);

    let days = total_micros.div_euclid(MICROS_PER_DAY);
    let rem = total_micros.rem_euclid(MICROS_PER_DAY);
    let hours = rem / (3_600 * MICROS_PER_SECOND);
    let minutes = rem / (60 * MICROS_PER_SECOND) % 60;
    let seconds = rem / MICROS_PER_SECOND % 60;
    let micros = rem % MICROS_PER_SECOND;

    let clock = format!("{}:{:02}:{:02}.{:06}", hours, minutes, seconds, micros);
    if days == 0 {
        clock
    } else {
        let unit = if days.abs() == 1 { "day" } else { "days" };
        format!("{} {}, {}", days, unit, clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32, s: u32, ms: u32) -> NaiveTime {
        NaiveTime::from_hms_milli_opt(h, m, s, ms).unwrap()
    }

    #[test]
    fn test_elapsed_forward() {
        let elapsed = elapsed_between(time(12, 2, 58, 917), time(12, 4, 3, 332));
        assert_eq!(elapsed, TimeDelta::milliseconds(64_415));
    }

    #[test]
    fn test_elapsed_end_before_start_is_reversed() {
        // Start logged after end: the reverse difference is used
        let elapsed = elapsed_between(time(12, 14, 12, 54), time(12, 11, 24, 67));
        assert_eq!(elapsed, TimeDelta::milliseconds(167_987));
        assert_eq!(format_elapsed(elapsed), "0:02:47.987000");
    }

    #[test]
    fn test_elapsed_sub_second_forward_delta_is_reversed() {
        let elapsed = elapsed_between(time(12, 0, 0, 0), time(12, 0, 0, 500));
        assert_eq!(elapsed, TimeDelta::milliseconds(-500));
        assert_eq!(format_elapsed(elapsed), "-1 day, 23:59:59.500000");
    }

    #[test]
    fn test_elapsed_exactly_one_second_is_kept() {
        let elapsed = elapsed_between(time(12, 0, 0, 0), time(12, 0, 1, 0));
        assert_eq!(elapsed, TimeDelta::seconds(1));
    }

    #[test]
    fn test_elapsed_zero_delta() {
        let elapsed = elapsed_between(time(9, 30, 0, 0), time(9, 30, 0, 0));
        assert_eq!(format_elapsed(elapsed), "0:00:00.000000");
    }

    #[test]
    fn test_format_elapsed_fixed_width() {
        assert_eq!(format_elapsed(TimeDelta::milliseconds(64_415)), "0:01:04.415000");
        assert_eq!(format_elapsed(TimeDelta::seconds(64)), "0:01:04.000000");
        assert_eq!(
            format_elapsed(TimeDelta::seconds(9 * 3_600 + 59 * 60 + 59)),
            "9:59:59.000000"
        );
        assert_eq!(format_elapsed(TimeDelta::microseconds(7)), "0:00:00.000007");
    }

    #[test]
    fn test_format_elapsed_days() {
        assert_eq!(format_elapsed(TimeDelta::hours(24)), "1 day, 0:00:00.000000");
        assert_eq!(
            format_elapsed(TimeDelta::hours(49) + TimeDelta::milliseconds(1)),
            "2 days, 1:00:00.001000"
        );
        assert_eq!(format_elapsed(TimeDelta::hours(-25)), "-2 days, 23:00:00.000000");
    }

    #[test]
    fn test_text_order_matches_numeric_order_below_ten_hours() {
        let mut deltas: Vec<TimeDelta> = [
            9 * 3_600_000 + 1,
            64_415,
            999,
            60_000,
            59_999,
            167_987,
            3_600_000,
            1_000,
        ]
        .into_iter()
        .map(TimeDelta::milliseconds)
        .collect();

        let mut by_text = deltas.clone();
        by_text.sort_by_key(|d| format_elapsed(*d));
        deltas.sort();
        assert_eq!(by_text, deltas);

        for d in &deltas {
            assert_eq!(format_elapsed(*d).len(), "0:00:00.000000".len());
        }
    }
}
