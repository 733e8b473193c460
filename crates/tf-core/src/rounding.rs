//! Rounding of single timestamps to an interval grid.
//!
//! The grid is anchored at midnight of the timestamp's own calendar day, so a
//! 5 minute interval yields 00:00, 00:05, 00:10 and so on. Rounding to the
//! nearest grid point may carry a late timestamp into the next day
//! (23:58 becomes 00:00 of the following day).

use chrono::{Duration, NaiveDateTime, Timelike};

use crate::AdjustError;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Rounds a timestamp to the nearest multiple of an interval since midnight.
pub trait RoundToInterval: Sized {
    /// Rounds `self` to the nearest grid point. A zero interval disables rounding.
    fn round_to_interval(self, interval: Duration) -> Result<Self, AdjustError>;
}

impl RoundToInterval for NaiveDateTime {
    fn round_to_interval(self, interval: Duration) -> Result<Self, AdjustError> {
        round_to_interval(self, interval)
    }
}

/// Rounds `instant` to the nearest multiple of `interval` measured from midnight.
///
/// Exact halves round up (half away from zero), so with a 5 minute interval
/// 13:17:30 becomes 13:20:00 while 13:17:29 becomes 13:15:00. Instants that
/// already sit on the grid, and any instant when `interval` is zero, are
/// returned unchanged.
///
/// # Errors
///
/// - [`AdjustError::NegativeInterval`] if `interval` is negative.
/// - [`AdjustError::OutOfRange`] if the nearest grid point lies beyond the
///   range of [`NaiveDateTime`].
pub fn round_to_interval(
    instant: NaiveDateTime,
    interval: Duration,
) -> Result<NaiveDateTime, AdjustError> {
    ensure_non_negative(interval)?;
    if interval.is_zero() {
        return Ok(instant);
    }

    let elapsed = nanos_since_midnight(instant);
    let step = total_nanos(interval);
    if elapsed % step == 0 {
        return Ok(instant);
    }

    // floor(elapsed / step + 1/2) in integers, i.e. round half up
    let target = (2 * elapsed + step) / (2 * step) * step;

    #[expect(
        clippy::cast_possible_truncation,
        reason = "the adjustment never exceeds one day of nanoseconds"
    )]
    let delta = Duration::nanoseconds((target - elapsed) as i64);

    instant
        .checked_add_signed(delta)
        .ok_or(AdjustError::OutOfRange { instant, interval })
}

/// Rejects negative intervals.
pub(crate) fn ensure_non_negative(interval: Duration) -> Result<(), AdjustError> {
    if interval < Duration::zero() {
        return Err(AdjustError::NegativeInterval { interval });
    }
    Ok(())
}

fn nanos_since_midnight(instant: NaiveDateTime) -> i128 {
    let time = instant.time();
    i128::from(time.num_seconds_from_midnight()) * NANOS_PER_SECOND
        + i128::from(time.nanosecond())
}

fn total_nanos(duration: Duration) -> i128 {
    i128::from(duration.num_seconds()) * NANOS_PER_SECOND + i128::from(duration.subsec_nanos())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, 7, 29)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .expect("valid test timestamp")
    }

    fn five_minutes() -> Duration {
        Duration::minutes(5)
    }

    #[test]
    fn test_half_interval_rounds_up() {
        let rounded = round_to_interval(at(13, 17, 30), five_minutes()).unwrap();
        assert_eq!(rounded, at(13, 20, 0));
    }

    #[test]
    fn test_just_below_half_rounds_down() {
        let rounded = round_to_interval(at(13, 17, 29), five_minutes()).unwrap();
        assert_eq!(rounded, at(13, 15, 0));
    }

    #[test]
    fn test_zero_interval_is_noop() {
        let rounded = round_to_interval(at(13, 17, 32), Duration::zero()).unwrap();
        assert_eq!(rounded, at(13, 17, 32));
    }

    #[test]
    fn test_on_grid_instant_unchanged() {
        let rounded = round_to_interval(at(13, 20, 0), five_minutes()).unwrap();
        assert_eq!(rounded, at(13, 20, 0));
    }

    #[test]
    fn test_negative_interval_rejected() {
        let err = round_to_interval(at(13, 17, 30), Duration::minutes(-5)).unwrap_err();
        assert_eq!(
            err,
            AdjustError::NegativeInterval {
                interval: Duration::minutes(-5)
            }
        );
    }

    #[test]
    fn test_rounds_into_next_day() {
        let rounded = round_to_interval(at(23, 58, 0), five_minutes()).unwrap();
        let next_midnight = NaiveDate::from_ymd_opt(2019, 7, 30)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        assert_eq!(rounded, next_midnight);
    }

    #[test]
    fn test_sub_second_precision() {
        let instant = at(9, 2, 29) + Duration::milliseconds(999);
        let rounded = round_to_interval(instant, five_minutes()).unwrap();
        assert_eq!(rounded, at(9, 0, 0));

        let instant = at(9, 2, 30) + Duration::nanoseconds(1);
        let rounded = round_to_interval(instant, five_minutes()).unwrap();
        assert_eq!(rounded, at(9, 5, 0));
    }

    #[test]
    fn test_rounding_past_last_representable_day_fails() {
        let instant = NaiveDateTime::MAX - Duration::minutes(2);
        let err = round_to_interval(instant, five_minutes()).unwrap_err();
        assert_eq!(
            err,
            AdjustError::OutOfRange {
                instant,
                interval: five_minutes()
            }
        );
    }

    #[test]
    fn test_rounding_down_on_last_representable_day() {
        let instant = NaiveDateTime::MAX - Duration::minutes(4);
        let rounded = round_to_interval(instant, five_minutes()).unwrap();
        assert_eq!(rounded.date(), NaiveDateTime::MAX.date());
        assert_eq!(rounded.time().to_string(), "23:55:00");
    }

    #[test]
    fn test_sub_second_remainder_with_non_divisor_interval() {
        let seven_minutes = Duration::minutes(7);
        // 00:59:30 is exactly 8.5 steps of 7m: the half rounds up to 01:03
        let half = at(0, 59, 30);
        assert_eq!(half.round_to_interval(seven_minutes).unwrap(), at(1, 3, 0));

        // one nanosecond short of the half rounds down to 00:56
        let below = half - Duration::nanoseconds(1);
        assert_eq!(below.round_to_interval(seven_minutes).unwrap(), at(0, 56, 0));

        let fractional = at(13, 17, 42) + Duration::microseconds(123_456);
        let rounded = fractional.round_to_interval(seven_minutes).unwrap();
        assert_eq!(total_nanos(rounded - at(0, 0, 0)) % total_nanos(seven_minutes), 0);
        assert!((rounded - fractional).abs() * 2 <= seven_minutes);
        assert_eq!(rounded, at(13, 18, 0));
    }

    #[test]
    fn test_interval_longer_than_a_day_rounds_to_midnight() {
        let rounded = round_to_interval(at(11, 0, 0), Duration::days(3)).unwrap();
        assert_eq!(rounded, at(0, 0, 0));
    }

    #[test]
    fn test_grid_is_anchored_at_midnight() {
        // 7 minutes does not divide an hour: 01:00 is 60/7 = 8.57 steps in
        let rounded = round_to_interval(at(1, 0, 0), Duration::minutes(7)).unwrap();
        assert_eq!(rounded, at(1, 3, 0));
    }

    #[test]
    fn test_results_always_land_on_grid() {
        let intervals = [
            Duration::seconds(30),
            Duration::minutes(5),
            Duration::minutes(7),
            Duration::minutes(15),
            Duration::hours(1),
        ];
        for interval in intervals {
            for second in (0..86_400).step_by(613) {
                let instant = at(0, 0, 0) + Duration::seconds(second);
                let rounded = instant.round_to_interval(interval).unwrap();
                // measured from the input day's midnight so rollover still counts
                let elapsed = total_nanos(rounded - at(0, 0, 0));
                assert_eq!(
                    elapsed % total_nanos(interval),
                    0,
                    "{instant} rounded to {rounded} with interval {interval}"
                );
                assert!((rounded - instant).abs() * 2 <= interval);
            }
        }
    }

    #[test]
    fn test_on_grid_values_are_fixed_points() {
        let interval = Duration::minutes(15);
        for step in 0..96 {
            let instant = at(0, 0, 0) + interval * step;
            assert_eq!(instant.round_to_interval(interval).unwrap(), instant);
        }
    }
}
