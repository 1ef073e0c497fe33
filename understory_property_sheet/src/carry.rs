// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carry and borrow between the hour, minute and second counters.
//!
//! A time editor lets each counter leave its range by exactly one step:
//! minutes and seconds may read `-1` or `60`. [`settle`] folds such a reading
//! back into a valid [`Time`] by carrying into (or borrowing from) the next
//! larger field. It is a single pass and has no state of its own.
//!
//! The rules, for the field the user just changed:
//!
//! | Field   | Reading | Result                                                                 |
//! |---------|---------|------------------------------------------------------------------------|
//! | seconds | `60`    | next minute at `:00`; next hour at `00:00` after `:59`; `59:59` at the hour limit |
//! | seconds | `-1`    | previous minute at `:59`; previous hour at `59:59`; stays at zero at `00:00:00` |
//! | minutes | `60`    | next hour at minute `00`; minute `59` at the hour limit                |
//! | minutes | `-1`    | previous hour at minute `59`; minute `00` at hour zero                 |
//! | hours   | any     | clamped into `0..=max_hours`                                            |
//!
//! Zero is a floor for every counter: borrowing below `00:00:00` keeps
//! `00:00:00`.

use crate::time::{Step, Time, TimeField};

/// Counter readings before carrying.
///
/// Fields are wide and signed so that any spinner reading can be represented.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RawTime {
    /// Hour counter reading.
    pub hours: i64,
    /// Minute counter reading.
    pub minutes: i64,
    /// Second counter reading.
    pub seconds: i64,
}

impl RawTime {
    /// Creates a reading.
    #[must_use]
    pub const fn new(hours: i64, minutes: i64, seconds: i64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }
}

impl From<Time> for RawTime {
    fn from(time: Time) -> Self {
        Self {
            hours: i64::from(time.hours()),
            minutes: i64::from(time.minutes()),
            seconds: i64::from(time.seconds()),
        }
    }
}

/// Folds a reading into a valid time, carrying from the `changed` field.
///
/// Fields other than `changed` are clamped into range without carrying.
#[must_use]
pub fn settle(raw: RawTime, changed: TimeField, max_hours: u32) -> Time {
    let max = i64::from(max_hours);
    let h = raw.hours.clamp(0, max);
    let m = raw.minutes.clamp(-1, 60);
    let s = raw.seconds.clamp(-1, 60);

    let (h, m, s) = match changed {
        TimeField::Seconds => match s {
            60 if m < 59 => (h, m + 1, 0),
            60 if h < max => (h + 1, 0, 0),
            60 => (h, 59, 59),
            -1 if m > 0 => (h, m - 1, 59),
            -1 if h > 0 => (h - 1, 59, 59),
            -1 => (0, 0, 0),
            _ => (h, m, s),
        },
        TimeField::Minutes => match m {
            60 if h < max => (h + 1, 0, s),
            60 => (h, 59, s),
            -1 if h > 0 => (h - 1, 59, s),
            -1 => (0, 0, s),
            _ => (h, m, s),
        },
        TimeField::Hours => (h, m, s),
    };

    Time::from_parts_saturating(h, m, s, max_hours)
}

/// Applies one spinner step to `field` and settles the result.
#[must_use]
pub fn apply_delta(time: Time, field: TimeField, step: Step, max_hours: u32) -> Time {
    let delta = match step {
        Step::Up => 1,
        Step::Down => -1,
    };
    let mut raw = RawTime::from(time);
    match field {
        TimeField::Hours => raw.hours += delta,
        TimeField::Minutes => raw.minutes += delta,
        TimeField::Seconds => raw.seconds += delta,
    }
    settle(raw, field, max_hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_LIMIT: u32 = u32::MAX;

    fn t(h: u32, m: u8, s: u8) -> Time {
        Time::new(h, m, s).unwrap()
    }

    #[test]
    fn seconds_carry_into_minutes_and_hours() {
        assert_eq!(
            apply_delta(t(0, 0, 59), TimeField::Seconds, Step::Up, NO_LIMIT),
            t(0, 1, 0)
        );
        assert_eq!(
            apply_delta(t(1, 59, 59), TimeField::Seconds, Step::Up, NO_LIMIT),
            t(2, 0, 0)
        );
    }

    #[test]
    fn seconds_saturate_at_hour_limit() {
        assert_eq!(
            apply_delta(t(5, 59, 59), TimeField::Seconds, Step::Up, 5),
            t(5, 59, 59)
        );
    }

    #[test]
    fn seconds_borrow() {
        assert_eq!(
            apply_delta(t(0, 3, 0), TimeField::Seconds, Step::Down, NO_LIMIT),
            t(0, 2, 59)
        );
        assert_eq!(
            apply_delta(t(2, 0, 0), TimeField::Seconds, Step::Down, NO_LIMIT),
            t(1, 59, 59)
        );
    }

    #[test]
    fn zero_is_a_stable_floor() {
        let once = apply_delta(t(0, 0, 1), TimeField::Seconds, Step::Down, NO_LIMIT);
        assert_eq!(once, Time::ZERO);
        let twice = apply_delta(once, TimeField::Seconds, Step::Down, NO_LIMIT);
        assert_eq!(twice, Time::ZERO);
        assert_eq!(
            apply_delta(Time::ZERO, TimeField::Minutes, Step::Down, NO_LIMIT),
            Time::ZERO
        );
        assert_eq!(
            apply_delta(Time::ZERO, TimeField::Hours, Step::Down, NO_LIMIT),
            Time::ZERO
        );
    }

    #[test]
    fn minutes_carry_and_borrow_keep_seconds() {
        assert_eq!(
            apply_delta(t(0, 59, 30), TimeField::Minutes, Step::Up, NO_LIMIT),
            t(1, 0, 30)
        );
        assert_eq!(
            apply_delta(t(3, 0, 30), TimeField::Minutes, Step::Down, NO_LIMIT),
            t(2, 59, 30)
        );
        assert_eq!(
            apply_delta(t(0, 0, 30), TimeField::Minutes, Step::Down, NO_LIMIT),
            t(0, 0, 30)
        );
        assert_eq!(
            apply_delta(t(9, 59, 30), TimeField::Minutes, Step::Up, 9),
            t(9, 59, 30)
        );
    }

    #[test]
    fn hours_only_clamp() {
        assert_eq!(
            apply_delta(t(9, 10, 0), TimeField::Hours, Step::Up, 9),
            t(9, 10, 0)
        );
        assert_eq!(
            settle(RawTime::new(-4, 10, 10), TimeField::Hours, 9),
            t(0, 10, 10)
        );
    }

    #[test]
    fn untouched_fields_are_clamped_without_carry() {
        assert_eq!(
            settle(RawTime::new(1, 60, 5), TimeField::Seconds, NO_LIMIT),
            t(1, 59, 5)
        );
        assert_eq!(
            settle(RawTime::new(1, 5, -1), TimeField::Minutes, NO_LIMIT),
            t(1, 5, 0)
        );
    }

    #[test]
    fn stepping_seconds_matches_adding_seconds() {
        let mut time = Time::ZERO;
        for _ in 0..3_661 {
            time = apply_delta(time, TimeField::Seconds, Step::Up, NO_LIMIT);
        }
        assert_eq!(time, t(1, 1, 1));
        assert_eq!(time, Time::from_total_seconds(3_661));

        for _ in 0..61 {
            time = apply_delta(time, TimeField::Seconds, Step::Down, NO_LIMIT);
        }
        assert_eq!(time, t(1, 0, 0));
    }
}
