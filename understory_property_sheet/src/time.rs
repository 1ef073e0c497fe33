// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Durations as hours, minutes and seconds, and the time property.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::carry::{self, RawTime};
use crate::error::{TimeOverflow, ViewFault};
use crate::kind::{EditorWidget, PropertyKind};
use crate::property::Property;
use crate::state::ViewState;
use crate::widget::{Label, Spinner};

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;

/// A non-negative duration with whole-second precision.
///
/// Minutes and seconds are always in `0..=59`; hours are unbounded up to
/// `u32::MAX`. Ordering is chronological.
///
/// ```rust
/// use understory_property_sheet::Time;
///
/// let t = Time::from_total_seconds(3_661);
/// assert_eq!((t.hours(), t.minutes(), t.seconds()), (1, 1, 1));
/// assert_eq!(t.to_string(), "01:01:01");
/// assert_eq!(t.total_seconds(), 3_661);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "u64", try_from = "u64")
)]
pub struct Time {
    hours: u32,
    minutes: u8,
    seconds: u8,
}

impl Time {
    /// `00:00:00`.
    pub const ZERO: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Creates a time, or `None` if minutes or seconds are above 59.
    #[must_use]
    pub const fn new(hours: u32, minutes: u8, seconds: u8) -> Option<Self> {
        if minutes > 59 || seconds > 59 {
            return None;
        }
        Some(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// Splits a number of seconds into hours, minutes and seconds.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "minutes and seconds are remainders below 60"
    )]
    pub const fn from_total_seconds(total: u32) -> Self {
        Self {
            hours: total / 3_600,
            minutes: ((total % 3_600) / 60) as u8,
            seconds: (total % 60) as u8,
        }
    }

    /// Returns the hour count.
    #[must_use]
    pub const fn hours(self) -> u32 {
        self.hours
    }

    /// Returns the minutes, in `0..=59`.
    #[must_use]
    pub const fn minutes(self) -> u8 {
        self.minutes
    }

    /// Returns the seconds, in `0..=59`.
    #[must_use]
    pub const fn seconds(self) -> u8 {
        self.seconds
    }

    /// Returns the duration in seconds.
    #[must_use]
    pub const fn total_seconds(self) -> u64 {
        self.hours as u64 * SECONDS_PER_HOUR
            + self.minutes as u64 * SECONDS_PER_MINUTE
            + self.seconds as u64
    }

    /// Returns this time with hours limited to `max_hours`.
    #[must_use]
    pub fn with_hours_at_most(self, max_hours: u32) -> Self {
        Self {
            hours: self.hours.min(max_hours),
            ..self
        }
    }

    /// Builds a time from readings that are already in range, clamping any
    /// stragglers.
    pub(crate) fn from_parts_saturating(hours: i64, minutes: i64, seconds: i64, max_hours: u32) -> Self {
        let field = |v: i64| u8::try_from(v.clamp(0, 59)).unwrap_or(0);
        Self {
            hours: u32::try_from(hours.clamp(0, i64::from(max_hours))).unwrap_or(max_hours),
            minutes: field(minutes),
            seconds: field(seconds),
        }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

impl From<Time> for u64 {
    fn from(time: Time) -> Self {
        time.total_seconds()
    }
}

impl TryFrom<u64> for Time {
    type Error = TimeOverflow;

    fn try_from(total_seconds: u64) -> Result<Self, Self::Error> {
        let hours = u32::try_from(total_seconds / SECONDS_PER_HOUR)
            .map_err(|_| TimeOverflow { total_seconds })?;
        let rest = total_seconds % SECONDS_PER_HOUR;
        let field = |v: u64| u8::try_from(v).map_err(|_| TimeOverflow { total_seconds });
        Ok(Self {
            hours,
            minutes: field(rest / SECONDS_PER_MINUTE)?,
            seconds: field(rest % SECONDS_PER_MINUTE)?,
        })
    }
}

/// One of the three counters of a [`Time`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TimeField {
    /// The hour counter.
    Hours,
    /// The minute counter.
    Minutes,
    /// The second counter.
    Seconds,
}

/// Direction of a spinner click.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// One up.
    Up,
    /// One down.
    Down,
}

/// Editor model for a time: three spinners that may overshoot by one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimePanel {
    hours: Spinner,
    minutes: Spinner,
    seconds: Spinner,
    last_changed: Option<TimeField>,
    state: ViewState,
}

impl TimePanel {
    fn new(time: Time, max_hours: u32) -> Self {
        let mut hours = Spinner::new(0, i64::from(max_hours), i64::from(time.hours()));
        let mut minutes = Spinner::new(-1, 60, i64::from(time.minutes()));
        let mut seconds = Spinner::new(-1, 60, i64::from(time.seconds()));
        hours.set_pattern("00");
        minutes.set_pattern("00");
        seconds.set_pattern("00");
        Self {
            hours,
            minutes,
            seconds,
            last_changed: None,
            state: ViewState::default(),
        }
    }

    /// Returns the spinner for one field.
    #[must_use]
    pub fn spinner(&self, field: TimeField) -> &Spinner {
        match field {
            TimeField::Hours => &self.hours,
            TimeField::Minutes => &self.minutes,
            TimeField::Seconds => &self.seconds,
        }
    }

    fn spinner_mut(&mut self, field: TimeField) -> &mut Spinner {
        self.last_changed = Some(field);
        match field {
            TimeField::Hours => &mut self.hours,
            TimeField::Minutes => &mut self.minutes,
            TimeField::Seconds => &mut self.seconds,
        }
    }

    /// Simulates a click on one of the spinner arrows.
    pub fn step(&mut self, field: TimeField, step: Step) {
        let spinner = self.spinner_mut(field);
        match step {
            Step::Up => spinner.step_up(),
            Step::Down => spinner.step_down(),
        }
    }

    /// Simulates typing a number into one spinner.
    pub fn enter(&mut self, field: TimeField, value: i64) {
        self.spinner_mut(field).set(value);
    }

    /// Returns the current readings, which may be out of range until the
    /// panel is read back.
    #[must_use]
    pub fn raw(&self) -> RawTime {
        RawTime::new(self.hours.value(), self.minutes.value(), self.seconds.value())
    }

    /// Returns the field the user changed last, if any since the last push.
    #[must_use]
    pub fn last_changed(&self) -> Option<TimeField> {
        self.last_changed
    }

    /// Number of display writes across all three spinners.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.hours.writes() + self.minutes.writes() + self.seconds.writes()
    }
}

impl EditorWidget for TimePanel {
    fn set_view_state(&mut self, state: ViewState) {
        self.state = state;
    }

    fn view_state(&self) -> ViewState {
        self.state
    }
}

/// A [`Time`] edited with carrying spinners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeKind {
    max_hours: u32,
}

impl TimeKind {
    /// A time kind whose hour counter stops at `max_hours`.
    #[must_use]
    pub const fn with_max_hours(max_hours: u32) -> Self {
        Self { max_hours }
    }

    /// Returns the largest hour count.
    #[must_use]
    pub const fn max_hours(&self) -> u32 {
        self.max_hours
    }
}

impl Default for TimeKind {
    fn default() -> Self {
        Self::with_max_hours(u32::MAX)
    }
}

impl PropertyKind for TimeKind {
    type Value = Time;
    type Editor = TimePanel;
    type Viewer = Label;

    fn normalize(&mut self, value: Time) -> Time {
        value.with_hours_at_most(self.max_hours)
    }

    fn create_editor(&self, value: &Time) -> TimePanel {
        TimePanel::new(*value, self.max_hours)
    }

    fn create_viewer(&self, value: &Time) -> Label {
        Label::new(format!("{value}"))
    }

    fn update_editor(&self, editor: &mut TimePanel, value: &Time) -> Result<(), ViewFault> {
        editor.last_changed = None;
        editor.hours.show(i64::from(value.hours()))?;
        editor.minutes.show(i64::from(value.minutes()))?;
        editor.seconds.show(i64::from(value.seconds()))?;
        Ok(())
    }

    fn update_viewer(&self, viewer: &mut Label, value: &Time) -> Result<(), ViewFault> {
        viewer.show(&format!("{value}"));
        Ok(())
    }

    fn read_editor(&self, editor: &TimePanel) -> Option<Time> {
        let changed = editor.last_changed.unwrap_or(TimeField::Hours);
        Some(carry::settle(editor.raw(), changed, self.max_hours))
    }

    fn describe(&self, value: &Time) -> String {
        format!("{value}")
    }
}

/// A property holding a [`Time`].
pub type TimeProperty = Property<TimeKind>;

impl Property<TimeKind> {
    /// Creates a time property without an hour limit.
    #[must_use]
    pub fn new(name: impl Into<String>, time: Time) -> Self {
        Self::with_kind(name, TimeKind::default(), time)
    }

    /// Creates a time property whose hours stop at `max_hours`.
    #[must_use]
    pub fn with_max_hours(name: impl Into<String>, time: Time, max_hours: u32) -> Self {
        Self::with_kind(name, TimeKind::with_max_hours(max_hours), time)
    }

    /// Steps one field as a spinner click would, carrying as needed, and
    /// stores the result.
    pub fn step(&self, field: TimeField, step: Step) {
        let max_hours = self.with_kind_ref(TimeKind::max_hours);
        let next = carry::apply_delta(self.value(), field, step, max_hours);
        self.set_value(next);
    }
}
