// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless widget models shared by several property kinds.
//!
//! These hold what a toolkit widget would display, with no rendering. A host
//! renders them; tests inspect them. Every model counts the writes that
//! actually changed what it displays, so redundant pushes are observable.

use alloc::string::{String, ToString};

use crate::error::ViewFault;
use crate::kind::EditorWidget;
use crate::state::ViewState;

/// A single line of read-only text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Label {
    text: String,
    state: ViewState,
    writes: usize,
}

impl Label {
    /// Creates a label showing `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            state: ViewState::default(),
            writes: 0,
        }
    }

    /// Returns the displayed text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Displays `text`. Returns `false` if it was already displayed.
    pub fn show(&mut self, text: &str) -> bool {
        if self.text == text {
            return false;
        }
        self.text.clear();
        self.text.push_str(text);
        self.writes += 1;
        true
    }

    /// Number of writes that changed the displayed text.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl EditorWidget for Label {
    fn set_view_state(&mut self, state: ViewState) {
        self.state = state;
    }

    fn view_state(&self) -> ViewState {
        self.state
    }
}

/// A bounded integer input with arrow buttons.
///
/// Programmatic pushes outside the bounds are rejected with
/// [`ViewFault::OutOfRange`]; user input is clamped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spinner {
    value: i64,
    min: i64,
    max: i64,
    pattern: String,
    writes: usize,
}

impl Spinner {
    /// Creates a spinner over `min..=max` showing `value` (clamped).
    ///
    /// Swapped bounds are reordered.
    #[must_use]
    pub fn new(min: i64, max: i64, value: i64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            value: value.clamp(min, max),
            min,
            max,
            pattern: "0".to_string(),
            writes: 0,
        }
    }

    /// Returns the displayed value.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Returns the number pattern used for display (for example `"00"`).
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Sets the number pattern. Returns `false` if it was already set.
    pub fn set_pattern(&mut self, pattern: &str) -> bool {
        if self.pattern == pattern {
            return false;
        }
        self.pattern.clear();
        self.pattern.push_str(pattern);
        self.writes += 1;
        true
    }

    /// Displays a value pushed by the property.
    ///
    /// Returns `Ok(false)` if it was already displayed.
    pub fn show(&mut self, value: i64) -> Result<bool, ViewFault> {
        if !(self.min..=self.max).contains(&value) {
            return Err(ViewFault::OutOfRange {
                value,
                min: self.min,
                max: self.max,
            });
        }
        if self.value == value {
            return Ok(false);
        }
        self.value = value;
        self.writes += 1;
        Ok(true)
    }

    /// Simulates the user typing `value`; it is clamped into the bounds.
    pub fn set(&mut self, value: i64) {
        let value = value.clamp(self.min, self.max);
        if self.value != value {
            self.value = value;
            self.writes += 1;
        }
    }

    /// Simulates a click on the up arrow.
    pub fn step_up(&mut self) {
        self.set(self.value.saturating_add(1));
    }

    /// Simulates a click on the down arrow.
    pub fn step_down(&mut self) {
        self.set(self.value.saturating_sub(1));
    }

    /// Renders the value padded with zeros to the pattern's width.
    #[must_use]
    pub fn formatted(&self) -> String {
        let width = self.pattern.chars().filter(|c| *c == '0').count();
        alloc::format!("{:0width$}", self.value)
    }

    /// Number of writes that changed the display.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_skips_identical_writes() {
        let mut label = Label::new("a");
        assert!(!label.show("a"));
        assert!(label.show("b"));
        assert!(!label.show("b"));
        assert_eq!(label.writes(), 1);
        assert_eq!(label.text(), "b");
    }

    #[test]
    fn spinner_rejects_pushes_outside_bounds() {
        let mut spinner = Spinner::new(0, 10, 5);
        assert_eq!(
            spinner.show(11),
            Err(ViewFault::OutOfRange {
                value: 11,
                min: 0,
                max: 10
            })
        );
        assert_eq!(spinner.value(), 5);
        assert_eq!(spinner.show(7), Ok(true));
        assert_eq!(spinner.show(7), Ok(false));
    }

    #[test]
    fn spinner_clamps_user_input() {
        let mut spinner = Spinner::new(-1, 60, 59);
        spinner.step_up();
        spinner.step_up();
        assert_eq!(spinner.value(), 60);
        spinner.set(-5);
        assert_eq!(spinner.value(), -1);
    }

    #[test]
    fn spinner_pads_to_pattern() {
        let mut spinner = Spinner::new(0, 59, 7);
        assert_eq!(spinner.formatted(), "7");
        spinner.set_pattern("00");
        assert_eq!(spinner.formatted(), "07");
    }

    #[test]
    fn swapped_bounds_are_reordered() {
        let spinner = Spinner::new(10, 0, 20);
        assert_eq!((spinner.min(), spinner.max(), spinner.value()), (0, 10, 10));
    }
}
