// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.
//!
//! Configuration problems are reported through [`Error`] when a property is
//! built. Problems pushing a value into one widget are reported as a
//! [`ViewFault`], which the synchronization layer logs and recovers from by
//! skipping that widget.

/// A property could not be constructed from the given configuration.
///
/// All variants are configuration errors: they are raised at construction time
/// and never while values are being synchronized.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A choice property has no candidates and no fallback value to select.
    #[error("choice property needs at least one candidate or a fallback value")]
    EmptyChoices,
    /// Counter bounds do not satisfy `minimum <= default <= maximum`.
    #[error(
        "counter bounds must satisfy minimum <= default <= maximum (got {minimum}, {default}, {maximum})"
    )]
    InvalidBounds {
        /// The requested minimum.
        minimum: i32,
        /// The requested default.
        default: i32,
        /// The requested maximum.
        maximum: i32,
    },
    /// A limited text property was given a limit of zero characters.
    #[error("character limit must be at least 1")]
    ZeroCharacterLimit,
}

/// A widget model refused a push from its property.
///
/// Faults are local to one widget: the property skips it and keeps the other
/// views synchronized.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ViewFault {
    /// The widget is already borrowed, typically because the caller is holding
    /// a reference to it while the property is being updated.
    #[error("widget is busy")]
    Busy,
    /// The value does not fit the widget's numeric range.
    #[error("value {value} is outside the widget range {min}..={max}")]
    OutOfRange {
        /// The rejected value.
        value: i64,
        /// Lowest value the widget accepts.
        min: i64,
        /// Highest value the widget accepts.
        max: i64,
    },
}

/// A total number of seconds does not fit into a [`Time`](crate::Time).
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{total_seconds} seconds exceeds the largest representable time")]
pub struct TimeOverflow {
    /// The rejected total.
    pub total_seconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn error_messages() {
        let err = Error::InvalidBounds {
            minimum: 5,
            default: 1,
            maximum: 10,
        };
        assert_eq!(
            err.to_string(),
            "counter bounds must satisfy minimum <= default <= maximum (got 5, 1, 10)"
        );
        assert_eq!(
            ViewFault::OutOfRange {
                value: 11,
                min: 0,
                max: 10
            }
            .to_string(),
            "value 11 is outside the widget range 0..=10"
        );
    }

    #[test]
    fn time_overflow_message() {
        let err = TimeOverflow { total_seconds: 42 };
        assert!(err.to_string().starts_with("42 seconds"));
    }
}
