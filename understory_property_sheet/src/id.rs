// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identification types for registered views and observers.
//!
//! Both are small `u32` newtypes handed out in increasing order by the
//! property that owns them. They are unique per property, not globally.

use core::fmt;

/// Identifies an editor or viewer registered with one property.
///
/// # Example
///
/// ```rust
/// use understory_property_sheet::ViewId;
///
/// let id = ViewId::new(3);
/// assert_eq!(id.index(), 3);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewId(u32);

impl ViewId {
    /// Creates a view ID from the given index.
    ///
    /// Properties allocate these when views are created; constructing one by
    /// hand is only useful for lookups.
    #[must_use]
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the underlying index.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ViewId").field(&self.0).finish()
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ViewId({})", self.0)
    }
}

/// Identifies an observer subscribed to a [`ChangeBus`](crate::ChangeBus).
///
/// Returned by `subscribe`, and required to unsubscribe.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObserverId(u32);

impl ObserverId {
    /// Creates an observer ID from the given index.
    #[must_use]
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the underlying index.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObserverId").field(&self.0).finish()
    }
}

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObserverId({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn view_id_basics() {
        let id = ViewId::new(7);
        assert_eq!(id.index(), 7);
        assert_eq!(id, ViewId::new(7));
        assert_ne!(id, ViewId::new(8));
        assert!(ViewId::new(1) < ViewId::new(2));
    }

    #[test]
    fn id_formatting() {
        assert_eq!(format!("{:?}", ViewId::new(1)), "ViewId(1)");
        assert_eq!(format!("{}", ViewId::new(1)), "ViewId(1)");
        assert_eq!(format!("{:?}", ObserverId::new(2)), "ObserverId(2)");
        assert_eq!(format!("{}", ObserverId::new(2)), "ObserverId(2)");
    }

    #[test]
    fn id_size() {
        use core::mem::size_of;
        assert_eq!(size_of::<ViewId>(), 4);
        assert_eq!(size_of::<ObserverId>(), 4);
    }
}
