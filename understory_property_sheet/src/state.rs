// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction state shared by a property and its editors.

/// What interacting with a property's editor does.
///
/// Exactly one mode applies at a time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Editability {
    /// Interacting with an editor changes the value in place.
    #[default]
    Edit,
    /// Interacting with an editor fires the property's action once and leaves
    /// the value untouched.
    Action,
}

bitflags::bitflags! {
    /// Interactive state pushed into every editor of a property.
    ///
    /// Viewers never receive a `ViewState`; they are always read-only.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ViewState: u8 {
        /// The editor accepts input.
        const ENABLED  = 0b0000_0001;
        /// Input edits the value (as opposed to firing an action).
        const EDITABLE = 0b0000_0010;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::ENABLED | Self::EDITABLE
    }
}

impl ViewState {
    /// Computes the state an editor should show for a property.
    #[must_use]
    pub fn for_property(enabled: bool, editability: Editability) -> Self {
        let mut state = Self::empty();
        state.set(Self::ENABLED, enabled);
        state.set(Self::EDITABLE, editability == Editability::Edit);
        state
    }

    /// Returns `true` if the editor accepts input.
    #[must_use]
    #[inline]
    pub fn is_enabled(self) -> bool {
        self.contains(Self::ENABLED)
    }

    /// Returns `true` if input edits the value in place.
    #[must_use]
    #[inline]
    pub fn is_editable(self) -> bool {
        self.contains(Self::EDITABLE)
    }
}
