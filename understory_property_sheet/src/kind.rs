// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The extension point implemented by every property specialization.

use alloc::string::String;

use crate::error::ViewFault;
use crate::state::ViewState;

/// A widget model that can be used as a property editor.
///
/// Editors receive the property's [`ViewState`] whenever it is created or when
/// the enabled flag or editability mode changes.
pub trait EditorWidget {
    /// Applies the interactive state.
    fn set_view_state(&mut self, state: ViewState);

    /// Returns the interactive state last applied.
    fn view_state(&self) -> ViewState;
}

/// Describes one kind of property: its value type, its widget models, and how
/// values move between the two.
///
/// A [`Property<K>`](crate::Property) owns one `K` and calls into it while it
/// synchronizes views. Implementations must not call back into the property
/// from any of these methods.
///
/// # Feedback loops
///
/// `update_editor` is called for every registered editor on every value
/// change, including the editor the change came from. Widget models compare
/// against what they currently display and skip identical writes, so pushing
/// a value into the editor that produced it is a no-op.
pub trait PropertyKind: 'static {
    /// The stored value.
    type Value: Clone + 'static;
    /// The editable widget model.
    type Editor: EditorWidget + 'static;
    /// The read-only widget model.
    type Viewer: 'static;

    /// Brings a proposed value into this kind's domain before it is stored.
    ///
    /// Counters clamp here and choices make sure the value is a candidate.
    /// The default keeps the value unchanged.
    fn normalize(&mut self, value: Self::Value) -> Self::Value {
        value
    }

    /// Constructs a new editor showing `value`.
    fn create_editor(&self, value: &Self::Value) -> Self::Editor;

    /// Constructs a new viewer showing `value`.
    fn create_viewer(&self, value: &Self::Value) -> Self::Viewer;

    /// Pushes `value` into an editor.
    fn update_editor(&self, editor: &mut Self::Editor, value: &Self::Value)
    -> Result<(), ViewFault>;

    /// Pushes `value` into a viewer.
    fn update_viewer(&self, viewer: &mut Self::Viewer, value: &Self::Value)
    -> Result<(), ViewFault>;

    /// Reads the value a user has committed in an editor.
    ///
    /// Returns `None` if the editor holds nothing that can become a value
    /// (for example, a file that the filter rejects).
    fn read_editor(&self, editor: &Self::Editor) -> Option<Self::Value>;

    /// Renders a value as text, as a plain-text viewer would show it.
    fn describe(&self, value: &Self::Value) -> String;
}
