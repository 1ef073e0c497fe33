// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Yes/no properties.

use alloc::string::String;

use crate::error::ViewFault;
use crate::kind::{EditorWidget, PropertyKind};
use crate::property::Property;
use crate::state::ViewState;
use crate::widget::Label;

/// A check box whose tooltip names the current state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckBox {
    checked: bool,
    tooltip: String,
    state: ViewState,
    writes: usize,
}

impl CheckBox {
    /// Returns `true` if the box is checked.
    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Returns the tooltip.
    #[must_use]
    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    /// Simulates a click.
    pub fn toggle(&mut self) {
        self.checked = !self.checked;
        self.writes += 1;
    }

    /// Number of writes that changed the check box.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl EditorWidget for CheckBox {
    fn set_view_state(&mut self, state: ViewState) {
        self.state = state;
    }

    fn view_state(&self) -> ViewState {
        self.state
    }
}

/// A boolean shown as one of two texts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrueFalseKind {
    true_text: String,
    false_text: String,
}

impl TrueFalseKind {
    /// Creates a kind that shows `true_text` or `false_text`.
    #[must_use]
    pub fn new(true_text: impl Into<String>, false_text: impl Into<String>) -> Self {
        Self {
            true_text: true_text.into(),
            false_text: false_text.into(),
        }
    }

    /// Returns the text for `value`.
    #[must_use]
    pub fn text(&self, value: bool) -> &str {
        if value {
            &self.true_text
        } else {
            &self.false_text
        }
    }
}

impl Default for TrueFalseKind {
    fn default() -> Self {
        Self::new("Yes", "No")
    }
}

impl PropertyKind for TrueFalseKind {
    type Value = bool;
    type Editor = CheckBox;
    type Viewer = Label;

    fn create_editor(&self, value: &bool) -> CheckBox {
        CheckBox {
            checked: *value,
            tooltip: String::from(self.text(*value)),
            state: ViewState::default(),
            writes: 0,
        }
    }

    fn create_viewer(&self, value: &bool) -> Label {
        Label::new(self.text(*value))
    }

    fn update_editor(&self, editor: &mut CheckBox, value: &bool) -> Result<(), ViewFault> {
        let tooltip = self.text(*value);
        if editor.checked != *value || editor.tooltip != tooltip {
            editor.checked = *value;
            editor.tooltip.clear();
            editor.tooltip.push_str(tooltip);
            editor.writes += 1;
        }
        Ok(())
    }

    fn update_viewer(&self, viewer: &mut Label, value: &bool) -> Result<(), ViewFault> {
        viewer.show(self.text(*value));
        Ok(())
    }

    fn read_editor(&self, editor: &CheckBox) -> Option<bool> {
        Some(editor.checked)
    }

    fn describe(&self, value: &bool) -> String {
        String::from(self.text(*value))
    }
}

/// A boolean property.
pub type TrueFalseProperty = Property<TrueFalseKind>;

impl Property<TrueFalseKind> {
    /// Creates a boolean property shown as `true_text` / `false_text`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        value: bool,
        true_text: impl Into<String>,
        false_text: impl Into<String>,
    ) -> Self {
        Self::with_kind(name, TrueFalseKind::new(true_text, false_text), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_updates_tooltip_and_viewer() {
        let flag = TrueFalseProperty::new("Wrap", false, "On", "Off");
        let editor = flag.create_editor();
        let viewer = flag.create_viewer();
        assert_eq!(editor.widget().tooltip(), "Off");

        editor.edit(CheckBox::toggle);
        assert!(flag.value());
        assert!(editor.widget().is_checked());
        assert_eq!(editor.widget().tooltip(), "On");
        assert_eq!(viewer.widget().text(), "On");
        assert_eq!(flag.value_text(), "On");
    }
}
