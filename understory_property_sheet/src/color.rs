// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color properties.
//!
//! The editor is a button that would open the host's color picker; the
//! picker's answer is handed to [`ColorButton::pick`].

use alloc::format;
use alloc::string::String;

use peniko::Color;

use crate::error::ViewFault;
use crate::kind::{EditorWidget, PropertyKind};
use crate::property::Property;
use crate::state::ViewState;

/// Darkening applied to the lower edge of a swatch.
const SHADE_FACTOR: f32 = 0.9;

/// A button showing the current color as its icon.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorButton {
    color: Color,
    state: ViewState,
    writes: usize,
}

impl ColorButton {
    /// Returns the color of the icon.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Simulates the user accepting `color` in the picker.
    pub fn pick(&mut self, color: Color) {
        if self.color != color {
            self.color = color;
            self.writes += 1;
        }
    }

    /// Number of writes that changed the icon.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl EditorWidget for ColorButton {
    fn set_view_state(&mut self, state: ViewState) {
        self.state = state;
    }

    fn view_state(&self) -> ViewState {
        self.state
    }
}

/// A swatch filled with a vertical gradient from a slightly darker shade up to
/// the color.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorSwatch {
    color: Color,
    shade: Color,
}

impl ColorSwatch {
    fn new(color: Color) -> Self {
        Self {
            color,
            shade: shade_of(color),
        }
    }

    /// Returns the color at the top of the swatch.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the darker color at the bottom of the swatch.
    #[must_use]
    pub fn shade(&self) -> Color {
        self.shade
    }
}

fn shade_of(color: Color) -> Color {
    let rgba = color.to_rgba8();
    #[expect(
        clippy::cast_possible_truncation,
        reason = "channels scaled by a factor below one stay within u8"
    )]
    let darken = |c: u8| (f32::from(c) * SHADE_FACTOR) as u8;
    Color::from_rgba8(darken(rgba.r), darken(rgba.g), darken(rgba.b), rgba.a)
}

/// Color kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorKind;

impl PropertyKind for ColorKind {
    type Value = Color;
    type Editor = ColorButton;
    type Viewer = ColorSwatch;

    fn create_editor(&self, value: &Color) -> ColorButton {
        ColorButton {
            color: *value,
            state: ViewState::default(),
            writes: 0,
        }
    }

    fn create_viewer(&self, value: &Color) -> ColorSwatch {
        ColorSwatch::new(*value)
    }

    fn update_editor(&self, editor: &mut ColorButton, value: &Color) -> Result<(), ViewFault> {
        editor.pick(*value);
        Ok(())
    }

    fn update_viewer(&self, viewer: &mut ColorSwatch, value: &Color) -> Result<(), ViewFault> {
        if viewer.color != *value {
            *viewer = ColorSwatch::new(*value);
        }
        Ok(())
    }

    fn read_editor(&self, editor: &ColorButton) -> Option<Color> {
        Some(editor.color)
    }

    fn describe(&self, value: &Color) -> String {
        let rgba = value.to_rgba8();
        format!("#{:02x}{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

/// A color property.
pub type ColorProperty = Property<ColorKind>;

impl Property<ColorKind> {
    /// Creates a color property.
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self::with_kind(name, ColorKind, color)
    }
}

impl Default for Property<ColorKind> {
    /// An unnamed black color property.
    fn default() -> Self {
        Self::new("", Color::BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picking_updates_swatch() {
        let fill = ColorProperty::default();
        let editor = fill.create_editor();
        let viewer = fill.create_viewer();
        assert_eq!(viewer.widget().color(), Color::BLACK);

        let orange = Color::from_rgba8(200, 100, 50, 255);
        editor.edit(|button| button.pick(orange));
        assert_eq!(fill.value(), orange);
        assert_eq!(viewer.widget().color(), orange);
        assert_eq!(viewer.widget().shade(), Color::from_rgba8(180, 90, 45, 255));
        assert_eq!(fill.value_text(), "#c86432ff");
    }
}
