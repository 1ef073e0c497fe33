// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded integer properties.

use alloc::string::{String, ToString};

use crate::error::{Error, ViewFault};
use crate::kind::{EditorWidget, PropertyKind};
use crate::property::Property;
use crate::state::ViewState;
use crate::widget::{Label, Spinner};

/// Inclusive bounds and a default for a counter.
///
/// Always satisfies `minimum <= default <= maximum`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CounterBounds {
    minimum: i32,
    default: i32,
    maximum: i32,
}

impl CounterBounds {
    /// Creates bounds, checking `minimum <= default <= maximum`.
    pub const fn new(minimum: i32, default: i32, maximum: i32) -> Result<Self, Error> {
        if minimum <= default && default <= maximum {
            Ok(Self {
                minimum,
                default,
                maximum,
            })
        } else {
            Err(Error::InvalidBounds {
                minimum,
                default,
                maximum,
            })
        }
    }

    /// Bounds from zero to `i32::MAX` around `default`.
    ///
    /// A negative default is raised to zero.
    #[must_use]
    pub const fn from_default(default: i32) -> Self {
        Self {
            minimum: 0,
            default: if default < 0 { 0 } else { default },
            maximum: i32::MAX,
        }
    }

    /// Returns the minimum.
    #[must_use]
    pub const fn minimum(&self) -> i32 {
        self.minimum
    }

    /// Returns the default.
    #[must_use]
    pub const fn default_value(&self) -> i32 {
        self.default
    }

    /// Returns the maximum.
    #[must_use]
    pub const fn maximum(&self) -> i32 {
        self.maximum
    }

    /// Clamps `value` into the bounds.
    #[must_use]
    pub const fn clamp(&self, value: i32) -> i32 {
        if value < self.minimum {
            self.minimum
        } else if value > self.maximum {
            self.maximum
        } else {
            value
        }
    }
}

/// Which control a counter editor shows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CounterStyle {
    /// A spinner with arrow buttons.
    #[default]
    Spinner,
    /// A slider snapping to whole numbers.
    Slider,
}

/// Editor for a counter: a spinner and a slider, one of them visible.
///
/// Both controls always show the same value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterEditor {
    spinner: Spinner,
    slider: Spinner,
    style: CounterStyle,
    touched: CounterStyle,
    state: ViewState,
}

impl CounterEditor {
    /// Returns the visible control.
    #[must_use]
    pub fn style(&self) -> CounterStyle {
        self.style
    }

    /// Switches the visible control.
    pub fn set_style(&mut self, style: CounterStyle) {
        self.style = style;
    }

    /// Returns the spinner model.
    #[must_use]
    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    /// Returns the slider model.
    #[must_use]
    pub fn slider(&self) -> &Spinner {
        &self.slider
    }

    /// Returns the tooltip text: the current value.
    #[must_use]
    pub fn tooltip(&self) -> String {
        self.spinner.value().to_string()
    }

    /// Simulates a click on the spinner's up arrow.
    pub fn step_up(&mut self) {
        self.touched = CounterStyle::Spinner;
        self.spinner.step_up();
    }

    /// Simulates a click on the spinner's down arrow.
    pub fn step_down(&mut self) {
        self.touched = CounterStyle::Spinner;
        self.spinner.step_down();
    }

    /// Simulates typing a number into the spinner.
    pub fn enter(&mut self, value: i64) {
        self.touched = CounterStyle::Spinner;
        self.spinner.set(value);
    }

    /// Simulates dragging the slider to `value`.
    pub fn drag(&mut self, value: i64) {
        self.touched = CounterStyle::Slider;
        self.slider.set(value);
    }

    /// Number of display writes across both controls.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.spinner.writes() + self.slider.writes()
    }
}

impl EditorWidget for CounterEditor {
    fn set_view_state(&mut self, state: ViewState) {
        self.state = state;
    }

    fn view_state(&self) -> ViewState {
        self.state
    }
}

/// An integer clamped into [`CounterBounds`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterKind {
    bounds: CounterBounds,
    style: CounterStyle,
    format: String,
}

impl CounterKind {
    /// A counter over `bounds`, edited with a spinner showing plain numbers.
    #[must_use]
    pub fn new(bounds: CounterBounds) -> Self {
        Self {
            bounds,
            style: CounterStyle::Spinner,
            format: "0".to_string(),
        }
    }

    /// Returns the bounds.
    #[must_use]
    pub fn bounds(&self) -> CounterBounds {
        self.bounds
    }

    /// Returns the control used by new editors.
    #[must_use]
    pub fn style(&self) -> CounterStyle {
        self.style
    }

    /// Returns the number pattern.
    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }
}

impl PropertyKind for CounterKind {
    type Value = i32;
    type Editor = CounterEditor;
    type Viewer = Label;

    fn normalize(&mut self, value: i32) -> i32 {
        let clamped = self.bounds.clamp(value);
        if clamped != value {
            log::debug!("clamped counter value {value} to {clamped}");
        }
        clamped
    }

    fn create_editor(&self, value: &i32) -> CounterEditor {
        let min = i64::from(self.bounds.minimum);
        let max = i64::from(self.bounds.maximum);
        let mut spinner = Spinner::new(min, max, i64::from(*value));
        spinner.set_pattern(&self.format);
        CounterEditor {
            spinner,
            slider: Spinner::new(min, max, i64::from(*value)),
            style: self.style,
            touched: self.style,
            state: ViewState::default(),
        }
    }

    fn create_viewer(&self, value: &i32) -> Label {
        Label::new(value.to_string())
    }

    fn update_editor(&self, editor: &mut CounterEditor, value: &i32) -> Result<(), ViewFault> {
        editor.spinner.set_pattern(&self.format);
        editor.spinner.show(i64::from(*value))?;
        editor.slider.show(i64::from(*value))?;
        Ok(())
    }

    fn update_viewer(&self, viewer: &mut Label, value: &i32) -> Result<(), ViewFault> {
        viewer.show(&value.to_string());
        Ok(())
    }

    fn read_editor(&self, editor: &CounterEditor) -> Option<i32> {
        let control = match editor.touched {
            CounterStyle::Spinner => &editor.spinner,
            CounterStyle::Slider => &editor.slider,
        };
        i32::try_from(control.value()).ok()
    }

    fn describe(&self, value: &i32) -> String {
        value.to_string()
    }
}

/// Configures a [`CounterProperty`].
///
/// ```rust
/// use understory_property_sheet::{CounterProperty, CounterStyle};
///
/// let volume = CounterProperty::builder("Volume")
///     .bounds(0, 5, 10)
///     .style(CounterStyle::Slider)
///     .build()
///     .unwrap();
/// assert_eq!(volume.value(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct CounterBuilder {
    name: String,
    description: String,
    bounds: (i32, i32, i32),
    style: CounterStyle,
    format: Option<String>,
}

impl CounterBuilder {
    /// Starts a counter from zero to `i32::MAX` with default zero.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            bounds: (0, 0, i32::MAX),
            style: CounterStyle::Spinner,
            format: None,
        }
    }

    /// Sets the bounds and the default value.
    #[must_use]
    pub fn bounds(mut self, minimum: i32, default: i32, maximum: i32) -> Self {
        self.bounds = (minimum, default, maximum);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the control used by editors.
    #[must_use]
    pub fn style(mut self, style: CounterStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the number pattern shown by spinners.
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Builds the property, starting at the default value.
    pub fn build(self) -> Result<CounterProperty, Error> {
        let (minimum, default, maximum) = self.bounds;
        let bounds = CounterBounds::new(minimum, default, maximum)?;
        let mut kind = CounterKind::new(bounds);
        kind.style = self.style;
        if let Some(format) = self.format {
            kind.format = format;
        }
        Ok(Property::with_kind(self.name, kind, default).start_described(self.description))
    }
}

/// A bounded integer property.
pub type CounterProperty = Property<CounterKind>;

impl Property<CounterKind> {
    /// Creates a counter over `minimum..=maximum`, starting at `default`.
    pub fn new(
        name: impl Into<String>,
        minimum: i32,
        default: i32,
        maximum: i32,
    ) -> Result<Self, Error> {
        let bounds = CounterBounds::new(minimum, default, maximum)?;
        Ok(Self::with_kind(name, CounterKind::new(bounds), default))
    }

    /// Creates a counter from zero to `i32::MAX`, starting at `default`.
    #[must_use]
    pub fn from_default(name: impl Into<String>, default: i32) -> Self {
        let bounds = CounterBounds::from_default(default);
        Self::with_kind(name, CounterKind::new(bounds), bounds.default_value())
    }

    /// Starts configuring a counter.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> CounterBuilder {
        CounterBuilder::new(name)
    }

    /// Returns the bounds.
    #[must_use]
    pub fn bounds(&self) -> CounterBounds {
        self.with_kind_ref(CounterKind::bounds)
    }

    /// Sets the number pattern and pushes it into every editor.
    ///
    /// This is presentation only: no change event is fired.
    pub fn set_format(&self, format: impl Into<String>) {
        let format = format.into();
        self.update_kind(|kind| kind.format = format);
        self.broadcast_to_editors();
    }

    /// Sets the control used by editors created from now on.
    pub fn set_style(&self, style: CounterStyle) {
        self.update_kind(|kind| kind.style = style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_validated() {
        assert_eq!(
            CounterBounds::new(5, 1, 10),
            Err(Error::InvalidBounds {
                minimum: 5,
                default: 1,
                maximum: 10
            })
        );
        assert!(CounterBounds::new(3, 3, 3).is_ok());
        assert_eq!(CounterBounds::from_default(-4).default_value(), 0);
    }

    #[test]
    fn values_are_clamped() {
        let counter = CounterProperty::new("Count", 0, 5, 10).unwrap();
        let viewer = counter.create_viewer();
        counter.set_value(15);
        assert_eq!(counter.value(), 10);
        assert_eq!(viewer.widget().text(), "10");
        counter.set_value(-3);
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn spinner_and_slider_stay_in_step() {
        let counter = CounterProperty::new("Count", 0, 5, 10).unwrap();
        let editor = counter.create_editor();
        editor.edit(|e| e.drag(8));
        assert_eq!(counter.value(), 8);
        assert_eq!(editor.widget().spinner().value(), 8);

        editor.edit(CounterEditor::step_up);
        assert_eq!(counter.value(), 9);
        assert_eq!(editor.widget().slider().value(), 9);
    }

    #[test]
    fn format_reaches_existing_editors_without_an_event() {
        let counter = CounterProperty::new("Count", 0, 5, 100).unwrap();
        let editor = counter.create_editor();
        counter.set_format("000");
        assert_eq!(editor.widget().spinner().formatted(), "005");
        assert_eq!(counter.revision(), 0);
    }

    #[test]
    fn style_applies_to_new_editors() {
        let counter = CounterProperty::from_default("Count", 1);
        let before = counter.create_editor();
        counter.set_style(CounterStyle::Slider);
        let after = counter.create_editor();
        assert_eq!(before.widget().style(), CounterStyle::Spinner);
        assert_eq!(after.widget().style(), CounterStyle::Slider);
    }
}
