//! The picker coordinator: one source of truth for every control.
//!
//! Hue slider, saturation/value plane, alpha slider and gradient bar all feed
//! their normalized input into a [`PickerCoordinator`]. It owns the working
//! [`ColorState`] and the optional [`GradientModel`], decides which of them an
//! edit targets based on the active [`Mode`], and notifies subscribers on two
//! channels:
//!
//! - color: `(packed color, 6-digit hex)` after every color-affecting edit
//! - gradient: the position-sorted stop list after every gradient mutation
//!
//! All notifications fire synchronously before the input method returns.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::color_state::ColorState;
use crate::config::{NewStopColor, PickerConfig};
use crate::error::ColorParseError;
use crate::gradient::{GradientModel, GradientStop};
use crate::subscribers::{SubscriptionId, Subscribers};

/// What the color controls currently edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Edits go to the solid color
    #[default]
    Solid,
    /// Edits go to the selected stop of a linear gradient
    Linear,
    /// Edits go to the selected stop of a radial gradient
    Radial,
}

impl Mode {
    /// Linear and radial share stop-editing semantics; only rendering differs.
    pub fn is_gradient(self) -> bool {
        matches!(self, Mode::Linear | Mode::Radial)
    }

    /// Get the display name for this mode.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Solid => "Solid",
            Mode::Linear => "Linear",
            Mode::Radial => "Radial",
        }
    }
}

/// Payload of the color channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorChange {
    pub color: Color,
    pub hex: String,
}

impl ColorChange {
    fn new(color: Color) -> Self {
        Self {
            color,
            hex: color.to_hex(),
        }
    }
}

/// Ties the color state, the gradient and the active mode together.
#[derive(Debug)]
pub struct PickerCoordinator {
    mode: Mode,
    state: ColorState,
    gradient: Option<GradientModel>,
    hit_tolerance: f32,
    new_stop_color: NewStopColor,
    color_subscribers: Subscribers<ColorChange>,
    gradient_subscribers: Subscribers<[GradientStop]>,
}

impl PickerCoordinator {
    /// Create a coordinator in solid mode.
    pub fn new(config: &PickerConfig) -> Self {
        let gradient = config
            .gradient_enabled
            .then(|| GradientModel::from_stops(&config.default_stops));

        log::debug!(
            "Creating picker: initial color {}, gradient {}",
            config.initial_color,
            if gradient.is_some() { "enabled" } else { "disabled" }
        );

        Self {
            mode: Mode::Solid,
            state: ColorState::new(config.initial_color),
            gradient,
            hit_tolerance: config.effective_hit_tolerance(),
            new_stop_color: config.new_stop_color,
            color_subscribers: Subscribers::new(),
            gradient_subscribers: Subscribers::new(),
        }
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Subscribe to `(color, hex)` notifications.
    pub fn on_color_changed<F>(&mut self, mut f: F) -> SubscriptionId
    where
        F: FnMut(Color, &str) + 'static,
    {
        self.color_subscribers
            .subscribe(move |change: &ColorChange| f(change.color, &change.hex))
    }

    /// Subscribe to sorted stop-list notifications.
    pub fn on_gradient_changed<F>(&mut self, f: F) -> SubscriptionId
    where
        F: FnMut(&[GradientStop]) + 'static,
    {
        self.gradient_subscribers.subscribe(f)
    }

    pub fn remove_color_subscriber(&mut self, id: SubscriptionId) -> bool {
        self.color_subscribers.unsubscribe(id)
    }

    pub fn remove_gradient_subscriber(&mut self, id: SubscriptionId) -> bool {
        self.gradient_subscribers.unsubscribe(id)
    }

    // =========================================================================
    // Read access
    // =========================================================================

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn color_state(&self) -> &ColorState {
        &self.state
    }

    /// The gradient editor's model, if one is attached.
    pub fn gradient(&self) -> Option<&GradientModel> {
        self.gradient.as_ref()
    }

    /// Position-sorted stops, or an empty list without a gradient.
    pub fn gradient_stops(&self) -> Vec<GradientStop> {
        self.gradient
            .as_ref()
            .map(GradientModel::sorted_view)
            .unwrap_or_default()
    }

    /// The working color, whatever the mode.
    pub fn current_solid_color(&self) -> Color {
        self.state.to_packed()
    }

    pub fn hex(&self) -> String {
        self.state.to_hex()
    }

    /// Opaque version of the working color, for the alpha slider's track.
    pub fn alpha_track_color(&self) -> Color {
        self.state.opaque_color()
    }

    pub fn hit_tolerance(&self) -> f32 {
        self.hit_tolerance
    }

    // =========================================================================
    // Color inputs
    // =========================================================================

    /// Hue slider input, in degrees.
    pub fn on_hue_input(&mut self, hue: f32) {
        self.state.set_hue(hue);
        log::trace!("Hue input {:.1}", self.state.hue());
        self.solid_update();
    }

    /// Saturation/value plane input.
    pub fn on_sat_val_input(&mut self, saturation: f32, value: f32) {
        self.state.set_saturation_value(saturation, value);
        log::trace!(
            "Saturation/value input {:.3}/{:.3}",
            self.state.saturation(),
            self.state.value()
        );
        self.solid_update();
    }

    /// Alpha slider input, 0-255.
    pub fn on_alpha_input(&mut self, alpha: i32) {
        self.state.set_alpha(alpha);
        log::trace!("Alpha input {}", self.state.alpha());
        self.solid_update();
    }

    /// Set the color from an external source such as a hex field.
    ///
    /// In solid mode this notifies color subscribers. In linear mode the
    /// color goes into the selected stop and gradient subscribers are notified.
    /// In radial mode only the working color changes and nothing is emitted.
    pub fn set_color(&mut self, color: Color) {
        log::debug!("Setting color {} in {} mode", color, self.mode.name());
        self.state.set_from_packed(color);

        match self.mode {
            Mode::Solid => self.emit_color(color),
            Mode::Linear => {
                if self.push_to_selected_stop(color) {
                    self.emit_gradient();
                }
            }
            Mode::Radial => {}
        }
    }

    /// Parse typed hex text and apply it like [`set_color`](Self::set_color).
    ///
    /// Malformed text leaves every piece of state untouched.
    pub fn set_hex(&mut self, text: &str) -> Result<(), ColorParseError> {
        let color = text.parse::<Color>().inspect_err(|e| {
            log::debug!("Ignoring hex input '{}': {}", text, e);
        })?;
        self.set_color(color);
        Ok(())
    }

    // =========================================================================
    // Mode
    // =========================================================================

    /// Switch what the color controls edit.
    pub fn set_mode(&mut self, mode: Mode) {
        log::debug!("Picker mode {} -> {}", self.mode.name(), mode.name());
        self.mode = mode;

        if mode.is_gradient() {
            let selected = self.gradient.as_ref().and_then(GradientModel::selected_color);
            if let Some(color) = selected {
                self.state.set_from_packed(color);
                self.emit_color(color);
            }
        } else {
            self.set_color(self.current_solid_color());
        }
    }

    // =========================================================================
    // Gradient inputs
    // =========================================================================

    /// Select a stop by storage index and load its color into the controls.
    pub fn on_stop_selected(&mut self, index: usize) {
        let Some(stop) = self.gradient.as_mut().and_then(|g| g.select(index)) else {
            log::debug!("Ignoring selection of missing stop {}", index);
            return;
        };
        self.load_color(stop.color);
    }

    /// Add a stop on empty gradient space. Returns its storage index.
    pub fn on_stop_add(&mut self, position: f32) -> Option<usize> {
        let gradient = self.gradient.as_mut()?;
        let color = match self.new_stop_color {
            NewStopColor::FirstStop => gradient.first_color(),
            NewStopColor::Interpolate => gradient.sample(position),
        };
        let index = gradient.add_stop(position, color);

        self.load_color(color);
        self.emit_gradient();
        Some(index)
    }

    /// Drag the selected stop. Returns whether anything moved.
    pub fn on_stop_drag(&mut self, position: f32) -> bool {
        let moved = self
            .gradient
            .as_mut()
            .is_some_and(|g| g.move_selected(position));
        if moved {
            self.emit_gradient();
        }
        moved
    }

    /// Delete the selected stop. Only acts in gradient modes and never goes
    /// below two stops. Returns whether a stop was removed.
    pub fn on_delete_selected(&mut self) -> bool {
        if !self.mode.is_gradient() {
            return false;
        }
        let Some(gradient) = self.gradient.as_mut() else {
            return false;
        };
        if !gradient.remove_selected() {
            return false;
        }

        if let Some(color) = gradient.selected_color() {
            self.load_color(color);
        }
        self.emit_gradient();
        true
    }

    /// Pointer-down on the gradient bar: grab the first stop within the hit
    /// tolerance, or add a new stop there.
    pub fn on_gradient_press(&mut self, position: f32) {
        let tolerance = self.hit_tolerance;
        let Some(gradient) = self.gradient.as_mut() else {
            return;
        };

        match gradient.select_nearest(position, tolerance) {
            Some(index) => {
                log::debug!("Press at {:.3} grabbed stop {}", position, index);
                if let Some(color) = gradient.selected_color() {
                    self.load_color(color);
                }
            }
            None => {
                self.on_stop_add(position);
            }
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Shared tail of every slider/plane input.
    fn solid_update(&mut self) {
        let color = self.state.to_packed();
        if self.mode.is_gradient() && self.push_to_selected_stop(color) {
            self.emit_gradient();
        }
        self.emit_color(color);
    }

    /// Load a stop color into the controls and announce it, without
    /// touching the gradient.
    fn load_color(&mut self, color: Color) {
        self.state.set_from_packed(color);
        self.emit_color(color);
    }

    fn push_to_selected_stop(&mut self, color: Color) -> bool {
        self.gradient
            .as_mut()
            .is_some_and(|g| g.set_selected_color(color))
    }

    fn emit_color(&mut self, color: Color) {
        self.color_subscribers.emit(&ColorChange::new(color));
    }

    fn emit_gradient(&mut self) {
        let Some(gradient) = self.gradient.as_ref() else {
            return;
        };
        let stops = gradient.sorted_view();
        self.gradient_subscribers.emit(&stops);
    }
}

impl Default for PickerCoordinator {
    fn default() -> Self {
        Self::new(&PickerConfig::default())
    }
}
