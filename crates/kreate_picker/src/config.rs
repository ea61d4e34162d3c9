//! Picker configuration.
//!
//! Everything here has a sensible default, so a host can construct a
//! coordinator with `PickerConfig::default()` and only override what it needs.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::gradient::{GradientStop, default_stops};

/// Default hit tolerance for picking a gradient stop, in normalized units.
pub const DEFAULT_HIT_TOLERANCE: f32 = 0.05;

/// How a stop added on empty gradient space gets its initial color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NewStopColor {
    /// Copy the color of the lowest-position stop
    #[default]
    FirstStop,
    /// Sample the gradient at the new stop's position
    Interpolate,
}

/// Construction-time settings for a [`PickerCoordinator`](crate::PickerCoordinator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Color the picker starts with
    #[serde(default)]
    pub initial_color: Color,

    /// Whether a gradient editor is attached at all
    #[serde(default = "default_gradient_enabled")]
    pub gradient_enabled: bool,

    /// Stops a fresh gradient starts with
    #[serde(default = "default_stops")]
    pub default_stops: Vec<GradientStop>,

    /// How close (in normalized units) a press must land to grab a stop
    #[serde(default = "default_hit_tolerance")]
    pub hit_tolerance: f32,

    /// Initial color policy for newly added stops
    #[serde(default)]
    pub new_stop_color: NewStopColor,
}

fn default_gradient_enabled() -> bool {
    true
}

fn default_hit_tolerance() -> f32 {
    DEFAULT_HIT_TOLERANCE
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial_color: Color::default(),
            gradient_enabled: default_gradient_enabled(),
            default_stops: default_stops(),
            hit_tolerance: default_hit_tolerance(),
            new_stop_color: NewStopColor::default(),
        }
    }
}

impl PickerConfig {
    /// Hit tolerance, forced into a usable range.
    pub(crate) fn effective_hit_tolerance(&self) -> f32 {
        if self.hit_tolerance.is_finite() && self.hit_tolerance > 0.0 {
            self.hit_tolerance.min(1.0)
        } else {
            log::warn!(
                "Invalid hit tolerance {}; using {}",
                self.hit_tolerance,
                DEFAULT_HIT_TOLERANCE
            );
            DEFAULT_HIT_TOLERANCE
        }
    }
}
