//! kreate_picker - the model behind an embeddable color picker
//!
//! This crate holds everything a color picker needs except pixels: a working
//! HSV color, an editable multi-stop gradient, and a coordinator that keeps
//! the saturation/value plane, hue slider, alpha slider and gradient bar in
//! sync. Hosts feed it normalized pointer input and subscribe to color and
//! gradient notifications.

mod color;
mod color_state;
mod config;
mod coordinator;
mod error;
mod event;
mod gradient;
mod subscribers;
mod surface;

pub use color::{Color, hsv_to_rgb, rgb_to_hsv};
pub use color_state::ColorState;
pub use config::{DEFAULT_HIT_TOLERANCE, NewStopColor, PickerConfig};
pub use coordinator::{ColorChange, Mode, PickerCoordinator};
pub use error::ColorParseError;
pub use event::{NormalizedPoint, PointerEvent};
pub use gradient::{GradientModel, GradientStop, MIN_STOPS, default_stops};
pub use subscribers::{SubscriptionId, Subscribers};
pub use surface::{AlphaSlider, GradientBar, HueSlider, SaturationValuePlane, Surface};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::config::PickerConfig;
    pub use crate::coordinator::{Mode, PickerCoordinator};
    pub use crate::event::{NormalizedPoint, PointerEvent};
    pub use crate::gradient::GradientStop;
    pub use crate::surface::{AlphaSlider, GradientBar, HueSlider, SaturationValuePlane, Surface};
}

#[cfg(test)]
mod tests;
