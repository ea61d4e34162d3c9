//! Pointer events in normalized surface coordinates.
//!
//! The host toolkit divides pixel coordinates by the control's size before
//! handing events to a [`Surface`](crate::Surface), so nothing in this crate
//! knows about pixels or screen density.

use serde::{Deserialize, Serialize};

/// A point inside a control, each axis in `[0, 1]`.
///
/// `x` runs left to right, `y` top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f32,
    pub y: f32,
}

impl NormalizedPoint {
    /// Create a point, clamping both axes to `[0, 1]`. NaN becomes 0.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: unit(x),
            y: unit(y),
        }
    }

    /// A point on a horizontal slider; `y` is irrelevant and set to the middle.
    pub fn on_track(x: f32) -> Self {
        Self::new(x, 0.5)
    }

    /// Normalize a pixel position against a control's size.
    ///
    /// Zero-sized controls map everything to the origin.
    pub fn from_pixels(px: f32, py: f32, width: f32, height: f32) -> Self {
        let x = if width > 0.0 { px / width } else { 0.0 };
        let y = if height > 0.0 { py / height } else { 0.0 };
        Self::new(x, y)
    }
}

fn unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Pointer events a surface responds to.
///
/// Touch and mouse both collapse into press/move/release; a drag is simply a
/// stream of `Moved` events between a press and a release.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum PointerEvent {
    /// Pointer went down.
    Pressed { position: NormalizedPoint },
    /// Pointer moved while down.
    Moved { position: NormalizedPoint },
    /// Pointer went up.
    Released { position: NormalizedPoint },
}

impl PointerEvent {
    pub fn position(&self) -> NormalizedPoint {
        match *self {
            PointerEvent::Pressed { position }
            | PointerEvent::Moved { position }
            | PointerEvent::Released { position } => position,
        }
    }

    /// Press and move both carry a new value for continuous controls.
    pub fn is_press_or_move(&self) -> bool {
        matches!(self, PointerEvent::Pressed { .. } | PointerEvent::Moved { .. })
    }
}
