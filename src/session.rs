//! Scripted interaction sessions.
//!
//! A session is a JSON array of interactions, each tagged by `kind`:
//!
//! ```json
//! [
//!   { "kind": "mode", "mode": "linear" },
//!   { "kind": "select_stop", "index": 0 },
//!   { "kind": "hue", "hue": 120.0 },
//!   { "kind": "pointer", "surface": "gradient",
//!     "event": { "phase": "pressed", "position": { "x": 0.5, "y": 0.5 } } }
//! ]
//! ```
//!
//! Replaying a session drives a [`PickerCoordinator`] exactly as a host
//! toolkit would and collects every notification it emits.

use std::cell::{Cell, RefCell};
use std::path::Path;
use std::rc::Rc;

use kreate_picker::{
    AlphaSlider, Color, GradientBar, GradientStop, HueSlider, Mode, PickerCoordinator,
    PointerEvent, SaturationValuePlane, Surface,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which picker control a pointer event lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceKind {
    Hue,
    SaturationValue,
    Alpha,
    Gradient,
}

impl SurfaceKind {
    fn dispatch(self, picker: &mut PickerCoordinator, event: &PointerEvent) {
        match self {
            SurfaceKind::Hue => HueSlider.on_event(picker, event),
            SurfaceKind::SaturationValue => SaturationValuePlane.on_event(picker, event),
            SurfaceKind::Alpha => AlphaSlider.on_event(picker, event),
            SurfaceKind::Gradient => GradientBar.on_event(picker, event),
        }
    }
}

/// One step of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Interaction {
    /// Hue slider value in degrees
    Hue { hue: f32 },
    /// Saturation/value plane value
    SatVal { saturation: f32, value: f32 },
    /// Alpha slider value
    Alpha { alpha: i32 },
    /// Text typed into the hex field
    Hex { text: String },
    /// Color pushed from elsewhere in the host
    Color { color: Color },
    /// Mode switch
    Mode { mode: Mode },
    /// Explicit stop selection by storage index
    SelectStop { index: usize },
    /// Add a stop at a position
    AddStop { position: f32 },
    /// Drag the selected stop
    DragStop { position: f32 },
    /// Delete the selected stop
    DeleteStop,
    /// Raw pointer event on one of the controls
    Pointer {
        surface: SurfaceKind,
        event: PointerEvent,
    },
}

/// Something the picker reported during a replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Notification {
    ColorChanged {
        step: usize,
        color: Color,
        hex: String,
    },
    GradientChanged {
        step: usize,
        stops: Vec<GradientStop>,
    },
    /// Hex text the picker refused; state was left unchanged.
    HexRejected {
        step: usize,
        text: String,
        reason: String,
    },
}

/// Errors that can occur when loading a session script.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid session script: {0}")]
    Json(#[from] serde_json::Error),
}

/// A parsed session script.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session {
    pub interactions: Vec<Interaction>,
}

impl Session {
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let json = std::fs::read_to_string(path)?;
        let session = Self::from_json(&json)?;
        log::info!(
            "Loaded session with {} interactions from {:?}",
            session.interactions.len(),
            path
        );
        Ok(session)
    }

    /// Apply every interaction in order and return the notifications emitted.
    pub fn replay(&self, picker: &mut PickerCoordinator) -> Vec<Notification> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let step = Rc::new(Cell::new(0usize));

        let color_id = {
            let log = Rc::clone(&log);
            let step = Rc::clone(&step);
            picker.on_color_changed(move |color, hex| {
                log.borrow_mut().push(Notification::ColorChanged {
                    step: step.get(),
                    color,
                    hex: hex.to_string(),
                });
            })
        };
        let gradient_id = {
            let log = Rc::clone(&log);
            let step = Rc::clone(&step);
            picker.on_gradient_changed(move |stops| {
                log.borrow_mut().push(Notification::GradientChanged {
                    step: step.get(),
                    stops: stops.to_vec(),
                });
            })
        };

        for (index, interaction) in self.interactions.iter().enumerate() {
            step.set(index);
            log::debug!("Step {}: {:?}", index, interaction);
            if let Some(rejected) = apply(picker, index, interaction) {
                log::warn!("Step {}: {:?}", index, rejected);
                log.borrow_mut().push(rejected);
            }
        }

        picker.remove_color_subscriber(color_id);
        picker.remove_gradient_subscriber(gradient_id);
        std::mem::take(&mut *log.borrow_mut())
    }
}

/// Apply one interaction. Returns a notification only for rejected input.
fn apply(
    picker: &mut PickerCoordinator,
    step: usize,
    interaction: &Interaction,
) -> Option<Notification> {
    match interaction {
        Interaction::Hue { hue } => picker.on_hue_input(*hue),
        Interaction::SatVal { saturation, value } => picker.on_sat_val_input(*saturation, *value),
        Interaction::Alpha { alpha } => picker.on_alpha_input(*alpha),
        Interaction::Hex { text } => {
            if let Err(e) = picker.set_hex(text) {
                return Some(Notification::HexRejected {
                    step,
                    text: text.clone(),
                    reason: e.to_string(),
                });
            }
        }
        Interaction::Color { color } => picker.set_color(*color),
        Interaction::Mode { mode } => picker.set_mode(*mode),
        Interaction::SelectStop { index } => picker.on_stop_selected(*index),
        Interaction::AddStop { position } => {
            picker.on_stop_add(*position);
        }
        Interaction::DragStop { position } => {
            picker.on_stop_drag(*position);
        }
        Interaction::DeleteStop => {
            picker.on_delete_selected();
        }
        Interaction::Pointer { surface, event } => surface.dispatch(picker, event),
    }
    None
}
