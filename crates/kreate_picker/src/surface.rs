//! Interaction surfaces: the four controls of the picker.
//!
//! A surface turns normalized pointer events into coordinator input and, in
//! the other direction, tells a renderer where its cursor belongs for the
//! current picker state. Drawing itself is left to the host.

use crate::coordinator::PickerCoordinator;
use crate::event::{NormalizedPoint, PointerEvent};

/// Common interface of every picker control.
pub trait Surface {
    /// Route a pointer event into the coordinator.
    fn on_event(&mut self, picker: &mut PickerCoordinator, event: &PointerEvent);

    /// Where this control's cursor sits, or `None` if it shows none.
    fn cursor(&self, picker: &PickerCoordinator) -> Option<NormalizedPoint>;
}

/// Horizontal hue slider spanning 0-360 degrees.
#[derive(Debug, Clone, Copy, Default)]
pub struct HueSlider;

impl HueSlider {
    pub fn hue_at(point: NormalizedPoint) -> f32 {
        point.x * 360.0
    }
}

impl Surface for HueSlider {
    fn on_event(&mut self, picker: &mut PickerCoordinator, event: &PointerEvent) {
        if event.is_press_or_move() {
            picker.on_hue_input(Self::hue_at(event.position()));
        }
    }

    fn cursor(&self, picker: &PickerCoordinator) -> Option<NormalizedPoint> {
        Some(NormalizedPoint::on_track(picker.color_state().hue() / 360.0))
    }
}

/// Saturation grows to the right, value grows upwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaturationValuePlane;

impl SaturationValuePlane {
    pub fn saturation_value_at(point: NormalizedPoint) -> (f32, f32) {
        (point.x, 1.0 - point.y)
    }
}

impl Surface for SaturationValuePlane {
    fn on_event(&mut self, picker: &mut PickerCoordinator, event: &PointerEvent) {
        if event.is_press_or_move() {
            let (s, v) = Self::saturation_value_at(event.position());
            picker.on_sat_val_input(s, v);
        }
    }

    fn cursor(&self, picker: &PickerCoordinator) -> Option<NormalizedPoint> {
        let state = picker.color_state();
        Some(NormalizedPoint::new(state.saturation(), 1.0 - state.value()))
    }
}

/// Horizontal alpha slider from transparent (left) to opaque (right).
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphaSlider;

impl AlphaSlider {
    /// Alpha steps are truncated, so only the far right edge reaches 255.
    pub fn alpha_at(point: NormalizedPoint) -> i32 {
        (point.x * 255.0) as i32
    }
}

impl Surface for AlphaSlider {
    fn on_event(&mut self, picker: &mut PickerCoordinator, event: &PointerEvent) {
        if event.is_press_or_move() {
            picker.on_alpha_input(Self::alpha_at(event.position()));
        }
    }

    fn cursor(&self, picker: &PickerCoordinator) -> Option<NormalizedPoint> {
        let alpha = f32::from(picker.color_state().alpha());
        Some(NormalizedPoint::on_track(alpha / 255.0))
    }
}

/// The gradient stop bar.
///
/// A press grabs the first stop within the hit tolerance or adds a new one;
/// moving drags whichever stop is selected.
#[derive(Debug, Clone, Copy, Default)]
pub struct GradientBar;

impl Surface for GradientBar {
    fn on_event(&mut self, picker: &mut PickerCoordinator, event: &PointerEvent) {
        match *event {
            PointerEvent::Pressed { position } => picker.on_gradient_press(position.x),
            PointerEvent::Moved { position } => {
                picker.on_stop_drag(position.x);
            }
            PointerEvent::Released { .. } => {}
        }
    }

    fn cursor(&self, picker: &PickerCoordinator) -> Option<NormalizedPoint> {
        let stop = picker.gradient()?.selected_stop()?;
        Some(NormalizedPoint::on_track(stop.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Mode};

    fn press(x: f32, y: f32) -> PointerEvent {
        PointerEvent::Pressed {
            position: NormalizedPoint::new(x, y),
        }
    }

    fn drag(x: f32, y: f32) -> PointerEvent {
        PointerEvent::Moved {
            position: NormalizedPoint::new(x, y),
        }
    }

    #[test]
    fn test_hue_slider_maps_x_to_degrees() {
        let mut picker = PickerCoordinator::default();
        let mut slider = HueSlider;

        slider.on_event(&mut picker, &press(1.0 / 3.0, 0.5));
        assert!((picker.color_state().hue() - 120.0).abs() < 1e-3);
        assert_eq!(picker.current_solid_color(), Color::GREEN);

        // The right edge is 360 degrees, which is red again.
        slider.on_event(&mut picker, &drag(1.0, 0.5));
        assert_eq!(picker.color_state().hue(), 0.0);
        assert_eq!(slider.cursor(&picker).map(|p| p.x), Some(0.0));
    }

    #[test]
    fn test_plane_maps_value_upwards() {
        let mut picker = PickerCoordinator::default();
        let mut plane = SaturationValuePlane;

        plane.on_event(&mut picker, &press(0.25, 0.0));
        assert_eq!(picker.color_state().saturation(), 0.25);
        assert_eq!(picker.color_state().value(), 1.0);

        plane.on_event(&mut picker, &drag(1.0, 1.0));
        assert_eq!(picker.current_solid_color(), Color::BLACK);
        assert_eq!(plane.cursor(&picker), Some(NormalizedPoint::new(1.0, 1.0)));
    }

    #[test]
    fn test_release_is_ignored_by_sliders() {
        let mut picker = PickerCoordinator::default();
        let mut slider = AlphaSlider;
        slider.on_event(
            &mut picker,
            &PointerEvent::Released {
                position: NormalizedPoint::on_track(0.0),
            },
        );
        assert_eq!(picker.color_state().alpha(), 255);
    }

    #[test]
    fn test_alpha_slider_truncates() {
        let mut picker = PickerCoordinator::default();
        let mut slider = AlphaSlider;

        slider.on_event(&mut picker, &press(0.5, 0.5));
        assert_eq!(picker.color_state().alpha(), 127);
        assert_eq!(picker.alpha_track_color(), Color::RED);

        slider.on_event(&mut picker, &drag(0.0, 0.5));
        assert_eq!(picker.current_solid_color(), Color(0x00FF_0000));
        assert_eq!(slider.cursor(&picker).map(|p| p.x), Some(0.0));
    }

    #[test]
    fn test_gradient_bar_press_then_drag() {
        let mut picker = PickerCoordinator::default();
        picker.set_mode(Mode::Linear);
        let mut bar = GradientBar;

        // Empty space: a new stop is added and selected.
        bar.on_event(&mut picker, &press(0.5, 0.5));
        assert_eq!(picker.gradient().map(|g| g.len()), Some(3));
        assert_eq!(picker.gradient().and_then(|g| g.selected_index()), Some(2));

        bar.on_event(&mut picker, &drag(0.7, 0.5));
        assert_eq!(bar.cursor(&picker).map(|p| p.x), Some(0.7));

        // Near the right end: the magenta stop is grabbed, nothing is added.
        bar.on_event(&mut picker, &press(0.98, 0.5));
        assert_eq!(picker.gradient().map(|g| g.len()), Some(3));
        assert_eq!(picker.gradient().and_then(|g| g.selected_index()), Some(1));
        assert_eq!(picker.current_solid_color(), Color::MAGENTA);
    }

    #[test]
    fn test_gradient_bar_without_gradient_has_no_cursor() {
        let config = crate::PickerConfig {
            gradient_enabled: false,
            ..Default::default()
        };
        let mut picker = PickerCoordinator::new(&config);
        let mut bar = GradientBar;
        bar.on_event(&mut picker, &press(0.5, 0.5));
        assert_eq!(bar.cursor(&picker), None);
    }
}
