//! The picker's single working color, held as HSV plus alpha.
//!
//! Keeping hue separate from RGB matters: dragging saturation to zero must not
//! lose the hue the user picked on the slider.

use crate::color::Color;

/// Current hue/saturation/value/alpha of the picker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorState {
    hue: f32,
    saturation: f32,
    value: f32,
    alpha: u8,
}

impl ColorState {
    /// Create a state decomposed from a packed color.
    pub fn new(color: Color) -> Self {
        let mut state = Self {
            hue: 0.0,
            saturation: 0.0,
            value: 0.0,
            alpha: 255,
        };
        state.set_from_packed(color);
        state
    }

    /// Hue in degrees, always in `[0, 360)`.
    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Overwrite all four fields from a packed color. Accepts any value.
    pub fn set_from_packed(&mut self, color: Color) {
        let (h, s, v) = color.to_hsv();
        self.hue = normalize_hue(h);
        self.saturation = unit(s);
        self.value = unit(v);
        self.alpha = color.alpha();
    }

    /// Set the hue, clamped to `[0, 360]` with 360 folded onto 0.
    pub fn set_hue(&mut self, hue: f32) {
        self.hue = normalize_hue(hue);
    }

    /// Set saturation and value, each clamped to `[0, 1]`.
    pub fn set_saturation_value(&mut self, saturation: f32, value: f32) {
        self.saturation = unit(saturation);
        self.value = unit(value);
    }

    /// Set alpha, clamped to `[0, 255]`.
    pub fn set_alpha(&mut self, alpha: i32) {
        self.alpha = alpha.clamp(0, 255) as u8;
    }

    /// Recompute the packed ARGB color.
    pub fn to_packed(&self) -> Color {
        Color::from_hsv(self.alpha, self.hue, self.saturation, self.value)
    }

    /// Six uppercase hex digits of the current RGB.
    pub fn to_hex(&self) -> String {
        self.to_packed().to_hex()
    }

    /// The current color at full opacity; the alpha slider fades towards it.
    pub fn opaque_color(&self) -> Color {
        self.to_packed().opaque()
    }

    /// The current hue at full saturation and value; the backdrop of the
    /// saturation/value plane.
    pub fn pure_hue_color(&self) -> Color {
        Color::from_hsv(255, self.hue, 1.0, 1.0)
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new(Color::RED)
    }
}

fn normalize_hue(hue: f32) -> f32 {
    if hue.is_nan() {
        return 0.0;
    }
    let hue = hue.clamp(0.0, 360.0);
    if hue >= 360.0 { 0.0 } else { hue }
}

fn unit(x: f32) -> f32 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_opaque_red() {
        let state = ColorState::default();
        assert_eq!(state.hue(), 0.0);
        assert_eq!(state.saturation(), 1.0);
        assert_eq!(state.value(), 1.0);
        assert_eq!(state.alpha(), 255);
        assert_eq!(state.to_packed(), Color::RED);
    }

    #[test]
    fn test_packed_round_trip_keeps_rgb_and_alpha() {
        let samples = [
            0x0000_0000u32,
            0xFFFF_FFFF,
            0x80FF_0000,
            0x1234_5678,
            0xFE01_02FD,
            0x7F80_8080,
            0x00AB_CDEF,
            0xFFC0_FFEE,
        ];
        let mut state = ColorState::default();
        for argb in samples {
            state.set_from_packed(Color(argb));
            assert_eq!(state.to_packed(), Color(argb), "round trip of {argb:#010X}");
        }
    }

    #[test]
    fn test_setters_clamp() {
        let mut state = ColorState::default();

        state.set_hue(-20.0);
        assert_eq!(state.hue(), 0.0);
        state.set_hue(400.0);
        assert_eq!(state.hue(), 0.0);
        state.set_hue(360.0);
        assert_eq!(state.hue(), 0.0);
        state.set_hue(359.5);
        assert_eq!(state.hue(), 359.5);

        state.set_saturation_value(1.5, -0.25);
        assert_eq!(state.saturation(), 1.0);
        assert_eq!(state.value(), 0.0);

        state.set_alpha(300);
        assert_eq!(state.alpha(), 255);
        state.set_alpha(-4);
        assert_eq!(state.alpha(), 0);
    }

    #[test]
    fn test_nan_inputs_collapse_to_zero() {
        let mut state = ColorState::default();
        state.set_hue(f32::NAN);
        state.set_saturation_value(f32::NAN, f32::NAN);
        assert_eq!(state.hue(), 0.0);
        assert_eq!(state.saturation(), 0.0);
        assert_eq!(state.value(), 0.0);
    }

    #[test]
    fn test_hex_is_always_six_uppercase_digits() {
        let mut state = ColorState::default();
        for hue in [0.0, 45.0, 120.0, 200.5, 300.0, 359.9] {
            for (s, v) in [(0.0, 0.0), (0.3, 0.7), (1.0, 1.0)] {
                for alpha in [0, 128, 255] {
                    state.set_hue(hue);
                    state.set_saturation_value(s, v);
                    state.set_alpha(alpha);
                    let hex = state.to_hex();
                    assert_eq!(hex.len(), 6);
                    assert!(hex.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
                    assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
                }
            }
        }
    }

    #[test]
    fn test_hue_survives_zero_saturation() {
        let mut state = ColorState::default();
        state.set_hue(200.0);
        state.set_saturation_value(0.0, 0.5);
        assert_eq!(state.hue(), 200.0);
        assert_eq!(state.pure_hue_color(), Color::from_hsv(255, 200.0, 1.0, 1.0));
    }

    #[test]
    fn test_opaque_color_ignores_alpha() {
        let mut state = ColorState::new(Color::BLUE);
        state.set_alpha(10);
        assert_eq!(state.to_packed(), Color(0x0A00_00FF));
        assert_eq!(state.opaque_color(), Color::BLUE);
    }
}
