//! Packed ARGB colors and HSV conversion.
//!
//! Every color that crosses the picker boundary is a [`Color`]: a single
//! `0xAARRGGBB` integer. HSV decomposition lives here as free functions so
//! the conversion can be tested without a [`ColorState`](crate::ColorState).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;

/// A packed 32-bit color laid out as `0xAARRGGBB`.
///
/// Serialized as a `#AARRGGBB` string so config and session files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const RED: Color = Color(0xFFFF_0000);
    pub const GREEN: Color = Color(0xFF00_FF00);
    pub const BLUE: Color = Color(0xFF00_00FF);
    pub const MAGENTA: Color = Color(0xFFFF_00FF);

    /// Pack individual channels.
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Pack an opaque color.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// Build a color from hue (degrees), saturation, value and alpha.
    pub fn from_hsv(alpha: u8, h: f32, s: f32, v: f32) -> Self {
        let (r, g, b) = hsv_to_rgb(h, s, v);
        Self::from_argb(alpha, unit_to_channel(r), unit_to_channel(g), unit_to_channel(b))
    }

    /// The raw packed value.
    pub const fn argb(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// The same RGB with a different alpha.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | ((alpha as u32) << 24))
    }

    /// The same RGB, fully opaque.
    pub const fn opaque(self) -> Self {
        self.with_alpha(255)
    }

    /// Decompose into `(hue, saturation, value)`; alpha is ignored.
    pub fn to_hsv(self) -> (f32, f32, f32) {
        rgb_to_hsv(
            f32::from(self.red()) / 255.0,
            f32::from(self.green()) / 255.0,
            f32::from(self.blue()) / 255.0,
        )
    }

    /// Six uppercase hex digits of the RGB channels. Alpha is not included.
    pub fn to_hex(self) -> String {
        format!("{:06X}", self.0 & 0x00FF_FFFF)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::RED
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parse `RRGGBB` (opaque) or `AARRGGBB`, with an optional leading `#`.
    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(digits.to_string()));
        }

        let value = match digits.len() {
            6 | 8 => u32::from_str_radix(digits, 16)
                .map_err(|_| ColorParseError::InvalidDigit(digits.to_string()))?,
            n => return Err(ColorParseError::InvalidLength(n)),
        };

        if digits.len() == 6 {
            Ok(Self(0xFF00_0000 | value))
        } else {
            Ok(Self(value))
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}

fn unit_to_channel(x: f32) -> u8 {
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert HSV to RGB.
///
/// # Arguments
/// * `h` - Hue in degrees (0-360, 360 wraps to 0)
/// * `s` - Saturation (0.0-1.0)
/// * `v` - Value/brightness (0.0-1.0)
///
/// # Returns
/// RGB tuple with values in range 0.0-1.0
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let h = h.rem_euclid(360.0);
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (r + m, g + m, b + m)
}

/// Convert RGB (each 0.0-1.0) to `(hue in [0, 360), saturation, value)`.
///
/// Grays have no defined hue; they report hue 0 and saturation 0.
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if max <= 0.0 {
        return (0.0, 0.0, 0.0);
    }
    if delta <= 0.0 {
        return (0.0, 0.0, max);
    }

    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    let hue = sector * 60.0;
    let hue = if hue >= 360.0 { 0.0 } else { hue };
    (hue, delta / max, max)
}
