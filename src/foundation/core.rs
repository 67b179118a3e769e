use std::ops::{Add, Mul};

use crate::foundation::error::{HalftoneError, HalftoneResult};

pub use kurbo::Vec2;

/// Straight RGB color with `f64` components, nominally in `[0, 1]`.
///
/// In JSON a color is either a `"#RRGGBB"` string or an `[r, g, b]` float triple. Colors that are
/// exactly representable in 8 bits serialize back as hex strings.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "WireColor", into = "WireColor")]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(v: f64) -> Self {
        Self::new(v, v, v)
    }

    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    /// Parse `#RRGGBB` (the leading `#` is optional, hex digits are case-insensitive).
    pub fn from_hex(s: &str) -> HalftoneResult<Self> {
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(HalftoneError::validation(format!(
                "color '{s}' is not of the form #RRGGBB"
            )));
        }
        let channel = |i: usize| -> HalftoneResult<u8> {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| HalftoneError::validation(format!("color '{s}': {e}")))
        };
        Ok(Self::from_u8(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_u8();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// Quantize to 8 bits per channel, clamping into range first.
    pub fn to_u8(self) -> [u8; 3] {
        [unit_to_u8(self.r), unit_to_u8(self.g), unit_to_u8(self.b)]
    }

    pub fn max_component(self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    pub fn clamp01(self) -> Self {
        self.map(|v| v.clamp(0.0, 1.0))
    }

    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// Linear interpolation, `t = 0` yields `self`.
    pub fn mix(self, other: Rgb, t: f64) -> Self {
        self * (1.0 - t) + other * t
    }

    fn is_8bit_exact(self) -> bool {
        [self.r, self.g, self.b].iter().all(|v| {
            let scaled = v * 255.0;
            (0.0..=255.0).contains(&scaled.round()) && (scaled - scaled.round()).abs() < 1e-9
        })
    }
}

impl Add for Rgb {
    type Output = Rgb;

    fn add(self, rhs: Rgb) -> Rgb {
        Rgb::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Mul for Rgb {
    type Output = Rgb;

    fn mul(self, rhs: Rgb) -> Rgb {
        Rgb::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl Mul<f64> for Rgb {
    type Output = Rgb;

    fn mul(self, rhs: f64) -> Rgb {
        self.map(|v| v * rhs)
    }
}

pub(crate) fn unit_to_u8(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum WireColor {
    Hex(String),
    Triple([f64; 3]),
}

impl TryFrom<WireColor> for Rgb {
    type Error = HalftoneError;

    fn try_from(wire: WireColor) -> Result<Self, Self::Error> {
        match wire {
            WireColor::Hex(s) => Rgb::from_hex(&s),
            WireColor::Triple([r, g, b]) => Ok(Rgb::new(r, g, b)),
        }
    }
}

impl From<Rgb> for WireColor {
    fn from(c: Rgb) -> Self {
        if c.is_8bit_exact() {
            WireColor::Hex(c.to_hex())
        } else {
            WireColor::Triple([c.r, c.g, c.b])
        }
    }
}

/// Output pixel dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> HalftoneResult<Self> {
        if width == 0 || height == 0 {
            return Err(HalftoneError::invalid_input(format!(
                "output size must be non-zero, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(f64::from(self.width), f64::from(self.height))
    }

    /// Byte length of a tightly packed RGBA8 buffer of this size.
    pub fn rgba8_len(self) -> HalftoneResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| HalftoneError::invalid_input("output buffer size overflow"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
