//! RGB to CMYK separation.
//!
//! The separation is the naive "device" one used by print simulators: black is pulled out
//! first as `1 - max(r, g, b)` and the chromatic inks cover what remains. There is no ICC
//! profile or dot-gain model involved.

use crate::foundation::core::Rgb;
use crate::params::model::InkChannel;

/// Ink amounts in `[0, 1]` for the four process channels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Cmyk {
    pub const PURE_BLACK: Cmyk = Cmyk {
        c: 0.0,
        m: 0.0,
        y: 0.0,
        k: 1.0,
    };

    pub fn channel(self, channel: InkChannel) -> f64 {
        match channel {
            InkChannel::Cyan => self.c,
            InkChannel::Magenta => self.m,
            InkChannel::Yellow => self.y,
            InkChannel::Black => self.k,
        }
    }

    /// Inverse separation: `r = (1 - c)(1 - k)` and so on.
    pub fn to_rgb(self) -> Rgb {
        let white = 1.0 - self.k;
        Rgb::new(
            (1.0 - self.c) * white,
            (1.0 - self.m) * white,
            (1.0 - self.y) * white,
        )
    }
}

/// Scale around mid-gray and clamp back into `[0, 1]`.
pub fn apply_contrast(rgb: Rgb, contrast: f64) -> Rgb {
    rgb.map(|v| ((v - 0.5) * contrast + 0.5).clamp(0.0, 1.0))
}

/// Separate an RGB color (components expected in `[0, 1]`) into CMYK.
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let k = 1.0 - rgb.max_component();
    // Also guards the 0/0 below.
    if k >= 1.0 {
        return Cmyk::PURE_BLACK;
    }
    let white = 1.0 - k;
    Cmyk {
        c: (1.0 - rgb.r - k) / white,
        m: (1.0 - rgb.g - k) / white,
        y: (1.0 - rgb.b - k) / white,
        k,
    }
}

/// Contrast adjustment followed by separation, the way every source sample is treated.
pub fn separate(rgb: Rgb, contrast: f64) -> Cmyk {
    rgb_to_cmyk(apply_contrast(rgb, contrast))
}

#[cfg(test)]
#[path = "../../tests/unit/color/cmyk.rs"]
mod tests;
