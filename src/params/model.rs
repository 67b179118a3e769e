use std::{path::Path, str::FromStr};

use anyhow::Context as _;

use crate::{
    foundation::core::Rgb,
    foundation::error::{HalftoneError, HalftoneResult},
    params::presets::Preset,
};

/// Dot synthesis strategy.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Overlapping soft- or hard-edged discs; the strongest dot wins.
    #[default]
    Dots,
    /// Metaball field over neighbouring dots, giving merging blobs.
    Ink,
    /// Single sample per pixel against one wrapped cell per channel.
    Sharp,
}

impl RenderMode {
    pub const ALL: [RenderMode; 3] = [RenderMode::Dots, RenderMode::Ink, RenderMode::Sharp];

    pub fn name(self) -> &'static str {
        match self {
            RenderMode::Dots => "dots",
            RenderMode::Ink => "ink",
            RenderMode::Sharp => "sharp",
        }
    }
}

impl FromStr for RenderMode {
    type Err = HalftoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RenderMode::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                HalftoneError::validation(format!(
                    "unknown render mode '{s}' (expected dots, ink or sharp)"
                ))
            })
    }
}

/// One of the four process inks, in compositing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InkChannel {
    Cyan,
    Magenta,
    Yellow,
    Black,
}

impl InkChannel {
    /// Compositing order: later layers multiply the already tinted result.
    pub const ALL: [InkChannel; 4] = [
        InkChannel::Cyan,
        InkChannel::Magenta,
        InkChannel::Yellow,
        InkChannel::Black,
    ];

    pub const BASE_SCREEN_ANGLE_DEG: f64 = 15.0;

    /// Position in [`InkChannel::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Screen angle in degrees: 15° base plus 0°, 30°, 15° and 45° for C, M, Y, K.
    pub fn screen_angle_deg(self) -> f64 {
        let offset = match self {
            InkChannel::Cyan => 0.0,
            InkChannel::Magenta => 30.0,
            InkChannel::Yellow => 15.0,
            InkChannel::Black => 45.0,
        };
        Self::BASE_SCREEN_ANGLE_DEG + offset
    }

    pub fn screen_angle_rad(self) -> f64 {
        self.screen_angle_deg().to_radians()
    }
}

/// A value for each ink channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PerChannel<T> {
    pub cyan: T,
    pub magenta: T,
    pub yellow: T,
    pub black: T,
}

impl<T> PerChannel<T> {
    pub fn get(&self, channel: InkChannel) -> &T {
        match channel {
            InkChannel::Cyan => &self.cyan,
            InkChannel::Magenta => &self.magenta,
            InkChannel::Yellow => &self.yellow,
            InkChannel::Black => &self.black,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PerChannel<U> {
        PerChannel {
            cyan: f(&self.cyan),
            magenta: f(&self.magenta),
            yellow: f(&self.yellow),
            black: f(&self.black),
        }
    }
}

impl<T: Clone> PerChannel<T> {
    pub fn splat(v: T) -> Self {
        Self {
            cyan: v.clone(),
            magenta: v.clone(),
            yellow: v.clone(),
            black: v,
        }
    }
}

/// Linear correction applied to a channel's raw CMYK value.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ChannelCorrection {
    /// Range multiplier around zero, `value * (1 + gain)`; in `[-1, 1]`.
    pub gain: f64,
    /// Constant offset added after the gain; in `[-1, 1]`.
    pub flood: f64,
}

impl ChannelCorrection {
    pub const fn new(gain: f64, flood: f64) -> Self {
        Self { gain, flood }
    }

    pub fn clamped(self) -> Self {
        Self {
            gain: sanitize(self.gain, -1.0, 1.0),
            flood: sanitize(self.flood, -1.0, 1.0),
        }
    }
}

/// Film grain controls.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GrainParams {
    /// Blend toward gray noise, weighted by `mixing * 0.3`; in `[0, 1]`.
    pub mixing: f64,
    /// Overlay-blend brightness modulation; in `[0, 1]`.
    pub overlay: f64,
    /// Grain clump size; the noise lattice pitch is `max(1, size * 5)` pixels.
    pub size: f64,
}

impl GrainParams {
    pub fn is_enabled(&self) -> bool {
        self.mixing > 0.0 || self.overlay > 0.0
    }

    pub fn clamped(self) -> Self {
        Self {
            mixing: sanitize(self.mixing, 0.0, 1.0),
            overlay: sanitize(self.overlay, 0.0, 1.0),
            size: sanitize(self.size, 0.0, HalftoneParams::MAX_GRID_SIZE),
        }
    }
}

/// Complete, immutable parameter set for one render.
///
/// Deserialization fills missing fields from [`Preset::Default`]. Nothing is rejected for being
/// out of range: [`HalftoneParams::clamped`] folds every field back into its documented interval
/// and the renderer always works on the clamped copy.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HalftoneParams {
    /// Base cell size in pixels.
    pub dot_size: f64,
    /// Per-cell jitter magnitude in `[0, 1]`; 1 moves a dot by up to half a cell.
    pub grid_noise: f64,
    pub mode: RenderMode,
    /// Edge feathering in `[0, 1]`.
    pub softness: f64,
    /// Contrast multiplier around mid-gray, `>= 0`.
    pub contrast: f64,
    /// Global multiplier on `dot_size`.
    pub scale: f64,
    pub corrections: PerChannel<ChannelCorrection>,
    pub grain: GrainParams,
    pub inks: PerChannel<Rgb>,
    pub background: Rgb,
}

impl Default for HalftoneParams {
    fn default() -> Self {
        Preset::Default.params()
    }
}

impl HalftoneParams {
    pub const MIN_DOT_SIZE: f64 = 0.01;
    pub const MIN_SCALE: f64 = 0.01;
    /// Ceiling for the cell size and every field without a natural upper bound. Keeps screen
    /// coordinates, jitter and grain lattices finite.
    pub const MAX_GRID_SIZE: f64 = 1e9;

    /// Copy with every field clamped into range; NaN falls back to the lower bound.
    pub fn clamped(&self) -> Self {
        Self {
            dot_size: sanitize(self.dot_size, Self::MIN_DOT_SIZE, Self::MAX_GRID_SIZE),
            grid_noise: sanitize(self.grid_noise, 0.0, 1.0),
            mode: self.mode,
            softness: sanitize(self.softness, 0.0, 1.0),
            contrast: sanitize(self.contrast, 0.0, Self::MAX_GRID_SIZE),
            scale: sanitize(self.scale, Self::MIN_SCALE, Self::MAX_GRID_SIZE),
            corrections: self.corrections.map(|c| c.clamped()),
            grain: self.grain.clamped(),
            inks: self.inks.map(|c| clamp_color(*c)),
            background: clamp_color(self.background),
        }
    }

    /// Edge length of one halftone cell in output pixels, at most [`Self::MAX_GRID_SIZE`].
    pub fn grid_size(&self) -> f64 {
        sanitize(
            self.dot_size * self.scale,
            Self::MIN_DOT_SIZE * Self::MIN_SCALE,
            Self::MAX_GRID_SIZE,
        )
    }

    pub fn from_json_str(s: &str) -> HalftoneResult<Self> {
        serde_json::from_str(s).map_err(|e| HalftoneError::serde(e.to_string()))
    }

    pub fn from_json_file(path: &Path) -> HalftoneResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read params '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> HalftoneResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| HalftoneError::serde(e.to_string()))
    }
}

fn sanitize(v: f64, lo: f64, hi: f64) -> f64 {
    if v.is_nan() { lo } else { v.clamp(lo, hi) }
}

fn clamp_color(c: Rgb) -> Rgb {
    c.map(|v| sanitize(v, 0.0, 1.0))
}

#[cfg(test)]
#[path = "../../tests/unit/params/model.rs"]
mod tests;
