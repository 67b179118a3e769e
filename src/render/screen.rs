//! Rotated halftone screens and the 3×3 candidate lookup shared by the Dots and Ink modes.

use crate::{
    assets::source::SourceImage,
    color::cmyk::{Cmyk, separate},
    foundation::core::{Canvas, Vec2},
    foundation::math::{cell_jitter, floor_i64, rotate},
    params::model::{ChannelCorrection, HalftoneParams, InkChannel, PerChannel},
    render::correct::channel_coverage,
};

/// Largest dot radius in the multi-sample modes, as a fraction of the cell size.
/// Above 0.5 neighbouring dots touch and merge at full coverage.
pub(crate) const OVERLAP_RADIUS_FACTOR: f64 = 0.7;

/// Largest dot radius in the single-sample Sharp mode.
pub(crate) const SHARP_RADIUS_FACTOR: f64 = 0.5;

/// One channel's dot grid: rotation, pitch and jitter amplitude.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Screen {
    pub(crate) channel: InkChannel,
    sin: f64,
    cos: f64,
    pub(crate) grid_size: f64,
    jitter_amplitude: f64,
}

impl Screen {
    pub(crate) fn new(channel: InkChannel, grid_size: f64, grid_noise: f64) -> Self {
        let (sin, cos) = channel.screen_angle_rad().sin_cos();
        Self {
            channel,
            sin,
            cos,
            grid_size,
            // Never more than half a cell.
            jitter_amplitude: grid_noise.clamp(0.0, 1.0) * grid_size * 0.5,
        }
    }

    pub(crate) fn to_screen(&self, p: Vec2) -> Vec2 {
        rotate(p, self.sin, self.cos)
    }

    pub(crate) fn to_image(&self, p: Vec2) -> Vec2 {
        rotate(p, -self.sin, self.cos)
    }

    pub(crate) fn cell_of(&self, p_screen: Vec2) -> (i64, i64) {
        (
            floor_i64(p_screen.x / self.grid_size),
            floor_i64(p_screen.y / self.grid_size),
        )
    }

    pub(crate) fn jitter(&self, (ix, iy): (i64, i64)) -> Vec2 {
        if self.jitter_amplitude == 0.0 {
            return Vec2::ZERO;
        }
        cell_jitter(ix, iy) * self.jitter_amplitude
    }

    /// Jittered dot center of a cell, in screen space.
    pub(crate) fn dot_center(&self, cell: (i64, i64)) -> Vec2 {
        let g = self.grid_size;
        Vec2::new((cell.0 as f64 + 0.5) * g, (cell.1 as f64 + 0.5) * g) + self.jitter(cell)
    }
}

/// A neighbouring dot as seen from the pixel being shaded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct DotCandidate {
    pub(crate) distance: f64,
    pub(crate) radius: f64,
}

/// Per-render lookup state: the four screens plus everything needed to turn a source position
/// into a corrected channel coverage.
#[derive(Clone, Debug)]
pub(crate) struct ScreenSampler<'a> {
    source: &'a SourceImage,
    resolution: Vec2,
    contrast: f64,
    corrections: PerChannel<ChannelCorrection>,
    pub(crate) softness: f64,
    pub(crate) screens: [Screen; 4],
}

impl<'a> ScreenSampler<'a> {
    /// `params` must already be clamped.
    pub(crate) fn new(source: &'a SourceImage, canvas: Canvas, params: &HalftoneParams) -> Self {
        let grid_size = params.grid_size();
        Self {
            source,
            resolution: canvas.as_vec2(),
            contrast: params.contrast,
            corrections: params.corrections,
            softness: params.softness,
            screens: InkChannel::ALL.map(|ch| Screen::new(ch, grid_size, params.grid_noise)),
        }
    }

    /// Source color at an output-pixel position, separated and contrast adjusted.
    pub(crate) fn cmyk_at(&self, image_pos: Vec2) -> Cmyk {
        let uv = Vec2::new(
            image_pos.x / self.resolution.x,
            image_pos.y / self.resolution.y,
        );
        separate(self.source.sample(uv), self.contrast)
    }

    pub(crate) fn coverage(&self, cmyk: Cmyk, channel: InkChannel) -> f64 {
        channel_coverage(cmyk, channel, &self.corrections)
    }

    /// The 3×3 dot neighbourhood around `pixel` on `screen`, with each dot sized by the source
    /// coverage sampled at its own (jittered) center.
    pub(crate) fn candidates(&self, screen: &Screen, pixel: Vec2) -> [DotCandidate; 9] {
        let p = screen.to_screen(pixel);
        let (cx, cy) = screen.cell_of(p);
        let max_radius = screen.grid_size * OVERLAP_RADIUS_FACTOR;

        let mut out = [DotCandidate::default(); 9];
        let mut i = 0;
        for dx in -1..=1 {
            for dy in -1..=1 {
                let cell = (cx + dx, cy + dy);
                let center = screen.dot_center(cell);
                let cmyk = self.cmyk_at(screen.to_image(center));
                let coverage = self.coverage(cmyk, screen.channel);
                let d = p - center;
                out[i] = DotCandidate {
                    distance: d.x.hypot(d.y),
                    radius: coverage * max_radius,
                };
                i += 1;
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/screen.rs"]
mod tests;
