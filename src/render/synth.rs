//! Dot synthesis: turning screen geometry plus sampled coverage into per-pixel ink amounts.

use crate::{
    foundation::core::Vec2,
    foundation::math::smoothstep,
    params::model::RenderMode,
    render::screen::{DotCandidate, SHARP_RADIUS_FACTOR, Screen, ScreenSampler},
};

/// Ink amount per channel, in [`InkChannel::ALL`](crate::InkChannel::ALL) order.
pub type ChannelCoverage = [f64; 4];

pub(crate) const METABALL_EPSILON: f64 = 1e-3;
pub(crate) const METABALL_THRESHOLD: f64 = 1.0;

/// Membership of a point at `dist` from a dot center in a disc of `radius`.
///
/// With `softness == 0` this is a hard step (`dist <= radius`). Otherwise the edge is a
/// smoothstep band of width `softness * radius` centered on the radius. Empty dots never ink,
/// not even at `dist == 0`, so zero coverage always leaves bare paper.
pub(crate) fn disc_value(dist: f64, radius: f64, softness: f64) -> f64 {
    if radius <= 0.0 {
        return 0.0;
    }
    if softness <= 0.0 {
        return if dist <= radius { 1.0 } else { 0.0 };
    }
    let edge = softness * radius * 0.5;
    1.0 - smoothstep(radius - edge, radius + edge, dist)
}

/// Strongest single dot wins, so overlaps never darken twice.
pub(crate) fn dots_coverage(candidates: &[DotCandidate], softness: f64) -> f64 {
    candidates
        .iter()
        .map(|c| disc_value(c.distance, c.radius, softness))
        .fold(0.0, f64::max)
}

/// Summed metaball field `r² / (d² + ε)` thresholded at 1.
pub(crate) fn ink_field(candidates: &[DotCandidate]) -> f64 {
    candidates
        .iter()
        .filter(|c| c.radius > 0.0 && c.distance < c.radius * 2.0)
        .map(|c| (c.radius * c.radius) / (c.distance * c.distance + METABALL_EPSILON))
        .sum()
}

pub(crate) fn ink_coverage(candidates: &[DotCandidate], softness: f64) -> f64 {
    let edge = softness * 0.5 + 0.1;
    smoothstep(
        METABALL_THRESHOLD - edge,
        METABALL_THRESHOLD + edge,
        ink_field(candidates),
    )
}

/// Sharp mode: the pixel's position wrapped into its own (jittered) cell, compared against a
/// single centered dot sized from the pixel's own coverage.
pub(crate) fn sharp_coverage(screen: &Screen, pixel: Vec2, coverage: f64, softness: f64) -> f64 {
    let g = screen.grid_size;
    let p = screen.to_screen(pixel);
    let shifted = p + screen.jitter(screen.cell_of(p));
    let local = Vec2::new(shifted.x.rem_euclid(g), shifted.y.rem_euclid(g));
    let d = local - Vec2::new(g * 0.5, g * 0.5);
    disc_value(d.x.hypot(d.y), coverage * g * SHARP_RADIUS_FACTOR, softness)
}

impl RenderMode {
    /// Coverage of all four inks at an output pixel center.
    pub(crate) fn synthesize(self, sampler: &ScreenSampler<'_>, pixel: Vec2) -> ChannelCoverage {
        let softness = sampler.softness;
        match self {
            RenderMode::Dots => sampler
                .screens
                .map(|s| dots_coverage(&sampler.candidates(&s, pixel), softness)),
            RenderMode::Ink => sampler
                .screens
                .map(|s| ink_coverage(&sampler.candidates(&s, pixel), softness)),
            RenderMode::Sharp => {
                // One lookup at the pixel itself, shared by every channel.
                let cmyk = sampler.cmyk_at(pixel);
                sampler.screens.map(|s| {
                    let coverage = sampler.coverage(cmyk, s.channel);
                    sharp_coverage(&s, pixel, coverage, softness)
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/synth.rs"]
mod tests;
