use crate::{
    foundation::core::{Rgb, Vec2},
    foundation::math::{grain_noise, mix},
    params::model::{GrainParams, InkChannel, PerChannel},
    render::synth::ChannelCoverage,
};

/// Maximum share of the gray noise color in grain mixing.
pub(crate) const GRAIN_MIXING_WEIGHT: f64 = 0.3;

/// Pixels per unit of `GrainParams::size`.
pub(crate) const GRAIN_SIZE_FACTOR: f64 = 5.0;

/// Multiply each ink over the background in C, M, Y, K order, weighted by its coverage.
pub fn composite_inks(coverage: &ChannelCoverage, inks: &PerChannel<Rgb>, background: Rgb) -> Rgb {
    InkChannel::ALL
        .iter()
        .fold(background, |color, &channel| {
            color.mix(color * *inks.get(channel), coverage[channel.index()])
        })
}

/// Photographic overlay of `blend` onto `base`, both in `[0, 1]`.
pub fn overlay_blend(base: f64, blend: f64) -> f64 {
    if base > 0.5 {
        1.0 - 2.0 * (1.0 - base) * (1.0 - blend)
    } else {
        2.0 * base * blend
    }
}

/// Film grain: overlay modulation of brightness, then a capped pull toward gray noise.
///
/// Returns `color` untouched when both grain amounts are zero.
pub fn apply_grain(color: Rgb, pixel: Vec2, grain: &GrainParams) -> Rgb {
    if !grain.is_enabled() {
        return color;
    }
    let pitch = (grain.size * GRAIN_SIZE_FACTOR).max(1.0);
    let noise = grain_noise(pixel / pitch);

    let mut out = color;
    if grain.overlay > 0.0 {
        let lift = 0.5 + overlay_blend(noise, 0.5);
        out = out.map(|v| mix(v, v * lift, grain.overlay));
    }
    if grain.mixing > 0.0 {
        out = out.mix(Rgb::gray(noise), grain.mixing * GRAIN_MIXING_WEIGHT);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
