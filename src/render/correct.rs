use crate::{
    color::cmyk::Cmyk,
    params::model::{ChannelCorrection, InkChannel, PerChannel},
};

/// `clamp(value * (1 + gain) + flood, 0, 1)`.
///
/// Gain stretches the channel's range away from zero, flood shifts the whole channel. Both are
/// expected to be clamped to `[-1, 1]` already; the result is always inside `[0, 1]`.
pub fn correct(value: f64, correction: ChannelCorrection) -> f64 {
    let v = value * (1.0 + correction.gain) + correction.flood;
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

pub(crate) fn channel_coverage(
    cmyk: Cmyk,
    channel: InkChannel,
    corrections: &PerChannel<ChannelCorrection>,
) -> f64 {
    correct(cmyk.channel(channel), *corrections.get(channel))
}

#[cfg(test)]
#[path = "../../tests/unit/render/correct.rs"]
mod tests;
