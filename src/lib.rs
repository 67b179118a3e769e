//! CMYK halftone print-effect renderer.
//!
//! An RGB source image is separated into cyan, magenta, yellow and black, each channel is
//! re-drawn as a rotated screen of dots, and the inks are multiplied over a paper color:
//!
//! - Pick or load a [`HalftoneParams`] (see [`Preset`])
//! - Decode a [`SourceImage`] with [`open_image`] or [`decode_image`]
//! - Call [`render`] to get an RGBA8 [`FrameRGBA`]
#![forbid(unsafe_code)]

mod assets;
mod color;
mod foundation;
mod params;
mod render;

pub use crate::foundation::core::{Canvas, Rgb, Vec2};
pub use crate::foundation::error::{HalftoneError, HalftoneResult};

pub use crate::assets::decode::{DEFAULT_MAX_SIDE, decode_image, fit_within, open_image};
pub use crate::assets::source::SourceImage;
pub use crate::color::cmyk::{Cmyk, apply_contrast, rgb_to_cmyk, separate};
pub use crate::params::model::{
    ChannelCorrection, GrainParams, HalftoneParams, InkChannel, PerChannel, RenderMode,
};
pub use crate::params::presets::Preset;
pub use crate::render::composite::{apply_grain, composite_inks, overlay_blend};
pub use crate::render::correct::correct;
pub use crate::render::frame::{DEFAULT_OUTPUT_NAME, FrameRGBA};
pub use crate::render::pipeline::{RenderThreading, Renderer, render, render_with_threading};
pub use crate::render::synth::ChannelCoverage;
