use std::path::Path;

use anyhow::Context;

use crate::{assets::source::SourceImage, foundation::error::HalftoneResult};

/// Longest output side used when the caller does not pick a size.
pub const DEFAULT_MAX_SIDE: u32 = 1200;

/// Decode encoded image bytes (any format the `image` crate recognises) into a [`SourceImage`].
pub fn decode_image(bytes: &[u8]) -> HalftoneResult<SourceImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    SourceImage::from_rgba8(width, height, rgba.as_raw())
}

/// Read and decode an image file.
pub fn open_image(path: &Path) -> HalftoneResult<SourceImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    decode_image(&bytes)
}

/// Shrink `(width, height)` so neither side exceeds `max_side`, keeping the aspect ratio.
///
/// Sizes already within bounds are returned unchanged; nothing is ever enlarged.
pub fn fit_within(width: u32, height: u32, max_side: u32) -> (u32, u32) {
    let max_side = max_side.max(1);
    if width <= max_side && height <= max_side {
        return (width, height);
    }
    let ratio = (f64::from(max_side) / f64::from(width)).min(f64::from(max_side) / f64::from(height));
    let scaled = |v: u32| ((f64::from(v) * ratio).floor() as u32).clamp(1, max_side);
    (scaled(width), scaled(height))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
