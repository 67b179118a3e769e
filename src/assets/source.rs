use std::sync::Arc;

use crate::{
    foundation::core::{Rgb, Vec2},
    foundation::error::{HalftoneError, HalftoneResult},
};

/// Immutable RGB raster read by the renderer.
///
/// Cloning is cheap; the pixel storage is shared. Alpha is dropped on construction and the
/// straight (non-premultiplied) color is kept.
#[derive(Clone, Debug)]
pub struct SourceImage {
    width: u32,
    height: u32,
    pixels: Arc<Vec<Rgb>>,
}

impl SourceImage {
    /// Build from row-major pixels. Fails with [`HalftoneError::InvalidInput`] on an empty grid
    /// or a pixel count that does not match `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb>) -> HalftoneResult<Self> {
        let expected = checked_area(width, height)?;
        if pixels.len() != expected {
            return Err(HalftoneError::invalid_input(format!(
                "source image expects {expected} pixels for {width}x{height}, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels: Arc::new(pixels),
        })
    }

    /// Build from tightly packed straight RGBA8 bytes.
    pub fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> HalftoneResult<Self> {
        let expected = checked_area(width, height)?
            .checked_mul(4)
            .ok_or_else(|| HalftoneError::invalid_input("source image size overflow"))?;
        if rgba.len() != expected {
            return Err(HalftoneError::invalid_input(format!(
                "source image expects {expected} rgba8 bytes for {width}x{height}, got {}",
                rgba.len()
            )));
        }
        let pixels = rgba
            .chunks_exact(4)
            .map(|px| Rgb::from_u8(px[0], px[1], px[2]))
            .collect();
        Self::new(width, height, pixels)
    }

    pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> Rgb) -> HalftoneResult<Self> {
        let mut pixels = Vec::with_capacity(checked_area(width, height)?);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self::new(width, height, pixels)
    }

    pub fn solid(width: u32, height: u32, color: Rgb) -> HalftoneResult<Self> {
        Self::new(width, height, vec![color; checked_area(width, height)?])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at integer coordinates, clamped to the edge.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let x = x.min(self.width - 1) as usize;
        let y = y.min(self.height - 1) as usize;
        self.pixels[y * self.width as usize + x]
    }

    /// Bilinear lookup at normalized coordinates; anything outside `[0, 1]²` reads the edge.
    pub fn sample(&self, uv: Vec2) -> Rgb {
        let (x0, x1, tx) = bilinear_axis(uv.x, self.width);
        let (y0, y1, ty) = bilinear_axis(uv.y, self.height);
        let w = self.width as usize;
        let top = self.pixels[y0 * w + x0].mix(self.pixels[y0 * w + x1], tx);
        let bottom = self.pixels[y1 * w + x0].mix(self.pixels[y1 * w + x1], tx);
        top.mix(bottom, ty)
    }
}

fn checked_area(width: u32, height: u32) -> HalftoneResult<usize> {
    if width == 0 || height == 0 {
        return Err(HalftoneError::invalid_input(format!(
            "source image must be non-empty, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| HalftoneError::invalid_input("source image size overflow"))
}

// Texel centers sit at (i + 0.5) / len.
fn bilinear_axis(t: f64, len: u32) -> (usize, usize, f64) {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let max = f64::from(len - 1);
    let pos = (t * f64::from(len) - 0.5).clamp(0.0, max);
    let i0 = pos.floor();
    let i1 = (i0 + 1.0).min(max);
    (i0 as usize, i1 as usize, pos - i0)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;
