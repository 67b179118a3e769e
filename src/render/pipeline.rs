use rayon::prelude::*;

use crate::{
    assets::source::SourceImage,
    foundation::core::{Canvas, Rgb, Vec2, unit_to_u8},
    foundation::error::{HalftoneError, HalftoneResult},
    params::model::HalftoneParams,
    render::composite::{apply_grain, composite_inks},
    render::frame::FrameRGBA,
    render::screen::ScreenSampler,
    render::synth::ChannelCoverage,
};

/// Threading controls for a single render.
#[derive(Clone, Debug)]
pub struct RenderThreading {
    /// Split rows across rayon workers when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count. `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
        }
    }
}

/// Per-render state: the clamped parameter set and the four channel screens.
///
/// Every pixel is a pure function of the source, the canvas and the parameters, so any
/// subset of pixels can be evaluated independently.
#[derive(Clone, Debug)]
pub struct Renderer<'a> {
    canvas: Canvas,
    params: HalftoneParams,
    sampler: ScreenSampler<'a>,
}

impl<'a> Renderer<'a> {
    pub fn new(
        source: &'a SourceImage,
        width: u32,
        height: u32,
        params: &HalftoneParams,
    ) -> HalftoneResult<Self> {
        let canvas = Canvas::new(width, height)?;
        let params = params.clamped();
        let sampler = ScreenSampler::new(source, canvas, &params);
        Ok(Self {
            canvas,
            params,
            sampler,
        })
    }

    /// The clamped parameters this renderer uses.
    pub fn params(&self) -> &HalftoneParams {
        &self.params
    }

    /// Ink coverage in C, M, Y, K order at output pixel `(x, y)`.
    pub fn coverage_at(&self, x: u32, y: u32) -> ChannelCoverage {
        self.params
            .mode
            .synthesize(&self.sampler, pixel_center(x, y))
    }

    /// Final color at output pixel `(x, y)`, before quantization.
    pub fn color_at(&self, x: u32, y: u32) -> Rgb {
        let pixel = pixel_center(x, y);
        let coverage = self.params.mode.synthesize(&self.sampler, pixel);
        let color = composite_inks(&coverage, &self.params.inks, self.params.background);
        apply_grain(color, pixel, &self.params.grain).clamp01()
    }

    /// Render the full canvas.
    pub fn render(&self, threading: &RenderThreading) -> HalftoneResult<FrameRGBA> {
        if let Some(n) = threading.threads
            && n == 0
        {
            return Err(HalftoneError::validation(
                "render threading 'threads' must be >= 1 when set",
            ));
        }

        let Canvas { width, height } = self.canvas;
        let mut data = vec![0u8; self.canvas.rgba8_len()?];
        let stride = width as usize * 4;

        if threading.parallel {
            let fill = |data: &mut [u8]| {
                data.par_chunks_mut(stride)
                    .enumerate()
                    .for_each(|(y, row)| self.fill_row(y as u32, row));
            };
            match threading.threads {
                Some(n) => build_thread_pool(n)?.install(|| fill(&mut data)),
                None => fill(&mut data),
            }
        } else {
            data.chunks_mut(stride)
                .enumerate()
                .for_each(|(y, row)| self.fill_row(y as u32, row));
        }

        Ok(FrameRGBA {
            width,
            height,
            data,
        })
    }

    fn fill_row(&self, y: u32, row: &mut [u8]) {
        for (x, px) in row.chunks_exact_mut(4).enumerate() {
            let c = self.color_at(x as u32, y);
            px[0] = unit_to_u8(c.r);
            px[1] = unit_to_u8(c.g);
            px[2] = unit_to_u8(c.b);
            px[3] = 255;
        }
    }
}

/// Render `source` as a `width × height` halftone with default threading.
pub fn render(
    source: &SourceImage,
    width: u32,
    height: u32,
    params: &HalftoneParams,
) -> HalftoneResult<FrameRGBA> {
    render_with_threading(source, width, height, params, &RenderThreading::default())
}

#[tracing::instrument(skip(source, params))]
pub fn render_with_threading(
    source: &SourceImage,
    width: u32,
    height: u32,
    params: &HalftoneParams,
    threading: &RenderThreading,
) -> HalftoneResult<FrameRGBA> {
    let renderer = Renderer::new(source, width, height, params)?;
    let params = renderer.params();
    tracing::debug!(
        mode = params.mode.name(),
        grid_size = params.grid_size(),
        source_width = source.width(),
        source_height = source.height(),
        "rendering halftone"
    );
    let frame = renderer.render(threading)?;
    tracing::debug!(bytes = frame.data.len(), "render complete");
    Ok(frame)
}

fn pixel_center(x: u32, y: u32) -> Vec2 {
    Vec2::new(f64::from(x) + 0.5, f64::from(y) + 0.5)
}

fn build_thread_pool(threads: usize) -> HalftoneResult<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build rayon thread pool: {e}").into())
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
