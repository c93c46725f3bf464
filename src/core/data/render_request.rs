use crate::core::data::complex::Complex;
use crate::core::data::pixel_size::PixelSize;
use crate::core::fractals::mandelbrot::colour_map::ColourSchemeKind;

/// Immutable snapshot of everything one render (both passes) needs.
///
/// Thread and iteration counts are already resolved; nothing in the render
/// path consults the live settings.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest {
    pub sequence_id: u64,
    pub pixel_size: PixelSize,
    pub center: Complex,
    /// Plane units per pixel.
    pub scale: f64,
    pub zoom_level: f64,
    pub downscale_only: bool,
    pub epsilon: f64,
    pub threads_count: usize,
    pub iterations_count: u32,
    pub batch_pre_pass: bool,
    pub colour_scheme: ColourSchemeKind,
}
