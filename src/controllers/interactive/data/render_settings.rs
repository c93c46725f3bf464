use std::num::NonZeroUsize;
use std::thread;

use crate::core::constants::{AUTO_ITERATIONS_PER_ZOOM_LEVEL, MAX_ITERATIONS, MIN_ITERATIONS};
use crate::core::data::complex::Complex;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::render_request::RenderRequest;
use crate::core::fractals::mandelbrot::colour_map::ColourSchemeKind;
use crate::core::fractals::mandelbrot::escape_time::convergence_epsilon;

/// User-tunable renderer settings.
///
/// When an `_auto` flag is set the matching count is derived: threads from the
/// machine, iterations from the zoom level of each request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    pub threads_count: usize,
    pub iterations_count: u32,
    pub threads_count_auto: bool,
    pub iterations_count_auto: bool,
    pub batch_pre_pass: bool,
    pub colour_scheme: ColourSchemeKind,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            threads_count: threads_count_auto(),
            iterations_count: MIN_ITERATIONS,
            threads_count_auto: true,
            iterations_count_auto: true,
            batch_pre_pass: true,
            colour_scheme: ColourSchemeKind::default(),
        }
    }
}

/// Upper bound for the worker thread count.
#[must_use]
pub fn max_threads() -> usize {
    thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

#[must_use]
pub fn threads_count_auto() -> usize {
    thread::available_parallelism()
        .map_or(1, NonZeroUsize::get)
        .min(max_threads())
}

/// Iteration budget for a view at `zoom_level`, growing linearly with depth.
#[must_use]
pub fn iterations_count_auto(zoom_level: f64) -> u32 {
    let budget = (AUTO_ITERATIONS_PER_ZOOM_LEVEL * zoom_level).floor();

    // `as` saturates, NaN becomes 0
    (budget as u32).clamp(MIN_ITERATIONS, MAX_ITERATIONS)
}

impl RenderSettings {
    /// Settings with auto threads filled in and both counts clamped to their
    /// valid ranges.
    #[must_use]
    pub fn resolved(mut self) -> Self {
        if self.threads_count_auto {
            self.threads_count = threads_count_auto();
        }

        self.threads_count = self.threads_count.clamp(1, max_threads());
        self.iterations_count = self.iterations_count.clamp(MIN_ITERATIONS, MAX_ITERATIONS);
        self
    }

    /// Snapshot of a view under these settings.
    #[must_use]
    pub fn request(
        &self,
        sequence_id: u64,
        center: Complex,
        pixel_size: PixelSize,
        scale: f64,
        zoom_level: f64,
        downscale_only: bool,
    ) -> RenderRequest {
        let iterations_count = if self.iterations_count_auto {
            iterations_count_auto(zoom_level)
        } else {
            self.iterations_count
        };

        RenderRequest {
            sequence_id,
            pixel_size,
            center,
            scale,
            zoom_level,
            downscale_only,
            epsilon: convergence_epsilon(scale),
            threads_count: self.threads_count,
            iterations_count,
            batch_pre_pass: self.batch_pre_pass,
            colour_scheme: self.colour_scheme,
        }
    }
}
