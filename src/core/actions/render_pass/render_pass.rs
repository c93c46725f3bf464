use std::panic;
use std::thread;
use std::time::Instant;

use log::{debug, trace};

use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::fill_strip::fill_strip::{
    PassParams, fill_coarse_strip, fill_precise_strip,
};
use crate::core::constants::DOWNSCALE_LEVEL;
use crate::core::data::frame::Frame;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::RenderRequest;
use crate::core::fractals::mandelbrot::colour_maps::factory::colour_map_factory;
use crate::core::util::partition_strips::partition_strips;
use crate::core::util::plane_mapping::PlaneMapping;

/// Renders one pass of `request` at `size_multiplier` times its pixel size,
/// with one scoped worker thread per strip.
///
/// The plane scale is kept, so a multiplier above one covers a larger area
/// around the same center. Returns `None` when any worker observed
/// cancellation or the token is set once all workers have joined; a partially
/// written buffer never leaves this function.
pub fn run_pass<C: CancelToken + ?Sized>(
    request: &RenderRequest,
    size_multiplier: usize,
    coarse: bool,
    cancel: &C,
) -> Option<Frame> {
    let start = Instant::now();

    let pixel_size = request.pixel_size.scaled(size_multiplier.max(1));
    let colour_map = colour_map_factory(request.colour_scheme, request.iterations_count);
    let params = PassParams {
        width: pixel_size.width(),
        mapping: PlaneMapping::centred(request.center, pixel_size, request.scale),
        iterations: request.iterations_count,
        epsilon: request.epsilon,
        batch_pre_pass: request.batch_pre_pass,
        colour_map: colour_map.as_ref(),
    };

    let strips = partition_strips(pixel_size.height(), request.threads_count, DOWNSCALE_LEVEL);
    let strip_height = strips.first().map_or(pixel_size.height(), |rows| rows.len());
    let mut pixel_buffer = PixelBuffer::new(pixel_size);

    debug!(
        "request {}: {} pass {}x{} on {} strips, {} iterations",
        request.sequence_id,
        pass_name(coarse),
        pixel_size.width(),
        pixel_size.height(),
        strips.len(),
        request.iterations_count
    );

    let completed = thread::scope(|scope| {
        let handles: Vec<_> = pixel_buffer
            .strips_mut(strip_height)
            .zip(strips)
            .map(|(strip, rows)| {
                let params = &params;
                scope.spawn(move || {
                    if coarse {
                        fill_coarse_strip(strip, rows, params, cancel)
                    } else {
                        fill_precise_strip(strip, rows, params, cancel)
                    }
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
            .fold(true, |completed, result| completed && result.is_ok())
    });

    if !completed || cancel.is_cancelled() {
        trace!(
            "request {}: {} pass cancelled after {:?}",
            request.sequence_id,
            pass_name(coarse),
            start.elapsed()
        );
        return None;
    }

    let render_duration = start.elapsed();
    debug!(
        "request {}: {} pass finished in {:?}",
        request.sequence_id,
        pass_name(coarse),
        render_duration
    );

    Some(Frame {
        sequence_id: request.sequence_id,
        coarse,
        pixel_buffer,
        render_duration,
    })
}

fn pass_name(coarse: bool) -> &'static str {
    if coarse { "coarse" } else { "precise" }
}
