//! Per-strip workers for the coarse and precise passes.
//!
//! A strip is a band of full image rows owned exclusively by one worker. The
//! `strip` slice passed in holds exactly `rows.len()` rows of RGB pixels and
//! `rows` gives their position in the full image. On cancellation the strip is
//! left partially written and the caller must not publish it.

use std::array;
use std::ops::Range;

use crate::core::actions::cancellation::{CancelPoll, CancelToken, Cancelled};
use crate::core::constants::{BATCH_LANES, DOWNSCALE_LEVEL};
use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;
use crate::core::fractals::mandelbrot::batch::escape_time_batch;
use crate::core::fractals::mandelbrot::colour_map::ColourMap;
use crate::core::fractals::mandelbrot::escape_time::escape_time;
use crate::core::util::plane_mapping::PlaneMapping;

/// Everything a worker needs to evaluate and colour its pixels.
#[derive(Clone, Copy)]
pub struct PassParams<'a> {
    pub width: usize,
    pub mapping: PlaneMapping,
    pub iterations: u32,
    pub epsilon: f64,
    pub batch_pre_pass: bool,
    pub colour_map: &'a dyn ColourMap,
}

impl PassParams<'_> {
    #[inline]
    fn colour_at(&self, steps: u32) -> [u8; BYTES_PER_PIXEL] {
        self.colour_map.map(steps).to_rgb()
    }

    fn row_bytes(&self) -> usize {
        self.width * BYTES_PER_PIXEL
    }
}

/// Evaluates one point per `DOWNSCALE_LEVEL`² block, sampling the block's
/// centre, and flat-fills the block. Blocks on the right and bottom edges are
/// clipped to the strip.
pub fn fill_coarse_strip<C: CancelToken + ?Sized>(
    strip: &mut [u8],
    rows: Range<usize>,
    params: &PassParams<'_>,
    cancel: &C,
) -> Result<(), Cancelled> {
    let row_bytes = params.row_bytes();
    let half_block = DOWNSCALE_LEVEL as f64 * 0.5;
    let mut poll = CancelPoll::new(cancel);

    for block_top in rows.clone().step_by(DOWNSCALE_LEVEL) {
        let block_bottom = (block_top + DOWNSCALE_LEVEL).min(rows.end);

        for block_left in (0..params.width).step_by(DOWNSCALE_LEVEL) {
            let block_right = (block_left + DOWNSCALE_LEVEL).min(params.width);

            let sample = params
                .mapping
                .point(block_left as f64 + half_block, block_top as f64 + half_block);
            let steps = escape_time(sample, params.iterations, params.epsilon, None);
            let colour = params.colour_at(steps);

            for y in block_top..block_bottom {
                let row_start = (y - rows.start) * row_bytes;
                let span_start = row_start + block_left * BYTES_PER_PIXEL;
                let span_end = row_start + block_right * BYTES_PER_PIXEL;
                let span = &mut strip[span_start..span_end];

                for pixel in span.chunks_exact_mut(BYTES_PER_PIXEL) {
                    pixel.copy_from_slice(&colour);
                }
            }

            poll.advance(1)?;
        }
    }

    Ok(())
}

/// Evaluates every pixel at its centre.
pub fn fill_precise_strip<C: CancelToken + ?Sized>(
    strip: &mut [u8],
    rows: Range<usize>,
    params: &PassParams<'_>,
    cancel: &C,
) -> Result<(), Cancelled> {
    let row_bytes = params.row_bytes();
    let mut poll = CancelPoll::new(cancel);

    for (y, row) in rows.zip(strip.chunks_exact_mut(row_bytes)) {
        if params.batch_pre_pass {
            for (group, pixels) in row.chunks_mut(BATCH_LANES * BYTES_PER_PIXEL).enumerate() {
                let x0 = group * BATCH_LANES;
                let lanes = pixels.len() / BYTES_PER_PIXEL;

                // a short tail group repeats its last pixel in the unused lanes
                let c = array::from_fn(|lane| {
                    params.mapping.pixel_centre(x0 + lane.min(lanes - 1), y)
                });
                let steps = escape_time_batch(&c, params.iterations, params.epsilon);

                for (pixel, steps) in pixels.chunks_exact_mut(BYTES_PER_PIXEL).zip(steps) {
                    pixel.copy_from_slice(&params.colour_at(steps));
                }

                poll.advance(lanes)?;
            }
        } else {
            for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                let c = params.mapping.pixel_centre(x, y);
                let steps = escape_time(c, params.iterations, params.epsilon, None);
                pixel.copy_from_slice(&params.colour_at(steps));

                poll.advance(1)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::constants::CANCEL_CHECK_INTERVAL;
    use crate::core::data::complex::Complex;
    use crate::core::data::pixel_size::PixelSize;
    use crate::core::fractals::mandelbrot::colour_maps::red_ramp::RedRamp;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn params<'a>(
        width: usize,
        height: usize,
        batch: bool,
        colour_map: &'a RedRamp,
    ) -> PassParams<'a> {
        let size = PixelSize::new(width, height).unwrap();
        PassParams {
            width,
            mapping: PlaneMapping::centred(Complex::new(-0.5, 0.0), size, 3.0 / width as f64),
            iterations: 128,
            epsilon: 1e-3,
            batch_pre_pass: batch,
            colour_map,
        }
    }

    fn pixel(strip: &[u8], width: usize, x: usize, y: usize) -> [u8; 3] {
        let index = (y * width + x) * BYTES_PER_PIXEL;
        [strip[index], strip[index + 1], strip[index + 2]]
    }

    #[test]
    fn test_coarse_fills_whole_blocks_with_one_colour() {
        let colour_map = RedRamp::new(128);
        let (width, height) = (30, 12);
        let params = params(width, height, false, &colour_map);
        let mut strip = vec![0; width * height * BYTES_PER_PIXEL];

        fill_coarse_strip(&mut strip, 0..height, &params, &NeverCancel).unwrap();

        for block_top in (0..height).step_by(DOWNSCALE_LEVEL) {
            for block_left in (0..width).step_by(DOWNSCALE_LEVEL) {
                let expected = pixel(&strip, width, block_left, block_top);
                for y in block_top..(block_top + DOWNSCALE_LEVEL).min(height) {
                    for x in block_left..(block_left + DOWNSCALE_LEVEL).min(width) {
                        assert_eq!(pixel(&strip, width, x, y), expected, "pixel ({}, {})", x, y);
                    }
                }
            }
        }
    }

    #[test]
    fn test_coarse_sample_is_block_centre() {
        let colour_map = RedRamp::new(128);
        let (width, height) = (8, 8);
        let params = params(width, height, false, &colour_map);
        let mut strip = vec![0; width * height * BYTES_PER_PIXEL];

        fill_coarse_strip(&mut strip, 0..height, &params, &NeverCancel).unwrap();

        let sample = params.mapping.point(6.0, 2.0);
        let expected = colour_map.map(escape_time(sample, 128, 1e-3, None)).to_rgb();
        assert_eq!(pixel(&strip, width, 7, 3), expected);
    }

    #[test]
    fn test_coarse_strip_uses_global_row_positions() {
        let colour_map = RedRamp::new(128);
        let (width, height) = (16, 16);
        let params = params(width, height, false, &colour_map);

        let mut whole = vec![0; width * height * BYTES_PER_PIXEL];
        fill_coarse_strip(&mut whole, 0..height, &params, &NeverCancel).unwrap();

        let mut lower = vec![0; width * 8 * BYTES_PER_PIXEL];
        fill_coarse_strip(&mut lower, 8..16, &params, &NeverCancel).unwrap();

        assert_eq!(&whole[width * 8 * BYTES_PER_PIXEL..], &lower[..]);
    }

    #[test]
    fn test_precise_batched_matches_scalar_path() {
        let colour_map = RedRamp::new(128);
        // width not a multiple of the lane count exercises the padded tail
        let (width, height) = (37, 9);

        let batched_params = params(width, height, true, &colour_map);
        let mut batched = vec![0; width * height * BYTES_PER_PIXEL];
        fill_precise_strip(&mut batched, 0..height, &batched_params, &NeverCancel).unwrap();

        let scalar_params = params(width, height, false, &colour_map);
        let mut scalar = vec![0; width * height * BYTES_PER_PIXEL];
        fill_precise_strip(&mut scalar, 0..height, &scalar_params, &NeverCancel).unwrap();

        let differing = batched
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(scalar.chunks_exact(BYTES_PER_PIXEL))
            .filter(|(a, b)| a != b)
            .count();
        assert!(differing * 100 <= width * height, "{} pixels differ", differing);
    }

    #[test]
    fn test_precise_evaluates_each_pixel_centre() {
        let colour_map = RedRamp::new(128);
        let (width, height) = (9, 5);
        let params = params(width, height, false, &colour_map);
        let mut strip = vec![0; width * height * BYTES_PER_PIXEL];

        fill_precise_strip(&mut strip, 0..height, &params, &NeverCancel).unwrap();

        for y in 0..height {
            for x in 0..width {
                let c = params.mapping.pixel_centre(x, y);
                let expected = colour_map.map(escape_time(c, 128, 1e-3, None)).to_rgb();
                assert_eq!(pixel(&strip, width, x, y), expected);
            }
        }
    }

    #[test]
    fn test_precise_stops_at_first_checkpoint_when_cancelled() {
        let colour_map = RedRamp::new(128);
        let (width, height) = (64, 40);
        let polls = AtomicUsize::new(0);
        let cancel = || {
            polls.fetch_add(1, Ordering::Relaxed);
            true
        };

        for batch in [false, true] {
            polls.store(0, Ordering::Relaxed);
            let mut strip = vec![0; width * height * BYTES_PER_PIXEL];

            let pass_params = params(width, height, batch, &colour_map);
            let result = fill_precise_strip(&mut strip, 0..height, &pass_params, &cancel);

            assert_eq!(result, Err(Cancelled));
            assert_eq!(polls.load(Ordering::Relaxed), 1);
            // nothing past the first checkpoint was written
            let written_bytes = CANCEL_CHECK_INTERVAL * BYTES_PER_PIXEL;
            assert!(strip[written_bytes..].iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn test_coarse_polls_once_per_interval_of_blocks() {
        let colour_map = RedRamp::new(128);
        // 64 x 64 blocks = 4096 blocks -> 16 polls
        let (width, height) = (256, 256);
        let polls = AtomicUsize::new(0);
        let cancel = || {
            polls.fetch_add(1, Ordering::Relaxed);
            false
        };
        let mut strip = vec![0; width * height * BYTES_PER_PIXEL];

        let pass_params = params(width, height, false, &colour_map);
        fill_coarse_strip(&mut strip, 0..height, &pass_params, &cancel).unwrap();

        assert_eq!(polls.load(Ordering::Relaxed), 4096 / CANCEL_CHECK_INTERVAL);
    }
}
