//! Lock-step pre-pass over [`BATCH_LANES`] points.
//!
//! The lanes are plain `[f64; BATCH_LANES]` arrays so the loop body
//! vectorises without target-specific intrinsics. No fused multiply-add is
//! used, which keeps every lane bit-identical to the scalar evaluator.

use std::array;

use crate::core::constants::{BATCH_LANES, BATCH_PRE_PASS_STEPS, ESCAPE_RADIUS_SQUARED};
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::escape_time::{WarmStart, escape_time};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BatchState {
    pub z: [Complex; BATCH_LANES],
    pub steps: u32,
}

/// Advances every lane from z = 0 until the step on which any lane would
/// escape, or until `step_limit` steps have been applied.
#[must_use]
pub fn advance_batch(c: &[Complex; BATCH_LANES], step_limit: u32) -> BatchState {
    let c_re: [f64; BATCH_LANES] = array::from_fn(|lane| c[lane].real);
    let c_im: [f64; BATCH_LANES] = array::from_fn(|lane| c[lane].imag);
    let mut re = [0.0_f64; BATCH_LANES];
    let mut im = [0.0_f64; BATCH_LANES];
    let mut steps = 0;

    while steps < step_limit {
        let re_sqr: [f64; BATCH_LANES] = array::from_fn(|lane| re[lane] * re[lane]);
        let im_sqr: [f64; BATCH_LANES] = array::from_fn(|lane| im[lane] * im[lane]);

        if (0..BATCH_LANES).any(|lane| re_sqr[lane] + im_sqr[lane] >= ESCAPE_RADIUS_SQUARED) {
            break;
        }

        for lane in 0..BATCH_LANES {
            let next_re = re_sqr[lane] - im_sqr[lane] + c_re[lane];
            im[lane] = (2.0 * re[lane]) * im[lane] + c_im[lane];
            re[lane] = next_re;
        }

        steps += 1;
    }

    BatchState {
        z: array::from_fn(|lane| Complex::new(re[lane], im[lane])),
        steps,
    }
}

/// Escape time for each lane: batched pre-pass, then each lane is finished
/// by the scalar evaluator from where the batch stopped.
#[must_use]
pub fn escape_time_batch(
    c: &[Complex; BATCH_LANES],
    budget: u32,
    epsilon: f64,
) -> [u32; BATCH_LANES] {
    let state = advance_batch(c, budget.min(BATCH_PRE_PASS_STEPS));

    array::from_fn(|lane| {
        let warm_start = WarmStart {
            z: state.z[lane],
            steps: state.steps,
        };
        escape_time(c[lane], budget, epsilon, Some(warm_start))
    })
}
