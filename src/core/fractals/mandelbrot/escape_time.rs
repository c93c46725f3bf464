//! Scalar escape-time evaluation of z -> z² + c with periodicity detection.
//!
//! The evaluator returns the step index at which |z|² first reaches the
//! escape radius, or the iteration budget when the point is treated as inside
//! the set (budget exhausted, or the orbit settled within `epsilon` of its
//! periodically refreshed reference point).
//!
//! Since z₀ = 0 never escapes, a point with |c|² ≥ 4 escapes at step 1.

use crate::core::constants::{EPSILON_CEILING, ESCAPE_RADIUS_SQUARED, PERIODICITY_CHECK_THRESHOLD};
use crate::core::data::complex::Complex;

/// Orbit state to resume from: `z` after `steps` iterations already applied.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct WarmStart {
    pub z: Complex,
    pub steps: u32,
}

/// Convergence epsilon for a view rendered at `scale` plane units per pixel.
#[must_use]
pub fn convergence_epsilon(scale: f64) -> f64 {
    scale.min(EPSILON_CEILING)
}

#[must_use]
pub fn escape_time(c: Complex, budget: u32, epsilon: f64, warm_start: Option<WarmStart>) -> u32 {
    let WarmStart { z, steps } = warm_start.unwrap_or_default();

    let mut re = z.real;
    let mut im = z.imag;
    let mut re_sqr = re * re;
    let mut im_sqr = im * im;

    let mut reference = z;
    let mut period = 0;

    for step in steps..budget {
        if re_sqr + im_sqr >= ESCAPE_RADIUS_SQUARED {
            return step;
        }

        let next_re = re_sqr - im_sqr + c.real;
        im = (2.0 * re) * im + c.imag;
        re = next_re;
        re_sqr = re * re;
        im_sqr = im * im;

        if Complex::new(re, im).is_within(reference, epsilon) {
            return budget;
        }

        period += 1;
        if period > PERIODICITY_CHECK_THRESHOLD {
            period = 0;
            reference = Complex::new(re, im);
        }
    }

    budget
}
