//! Renderer and view tuning constants.
//!
//! The periodicity threshold, the epsilon ceiling and the zoom depth ceiling
//! were tuned empirically; changing them changes which points are classified
//! as inside the set.

use crate::core::data::complex::Complex;

/// Edge length in pixels of the blocks evaluated once by the coarse pass.
pub const DOWNSCALE_LEVEL: usize = 4;

/// The coarse frame covers this many times the requested width and height.
pub const COARSE_SIZE_MULTIPLIER: usize = 4;

pub const MIN_ITERATIONS: u32 = 64;
pub const MAX_ITERATIONS: u32 = 2048;

/// Iterations granted per unit of zoom level when the budget is automatic.
pub const AUTO_ITERATIONS_PER_ZOOM_LEVEL: f64 = 30.0;

/// Pixels (precise pass) or blocks (coarse pass) processed between two cancellation polls.
pub const CANCEL_CHECK_INTERVAL: usize = 256;

/// The convergence reference point is re-snapshotted once this many steps have passed.
pub const PERIODICITY_CHECK_THRESHOLD: u32 = 19;

/// Upper bound on lock-step iterations of the batched pre-pass.
pub const BATCH_PRE_PASS_STEPS: u32 = 1024;

pub const BATCH_LANES: usize = 4;

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Convergence epsilon never exceeds this, even when zoomed far out.
pub const EPSILON_CEILING: f64 = 1e-3;

/// Largest accepted request width or height in pixels.
pub const MAX_DIMENSION: usize = 4096;

pub const SCALE_STEP: f64 = 0.5;
pub const MIN_ZOOM_LEVEL: f64 = 1.0;
/// Past this depth f64 starts to visibly distort the image.
pub const MAX_ZOOM_LEVEL: f64 = 45.0;

pub const INITIAL_SCALE: f64 = 0.005;
pub const INITIAL_CENTER: Complex = Complex::new(-0.5, 0.0);

pub const ALLOWED_CENTER_MIN: Complex = Complex::new(-3.0, -2.0);
pub const ALLOWED_CENTER_MAX: Complex = Complex::new(3.0, 2.0);
