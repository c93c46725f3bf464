use std::error::Error;
use std::fmt;

use crate::core::constants::MAX_DIMENSION;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelSizeError {
    InvalidSize { width: usize, height: usize },
}

impl fmt::Display for PixelSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "pixel size must be between 1x1 and {}x{}: {}x{}",
                    MAX_DIMENSION, MAX_DIMENSION, width, height
                )
            }
        }
    }
}

impl Error for PixelSizeError {}

/// Width and height of an image in pixels.
///
/// Both sides are bounded by [`MAX_DIMENSION`], so buffer sizes and pixel
/// indices derived from a `PixelSize` (even after the coarse overscan
/// multiplier) cannot overflow.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelSize {
    width: usize,
    height: usize,
}

impl PixelSize {
    pub fn new(width: usize, height: usize) -> Result<Self, PixelSizeError> {
        if !(1..=MAX_DIMENSION).contains(&width) || !(1..=MAX_DIMENSION).contains(&height) {
            return Err(PixelSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Both sides multiplied by `multiplier`. Multipliers are small constants,
    /// so the result is not re-validated against [`MAX_DIMENSION`].
    #[must_use]
    pub(crate) fn scaled(&self, multiplier: usize) -> Self {
        Self {
            width: self.width * multiplier,
            height: self.height * multiplier,
        }
    }
}
