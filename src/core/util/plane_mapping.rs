use crate::core::data::complex::Complex;
use crate::core::data::pixel_size::PixelSize;

/// Affine map from pixel space to the complex plane.
///
/// Pixel `(0, 0)` is the top-left corner of the image and y grows downward in
/// both spaces; `scale` is plane units per pixel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneMapping {
    origin: Complex,
    scale: f64,
}

impl PlaneMapping {
    /// Mapping that puts `center` in the middle of an image of `pixel_size`.
    #[must_use]
    pub fn centred(center: Complex, pixel_size: PixelSize, scale: f64) -> Self {
        let half_extent = Complex::new(
            pixel_size.width() as f64 / 2.0,
            pixel_size.height() as f64 / 2.0,
        );

        Self {
            origin: center - half_extent * scale,
            scale,
        }
    }

    /// Plane point at a fractional pixel position.
    #[inline]
    #[must_use]
    pub fn point(&self, x: f64, y: f64) -> Complex {
        self.origin + Complex::new(x, y) * self.scale
    }

    #[inline]
    #[must_use]
    pub fn pixel_centre(&self, x: usize, y: usize) -> Complex {
        self.point(x as f64 + 0.5, y as f64 + 0.5)
    }
}
