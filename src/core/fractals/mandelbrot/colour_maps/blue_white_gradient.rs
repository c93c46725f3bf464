use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_map::{ColourMap, ColourSchemeKind, budget_fraction};

/// Smooth polynomial blend from deep blue to white; inside points are black.
#[derive(Debug)]
pub struct BlueWhiteGradient {
    max_iterations: u32,
}

impl ColourMap for BlueWhiteGradient {
    fn map(&self, iterations: u32) -> Colour {
        if iterations >= self.max_iterations {
            return Colour::BLACK;
        }

        let t = budget_fraction(iterations, self.max_iterations);
        let s = 1.0 - t;

        Colour {
            r: (9.0 * s * t * t * t * 255.0) as u8,
            g: (15.0 * s * s * t * t * 255.0) as u8,
            b: (8.5 * s * s * s * t * 255.0) as u8,
        }
    }

    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::BlueWhiteGradient
    }
}

impl BlueWhiteGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
