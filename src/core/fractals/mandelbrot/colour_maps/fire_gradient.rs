use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_map::{ColourMap, ColourSchemeKind, budget_fraction};

/// Black through red, orange and yellow to white; inside points are black.
#[derive(Debug)]
pub struct FireGradient {
    max_iterations: u32,
}

impl ColourMap for FireGradient {
    fn map(&self, iterations: u32) -> Colour {
        if iterations >= self.max_iterations {
            return Colour::BLACK;
        }

        let t = budget_fraction(iterations, self.max_iterations);
        // position inside the current quarter of the ramp
        let local = (t % 0.25) / 0.25;

        let (r, g, b) = match (t * 4.0) as u8 {
            0 => ((local * 255.0) as u8, 0, 0),
            1 => (255, (local * 165.0) as u8, 0),
            2 => (255, (165.0 + local * 90.0) as u8, 0),
            _ => (255, 255, (local * 255.0) as u8),
        };

        Colour { r, g, b }
    }

    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::FireGradient
    }
}

impl FireGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
