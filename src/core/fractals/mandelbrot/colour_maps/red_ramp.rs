use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_map::{ColourMap, ColourSchemeKind, budget_fraction};

/// Linear ramp into the red channel; points inside the set are full red.
#[derive(Debug)]
pub struct RedRamp {
    max_iterations: u32,
}

impl ColourMap for RedRamp {
    fn map(&self, iterations: u32) -> Colour {
        let r = (budget_fraction(iterations, self.max_iterations) * 255.0) as u8;

        Colour { r, g: 0, b: 0 }
    }

    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::RedRamp
    }
}

impl RedRamp {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
