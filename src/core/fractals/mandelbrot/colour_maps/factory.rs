use crate::core::fractals::mandelbrot::colour_map::{ColourMap, ColourSchemeKind};
use crate::core::fractals::mandelbrot::colour_maps::{
    blue_white_gradient::BlueWhiteGradient, fire_gradient::FireGradient, red_ramp::RedRamp,
};

#[must_use]
pub fn colour_map_factory(kind: ColourSchemeKind, max_iterations: u32) -> Box<dyn ColourMap> {
    match kind {
        ColourSchemeKind::RedRamp => Box::new(RedRamp::new(max_iterations)),
        ColourSchemeKind::FireGradient => Box::new(FireGradient::new(max_iterations)),
        ColourSchemeKind::BlueWhiteGradient => Box::new(BlueWhiteGradient::new(max_iterations)),
    }
}
