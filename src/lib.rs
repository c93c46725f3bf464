mod controllers;
mod core;

pub use crate::controllers::interactive::{FrameSink, RenderController, RenderSettings, StopHandle};
pub use crate::controllers::interactive::data::render_settings::{
    iterations_count_auto, max_threads, threads_count_auto,
};
pub use crate::controllers::view::{ViewRequest, ViewState};
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::render_pass::render_pass::run_pass;
pub use crate::core::constants;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame::Frame;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::pixel_size::{PixelSize, PixelSizeError};
pub use crate::core::data::render_request::RenderRequest;
pub use crate::core::fractals::mandelbrot::batch::{BatchState, advance_batch, escape_time_batch};
pub use crate::core::fractals::mandelbrot::colour_map::{ColourMap, ColourSchemeKind};
pub use crate::core::fractals::mandelbrot::colour_maps::factory::colour_map_factory;
pub use crate::core::fractals::mandelbrot::escape_time::{
    WarmStart, convergence_epsilon, escape_time,
};
