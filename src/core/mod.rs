pub mod actions;
pub mod constants;
pub mod data;
pub mod fractals;
pub mod util;
