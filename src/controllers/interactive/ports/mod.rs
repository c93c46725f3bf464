//! Port definitions for the render controller.

pub mod frame_sink;

pub use frame_sink::FrameSink;
