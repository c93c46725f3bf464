pub mod colour;
pub mod complex;
pub mod frame;
pub mod pixel_buffer;
pub mod pixel_size;
pub mod render_request;
