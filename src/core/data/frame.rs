use std::time::Duration;

use crate::core::data::pixel_buffer::PixelBuffer;

/// A finished pass, handed to the consumer by value.
#[derive(Debug)]
pub struct Frame {
    pub sequence_id: u64,
    pub coarse: bool,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}
