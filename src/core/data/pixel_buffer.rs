use crate::core::data::colour::Colour;
use crate::core::data::pixel_size::PixelSize;

pub const BYTES_PER_PIXEL: usize = 3;

fn pixel_size_to_buffer_size(pixel_size: PixelSize) -> usize {
    pixel_size.area() * BYTES_PER_PIXEL
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB image, three bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixel_size: PixelSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(pixel_size: PixelSize) -> Self {
        Self {
            pixel_size,
            buffer: vec![0; pixel_size_to_buffer_size(pixel_size)],
        }
    }

    #[must_use]
    pub fn pixel_size(&self) -> PixelSize {
        self.pixel_size
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn row_bytes(&self) -> usize {
        self.pixel_size.width() * BYTES_PER_PIXEL
    }

    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Colour> {
        if x >= self.pixel_size.width() || y >= self.pixel_size.height() {
            return None;
        }

        let index = y * self.row_bytes() + x * BYTES_PER_PIXEL;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    /// Splits the buffer into disjoint bands of `rows_per_strip` full rows.
    /// The last band holds whatever rows remain.
    pub(crate) fn strips_mut(&mut self, rows_per_strip: usize) -> std::slice::ChunksMut<'_, u8> {
        let chunk = rows_per_strip.max(1) * self.row_bytes();
        self.buffer.chunks_mut(chunk)
    }
}
