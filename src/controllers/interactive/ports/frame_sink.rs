use crate::core::data::frame::Frame;

/// Receives finished frames from the render thread.
///
/// Called synchronously on the render thread; the next pass does not start
/// until this returns, so a slow consumer throttles the renderer. Frames from
/// superseded requests may still arrive and should be filtered by sequence id.
pub trait FrameSink: Send + Sync {
    fn frame_ready(&self, frame: Frame);
}
