//! Progressive render controller.
//!
//! The controller owns a background render thread and follows the ports &
//! adapters layout:
//! - **Input**: `RenderController::request` with the view to render
//! - **Output**: the `FrameSink` port receiving finished frames
//! - **Core**: render passes from `core/actions`

mod controller;
pub mod data;
pub mod ports;

pub use controller::{RenderController, StopHandle};
pub use data::render_settings::RenderSettings;
pub use ports::FrameSink;
