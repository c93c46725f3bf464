//! Caller-side model of the viewport: what is on screen, which request was
//! issued last, and which frames are still wanted.

pub mod view_state;

pub use view_state::{ViewRequest, ViewState};
