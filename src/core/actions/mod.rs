pub mod cancellation;
pub mod fill_strip;
pub mod render_pass;
