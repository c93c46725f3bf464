pub mod fill_strip;
