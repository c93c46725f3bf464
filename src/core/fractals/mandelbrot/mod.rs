pub mod batch;
pub mod colour_map;
pub mod colour_maps;
pub mod escape_time;
