pub mod partition_strips;
pub mod plane_mapping;
