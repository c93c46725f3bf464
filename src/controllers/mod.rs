pub mod interactive;
pub mod view;
