pub mod path;
pub mod render;
