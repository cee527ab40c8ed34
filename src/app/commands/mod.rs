pub mod preview;
pub mod render;
pub mod submit;
