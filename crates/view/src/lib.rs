pub mod camera;
pub mod engine;

pub use camera::*;
pub use engine::*;
