pub mod color;
pub mod lifecycle;
pub mod picking;
pub mod store;

pub use store::*;
