pub mod clock;
pub mod frame;

pub use clock::*;
pub use frame::*;
