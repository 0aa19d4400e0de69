pub mod euler;
pub mod vec;

pub use euler::*;
pub use vec::*;
