pub mod bounds;
pub mod generation;
pub mod math;
pub mod time;

// Foundation crate: small, well-tested primitives only.
pub use bounds::*;
pub use generation::*;
pub use time::*;
