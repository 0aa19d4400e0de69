pub mod catalog;
pub mod session;

pub use catalog::*;
pub use session::*;
