pub mod error;
pub mod form;
pub mod provider;

pub use error::*;
pub use form::*;
pub use provider::*;
