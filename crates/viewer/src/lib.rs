pub mod config;
pub mod controller;
pub mod framing;
pub mod lifecycle;
pub mod mixer;
pub mod render;

pub use config::*;
pub use controller::*;
pub use lifecycle::*;
pub use render::*;
