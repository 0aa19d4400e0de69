pub mod camera;
pub mod color;
pub mod instance;
pub mod model;
pub mod pool;
pub mod rig;

pub use camera::*;
pub use color::*;
pub use instance::*;
pub use model::*;
pub use pool::*;
pub use rig::*;
