use foundation::math::{Euler, Vec3};
use scene::camera::Camera;
use scene::color::Color;
use scene::pool::GeometryHandle;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RenderCommand {
    /// Clears the surface; `None` leaves it transparent.
    Clear { background: Option<Color> },
    DrawMesh {
        geometry: GeometryHandle,
        position: Vec3,
        rotation: Euler,
    },
}

/// One frame's worth of draw state, emitted by the viewer tick.
#[derive(Debug, Clone)]
pub struct RenderFrame {
    pub commands: Vec<RenderCommand>,
    pub camera: Camera,
    pub spot_position: Vec3,
}

impl RenderFrame {
    pub fn draw_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::DrawMesh { .. }))
            .count()
    }
}
