use foundation::math::{Euler, Vec3};
use scene::color::Color;
use scene::rig::SpotParams;

/// Vertical field of view. Narrow for tight product framing.
pub const FOV_Y_RAD: f64 = 50.0 * std::f64::consts::PI / 180.0;
pub const NEAR_PLANE: f64 = 0.1;
pub const FAR_PLANE: f64 = 1000.0;

/// Camera distance before any model has loaded.
pub const INITIAL_CAMERA_Z: f64 = 5.0;

/// Models are re-centered on their bounding-box center, lifted slightly.
pub const RECENTER_Y_BIAS: f64 = 0.25;

/// Low ambient fill so the spotlight carries the look.
pub const AMBIENT_INTENSITY: f64 = 0.02;
pub const DIRECTIONAL_INTENSITY: f64 = 0.05;
pub const DIRECTIONAL_DIRECTION: Vec3 = Vec3 {
    x: 0.0,
    y: 1.0,
    z: 1.0,
};

pub const SPOT_PARAMS: SpotParams = SpotParams {
    intensity: 120.0,
    angle_rad: std::f64::consts::PI / 15.0,
    penumbra: 0.3,
    decay: 2.5,
};
/// Spotlight placement before the model frames it.
pub const INITIAL_SPOT_POSITION: Vec3 = Vec3 {
    x: 3.0,
    y: 5.0,
    z: 4.0,
};
/// Distance of the spotlight from its target while following the camera.
pub const SPOT_STANDOFF: f64 = 8.0;

/// Orbit speed in revolutions per minute at 60 ticks/s equivalent.
pub const AUTO_ROTATE_SPEED: f64 = 3.0;
pub const DAMPING_FACTOR: f64 = 0.05;

/// Below this viewport width the camera moves proportionally closer.
pub const NARROW_VIEWPORT_PX: u32 = 768;
pub const NARROW_DISTANCE_MULTIPLIER: f64 = 1.4;
pub const WIDE_DISTANCE_MULTIPLIER: f64 = 1.0;

/// The one user-facing message for any asset fetch or parse failure.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load 3D model";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f64 {
        if self.height == 0 {
            1.0
        } else {
            f64::from(self.width) / f64::from(self.height)
        }
    }
}

/// Everything one mount cycle is configured by. Any change to this identity
/// forces a full teardown and rebuild; there is no incremental update path.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub model_path: String,
    pub container: SurfaceSize,
    /// `None` keeps the surface transparent.
    pub background: Option<Color>,
    pub auto_rotate: bool,
    pub initial_rotation: Euler,
    /// Page viewport width in pixels; only used to pick the camera
    /// distance multiplier. Zero means unknown.
    pub viewport_width_hint: u32,
}

impl ViewerConfig {
    pub fn new(model_path: impl Into<String>, container: SurfaceSize) -> Self {
        Self {
            model_path: model_path.into(),
            container,
            background: None,
            auto_rotate: true,
            initial_rotation: Euler::ZERO,
            viewport_width_hint: 0,
        }
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    pub fn with_rotation(mut self, rotation: Euler) -> Self {
        self.initial_rotation = rotation;
        self
    }

    pub fn with_viewport_width(mut self, width: u32) -> Self {
        self.viewport_width_hint = width;
        self
    }

    pub fn with_auto_rotate(mut self, auto_rotate: bool) -> Self {
        self.auto_rotate = auto_rotate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{SurfaceSize, ViewerConfig};

    #[test]
    fn aspect_guards_zero_height() {
        assert_eq!(SurfaceSize::new(800, 400).aspect(), 2.0);
        assert_eq!(SurfaceSize::new(800, 0).aspect(), 1.0);
    }

    #[test]
    fn defaults_match_the_hero_viewer() {
        let config = ViewerConfig::new("/BodyPillow.glb", SurfaceSize::new(640, 400));
        assert!(config.auto_rotate);
        assert!(config.background.is_none());
        assert_eq!(config.viewport_width_hint, 0);
    }
}
