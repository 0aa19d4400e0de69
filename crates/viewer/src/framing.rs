//! Camera and spotlight framing math for a freshly loaded model.

use foundation::bounds::Aabb3;
use foundation::math::Vec3;

use crate::config::{
    NARROW_DISTANCE_MULTIPLIER, NARROW_VIEWPORT_PX, RECENTER_Y_BIAS, WIDE_DISTANCE_MULTIPLIER,
};

/// Distance at which the largest bounding dimension exactly fills the
/// vertical field of view.
pub fn camera_distance(max_dimension: f64, fov_y_rad: f64) -> f64 {
    max_dimension / (2.0 * (fov_y_rad / 2.0).tan())
}

/// Narrow viewports pull the camera closer so the subject reads larger.
/// A zero hint means the viewport width is unknown and gets the wide value.
pub fn distance_multiplier(viewport_width_hint: u32) -> f64 {
    if viewport_width_hint > 0 && viewport_width_hint < NARROW_VIEWPORT_PX {
        NARROW_DISTANCE_MULTIPLIER
    } else {
        WIDE_DISTANCE_MULTIPLIER
    }
}

/// Model translation that centers it on its bounding box, lifted by the
/// fixed vertical bias.
pub fn recenter_position(bounds: &Aabb3) -> Vec3 {
    let center = bounds.center();
    Vec3::new(-center.x, -center.y + RECENTER_Y_BIAS, -center.z)
}

/// Spotlight target: the model's horizontal/depth center, half the model
/// height above its vertical center.
pub fn spotlight_target(model_position: Vec3, bounds: &Aabb3) -> Vec3 {
    Vec3::new(
        model_position.x,
        model_position.y + bounds.size().y / 2.0,
        model_position.z,
    )
}
