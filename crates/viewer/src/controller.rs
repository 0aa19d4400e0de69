use foundation::math::Vec3;

use crate::config::{AUTO_ROTATE_SPEED, DAMPING_FACTOR};

const TAU: f64 = std::f64::consts::TAU;

/// Damped auto-rotation orbit controller.
///
/// Manual rotate/pan/zoom are deliberately absent: the showcase viewer only
/// ever spins the subject on its own. Angular velocity eases toward the
/// auto-rotate speed per update, so rotation ramps in and out smoothly.
#[derive(Debug)]
pub struct OrbitController {
    auto_rotate: bool,
    azimuth_rad: f64,
    velocity_rad_per_s: f64,
}

impl OrbitController {
    pub fn new(auto_rotate: bool) -> Self {
        Self {
            auto_rotate,
            azimuth_rad: 0.0,
            velocity_rad_per_s: 0.0,
        }
    }

    pub fn azimuth_rad(&self) -> f64 {
        self.azimuth_rad
    }

    pub fn velocity_rad_per_s(&self) -> f64 {
        self.velocity_rad_per_s
    }

    /// Advances damping and rotation by `dt` seconds. Must run every tick
    /// even when idle so the ease-out completes.
    pub fn update(&mut self, dt: f64) {
        // Revolutions-per-minute style speed constant.
        let target = if self.auto_rotate {
            AUTO_ROTATE_SPEED * TAU / 60.0
        } else {
            0.0
        };
        self.velocity_rad_per_s += (target - self.velocity_rad_per_s) * DAMPING_FACTOR;
        self.azimuth_rad = (self.azimuth_rad + self.velocity_rad_per_s * dt) % TAU;
    }

    /// Camera position orbiting `target` at `distance` for the current
    /// azimuth. Azimuth zero looks down the +z axis.
    pub fn orbit_position(&self, target: Vec3, distance: f64) -> Vec3 {
        target
            + Vec3::new(
                distance * self.azimuth_rad.sin(),
                0.0,
                distance * self.azimuth_rad.cos(),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::OrbitController;
    use foundation::math::Vec3;

    #[test]
    fn velocity_eases_toward_auto_rotate_speed() {
        let mut c = OrbitController::new(true);
        let mut last = 0.0;
        for _ in 0..200 {
            c.update(1.0 / 60.0);
            assert!(c.velocity_rad_per_s() >= last);
            last = c.velocity_rad_per_s();
        }
        assert!(last > 0.0);
    }

    #[test]
    fn disabled_controller_stays_put() {
        let mut c = OrbitController::new(false);
        for _ in 0..100 {
            c.update(1.0 / 60.0);
        }
        assert_eq!(c.azimuth_rad(), 0.0);
    }

    #[test]
    fn azimuth_zero_sits_on_positive_z() {
        let c = OrbitController::new(true);
        let pos = c.orbit_position(Vec3::ZERO, 5.0);
        assert!((pos.z - 5.0).abs() < 1e-12);
        assert!(pos.x.abs() < 1e-12);
    }
}
