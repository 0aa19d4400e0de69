use foundation::math::Vec3;

use crate::pool::{LightHandle, NodeHandle, PoolError, ResourcePool};

/// Spotlight shaping parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpotParams {
    pub intensity: f64,
    pub angle_rad: f64,
    pub penumbra: f64,
    pub decay: f64,
}

/// The fixed three-light rig: low ambient fill, a subtle directional, and a
/// narrow spotlight aimed at a dedicated target node.
#[derive(Debug)]
pub struct LightRig {
    pub ambient: LightHandle,
    pub ambient_intensity: f64,
    pub directional: LightHandle,
    pub directional_intensity: f64,
    pub directional_direction: Vec3,
    pub spot: LightHandle,
    pub spot_params: SpotParams,
    pub spot_position: Vec3,
    pub spot_target_node: NodeHandle,
    pub spot_target: Vec3,
}

impl LightRig {
    pub fn build(
        pool: &mut ResourcePool,
        ambient_intensity: f64,
        directional_intensity: f64,
        directional_direction: Vec3,
        spot_params: SpotParams,
        spot_position: Vec3,
    ) -> Self {
        Self {
            ambient: pool.create_light("ambient"),
            ambient_intensity,
            directional: pool.create_light("directional"),
            directional_intensity,
            directional_direction,
            spot: pool.create_light("spot"),
            spot_params,
            spot_position,
            spot_target_node: pool.create_node("spot target"),
            spot_target: Vec3::ZERO,
        }
    }

    /// Points the spotlight at a fixed position in the scene.
    pub fn aim_at(&mut self, target: Vec3) {
        self.spot_target = target;
    }

    /// Repositions the spotlight along the target→camera direction at a
    /// fixed standoff, so the highlight follows the camera.
    pub fn follow_camera(&mut self, camera_position: Vec3, standoff: f64) {
        let direction = (camera_position - self.spot_target).normalized();
        self.spot_position = self.spot_target + direction * standoff;
    }

    /// Removes all three lights and the spotlight target from the scene.
    pub fn dispose(self, pool: &mut ResourcePool) -> Result<(), PoolError> {
        pool.dispose_light(self.ambient)?;
        pool.dispose_light(self.directional)?;
        pool.dispose_light(self.spot)?;
        pool.dispose_node(self.spot_target_node)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{LightRig, SpotParams};
    use crate::pool::ResourcePool;
    use foundation::math::Vec3;

    fn spot() -> SpotParams {
        SpotParams {
            intensity: 120.0,
            angle_rad: std::f64::consts::PI / 15.0,
            penumbra: 0.3,
            decay: 2.5,
        }
    }

    #[test]
    fn build_and_dispose_balance_the_pool() {
        let mut pool = ResourcePool::new();
        let rig = LightRig::build(
            &mut pool,
            0.02,
            0.05,
            Vec3::new(0.0, 1.0, 1.0),
            spot(),
            Vec3::new(3.0, 5.0, 4.0),
        );
        assert_eq!(pool.live_counts().lights, 3);
        assert_eq!(pool.live_counts().nodes, 1);

        rig.dispose(&mut pool).expect("dispose");
        assert!(pool.live_counts().is_empty());
    }

    #[test]
    fn follow_camera_sits_at_standoff_from_target() {
        let mut pool = ResourcePool::new();
        let mut rig = LightRig::build(
            &mut pool,
            0.02,
            0.05,
            Vec3::new(0.0, 1.0, 1.0),
            spot(),
            Vec3::new(3.0, 5.0, 4.0),
        );
        rig.aim_at(Vec3::new(0.0, 1.0, 0.0));
        rig.follow_camera(Vec3::new(0.0, 1.0, 10.0), 8.0);
        assert_eq!(rig.spot_position, Vec3::new(0.0, 1.0, 8.0));

        let standoff = (rig.spot_position - rig.spot_target).length();
        assert!((standoff - 8.0).abs() < 1e-12);
    }
}
