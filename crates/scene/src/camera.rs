use foundation::math::Vec3;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y_rad: f64,
    pub near: f64,
    pub far: f64,
    pub aspect: f64,
}

impl Camera {
    pub fn look_at(
        position: Vec3,
        target: Vec3,
        fov_y_rad: f64,
        near: f64,
        far: f64,
        aspect: f64,
    ) -> Self {
        Self {
            position,
            target,
            fov_y_rad,
            near,
            far,
            aspect,
        }
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = f64::from(width) / f64::from(height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Camera;
    use foundation::math::Vec3;

    #[test]
    fn set_aspect_from_surface_size() {
        let mut camera = Camera::look_at(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            50.0_f64.to_radians(),
            0.1,
            1000.0,
            1.0,
        );
        camera.set_aspect(800, 400);
        assert_eq!(camera.aspect, 2.0);
    }

    #[test]
    fn zero_height_leaves_aspect_unchanged() {
        let mut camera = Camera::look_at(Vec3::ZERO, Vec3::ZERO, 1.0, 0.1, 100.0, 1.5);
        camera.set_aspect(800, 0);
        assert_eq!(camera.aspect, 1.5);
    }
}
