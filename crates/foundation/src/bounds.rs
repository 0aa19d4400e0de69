use crate::math::Vec3;

/// Axis-aligned bounding box.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb3 {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb3 {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Aabb3 { min, max }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Largest extent across the three axes.
    pub fn max_dimension(&self) -> f64 {
        let s = self.size();
        s.x.max(s.y).max(s.z)
    }
}

#[cfg(test)]
mod tests {
    use super::Aabb3;
    use crate::math::Vec3;

    #[test]
    fn center_and_size() {
        let b = Aabb3::new(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(3.0, 2.0, 4.0));
        assert_eq!(b.center(), Vec3::new(1.0, 1.0, 3.0));
        assert_eq!(b.size(), Vec3::new(4.0, 2.0, 2.0));
    }

    #[test]
    fn max_dimension_picks_largest_axis() {
        let b = Aabb3::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 5.0, 2.0));
        assert_eq!(b.max_dimension(), 5.0);
    }
}
