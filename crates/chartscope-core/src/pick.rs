//! Ray picking types.

use glam::Vec3;

/// A ray with an origin and a direction.
///
/// `t` parameters reported against this ray are in units of the direction's
/// length; pass a unit direction (see [`Ray::normalized`]) to get world
/// distances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin.
    pub origin: Vec3,

    /// Ray direction.
    pub direction: Vec3,
}

impl Ray {
    /// Creates a ray from an origin and a direction.
    #[must_use]
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Returns the same ray with a unit-length direction.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            origin: self.origin,
            direction: self.direction.normalize_or_zero(),
        }
    }

    /// Returns the point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Result of a ray/mesh intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Index of the intersected triangle in the mesh's triangle list.
    pub triangle: usize,

    /// Intersection point, in the space the ray was given in.
    pub position: Vec3,

    /// Ray parameter at the intersection.
    pub t: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(ray.at(0.0), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(ray.at(2.5), Vec3::new(1.0, -0.5, 3.0));
    }

    #[test]
    fn test_ray_normalized() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0)).normalized();
        assert!((ray.direction.length() - 1.0).abs() < 1e-6);

        let degenerate = Ray::new(Vec3::ZERO, Vec3::ZERO).normalized();
        assert_eq!(degenerate.direction, Vec3::ZERO);
    }
}
