//! Camera and screen-ray generation.
//!
//! The host owns the real rendering camera; this one exists so normalized
//! screen taps can be unprojected into world-space pick rays without a GPU
//! in the loop.

use chartscope_core::options::CameraPose;
use chartscope_core::pick::Ray;
use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

/// Default vertical field of view, degrees.
pub const DEFAULT_FOV_Y_DEGREES: f32 = 45.0;

/// Default near clip distance.
pub const DEFAULT_NEAR: f32 = 0.1;

/// Default far clip distance.
pub const DEFAULT_FAR: f32 = 1000.0;

/// A perspective camera posed in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,

    /// Camera orientation.
    pub rotation: Quat,

    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,

    /// Viewport aspect ratio (width / height).
    pub aspect: f32,

    /// Near clip distance.
    pub near: f32,

    /// Far clip distance.
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_pose(CameraPose::default())
    }
}

impl Camera {
    /// Creates a camera at a pose with default projection parameters.
    #[must_use]
    pub fn from_pose(pose: CameraPose) -> Self {
        Self {
            position: pose.position,
            rotation: pose.rotation.normalize(),
            fov_y_degrees: DEFAULT_FOV_Y_DEGREES,
            aspect: 16.0 / 9.0,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }

    /// Returns the world-to-camera view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation.normalize(), self.position).inverse()
    }

    /// Returns the perspective projection matrix (0..1 depth range).
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }

    /// Returns the combined view-projection matrix.
    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Unprojects a normalized screen point into a world-space pick ray.
    ///
    /// `screen` is in `[0,1]²` with the origin at the top-left. Returns
    /// `None` for degenerate unprojections.
    #[must_use]
    pub fn screen_ray(&self, screen: Vec2) -> Option<Ray> {
        let ndc_x = screen.x * 2.0 - 1.0;
        let ndc_y = 1.0 - screen.y * 2.0;

        let inv_view_proj = self.view_projection_matrix().inverse();

        // 0..1 NDC depth range
        let near = inv_view_proj * Vec4::new(ndc_x, ndc_y, 0.0, 1.0);
        let far = inv_view_proj * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);

        if near.w.abs() < 1e-6 || far.w.abs() < 1e-6 {
            return None;
        }

        let origin = near.truncate() / near.w;
        let toward = far.truncate() / far.w;
        let direction = (toward - origin).normalize_or_zero();
        if direction.length_squared() < 1e-12 {
            return None;
        }

        Some(Ray::new(origin, direction))
    }
}
