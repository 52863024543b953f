//! Configuration options for chartscope.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Default maximum pick distance along a camera ray, in world units.
pub const DEFAULT_MAX_PICK_DISTANCE: f32 = 100.0;

/// Default drag sensitivity: pixels of drag per degree of rotation.
pub const DEFAULT_DRAG_SENSITIVITY: f32 = 1.5;

/// Pose of the default chart camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Camera position in world space.
    pub position: Vec3,

    /// Camera orientation.
    pub rotation: Quat,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::new(120.0, 120.0, 120.0),
            rotation: Quat::from_xyzw(-0.121, 0.878, -0.305, -0.35),
        }
    }
}

/// Point light parameters handed to the host renderer.
///
/// The light exists for perceptual depth cues only; the mesh itself is
/// rendered unlit with vertex colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLightConfig {
    /// Light range in world units.
    pub range: f32,

    /// Brightness multiplier.
    pub brightness: f32,
}

impl Default for PointLightConfig {
    fn default() -> Self {
        Self {
            range: 600.0,
            brightness: 1.3,
        }
    }
}

/// Global configuration options for chartscope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Default camera pose for the chart scene.
    pub camera: CameraPose,

    /// Scene light parameters.
    pub light: PointLightConfig,

    /// Maximum distance along a pick ray before a hit is discarded.
    pub max_pick_distance: f32,

    /// Drag sensitivity for interactive rotation (pixels per degree).
    pub drag_sensitivity: f32,

    /// Whether to play the intro spin animation when a chart first appears.
    pub intro_spin_enabled: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            camera: CameraPose::default(),
            light: PointLightConfig::default(),
            max_pick_distance: DEFAULT_MAX_PICK_DISTANCE,
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
            intro_spin_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_defaults() {
        let options = Options::default();
        assert_eq!(options.max_pick_distance, 100.0);
        assert_eq!(options.drag_sensitivity, 1.5);
        assert!(options.intro_spin_enabled);
        assert_eq!(options.light.range, 600.0);
        assert_eq!(options.light.brightness, 1.3);
        assert_eq!(options.camera.position, Vec3::new(120.0, 120.0, 120.0));
    }

    #[test]
    fn test_options_serde_round_trip() {
        let options = Options::default();
        let json = serde_json::to_string(&options).unwrap();
        let back: Options = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }
}
