//! Scene layout hints for the host renderer.
//!
//! Chartscope does not own a scene graph; it describes the one the host
//! should assemble: a chart node carrying the mesh, a background plane
//! scaled to the chart footprint, a posed camera and a point light.

use chartscope_core::chart::{Rgba, SurfaceChart};
use chartscope_core::options::{CameraPose, Options, PointLightConfig};
use glam::Vec3;

/// Node name for the chart surface geometry.
pub const CHART_NODE: &str = "chart";

/// Node name for the supporting background plane.
pub const PLANE_NODE: &str = "plane";

/// Node name for the scene camera.
pub const CAMERA_NODE: &str = "camera";

/// Node name for the scene light.
pub const LIGHT_NODE: &str = "light";

/// Scale for the background plane supporting a chart: twice the grid
/// footprint on each horizontal axis.
#[must_use]
#[allow(clippy::cast_precision_loss)] // grid dimensions are far below 2^24
pub fn background_plane_scale(chart: &SurfaceChart) -> Vec3 {
    Vec3::new(chart.width as f32 * 2.0, 1.0, chart.height as f32 * 2.0)
}

/// Static scene description handed to the host renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLayout {
    /// Viewport clear color.
    pub clear_color: Rgba,

    /// Default camera pose.
    pub camera: CameraPose,

    /// Point light parameters.
    pub light: PointLightConfig,

    /// Background plane scale, when a valid chart is present.
    pub plane_scale: Option<Vec3>,
}

impl SceneLayout {
    /// Describes the scene for the given chart, if any.
    ///
    /// Without a valid chart the viewport clears to transparent and no
    /// background plane is placed.
    #[must_use]
    pub fn for_chart(chart: Option<&SurfaceChart>, options: &Options) -> Self {
        let valid = chart.filter(|c| c.is_valid());
        Self {
            clear_color: valid.map_or(Rgba::TRANSPARENT, |c| c.background),
            camera: options.camera,
            light: options.light,
            plane_scale: valid.map(background_plane_scale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_scale_doubles_footprint() {
        let chart = SurfaceChart::new(3, 4, vec![0; 12], Rgba::TRANSPARENT);
        assert_eq!(background_plane_scale(&chart), Vec3::new(6.0, 1.0, 8.0));
    }

    #[test]
    fn test_layout_for_valid_chart() {
        let chart = SurfaceChart::new(2, 2, vec![0; 4], Rgba::new(10, 20, 30, 255));
        let layout = SceneLayout::for_chart(Some(&chart), &Options::default());
        assert_eq!(layout.clear_color, Rgba::new(10, 20, 30, 255));
        assert_eq!(layout.plane_scale, Some(Vec3::new(4.0, 1.0, 4.0)));
        assert_eq!(layout.light.range, 600.0);
    }

    #[test]
    fn test_layout_without_chart_is_bare() {
        let layout = SceneLayout::for_chart(None, &Options::default());
        assert_eq!(layout.clear_color, Rgba::TRANSPARENT);
        assert!(layout.plane_scale.is_none());

        let invalid = SurfaceChart::default();
        let layout = SceneLayout::for_chart(Some(&invalid), &Options::default());
        assert_eq!(layout.clear_color, Rgba::TRANSPARENT);
        assert!(layout.plane_scale.is_none());
    }
}
