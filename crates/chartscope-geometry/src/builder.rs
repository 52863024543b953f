//! Surface mesh synthesis.
//!
//! Turns a [`SurfaceChart`]'s sample grid into a non-indexed triangle list
//! with per-vertex rainbow colors. Each interior grid cell (bounded by four
//! adjacent samples) becomes one quad, split into two triangles along its
//! top-left to bottom-right diagonal. Vertices are emitted in a fixed order
//! so winding, and therefore facing, is consistent across the whole surface.

use chartscope_core::chart::SurfaceChart;
use chartscope_core::error::{ChartError, Result};
use chartscope_core::mesh::{ChartMesh, MeshVertex};
use glam::Vec3;

use crate::color_maps::rainbow;

/// Vertical scale: raw sample counts per world-space height unit.
pub const HEIGHT_DIVISOR: f32 = 10.0;

/// Divisor normalizing a byte sample into the colormap's ratio domain.
pub const SAMPLE_RANGE: f32 = 256.0;

/// Builds the triangulated, colored surface for a chart.
///
/// The grid is walked cell by cell for `row in 1..height` and
/// `col in 1..width`, so a `width × height` grid yields
/// `(width-1) × (height-1)` quads and `2 * (width-1) * (height-1)`
/// triangles; a single-row or single-column chart yields an empty mesh.
///
/// # Errors
///
/// Returns [`ChartError::DataShape`] when the sample buffer is shorter than
/// the declared grid, instead of reading out of range.
pub fn build_mesh(chart: &SurfaceChart) -> Result<ChartMesh> {
    let expected = chart.expected_samples();
    if chart.samples.len() < expected {
        return Err(ChartError::DataShape {
            expected,
            actual: chart.samples.len(),
        });
    }

    let width = chart.width as usize;
    let height = chart.height as usize;
    let quads = width.saturating_sub(1) * height.saturating_sub(1);
    let mut mesh = ChartMesh::with_triangle_capacity(quads * 2);

    for row in 1..height {
        for col in 1..width {
            let s00 = chart.samples[(row - 1) * width + (col - 1)];
            let s10 = chart.samples[row * width + (col - 1)];
            let s11 = chart.samples[row * width + col];
            let s01 = chart.samples[(row - 1) * width + col];

            let v00 = corner_vertex(chart, row - 1, col - 1, s00);
            let v10 = corner_vertex(chart, row, col - 1, s10);
            let v11 = corner_vertex(chart, row, col, s11);
            let v01 = corner_vertex(chart, row - 1, col, s01);

            // Diagonal runs top-left to bottom-right; this vertex order
            // keeps every triangle facing up.
            mesh.push_triangle([v00, v10, v11]);
            mesh.push_triangle([v00, v11, v01]);
        }
    }

    log::debug!(
        "built {} triangles from {}x{} chart",
        mesh.triangle_count(),
        chart.width,
        chart.height
    );
    Ok(mesh)
}

/// Positions and colors one grid corner.
#[allow(clippy::cast_precision_loss)] // grid indices are far below 2^24
fn corner_vertex(chart: &SurfaceChart, row: usize, col: usize, sample: u8) -> MeshVertex {
    let x = chart.width as f32 / 2.0 - col as f32;
    let z = chart.height as f32 / 2.0 - row as f32;
    let y = f32::from(sample) / HEIGHT_DIVISOR;

    let [r, g, b] = rainbow(f32::from(sample) / SAMPLE_RANGE);
    MeshVertex::new(Vec3::new(x, y, z), [r, g, b, 255])
}

#[cfg(test)]
mod tests {
    use chartscope_core::chart::Rgba;

    use super::*;

    fn chart(width: u32, height: u32, samples: Vec<u8>) -> SurfaceChart {
        SurfaceChart::new(width, height, samples, Rgba::TRANSPARENT)
    }

    fn flat_chart(width: u32, height: u32, level: u8) -> SurfaceChart {
        chart(width, height, vec![level; (width * height) as usize])
    }

    #[test]
    fn test_triangle_and_vertex_counts() {
        for (w, h) in [(2, 2), (3, 3), (4, 2), (2, 7), (16, 9)] {
            let mesh = build_mesh(&flat_chart(w, h, 50)).unwrap();
            let expected = 2 * (w as usize - 1) * (h as usize - 1);
            assert_eq!(mesh.triangle_count(), expected, "{w}x{h}");
            assert_eq!(mesh.vertex_count(), expected * 3, "{w}x{h}");
        }
    }

    #[test]
    fn test_degenerate_grids_yield_empty_mesh() {
        assert!(build_mesh(&flat_chart(1, 1, 10)).unwrap().is_empty());
        assert!(build_mesh(&flat_chart(1, 8, 10)).unwrap().is_empty());
        assert!(build_mesh(&flat_chart(8, 1, 10)).unwrap().is_empty());
    }

    #[test]
    fn test_short_sample_buffer_is_rejected() {
        let bad = chart(3, 3, vec![0, 1, 2, 3]);
        // Still "valid" by the chart contract, but unbuildable.
        assert!(bad.is_valid());
        match build_mesh(&bad) {
            Err(ChartError::DataShape { expected, actual }) => {
                assert_eq!(expected, 9);
                assert_eq!(actual, 4);
            }
            other => panic!("expected DataShape error, got {other:?}"),
        }
    }

    #[test]
    fn test_surplus_samples_are_ignored() {
        let mesh = build_mesh(&chart(2, 2, vec![0, 0, 0, 0, 99, 99])).unwrap();
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn test_three_by_three_example() {
        let samples = vec![0, 128, 255, 128, 255, 0, 255, 0, 128];
        let mesh = build_mesh(&chart(3, 3, samples)).unwrap();
        assert_eq!(mesh.triangle_count(), 8);
        assert_eq!(mesh.vertex_count(), 24);

        // First emitted vertex is the top-left corner of cell (1,1):
        // sample 0 sits at height 0 on the blue end of the palette.
        let v00 = mesh.vertices()[0];
        assert_eq!(v00.position, Vec3::new(1.5, 0.0, 1.5));
        assert_eq!(v00.color, [0, 0, 255, 255]);

        // The first quad's corners in emission order: (s00, s10, s11) then
        // (s00, s11, s01), duplicating the shared diagonal.
        let verts = mesh.vertices();
        assert_eq!(verts[1].position, Vec3::new(1.5, 12.8, 0.5));
        assert_eq!(verts[2].position, Vec3::new(0.5, 25.5, 0.5));
        assert_eq!(verts[3].position, verts[0].position);
        assert_eq!(verts[4].position, verts[2].position);
        assert_eq!(verts[5].position, Vec3::new(0.5, 12.8, 1.5));

        // Corner colors come straight from the palette.
        assert_eq!(verts[1].color, [rainbow(0.5)[0], rainbow(0.5)[1], rainbow(0.5)[2], 255]);
        assert_eq!(verts[2].color[3], 255);
    }

    #[test]
    fn test_flat_chart_triangles_face_up() {
        let mesh = build_mesh(&flat_chart(4, 4, 77)).unwrap();
        for i in 0..mesh.triangle_count() {
            let [a, b, c] = mesh.triangle_positions(i).unwrap();
            let normal = (b - a).cross(c - a);
            assert!(normal.y > 0.0, "triangle {i} faces {normal:?}");
            assert!(normal.x.abs() < 1e-6 && normal.z.abs() < 1e-6);
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let samples: Vec<u8> = (0..64).map(|i| (i * 4) as u8).collect();
        let c = chart(8, 8, samples);
        let first = build_mesh(&c).unwrap();
        let second = build_mesh(&c).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_vertex_colors_depend_only_on_own_sample() {
        // Two charts sharing one corner sample value produce the same color
        // for that corner regardless of the neighborhood.
        let a = build_mesh(&chart(2, 2, vec![200, 0, 0, 0])).unwrap();
        let b = build_mesh(&chart(2, 2, vec![200, 255, 255, 255])).unwrap();
        assert_eq!(a.vertices()[0].color, b.vertices()[0].color);
        assert_eq!(a.vertices()[0].color[..3], rainbow(200.0 / SAMPLE_RANGE));
    }
}
