//! Geometry synthesis for chartscope.
//!
//! Pure functions from chart data to renderable geometry:
//! - [`builder`] — sample grid → triangulated, per-vertex-colored mesh
//! - [`color_maps`] — scalar ratio → rainbow palette color
//! - [`raycast`] — ray/mesh hit testing

pub mod builder;
pub mod color_maps;
pub mod raycast;

pub use builder::{build_mesh, HEIGHT_DIVISOR, SAMPLE_RANGE};
pub use color_maps::rainbow;
pub use raycast::{intersect_triangle, pick};
