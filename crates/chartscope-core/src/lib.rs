//! Core abstractions for chartscope.
//!
//! This crate provides the fundamental types used throughout chartscope:
//! - [`SurfaceChart`] — the grid-of-samples input descriptor supplied by the host
//! - [`ChartMesh`] / [`MeshVertex`] — the derived, upload-ready triangle list
//! - [`Ray`] / [`RayHit`] — ray picking types
//! - Global state management ([`state`]) with generation-counted rebuilds
//! - Configuration options and error types

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod chart;
pub mod error;
pub mod mesh;
pub mod options;
pub mod pick;
pub mod state;

pub use chart::{Rgba, SurfaceChart};
pub use error::{ChartError, Result};
pub use mesh::{ChartMesh, MeshVertex};
pub use options::{CameraPose, Options, PointLightConfig};
pub use pick::{Ray, RayHit};
pub use state::{with_context, with_context_mut, Context};

// Re-export glam types for convenience
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
