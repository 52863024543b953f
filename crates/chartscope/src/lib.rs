//! chartscope: a Rust-native 3D surface chart core.
//!
//! Chartscope turns a rectangular grid of scalar height samples into a
//! colored, rotatable triangle mesh and answers camera-ray hit tests
//! against it. Windowing and GPU work stay with the host: chartscope hands
//! back upload-ready vertex data and scene layout hints instead of owning a
//! renderer.
//!
//! # Quick Start
//!
//! ```no_run
//! use chartscope::*;
//!
//! fn main() -> Result<()> {
//!     init()?;
//!
//!     // Assign a chart; meshing happens on the next frame step.
//!     let samples = vec![0, 128, 255, 128, 255, 0, 255, 0, 128];
//!     set_chart(SurfaceChart::new(3, 3, samples, Rgba::TRANSPARENT))?;
//!     process_frame()?;
//!
//!     let mesh = current_mesh().expect("mesh committed");
//!     println!("{} triangles", mesh.triangle_count());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The host assigns charts with [`set_chart`]; each assignment bumps a
//! generation counter and parks the chart in a depth-one rebuild queue.
//! Once per frame the host calls [`process_frame`], which meshes at most
//! one pending chart and swaps it in atomically - interactive rotation via
//! [`rotate_chart`] can never observe a half-built mesh. Taps arrive as
//! normalized screen points, become rays through a [`Camera`], and resolve
//! to surface hits with [`pick_at`].

mod animation;
mod camera;
mod scene;

pub use animation::{
    ease_back_out, SpinAnimation, DEFAULT_SPIN_DURATION, DEFAULT_SPIN_YAW_DEGREES,
};
pub use camera::{Camera, DEFAULT_FAR, DEFAULT_FOV_Y_DEGREES, DEFAULT_NEAR};
pub use scene::{
    background_plane_scale, SceneLayout, CAMERA_NODE, CHART_NODE, LIGHT_NODE, PLANE_NODE,
};

// Re-export core types
pub use chartscope_core::{
    chart::{Rgba, SurfaceChart},
    error::{ChartError, Result},
    mesh::{ChartMesh, MeshVertex},
    options::{CameraPose, Options, PointLightConfig},
    pick::{Ray, RayHit},
    state::{with_context, with_context_mut, Context},
    Mat4, Quat, Vec2, Vec3, Vec4,
};

// Re-export geometry entry points
pub use chartscope_geometry::{build_mesh, rainbow, HEIGHT_DIVISOR, SAMPLE_RANGE};

use std::sync::Arc;

/// Initializes chartscope with default settings.
///
/// This must be called before any other chartscope functions.
pub fn init() -> Result<()> {
    let _ = env_logger::try_init();
    chartscope_core::state::init_context()?;
    log::info!("chartscope initialized");
    Ok(())
}

/// Returns whether chartscope has been initialized.
#[must_use]
pub fn is_initialized() -> bool {
    chartscope_core::state::is_initialized()
}

/// Shuts down chartscope and drops all scene state.
pub fn shutdown() {
    chartscope_core::state::shutdown_context();
    log::info!("chartscope shut down");
}

/// Assigns a new chart and schedules a rebuild.
///
/// Returns the chart's generation number. The mesh is not rebuilt here;
/// the next [`process_frame`] call picks the chart up. Assigning again
/// before that frame replaces the pending chart (last writer wins).
pub fn set_chart(chart: SurfaceChart) -> Result<u64> {
    chartscope_core::state::try_with_context_mut(|ctx| ctx.submit_chart(chart))
        .ok_or(ChartError::NotInitialized)
}

/// Frame step: applies at most one pending rebuild.
///
/// Invalid charts are skipped silently and leave the previous mesh
/// committed. Returns whether a new mesh was committed.
///
/// # Errors
///
/// Returns [`ChartError::DataShape`] when the pending chart declares more
/// grid points than it carries samples.
pub fn process_frame() -> Result<bool> {
    let pending = chartscope_core::state::try_with_context_mut(Context::take_pending)
        .ok_or(ChartError::NotInitialized)?;

    let Some((chart, generation)) = pending else {
        return Ok(false);
    };

    if !chart.is_valid() {
        log::debug!("skipping rebuild for invalid chart (generation {generation})");
        return Ok(false);
    }

    // Build outside the context lock; the swap below is the atomic part.
    let mesh = Arc::new(build_mesh(&chart)?);
    with_context_mut(|ctx| ctx.commit_mesh(mesh, generation));
    Ok(true)
}

/// Returns the committed mesh, if any.
#[must_use]
pub fn current_mesh() -> Option<Arc<ChartMesh>> {
    chartscope_core::state::try_with_context(Context::mesh).flatten()
}

/// Returns the generation of the most recently assigned chart.
#[must_use]
pub fn chart_generation() -> u64 {
    chartscope_core::state::try_with_context(Context::generation).unwrap_or(0)
}

/// Returns the generation of the chart the committed mesh was built from.
#[must_use]
pub fn mesh_generation() -> u64 {
    chartscope_core::state::try_with_context(Context::mesh_generation).unwrap_or(0)
}

/// Applies a drag delta (in pixels) as an incremental chart rotation.
///
/// Horizontal drag yaws, vertical drag pitches; sensitivity comes from
/// [`Options::drag_sensitivity`].
pub fn rotate_chart(delta: Vec2) {
    let _ = chartscope_core::state::try_with_context_mut(|ctx| {
        let sensitivity = ctx.options.drag_sensitivity;
        let yaw = (-delta.x / sensitivity).to_radians();
        let pitch = (-delta.y / sensitivity).to_radians();
        ctx.rotate_by(Quat::from_euler(glam::EulerRot::YXZ, yaw, pitch, 0.0));
    });
}

/// Returns the chart node's interactive rotation.
#[must_use]
pub fn chart_rotation() -> Quat {
    chartscope_core::state::try_with_context(Context::rotation).unwrap_or(Quat::IDENTITY)
}

/// Returns the chart node's model transform.
#[must_use]
pub fn chart_transform() -> Mat4 {
    chartscope_core::state::try_with_context(Context::transform).unwrap_or(Mat4::IDENTITY)
}

/// Resets the chart node's rotation to identity.
pub fn reset_chart_rotation() {
    let _ = chartscope_core::state::try_with_context_mut(|ctx| ctx.set_rotation(Quat::IDENTITY));
}

/// Picks the committed mesh with a world-space ray.
///
/// The chart node's current rotation is honored; the nearest triangle hit
/// within [`Options::max_pick_distance`] wins. Returns `None` on a miss or
/// when no mesh is committed.
#[must_use]
pub fn pick(ray: &Ray) -> Option<RayHit> {
    let (mesh, rotation, max_distance) = chartscope_core::state::try_with_context(|ctx| {
        (ctx.mesh(), ctx.rotation(), ctx.options.max_pick_distance)
    })?;
    let mesh = mesh?;

    // Rotations preserve length, so `t` carries over unchanged; pick in
    // model space with the inversely rotated ray.
    let inverse = rotation.inverse();
    let model_ray = Ray::new(inverse * ray.origin, inverse * ray.direction);
    let hit = chartscope_geometry::pick(&model_ray, &mesh, max_distance)?;

    Some(RayHit {
        triangle: hit.triangle,
        position: rotation * hit.position,
        t: hit.t,
    })
}

/// Converts a normalized screen point into a camera ray and picks with it.
///
/// `screen` is in `[0,1]²` with the origin at the top-left, the way hosts
/// deliver tap positions.
#[must_use]
pub fn pick_at(screen: Vec2, camera: &Camera) -> Option<RayHit> {
    let ray = camera.screen_ray(screen)?;
    pick(&ray)
}

/// Returns a copy of the global options.
#[must_use]
pub fn options() -> Options {
    chartscope_core::state::try_with_context(|ctx| ctx.options).unwrap_or_default()
}

/// Replaces the global options.
pub fn set_options(options: Options) {
    let _ = chartscope_core::state::try_with_context_mut(|ctx| ctx.options = options);
}
