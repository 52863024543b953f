//! Global state management for chartscope.
//!
//! Chart assignment and mesh commit go through a single [`Context`] guarded
//! by a lock: the pending-chart slot is a single-producer queue of depth
//! one, and mesh replacement is an atomic swap of an immutable
//! [`Arc<ChartMesh>`]. Rotation updates serialize through the same lock, so
//! a rotation never observes a half-committed mesh.

use std::sync::{Arc, OnceLock, RwLock};

use glam::{Mat4, Quat};

use crate::chart::SurfaceChart;
use crate::error::{ChartError, Result};
use crate::mesh::ChartMesh;
use crate::options::Options;

/// Global context singleton.
static CONTEXT: OnceLock<RwLock<Context>> = OnceLock::new();

/// The global context containing all chartscope state.
pub struct Context {
    /// Whether chartscope has been initialized.
    pub initialized: bool,

    /// Global options.
    pub options: Options,

    /// Chart waiting to be meshed; replaced wholesale by newer assignments.
    pending_chart: Option<SurfaceChart>,

    /// Monotonic counter, bumped on every chart assignment.
    generation: u64,

    /// The committed mesh, if any.
    mesh: Option<Arc<ChartMesh>>,

    /// Generation of the chart the committed mesh was built from.
    mesh_generation: u64,

    /// Interactive rotation of the chart node.
    rotation: Quat,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            initialized: false,
            options: Options::default(),
            pending_chart: None,
            generation: 0,
            mesh: None,
            mesh_generation: 0,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Context {
    /// Enqueues a chart for rebuild and returns its generation number.
    ///
    /// A chart already pending but not yet built is replaced: the most
    /// recent assignment wins, matching the rebuild model where charts
    /// change rarely relative to the frame rate.
    pub fn submit_chart(&mut self, chart: SurfaceChart) -> u64 {
        self.generation += 1;
        if self.pending_chart.is_some() {
            log::debug!(
                "chart generation {} superseded before building",
                self.generation - 1
            );
        }
        self.pending_chart = Some(chart);
        self.generation
    }

    /// Dequeues the pending chart, if any, with its generation.
    pub fn take_pending(&mut self) -> Option<(SurfaceChart, u64)> {
        self.pending_chart.take().map(|c| (c, self.generation))
    }

    /// Returns whether a chart is waiting to be built.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending_chart.is_some()
    }

    /// Returns the generation of the most recently assigned chart.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replaces the committed mesh.
    pub fn commit_mesh(&mut self, mesh: Arc<ChartMesh>, generation: u64) {
        log::debug!(
            "committing mesh for chart generation {generation}: {} triangles",
            mesh.triangle_count()
        );
        self.mesh = Some(mesh);
        self.mesh_generation = generation;
    }

    /// Returns the committed mesh, if any.
    #[must_use]
    pub fn mesh(&self) -> Option<Arc<ChartMesh>> {
        self.mesh.clone()
    }

    /// Returns the generation of the chart the committed mesh was built from.
    #[must_use]
    pub fn mesh_generation(&self) -> u64 {
        self.mesh_generation
    }

    /// Returns the chart node's interactive rotation.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Sets the chart node's rotation.
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation.normalize();
    }

    /// Composes an incremental rotation onto the chart node, local space.
    pub fn rotate_by(&mut self, delta: Quat) {
        self.rotation = (self.rotation * delta).normalize();
    }

    /// Returns the chart node's model transform.
    #[must_use]
    pub fn transform(&self) -> Mat4 {
        Mat4::from_quat(self.rotation)
    }

    /// Drops the mesh and pending chart and resets the rotation.
    pub fn clear(&mut self) {
        self.pending_chart = None;
        self.mesh = None;
        self.rotation = Quat::IDENTITY;
    }
}

/// Initializes the global context.
///
/// This should be called once at the start of the program.
pub fn init_context() -> Result<()> {
    let context = RwLock::new(Context::default());

    CONTEXT
        .set(context)
        .map_err(|_| ChartError::AlreadyInitialized)?;

    with_context_mut(|ctx| {
        ctx.initialized = true;
    });

    Ok(())
}

/// Returns whether the context has been initialized.
pub fn is_initialized() -> bool {
    CONTEXT
        .get()
        .and_then(|lock| lock.read().ok())
        .is_some_and(|ctx| ctx.initialized)
}

/// Access the global context for reading.
///
/// # Panics
///
/// Panics if chartscope has not been initialized.
pub fn with_context<F, R>(f: F) -> R
where
    F: FnOnce(&Context) -> R,
{
    let lock = CONTEXT.get().expect("chartscope not initialized");
    let guard = lock.read().expect("context lock poisoned");
    f(&guard)
}

/// Access the global context for writing.
///
/// # Panics
///
/// Panics if chartscope has not been initialized.
pub fn with_context_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut Context) -> R,
{
    let lock = CONTEXT.get().expect("chartscope not initialized");
    let mut guard = lock.write().expect("context lock poisoned");
    f(&mut guard)
}

/// Try to access the global context for reading.
///
/// Returns `None` if chartscope has not been initialized.
pub fn try_with_context<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&Context) -> R,
{
    let lock = CONTEXT.get()?;
    let guard = lock.read().ok()?;
    Some(f(&guard))
}

/// Try to access the global context for writing.
///
/// Returns `None` if chartscope has not been initialized.
pub fn try_with_context_mut<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut Context) -> R,
{
    let lock = CONTEXT.get()?;
    let mut guard = lock.write().ok()?;
    Some(f(&mut guard))
}

/// Shuts down the global context.
///
/// Note: Due to `OnceLock` semantics, the context cannot be re-initialized
/// after shutdown in the same process.
pub fn shutdown_context() {
    if let Some(lock) = CONTEXT.get() {
        if let Ok(mut ctx) = lock.write() {
            ctx.initialized = false;
            ctx.clear();
        }
    }
}
