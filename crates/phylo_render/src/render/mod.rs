//! # Rendering pipeline
//!
//! The per-frame core: camera and projection models, the visible-window
//! culler, label placement, and the fixed-order frame dispatcher. External
//! collaborators plug in at two seams, [`DrawBackend`] for geometry draws
//! and [`LabelOverlay`] for the placed-label overlay, and feed the frame
//! through a read-only [`FrameContext`].
//!
//! ## Per-frame data flow
//!
//! 1. [`FrameTransforms::compute`] rebuilds view, projection, and the
//!    composed camera transform from the context snapshot.
//! 2. [`FrameRenderer::render_frame`] clears, uploads the composed
//!    transform, and dispatches the geometry layers in fixed order.
//! 3. [`VisibleBounds::compute`] derives the on-screen rectangle in tree
//!    space from the live camera depth.
//! 4. The label passes filter, suppress, and project candidates into the
//!    overlay sinks.
//!
//! Nothing here is cached across frames; each invocation recomputes the
//! full transform set and rebuilds both overlays.

pub mod backend;
pub mod dispatcher;
pub mod frame;
pub mod primitives;
pub mod systems;
pub mod viewport;

pub use backend::{BackendResult, DrawBackend};
pub use dispatcher::{FrameRenderer, FrameStats, LabelPass, SceneLayers};
pub use frame::{FrameContext, FrameTransforms, WorldTransform};
pub use primitives::{
    BufferKey, Camera, FieldOfView, PrimitiveKind, Projection, RenderLayer, Vertex,
};
pub use systems::labels::{LabelCandidate, LabelOverlay, LabelPlacer, PlacedLabel};
pub use viewport::VisibleBounds;

use thiserror::Error;

/// Errors surfaced by the rendering pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Projection parameters rejected at construction time
    #[error("invalid projection: {0}")]
    InvalidProjection(String),

    /// A backend draw operation failed
    #[error("backend error: {0}")]
    Backend(String),
}
