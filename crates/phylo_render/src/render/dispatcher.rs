//! Fixed-order frame dispatch
//!
//! One call per display refresh: rebuild the transform set, clear, draw the
//! geometry layers back-to-front in a fixed order, then run the two label
//! passes. The dispatcher owns the validated projection and the label
//! placer scratch; everything else arrives per frame.

use crate::render::backend::DrawBackend;
use crate::render::frame::{FrameContext, FrameTransforms};
use crate::render::primitives::{Projection, RenderLayer};
use crate::render::systems::labels::{LabelCandidate, LabelOverlay, LabelPlacer};
use crate::render::viewport::VisibleBounds;
use crate::render::RenderError;
use crate::tree::TreeArena;

/// The per-frame geometry layers, in drawing order
///
/// Later layers draw visually on top of earlier ones. Layers may be empty
/// (zero vertices) on any given frame; they are still dispatched so the
/// order stays fixed. The node-point and branch-line layers typically share
/// one buffer and differ only in primitive kind.
#[derive(Debug, Clone, Copy)]
pub struct SceneLayers {
    /// Highlighted-clade fill triangles, drawn first (bottom)
    pub highlighted_clades: RenderLayer,
    /// All tree node points
    pub node_points: RenderLayer,
    /// The hovered node point, drawn over the node layer
    pub hovered_node: RenderLayer,
    /// All tree branch line segments
    pub branch_lines: RenderLayer,
    /// Line segments of the active selection path
    pub selection_path: RenderLayer,
    /// Generic triangle overlays
    pub triangles: RenderLayer,
    /// Highlighted triangle overlays, drawn last (top)
    pub highlighted_triangles: RenderLayer,
}

impl SceneLayers {
    /// The layers in their fixed dispatch order
    fn in_draw_order(&self) -> [&RenderLayer; 7] {
        [
            &self.highlighted_clades,
            &self.node_points,
            &self.hovered_node,
            &self.branch_lines,
            &self.selection_path,
            &self.triangles,
            &self.highlighted_triangles,
        ]
    }
}

/// Inputs for one label category
///
/// The UI-state collaborator supplies the selected taxonomic level and the
/// label budget; the candidate list comes pre-sorted in priority order from
/// the geometry collaborator.
#[derive(Debug, Clone, Copy)]
pub struct LabelPass<'a> {
    /// Candidates in priority order
    pub candidates: &'a [LabelCandidate],
    /// Selected taxonomic level, composed with the taxonomy prefix into
    /// the metadata key
    pub level: &'a str,
    /// Maximum labels to place in this pass
    pub budget: usize,
}

/// Label counts produced by one frame
///
/// A testability affordance; nothing downstream consumes it across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    /// Labels placed by the tip pass
    pub tip_labels_placed: usize,
    /// Labels placed by the node pass
    pub node_labels_placed: usize,
}

/// Per-frame render coordinator
///
/// Drives a [`DrawBackend`] through the fixed frame sequence and runs label
/// placement for both categories. Holds no per-frame state: the transform
/// set and visible bounds are rebuilt from the [`FrameContext`] on every
/// call, so each invocation fully supersedes the previous frame's output.
#[derive(Debug)]
pub struct FrameRenderer {
    projection: Projection,
    taxonomy_prefix: String,
    placer: LabelPlacer,
}

impl FrameRenderer {
    /// Create a renderer from a validated projection
    pub fn new(projection: Projection, taxonomy_prefix: impl Into<String>) -> Self {
        Self {
            projection,
            taxonomy_prefix: taxonomy_prefix.into(),
            placer: LabelPlacer::new(),
        }
    }

    /// The projection this renderer applies every frame
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Render one frame
    ///
    /// Sequence: resize the backend viewport to the canvas, rebuild the
    /// transform set from the context, clear, upload the composed transform
    /// once, dispatch the seven geometry layers in their fixed order, then
    /// place tip labels and node labels into their overlays.
    ///
    /// # Errors
    /// Propagates the first backend draw failure and aborts the remainder
    /// of the frame; the next invocation starts from scratch.
    pub fn render_frame(
        &mut self,
        ctx: &FrameContext,
        scene: &SceneLayers,
        tree: &TreeArena,
        tip_pass: &LabelPass<'_>,
        tip_overlay: &mut dyn LabelOverlay,
        node_pass: &LabelPass<'_>,
        node_overlay: &mut dyn LabelOverlay,
        backend: &mut dyn DrawBackend,
    ) -> Result<FrameStats, RenderError> {
        backend.set_viewport(ctx.canvas_width, ctx.canvas_height);

        let transforms = FrameTransforms::compute(ctx, &self.projection);

        backend.clear();
        backend.set_transform(&transforms.camera_to_clip);

        for layer in scene.in_draw_order() {
            backend.draw(layer)?;
        }

        let bounds = VisibleBounds::compute(&ctx.camera, &ctx.world);
        log::trace!(
            "visible bounds x [{}, {}] y [{}, {}]",
            bounds.min_x,
            bounds.max_x,
            bounds.min_y,
            bounds.max_y
        );

        let tip_labels_placed = self.placer.place(
            tip_pass.candidates,
            tree,
            &self.taxonomy_prefix,
            tip_pass.level,
            tip_pass.budget,
            &bounds,
            &transforms,
            ctx,
            tip_overlay,
        );
        let node_labels_placed = self.placer.place(
            node_pass.candidates,
            tree,
            &self.taxonomy_prefix,
            node_pass.level,
            node_pass.budget,
            &bounds,
            &transforms,
            ctx,
            node_overlay,
        );

        Ok(FrameStats {
            tip_labels_placed,
            node_labels_placed,
        })
    }
}
