//! Viewport-constrained label placement with ancestor suppression
//!
//! Each frame the placer rebuilds an overlay of at most N readable labels
//! from a priority-ordered candidate list: candidates outside the visible
//! window are skipped, candidates whose ancestor already holds a label this
//! frame are suppressed, and survivors are projected through the composed
//! camera transform to pixel coordinates. There is no diffing: the overlay
//! is discarded and rebuilt from scratch every frame.
//!
//! On deep trees the ancestor walks dominate the cost, so suppression
//! verdicts are memoized per node per frame. A "blocked" verdict can never
//! be invalidated (the accepted set only grows), so it is cached
//! unconditionally; a "clear" verdict can be invalidated by a later
//! acceptance, so it is stamped with the acceptance epoch and re-checked
//! once a new label lands.

use crate::foundation::math::Vec4;
use crate::render::frame::{FrameContext, FrameTransforms};
use crate::render::viewport::VisibleBounds;
use crate::tree::{NodeId, TreeArena};

/// One label candidate in tree space
///
/// Candidates arrive in a fixed priority order; earlier entries win the
/// budget and win mutual-exclusion races against their descendants.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelCandidate {
    /// Tree-space x coordinate of the label anchor
    pub x: f32,
    /// Tree-space y coordinate of the label anchor
    pub y: f32,
    /// Opaque identifier carried through to the placed label
    pub id: String,
    /// Node the label belongs to
    pub node: NodeId,
}

/// One label placed on the overlay this frame
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel {
    /// Floored pixel x coordinate, origin at the canvas top-left
    pub pixel_x: i32,
    /// Floored pixel y coordinate, origin at the canvas top-left
    pub pixel_y: i32,
    /// Display text from the node's metadata
    pub text: String,
    /// Identifier copied from the candidate
    pub id: String,
}

/// Overlay sink that receives the rebuilt labels
///
/// One container per label category; the surface collaborator implements
/// this over its DOM-equivalent container. `Vec<PlacedLabel>` implements it
/// for tests and headless use.
pub trait LabelOverlay {
    /// Discard all labels placed in previous frames
    fn clear(&mut self);

    /// Add one label for this frame
    fn place(&mut self, label: PlacedLabel);
}

impl LabelOverlay for Vec<PlacedLabel> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn place(&mut self, label: PlacedLabel) {
        self.push(label);
    }
}

/// Per-node suppression verdict for the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
enum Verdict {
    Unknown,
    /// No accepted ancestor as of the stamped acceptance epoch
    Clear(u32),
    /// This node or an ancestor holds a label; permanent within the frame
    Blocked,
}

/// Budget-limited label selector and projector
///
/// Holds only reusable scratch storage; all per-frame inputs arrive through
/// [`place`](Self::place), and every frame starts from an empty accepted
/// set. One placer instance serves any number of passes per frame.
#[derive(Debug, Default)]
pub struct LabelPlacer {
    memo: Vec<Verdict>,
    accepted: Vec<bool>,
    chain: Vec<NodeId>,
    epoch: u32,
}

impl LabelPlacer {
    /// Create a placer with empty scratch storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild one overlay from a candidate list
    ///
    /// Walks `candidates` in priority order and accepts at most `budget` of
    /// them. A candidate is skipped when its node lacks metadata under the
    /// composed `prefix` + `level` key (non-fatal, logged), when its anchor
    /// lies outside `bounds`, or when an ancestor below the root sentinel
    /// was already accepted this pass. Accepted anchors are projected
    /// through the composed camera transform, perspective-divided, mapped
    /// to pixels with the canvas dimensions from `ctx` (y flipped: screen
    /// origin is top-left, clip-space y grows upward), floored, and placed
    /// on `overlay`.
    ///
    /// Returns the number of labels placed.
    pub fn place(
        &mut self,
        candidates: &[LabelCandidate],
        arena: &TreeArena,
        prefix: &str,
        level: &str,
        budget: usize,
        bounds: &VisibleBounds,
        transforms: &FrameTransforms,
        ctx: &FrameContext,
        overlay: &mut dyn LabelOverlay,
    ) -> usize {
        overlay.clear();
        self.reset(arena.len());

        if budget == 0 {
            return 0;
        }

        let key = crate::tree::metadata_key(prefix, level);
        let width = ctx.canvas_width as f32;
        let height = ctx.canvas_height as f32;
        let mut placed = 0usize;

        for candidate in candidates {
            let Some(text) = arena.metadata(candidate.node, &key) else {
                log::debug!(
                    "label candidate {:?} skipped: node {:?} has no {:?} metadata",
                    candidate.id,
                    arena.name(candidate.node),
                    key
                );
                continue;
            };
            if !bounds.contains(candidate.x, candidate.y) {
                continue;
            }
            if self.suppressed_by_ancestor(arena, candidate.node) {
                continue;
            }

            let clip = transforms.camera_to_clip * Vec4::new(candidate.x, candidate.y, 0.0, 1.0);
            let ndc_x = clip.x / clip.w;
            let ndc_y = clip.y / clip.w;
            #[allow(clippy::cast_possible_truncation)]
            let pixel_x = (ndc_x.mul_add(0.5, 0.5) * width).floor() as i32;
            #[allow(clippy::cast_possible_truncation)]
            let pixel_y = (ndc_y.mul_add(-0.5, 0.5) * height).floor() as i32;

            overlay.place(PlacedLabel {
                pixel_x,
                pixel_y,
                text: text.to_string(),
                id: candidate.id.clone(),
            });
            self.accept(candidate.node);

            placed += 1;
            if placed == budget {
                break;
            }
        }

        placed
    }

    /// Start a fresh pass: empty accepted set, unknown verdicts
    fn reset(&mut self, arena_len: usize) {
        self.memo.clear();
        self.memo.resize(arena_len, Verdict::Unknown);
        self.accepted.clear();
        self.accepted.resize(arena_len, false);
        self.chain.clear();
        self.epoch = 0;
    }

    /// Record an acceptance and invalidate stale clear verdicts
    fn accept(&mut self, node: NodeId) {
        self.accepted[node.index()] = true;
        self.memo[node.index()] = Verdict::Blocked;
        self.epoch += 1;
    }

    /// Whether any strict ancestor of `node` (excluding the root sentinel)
    /// already holds a label this pass
    ///
    /// Walks the parent chain until it hits the root, an accepted node, or
    /// a usable memoized verdict, then writes the verdict back along the
    /// visited prefix so sibling candidates reuse it.
    fn suppressed_by_ancestor(&mut self, arena: &TreeArena, node: NodeId) -> bool {
        let root = arena.root();
        let mut current = arena.parent(node);
        let mut blocked = false;

        self.chain.clear();
        while current != root {
            match self.memo[current.index()] {
                Verdict::Blocked => {
                    blocked = true;
                    break;
                }
                Verdict::Clear(epoch) if epoch == self.epoch => break,
                Verdict::Unknown | Verdict::Clear(_) => {}
            }
            if self.accepted[current.index()] {
                self.chain.push(current);
                blocked = true;
                break;
            }
            self.chain.push(current);
            current = arena.parent(current);
        }

        let verdict = if blocked {
            Verdict::Blocked
        } else {
            Verdict::Clear(self.epoch)
        };
        for visited in self.chain.drain(..) {
            self.memo[visited.index()] = verdict;
        }

        blocked
    }
}
