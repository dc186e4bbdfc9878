//! # Phylo Render
//!
//! Per-frame rendering core for interactive visualization of large
//! phylogenetic trees: a virtual-camera transform pipeline and a
//! viewport-constrained label placement algorithm, driven once per display
//! refresh by an external frame scheduler.
//!
//! ## What lives here
//!
//! - **Camera / projection models**: view transform from camera and world
//!   state, asymmetric-frustum perspective from a four-sided field of view
//! - **Viewport culler**: the axis-aligned visible rectangle in tree space,
//!   the single source of truth for which labels count as on screen
//! - **Label placer**: budget-limited, priority-ordered label selection
//!   with ancestor-overlap suppression, projected to pixel coordinates
//! - **Frame dispatcher**: fixed-order geometry draws plus the two label
//!   passes, issued against an abstract draw backend
//!
//! ## What lives elsewhere
//!
//! GPU buffer construction, input handling that mutates the camera, tree
//! loading, and visual styling belong to collaborators. They meet this
//! crate at the [`render::DrawBackend`] and [`render::LabelOverlay`] seams
//! and at the plain data types in [`render`] and [`tree`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use phylo_render::prelude::*;
//!
//! # fn scene_layers() -> SceneLayers { unimplemented!() }
//! # fn backend() -> Box<dyn DrawBackend> { unimplemented!() }
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = RenderSettings::load_from_file("render.toml")?;
//! settings.validate()?;
//! let mut renderer = FrameRenderer::new(settings.projection()?, settings.taxonomy_prefix.clone());
//!
//! let mut tree = TreeArena::with_root("N1");
//! let tip = tree.insert("T1", "N1")?;
//! tree.set_metadata(tip, "tax_Genus", "Escherichia");
//!
//! let candidates = vec![LabelCandidate { x: 0.0, y: 0.0, id: "T1".into(), node: tip }];
//! let mut tip_overlay: Vec<PlacedLabel> = Vec::new();
//! let mut node_overlay: Vec<PlacedLabel> = Vec::new();
//! let mut backend = backend();
//!
//! // Once per display refresh:
//! let ctx = FrameContext::new(Camera::default(), WorldTransform::identity(), 800, 600);
//! let stats = renderer.render_frame(
//!     &ctx,
//!     &scene_layers(),
//!     &tree,
//!     &LabelPass { candidates: &candidates, level: "Genus", budget: settings.tip_label_budget },
//!     &mut tip_overlay,
//!     &LabelPass { candidates: &[], level: "Genus", budget: settings.node_label_budget },
//!     &mut node_overlay,
//!     backend.as_mut(),
//! )?;
//! # let _ = stats;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod render;
pub mod tree;

pub use config::{Config, ConfigError, RenderSettings};
pub use render::RenderError;
pub use tree::{NodeId, TreeArena, TreeError};

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, RenderSettings},
        foundation::math::{Mat4, Vec3, Vec4},
        render::{
            BufferKey, Camera, DrawBackend, FieldOfView, FrameContext, FrameRenderer, FrameStats,
            LabelCandidate, LabelOverlay, LabelPass, PlacedLabel, PrimitiveKind, Projection,
            RenderError, RenderLayer, SceneLayers, Vertex, VisibleBounds, WorldTransform,
        },
        tree::{NodeId, TreeArena, TreeError},
    };
}
