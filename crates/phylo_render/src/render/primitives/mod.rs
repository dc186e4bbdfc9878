//! Core rendering primitives
//!
//! Plain data types shared between the render core and its collaborators:
//! the camera, the validated projection, the fixed vertex layout, and the
//! geometry layer descriptors that reference externally owned GPU buffers.

pub mod camera;
pub mod layer;
pub mod projection;
pub mod vertex;

pub use camera::Camera;
pub use layer::{BufferKey, PrimitiveKind, RenderLayer};
pub use projection::{FieldOfView, Projection};
pub use vertex::{Vertex, COLOR_FLOATS, FLOATS_PER_VERTEX, POSITION_FLOATS};
