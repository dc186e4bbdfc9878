//! Backend abstraction for geometry draws
//!
//! The render core issues draw calls through this trait; the GPU
//! collaborator implements it over whatever graphics API owns the buffers
//! behind the [`BufferKey`](crate::render::BufferKey)s. The crate ships no
//! GPU implementation; tests use a recording mock.

use crate::foundation::math::Mat4;
use crate::render::primitives::RenderLayer;
use crate::render::RenderError;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, RenderError>;

/// Draw interface the dispatcher drives once per frame
///
/// Calls arrive in a fixed sequence: `set_viewport`, `clear`,
/// `set_transform`, then one `draw` per geometry layer in layering order.
/// No call suspends; the whole sequence runs inside one frame's budget.
pub trait DrawBackend {
    /// Resize the drawing viewport to the canvas pixel dimensions
    fn set_viewport(&mut self, width: u32, height: u32);

    /// Clear the color buffer
    fn clear(&mut self);

    /// Upload the composed camera transform, once per frame
    fn set_transform(&mut self, camera_to_clip: &Mat4);

    /// Draw one geometry layer
    ///
    /// # Errors
    /// Backend-specific failures surface as
    /// [`RenderError::Backend`](crate::render::RenderError::Backend); the
    /// dispatcher aborts the frame on the first failed draw.
    fn draw(&mut self, layer: &RenderLayer) -> BackendResult<()>;
}
