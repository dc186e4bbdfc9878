//! Fixed vertex layout shared by every geometry layer
//!
//! All layers use the same interleaved layout: two position floats followed
//! by three color floats. The geometry-building collaborator fills buffers
//! in this layout; the render core only needs it to derive vertex counts
//! and to describe attribute offsets to a backend.

use bytemuck::{Pod, Zeroable};

/// Floats per vertex across every layer
pub const FLOATS_PER_VERTEX: usize = 5;

/// Leading position floats (x, y)
pub const POSITION_FLOATS: usize = 2;

/// Trailing color floats (r, g, b)
pub const COLOR_FLOATS: usize = 3;

/// One interleaved vertex: 2D position plus RGB color
///
/// `#[repr(C)]` and Pod so vertex slices can be handed to a GPU upload path
/// as raw bytes without copying.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in tree space
    pub position: [f32; 2],
    /// RGB color, each channel in [0, 1]
    pub color: [f32; 3],
}

impl Vertex {
    /// Create a vertex from position and color components
    pub fn new(x: f32, y: f32, r: f32, g: f32, b: f32) -> Self {
        Self {
            position: [x, y],
            color: [r, g, b],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_five_packed_floats() {
        assert_eq!(
            std::mem::size_of::<Vertex>(),
            FLOATS_PER_VERTEX * std::mem::size_of::<f32>()
        );
        assert_eq!(POSITION_FLOATS + COLOR_FLOATS, FLOATS_PER_VERTEX);
    }

    #[test]
    fn vertex_slices_cast_to_raw_floats() {
        let vertices = [Vertex::new(1.0, 2.0, 0.1, 0.2, 0.3)];
        let floats: &[f32] = bytemuck::cast_slice(&vertices);
        assert_eq!(floats, &[1.0, 2.0, 0.1, 0.2, 0.3]);
    }
}
