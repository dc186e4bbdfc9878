//! Geometry layer descriptors
//!
//! A [`RenderLayer`] names a GPU vertex buffer (owned by the external
//! geometry collaborator, addressed by a slotmap key), the primitive kind
//! it draws as, and how many vertices to draw. Vertex counts derive from
//! stored float counts via the fixed five-float layout.

use slotmap::new_key_type;

use super::vertex::{Vertex, FLOATS_PER_VERTEX};

new_key_type! {
    /// Handle to a GPU vertex buffer owned by the geometry collaborator
    ///
    /// The render core never dereferences this; it only passes it back to
    /// the [`DrawBackend`](crate::render::DrawBackend) that understands it.
    pub struct BufferKey;
}

/// Primitive topology of a geometry layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// One point per vertex
    Points,
    /// Independent segments, two vertices each
    Lines,
    /// Independent triangles, three vertices each
    Triangles,
}

/// One drawable geometry layer
#[derive(Debug, Clone, Copy)]
pub struct RenderLayer {
    /// Buffer holding the layer's interleaved vertex data
    pub buffer: BufferKey,
    /// How the vertices are assembled
    pub primitive: PrimitiveKind,
    /// Number of vertices to draw
    pub vertex_count: u32,
}

impl RenderLayer {
    /// Describe a layer whose buffer holds `float_count` floats
    ///
    /// The count is the raw length of the stored vertex array; the vertex
    /// count is that length divided by the five floats per vertex.
    pub fn from_float_count(buffer: BufferKey, primitive: PrimitiveKind, float_count: usize) -> Self {
        Self {
            buffer,
            primitive,
            vertex_count: u32::try_from(float_count / FLOATS_PER_VERTEX)
                .expect("layer exceeds u32 vertices"),
        }
    }

    /// Describe a layer from a typed vertex slice
    pub fn from_vertices(buffer: BufferKey, primitive: PrimitiveKind, vertices: &[Vertex]) -> Self {
        Self {
            buffer,
            primitive,
            vertex_count: u32::try_from(vertices.len()).expect("layer exceeds u32 vertices"),
        }
    }

    /// Whether the layer draws nothing this frame
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn key() -> BufferKey {
        let mut buffers: SlotMap<BufferKey, ()> = SlotMap::with_key();
        buffers.insert(())
    }

    #[test]
    fn vertex_count_is_float_count_over_five() {
        let layer = RenderLayer::from_float_count(key(), PrimitiveKind::Lines, 30);
        assert_eq!(layer.vertex_count, 6);
        assert!(!layer.is_empty());
    }

    #[test]
    fn empty_layer_draws_nothing() {
        let layer = RenderLayer::from_float_count(key(), PrimitiveKind::Triangles, 0);
        assert!(layer.is_empty());
    }

    #[test]
    fn typed_slice_count_matches() {
        let vertices = vec![Vertex::new(0.0, 0.0, 0.0, 0.0, 0.0); 4];
        let layer = RenderLayer::from_vertices(key(), PrimitiveKind::Points, &vertices);
        assert_eq!(layer.vertex_count, 4);
    }
}
