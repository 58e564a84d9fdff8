//! Uploads vertex data into a vertex array object.

use std::mem;

use byteorder::{ByteOrder, NativeEndian};

use super::backends::Visitor;
use super::VertexArrayHandle;

/// Describes how one `f32` attribute is laid out inside the vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// The attribute location the shader reads from.
    pub location: u32,
    /// Number of components per vertex.
    pub size: u8,
    pub normalized: bool,
    /// Distance in bytes between two consecutive vertices.
    pub stride: u8,
    /// Offset in bytes of the first component.
    pub offset: u8,
}

impl VertexAttribute {
    /// A tightly packed `vec3` position at location 0.
    pub fn position() -> Self {
        VertexAttribute {
            location: 0,
            size: 3,
            normalized: false,
            stride: (3 * mem::size_of::<f32>()) as u8,
            offset: 0,
        }
    }
}

/// Encodes `vertices` in native byte order.
pub fn as_bytes(vertices: &[f32]) -> Vec<u8> {
    let mut bytes = vec![0; vertices.len() * mem::size_of::<f32>()];
    NativeEndian::write_f32_into(vertices, &mut bytes);
    bytes
}

/// Uploads the first `size` bytes of `vertices` as static data and declares them as
/// positions. `size` is not checked against the attribute layout. A `size` beyond the
/// end of `vertices` uploads the whole slice.
pub fn build(video: &mut dyn Visitor, vertices: &[f32], size: usize) -> VertexArrayHandle {
    let bytes = as_bytes(vertices);
    let len = size.min(bytes.len());
    if len < size {
        debug!(
            "Vertex upload of {} bytes clamped to the {} bytes available.",
            size, len
        );
    }

    video.create_vertex_array(&bytes[..len], VertexAttribute::position())
}
