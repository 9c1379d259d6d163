//! Interleaved vertex layouts handed to the GPU upload step.
//!
//! Attributes are always packed in the order position, normal, texture
//! coordinate, and optionally the texture-array layer, all `f32`:
//!
//! | Slot | Offset | Components | Attribute        |
//! |------|--------|------------|------------------|
//! | 0    | 0      | 3          | position xyz     |
//! | 1    | 12     | 3          | normal xyz       |
//! | 2    | 24     | 2          | texture uv       |
//! | 3    | 32     | 1          | layer (optional) |
//!
//! Strides are 32 bytes without the layer and 36 bytes with it.

use std::mem;

use static_assertions::const_assert_eq;
use wgpu::{VertexAttribute, VertexBufferLayout, VertexStepMode};

const F32_SIZE: u64 = mem::size_of::<f32>() as u64;

/// Where one attribute lives inside an interleaved vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexAttributeDesc {
    /// Shader attribute slot (location).
    pub slot: u32,
    /// Byte offset from the start of the vertex.
    pub byte_offset: u64,
    /// Number of `f32` components.
    pub components: u32,
}

/// Interleaved vertex layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VertexFormat {
    /// `position.xyz, normal.xyz, uv` (8 floats).
    PositionNormalUv,
    /// `position.xyz, normal.xyz, uv, layer` (9 floats).
    #[default]
    PositionNormalUvLayer,
}

const POSITION_NORMAL_UV_DESC: [VertexAttributeDesc; 3] = [
    VertexAttributeDesc {
        slot: 0,
        byte_offset: 0,
        components: 3,
    },
    VertexAttributeDesc {
        slot: 1,
        byte_offset: 3 * F32_SIZE,
        components: 3,
    },
    VertexAttributeDesc {
        slot: 2,
        byte_offset: 6 * F32_SIZE,
        components: 2,
    },
];

const POSITION_NORMAL_UV_LAYER_DESC: [VertexAttributeDesc; 4] = [
    POSITION_NORMAL_UV_DESC[0],
    POSITION_NORMAL_UV_DESC[1],
    POSITION_NORMAL_UV_DESC[2],
    VertexAttributeDesc {
        slot: 3,
        byte_offset: 8 * F32_SIZE,
        components: 1,
    },
];

/// `wgpu` attributes for [`VertexFormat::PositionNormalUv`].
pub const POSITION_NORMAL_UV_ATTRIBUTES: [VertexAttribute; 3] = [
    VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    },
    VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: 3 * F32_SIZE,
        shader_location: 1,
    },
    VertexAttribute {
        format: wgpu::VertexFormat::Float32x2,
        offset: 6 * F32_SIZE,
        shader_location: 2,
    },
];

/// `wgpu` attributes for [`VertexFormat::PositionNormalUvLayer`].
pub const POSITION_NORMAL_UV_LAYER_ATTRIBUTES: [VertexAttribute; 4] = [
    POSITION_NORMAL_UV_ATTRIBUTES[0],
    POSITION_NORMAL_UV_ATTRIBUTES[1],
    POSITION_NORMAL_UV_ATTRIBUTES[2],
    VertexAttribute {
        format: wgpu::VertexFormat::Float32,
        offset: 8 * F32_SIZE,
        shader_location: 3,
    },
];

// ---------------------------------------------------------------------------
// Compile-time validation
// ---------------------------------------------------------------------------

const_assert_eq!(POSITION_NORMAL_UV_DESC[2].byte_offset + 2 * F32_SIZE, 32);
const_assert_eq!(POSITION_NORMAL_UV_LAYER_DESC[3].byte_offset + F32_SIZE, 36);

const _: () = assert!(POSITION_NORMAL_UV_ATTRIBUTES[1].offset == POSITION_NORMAL_UV_DESC[1].byte_offset);
const _: () = assert!(POSITION_NORMAL_UV_ATTRIBUTES[2].offset == POSITION_NORMAL_UV_DESC[2].byte_offset);
const _: () = assert!(
    POSITION_NORMAL_UV_LAYER_ATTRIBUTES[3].offset == POSITION_NORMAL_UV_LAYER_DESC[3].byte_offset,
    "layer attribute offset drifted"
);

impl VertexFormat {
    /// Number of `f32` values per vertex.
    pub fn floats_per_vertex(self) -> usize {
        match self {
            Self::PositionNormalUv => 8,
            Self::PositionNormalUvLayer => 9,
        }
    }

    /// Size of one vertex in bytes.
    pub fn stride(self) -> u64 {
        self.floats_per_vertex() as u64 * F32_SIZE
    }

    /// `(slot, byte_offset, components)` for each attribute, in slot order.
    pub fn attributes(self) -> &'static [VertexAttributeDesc] {
        match self {
            Self::PositionNormalUv => &POSITION_NORMAL_UV_DESC,
            Self::PositionNormalUvLayer => &POSITION_NORMAL_UV_LAYER_DESC,
        }
    }

    /// The matching `wgpu` vertex buffer layout.
    pub fn wgpu_layout(self) -> VertexBufferLayout<'static> {
        let attributes: &'static [VertexAttribute] = match self {
            Self::PositionNormalUv => &POSITION_NORMAL_UV_ATTRIBUTES,
            Self::PositionNormalUvLayer => &POSITION_NORMAL_UV_LAYER_ATTRIBUTES,
        };
        VertexBufferLayout {
            array_stride: self.stride(),
            step_mode: VertexStepMode::Vertex,
            attributes,
        }
    }
}

// ---------------------------------------------------------------------------
// InterleavedMesh
// ---------------------------------------------------------------------------

/// A mesh packed for upload: one interleaved `f32` stream plus `u32` indices.
#[derive(Clone, Debug, PartialEq)]
pub struct InterleavedMesh {
    /// Layout of `vertices`.
    pub format: VertexFormat,
    /// `format.floats_per_vertex()` floats per vertex, vertex after vertex.
    pub vertices: Vec<f32>,
    /// Triangle list indices.
    pub indices: Vec<u32>,
}

impl InterleavedMesh {
    /// Number of vertices in the stream.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / self.format.floats_per_vertex()
    }

    /// Number of indices; pass this to the draw call.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Vertex stride in bytes.
    pub fn stride(&self) -> u64 {
        self.format.stride()
    }

    /// Attribute layout of the stream.
    pub fn attributes(&self) -> &'static [VertexAttributeDesc] {
        self.format.attributes()
    }

    /// The vertex stream as bytes (zero-copy).
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// The index list as bytes (zero-copy).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strides() {
        assert_eq!(VertexFormat::PositionNormalUv.stride(), 32);
        assert_eq!(VertexFormat::PositionNormalUvLayer.stride(), 36);
    }

    #[test]
    fn test_attributes_are_contiguous_and_fill_the_stride() {
        for format in [VertexFormat::PositionNormalUv, VertexFormat::PositionNormalUvLayer] {
            let mut expected_offset = 0;
            for (i, attr) in format.attributes().iter().enumerate() {
                assert_eq!(attr.slot, i as u32);
                assert_eq!(attr.byte_offset, expected_offset);
                expected_offset += attr.components as u64 * F32_SIZE;
            }
            assert_eq!(expected_offset, format.stride());
        }
    }

    #[test]
    fn test_wgpu_layout_matches_descriptors() {
        for format in [VertexFormat::PositionNormalUv, VertexFormat::PositionNormalUvLayer] {
            let layout = format.wgpu_layout();
            assert_eq!(layout.array_stride, format.stride());
            assert_eq!(layout.step_mode, VertexStepMode::Vertex);
            assert_eq!(layout.attributes.len(), format.attributes().len());
            for (wgpu_attr, desc) in layout.attributes.iter().zip(format.attributes()) {
                assert_eq!(wgpu_attr.shader_location, desc.slot);
                assert_eq!(wgpu_attr.offset, desc.byte_offset);
                assert_eq!(wgpu_attr.format.size(), desc.components as u64 * F32_SIZE);
            }
        }
    }

    #[test]
    fn test_default_format_carries_layer() {
        assert_eq!(VertexFormat::default(), VertexFormat::PositionNormalUvLayer);
    }

    #[test]
    fn test_interleaved_byte_views() {
        let mesh = InterleavedMesh {
            format: VertexFormat::PositionNormalUvLayer,
            vertices: vec![0.0; 9 * 4],
            indices: vec![0, 1, 2, 0, 2, 3],
        };
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.index_count(), 6);
        assert_eq!(mesh.vertex_bytes().len(), 4 * 36);
        assert_eq!(mesh.index_bytes().len(), 6 * 4);
        assert_eq!(mesh.attributes().len(), 4);
    }
}
