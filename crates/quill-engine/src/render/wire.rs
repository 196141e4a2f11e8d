//! Records shared byte-for-byte with the GPU.
//!
//! Field order and alignment are part of the contract: vectors of two floats are
//! 8-byte aligned and vectors of four floats 16-byte aligned, matching both Metal
//! `simd_float2/4` and WGSL storage-buffer layout. Padding is spelled out as
//! explicit fields so the records stay `Pod`.

use core::mem::{offset_of, size_of};

use bytemuck::{Pod, Zeroable};

use crate::paint::Color;
use crate::path::CurveSegment;

/// Per-draw parameters (20 bytes), bound as a uniform.
///
///  offset  0  line_width             f32
///  offset  4  elements_per_instance  u32
///  offset  8  gradient_steps_count   u32
///  offset 12  vectors_count          u32
///  offset 16  filled_percent         f32
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct GlobalParameters {
    /// Stroke width in render units (clip-space x units after a view fit).
    pub line_width: f32,
    pub elements_per_instance: u32,
    pub gradient_steps_count: u32,
    pub vectors_count: u32,
    pub filled_percent: f32,
}

impl GlobalParameters {
    /// Minimum binding size for the uniform buffer holding this record.
    pub fn min_binding_size() -> wgpu::BufferSize {
        wgpu::BufferSize::new(size_of::<GlobalParameters>() as u64)
            .expect("GlobalParameters has non-zero size by construction")
    }
}

/// One curve instance (32 bytes). Every vertex of instance `i` reads entry `i`.
///
///  offset  0  a   [f32; 2]   loc 0
///  offset  8  b   [f32; 2]   loc 1
///  offset 16  p1  [f32; 2]   loc 2
///  offset 24  p2  [f32; 2]   loc 3
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct BezierParameters {
    pub a: [f32; 2],
    pub b: [f32; 2],
    pub p1: [f32; 2],
    pub p2: [f32; 2],
}

impl BezierParameters {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        0 => Float32x2, // a
        1 => Float32x2, // b
        2 => Float32x2, // p1
        3 => Float32x2  // p2
    ];

    /// Per-instance vertex buffer layout.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<BezierParameters>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

impl From<&CurveSegment> for BezierParameters {
    #[inline]
    fn from(s: &CurveSegment) -> Self {
        Self {
            a: s.a.to_array(),
            b: s.b.to_array(),
            p1: s.p1.to_array(),
            p2: s.p2.to_array(),
        }
    }
}

/// One round cap or join (48 bytes).
///
///  offset  0  center   [f32; 2]   loc 0
///  offset  8  (pad)    [f32; 2]
///  offset 16  color    [f32; 4]   loc 1
///  offset 32  radius   f32        loc 2
///  offset 36  (pad)    [f32; 3]
///
/// A zero radius marks a suppressed cap; it stays in the buffer so indices do
/// not shift while the reveal animates.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct CircleVertex {
    pub center: [f32; 2],
    _pad0: [f32; 2],
    pub color: [f32; 4],
    pub radius: f32,
    _pad1: [f32; 3],
}

impl CircleVertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = [
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x2,
            offset: offset_of!(CircleVertex, center) as u64,
            shader_location: 0,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x4,
            offset: offset_of!(CircleVertex, color) as u64,
            shader_location: 1,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32,
            offset: offset_of!(CircleVertex, radius) as u64,
            shader_location: 2,
        },
    ];

    #[inline]
    pub fn new(center: [f32; 2], color: Color, radius: f32) -> Self {
        Self {
            center,
            _pad0: [0.0; 2],
            color: color.to_array(),
            radius: radius.max(0.0),
            _pad1: [0.0; 3],
        }
    }

    #[inline]
    pub fn is_suppressed(&self) -> bool {
        self.radius <= 0.0
    }

    /// Per-instance vertex buffer layout (one circle per instance).
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<CircleVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

const _: () = assert!(size_of::<GlobalParameters>() == 20);
const _: () = assert!(size_of::<BezierParameters>() == 32);
const _: () = assert!(size_of::<CircleVertex>() == 48);
const _: () = assert!(offset_of!(CircleVertex, color) == 16);
const _: () = assert!(offset_of!(CircleVertex, radius) == 32);
