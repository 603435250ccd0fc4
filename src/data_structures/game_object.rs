//! Placed objects and their per-instance GPU data.

use cgmath::{Deg, Matrix3, Matrix4, SquareMatrix, Vector3};

use crate::data_structures::{model::Vertex, scene::ModelId};

/// One placement of a model in the world.
///
/// Rotation is a set of Euler angles in degrees, applied negated in X, Y, Z
/// order. Scale is uniform. `inside_frustum` is refreshed by
/// [`Frustum::filter`](crate::frustum::Frustum::filter) and defaults to `true`.
#[derive(Clone, Debug, PartialEq)]
pub struct GameObject {
    pub model: ModelId,
    pub position: Vector3<f32>,
    pub rotation: Vector3<f32>,
    pub scale: f32,
    pub inside_frustum: bool,
}

impl GameObject {
    pub fn new(model: ModelId, position: Vector3<f32>) -> Self {
        Self {
            model,
            position,
            rotation: Vector3::new(0.0, 0.0, 0.0),
            scale: 1.0,
            inside_frustum: true,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn rotation_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_angle_x(Deg(-self.rotation.x))
            * Matrix4::from_angle_y(Deg(-self.rotation.y))
            * Matrix4::from_angle_z(Deg(-self.rotation.z))
    }

    /// World matrix: translate, rotate, then scale.
    pub fn to_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position) * self.rotation_matrix() * Matrix4::from_scale(self.scale)
    }

    pub fn to_raw(&self) -> InstanceRaw {
        let rotation = self.rotation_matrix();
        let normal = Matrix3::from_cols(rotation.x.truncate(), rotation.y.truncate(), rotation.z.truncate());
        let world_matrix = self.to_matrix();
        InstanceRaw {
            model: world_matrix.into(),
            normal: normal.into(),
            handedness: world_matrix.determinant().signum(),
        }
    }
}

/// Per-instance data as laid out in the instance vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub normal: [[f32; 3]; 3],
    pub handedness: f32,
}

/// Instance attributes start at location 5, after those of `ModelVertex`.
impl Vertex for InstanceRaw {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 5,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 6,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 8]>() as wgpu::BufferAddress,
                    shader_location: 7,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 12]>() as wgpu::BufferAddress,
                    shader_location: 8,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 16]>() as wgpu::BufferAddress,
                    shader_location: 9,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 19]>() as wgpu::BufferAddress,
                    shader_location: 10,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 22]>() as wgpu::BufferAddress,
                    shader_location: 11,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 25]>() as wgpu::BufferAddress,
                    shader_location: 12,
                    format: wgpu::VertexFormat::Float32,
                },
            ],
        }
    }
}
