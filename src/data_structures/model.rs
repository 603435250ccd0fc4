//! Meshes, vertices and materials.
//!
//! [`IndexedMesh`] is the plain-array output of the OBJ importer and the
//! height-map generator. [`ModelVertex`] is its interleaved, GPU-ready form and
//! [`Material`] describes how a model is shaded.

use cgmath::{InnerSpace, Vector3, Vector4};

use crate::pipelines::uniforms::UniformSink;

/// Vertex types that can describe their own GPU buffer layout.
pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

/// Interleaved vertex as uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelVertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
    pub normal: [f32; 3],
}

impl Vertex for ModelVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<ModelVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 5]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// Geometry as four flat arrays: a set of unique vertices plus an index list
/// naming which vertices form each triangle.
///
/// `positions` and `normals` hold 3 floats per vertex, `tex_coords` holds 2.
/// `indices` holds 3 entries per triangle, each one `< vertex_count()`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IndexedMesh {
    pub positions: Vec<f32>,
    pub tex_coords: Vec<f32>,
    pub normals: Vec<f32>,
    pub indices: Vec<u32>,
}

impl IndexedMesh {
    pub fn new(positions: Vec<f32>, tex_coords: Vec<f32>, normals: Vec<f32>, indices: Vec<u32>) -> Self {
        Self {
            positions,
            tex_coords,
            normals,
            indices,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.indices.is_empty()
    }

    /// Distance from the origin to the farthest vertex.
    ///
    /// Used together with a game object's scale as its culling sphere.
    pub fn bounding_radius(&self) -> f32 {
        self.positions
            .chunks_exact(3)
            .map(|p| Vector3::new(p[0], p[1], p[2]).magnitude())
            .fold(0.0, f32::max)
    }

    /// Interleave the attribute arrays into GPU vertices.
    ///
    /// Missing attribute slots (shorter arrays) read as zero.
    pub fn to_vertices(&self) -> Vec<ModelVertex> {
        (0..self.vertex_count())
            .map(|i| ModelVertex {
                position: [
                    self.positions[i * 3],
                    self.positions[i * 3 + 1],
                    self.positions[i * 3 + 2],
                ],
                tex_coords: [
                    self.tex_coords.get(i * 2).map_or(0.0, |f| *f),
                    self.tex_coords.get(i * 2 + 1).map_or(0.0, |f| *f),
                ],
                normal: [
                    self.normals.get(i * 3).map_or(0.0, |f| *f),
                    self.normals.get(i * 3 + 1).map_or(0.0, |f| *f),
                    self.normals.get(i * 3 + 2).map_or(0.0, |f| *f),
                ],
            })
            .collect()
    }
}

/// Surface description of a model: three colour terms, a reflectance factor
/// and an optional texture.
///
/// The texture is an opaque reference (a file name under the asset directory)
/// resolved by whatever binds textures for the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub ambient: Vector4<f32>,
    pub diffuse: Vector4<f32>,
    pub specular: Vector4<f32>,
    pub reflectance: f32,
    pub texture: Option<String>,
}

impl Material {
    pub fn textured(texture: impl Into<String>, reflectance: f32) -> Self {
        Self {
            texture: Some(texture.into()),
            reflectance,
            ..Default::default()
        }
    }

    pub fn coloured(colour: Vector4<f32>, reflectance: f32) -> Self {
        Self {
            ambient: colour,
            diffuse: colour,
            specular: colour,
            reflectance,
            texture: None,
        }
    }

    pub fn is_textured(&self) -> bool {
        self.texture.is_some()
    }

    pub fn upload_to(&self, sink: &mut impl UniformSink, name: &str) {
        sink.set_vec4(&format!("{name}.ambient"), self.ambient);
        sink.set_vec4(&format!("{name}.diffuse"), self.diffuse);
        sink.set_vec4(&format!("{name}.specular"), self.specular);
        sink.set_i32(&format!("{name}.hasTexture"), self.is_textured() as i32);
        sink.set_f32(&format!("{name}.reflectance"), self.reflectance);
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::coloured(Vector4::new(1.0, 1.0, 1.0, 1.0), 0.0)
    }
}

/// A mesh paired with its material, as registered in a [`Scene`](super::scene::Scene).
#[derive(Clone, Debug)]
pub struct Model {
    pub name: String,
    pub mesh: IndexedMesh,
    pub material: Material,
    pub bounding_radius: f32,
}

impl Model {
    pub fn new(name: impl Into<String>, mesh: IndexedMesh, material: Material) -> Self {
        let bounding_radius = mesh.bounding_radius();
        Self {
            name: name.into(),
            mesh,
            material,
            bounding_radius,
        }
    }
}
