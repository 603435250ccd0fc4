use wgpu::util::DeviceExt;

use crate::data_structures::model::IndexedMesh;

/// An [`IndexedMesh`] uploaded to the GPU.
///
/// Vertices are interleaved as [`ModelVertex`](crate::data_structures::model::ModelVertex);
/// indices are `u32` (`wgpu::IndexFormat::Uint32`).
pub struct GpuMesh {
    pub name: String,
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub num_elements: u32,
}

impl GpuMesh {
    pub const INDEX_FORMAT: wgpu::IndexFormat = wgpu::IndexFormat::Uint32;

    pub fn new(device: &wgpu::Device, mesh: &IndexedMesh, name: &str) -> Self {
        let vertices = mesh.to_vertices();
        if vertices.is_empty() {
            log::warn!("Mesh {name} has no vertices, the GPU buffers will be empty.");
        }

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{:?} Vertex Buffer", name)),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{:?} Index Buffer", name)),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            name: name.to_string(),
            vertex_buffer,
            index_buffer,
            num_elements: mesh.indices.len() as u32,
        }
    }
}
