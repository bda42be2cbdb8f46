//! Vertex layout and GPU meshes.
//!
//! [`MeshData`] is plain CPU geometry that can be validated and inspected
//! without a device. [`Mesh`] is the uploaded, immutable version: one vertex
//! buffer, one `u32` index buffer and the counts needed to draw it.

use anyhow::{bail, ensure};
use wgpu::util::DeviceExt;

/// Position plus RGBA colour, exactly what the vertex shader consumes.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<Vertex>() as wgpu::BufferAddress,
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
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Geometry that has not been uploaded yet.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshData {
    pub name: String,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new(name: impl Into<String>, vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self {
            name: name.into(),
            vertices,
            indices,
        }
    }

    /// Rejects geometry that would produce an invalid or partial draw call.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(!self.vertices.is_empty(), "mesh {:?} has no vertices", self.name);
        ensure!(!self.indices.is_empty(), "mesh {:?} has no indices", self.name);
        ensure!(
            self.indices.len() % 3 == 0,
            "mesh {:?} has {} indices, not a whole number of triangles",
            self.name,
            self.indices.len()
        );
        if let Some(index) = self
            .indices
            .iter()
            .find(|&&i| i as usize >= self.vertices.len())
        {
            bail!(
                "mesh {:?} references vertex {} but only has {}",
                self.name,
                index,
                self.vertices.len()
            );
        }
        Ok(())
    }

    pub fn triangles(&self) -> impl Iterator<Item = [Vertex; 3]> + '_ {
        self.indices.chunks_exact(3).map(|c| {
            [
                self.vertices[c[0] as usize],
                self.vertices[c[1] as usize],
                self.vertices[c[2] as usize],
            ]
        })
    }
}

#[derive(Debug)]
pub struct Mesh {
    pub name: String,
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    vertex_count: u32,
    index_count: u32,
}

impl Mesh {
    pub fn new(device: &wgpu::Device, data: &MeshData) -> anyhow::Result<Self> {
        data.validate()?;

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Vertex Buffer", data.name)),
            contents: bytemuck::cast_slice(&data.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Index Buffer", data.name)),
            contents: bytemuck::cast_slice(&data.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::debug!(
            "uploaded mesh {} ({} vertices, {} indices)",
            data.name,
            data.vertices.len(),
            data.indices.len()
        );

        Ok(Self {
            name: data.name.clone(),
            vertex_buffer,
            index_buffer,
            vertex_count: data.vertices.len() as u32,
            index_count: data.indices.len() as u32,
        })
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    pub fn triangle_count(&self) -> u32 {
        self.index_count / 3
    }
}
