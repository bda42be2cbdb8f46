//! Per-object constant data for the vertex shader.
//!
//! Every entity drawn in a frame needs its own world matrix, so the data is
//! laid out in one uniform buffer with a slot per entity and bound with a
//! dynamic offset before each draw.

use std::num::NonZeroU64;

use cgmath::Matrix4;

/**
 * The raw constants as the vertex shader sees them. Matrices are column-major,
 * matching both cgmath and WGSL.
 */
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct VertexShaderExternalData {
    pub color_tint: [f32; 4],
    pub world: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

impl VertexShaderExternalData {
    pub fn new(
        color_tint: [f32; 4],
        world: Matrix4<f32>,
        view: Matrix4<f32>,
        projection: Matrix4<f32>,
    ) -> Self {
        Self {
            color_tint,
            world: world.into(),
            view: view.into(),
            projection: projection.into(),
        }
    }

    pub const SIZE: wgpu::BufferAddress =
        std::mem::size_of::<VertexShaderExternalData>() as wgpu::BufferAddress;
}

/// Rounds `size` up to the next multiple of `alignment` (a power of two).
pub fn align_to(size: u64, alignment: u64) -> u64 {
    debug_assert!(alignment.is_power_of_two());
    (size + alignment - 1) & !(alignment - 1)
}

#[derive(Debug)]
pub struct ObjectUniforms {
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
    stride: wgpu::BufferAddress,
    capacity: usize,
}

impl ObjectUniforms {
    /// Allocates `capacity` slots, each aligned to the device's uniform offset alignment.
    pub fn new(device: &wgpu::Device, capacity: usize) -> Self {
        let alignment = device.limits().min_uniform_buffer_offset_alignment as u64;
        let stride = align_to(VertexShaderExternalData::SIZE, alignment);
        let capacity = capacity.max(1);

        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Object Uniform Buffer"),
            size: stride * capacity as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = mk_bind_group_layout(device);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &buffer,
                    offset: 0,
                    size: NonZeroU64::new(VertexShaderExternalData::SIZE),
                }),
            }],
            label: Some("object_bind_group"),
        });

        Self {
            buffer,
            bind_group,
            bind_group_layout,
            stride,
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Dynamic offset of slot `index`, as passed to `set_bind_group`.
    pub fn offset(&self, index: usize) -> wgpu::DynamicOffset {
        (self.stride * index as u64) as wgpu::DynamicOffset
    }

    pub fn write(&self, queue: &wgpu::Queue, index: usize, data: &VertexShaderExternalData) {
        if index >= self.capacity {
            log::warn!(
                "uniform slot {} is out of range ({} slots), object skipped",
                index,
                self.capacity
            );
            return;
        }
        queue.write_buffer(
            &self.buffer,
            self.offset(index) as wgpu::BufferAddress,
            bytemuck::cast_slice(&[*data]),
        );
    }
}

pub fn mk_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: true,
                min_binding_size: NonZeroU64::new(VertexShaderExternalData::SIZE),
            },
            count: None,
        }],
        label: Some("object_bind_group_layout"),
    })
}
