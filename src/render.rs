//! Draw helpers on top of `wgpu::RenderPass`.
//!
//! The scene issues one indexed draw per entity; these traits keep the
//! buffer and bind group plumbing for that in one place.

use crate::{
    data_structures::{entity::GameEntity, mesh::Mesh},
    pipelines::uniforms::ObjectUniforms,
};

pub trait DrawMesh {
    /// Binds the mesh's vertex and index buffers and draws every index once.
    fn draw_mesh(&mut self, mesh: &Mesh);

    /// Binds uniform slot `slot` and draws the entity's mesh with it.
    fn draw_entity(&mut self, entity: &GameEntity, uniforms: &ObjectUniforms, slot: usize);
}

impl DrawMesh for wgpu::RenderPass<'_> {
    fn draw_mesh(&mut self, mesh: &Mesh) {
        self.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        self.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..mesh.index_count(), 0, 0..1);
    }

    fn draw_entity(&mut self, entity: &GameEntity, uniforms: &ObjectUniforms, slot: usize) {
        self.set_bind_group(0, &uniforms.bind_group, &[uniforms.offset(slot)]);
        self.draw_mesh(entity.mesh());
    }
}
