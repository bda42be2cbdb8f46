//! The demo scene: three meshes, six entities, a fly camera and the state
//! behind the debug UI.
//!
//! `Game` knows nothing about windows or surfaces. It is built from a device
//! and a colour format, updated with the frame time and input, and records
//! its draws into any colour/depth target pair, which is what lets the
//! headless tests render it without a window.

use std::rc::Rc;

use anyhow::Context as _;

use crate::{
    camera::Camera,
    config::{AppConfig, CameraSettings},
    data_structures::{entity::GameEntity, mesh::Mesh, transform::Transform},
    input::InputState,
    pipelines::{
        basic::mk_basic_pipeline,
        uniforms::{ObjectUniforms, VertexShaderExternalData},
    },
    render::DrawMesh,
    resources::{self, geometry},
    ui::{
        panels,
        state::{FrameTimer, UiState},
    },
};

/// What the event loop should do after an update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// The CPU side of the demo: entities, camera and frame timing.
///
/// Generic over the mesh type like [`GameEntity`], so the per-frame logic
/// runs on plain [`MeshData`](crate::data_structures::mesh::MeshData) without a device.
#[derive(Debug)]
pub struct Scene<M = Mesh> {
    entities: Vec<GameEntity<M>>,
    camera: Camera,
    frame_timer: FrameTimer,
}

impl<M> Scene<M> {
    pub fn new(meshes: &[Rc<M>], aspect_ratio: f32, camera: &CameraSettings) -> Self {
        Self {
            entities: place_entities(meshes),
            camera: Camera::from_settings(aspect_ratio, camera),
            frame_timer: FrameTimer::new(),
        }
    }

    /// Records the frame time, then either reports an exit request or moves
    /// the camera and animates the entities.
    pub fn update(&mut self, dt: f32, total_time: f32, input: &InputState) -> Control {
        self.frame_timer.record(dt);
        if input.quit_requested() {
            return Control::Exit;
        }
        self.camera.update(dt, input);
        animate(&mut self.entities, dt, total_time);
        Control::Continue
    }

    /// Zero sizes (a minimised window) keep the previous projection.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.camera
            .update_projection_matrix(width as f32 / height as f32);
    }

    pub fn entities(&self) -> &[GameEntity<M>] {
        &self.entities
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn fps(&self) -> f32 {
        self.frame_timer.fps()
    }
}

#[derive(Debug)]
pub struct Game {
    meshes: Vec<Rc<Mesh>>,
    scene: Scene,
    ui: UiState,
    pipeline: wgpu::RenderPipeline,
    uniforms: ObjectUniforms,
}

impl Game {
    /// Loads the shaders, uploads the meshes and places the entities.
    pub async fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        aspect_ratio: f32,
        config: &AppConfig,
    ) -> anyhow::Result<Self> {
        let shaders = resources::load_shaders(config)
            .await
            .context("failed to load shaders")?;

        let meshes = geometry::all()
            .iter()
            .map(|data| Mesh::new(device, data).map(Rc::new))
            .collect::<anyhow::Result<Vec<_>>>()
            .context("failed to create geometry")?;
        let scene = Scene::new(&meshes, aspect_ratio, &config.camera);

        let uniforms = ObjectUniforms::new(device, scene.entities.len());
        let pipeline = mk_basic_pipeline(device, color_format, &uniforms.bind_group_layout, &shaders);

        log::info!(
            "scene ready: {} meshes, {} entities",
            meshes.len(),
            scene.entities.len()
        );

        Ok(Self {
            meshes,
            scene,
            ui: UiState::new(config),
            pipeline,
            uniforms,
        })
    }

    pub fn update(&mut self, dt: f32, total_time: f32, input: &InputState) -> Control {
        self.scene.update(dt, total_time, input)
    }

    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.scene.on_resize(width, height);
    }

    pub fn build_ui(&mut self, ctx: &egui::Context, resolution: [u32; 2]) {
        if self.ui.show_demo_menu {
            panels::demo_window(ctx, &mut self.ui.show_demo_menu);
        }
        if self.ui.show_happy_meter {
            panels::happy_meter_window(ctx, &mut self.ui);
        }
        panels::custom_window(ctx, &mut self.ui, self.scene.fps(), resolution);
        panels::mesh_stats_window(ctx, &self.meshes);
        panels::entity_window(ctx, &mut self.scene.entities, &mut self.scene.camera);
    }

    /// Writes every entity's constants into its uniform slot.
    pub fn write_uniforms(&self, queue: &wgpu::Queue) {
        let view = self.scene.camera.view_matrix();
        let projection = self.scene.camera.projection_matrix();
        for (slot, entity) in self.scene.entities.iter().enumerate() {
            let data = VertexShaderExternalData::new(
                self.ui.colour_tint,
                entity.transform().world_matrix(),
                view,
                projection,
            );
            self.uniforms.write(queue, slot, &data);
        }
    }

    /// Clears both targets and draws every entity.
    pub fn encode_scene(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        color_view: &wgpu::TextureView,
        depth_view: &wgpu::TextureView,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.ui.clear_colour()),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        render_pass.set_pipeline(&self.pipeline);
        let drawable = self.scene.entities.len().min(self.uniforms.capacity());
        for (slot, entity) in self.scene.entities.iter().take(drawable).enumerate() {
            render_pass.draw_entity(entity, &self.uniforms, slot);
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}

/// Six entities over the three meshes (triangle, square, pentagon), two each.
///
/// Each entity sits slightly further from the camera than the previous one
/// so overlapping shapes resolve deterministically in the depth test.
pub fn place_entities<M>(meshes: &[Rc<M>]) -> Vec<GameEntity<M>> {
    let layout: [(usize, [f32; 3], f32); 6] = [
        (0, [0.0, 0.0, 0.0], 1.0),
        (0, [1.2, 0.8, 0.01], 0.5),
        (1, [0.0, 0.0, 0.02], 1.0),
        (1, [1.0, -1.2, 0.03], 1.0),
        (2, [0.0, 0.0, 0.04], 1.0),
        (2, [-1.6, -1.0, 0.05], 1.0),
    ];

    layout
        .iter()
        .filter_map(|&(mesh, position, scale)| {
            let mesh = meshes.get(mesh)?;
            let mut transform = Transform::from(cgmath::Vector3::from(position));
            transform.set_scale([scale; 3]);
            Some(GameEntity::with_transform(Rc::clone(mesh), transform))
        })
        .collect()
}

/// Per-frame motion: spin, sway and pulse a few of the entities.
///
/// Motion is applied as the change since the previous frame, so edits made
/// through the debug UI carry over instead of being overwritten.
pub fn animate<M>(entities: &mut [GameEntity<M>], dt: f32, total_time: f32) {
    let previous_time = total_time - dt;
    if let Some(spinner) = entities.get_mut(0) {
        spinner.transform_mut().rotate([0.0, 0.0, dt]);
    }
    if let Some(swayer) = entities.get_mut(1) {
        let sway = |t: f32| t.sin() * 0.3;
        swayer
            .transform_mut()
            .move_absolute([sway(total_time) - sway(previous_time), 0.0, 0.0]);
    }
    if let Some(pulser) = entities.get_mut(3) {
        // never below 0.75, so the ratio is always defined
        let pulse = |t: f32| 1.0 + (t * 2.0).sin() * 0.25;
        let factor = pulse(total_time) / pulse(previous_time);
        pulser.transform_mut().scale_by([factor, factor, 1.0]);
    }
    if let Some(spinner) = entities.get_mut(5) {
        spinner.transform_mut().rotate([0.0, 0.0, -0.5 * dt]);
    }
}
