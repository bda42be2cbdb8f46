//! Debug overlay built with egui.
//!
//! [`DebugUi`] owns the egui context, its winit input adapter and its wgpu
//! renderer. Each frame the caller runs [`DebugUi::run`] with a closure that
//! lays out the windows from [`panels`], then hands the resulting
//! [`UiFrame`] to [`DebugUi::paint`] which draws it over the scene.

use winit::{event::WindowEvent, window::Window};

pub mod panels;
pub mod state;

/// Tessellated output of one UI frame, ready to be painted.
pub struct UiFrame {
    paint_jobs: Vec<egui::ClippedPrimitive>,
    textures_delta: egui::TexturesDelta,
    screen: egui_wgpu::ScreenDescriptor,
}

pub struct DebugUi {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

impl DebugUi {
    pub fn new(window: &Window, device: &wgpu::Device, color_format: wgpu::TextureFormat) -> Self {
        let ctx = egui::Context::default();
        ctx.set_visuals(egui::Visuals::dark());

        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            Some(device.limits().max_texture_dimension_2d as usize),
        );
        // The overlay is drawn in its own pass without a depth attachment.
        let renderer = egui_wgpu::Renderer::new(device, color_format, None, 1, false);

        Self {
            ctx,
            state,
            renderer,
        }
    }

    /// Feeds a window event to egui. Whether egui wants the devices is read
    /// back through [`wants_keyboard`](Self::wants_keyboard) and
    /// [`wants_pointer`](Self::wants_pointer) instead of per event.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) {
        // the loop redraws every frame, so the repaint hint is not needed
        let _ = self.state.on_window_event(window, event);
    }

    pub fn wants_keyboard(&self) -> bool {
        self.ctx.wants_keyboard_input()
    }

    pub fn wants_pointer(&self) -> bool {
        self.ctx.wants_pointer_input()
    }

    pub fn run(
        &mut self,
        window: &Window,
        size_in_pixels: [u32; 2],
        build: impl FnMut(&egui::Context),
    ) -> UiFrame {
        let raw_input = self.state.take_egui_input(window);
        let output = self.ctx.run(raw_input, build);
        self.state
            .handle_platform_output(window, output.platform_output);

        let paint_jobs = self.ctx.tessellate(output.shapes, output.pixels_per_point);
        UiFrame {
            paint_jobs,
            textures_delta: output.textures_delta,
            screen: egui_wgpu::ScreenDescriptor {
                size_in_pixels,
                pixels_per_point: output.pixels_per_point,
            },
        }
    }

    /// Records the overlay into `encoder` on top of whatever `target` holds.
    ///
    /// Returns egui's extra command buffers, which must be submitted before `encoder`.
    pub fn paint(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        frame: UiFrame,
    ) -> Vec<wgpu::CommandBuffer> {
        for (id, delta) in &frame.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, delta);
        }
        let command_buffers =
            self.renderer
                .update_buffers(device, queue, encoder, &frame.paint_jobs, &frame.screen);

        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Debug UI Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                })
                .forget_lifetime();
            self.renderer
                .render(&mut render_pass, &frame.paint_jobs, &frame.screen);
        }

        for id in &frame.textures_delta.free {
            self.renderer.free_texture(id);
        }
        command_buffers
    }
}
