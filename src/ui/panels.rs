//! The debug windows drawn every frame.

use std::rc::Rc;

use cgmath::Rad;

use crate::{
    camera::Camera,
    data_structures::{entity::GameEntity, mesh::Mesh, transform::Transform},
    ui::state::UiState,
};

pub fn custom_window(ctx: &egui::Context, state: &mut UiState, fps: f32, resolution: [u32; 2]) {
    egui::Window::new("Custom Window").show(ctx, |ui| {
        ui.label(format!("fps: {:.1}", fps));
        ui.label(format!("resolution: {} x {}", resolution[0], resolution[1]));
        ui.horizontal(|ui| {
            ui.color_edit_button_rgba_unmultiplied(&mut state.background_colour);
            ui.label("background color");
        });

        ui.separator();
        ui.label("Vertex Shader Controls");
        ui.horizontal(|ui| {
            ui.color_edit_button_rgba_unmultiplied(&mut state.colour_tint);
            ui.label("Color Tint");
        });

        if ui.button("show demo menu").clicked() {
            state.toggle_demo_menu();
        }
        if ui.button("surprise").clicked() {
            state.toggle_happy_meter();
        }
    });
}

/// egui's own style and inspection panels.
pub fn demo_window(ctx: &egui::Context, open: &mut bool) {
    egui::Window::new("Demo Menu")
        .open(open)
        .vscroll(true)
        .show(ctx, |ui| {
            ui.collapsing("Settings", |ui| ctx.settings_ui(ui));
            ui.collapsing("Inspection", |ui| ctx.inspection_ui(ui));
        });
}

pub fn happy_meter_window(ctx: &egui::Context, state: &mut UiState) {
    egui::Window::new("Happiness 0-100??").show(ctx, |ui| {
        let mut happiness = state.happiness();
        let slider = egui::Slider::new(&mut happiness, 0..=100).text(state.happy_message());
        if ui.add(slider).changed() {
            state.set_happiness(happiness);
        }
    });
}

pub fn mesh_stats_window(ctx: &egui::Context, meshes: &[Rc<Mesh>]) {
    egui::Window::new("Mesh Statistics").show(ctx, |ui| {
        ui.label(format!("Total Meshes: {}", meshes.len()));
        ui.separator();

        for (i, mesh) in meshes.iter().enumerate() {
            ui.label(format!("Mesh {} ({})", i, mesh.name));
            ui.indent(("mesh_stats", i), |ui| {
                ui.label(format!("Vertices: {}", mesh.vertex_count()));
                ui.label(format!("Indices: {}", mesh.index_count()));
                ui.label(format!("Triangles: {}", mesh.triangle_count()));
            });
            ui.separator();
        }
    });
}

pub fn entity_window(ctx: &egui::Context, entities: &mut [GameEntity], camera: &mut Camera) {
    egui::Window::new("Entities").vscroll(true).show(ctx, |ui| {
        ui.collapsing("Camera", |ui| {
            let position = camera.transform().position();
            ui.label(format!(
                "position: {:.2} {:.2} {:.2}",
                position.x, position.y, position.z
            ));
            let mut fov = camera.fov().0;
            let slider = egui::Slider::new(&mut fov, 0.1..=2.5).text("fov (rad)");
            if ui.add(slider).changed() {
                camera.set_fov(Rad(fov));
            }
        });

        for (i, entity) in entities.iter_mut().enumerate() {
            let title = format!("Entity {} ({})", i, entity.mesh().name);
            ui.collapsing(title, |ui| transform_editor(ui, entity.transform_mut()));
        }
    });
}

/// Edits go through the transform setters so the world matrix is rebuilt.
fn transform_editor(ui: &mut egui::Ui, transform: &mut Transform) {
    let mut position: [f32; 3] = transform.position().into();
    let moved = ui
        .horizontal(|ui| {
            ui.label("position");
            position
                .iter_mut()
                .map(|c| ui.add(egui::DragValue::new(c).speed(0.01)).changed())
                .fold(false, |acc, changed| acc | changed)
        })
        .inner;
    if moved {
        transform.set_position(position);
    }

    let mut rotation: [f32; 3] = transform.pitch_yaw_roll().into();
    let rotated = ui
        .horizontal(|ui| {
            ui.label("pitch/yaw/roll");
            rotation
                .iter_mut()
                .map(|c| ui.drag_angle(c).changed())
                .fold(false, |acc, changed| acc | changed)
        })
        .inner;
    if rotated {
        transform.set_rotation(rotation);
    }

    let mut scale: [f32; 3] = transform.scale().into();
    let scaled = ui
        .horizontal(|ui| {
            ui.label("scale");
            scale
                .iter_mut()
                .map(|c| {
                    ui.add(egui::DragValue::new(c).speed(0.01).range(0.0..=10.0))
                        .changed()
                })
                .fold(false, |acc, changed| acc | changed)
        })
        .inner;
    if scaled {
        transform.set_scale(scale);
    }
}
