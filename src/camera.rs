//! Fly camera: a transform plus cached view and projection matrices.
//!
//! Coordinates are left-handed (+Z forward, +Y up) and clip-space depth
//! runs from 0 at the near plane to 1 at the far plane, which is what wgpu
//! expects without any OpenGL correction matrix.

use std::f32::consts::FRAC_PI_2;

use cgmath::{EuclideanSpace, Matrix4, Point3, Rad, SquareMatrix, Vector3};
use winit::keyboard::KeyCode;

use crate::{config::CameraSettings, data_structures::transform::Transform, input::InputState};

/// Pitch stays this far away from straight up/down so the view never flips.
pub const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;

#[derive(Clone, Debug)]
pub struct Camera {
    transform: Transform,
    view: Matrix4<f32>,
    projection: Matrix4<f32>,
    move_speed: f32,
    look_speed: f32,
    fov: Rad<f32>,
    aspect_ratio: f32,
    near_clip: f32,
    far_clip: f32,
}

impl Camera {
    pub fn new(
        position: impl Into<Vector3<f32>>,
        aspect_ratio: f32,
        settings: &CameraSettings,
    ) -> Self {
        let mut transform = Transform::new();
        transform.set_position(position);
        let mut camera = Self {
            transform,
            view: Matrix4::identity(),
            projection: Matrix4::identity(),
            move_speed: settings.move_speed,
            look_speed: settings.look_speed,
            fov: Rad(settings.fov),
            aspect_ratio,
            near_clip: settings.near_clip,
            far_clip: settings.far_clip,
        };
        camera.update_view_matrix();
        camera.update_projection_matrix(aspect_ratio);
        camera
    }

    /// Camera placed at the configured start position.
    pub fn from_settings(aspect_ratio: f32, settings: &CameraSettings) -> Self {
        Self::new(settings.position, aspect_ratio, settings)
    }

    /// Called once per frame: applies input, then refreshes the view matrix.
    pub fn update(&mut self, dt: f32, input: &InputState) {
        self.process_input(dt, input);
        self.update_view_matrix();
    }

    pub fn update_view_matrix(&mut self) {
        let eye = Point3::from_vec(self.transform.position());
        self.view = Matrix4::look_to_lh(eye, self.transform.forward(), self.transform.up());
    }

    pub fn update_projection_matrix(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
        self.projection = perspective_fov_lh(self.fov, aspect_ratio, self.near_clip, self.far_clip);
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        self.view
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        self.projection
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Mutations are picked up by the next [`update_view_matrix`](Self::update_view_matrix).
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    pub fn fov(&self) -> Rad<f32> {
        self.fov
    }

    pub fn set_fov(&mut self, fov: impl Into<Rad<f32>>) {
        self.fov = fov.into();
        self.update_projection_matrix(self.aspect_ratio);
    }

    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    pub fn look_speed(&self) -> f32 {
        self.look_speed
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    fn process_input(&mut self, dt: f32, input: &InputState) {
        let speed = self.move_speed * dt;

        let moves = [
            (KeyCode::KeyW, [0.0, 0.0, speed]),
            (KeyCode::KeyS, [0.0, 0.0, -speed]),
            (KeyCode::KeyA, [-speed, 0.0, 0.0]),
            (KeyCode::KeyD, [speed, 0.0, 0.0]),
            (KeyCode::Space, [0.0, speed, 0.0]),
            (KeyCode::KeyX, [0.0, -speed, 0.0]),
        ];
        for (key, offset) in moves {
            if input.key_down(key) {
                self.transform.move_relative(offset);
            }
        }

        if input.right_mouse_down() {
            let delta = input.mouse_delta() * self.look_speed * dt;
            // vertical motion pitches, horizontal motion yaws
            self.transform.rotate([delta.y, delta.x, 0.0]);

            let rotation = self.transform.pitch_yaw_roll();
            let pitch = rotation.x.clamp(-PITCH_LIMIT, PITCH_LIMIT);
            if pitch != rotation.x {
                self.transform.set_rotation([pitch, rotation.y, rotation.z]);
            }
        }
    }
}

/// Left-handed perspective projection mapping depth to `[0, 1]`.
pub fn perspective_fov_lh(fov: Rad<f32>, aspect_ratio: f32, near: f32, far: f32) -> Matrix4<f32> {
    let height = 1.0 / (fov.0 * 0.5).tan();
    let width = height / aspect_ratio;
    let range = far / (far - near);

    #[rustfmt::skip]
    let projection = Matrix4::new(
        width, 0.0,    0.0,           0.0,
        0.0,   height, 0.0,           0.0,
        0.0,   0.0,    range,         1.0,
        0.0,   0.0,    -range * near, 0.0,
    );
    projection
}
