//! Keyboard and mouse state gathered from winit events.
//!
//! The event loop feeds every window and device event into [`InputState`];
//! game code polls it once per frame. When the debug UI owns a device the
//! matching queries go quiet so the camera does not move while a slider is
//! being dragged.

use std::collections::HashSet;

use cgmath::Vector2;
use winit::{
    event::{DeviceEvent, ElementState, MouseButton, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

#[derive(Debug, Default)]
pub struct InputState {
    keys_down: HashSet<KeyCode>,
    right_mouse_down: bool,
    mouse_delta: (f64, f64),
    keyboard_captured: bool,
    mouse_captured: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => self.press(code),
                        ElementState::Released => self.release(code),
                    }
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Right,
                ..
            } => self.set_right_mouse(state.is_pressed()),
            // keys released while unfocused never produce a release event
            WindowEvent::Focused(false) => {
                self.keys_down.clear();
                self.right_mouse_down = false;
            }
            _ => (),
        }
    }

    pub fn handle_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.accumulate_mouse_motion(*dx, *dy);
        }
    }

    pub fn press(&mut self, key: KeyCode) {
        self.keys_down.insert(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.keys_down.remove(&key);
    }

    pub fn set_right_mouse(&mut self, pressed: bool) {
        self.right_mouse_down = pressed;
    }

    pub fn accumulate_mouse_motion(&mut self, dx: f64, dy: f64) {
        self.mouse_delta.0 += dx;
        self.mouse_delta.1 += dy;
    }

    /// Mirrors the UI's wish to receive keyboard/pointer input this frame.
    pub fn set_capture(&mut self, keyboard: bool, mouse: bool) {
        self.keyboard_captured = keyboard;
        self.mouse_captured = mouse;
    }

    pub fn key_down(&self, key: KeyCode) -> bool {
        !self.keyboard_captured && self.keys_down.contains(&key)
    }

    pub fn right_mouse_down(&self) -> bool {
        !self.mouse_captured && self.right_mouse_down
    }

    /// Mouse motion accumulated since the last [`end_frame`](Self::end_frame).
    pub fn mouse_delta(&self) -> Vector2<f32> {
        if self.mouse_captured {
            return Vector2::new(0.0, 0.0);
        }
        Vector2::new(self.mouse_delta.0 as f32, self.mouse_delta.1 as f32)
    }

    pub fn quit_requested(&self) -> bool {
        self.key_down(KeyCode::Escape)
    }

    pub fn end_frame(&mut self) {
        self.mouse_delta = (0.0, 0.0);
    }
}
