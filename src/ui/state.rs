//! Values edited through the debug UI, kept free of any egui types so the
//! renderer can read them and tests can drive them.

use std::collections::VecDeque;

use crate::config::AppConfig;

/// Number of frames averaged by [`FrameTimer`].
pub const FRAME_WINDOW: usize = 60;

pub const HAPPY_MAX: i32 = 100;
const HAPPY_UNKNOWN: &str = "happiness lvl???";
const HAPPY_REACHED: &str = ":]";

/// Rolling average of the last [`FRAME_WINDOW`] frame times.
#[derive(Clone, Debug, Default)]
pub struct FrameTimer {
    samples: VecDeque<f32>,
    total: f32,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, dt: f32) {
        if !dt.is_finite() || dt < 0.0 {
            return;
        }
        if self.samples.len() == FRAME_WINDOW {
            if let Some(oldest) = self.samples.pop_front() {
                self.total -= oldest;
            }
        }
        self.samples.push_back(dt);
        self.total += dt;
    }

    /// Frames per second over the window, zero until time has passed.
    pub fn fps(&self) -> f32 {
        if self.samples.is_empty() || self.total <= f32::EPSILON {
            return 0.0;
        }
        self.samples.len() as f32 / self.total
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub background_colour: [f32; 4],
    pub colour_tint: [f32; 4],
    pub show_demo_menu: bool,
    pub show_happy_meter: bool,
    happiness: i32,
    happiness_maxed: bool,
}

impl UiState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            background_colour: config.background_colour,
            colour_tint: config.colour_tint,
            show_demo_menu: false,
            show_happy_meter: false,
            happiness: 0,
            happiness_maxed: false,
        }
    }

    pub fn toggle_demo_menu(&mut self) {
        self.show_demo_menu = !self.show_demo_menu;
    }

    pub fn toggle_happy_meter(&mut self) {
        self.show_happy_meter = !self.show_happy_meter;
    }

    pub fn happiness(&self) -> i32 {
        self.happiness
    }

    /// Clamped to `0..=HAPPY_MAX`. Reaching the maximum changes the label for good.
    pub fn set_happiness(&mut self, value: i32) {
        self.happiness = value.clamp(0, HAPPY_MAX);
        if self.happiness == HAPPY_MAX {
            self.happiness_maxed = true;
        }
    }

    pub fn happy_message(&self) -> &'static str {
        if self.happiness_maxed {
            HAPPY_REACHED
        } else {
            HAPPY_UNKNOWN
        }
    }

    pub fn clear_colour(&self) -> wgpu::Color {
        let [r, g, b, a] = self.background_colour;
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}
