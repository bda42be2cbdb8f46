//! Startup configuration.
//!
//! Everything the application reads once before the first frame lives in
//! [`AppConfig`]. Nothing here is persisted; `main` builds the config from
//! [`Default`] and applies [`AppConfig::from_env`] overrides.

use std::{f32::consts::FRAC_PI_4, path::PathBuf};

/// Environment variable that overrides [`AppConfig::asset_dir`].
pub const ASSET_DIR_ENV: &str = "SHAPE_NGIN_ASSETS";

/// Intrinsic and control parameters of the fly camera.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraSettings {
    pub position: [f32; 3],
    /// Units per second.
    pub move_speed: f32,
    /// Radians per pixel of mouse motion per second.
    pub look_speed: f32,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub near_clip: f32,
    pub far_clip: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, -5.0],
            move_speed: 5.0,
            look_speed: 0.5,
            fov: FRAC_PI_4,
            near_clip: 0.01,
            far_clip: 100.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    /// Directory searched first for `shaders/<name>`; `OUT_DIR/assets` is the fallback.
    pub asset_dir: PathBuf,
    pub vertex_shader: String,
    pub pixel_shader: String,
    pub background_colour: [f32; 4],
    pub colour_tint: [f32; 4],
    pub camera: CameraSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "shape-ngin".to_string(),
            width: 1280,
            height: 720,
            vsync: true,
            asset_dir: PathBuf::from("assets"),
            vertex_shader: "VertexShader.wgsl".to_string(),
            pixel_shader: "PixelShader.wgsl".to_string(),
            background_colour: [0.4, 0.6, 0.75, 0.0],
            // slight red tint
            colour_tint: [1.0, 0.5, 0.5, 1.0],
            camera: CameraSettings::default(),
        }
    }
}

impl AppConfig {
    /// Applies environment overrides on top of `self`.
    pub fn from_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = lookup(ASSET_DIR_ENV).filter(|dir| !dir.is_empty()) {
            log::info!("asset directory overridden to {}", dir);
            self.asset_dir = PathBuf::from(dir);
        }
        self
    }

    /// Width divided by height of the initial window, never dividing by zero.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}
