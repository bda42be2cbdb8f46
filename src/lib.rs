//! shape-ngin
//!
//! A small real-time renderer: a window, two shaders read from disk, three
//! hard-coded coloured meshes placed as six entities, a fly camera, and an
//! egui debug overlay for the background colour, the tint and the transforms.
//!
//! High-level modules
//! - `camera`: fly camera with left-handed look-to view and perspective projection
//! - `config`: window, asset and camera settings with environment overrides
//! - `context`: window, surface, device and queue
//! - `data_structures`: transforms, meshes, entities and the depth texture
//! - `flow`: the winit event loop that drives a frame
//! - `game`: the scene, its update step and its draw recording
//! - `input`: keyboard and mouse state collected from winit events
//! - `pipelines`: the render pipeline and the per-object constant buffer
//! - `resources`: shader loading and the built-in geometry
//! - `render`: draw helpers on the render pass
//! - `ui`: the debug overlay and the state it edits
//!

pub mod camera;
pub mod config;
pub mod context;
pub mod data_structures;
pub mod flow;
pub mod game;
pub mod input;
pub mod pipelines;
pub mod render;
pub mod resources;
pub mod ui;

// Re-exports commonly used types for convenience in downstream code.
pub use config::AppConfig;
pub use flow::run;
pub use winit::event::DeviceEvent;
pub use winit::event::WindowEvent;
pub use winit::keyboard::KeyCode;
