//! Engine data structures: transforms, meshes, entities and textures.
//!
//! - `transform` holds position/rotation/scale and the cached world matrix
//! - `mesh` contains the vertex layout, CPU geometry and uploaded GPU meshes
//! - `entity` pairs a shared mesh with its own transform
//! - `texture` wraps the depth attachment

pub mod entity;
pub mod mesh;
pub mod texture;
pub mod transform;
