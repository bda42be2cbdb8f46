//! Render pipeline construction and the constant data it binds.

pub mod basic;
pub mod uniforms;
