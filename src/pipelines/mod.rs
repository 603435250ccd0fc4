//! Uniform plumbing between the scene data and the shaders.

pub mod light;
pub mod uniforms;
