//! Scene data: meshes, materials, placed objects and lights.
//!
//! - `model` holds indexed meshes, interleaved vertices and materials
//! - `game_object` is a placed, scaled and rotated instance of a model
//! - `scene` groups models, objects, the skybox and the lights of a frame
//! - `light` is the closed set of light kinds and their uniform upload
//! - `terrain` tiles a height-map model into a square grid
//! - `chunk` fills a 16x16 column of voxel blocks

pub mod chunk;
pub mod game_object;
pub mod light;
pub mod model;
pub mod scene;
pub mod terrain;
