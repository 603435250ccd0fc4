//! voxel-ngin
//!
//! A small voxel-world scene library. It turns OBJ files and height maps
//! into indexed meshes, lights a scene with ambient, point, spot and
//! directional lights, and prepares everything a forward renderer consumes:
//! interleaved vertex buffers, packed light uniforms, transformation matrices
//! and frustum visibility flags. The crate never opens a window; input
//! arrives as `winit` events and the HUD is produced as plain data.
//!
//! High-level modules
//! - `camera`: first-person camera and mouse look
//! - `context`: settings and per-session state (camera, input, timer)
//! - `data_structures`: meshes, materials, game objects, lights, scenes
//! - `frustum`: sphere-vs-frustum culling
//! - `game`: fixed-timestep tick driver and the demo world
//! - `hud`: debug overlay description
//! - `input`: key and mouse state fed from window events
//! - `pipelines`: uniform sinks and the GPU light block
//! - `resources`: OBJ and height-map importers, GPU mesh upload
//! - `timer`: FPS/TPS counters
//! - `transformations`: projection, view and model-view matrices
//!

pub mod camera;
pub mod context;
pub mod data_structures;
pub mod error;
pub mod frustum;
pub mod game;
pub mod hud;
pub mod input;
pub mod pipelines;
pub mod resources;
pub mod timer;
pub mod transformations;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use winit::dpi::PhysicalPosition;
pub use winit::event::WindowEvent;
pub use winit::keyboard::KeyCode;
