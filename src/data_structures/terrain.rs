//! Tiled height-map terrain.

use cgmath::Vector3;

use crate::data_structures::{game_object::GameObject, scene::ModelId};

/// A square grid of terrain blocks sharing one height-map model.
///
/// Each block covers `scale x scale` world units (the height-map surface is a
/// unit quad) and the grid is centred on the origin.
#[derive(Debug, Clone)]
pub struct Terrain {
    pub blocks_per_row: u32,
    pub scale: f32,
    pub blocks: Vec<GameObject>,
}

impl Terrain {
    pub fn new(model: ModelId, blocks_per_row: u32, scale: f32) -> Self {
        let half = (blocks_per_row as f32 - 1.0) / 2.0;
        let mut blocks = Vec::with_capacity((blocks_per_row * blocks_per_row) as usize);
        for row in 0..blocks_per_row {
            for col in 0..blocks_per_row {
                let x = (col as f32 - half) * scale;
                let z = (row as f32 - half) * scale;
                blocks.push(GameObject::new(model, Vector3::new(x, 0.0, z)).with_scale(scale));
            }
        }
        Self {
            blocks_per_row,
            scale,
            blocks,
        }
    }
}
