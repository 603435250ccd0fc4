use cgmath::Vector3;

use crate::data_structures::{game_object::GameObject, scene::ModelId};

pub const CHUNK_SIZE: u32 = 16;
/// Layers `BOTTOM..TOP` are filled.
pub const CHUNK_BOTTOM: u32 = 5;
pub const CHUNK_TOP: u32 = 13;
/// First layer made of the top block instead of the filler block.
pub const TOP_LAYER_START: u32 = 7;
pub const BLOCK_SCALE: f32 = 0.5;

/// A `16 x 8 x 16` column of voxel blocks at chunk coordinates `(offset_x, offset_z)`.
///
/// Every block is its own game object; layers from [`TOP_LAYER_START`] up use
/// `top`, the ones below use `filler`.
#[derive(Debug, Clone)]
pub struct Chunk {
    pub offset_x: i32,
    pub offset_z: i32,
    pub blocks: Vec<GameObject>,
}

impl Chunk {
    pub fn new(top: ModelId, filler: ModelId, offset_x: i32, offset_z: i32) -> Self {
        let mut blocks = Vec::with_capacity((CHUNK_SIZE * (CHUNK_TOP - CHUNK_BOTTOM) * CHUNK_SIZE) as usize);
        for x in 0..CHUNK_SIZE {
            for y in CHUNK_BOTTOM..CHUNK_TOP {
                for z in 0..CHUNK_SIZE {
                    let model = if y >= TOP_LAYER_START { top } else { filler };
                    let position = Vector3::new(
                        (x as i32 + offset_x * CHUNK_SIZE as i32) as f32,
                        y as f32,
                        (z as i32 + offset_z * CHUNK_SIZE as i32) as f32,
                    );
                    blocks.push(GameObject::new(model, position).with_scale(BLOCK_SCALE));
                }
            }
        }
        Self {
            offset_x,
            offset_z,
            blocks,
        }
    }
}
