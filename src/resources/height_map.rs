//! Height-encoded image to a triangulated terrain surface.
//!
//! The surface always covers the unit quad `[-0.5, 0.5] x [-0.5, 0.5]` in the
//! XZ plane; one vertex per pixel, heights between `min_y` and `max_y`. Scale
//! and placement are left to the game objects that reference the mesh.

use cgmath::{InnerSpace, Vector3};
use image::RgbaImage;

use crate::{
    data_structures::model::{IndexedMesh, Material},
    error::MeshError,
};

const START_X: f32 = -0.5;
const START_Z: f32 = -0.5;
const X_LENGTH: f32 = 1.0;
const Z_LENGTH: f32 = 1.0;
const MAX_COLOUR: f32 = (255 * 255 * 255) as f32;

/// How a pixel's channels are packed into a scalar height.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HeightEncoding {
    /// `(a << 24) | (r << 16) | (g << 18) | b`, read as a signed 32-bit value
    /// and divided by `255^3`.
    ///
    /// The green shift overlaps the red byte and opaque pixels come out
    /// negative; existing terrain assets were authored against this packing.
    #[default]
    Legacy,
    /// `(r << 16) | (g << 8) | b` divided by `0xFFFFFF`; alpha is ignored.
    /// Heights land in `[min_y, max_y]`.
    Rgb24,
}

impl HeightEncoding {
    /// Scalar in roughly `[0, 1]` for one RGBA pixel.
    pub fn decode(self, [r, g, b, a]: [u8; 4]) -> f32 {
        let (r, g, b, a) = (r as u32, g as u32, b as u32, a as u32);
        match self {
            HeightEncoding::Legacy => {
                let argb = (a << 24) | (r << 16) | (g << 18) | b;
                argb as i32 as f32 / MAX_COLOUR
            }
            HeightEncoding::Rgb24 => ((r << 16) | (g << 8) | b) as f32 / 0xFF_FFFF as f32,
        }
    }
}

/// Parameters of a height-map conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightMapOptions {
    pub min_y: f32,
    pub max_y: f32,
    /// How many times the terrain texture repeats across the surface.
    pub texture_repeat: u32,
    pub encoding: HeightEncoding,
}

impl HeightMapOptions {
    pub fn new(min_y: f32, max_y: f32, texture_repeat: u32) -> Self {
        Self {
            min_y,
            max_y,
            texture_repeat,
            encoding: HeightEncoding::default(),
        }
    }

    pub fn with_encoding(mut self, encoding: HeightEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    fn height(&self, pixel: [u8; 4]) -> f32 {
        self.min_y + (self.max_y - self.min_y).abs() * self.encoding.decode(pixel)
    }
}

/// A terrain mesh together with the material carrying its texture reference.
#[derive(Debug, Clone)]
pub struct HeightMapMesh {
    pub mesh: IndexedMesh,
    pub material: Material,
}

impl HeightMapMesh {
    /// Decode `bytes` (any format the `image` crate understands) and build the
    /// surface. `texture` is stored in the material untouched.
    ///
    /// The decoded pixel buffer lives only for the duration of this call.
    pub fn from_bytes(bytes: &[u8], options: HeightMapOptions, texture: &str) -> Result<Self, MeshError> {
        let image = image::load_from_memory(bytes)?.to_rgba8();
        let mesh = mesh_from_image(&image, options)?;
        Ok(Self {
            mesh,
            material: Material::textured(texture, 0.0),
        })
    }
}

/// Build the grid surface for an already decoded image.
pub fn mesh_from_image(image: &RgbaImage, options: HeightMapOptions) -> Result<IndexedMesh, MeshError> {
    let (width, height) = image.dimensions();
    if width < 2 || height < 2 {
        return Err(MeshError::HeightMapTooSmall { width, height });
    }

    let inc_x = X_LENGTH / (width - 1) as f32;
    let inc_z = Z_LENGTH / (height - 1) as f32;
    let repeat = options.texture_repeat as f32;

    let cells = width as usize * height as usize;
    let mut positions = Vec::with_capacity(cells * 3);
    let mut tex_coords = Vec::with_capacity(cells * 2);
    let mut indices = Vec::with_capacity((width as usize - 1) * (height as usize - 1) * 6);

    for row in 0..height {
        for col in 0..width {
            positions.push(START_X + col as f32 * inc_x);
            positions.push(options.height(image.get_pixel(col, row).0));
            positions.push(START_Z + row as f32 * inc_z);

            tex_coords.push(repeat * col as f32 / width as f32);
            tex_coords.push(repeat * row as f32 / height as f32);

            if col < width - 1 && row < height - 1 {
                let top_left = row * width + col;
                let bottom_left = (row + 1) * width + col;
                let bottom_right = (row + 1) * width + col + 1;
                let top_right = row * width + col + 1;

                indices.extend_from_slice(&[top_left, bottom_left, top_right]);
                indices.extend_from_slice(&[top_right, bottom_left, bottom_right]);
            }
        }
    }

    let normals = calc_normals(&positions, width as usize, height as usize);
    Ok(IndexedMesh::new(positions, tex_coords, normals, indices))
}

fn calc_normals(positions: &[f32], width: usize, height: usize) -> Vec<f32> {
    let at = |row: usize, col: usize| {
        let i = (row * width + col) * 3;
        Vector3::new(positions[i], positions[i + 1], positions[i + 2])
    };

    let mut normals = Vec::with_capacity(width * height * 3);
    for row in 0..height {
        for col in 0..width {
            let normal = if row > 0 && row < height - 1 && col > 0 && col < width - 1 {
                let v0 = at(row, col);
                let left = at(row, col - 1) - v0;
                let down = at(row + 1, col) - v0;
                let right = at(row, col + 1) - v0;
                let up = at(row - 1, col) - v0;

                let sum = left.cross(down).normalize()
                    + down.cross(right).normalize()
                    + right.cross(up).normalize()
                    + up.cross(left).normalize();
                sum.normalize()
            } else {
                Vector3::unit_y()
            };
            normals.extend_from_slice(&[normal.x, normal.y, normal.z]);
        }
    }
    normals
}
