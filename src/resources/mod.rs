use std::path::Path;

use anyhow::Context as _;

use crate::{
    data_structures::model::IndexedMesh,
    resources::{
        height_map::{HeightMapMesh, HeightMapOptions},
        obj::ObjIndexing,
    },
};

/**
 * This module contains all logic for loading meshes and height maps from external files.
 */
pub mod height_map;
pub mod mesh;
pub mod obj;

pub fn load_string(assets_dir: &Path, file_name: &str) -> anyhow::Result<String> {
    let path = assets_dir.join(file_name);
    std::fs::read_to_string(&path).with_context(|| format!("Could not read {}", path.display()))
}

pub fn load_binary(assets_dir: &Path, file_name: &str) -> anyhow::Result<Vec<u8>> {
    let path = assets_dir.join(file_name);
    std::fs::read(&path).with_context(|| format!("Could not read {}", path.display()))
}

pub fn load_mesh_obj(assets_dir: &Path, file_name: &str, indexing: ObjIndexing) -> anyhow::Result<IndexedMesh> {
    let obj_text = load_string(assets_dir, file_name)?;
    let mesh = obj::import(&obj_text, indexing).with_context(|| format!("Could not import {file_name}"))?;
    log::debug!(
        "Loaded {file_name}: {} vertices, {} triangles.",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

pub fn load_height_map(
    assets_dir: &Path,
    height_map_file: &str,
    texture_file: &str,
    options: HeightMapOptions,
) -> anyhow::Result<HeightMapMesh> {
    let bytes = load_binary(assets_dir, height_map_file)?;
    HeightMapMesh::from_bytes(&bytes, options, texture_file)
        .with_context(|| format!("Could not build a terrain from {height_map_file}"))
}
