//! OBJ text to [`IndexedMesh`].
//!
//! Only four record types matter: `v x y z`, `vt u v`, `vn x y z` and
//! `f a b c` where each corner is `pos[/tex][/norm]` with 1-based indices.
//! Every other record (`o`, `g`, `s`, `usemtl`, comments, ...) is skipped.

use std::str::{FromStr, SplitWhitespace};

use cgmath::{Vector2, Vector3};

use crate::{data_structures::model::IndexedMesh, error::MeshError};

/// How face corners are turned into output vertices.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ObjIndexing {
    /// One output vertex per `v` record. Texture coordinates and normals are
    /// written into the slot of the position they are attached to, so a
    /// position shared by faces with different attributes keeps those of the
    /// last face that references it.
    #[default]
    PositionSlot,
    /// One output vertex per distinct `(position, texcoord, normal)` corner.
    /// Vertex counts differ from [`ObjIndexing::PositionSlot`] whenever a
    /// position carries more than one attribute combination. Faces with more
    /// than three corners are triangulated.
    UniqueCorners,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Corner {
    position: usize,
    tex_coord: Option<usize>,
    normal: Option<usize>,
}

/// A triangle as written in the file. Indices are resolved once every record
/// has been read, so faces may refer to vertices declared after them.
#[derive(Debug, Clone, Copy)]
struct Face {
    line_no: usize,
    corners: [Corner; 3],
}

#[derive(Debug, Default)]
struct ObjData {
    positions: Vec<Vector3<f32>>,
    tex_coords: Vec<Vector2<f32>>,
    normals: Vec<Vector3<f32>>,
    faces: Vec<Face>,
}

pub fn import(text: &str, indexing: ObjIndexing) -> Result<IndexedMesh, MeshError> {
    match indexing {
        ObjIndexing::PositionSlot => import_lines(text.lines()),
        ObjIndexing::UniqueCorners => import_unique_corners(text),
    }
}

/// Parse OBJ lines and re-index them by position slot.
///
/// An input without any line yields an empty mesh and a warning rather than
/// an error.
pub fn import_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<IndexedMesh, MeshError> {
    let mut lines = lines.into_iter().peekable();
    if lines.peek().is_none() {
        log::warn!("OBJ input contains no lines, returning an empty mesh.");
        return Ok(IndexedMesh::default());
    }
    let data = parse(lines)?;
    reorder(&data)
}

fn parse<'a>(lines: impl Iterator<Item = &'a str>) -> Result<ObjData, MeshError> {
    let mut data = ObjData::default();
    for (n, line) in lines.enumerate() {
        let line_no = n + 1;
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => {
                let [x, y, z] = floats(&mut tokens, line_no)?;
                data.positions.push(Vector3::new(x, y, z));
            }
            Some("vt") => {
                let [u, v] = floats(&mut tokens, line_no)?;
                data.tex_coords.push(Vector2::new(u, v));
            }
            Some("vn") => {
                let [x, y, z] = floats(&mut tokens, line_no)?;
                data.normals.push(Vector3::new(x, y, z));
            }
            Some("f") => {
                let corners: Vec<&str> = tokens.collect();
                if corners.len() != 3 {
                    return Err(MeshError::parse(
                        line_no,
                        format!("face needs exactly 3 vertices, found {}", corners.len()),
                    ));
                }
                data.faces.push(Face {
                    line_no,
                    corners: [
                        corner(corners[0], line_no)?,
                        corner(corners[1], line_no)?,
                        corner(corners[2], line_no)?,
                    ],
                });
            }
            _ => (),
        }
    }
    Ok(data)
}

/// Read exactly `N` floats from the remaining tokens of a record.
///
/// Extra trailing components (e.g. the optional `w` of `v`) are ignored.
fn floats<const N: usize>(tokens: &mut SplitWhitespace<'_>, line_no: usize) -> Result<[f32; N], MeshError> {
    let mut out = [0.0; N];
    for slot in out.iter_mut() {
        let token = tokens
            .next()
            .ok_or_else(|| MeshError::parse(line_no, format!("expected {} components", N)))?;
        *slot = number(token, line_no)?;
    }
    Ok(out)
}

fn number<T: FromStr>(token: &str, line_no: usize) -> Result<T, MeshError> {
    token
        .parse()
        .map_err(|_| MeshError::parse(line_no, format!("`{token}` is not a number")))
}

/// Convert a 1-based reference to a 0-based index.
fn index(token: &str, what: &str, line_no: usize) -> Result<usize, MeshError> {
    let idx: usize = number(token, line_no)?;
    idx.checked_sub(1)
        .ok_or_else(|| MeshError::parse(line_no, format!("{what} index 0 is not valid, indices start at 1")))
}

/// Check a 0-based index against the final length of its list.
fn resolve<T: Copy>(items: &[T], idx: usize, what: &str, line_no: usize) -> Result<T, MeshError> {
    items.get(idx).copied().ok_or_else(|| {
        MeshError::parse(
            line_no,
            format!("{what} index {} out of range (1..={})", idx + 1, items.len()),
        )
    })
}

/// Parse one `pos[/tex][/norm]` descriptor. Empty `tex` or `norm` parts mean
/// the attribute is absent.
fn corner(descriptor: &str, line_no: usize) -> Result<Corner, MeshError> {
    let mut parts = descriptor.split('/');
    let position = index(parts.next().unwrap_or_default(), "position", line_no)?;
    let tex_coord = match parts.next() {
        Some(t) if !t.is_empty() => Some(index(t, "texture coordinate", line_no)?),
        _ => None,
    };
    let normal = match parts.next() {
        Some(n) if !n.is_empty() => Some(index(n, "normal", line_no)?),
        _ => None,
    };
    Ok(Corner {
        position,
        tex_coord,
        normal,
    })
}

fn reorder(data: &ObjData) -> Result<IndexedMesh, MeshError> {
    let vertex_count = data.positions.len();
    let mut positions = Vec::with_capacity(vertex_count * 3);
    for p in &data.positions {
        positions.extend_from_slice(&[p.x, p.y, p.z]);
    }
    let mut tex_coords = vec![0.0; vertex_count * 2];
    let mut normals = vec![0.0; vertex_count * 3];
    let mut indices = Vec::with_capacity(data.faces.len() * 3);

    for face in &data.faces {
        for corner in &face.corners {
            let slot = corner.position;
            resolve(&data.positions, slot, "position", face.line_no)?;
            indices.push(slot as u32);
            if let Some(t) = corner.tex_coord {
                let tex_coord = resolve(&data.tex_coords, t, "texture coordinate", face.line_no)?;
                tex_coords[slot * 2] = tex_coord.x;
                tex_coords[slot * 2 + 1] = 1.0 - tex_coord.y;
            }
            if let Some(n) = corner.normal {
                let normal = resolve(&data.normals, n, "normal", face.line_no)?;
                normals[slot * 3..slot * 3 + 3].copy_from_slice(&[normal.x, normal.y, normal.z]);
            }
        }
    }

    Ok(IndexedMesh::new(positions, tex_coords, normals, indices))
}

/// Per-corner re-indexing, delegated to `tobj`. All objects of the file are
/// merged into one mesh.
fn import_unique_corners(text: &str) -> Result<IndexedMesh, MeshError> {
    if text.trim().is_empty() {
        log::warn!("OBJ input contains no lines, returning an empty mesh.");
        return Ok(IndexedMesh::default());
    }
    let (models, _materials) = tobj::load_obj_buf(
        &mut text.as_bytes(),
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
        // Materials are bound elsewhere, mtllib references are not followed.
        |_| Err(tobj::LoadError::OpenFileFailed),
    )?;

    let mut mesh = IndexedMesh::default();
    for m in models {
        let offset = mesh.vertex_count() as u32;
        let count = m.mesh.positions.len() / 3;
        mesh.positions.extend_from_slice(&m.mesh.positions);
        for i in 0..count {
            mesh.tex_coords.push(m.mesh.texcoords.get(i * 2).map_or(0.0, |f| *f));
            mesh.tex_coords
                .push(m.mesh.texcoords.get(i * 2 + 1).map_or(0.0, |v| 1.0 - *v));
            for k in 0..3 {
                mesh.normals.push(m.mesh.normals.get(i * 3 + k).map_or(0.0, |f| *f));
            }
        }
        mesh.indices.extend(m.mesh.indices.iter().map(|i| i + offset));
    }
    Ok(mesh)
}
