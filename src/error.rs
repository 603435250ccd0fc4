//! Errors raised by the mesh converters.

use thiserror::Error;

/// Failure of a single OBJ import or height-map conversion.
///
/// Every variant is terminal for the call that produced it: no partial mesh
/// is returned and nothing is retried. Asset loading wraps these into
/// `anyhow::Error` with the file name attached.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A malformed record in OBJ text (bad number, missing component, face
    /// without exactly three corners, index out of range).
    #[error("malformed OBJ record at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Error from the per-corner re-indexing path.
    #[error("OBJ could not be re-indexed: {0}")]
    Obj(#[from] tobj::LoadError),

    #[error("height map could not be decoded: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("height map must be at least 2x2 pixels, got {width}x{height}")]
    HeightMapTooSmall { width: u32, height: u32 },
}

impl MeshError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
