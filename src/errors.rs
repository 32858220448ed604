//! Error types produced while describing beams or building their meshes.

use thiserror::Error;

/// Error returned when a beam cannot be described, analysed or meshed.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BeamError {
    /// Returned when a cross-section name does not match a supported family.
    #[error("cross section {0:?} is not supported (expected square, circle or I-beam)")]
    UnsupportedCrossSection(String),
    /// Returned when a width or length is zero, negative or not finite.
    #[error("{name} must be a positive, finite length (received {value})")]
    InvalidDimension {
        /// Which dimension was rejected.
        name: &'static str,
        /// Rejected value in metres.
        value: f64,
    },
    /// Returned when a material name is not part of the registry.
    #[error("material {0:?} is not in the registry")]
    UnknownMaterial(String),
    /// Returned when a beam quantity name cannot be used as a plot axis.
    #[error("{0:?} is not a beam quantity")]
    UnknownQuantity(String),
    /// Returned when a mesh breaks its topological invariants.
    #[error("invalid mesh: {0}")]
    InvalidMesh(#[from] MeshError),
}

/// Reason a [`Mesh`](crate::Mesh) fails validation.
///
/// Faces are identified by their position in the face list so callers can
/// point a renderer at the offending polygon.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    /// Returned when a face references fewer than three vertices.
    #[error("face {face} has {len} vertices; a polygon needs at least 3")]
    DegenerateFace {
        /// Position of the face in the face list.
        face: usize,
        /// Number of vertex indices in the face.
        len: usize,
    },
    /// Returned when a face references a vertex that does not exist.
    #[error("face {face} references vertex {index} but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        /// Position of the face in the face list.
        face: usize,
        /// Offending vertex index.
        index: usize,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },
}

/// Ensure a beam dimension is strictly positive and finite.
pub(crate) fn check_dimension(name: &'static str, value: f64) -> Result<f64, BeamError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(BeamError::InvalidDimension { name, value })
    }
}
