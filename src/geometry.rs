//! Fundamental geometric types for beam meshes.

use nalgebra::Point3;
use serde::Serialize;

use crate::errors::MeshError;

/// Position in three dimensional space measured in metres.
///
/// The beam axis runs along Z; X and Y span the cross-section.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    /// Distance along the global X axis.
    pub x: f64,
    /// Distance along the global Y axis.
    pub y: f64,
    /// Distance along the global Z axis.
    pub z: f64,
}

impl Point {
    /// Create a [`Point`] with explicit coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Convert the point into an algebraic point.
    #[must_use]
    pub fn to_point3(self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }

    /// Return the point with every coordinate multiplied by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

impl From<Point3<f64>> for Point {
    fn from(value: Point3<f64>) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl From<Point> for Point3<f64> {
    fn from(value: Point) -> Self {
        value.to_point3()
    }
}

/// Convenience helper for creating [`Point`] instances.
///
/// # Examples
/// ```
/// use beamgen::point;
///
/// let origin = point(0.0, 0.0, 0.0);
/// assert_eq!(origin.x, 0.0);
/// ```
#[must_use]
pub const fn point(x: f64, y: f64, z: f64) -> Point {
    Point::new(x, y, z)
}

/// Polygon mesh made of a vertex list and faces that index into it.
///
/// Faces are arbitrary polygons, not triangles. A renderer draws each face as
/// a filled polygon and then walks [`Mesh::edges`] to outline it.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Mesh {
    /// Vertex positions.
    pub vertices: Vec<Point>,
    /// Faces as ordered lists of vertex indices.
    pub faces: Vec<Vec<usize>>,
}

impl Mesh {
    /// Create a mesh from its vertex and face lists.
    #[must_use]
    pub fn from_parts(vertices: Vec<Point>, faces: Vec<Vec<usize>>) -> Self {
        Self { vertices, faces }
    }

    /// Return the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Return the number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check that every face has at least three vertices and only references
    /// vertices that exist.
    ///
    /// # Errors
    ///
    /// Returns the first [`MeshError`] found, scanning faces in order.
    ///
    /// # Examples
    /// ```
    /// use beamgen::{point, Mesh, MeshError};
    ///
    /// let mesh = Mesh::from_parts(
    ///     vec![point(0.0, 0.0, 0.0), point(1.0, 0.0, 0.0), point(0.0, 1.0, 0.0)],
    ///     vec![vec![0, 1, 3]],
    /// );
    /// assert_eq!(
    ///     mesh.validate(),
    ///     Err(MeshError::IndexOutOfRange { face: 0, index: 3, vertex_count: 3 })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();
        for (face, indices) in self.faces.iter().enumerate() {
            if indices.len() < 3 {
                return Err(MeshError::DegenerateFace {
                    face,
                    len: indices.len(),
                });
            }
            if let Some(&index) = indices.iter().find(|&&index| index >= vertex_count) {
                return Err(MeshError::IndexOutOfRange {
                    face,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    /// Iterate over the outline of every face as `(start, end)` index pairs.
    ///
    /// Each face contributes one pair per vertex, the last pair closing the
    /// loop back to the first vertex.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.faces.iter().flat_map(|face| {
            face.iter()
                .zip(face.iter().cycle().skip(1))
                .map(|(&start, &end)| (start, end))
        })
    }

    /// Return a copy of the mesh with every vertex scaled about the origin.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            vertices: self.vertices.iter().map(|v| v.scaled(factor)).collect(),
            faces: self.faces.clone(),
        }
    }
}
