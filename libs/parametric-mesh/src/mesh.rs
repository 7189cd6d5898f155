//! # Mesh Data Structure
//!
//! Triangle mesh with vertex positions, an optional normal list and faces
//! that reference both by 0-based index.

use glam::DVec3;

use crate::error::{MeshError, MeshResult};

/// A triangle with per-corner vertex indices and optional normal indices.
///
/// Corner `k` of `normals` belongs to corner `k` of `vertices`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    /// Vertex indices in winding order.
    pub vertices: [u32; 3],
    /// Normal indices aligned with `vertices`.
    pub normals: Option<[u32; 3]>,
}

impl Face {
    /// Creates a face without normal indices.
    pub fn new(vertices: [u32; 3]) -> Self {
        Self {
            vertices,
            normals: None,
        }
    }

    /// Creates a face with per-corner normal indices.
    pub fn with_normals(vertices: [u32; 3], normals: [u32; 3]) -> Self {
        Self {
            vertices,
            normals: Some(normals),
        }
    }
}

/// A triangle mesh produced in a single generation pass.
///
/// Builders fill the mesh and hand it out; the public API is read-only.
/// All positions are f64. Indices stay 0-based until export.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::{Face, Mesh};
/// use glam::DVec3;
///
/// let mesh = Mesh::from_parts(
///     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
///     None,
///     vec![Face::new([0, 1, 2])],
/// )
/// .unwrap();
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    normals: Option<Vec<DVec3>>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            normals: None,
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Assembles a mesh from raw parts, checking every index.
    ///
    /// Either `normals` is `None` and no face carries normal indices, or it
    /// is `Some` and every face does.
    pub fn from_parts(
        vertices: Vec<DVec3>,
        normals: Option<Vec<DVec3>>,
        faces: Vec<Face>,
    ) -> MeshResult<Self> {
        let vertex_count = vertices.len();
        let normal_count = normals.as_ref().map(Vec::len);

        for (index, face) in faces.iter().enumerate() {
            if let Some(&v) = face.vertices.iter().find(|&&v| v as usize >= vertex_count) {
                return Err(MeshError::invalid_topology(format!(
                    "face {index} references vertex {v} of {vertex_count}"
                )));
            }
            match (face.normals, normal_count) {
                (None, None) => {}
                (Some(corners), Some(count)) => {
                    if let Some(&n) = corners.iter().find(|&&n| n as usize >= count) {
                        return Err(MeshError::invalid_topology(format!(
                            "face {index} references normal {n} of {count}"
                        )));
                    }
                }
                (Some(_), None) => {
                    return Err(MeshError::invalid_topology(format!(
                        "face {index} has normal indices but the mesh has no normals"
                    )));
                }
                (None, Some(_)) => {
                    return Err(MeshError::invalid_topology(format!(
                        "face {index} is missing normal indices"
                    )));
                }
            }
        }

        Ok(Self {
            vertices,
            normals,
            faces,
        })
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of normals (zero when normals are omitted).
    #[inline]
    pub fn normal_count(&self) -> usize {
        self.normals.as_ref().map_or(0, Vec::len)
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns true if the mesh carries a normal list.
    #[inline]
    pub fn has_normals(&self) -> bool {
        self.normals.is_some()
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the normal list, if any.
    #[inline]
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Returns the faces.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the vertex at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.vertex_count()`. Use [`Mesh::vertices`]
    /// with `get` for a checked lookup.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the face at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.face_count()`. Use [`Mesh::faces`] with
    /// `get` for a checked lookup.
    #[inline]
    pub fn face(&self, index: usize) -> Face {
        self.faces[index]
    }

    /// Positions of the three corners of a face.
    pub fn corners(&self, face: &Face) -> [DVec3; 3] {
        face.vertices.map(|v| self.vertex(v))
    }

    /// Unit normal of the triangle under the right-hand rule.
    ///
    /// Returns zero for degenerate triangles.
    pub fn face_normal(&self, face: &Face) -> DVec3 {
        let [a, b, c] = self.corners(face);
        (b - a).cross(c - a).normalize_or_zero()
    }

    /// Centroid of the triangle.
    pub fn face_centroid(&self, face: &Face) -> DVec3 {
        let [a, b, c] = self.corners(face);
        (a + b + c) / 3.0
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Adds a vertex and returns its index.
    pub(crate) fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a normal and returns its index, creating the normal list on
    /// first use.
    pub(crate) fn add_normal(&mut self, normal: DVec3) -> u32 {
        let normals = self.normals.get_or_insert_with(Vec::new);
        let index = normals.len() as u32;
        normals.push(normal);
        index
    }

    /// Adds a face.
    pub(crate) fn add_face(&mut self, face: Face) {
        self.faces.push(face);
    }
}
