//! # Ring Tessellation
//!
//! Triangulation helpers shared by every primitive: quad strips between two
//! vertex rings and triangle fans that close a ring onto an apex.
//!
//! Rings are laid out with θ increasing from +x toward +z. Seen from +y that
//! direction is clockwise, so a [`Winding::Forward`] fan `(apex, ring[i],
//! ring[i+1])` faces −y and a [`Winding::Reverse`] fan faces +y.

use crate::mesh::{Face, Mesh};

/// A contiguous run of vertex indices forming a closed loop.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::primitives::tessellate::Ring;
///
/// let ring = Ring::new(10, 4);
/// assert_eq!(ring.at(0), 10);
/// assert_eq!(ring.at(4), 10); // wraps around the seam
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ring {
    start: u32,
    len: u32,
}

impl Ring {
    /// Creates a ring of `len` vertices starting at `start`.
    pub fn new(start: u32, len: u32) -> Self {
        Self { start, len }
    }

    /// First vertex index.
    #[inline]
    pub fn start(self) -> u32 {
        self.start
    }

    /// Number of vertices in the ring.
    #[inline]
    pub fn len(self) -> u32 {
        self.len
    }

    /// Returns true for a ring without vertices.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Vertex index at position `i`, wrapping past the last vertex.
    #[inline]
    pub fn at(self, i: u32) -> u32 {
        self.start + i % self.len
    }

    /// Consecutive vertex pairs, including the seam pair `(last, first)`.
    pub fn edges(self) -> impl Iterator<Item = (u32, u32)> {
        (0..self.len).map(move |i| (self.at(i), self.at(i + 1)))
    }
}

/// Corner order applied to every triangle a helper emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Emit corners as listed.
    Forward,
    /// Swap the last two corners, flipping the facing.
    Reverse,
}

impl Winding {
    fn orient(self, [a, b, c]: [u32; 3]) -> [u32; 3] {
        match self {
            Winding::Forward => [a, b, c],
            Winding::Reverse => [a, c, b],
        }
    }
}

/// How normal indices are attached to emitted faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerNormals {
    /// Faces carry no normal indices.
    None,
    /// Each corner uses the normal with the same index as its vertex.
    PerVertex,
    /// Every corner uses the given normal index.
    Constant(u32),
}

impl CornerNormals {
    fn face(self, vertices: [u32; 3]) -> Face {
        match self {
            CornerNormals::None => Face::new(vertices),
            CornerNormals::PerVertex => Face::with_normals(vertices, vertices),
            CornerNormals::Constant(n) => Face::with_normals(vertices, [n; 3]),
        }
    }
}

fn emit(mesh: &mut Mesh, corners: [u32; 3], winding: Winding, normals: CornerNormals) {
    mesh.add_face(normals.face(winding.orient(corners)));
}

/// Stitches two rings of equal length with two triangles per quad.
///
/// With [`Winding::Forward`] each quad becomes `(upper[i], lower[i+1],
/// lower[i])` and `(upper[i], upper[i+1], lower[i+1])`, which faces away
/// from the Y axis when `upper` sits above `lower`.
pub fn quad_strip(
    mesh: &mut Mesh,
    upper: Ring,
    lower: Ring,
    winding: Winding,
    normals: CornerNormals,
) {
    debug_assert_eq!(upper.len(), lower.len(), "strip rings must match");

    for i in 0..upper.len() {
        let (u0, u1) = (upper.at(i), upper.at(i + 1));
        let (l0, l1) = (lower.at(i), lower.at(i + 1));

        emit(mesh, [u0, l1, l0], winding, normals);
        emit(mesh, [u0, u1, l1], winding, normals);
    }
}

/// Closes a ring onto a single apex vertex, one triangle per ring edge.
///
/// With [`Winding::Forward`] each triangle is `(apex, ring[i], ring[i+1])`.
pub fn fan(mesh: &mut Mesh, apex: u32, ring: Ring, winding: Winding, normals: CornerNormals) {
    for (a, b) in ring.edges() {
        emit(mesh, [apex, a, b], winding, normals);
    }
}
