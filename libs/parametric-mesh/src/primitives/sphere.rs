//! # Sphere Primitive
//!
//! Generates a UV-sphere using latitude/longitude tessellation with a
//! single shared vertex at each pole.

use config::constants::{sphere_vertex_count, MAX_RINGS, MAX_VERTICES, MIN_RINGS};
use glam::DVec3;
use std::f64::consts::PI;

use super::tessellate::{fan, quad_strip, CornerNormals, Ring, Winding};
use super::{check_positive, check_segments, ring_directions, NormalMode};
use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;

/// Validated UV-sphere parameters.
///
/// # Algorithm
///
/// - x = r·sinφ·cosθ, y = r·cosφ, z = r·sinφ·sinθ
/// - Interior latitudes φ = π·j/rings for j = 1..rings-1
/// - Longitudes θ = 2π·i/segments
/// - North pole first, then the interior rings, then the south pole
///
/// With `rings == 1` there is no interior ring: the mesh holds only the two
/// poles and no faces.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::primitives::{NormalMode, Sphere};
///
/// let sphere = Sphere::new(8, 4, 1.0).unwrap();
/// let mesh = sphere.to_mesh(NormalMode::Omit);
/// assert_eq!(mesh.vertex_count(), 26);
/// assert_eq!(mesh.face_count(), 48);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    segments: u32,
    rings: u32,
    radius: f64,
}

impl Sphere {
    /// Validates the parameters: `segments >= 3`, `rings >= 1`, positive radius.
    ///
    /// The total vertex count must also stay within `MAX_VERTICES`; this is
    /// checked before anything is allocated.
    pub fn new(segments: u32, rings: u32, radius: f64) -> MeshResult<Self> {
        check_segments("sphere", segments)?;
        if !(MIN_RINGS..=MAX_RINGS).contains(&rings) {
            return Err(MeshError::invalid_parameter(format!(
                "sphere rings must be in {MIN_RINGS}..={MAX_RINGS}: {rings}"
            )));
        }
        let vertices = sphere_vertex_count(segments, rings);
        if vertices > MAX_VERTICES {
            return Err(MeshError::invalid_parameter(format!(
                "sphere {segments}x{rings} would have {vertices} vertices, at most {MAX_VERTICES} allowed"
            )));
        }
        check_positive("sphere", "radius", radius)?;

        Ok(Self {
            segments,
            rings,
            radius,
        })
    }

    /// Number of longitudinal segments.
    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// Number of latitude divisions.
    pub fn rings(&self) -> u32 {
        self.rings
    }

    /// Sphere radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Vertices produced: two poles plus `rings - 1` interior rings.
    pub fn vertex_count(&self) -> usize {
        2 + self.segments as usize * (self.rings as usize - 1)
    }

    /// Triangles produced: two pole fans and two triangles per band quad.
    pub fn face_count(&self) -> usize {
        2 * self.segments as usize * (self.rings as usize - 1)
    }

    /// Builds the mesh.
    ///
    /// With [`NormalMode::Include`] every vertex gets the normal
    /// `position / radius`, stored at the vertex's own index.
    pub fn to_mesh(&self, normals: NormalMode) -> Mesh {
        let n = self.segments;
        let mut mesh = Mesh::with_capacity(self.vertex_count(), self.face_count());

        let add_point = |mesh: &mut Mesh, unit: DVec3| {
            let index = mesh.add_vertex(unit * self.radius);
            if normals.includes_normals() {
                mesh.add_normal(unit);
            }
            index
        };

        let north = add_point(&mut mesh, DVec3::Y);
        let mut rings = Vec::with_capacity(self.rings as usize - 1);
        for j in 1..self.rings {
            let phi = PI * j as f64 / self.rings as f64;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let ring = Ring::new(mesh.vertex_count() as u32, n);
            for dir in ring_directions(n) {
                add_point(&mut mesh, dir * sin_phi + DVec3::Y * cos_phi);
            }
            rings.push(ring);
        }
        let south = add_point(&mut mesh, DVec3::NEG_Y);

        let corners = match normals {
            NormalMode::Omit => CornerNormals::None,
            NormalMode::Include => CornerNormals::PerVertex,
        };

        if let (Some(&first), Some(&last)) = (rings.first(), rings.last()) {
            fan(&mut mesh, north, first, Winding::Reverse, corners);
            for band in rings.windows(2) {
                quad_strip(&mut mesh, band[0], band[1], Winding::Forward, corners);
            }
            fan(&mut mesh, south, last, Winding::Forward, corners);
        }

        tracing::debug!(
            segments = n,
            rings = self.rings,
            radius = self.radius,
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            normals = mesh.normal_count(),
            "generated sphere"
        );

        mesh
    }
}

/// Creates a UV-sphere mesh.
///
/// # Arguments
///
/// * `segments` - Longitude divisions (>= 3)
/// * `rings` - Latitude divisions (>= 1; a closed solid needs >= 2)
/// * `radius` - Sphere radius (> 0)
/// * `normals` - Whether to emit normals
///
/// # Example
///
/// ```rust
/// use parametric_mesh::primitives::{create_sphere, NormalMode};
///
/// let mesh = create_sphere(32, 16, 1.0, NormalMode::Omit).unwrap();
/// assert!(mesh.vertex_count() > 0);
/// ```
pub fn create_sphere(
    segments: u32,
    rings: u32,
    radius: f64,
    normals: NormalMode,
) -> MeshResult<Mesh> {
    Ok(Sphere::new(segments, rings, radius)?.to_mesh(normals))
}
