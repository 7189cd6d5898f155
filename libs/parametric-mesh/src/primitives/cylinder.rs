//! # Cylinder Primitive
//!
//! Generates a closed cylinder centered on the origin with its axis along Y.

use glam::DVec3;

use super::tessellate::{fan, quad_strip, CornerNormals, Ring, Winding};
use super::{check_positive, check_segments, ring_directions, NormalMode};
use crate::error::MeshResult;
use crate::mesh::Mesh;

/// Validated cylinder parameters.
///
/// # Layout
///
/// - Vertices `0..n`: top ring at `y = +height/2`
/// - Vertices `n..2n`: bottom ring at `y = -height/2`
/// - Vertex `2n`: top center, vertex `2n + 1`: bottom center
///
/// With normals, the normal list mirrors the two rings (radial directions)
/// followed by one `+Y` and one `-Y` cap normal.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::primitives::{Cylinder, NormalMode};
///
/// let cylinder = Cylinder::new(4, 1.0, 2.0).unwrap();
/// let mesh = cylinder.to_mesh(NormalMode::Omit);
/// assert_eq!(mesh.vertex_count(), 10);
/// assert_eq!(mesh.face_count(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    segments: u32,
    radius: f64,
    height: f64,
}

impl Cylinder {
    /// Validates the parameters: `segments >= 3`, positive radius and height.
    pub fn new(segments: u32, radius: f64, height: f64) -> MeshResult<Self> {
        check_segments("cylinder", segments)?;
        check_positive("cylinder", "radius", radius)?;
        check_positive("cylinder", "height", height)?;

        Ok(Self {
            segments,
            radius,
            height,
        })
    }

    /// Number of segments around each ring.
    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// Radius of the rings.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Distance between the two caps.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Vertices produced: two rings plus two cap centers.
    pub fn vertex_count(&self) -> usize {
        2 * self.segments as usize + 2
    }

    /// Triangles produced: two per side quad plus one per cap edge on each cap.
    pub fn face_count(&self) -> usize {
        4 * self.segments as usize
    }

    /// Builds the mesh.
    pub fn to_mesh(&self, normals: NormalMode) -> Mesh {
        let n = self.segments;
        let half = self.height / 2.0;
        let mut mesh = Mesh::with_capacity(self.vertex_count(), self.face_count());

        let top = Ring::new(mesh.vertex_count() as u32, n);
        for dir in ring_directions(n) {
            mesh.add_vertex(dir * self.radius + DVec3::Y * half);
        }
        let bottom = Ring::new(mesh.vertex_count() as u32, n);
        for dir in ring_directions(n) {
            mesh.add_vertex(dir * self.radius - DVec3::Y * half);
        }
        let top_center = mesh.add_vertex(DVec3::new(0.0, half, 0.0));
        let bottom_center = mesh.add_vertex(DVec3::new(0.0, -half, 0.0));

        let (side, top_cap, bottom_cap) = match normals {
            NormalMode::Omit => (CornerNormals::None, CornerNormals::None, CornerNormals::None),
            NormalMode::Include => {
                // Ring normals share indices with ring vertices.
                for _ring in 0..2 {
                    for dir in ring_directions(n) {
                        mesh.add_normal(dir);
                    }
                }
                let up = mesh.add_normal(DVec3::Y);
                let down = mesh.add_normal(DVec3::NEG_Y);
                (
                    CornerNormals::PerVertex,
                    CornerNormals::Constant(up),
                    CornerNormals::Constant(down),
                )
            }
        };

        quad_strip(&mut mesh, top, bottom, Winding::Forward, side);
        fan(&mut mesh, top_center, top, Winding::Reverse, top_cap);
        fan(&mut mesh, bottom_center, bottom, Winding::Forward, bottom_cap);

        tracing::debug!(
            segments = n,
            radius = self.radius,
            height = self.height,
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            normals = mesh.normal_count(),
            "generated cylinder"
        );

        mesh
    }
}

/// Creates a closed cylinder mesh.
///
/// # Arguments
///
/// * `segments` - Number of segments around the circumference (>= 3)
/// * `radius` - Ring radius (> 0)
/// * `height` - Height along Y, centered on the origin (> 0)
/// * `normals` - Whether to emit normals
///
/// # Example
///
/// ```rust
/// use parametric_mesh::primitives::{create_cylinder, NormalMode};
///
/// let mesh = create_cylinder(32, 1.0, 2.0, NormalMode::Include).unwrap();
/// assert_eq!(mesh.normal_count(), 66);
/// ```
pub fn create_cylinder(
    segments: u32,
    radius: f64,
    height: f64,
    normals: NormalMode,
) -> MeshResult<Mesh> {
    Ok(Cylinder::new(segments, radius, height)?.to_mesh(normals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use approx::assert_abs_diff_eq;
    use config::constants::NORMAL_TOLERANCE;

    fn assert_vec_eq(actual: DVec3, expected: DVec3) {
        assert_abs_diff_eq!(actual.x, expected.x, epsilon = NORMAL_TOLERANCE);
        assert_abs_diff_eq!(actual.y, expected.y, epsilon = NORMAL_TOLERANCE);
        assert_abs_diff_eq!(actual.z, expected.z, epsilon = NORMAL_TOLERANCE);
    }

    #[test]
    fn test_cylinder_counts() {
        for segments in [3, 4, 7, 32, 64] {
            let mesh = create_cylinder(segments, 1.0, 2.0, NormalMode::Omit).unwrap();
            assert_eq!(mesh.vertex_count(), 2 * segments as usize + 2);
            assert_eq!(mesh.face_count(), 4 * segments as usize);
            assert!(!mesh.has_normals());
        }
    }

    #[test]
    fn test_cylinder_four_segments_layout() {
        let mesh = create_cylinder(4, 1.0, 2.0, NormalMode::Omit).unwrap();
        assert_eq!(mesh.vertex_count(), 10);
        assert_eq!(mesh.face_count(), 16);

        // Top ring at y = 1 at 0°, 90°, 180°, 270°.
        let expected = [
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(0.0, 1.0, 1.0),
            DVec3::new(-1.0, 1.0, 0.0),
            DVec3::new(0.0, 1.0, -1.0),
        ];
        for (i, want) in expected.into_iter().enumerate() {
            assert_vec_eq(mesh.vertex(i as u32), want);
            assert_vec_eq(mesh.vertex(i as u32 + 4), want - DVec3::Y * 2.0);
        }
        assert_eq!(mesh.vertex(8), DVec3::new(0.0, 1.0, 0.0));
        assert_eq!(mesh.vertex(9), DVec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_cylinder_face_order() {
        let mesh = create_cylinder(4, 1.0, 2.0, NormalMode::Omit).unwrap();
        // Side wall first, then top cap, then bottom cap.
        assert_eq!(mesh.face(0).vertices, [0, 5, 4]);
        assert_eq!(mesh.face(1).vertices, [0, 1, 5]);
        assert_eq!(mesh.face(8).vertices, [8, 1, 0]);
        assert_eq!(mesh.face(12).vertices, [9, 4, 5]);
    }

    #[test]
    fn test_cylinder_bounding_box() {
        let mesh = create_cylinder(32, 3.0, 10.0, NormalMode::Omit).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_abs_diff_eq!(min.y, -5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(max.y, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(max.x, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(min.x, -3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cylinder_faces_point_outward() {
        let mesh = create_cylinder(12, 1.5, 4.0, NormalMode::Omit).unwrap();
        for face in mesh.faces() {
            let normal = mesh.face_normal(face);
            let centroid = mesh.face_centroid(face);
            let outward = if face.vertices.contains(&24) {
                DVec3::Y
            } else if face.vertices.contains(&25) {
                DVec3::NEG_Y
            } else {
                DVec3::new(centroid.x, 0.0, centroid.z)
            };
            assert!(normal.dot(outward) > 0.0, "face {:?} points inward", face);
        }
    }

    #[test]
    fn test_cylinder_normals_layout() {
        let segments = 6;
        let mesh = create_cylinder(segments, 2.0, 1.0, NormalMode::Include).unwrap();
        let normals = mesh.normals().unwrap();
        assert_eq!(normals.len(), 2 * segments as usize + 2);

        for i in 0..segments as usize {
            let top = normals[i];
            let bottom = normals[i + segments as usize];
            assert_eq!(top, bottom);
            assert_eq!(top.y, 0.0);
            assert_abs_diff_eq!(top.length(), 1.0, epsilon = NORMAL_TOLERANCE);
        }
        assert_eq!(normals[2 * segments as usize], DVec3::Y);
        assert_eq!(normals[2 * segments as usize + 1], DVec3::NEG_Y);
    }

    #[test]
    fn test_cylinder_normals_match_geometry() {
        let segments = 8;
        let mesh = create_cylinder(segments, 1.0, 2.0, NormalMode::Include).unwrap();
        let normals = mesh.normals().unwrap();
        let (top_center, bottom_center) = (2 * segments, 2 * segments + 1);

        for face in mesh.faces() {
            let corners = face.normals.unwrap();
            if face.vertices[0] == top_center {
                assert_eq!(corners, [top_center; 3]);
            } else if face.vertices[0] == bottom_center {
                assert_eq!(corners, [bottom_center; 3]);
            } else {
                assert_eq!(corners, face.vertices);
                for (&v, &n) in face.vertices.iter().zip(corners.iter()) {
                    let p = mesh.vertex(v);
                    let radial = DVec3::new(p.x, 0.0, p.z).normalize();
                    assert_vec_eq(normals[n as usize], radial);
                }
            }
        }
    }

    #[test]
    fn test_cylinder_three_segments_closes() {
        let mesh = create_cylinder(3, 1.0, 1.0, NormalMode::Include).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 12);
        assert_eq!(mesh.normal_count(), 8);
    }

    #[test]
    fn test_cylinder_too_few_segments() {
        let result = create_cylinder(2, 1.0, 2.0, NormalMode::Omit);
        assert!(matches!(result, Err(MeshError::InvalidParameter { .. })));
    }

    #[test]
    fn test_cylinder_invalid_radius() {
        assert!(create_cylinder(8, 0.0, 2.0, NormalMode::Omit).is_err());
        assert!(create_cylinder(8, -1.0, 2.0, NormalMode::Omit).is_err());
    }

    #[test]
    fn test_cylinder_invalid_height() {
        let result = create_cylinder(8, 1.0, 0.0, NormalMode::Omit);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("height"));
    }

    #[test]
    fn test_cylinder_accessors() {
        let cylinder = Cylinder::new(5, 0.5, 3.0).unwrap();
        assert_eq!(cylinder.segments(), 5);
        assert_eq!(cylinder.radius(), 0.5);
        assert_eq!(cylinder.height(), 3.0);
        assert_eq!(cylinder.vertex_count(), 12);
        assert_eq!(cylinder.face_count(), 20);
    }
}
