//! # Config to Mesh Conversion
//!
//! Turns a validated [`GenerationConfig`] into a mesh by dispatching on the
//! requested shape.

use config::{GenerationConfig, Shape};

use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::primitives::{create_cylinder, create_sphere, NormalMode};

/// Builds the mesh described by `config`.
///
/// The configuration is validated before any geometry is generated.
pub fn config_to_mesh(config: &GenerationConfig) -> MeshResult<Mesh> {
    config.validate()?;

    let normals = NormalMode::from_flag(config.normals);
    match config.shape {
        Shape::Cylinder => create_cylinder(config.segments, config.radius, config.height, normals),
        Shape::Sphere => create_sphere(config.segments, config.rings, config.radius, normals),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use config::ConfigError;

    #[test]
    fn test_default_cylinder() {
        let mesh = config_to_mesh(&GenerationConfig::cylinder()).unwrap();
        assert_eq!(mesh.vertex_count(), 66);
        assert_eq!(mesh.face_count(), 128);
        assert!(!mesh.has_normals());
    }

    #[test]
    fn test_default_sphere() {
        let mesh = config_to_mesh(&GenerationConfig::sphere()).unwrap();
        assert_eq!(mesh.vertex_count(), 2 + 32 * 15);
        assert_eq!(mesh.face_count(), 2 * 32 * 15);
    }

    #[test]
    fn test_normals_flag() {
        let mut cfg = GenerationConfig::sphere();
        cfg.normals = true;
        let mesh = config_to_mesh(&cfg).unwrap();
        assert_eq!(mesh.normal_count(), mesh.vertex_count());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut cfg = GenerationConfig::sphere();
        cfg.segments = 1;
        let err = config_to_mesh(&cfg).unwrap_err();
        assert!(matches!(err, MeshError::Config(ConfigError::InvalidSegments(1))));
    }
}
