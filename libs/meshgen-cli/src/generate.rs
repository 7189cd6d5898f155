//! Shape commands: argument sets and the generate-then-write step.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use config::constants::{DEFAULT_HEIGHT, DEFAULT_RADIUS, DEFAULT_RINGS, DEFAULT_SEGMENTS};
use config::{GenerationConfig, Shape};

/// Arguments for the cylinder command
#[derive(Args, Debug)]
pub struct CylinderArgs {
    /// Number of segments around the circumference (>= 3)
    #[arg(short, long, default_value_t = DEFAULT_SEGMENTS)]
    pub segments: u32,

    /// Cylinder radius
    #[arg(short, long, default_value_t = DEFAULT_RADIUS)]
    pub radius: f64,

    /// Cylinder height along Y
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: f64,

    /// Emit vertex normals (vn lines and v//vn faces)
    #[arg(short, long)]
    pub normals: bool,

    /// Output OBJ file (defaults to cylinder_no_normals.obj / cylinder_with_normals.obj)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CylinderArgs {
    pub fn into_config(self) -> GenerationConfig {
        GenerationConfig {
            segments: self.segments,
            radius: self.radius,
            height: self.height,
            normals: self.normals,
            output_path: self.output,
            ..GenerationConfig::for_shape(Shape::Cylinder)
        }
    }
}

/// Arguments for the sphere command
#[derive(Args, Debug)]
pub struct SphereArgs {
    /// Number of longitude segments (>= 3)
    #[arg(short, long, default_value_t = DEFAULT_SEGMENTS)]
    pub segments: u32,

    /// Number of latitude rings (>= 1, >= 2 for a closed surface)
    #[arg(long, default_value_t = DEFAULT_RINGS)]
    pub rings: u32,

    /// Sphere radius
    #[arg(short, long, default_value_t = DEFAULT_RADIUS)]
    pub radius: f64,

    /// Emit vertex normals (vn lines and v//vn faces)
    #[arg(short, long)]
    pub normals: bool,

    /// Output OBJ file (defaults to sphere_no_normals.obj / sphere_with_normals.obj)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl SphereArgs {
    pub fn into_config(self) -> GenerationConfig {
        GenerationConfig {
            segments: self.segments,
            rings: self.rings,
            radius: self.radius,
            normals: self.normals,
            output_path: self.output,
            ..GenerationConfig::for_shape(Shape::Sphere)
        }
    }
}

/// Generates the configured mesh and writes it to disk.
pub fn execute(config: &GenerationConfig) -> Result<()> {
    tracing::info!(
        shape = %config.shape,
        segments = config.segments,
        normals = config.normals,
        "generating mesh"
    );

    let path = parametric_mesh::generate_to_file(config)
        .with_context(|| format!("Failed to generate {}", config.shape))?;

    println!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere_args(output: PathBuf) -> SphereArgs {
        SphereArgs {
            segments: 8,
            rings: 4,
            radius: 1.0,
            normals: false,
            output: Some(output),
        }
    }

    #[test]
    fn test_execute_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sphere.obj");
        execute(&sphere_args(path.clone()).into_config()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 26);
        assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 48);
    }

    #[test]
    fn test_execute_rejects_bad_parameters() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.obj");
        let mut args = sphere_args(path.clone());
        args.segments = 2;

        let err = execute(&args.into_config()).unwrap_err();
        assert!(format!("{err:#}").contains("segments"));
        assert!(!path.exists());
    }

    #[test]
    fn test_execute_reports_unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.obj");

        let err = execute(&sphere_args(path.clone()).into_config()).unwrap_err();
        assert!(format!("{err:#}").contains("missing"));
    }

    #[test]
    fn test_cylinder_args_into_config() {
        let args = CylinderArgs {
            segments: 6,
            radius: 0.5,
            height: 3.0,
            normals: true,
            output: None,
        };
        let config = args.into_config();
        assert_eq!(config.shape, Shape::Cylinder);
        assert_eq!(config.rings, DEFAULT_RINGS);
        assert_eq!(config.height, 3.0);
        assert!(config.normals);
    }
}
