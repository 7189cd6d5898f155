//! Generation parameters shared by the mesh builders and the CLI.
//!
//! A [`GenerationConfig`] names every tunable value explicitly instead of
//! relying on positional defaults. Each shape starts from its own defaults
//! and callers override individual fields.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::constants::{
    sphere_vertex_count, CYLINDER_NORMALS_OUTPUT, CYLINDER_OUTPUT, DEFAULT_HEIGHT, DEFAULT_RADIUS,
    DEFAULT_RINGS, DEFAULT_SEGMENTS, MAX_RINGS, MAX_SEGMENTS, MAX_VERTICES, MIN_RINGS,
    MIN_SEGMENTS, SPHERE_NORMALS_OUTPUT, SPHERE_OUTPUT,
};

/// Solid to generate.
///
/// # Examples
/// ```
/// use config::generation::Shape;
/// assert_eq!(Shape::Sphere.to_string(), "sphere");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Closed cylinder with flat caps.
    Cylinder,
    /// UV-sphere with pole fans.
    Sphere,
}

impl Shape {
    /// Lowercase name used in log output.
    pub fn name(self) -> &'static str {
        match self {
            Shape::Cylinder => "cylinder",
            Shape::Sphere => "sphere",
        }
    }

    /// File written when no explicit output path is given.
    ///
    /// # Examples
    /// ```
    /// use config::generation::Shape;
    /// assert_eq!(Shape::Cylinder.default_output(false), "cylinder_no_normals.obj");
    /// assert_eq!(Shape::Cylinder.default_output(true), "cylinder_with_normals.obj");
    /// ```
    pub fn default_output(self, normals: bool) -> &'static str {
        match (self, normals) {
            (Shape::Cylinder, false) => CYLINDER_OUTPUT,
            (Shape::Cylinder, true) => CYLINDER_NORMALS_OUTPUT,
            (Shape::Sphere, false) => SPHERE_OUTPUT,
            (Shape::Sphere, true) => SPHERE_NORMALS_OUTPUT,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Complete set of parameters for one generation run.
///
/// `rings` only applies to spheres and `height` only to cylinders; the
/// unused field keeps its default and is not validated.
///
/// # Examples
/// ```
/// use config::generation::GenerationConfig;
///
/// let cfg = GenerationConfig::sphere();
/// assert_eq!(cfg.segments, 32);
/// assert_eq!(cfg.rings, 16);
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Which solid to build.
    pub shape: Shape,
    /// Longitudinal divisions around every ring.
    pub segments: u32,
    /// Latitude divisions (sphere only).
    pub rings: u32,
    /// Radius of the solid.
    pub radius: f64,
    /// Height along Y (cylinder only).
    pub height: f64,
    /// Whether to emit per-corner normals.
    pub normals: bool,
    /// Explicit destination; `None` selects the shape's default file name.
    pub output_path: Option<PathBuf>,
}

impl GenerationConfig {
    /// Defaults for the given shape.
    pub fn for_shape(shape: Shape) -> Self {
        Self {
            shape,
            segments: DEFAULT_SEGMENTS,
            rings: DEFAULT_RINGS,
            radius: DEFAULT_RADIUS,
            height: DEFAULT_HEIGHT,
            normals: false,
            output_path: None,
        }
    }

    /// Cylinder defaults: 32 segments, radius 1, height 2.
    pub fn cylinder() -> Self {
        Self::for_shape(Shape::Cylinder)
    }

    /// Sphere defaults: 32 segments, 16 rings, radius 1.
    pub fn sphere() -> Self {
        Self::for_shape(Shape::Sphere)
    }

    /// Resolved destination path.
    ///
    /// # Examples
    /// ```
    /// use config::generation::GenerationConfig;
    /// use std::path::Path;
    ///
    /// let mut cfg = GenerationConfig::sphere();
    /// cfg.normals = true;
    /// assert_eq!(cfg.output_path(), Path::new("sphere_with_normals.obj"));
    /// ```
    pub fn output_path(&self) -> &Path {
        match &self.output_path {
            Some(path) => path,
            None => Path::new(self.shape.default_output(self.normals)),
        }
    }

    /// Checks every parameter the selected shape uses.
    ///
    /// # Examples
    /// ```
    /// use config::generation::{ConfigError, GenerationConfig};
    ///
    /// let mut cfg = GenerationConfig::cylinder();
    /// cfg.height = 0.0;
    /// assert_eq!(cfg.validate(), Err(ConfigError::InvalidHeight(0.0)));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&self.segments) {
            return Err(ConfigError::InvalidSegments(self.segments));
        }
        if !is_positive(self.radius) {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        match self.shape {
            Shape::Cylinder => {
                if !is_positive(self.height) {
                    return Err(ConfigError::InvalidHeight(self.height));
                }
            }
            Shape::Sphere => {
                if !(MIN_RINGS..=MAX_RINGS).contains(&self.rings) {
                    return Err(ConfigError::InvalidRings(self.rings));
                }
                let vertices = sphere_vertex_count(self.segments, self.rings);
                if vertices > MAX_VERTICES {
                    return Err(ConfigError::TooManyVertices(vertices));
                }
            }
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::cylinder()
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Error returned when generation parameters are out of range.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Segment count outside `MIN_SEGMENTS..=MAX_SEGMENTS`.
    InvalidSegments(u32),
    /// Ring count outside `MIN_RINGS..=MAX_RINGS`.
    InvalidRings(u32),
    /// Radius is zero, negative or not finite.
    InvalidRadius(f64),
    /// Height is zero, negative or not finite.
    InvalidHeight(f64),
    /// Segment and ring counts together exceed `MAX_VERTICES`.
    TooManyVertices(u64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSegments(value) => {
                write!(
                    f,
                    "segments must be in {MIN_SEGMENTS}..={MAX_SEGMENTS}: {value}"
                )
            }
            ConfigError::InvalidRings(value) => {
                write!(f, "rings must be in {MIN_RINGS}..={MAX_RINGS}: {value}")
            }
            ConfigError::InvalidRadius(value) => {
                write!(f, "radius must be positive and finite: {value}")
            }
            ConfigError::InvalidHeight(value) => {
                write!(f, "height must be positive and finite: {value}")
            }
            ConfigError::TooManyVertices(count) => {
                write!(f, "mesh would have {count} vertices, at most {MAX_VERTICES} allowed")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
