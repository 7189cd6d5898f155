//! # Primitives
//!
//! Mesh generation for parametric solids (cylinder, sphere).
//!
//! Every builder validates its parameters up front and then produces the
//! whole mesh in one pass. Faces are wound so that the right-hand-rule
//! normal points out of the solid.

pub mod cylinder;
pub mod sphere;
pub mod tessellate;

pub use cylinder::{create_cylinder, Cylinder};
pub use sphere::{create_sphere, Sphere};

use config::constants::{MAX_SEGMENTS, MIN_SEGMENTS};
use glam::DVec3;

use crate::error::{MeshError, MeshResult};

/// Whether a builder emits a normal list and per-corner normal indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalMode {
    /// Positions and faces only.
    #[default]
    Omit,
    /// Also emit normals and `v//vn` face corners.
    Include,
}

impl NormalMode {
    /// Maps the CLI-style boolean flag onto a mode.
    pub fn from_flag(include: bool) -> Self {
        if include {
            NormalMode::Include
        } else {
            NormalMode::Omit
        }
    }

    /// Returns true when normals are emitted.
    #[inline]
    pub fn includes_normals(self) -> bool {
        self == NormalMode::Include
    }
}

/// Checks the longitudinal segment count of a ring.
pub(crate) fn check_segments(shape: &str, segments: u32) -> MeshResult<()> {
    if segments < MIN_SEGMENTS {
        return Err(MeshError::invalid_parameter(format!(
            "{shape} segments must be at least {MIN_SEGMENTS}: {segments}"
        )));
    }
    if segments > MAX_SEGMENTS {
        return Err(MeshError::invalid_parameter(format!(
            "{shape} segments must be at most {MAX_SEGMENTS}: {segments}"
        )));
    }
    Ok(())
}

/// Checks that a dimension is finite and strictly positive.
pub(crate) fn check_positive(shape: &str, name: &str, value: f64) -> MeshResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "{shape} {name} must be positive: {value}"
        )));
    }
    Ok(())
}

/// Unit directions `(cos θ, 0, sin θ)` for θ = 2π·i/segments.
pub(crate) fn ring_directions(segments: u32) -> impl Iterator<Item = DVec3> {
    let step = std::f64::consts::TAU / segments as f64;
    (0..segments).map(move |i| {
        let (sin, cos) = (i as f64 * step).sin_cos();
        DVec3::new(cos, 0.0, sin)
    })
}
