//! # Configuration Constants
//!
//! Centralized constants for the mesh generator. Tessellation defaults,
//! parameter limits, tolerances and output file names are defined here.
//!
//! ## Categories
//!
//! - **Resolution**: Default segment and ring counts
//! - **Dimensions**: Default radius and height
//! - **Limits**: Geometric minimums and safety maximums
//! - **Precision**: Normal comparison tolerance
//! - **Output**: Default file names and float formatting

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of longitudinal segments around a ring.
///
/// Used by both the cylinder and the sphere when no explicit resolution is
/// given on the command line.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SEGMENTS;
///
/// let user_segments: Option<u32> = None;
/// let segments = user_segments.unwrap_or(DEFAULT_SEGMENTS);
/// assert_eq!(segments, 32);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 32;

/// Default number of latitude divisions for a UV-sphere.
///
/// A sphere with `rings` divisions has `rings - 1` interior vertex rings.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_RINGS;
///
/// let interior_rings = DEFAULT_RINGS - 1;
/// assert_eq!(interior_rings, 15);
/// ```
pub const DEFAULT_RINGS: u32 = 16;

// =============================================================================
// DIMENSION CONSTANTS
// =============================================================================

/// Default radius for both shapes.
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Default cylinder height. The cylinder spans `[-height/2, height/2]` on Y.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_HEIGHT;
///
/// let half_height = DEFAULT_HEIGHT / 2.0;
/// assert_eq!(half_height, 1.0);
/// ```
pub const DEFAULT_HEIGHT: f64 = 2.0;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Minimum number of segments for any ring.
///
/// Three points are the smallest closed polygon.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_SEGMENTS;
///
/// let requested = 2;
/// assert!(requested < MIN_SEGMENTS);
/// ```
pub const MIN_SEGMENTS: u32 = 3;

/// Minimum number of sphere latitude divisions.
///
/// With one division there are no interior rings and the sphere collapses
/// to its two poles.
pub const MIN_RINGS: u32 = 1;

/// Maximum number of segments for any ring.
///
/// Keeps `segments * rings` vertex indices comfortably inside `u32`.
pub const MAX_SEGMENTS: u32 = 10_000;

/// Maximum number of sphere latitude divisions.
pub const MAX_RINGS: u32 = 10_000;

/// Maximum number of vertices a single mesh may have.
///
/// The per-axis limits alone still allow a 10 000 x 10 000 sphere, which
/// would need several gigabytes. The product is capped here instead.
///
/// # Example
///
/// ```rust
/// use config::constants::{sphere_vertex_count, MAX_VERTICES};
///
/// assert!(sphere_vertex_count(1_000, 1_000) <= MAX_VERTICES);
/// assert!(sphere_vertex_count(10_000, 10_000) > MAX_VERTICES);
/// ```
pub const MAX_VERTICES: u64 = 4_000_000;

/// Vertices of a UV-sphere: two poles plus `rings - 1` interior rings.
///
/// Computed in `u64` so the largest accepted segment and ring counts cannot
/// overflow. Returns 2 for `rings == 0`.
pub const fn sphere_vertex_count(segments: u32, rings: u32) -> u64 {
    2 + segments as u64 * rings.saturating_sub(1) as u64
}

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance used when comparing normal directions.
///
/// Normals are expected to match their geometric direction to within this
/// value per component.
pub const NORMAL_TOLERANCE: f64 = 1e-6;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Number of decimal places written for every coordinate.
pub const FLOAT_PRECISION: usize = 6;

/// Default output file for a cylinder without normals.
pub const CYLINDER_OUTPUT: &str = "cylinder_no_normals.obj";

/// Default output file for a cylinder with normals.
pub const CYLINDER_NORMALS_OUTPUT: &str = "cylinder_with_normals.obj";

/// Default output file for a sphere without normals.
pub const SPHERE_OUTPUT: &str = "sphere_no_normals.obj";

/// Default output file for a sphere with normals.
pub const SPHERE_NORMALS_OUTPUT: &str = "sphere_with_normals.obj";
