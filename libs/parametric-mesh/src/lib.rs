//! # Parametric Mesh
//!
//! Procedural triangle meshes for parametric solids, serialized as
//! Wavefront OBJ.
//!
//! ## Architecture
//!
//! ```text
//! GenerationConfig → primitives (Cylinder | Sphere) → Mesh → export::obj
//! ```
//!
//! ## Algorithms
//!
//! - **Rings**: vertices sampled at θ = 2π·i/segments
//! - **Side walls / bands**: quad strips between adjacent rings
//! - **Caps / poles**: triangle fans onto a shared apex vertex
//!
//! ## Usage
//!
//! ```rust
//! use parametric_mesh::primitives::{create_sphere, NormalMode};
//! use parametric_mesh::export::to_obj_string;
//!
//! let mesh = create_sphere(8, 4, 1.0, NormalMode::Omit)?;
//! assert_eq!(mesh.vertex_count(), 26);
//! assert!(to_obj_string(&mesh).starts_with("v 0.000000 1.000000 0.000000"));
//! # Ok::<(), parametric_mesh::MeshError>(())
//! ```

pub mod error;
pub mod export;
pub mod from_config;
pub mod mesh;
pub mod primitives;

use std::path::Path;

use config::GenerationConfig;

pub use error::{MeshError, MeshResult};
pub use mesh::{Face, Mesh};
pub use primitives::NormalMode;

/// Generates the mesh described by `config` and writes it to the configured
/// output path.
///
/// Nothing is written when the configuration is invalid. Returns the path
/// that was written.
///
/// # Example
///
/// ```rust,no_run
/// use config::GenerationConfig;
///
/// let config = GenerationConfig::cylinder();
/// let path = parametric_mesh::generate_to_file(&config)?;
/// println!("Wrote {}", path.display());
/// # Ok::<(), parametric_mesh::MeshError>(())
/// ```
pub fn generate_to_file(config: &GenerationConfig) -> MeshResult<&Path> {
    let mesh = from_config::config_to_mesh(config)?;
    let path = config.output_path();
    export::save_obj(&mesh, path)?;

    tracing::info!(
        shape = %config.shape,
        path = %path.display(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "mesh written"
    );
    Ok(path)
}
