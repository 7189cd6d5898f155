//! # Wavefront OBJ Export
//!
//! Writes a mesh as `v`, `vn` and `f` lines. Indices are 0-based inside the
//! mesh and become 1-based here, at the format boundary.
//!
//! ```text
//! v 1.000000 1.000000 0.000000
//! vn 1.000000 0.000000 0.000000
//! f 1//1 6//6 5//5
//! ```

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use config::constants::FLOAT_PRECISION;
use glam::DVec3;
use tempfile::NamedTempFile;

use crate::error::{MeshError, MeshResult};
use crate::mesh::{Face, Mesh};

/// Display adapter that renders a mesh as an OBJ document.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::export::ObjDocument;
/// use parametric_mesh::primitives::{create_cylinder, NormalMode};
///
/// let mesh = create_cylinder(3, 1.0, 2.0, NormalMode::Omit).unwrap();
/// let text = ObjDocument(&mesh).to_string();
/// assert!(text.starts_with("v 1.000000 1.000000 0.000000\n"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ObjDocument<'a>(pub &'a Mesh);

impl fmt::Display for ObjDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mesh = self.0;

        for v in mesh.vertices() {
            write_vector(f, "v", *v)?;
        }
        if let Some(normals) = mesh.normals() {
            for n in normals {
                write_vector(f, "vn", *n)?;
            }
        }
        for face in mesh.faces() {
            write_face(f, face)?;
        }

        Ok(())
    }
}

fn write_vector(f: &mut fmt::Formatter<'_>, tag: &str, v: DVec3) -> fmt::Result {
    let p = FLOAT_PRECISION;
    writeln!(f, "{tag} {:.p$} {:.p$} {:.p$}", v.x, v.y, v.z)
}

fn write_face(f: &mut fmt::Formatter<'_>, face: &Face) -> fmt::Result {
    let [a, b, c] = face.vertices.map(|v| v + 1);
    match face.normals.map(|n| n.map(|i| i + 1)) {
        None => writeln!(f, "f {a} {b} {c}"),
        Some([na, nb, nc]) => writeln!(f, "f {a}//{na} {b}//{nb} {c}//{nc}"),
    }
}

/// Renders the mesh into an OBJ string.
pub fn to_obj_string(mesh: &Mesh) -> String {
    ObjDocument(mesh).to_string()
}

/// Streams the mesh as OBJ text into any writer.
pub fn write_obj<W: Write>(mesh: &Mesh, mut writer: W) -> io::Result<()> {
    write!(writer, "{}", ObjDocument(mesh))?;
    writer.flush()
}

/// Writes the mesh to `path` as an OBJ file.
///
/// The document is written to a temporary file next to `path` and renamed
/// over the destination only once it is complete. On failure the temporary
/// file is discarded and any existing file at `path` is left untouched.
/// A replaced file keeps its permissions.
///
/// # Errors
///
/// Returns [`MeshError::Io`] when the destination cannot be written.
pub fn save_obj(mesh: &Mesh, path: impl AsRef<Path>) -> MeshResult<()> {
    let path = path.as_ref();
    let document = to_obj_string(mesh);

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let io_err = |source: io::Error| MeshError::io(path, source);

    let mut staged = NamedTempFile::new_in(dir).map_err(io_err)?;
    staged.write_all(document.as_bytes()).map_err(io_err)?;
    staged.as_file().sync_all().map_err(io_err)?;

    if let Ok(existing) = fs::metadata(path) {
        if existing.is_file() {
            staged
                .as_file()
                .set_permissions(existing.permissions())
                .map_err(io_err)?;
        }
    }
    staged.persist(path).map_err(|e| io_err(e.error))?;

    tracing::debug!(
        path = %path.display(),
        bytes = document.len(),
        "wrote obj"
    );
    Ok(())
}
