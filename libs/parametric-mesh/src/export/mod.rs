//! # Mesh Export
//!
//! Serializers that turn a finished [`Mesh`](crate::Mesh) into an
//! interchange format.

pub mod obj;

pub use obj::{save_obj, to_obj_string, write_obj, ObjDocument};
