//! # Config Crate
//!
//! Centralized configuration for the parametric mesh generator.
//! All defaults, limits and output file names are defined here so the
//! mesh builders and the CLI agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_SEGMENTS, MIN_SEGMENTS};
//! use config::generation::GenerationConfig;
//!
//! let mut cfg = GenerationConfig::cylinder();
//! assert_eq!(cfg.segments, DEFAULT_SEGMENTS);
//!
//! cfg.segments = MIN_SEGMENTS - 1;
//! assert!(cfg.validate().is_err());
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Named Fields**: Defaults live in a configuration struct, not in
//!   positional function arguments
//! - **Validated Early**: Parameters are checked before any geometry exists

pub mod constants;
pub mod generation;

pub use generation::{ConfigError, GenerationConfig, Shape};
