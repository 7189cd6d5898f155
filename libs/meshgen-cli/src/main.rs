//! meshgen - procedural cylinder and sphere meshes as Wavefront OBJ
//!
//! # Commands
//!
//! - `meshgen cylinder` - Closed cylinder (default when no command is given)
//! - `meshgen sphere` - UV-sphere
//!
//! # Usage
//!
//! ```bash
//! # Writes cylinder_no_normals.obj
//! meshgen
//!
//! # Writes sphere_with_normals.obj
//! meshgen sphere --segments 64 --rings 32 --normals
//!
//! # Custom destination
//! meshgen cylinder --radius 0.5 --height 4 --output tube.obj
//! ```
//!
//! Progress is logged to stderr (`RUST_LOG` controls verbosity); stdout only
//! carries the `Wrote <path>` confirmation.

mod generate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// meshgen - procedural cylinder and sphere meshes
#[derive(Parser, Debug)]
#[command(name = "meshgen")]
#[command(about = "Generate cylinder and sphere meshes as Wavefront OBJ files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Closed cylinder centered on the origin, axis along Y
    Cylinder(generate::CylinderArgs),

    /// UV-sphere centered on the origin, poles on the Y axis
    Sphere(generate::SphereArgs),
}

impl Cli {
    fn into_config(self) -> config::GenerationConfig {
        match self.command {
            Some(Commands::Cylinder(args)) => args.into_config(),
            Some(Commands::Sphere(args)) => args.into_config(),
            None => config::GenerationConfig::cylinder(),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    generate::execute(&cli.into_config())
}
