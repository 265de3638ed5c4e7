// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::camera::Projection;
use crate::config::SandboxConfig;

/// `--projection` values
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionArg {
    #[value(alias = "ortho")]
    Orthographic,
    #[value(alias = "persp")]
    Perspective,
}

impl From<ProjectionArg> for Projection {
    fn from(arg: ProjectionArg) -> Self {
        match arg {
            ProjectionArg::Orthographic => Projection::Orthographic,
            ProjectionArg::Perspective => Projection::Perspective,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "sandbox")]
#[command(about = "Peridot camera sandbox", long_about = None)]
pub struct Cli {
    /// JSON config file; missing fields fall back to defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Camera projection (overrides the config file)
    #[arg(long, value_enum)]
    pub projection: Option<ProjectionArg>,

    /// Initial window width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Initial window height in pixels
    #[arg(long)]
    pub height: Option<u32>,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config
    pub fn apply(&self, config: &mut SandboxConfig) {
        if let Some(projection) = self.projection {
            config.projection = projection.into();
        }
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
    }
}
