//! Run configuration assembled from command line arguments and environment.

use anyhow::{bail, Context, Result};
use grid_common::Area;

use crate::Args;

/// Validated configuration for one run.
#[derive(Debug, Clone)]
pub struct GbiConfig {
    /// Source grid specification
    pub input_grid: String,
    /// Target grid specification
    pub output_grid: String,
    /// Area of the source grid
    pub input_area: Area,
    /// Area of the target grid
    pub output_area: Area,
    /// How the report is printed
    pub format: OutputFormat,
    /// Print latitude bands after the boundaries
    pub bands: bool,
}

impl GbiConfig {
    /// Build the configuration, preferring positional grids over `--input`/`--output`.
    pub fn from_args(args: &Args) -> Result<Self> {
        let mut grids = args.grids.iter();
        let input_grid = grids.next().unwrap_or(&args.input).clone();
        let output_grid = grids.next().unwrap_or(&args.output).clone();

        let input_area = Area::parse(&args.input_area)
            .with_context(|| format!("invalid input area '{}'", args.input_area))?;
        let output_area = Area::parse(&args.output_area)
            .with_context(|| format!("invalid output area '{}'", args.output_area))?;

        let format = OutputFormat::from_str(&args.format)?;

        let config = Self {
            input_grid,
            output_grid,
            input_area,
            output_area,
            format,
            bands: args.bands,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.input_grid.is_empty() {
            bail!("input grid must not be empty");
        }

        if self.output_grid.is_empty() {
            bail!("output grid must not be empty");
        }

        Ok(())
    }
}

/// Report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `latitude/label` pairs on one line, bands one per line.
    Text,
    /// A single JSON document.
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => bail!("unknown output format '{}', expected 'text' or 'json'", other),
        }
    }
}
