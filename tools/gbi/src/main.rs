//! Grid-box intersections command line tool.
//!
//! Builds a source and a target grid from their specification strings,
//! derives each grid's row edges and prints the merged, origin-tagged
//! latitude boundaries (optionally with the latitude bands between them).

mod config;
mod output;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use grid_common::GridFactory;
use lat_bands::{grid_boundaries, merge_boundaries, Origin};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use config::GbiConfig;

#[derive(Parser, Debug)]
#[command(name = "gbi")]
#[command(about = "Grid-box intersections interpolation method: merged latitude boundaries")]
pub struct Args {
    /// Input and output grids, overriding --input/--output
    #[arg(value_name = "GRID", num_args = 0..=2)]
    grids: Vec<String>,

    /// Input (source) grid: O<N>, F<N> or LL<Ni>x<Nj>
    #[arg(short, long, env = "GBI_INPUT", default_value = "O12")]
    input: String,

    /// Output (target) grid: O<N>, F<N> or LL<Ni>x<Nj>
    #[arg(short, long, env = "GBI_OUTPUT", default_value = "O6")]
    output: String,

    /// Input grid area, N/W/S/E
    #[arg(
        short = 'I',
        long,
        env = "GBI_INPUT_AREA",
        default_value = "90/0/-90/360",
        allow_hyphen_values = true
    )]
    input_area: String,

    /// Output grid area, N/W/S/E
    #[arg(
        short = 'O',
        long,
        env = "GBI_OUTPUT_AREA",
        default_value = "90/0/-90/360",
        allow_hyphen_values = true
    )]
    output_area: String,

    /// Output format: text (default), json
    #[arg(long, env = "GBI_FORMAT", default_value = "text")]
    format: String,

    /// Also print the latitude bands with their source and target rows
    #[arg(long)]
    bands: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    init_tracing(&args.log_level, args.log_json)?;

    let config = GbiConfig::from_args(&args)?;
    info!(
        input = %config.input_grid,
        output = %config.output_grid,
        input_area = %config.input_area,
        output_area = %config.output_area,
        "Computing grid-box intersection boundaries"
    );

    // The two grids are independent of each other.
    let (source, target) = rayon::join(
        || GridFactory::build(&config.input_grid, config.input_area),
        || GridFactory::build(&config.output_grid, config.output_area),
    );
    let source = source.with_context(|| format!("building input grid '{}'", config.input_grid))?;
    let target =
        target.with_context(|| format!("building output grid '{}'", config.output_grid))?;
    debug!(
        source_rows = source.row_count(),
        target_rows = target.row_count(),
        "Built grids"
    );

    let source_edges =
        grid_boundaries(&source, Origin::Source).context("computing input grid row edges")?;
    let target_edges =
        grid_boundaries(&target, Origin::Target).context("computing output grid row edges")?;

    let merged = merge_boundaries(&source_edges, &target_edges).context("merging boundaries")?;
    let bands = config.bands.then(|| merged.bands());
    info!(
        boundaries = merged.len(),
        bands = bands.as_ref().map(|b| b.len()),
        "Merged boundaries"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::write_report(&mut out, config.format, &source, &target, &merged, bands.as_deref())
        .context("writing output")?;
    out.flush()?;

    Ok(())
}

fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Results go to stdout, logs to stderr.
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }

    Ok(())
}
