//! Printing the merged boundaries and bands.

use std::io::Write;

use anyhow::Result;
use grid_common::Grid;
use lat_bands::{LatitudeBand, MergedBoundaries};
use serde::Serialize;

use crate::config::OutputFormat;

#[derive(Serialize)]
struct Report<'a> {
    source: &'a Grid,
    target: &'a Grid,
    boundaries: &'a MergedBoundaries,
    #[serde(skip_serializing_if = "Option::is_none")]
    bands: Option<&'a [LatitudeBand]>,
}

/// Write the report in the requested format.
pub fn write_report<W: Write>(
    out: &mut W,
    format: OutputFormat,
    source: &Grid,
    target: &Grid,
    merged: &MergedBoundaries,
    bands: Option<&[LatitudeBand]>,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, merged, bands),
        OutputFormat::Json => {
            let report = Report {
                source,
                target,
                boundaries: merged,
                bands,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn write_text<W: Write>(
    out: &mut W,
    merged: &MergedBoundaries,
    bands: Option<&[LatitudeBand]>,
) -> Result<()> {
    let line: Vec<String> = merged.iter().map(|m| m.to_string()).collect();
    writeln!(out, "{}", line.join(" "))?;

    if let Some(bands) = bands {
        for band in bands {
            writeln!(
                out,
                "{} {} {} {}",
                band.north,
                band.south,
                row_label(band.source_row),
                row_label(band.target_row)
            )?;
        }
    }

    Ok(())
}

fn row_label(row: Option<usize>) -> String {
    row.map_or_else(|| "-".to_string(), |r| r.to_string())
}
