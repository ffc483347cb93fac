//! Stable merge of two origin-tagged boundary sequences.
//!
//! Both inputs are already ordered North to South, so a single linear pass
//! interleaves them; nothing is re-sorted. Shared latitudes (a common pole,
//! the equator of two Gaussian grids) are expected and resolved by origin:
//! the source point is emitted before the target point.

use std::cmp::Ordering;

use grid_common::{GridError, GridResult};
use serde::Serialize;
use tracing::{debug, trace};

use crate::boundary::{Midpoint, Origin};

/// The merged, North-to-South ordered boundary sequence of two grids.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MergedBoundaries {
    points: Vec<Midpoint>,
}

/// A non-empty latitude band between two consecutive merged boundaries.
///
/// `source_row` / `target_row` index the row of each grid covering the band,
/// or are `None` where the band lies outside that grid's area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatitudeBand {
    pub north: f64,
    pub south: f64,
    pub source_row: Option<usize>,
    pub target_row: Option<usize>,
}

impl LatitudeBand {
    pub fn height(&self) -> f64 {
        self.north - self.south
    }
}

/// Merge `source` and `target` boundaries into one North-to-South sequence.
///
/// At equal latitude the point that orders first wins (see [`Midpoint`]'s
/// ordering: source before target); on a complete tie the `source` slice
/// wins, so relative order within each input is always kept.
///
/// # Errors
/// [`GridError::Format`] if either input contains NaN or is not ordered
/// North to South.
pub fn merge_boundaries(source: &[Midpoint], target: &[Midpoint]) -> GridResult<MergedBoundaries> {
    check_ordered("source", source)?;
    check_ordered("target", target)?;

    let mut points = Vec::with_capacity(source.len() + target.len());
    let (mut i, mut j) = (0, 0);

    while i < source.len() && j < target.len() {
        match source[i].partial_cmp(&target[j]) {
            Some(Ordering::Greater) => {
                points.push(target[j]);
                j += 1;
            }
            _ => {
                points.push(source[i]);
                i += 1;
            }
        }
    }
    points.extend_from_slice(&source[i..]);
    points.extend_from_slice(&target[j..]);

    debug!(
        source = source.len(),
        target = target.len(),
        merged = points.len(),
        "Merged boundaries"
    );
    Ok(MergedBoundaries { points })
}

fn check_ordered(name: &str, points: &[Midpoint]) -> GridResult<()> {
    if let Some(k) = points.iter().position(|m| m.latitude.is_nan()) {
        return Err(GridError::format(format!(
            "{} boundary {} is not a number",
            name, k
        )));
    }

    if let Some(k) = points.windows(2).position(|w| w[0].latitude < w[1].latitude) {
        return Err(GridError::format(format!(
            "{} boundaries must be ordered North to South, {} < {} at index {}",
            name,
            points[k].latitude,
            points[k + 1].latitude,
            k + 1
        )));
    }

    Ok(())
}

impl MergedBoundaries {
    pub fn points(&self) -> &[Midpoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Midpoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Midpoint> {
        self.points.iter()
    }

    /// Latitudes only, in merged order.
    pub fn latitudes(&self) -> Vec<f64> {
        self.points.iter().map(|m| m.latitude).collect()
    }

    /// Number of boundaries that came from `origin`.
    pub fn count(&self, origin: Origin) -> usize {
        self.points.iter().filter(|m| m.origin == origin).count()
    }

    /// Walk the merged sequence and list every band of non-zero height with
    /// the source and target rows it belongs to.
    ///
    /// Row membership follows from counting the edges of each grid passed so
    /// far: after the k-th edge of a grid (k >= 1) the walk is inside row
    /// k - 1, until the grid's last edge is passed.
    pub fn bands(&self) -> Vec<LatitudeBand> {
        let source_edges = self.count(Origin::Source);
        let target_edges = self.count(Origin::Target);
        let (mut source_seen, mut target_seen) = (0, 0);
        let mut bands = Vec::new();

        for pair in self.points.windows(2) {
            match pair[0].origin {
                Origin::Source => source_seen += 1,
                Origin::Target => target_seen += 1,
            }

            let (north, south) = (pair[0].latitude, pair[1].latitude);
            if north == south {
                continue;
            }

            let band = LatitudeBand {
                north,
                south,
                source_row: row_inside(source_seen, source_edges),
                target_row: row_inside(target_seen, target_edges),
            };
            trace!(?band, "Latitude band");
            bands.push(band);
        }

        bands
    }
}

fn row_inside(edges_seen: usize, edges: usize) -> Option<usize> {
    (edges_seen >= 1 && edges_seen < edges).then(|| edges_seen - 1)
}

impl<'a> IntoIterator for &'a MergedBoundaries {
    type Item = &'a Midpoint;
    type IntoIter = std::slice::Iter<'a, Midpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
