//! Row edge latitudes ("midpoints") of a single grid.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use grid_common::{Grid, GridError, GridResult};
use serde::Serialize;
use tracing::{debug, trace};

/// Which of the two grids a boundary point belongs to.
///
/// Ordered `Source < Target`: at equal latitude the source edge comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Source,
    Target,
}

impl Origin {
    /// Numeric label: 0 for source, 1 for target.
    pub fn label(&self) -> u8 {
        match self {
            Origin::Source => 0,
            Origin::Target => 1,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Accepts the numeric label, the origin name, or the command line's name for
/// the grid (`input` is the source, `output` the target), case-insensitively.
impl FromStr for Origin {
    type Err = GridError;

    fn from_str(s: &str) -> GridResult<Self> {
        match s.to_lowercase().as_str() {
            "0" | "source" | "input" => Ok(Origin::Source),
            "1" | "target" | "output" => Ok(Origin::Target),
            _ => Err(GridError::format(format!("unknown origin label '{}'", s))),
        }
    }
}

/// A row edge latitude tagged with its grid of origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Midpoint {
    pub latitude: f64,
    pub origin: Origin,
}

impl Midpoint {
    pub fn new(latitude: f64, origin: Origin) -> Self {
        Self { latitude, origin }
    }
}

/// North-to-South order: higher latitude first, then source before target.
impl PartialOrd for Midpoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        other
            .latitude
            .partial_cmp(&self.latitude)
            .map(|o| o.then(self.origin.cmp(&other.origin)))
    }
}

impl fmt::Display for Midpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.latitude, self.origin)
    }
}

/// Row edges from row centers ordered North to South.
///
/// Returns `north`, the midpoint of every pair of consecutive centers, then
/// `south`: `centers.len() + 1` points, all tagged with `origin`.
///
/// # Errors
/// [`GridError::DegenerateGrid`] if there are fewer than two centers.
pub fn build_boundaries(
    centers: &[f64],
    north: f64,
    south: f64,
    origin: Origin,
) -> GridResult<Vec<Midpoint>> {
    if centers.len() < 2 {
        return Err(GridError::degenerate(format!(
            "{} row(s), at least 2 are needed to compute row edges",
            centers.len()
        )));
    }

    let mut edges = Vec::with_capacity(centers.len() + 1);
    edges.push(Midpoint::new(north, origin));
    edges.extend(
        centers
            .windows(2)
            .map(|pair| Midpoint::new((pair[0] + pair[1]) / 2.0, origin)),
    );
    edges.push(Midpoint::new(south, origin));

    trace!(origin = %origin, edges = ?edges, "Computed row edges");
    Ok(edges)
}

/// Row edges of `grid`, bounded by its area's North and South.
pub fn grid_boundaries(grid: &Grid, origin: Origin) -> GridResult<Vec<Midpoint>> {
    let area = grid.area();
    let edges = build_boundaries(&grid.center_latitudes(), area.north(), area.south(), origin)
        .map_err(|e| match e {
            GridError::DegenerateGrid(msg) => {
                GridError::degenerate(format!("grid '{}' has {}", grid, msg))
            }
            other => other,
        })?;

    debug!(grid = %grid, origin = %origin, edges = edges.len(), "Built grid boundaries");
    Ok(edges)
}
