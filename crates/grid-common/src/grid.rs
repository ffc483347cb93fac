//! Grid geometry for the supported global grid families.
//!
//! A grid is a stack of rows (lines of constant latitude) between the North
//! and South edges of its [`Area`]. Each family fixes how many rows there are,
//! how many points sit on each row, and where the row centers lie.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::area::Area;
use crate::error::{GridError, GridResult};

/// Points on the row closest to either pole of an octahedral grid.
const OCTAHEDRAL_POLAR_ROW_POINTS: usize = 20;

/// Points added per row moving from a pole towards the equator.
const OCTAHEDRAL_ROW_INCREMENT: usize = 4;

/// Largest accepted number of rows, or of points on a row.
pub const MAX_DIMENSION: usize = 1 << 24;

/// Grid family and its dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GridKind {
    /// Octahedral reduced Gaussian grid "O<N>": 2N rows, 20 + 4i points on
    /// pole-relative row i.
    ReducedGaussian { n: usize },
    /// Regular Gaussian grid "F<N>": 2N rows of 4N points.
    RegularGaussian { n: usize },
    /// Regular lat/lon grid "LL<Ni>x<Nj>": Nj rows of Ni points.
    RegularLonLat { ni: usize, nj: usize },
}

/// A grid over a validated area.
///
/// Only constructed through the checked constructors (or [`GridFactory`]),
/// so `row_count() >= 1` and every row has at least one point.
///
/// [`GridFactory`]: crate::GridFactory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    kind: GridKind,
    area: Area,
}

impl Grid {
    /// Octahedral reduced Gaussian grid with 2N rows over the global area.
    pub fn reduced_gaussian(n: usize, area: Area) -> GridResult<Self> {
        Self::gaussian(GridKind::ReducedGaussian { n }, n, area)
    }

    /// Regular Gaussian grid with 2N rows of 4N points over the global area.
    pub fn regular_gaussian(n: usize, area: Area) -> GridResult<Self> {
        Self::gaussian(GridKind::RegularGaussian { n }, n, area)
    }

    /// Regular lat/lon grid with Nj rows of Ni points over any valid area.
    pub fn regular_lonlat(ni: usize, nj: usize, area: Area) -> GridResult<Self> {
        require_dimension("Ni", ni)?;
        require_dimension("Nj", nj)?;

        let grid = Self {
            kind: GridKind::RegularLonLat { ni, nj },
            area,
        };
        debug!(grid = %grid, area = %area, "Built regular lat/lon grid");
        Ok(grid)
    }

    fn gaussian(kind: GridKind, n: usize, area: Area) -> GridResult<Self> {
        require_positive("N", n)?;

        // Bounds the widest row: 4N points regular, 20 + 4(N - 1) octahedral.
        let widest = n
            .checked_mul(OCTAHEDRAL_ROW_INCREMENT)
            .and_then(|p| p.checked_add(OCTAHEDRAL_POLAR_ROW_POINTS));
        if !matches!(widest, Some(points) if points <= MAX_DIMENSION) {
            return Err(too_large("N", n));
        }

        let grid = Self { kind, area };

        // TODO: support regional Gaussian grids by cropping the global rows to the area
        if !area.is_global() {
            return Err(GridError::unsupported_area(grid.spec(), area.to_string()));
        }

        debug!(grid = %grid, rows = 2 * n, "Built Gaussian grid");
        Ok(grid)
    }

    pub fn kind(&self) -> GridKind {
        self.kind
    }

    pub fn area(&self) -> &Area {
        &self.area
    }

    /// Number of rows (Nj).
    pub fn row_count(&self) -> usize {
        match self.kind {
            GridKind::ReducedGaussian { n } | GridKind::RegularGaussian { n } => 2 * n,
            GridKind::RegularLonLat { nj, .. } => nj,
        }
    }

    /// Number of points on row `j` (Ni(j)), or `None` past the last row.
    pub fn points_in_row(&self, j: usize) -> Option<usize> {
        if j >= self.row_count() {
            return None;
        }

        let points = match self.kind {
            GridKind::ReducedGaussian { n } => {
                let from_pole = if j < n { j } else { 2 * n - 1 - j };
                OCTAHEDRAL_POLAR_ROW_POINTS + OCTAHEDRAL_ROW_INCREMENT * from_pole
            }
            GridKind::RegularGaussian { n } => 4 * n,
            GridKind::RegularLonLat { ni, .. } => ni,
        };
        Some(points)
    }

    /// Points per row, North to South.
    pub fn row_point_counts(&self) -> Vec<usize> {
        (0..self.row_count())
            .filter_map(|j| self.points_in_row(j))
            .collect()
    }

    /// Total number of grid points.
    pub fn total_points(&self) -> usize {
        self.row_point_counts().iter().sum()
    }

    /// Row center latitudes, North to South.
    pub fn center_latitudes(&self) -> Vec<f64> {
        match self.kind {
            GridKind::ReducedGaussian { n } | GridKind::RegularGaussian { n } => {
                approximate_gaussian_latitudes(n)
            }
            GridKind::RegularLonLat { nj, .. } => {
                evenly_spaced(self.area.north(), self.area.south(), nj)
            }
        }
    }

    /// Longitudes of the points on row `j`, West to East.
    ///
    /// Over a periodic area the last point stops one spacing short of East
    /// (East is West again); otherwise both West and East are included.
    pub fn column_longitudes(&self, j: usize) -> Option<Vec<f64>> {
        let ni = self.points_in_row(j)?;
        let (west, east) = (self.area.west(), self.area.east());

        if self.area.is_periodic_west_east() {
            let dx = (east - west) / ni as f64;
            Some((0..ni).map(|i| west + dx * i as f64).collect())
        } else {
            Some(evenly_spaced(west, east, ni))
        }
    }

    /// Specification string, as accepted by the factory.
    pub fn spec(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            GridKind::ReducedGaussian { n } => write!(f, "O{}", n),
            GridKind::RegularGaussian { n } => write!(f, "F{}", n),
            GridKind::RegularLonLat { ni, nj } => write!(f, "LL{}x{}", ni, nj),
        }
    }
}

fn require_positive(param: &str, value: usize) -> GridResult<()> {
    if value == 0 {
        return Err(GridError::invalid_parameter(
            param,
            "must be a positive integer, got 0",
        ));
    }
    Ok(())
}

fn require_dimension(param: &str, value: usize) -> GridResult<()> {
    require_positive(param, value)?;
    if value > MAX_DIMENSION {
        return Err(too_large(param, value));
    }
    Ok(())
}

fn too_large(param: &str, value: usize) -> GridError {
    GridError::invalid_parameter(
        param,
        format!(
            "{} gives more than {} rows or points per row",
            value, MAX_DIMENSION
        ),
    )
}

/// Row latitudes of a Gaussian grid with 2N rows.
///
/// Just an approximation: rows are equally spaced by 90/N degrees with the
/// first row half a spacing below the pole, not placed at the roots of the
/// Legendre polynomial. Consumers depend on these values, keep them.
fn approximate_gaussian_latitudes(n: usize) -> Vec<f64> {
    let dx = 90.0 / n as f64;
    let north: Vec<f64> = (0..n).map(|i| 90.0 - dx * (i as f64 + 0.5)).collect();

    let mut lats = Vec::with_capacity(2 * n);
    lats.extend_from_slice(&north);
    lats.extend(north.iter().rev().map(|lat| -lat));
    lats
}

/// `count` values from `first` to `last`, both included.
fn evenly_spaced(first: f64, last: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![first],
        _ => {
            let step = (last - first) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|k| first + step * k as f64).collect();
            values[count - 1] = last;
            values
        }
    }
}
