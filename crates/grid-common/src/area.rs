//! Geographic area (North/West/South/East) types and operations.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

/// Four signed decimals separated by '/', e.g. "90/0/-90/360".
static AREA_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let number = r"([+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+))";
    Regex::new(&format!("^{number}/{number}/{number}/{number}$"))
        .expect("area pattern is a valid regex")
});

/// A validated geographic bounding box, in degrees.
///
/// Invariants, checked on construction:
/// - `-90 <= south <= north <= 90`
/// - `west <= east <= west + 360`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawArea")]
pub struct Area {
    north: f64,
    west: f64,
    south: f64,
    east: f64,
}

#[derive(Deserialize)]
struct RawArea {
    north: f64,
    west: f64,
    south: f64,
    east: f64,
}

impl TryFrom<RawArea> for Area {
    type Error = GridError;

    fn try_from(raw: RawArea) -> GridResult<Self> {
        Area::new(raw.north, raw.west, raw.south, raw.east)
    }
}

impl Area {
    /// Create a new area from its North/West/South/East bounds.
    pub fn new(north: f64, west: f64, south: f64, east: f64) -> GridResult<Self> {
        if !(-90.0 <= south && south <= north && north <= 90.0) {
            return Err(GridError::range(format!(
                "latitudes must satisfy -90 <= S <= N <= 90, got N={} S={}",
                north, south
            )));
        }

        if !(west <= east && east <= west + 360.0) {
            return Err(GridError::range(format!(
                "longitudes must satisfy W <= E <= W + 360, got W={} E={}",
                west, east
            )));
        }

        Ok(Self {
            north,
            west,
            south,
            east,
        })
    }

    /// The whole globe: 90/0/-90/360.
    pub fn global() -> Self {
        Self {
            north: 90.0,
            west: 0.0,
            south: -90.0,
            east: 360.0,
        }
    }

    /// Parse an area string: "N/W/S/E"
    pub fn parse(s: &str) -> GridResult<Self> {
        let caps = AREA_PATTERN.captures(s).ok_or_else(|| {
            GridError::format(format!("invalid area '{}', expected 'N/W/S/E'", s))
        })?;

        let mut bounds = [0.0_f64; 4];
        for (bound, index) in bounds.iter_mut().zip(1..=4) {
            let text = &caps[index];
            *bound = text
                .parse()
                .map_err(|_| GridError::format(format!("invalid number '{}' in area '{}'", text, s)))?;
        }

        let [north, west, south, east] = bounds;
        Self::new(north, west, south, east)
    }

    pub fn north(&self) -> f64 {
        self.north
    }

    pub fn west(&self) -> f64 {
        self.west
    }

    pub fn south(&self) -> f64 {
        self.south
    }

    pub fn east(&self) -> f64 {
        self.east
    }

    /// Extent in latitude, in degrees.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Extent in longitude, in degrees.
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    pub fn includes_north_pole(&self) -> bool {
        self.north == 90.0
    }

    pub fn includes_south_pole(&self) -> bool {
        self.south == -90.0
    }

    /// East meets West again after a full turn.
    pub fn is_periodic_west_east(&self) -> bool {
        self.east == self.west + 360.0
    }

    /// Covers both poles and is periodic in longitude.
    pub fn is_global(&self) -> bool {
        self.includes_north_pole() && self.includes_south_pole() && self.is_periodic_west_east()
    }

    /// Check if a latitude lies between South and North (inclusive).
    pub fn contains_latitude(&self, lat: f64) -> bool {
        self.south <= lat && lat <= self.north
    }
}

impl Default for Area {
    fn default() -> Self {
        Self::global()
    }
}

impl FromStr for Area {
    type Err = GridError;

    fn from_str(s: &str) -> GridResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}/{}", self.north, self.west, self.south, self.east)
    }
}
