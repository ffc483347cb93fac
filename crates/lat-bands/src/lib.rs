//! Latitude band boundaries for grid-box intersections.
//!
//! Overlap areas between the boxes of two grids need the latitudes where a
//! row of either grid starts or ends. This crate derives those row edges from
//! each grid's row centers and interleaves the two edge sequences into one
//! North-to-South sequence, every point tagged with the grid it came from.
//!
//! # Architecture
//!
//! ```text
//! "O12", "90/0/-90/360"           "F4", "90/0/-90/360"
//!      │                                │
//!      ▼                                ▼
//! GridFactory::build             GridFactory::build
//!      │                                │
//!      ▼                                ▼
//! build_boundaries(Source)       build_boundaries(Target)
//!      │                                │
//!      └──────────────┬─────────────────┘
//!                     ▼
//!            merge_boundaries (linear, stable)
//!                     │
//!                     ▼
//!             MergedBoundaries ──► bands()
//! ```
//!
//! # Example
//!
//! ```
//! use grid_common::{Area, GridFactory};
//! use lat_bands::{grid_boundaries, merge_boundaries, Origin};
//!
//! let source = GridFactory::build("F1", Area::global()).unwrap();
//! let target = GridFactory::build("LL4x4", Area::global()).unwrap();
//!
//! let merged = merge_boundaries(
//!     &grid_boundaries(&source, Origin::Source).unwrap(),
//!     &grid_boundaries(&target, Origin::Target).unwrap(),
//! )
//! .unwrap();
//!
//! assert_eq!(merged.len(), 3 + 5);
//! assert_eq!(merged.points()[0].origin, Origin::Source);
//! ```

pub mod boundary;
pub mod merge;

// Re-export commonly used types at crate root
pub use boundary::{build_boundaries, grid_boundaries, Midpoint, Origin};
pub use grid_common::{GridError, GridResult};
pub use merge::{merge_boundaries, LatitudeBand, MergedBoundaries};
