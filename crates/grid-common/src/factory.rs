//! Factory for creating [`Grid`] instances from specification strings.
//!
//! Recognized forms:
//!
//! | spec            | grid                                   |
//! |-----------------|----------------------------------------|
//! | `O<N>`, `o<N>`  | octahedral reduced Gaussian, 2N rows   |
//! | `F<N>`, `f<N>`  | regular Gaussian, 2N rows of 4N points |
//! | `LL<Ni>x<Nj>`   | regular lat/lon, Nj rows of Ni points  |
//!
//! Dimensions are written without sign or leading zeros, so a built grid
//! displays as the exact string it was built from.
//!
//! # Example
//!
//! ```
//! use grid_common::{Area, GridFactory};
//!
//! let grid = GridFactory::build("O12", Area::global()).unwrap();
//! assert_eq!(grid.row_count(), 24);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::area::Area;
use crate::error::{GridError, GridResult};
use crate::grid::Grid;

/// A dimension: no leading zeros, no '+'. "0" and negative values still match
/// so that "O0" or "F-3" report a bad parameter instead of an unknown grid.
const DIMENSION: &str = r"(0|-?[1-9][0-9]*)";

static OCTAHEDRAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^[Oo]{DIMENSION}$")).expect("octahedral pattern is a valid regex")
});
static REGULAR_GG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^[Ff]{DIMENSION}$")).expect("regular_gg pattern is a valid regex")
});
static REGULAR_LL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^LL{DIMENSION}x{DIMENSION}$")).expect("regular_ll pattern is a valid regex")
});

/// Builds grids from their textual specification.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridFactory;

impl GridFactory {
    /// Build the grid named by `spec` over `area`.
    ///
    /// # Errors
    /// - [`GridError::UnrecognizedGrid`] if `spec` matches no known form
    /// - [`GridError::InvalidParameter`] for zero, negative or oversized dimensions
    /// - [`GridError::Format`] for dimensions too large to represent
    /// - [`GridError::UnsupportedArea`] for a Gaussian grid over a non-global area
    pub fn build(spec: &str, area: Area) -> GridResult<Grid> {
        debug!(spec = %spec, area = %area, "Building grid");

        if let Some(caps) = OCTAHEDRAL.captures(spec) {
            let n = parse_dimension("N", &caps[1], spec)?;
            return Grid::reduced_gaussian(n, area);
        }

        if let Some(caps) = REGULAR_GG.captures(spec) {
            let n = parse_dimension("N", &caps[1], spec)?;
            return Grid::regular_gaussian(n, area);
        }

        if let Some(caps) = REGULAR_LL.captures(spec) {
            let ni = parse_dimension("Ni", &caps[1], spec)?;
            let nj = parse_dimension("Nj", &caps[2], spec)?;
            return Grid::regular_lonlat(ni, nj, area);
        }

        Err(GridError::UnrecognizedGrid(spec.to_string()))
    }

    /// Parse both `spec` and an "N/W/S/E" area string, then build the grid.
    pub fn build_with_area_str(spec: &str, area: &str) -> GridResult<Grid> {
        Self::build(spec, Area::parse(area)?)
    }
}

fn parse_dimension(param: &str, text: &str, spec: &str) -> GridResult<usize> {
    let value: i64 = text.parse().map_err(|_| {
        GridError::format(format!("{} '{}' in grid '{}' is out of range", param, text, spec))
    })?;

    if value <= 0 {
        return Err(GridError::invalid_parameter(
            param,
            format!("must be a positive integer, got {} in grid '{}'", value, spec),
        ));
    }

    usize::try_from(value).map_err(|_| {
        GridError::format(format!("{} '{}' in grid '{}' is out of range", param, text, spec))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridKind;

    #[test]
    fn test_build_each_family() {
        let area = Area::global();

        let o = GridFactory::build("o3", area).unwrap();
        assert_eq!(o.kind(), GridKind::ReducedGaussian { n: 3 });

        let f = GridFactory::build("F2", area).unwrap();
        assert_eq!(f.kind(), GridKind::RegularGaussian { n: 2 });

        let ll = GridFactory::build("LL4x3", area).unwrap();
        assert_eq!(ll.kind(), GridKind::RegularLonLat { ni: 4, nj: 3 });
    }

    #[test]
    fn test_unrecognized_spec() {
        let err = GridFactory::build("X7", Area::global()).unwrap_err();
        assert_eq!(err, GridError::UnrecognizedGrid("X7".to_string()));
    }

    #[test]
    fn test_lowercase_ll_is_unrecognized() {
        let err = GridFactory::build("ll4x3", Area::global()).unwrap_err();
        assert!(matches!(err, GridError::UnrecognizedGrid(_)));
    }

    #[test]
    fn test_non_positive_dimensions() {
        for spec in ["O0", "f-2", "LL0x3", "LL4x-1"] {
            let err = GridFactory::build(spec, Area::global()).unwrap_err();
            assert!(
                matches!(err, GridError::InvalidParameter { .. }),
                "{} gave {:?}",
                spec,
                err
            );
        }
    }

    #[test]
    fn test_signed_or_zero_padded_is_unrecognized() {
        for spec in ["O+5", "O007", "f00", "LL+4x3", "LL4x03", "O-0"] {
            let err = GridFactory::build(spec, Area::global()).unwrap_err();
            assert_eq!(err, GridError::UnrecognizedGrid(spec.to_string()));
        }
    }

    #[test]
    fn test_display_matches_built_spec() {
        for spec in ["O12", "F640", "LL36x19", "O1"] {
            assert_eq!(GridFactory::build(spec, Area::global()).unwrap().spec(), spec);
        }
    }

    #[test]
    fn test_dimension_overflowing_row_counts() {
        let err = GridFactory::build("F4611686018427387904", Area::global()).unwrap_err();
        assert!(matches!(err, GridError::InvalidParameter { .. }), "{:?}", err);

        let err = GridFactory::build("LL4x4611686018427387904", Area::global()).unwrap_err();
        assert!(matches!(err, GridError::InvalidParameter { .. }), "{:?}", err);
    }

    #[test]
    fn test_huge_dimension_is_format_error() {
        let err = GridFactory::build("O99999999999999999999", Area::global()).unwrap_err();
        assert!(matches!(err, GridError::Format(_)));
    }
}
