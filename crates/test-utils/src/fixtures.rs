//! Common test fixtures for grid-box intersection tests.
//!
//! Areas are given as (N, W, S, E) tuples and as "N/W/S/E" strings so they
//! can feed both the explicit constructor and the parser.

/// Common area definitions for testing.
pub mod area {
    /// Whole globe
    pub const GLOBAL: (f64, f64, f64, f64) = (90.0, 0.0, -90.0, 360.0);

    /// Whole globe, canonical string form
    pub const GLOBAL_STR: &str = "90/0/-90/360";

    /// Whole globe centred on the Greenwich meridian
    pub const GLOBAL_GREENWICH: (f64, f64, f64, f64) = (90.0, -180.0, -90.0, 180.0);

    /// Europe
    pub const EUROPE: (f64, f64, f64, f64) = (72.0, -15.0, 35.0, 45.0);

    /// Europe, string form
    pub const EUROPE_STR: &str = "72/-15/35/45";

    /// Tropical band, periodic in longitude but without poles
    pub const TROPICS: (f64, f64, f64, f64) = (23.5, 0.0, -23.5, 360.0);

    /// Single latitude line (degenerate in latitude, still valid)
    pub const EQUATOR_LINE: (f64, f64, f64, f64) = (0.0, 0.0, 0.0, 360.0);

    /// South above North
    pub const INVERTED: (f64, f64, f64, f64) = (-10.0, 0.0, 10.0, 20.0);

    /// East more than a full turn past West
    pub const OVERLAPPING: (f64, f64, f64, f64) = (10.0, 0.0, -10.0, 370.0);
}

/// Common grid specification strings for testing.
pub mod grid {
    /// Smallest regular Gaussian grid: 2 rows of 4 points
    pub const F1: &str = "F1";

    /// Default source grid of the command line tool
    pub const O12: &str = "O12";

    /// Default target grid of the command line tool
    pub const O6: &str = "O6";

    /// Regular Gaussian grid, 8 rows of 16 points
    pub const F4: &str = "F4";

    /// 10 degree regular lat/lon grid including both poles
    pub const LL36X19: &str = "LL36x19";

    /// Single-row lat/lon grid (has no interior row edge)
    pub const LL8X1: &str = "LL8x1";

    /// Strings that match no grid family
    pub const UNRECOGNIZED: [&str; 6] = ["X7", "", "O", "LL4", "N320", "O12 "];
}
