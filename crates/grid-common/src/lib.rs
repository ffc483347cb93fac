//! Common types shared by the grid-box intersection tools.
//!
//! - [`Area`]: a validated North/West/South/East bounding box
//! - [`Grid`]: the supported global grid families and their row geometry
//! - [`GridFactory`]: builds a [`Grid`] from a specification string
//!   (`O<N>`, `F<N>`, `LL<Ni>x<Nj>`)

pub mod area;
pub mod error;
pub mod factory;
pub mod grid;

pub use area::Area;
pub use error::{GridError, GridResult};
pub use factory::GridFactory;
pub use grid::Grid;
