pub mod analysis;
pub mod config;
pub mod consts;
pub mod directions;
pub mod error;
pub mod grid;
pub mod neighbors;
pub mod thinning;

pub use error::{Result, ThinningError};
pub use grid::Grid;
pub use thinning::{thin, thin_array, thin_array_in_place, thin_in_place, Algorithm};
