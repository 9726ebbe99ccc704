//! **gridroute-core**: grid model shared by the gridroute search strategies.
//!
//! This crate provides the [`Cell`] coordinate, the [`manhattan`] distance and
//! the [`Grid`] model (side length plus obstacle set) that both search
//! strategies in `gridroute-paths` read from.

pub mod geom;
pub mod grid;

pub use geom::{Cell, manhattan};
pub use grid::{GRID_SIZE, Grid, MAX_GRID_SIZE};
