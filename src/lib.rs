//! Escape-time Mandelbrot grids and iteration colour tables.
//!
//! The crate stops at data: an [`EscapeGrid`](grid::EscapeGrid) of escape
//! iterations and a [`ColourTable`](colour::ColourTable) indexed by them. Drawing
//! the result is left to the caller.

pub mod colour;
pub mod config;
pub mod error;
pub mod escape;
pub mod grid;
pub mod mapper;
pub mod preview;
pub mod render;
pub mod screen;

pub use error::{ConfigError, Error, Result};
pub use render::Render;
