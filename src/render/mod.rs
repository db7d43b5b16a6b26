// src/render/mod.rs

//! Turning layouts into output.
//!
//! - [`text`] draws a layout as a fixed-width text chart (pure).
//! - [`backend`] is the `Renderer` seam the runtime writes through.

pub mod backend;
pub mod text;

pub use backend::{Renderer, TerminalRenderer};
pub use text::{bar_cells, render_dry_run, render_text, BarCells, DEFAULT_COLUMNS};
