//! Stroke coloring.
//!
//! Scope:
//! - RGBA color representation
//! - gradient stops and their resolution into a fixed-size sample table

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, GradientTable, evenly_spaced, validate_stops};
