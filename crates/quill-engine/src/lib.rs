//! Quill engine crate.
//!
//! Prepares animated, gradient-colored bezier strokes for GPU instanced
//! rendering: path geometry goes in, byte-exact instance and cap buffers
//! come out, one immutable [`render::Frame`] per path and frame.

pub mod anim;
pub mod coords;
pub mod error;
pub mod logging;
pub mod paint;
pub mod path;
pub mod render;

pub use error::{BuildError, BuildResult, GradientIssue};
