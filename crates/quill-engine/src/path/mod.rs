//! Curve model: cubic segments, the path builder, and per-path stroke style.

mod builder;
mod segment;
mod style;

pub use builder::BezierPath;
pub use segment::{CurveSegment, DEFAULT_FLATTEN_SAMPLES, retain_drawable};
pub use style::PathStyle;
