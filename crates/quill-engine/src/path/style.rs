use crate::paint::{Color, ColorStop, evenly_spaced};

/// Per-path stroke style.
///
/// `stops` run along the stroke: offset 0 is the path start, offset 1 its end.
/// They are validated when a frame is built.
#[derive(Debug, Clone, PartialEq)]
pub struct PathStyle {
    pub line_width: f32,
    pub stops: Vec<ColorStop>,
}

impl PathStyle {
    #[inline]
    pub fn new(line_width: f32, stops: Vec<ColorStop>) -> Self {
        Self { line_width, stops }
    }

    /// Single-color stroke.
    pub fn solid(line_width: f32, color: Color) -> Self {
        Self::new(line_width, evenly_spaced(&[color]))
    }

    /// Stroke whose colors are spread evenly from start to end.
    pub fn with_colors(line_width: f32, colors: &[Color]) -> Self {
        Self::new(line_width, evenly_spaced(colors))
    }
}
