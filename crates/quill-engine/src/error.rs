//! Errors reported by the buffer preparation pipeline.

/// Convenience result type used across the pipeline.
pub type BuildResult<T> = Result<T, BuildError>;

/// Why a color stop list was rejected.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum GradientIssue {
    #[error("no color stops")]
    Empty,

    #[error("stop {index} has a non-finite offset or color")]
    NonFinite { index: usize },

    #[error("stop {index} offset {offset} is lower than the previous stop")]
    Unsorted { index: usize, offset: f32 },

    #[error("first stop offset is {0}, expected 0")]
    MissingStart(f32),

    #[error("last stop offset is {0}, expected 1")]
    MissingEnd(f32),
}

/// Failure of a frame build.
///
/// A failed build never produces partial buffers; the caller keeps whatever it
/// published last.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    /// Malformed gradient stop list.
    #[error("invalid gradient: {0}")]
    InvalidGradient(#[from] GradientIssue),

    /// The path contains no curve segments.
    #[error("path has no curve segments")]
    EmptyPath,

    /// A segment whose four points coincide reached the instance builder.
    ///
    /// Such segments have no tangent; filter them out before building
    /// (see [`crate::path::retain_drawable`]).
    #[error("curve segment {index} is degenerate (all four points coincide)")]
    DegenerateCurve { index: usize },

    /// A segment contains a NaN or infinite coordinate.
    #[error("curve segment {index} has a non-finite coordinate")]
    NonFiniteCurve { index: usize },

    /// The visibility vector does not line up with the segment list.
    #[error("visibility vector has {found} entries, expected {expected}")]
    VisibilityMismatch { expected: usize, found: usize },

    /// A path inside a multi-path build failed.
    #[error("path {index}: {source}")]
    InPath {
        index: usize,
        #[source]
        source: Box<BuildError>,
    },
}

impl BuildError {
    /// Wraps `self` with the index of the path it came from.
    pub fn in_path(self, index: usize) -> Self {
        Self::InPath { index, source: Box::new(self) }
    }
}
