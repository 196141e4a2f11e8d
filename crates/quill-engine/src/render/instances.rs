use crate::anim::{InstanceState, Visibility};
use crate::error::{BuildError, BuildResult};
use crate::paint::GradientTable;
use crate::path::CurveSegment;

use super::config::{PipelineConfig, clamp_line_width};
use super::wire::{BezierParameters, GlobalParameters};

/// Output of the instance builder for one path.
///
/// `beziers[i]` and `states[i]` both describe input segment `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceBuffers {
    pub globals: GlobalParameters,
    pub beziers: Vec<BezierParameters>,
    pub states: Vec<InstanceState>,
}

/// Builds the per-draw record and one `BezierParameters` per segment.
///
/// `segments` must already be in render space. Order is preserved and hidden
/// segments are kept, so instance indices are stable across reveal frames.
///
/// Errors:
/// - [`BuildError::EmptyPath`] for an empty segment list
/// - [`BuildError::VisibilityMismatch`] if `visibility` was computed for another path
/// - [`BuildError::NonFiniteCurve`] / [`BuildError::DegenerateCurve`] for the first bad segment
pub fn build_instances(
    segments: &[CurveSegment],
    line_width: f32,
    gradient: &GradientTable,
    visibility: &Visibility,
    config: &PipelineConfig,
) -> BuildResult<InstanceBuffers> {
    if segments.is_empty() {
        return Err(BuildError::EmptyPath);
    }
    if visibility.len() != segments.len() {
        return Err(BuildError::VisibilityMismatch {
            expected: segments.len(),
            found: visibility.len(),
        });
    }

    let mut beziers = Vec::with_capacity(segments.len());
    for (index, seg) in segments.iter().enumerate() {
        if !seg.is_finite() {
            return Err(BuildError::NonFiniteCurve { index });
        }
        if seg.is_degenerate() {
            return Err(BuildError::DegenerateCurve { index });
        }
        beziers.push(BezierParameters::from(seg));
    }

    let config = config.sanitized();
    debug_assert!(beziers.len() <= u32::MAX as usize);

    let globals = GlobalParameters {
        line_width: clamp_line_width(line_width),
        elements_per_instance: config.elements_per_instance,
        gradient_steps_count: gradient.len() as u32,
        vectors_count: beziers.len() as u32,
        filled_percent: visibility.percent(),
    };

    log::trace!(
        "instance buffer: {} curves, {} elements each, filled {:.3}",
        globals.vectors_count,
        globals.elements_per_instance,
        globals.filled_percent
    );

    Ok(InstanceBuffers { globals, beziers, states: visibility.states() })
}
