use rayon::prelude::*;

use crate::anim::{InstanceState, SegmentWeights, Visibility};
use crate::coords::ViewTransform;
use crate::error::BuildResult;
use crate::paint::GradientTable;
use crate::path::{CurveSegment, PathStyle};

use super::caps::{CapSite, build_caps};
use super::config::{PipelineConfig, clamp_line_width};
use super::instances::build_instances;
use super::wire::{BezierParameters, CircleVertex, GlobalParameters};

/// Everything needed to build one path's buffers for one frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameInput<'a> {
    /// Segments in authoring space.
    pub segments: &'a [CurveSegment],
    pub style: &'a PathStyle,
    /// Authoring space → render space.
    pub transform: ViewTransform,
    /// Reveal progress; clamped to `[0, 1]`.
    pub filled_percent: f32,
}

impl<'a> FrameInput<'a> {
    #[inline]
    pub fn new(segments: &'a [CurveSegment], style: &'a PathStyle, filled_percent: f32) -> Self {
        Self { segments, style, transform: ViewTransform::identity(), filled_percent }
    }

    #[inline]
    pub fn with_transform(mut self, transform: ViewTransform) -> Self {
        self.transform = transform;
        self
    }
}

/// Complete, immutable buffer set for one path and one frame.
///
/// Built in one go and only then handed out, so a consumer never sees a
/// half-written frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    globals: GlobalParameters,
    beziers: Vec<BezierParameters>,
    states: Vec<InstanceState>,
    gradient: Vec<[f32; 4]>,
    circles: Vec<CircleVertex>,
    cap_sites: Vec<CapSite>,
}

impl Frame {
    #[inline]
    pub fn globals(&self) -> &GlobalParameters {
        &self.globals
    }

    #[inline]
    pub fn beziers(&self) -> &[BezierParameters] {
        &self.beziers
    }

    /// Draw state of each instance, index-aligned with [`beziers`](Self::beziers).
    #[inline]
    pub fn states(&self) -> &[InstanceState] {
        &self.states
    }

    /// Sampled gradient rows; length equals `globals().gradient_steps_count`.
    #[inline]
    pub fn gradient(&self) -> &[[f32; 4]] {
        &self.gradient
    }

    #[inline]
    pub fn circles(&self) -> &[CircleVertex] {
        &self.circles
    }

    /// What each circle rounds off, index-aligned with [`circles`](Self::circles).
    #[inline]
    pub fn cap_sites(&self) -> &[CapSite] {
        &self.cap_sites
    }

    /// Elements to draw for instance `i` (0 for hidden instances).
    pub fn vertex_count(&self, i: usize) -> u32 {
        self.states
            .get(i)
            .map_or(0, |s| s.vertex_count(self.globals.elements_per_instance))
    }

    pub fn globals_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.globals)
    }

    pub fn bezier_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.beziers)
    }

    pub fn gradient_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.gradient)
    }

    pub fn circle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.circles)
    }
}

/// Runs the whole pipeline for one path.
///
/// The gradient is validated before anything else is built; any error aborts
/// the build without producing buffers.
///
/// Reveal pacing and cap placement are decided on the authoring-space segments,
/// since a view fit may scale the axes differently. Only the emitted curve
/// records and cap centers are mapped into render space.
pub fn build_frame(input: &FrameInput<'_>, config: &PipelineConfig) -> BuildResult<Frame> {
    let config = config.sanitized();

    let gradient = GradientTable::resolve(&input.style.stops, config.gradient_steps_count)?;

    let segments: Vec<CurveSegment> = if input.transform.is_identity() {
        input.segments.to_vec()
    } else {
        input.segments.iter().map(|s| s.transformed(&input.transform)).collect()
    };
    let line_width = clamp_line_width(input.transform.apply_length(clamp_line_width(input.style.line_width)));

    let weights = SegmentWeights::compute(input.segments, config.weighting);
    let visibility = Visibility::compute(&weights, input.filled_percent);

    let instances = build_instances(&segments, line_width, &gradient, &visibility, &config)?;
    let caps = build_caps(
        input.segments,
        &weights,
        &visibility,
        &gradient,
        line_width,
        &input.transform,
        &config,
    )?;

    log::debug!(
        "built frame: {} curves, {} caps, {} gradient steps, filled {:.3}",
        instances.beziers.len(),
        caps.circles.len(),
        gradient.len(),
        instances.globals.filled_percent
    );

    Ok(Frame {
        globals: instances.globals,
        beziers: instances.beziers,
        states: instances.states,
        gradient: gradient.to_rgba(),
        circles: caps.circles,
        cap_sites: caps.sites,
    })
}

/// Builds independent paths in parallel.
///
/// Output order matches `inputs`. If any path fails, the call fails with the
/// error of the lowest failing index, wrapped in
/// [`BuildError::InPath`](crate::error::BuildError::InPath).
pub fn build_frames(inputs: &[FrameInput<'_>], config: &PipelineConfig) -> BuildResult<Vec<Frame>> {
    let results: Vec<BuildResult<Frame>> = inputs
        .par_iter()
        .enumerate()
        .map(|(i, input)| build_frame(input, config).map_err(|e| e.in_path(i)))
        .collect();
    results.into_iter().collect()
}
