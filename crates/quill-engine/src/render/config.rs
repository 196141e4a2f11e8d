use crate::anim::Weighting;

/// Vertices the curve rasterizer emits per instance unless configured otherwise.
pub const DEFAULT_ELEMENTS_PER_INSTANCE: u32 = 300;

/// Default size of the sampled gradient table.
pub const DEFAULT_GRADIENT_STEPS: u32 = 64;

/// Default direction change (radians) above which a vertex gets a round join: 10°.
pub const DEFAULT_JOIN_THRESHOLD: f32 = core::f32::consts::PI / 18.0;

/// Smallest stroke width handed to the GPU; narrower or invalid widths are raised to it.
pub const MIN_LINE_WIDTH: f32 = 1.0e-6;

/// Settings that stay fixed across frames of one renderer.
///
/// Out-of-range values are clamped when used (see [`PipelineConfig::sanitized`]).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Vertices the downstream rasterizer emits per curve instance.
    pub elements_per_instance: u32,

    /// Number of samples in the gradient lookup table.
    pub gradient_steps_count: u32,

    /// How reveal progress is spread across segments.
    pub weighting: Weighting,

    /// Direction change, in radians, above which two joined segments get a round join.
    pub join_threshold: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            elements_per_instance: DEFAULT_ELEMENTS_PER_INSTANCE,
            gradient_steps_count: DEFAULT_GRADIENT_STEPS,
            weighting: Weighting::Uniform,
            join_threshold: DEFAULT_JOIN_THRESHOLD,
        }
    }
}

impl PipelineConfig {
    /// Copy with counts raised to at least one and the join threshold in `[0, π]`.
    pub fn sanitized(&self) -> Self {
        let join_threshold = if self.join_threshold.is_nan() {
            DEFAULT_JOIN_THRESHOLD
        } else {
            self.join_threshold.clamp(0.0, core::f32::consts::PI)
        };
        let weighting = match self.weighting {
            Weighting::ArcLength { samples } => Weighting::ArcLength { samples: samples.max(1) },
            w => w,
        };
        Self {
            elements_per_instance: self.elements_per_instance.max(1),
            gradient_steps_count: self.gradient_steps_count.max(1),
            weighting,
            join_threshold,
        }
    }
}

/// Clamps a stroke width to `[MIN_LINE_WIDTH, ∞)`; NaN and infinities become the minimum.
#[inline]
pub fn clamp_line_width(width: f32) -> f32 {
    if width.is_finite() { width.max(MIN_LINE_WIDTH) } else { MIN_LINE_WIDTH }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_raises_zero_counts() {
        let c = PipelineConfig {
            elements_per_instance: 0,
            gradient_steps_count: 0,
            weighting: Weighting::ArcLength { samples: 0 },
            join_threshold: f32::NAN,
        }
        .sanitized();
        assert_eq!(c.elements_per_instance, 1);
        assert_eq!(c.gradient_steps_count, 1);
        assert_eq!(c.weighting, Weighting::ArcLength { samples: 1 });
        assert_eq!(c.join_threshold, DEFAULT_JOIN_THRESHOLD);
    }

    #[test]
    fn line_width_is_clamped() {
        assert_eq!(clamp_line_width(2.0), 2.0);
        assert_eq!(clamp_line_width(0.0), MIN_LINE_WIDTH);
        assert_eq!(clamp_line_width(-4.0), MIN_LINE_WIDTH);
        assert_eq!(clamp_line_width(f32::NAN), MIN_LINE_WIDTH);
    }
}
