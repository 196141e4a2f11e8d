use crate::path::CurveSegment;

/// How much of the total reveal progress each segment consumes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Weighting {
    /// Every segment is an equal share, regardless of its length.
    ///
    /// This is the pacing the shader assumes when it clips by `filledPercent`.
    #[default]
    Uniform,
    /// Shares proportional to arc length, flattened with `samples` chords per segment.
    ///
    /// Gives constant pen speed, but the shader must use the same weights to
    /// clip consistently.
    ArcLength { samples: u32 },
}

/// Per-segment weights and their cumulative extents along the path.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentWeights {
    weighting: Weighting,
    weights: Vec<f32>,
    /// `ends[i]` is the cumulative weight up to and including segment `i`.
    ends: Vec<f32>,
}

impl SegmentWeights {
    /// Computes weights for `segments` under `weighting`.
    ///
    /// Arc-length weighting falls back to uniform when the whole path has no length.
    pub fn compute(segments: &[CurveSegment], weighting: Weighting) -> Self {
        let weights: Vec<f32> = match weighting {
            Weighting::Uniform => vec![1.0; segments.len()],
            Weighting::ArcLength { samples } => {
                let lengths: Vec<f32> = segments.iter().map(|s| s.arc_length(samples)).collect();
                if lengths.iter().sum::<f32>() > 0.0 {
                    lengths
                } else {
                    log::debug!("path has zero arc length; using uniform segment weights");
                    return Self::compute(segments, Weighting::Uniform);
                }
            }
        };

        let ends = weights
            .iter()
            .scan(0.0f32, |acc, w| {
                *acc += *w;
                Some(*acc)
            })
            .collect();

        Self { weighting, weights, ends }
    }

    #[inline]
    pub fn weighting(&self) -> Weighting {
        self.weighting
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    #[inline]
    pub fn weight(&self, i: usize) -> f32 {
        self.weights[i]
    }

    /// Sum of all weights.
    #[inline]
    pub fn total(&self) -> f32 {
        self.ends.last().copied().unwrap_or(0.0)
    }

    /// Cumulative weight before segment `i`.
    #[inline]
    pub fn start(&self, i: usize) -> f32 {
        if i == 0 { 0.0 } else { self.ends[i - 1] }
    }

    /// Cumulative weight through segment `i`.
    #[inline]
    pub fn end(&self, i: usize) -> f32 {
        self.ends[i]
    }

    /// Position of segment `i`'s start along the path, in `[0, 1]`.
    pub fn start_offset(&self, i: usize) -> f32 {
        self.fraction(self.start(i))
    }

    /// Position of segment `i`'s end along the path, in `[0, 1]`.
    pub fn end_offset(&self, i: usize) -> f32 {
        if i + 1 == self.len() {
            return 1.0;
        }
        self.fraction(self.end(i))
    }

    fn fraction(&self, w: f32) -> f32 {
        let total = self.total();
        if total > 0.0 { (w / total).clamp(0.0, 1.0) } else { 0.0 }
    }
}
