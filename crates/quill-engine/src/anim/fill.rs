use crate::coords::Vec2;
use crate::path::CurveSegment;

use super::{SegmentWeights, Weighting};

/// Clamps an animation progress value into `[0, 1]`; NaN becomes 0.
///
/// Progress comes out of animation interpolation and may overshoot; a clamped
/// frame is preferred over a failed one.
#[inline]
pub fn clamp_percent(percent: f32) -> f32 {
    if percent.is_nan() { 0.0 } else { percent.clamp(0.0, 1.0) }
}

/// Draw state of one curve instance, carried alongside its `BezierParameters`.
///
/// Hidden instances stay in the buffer; the consumer decides what to draw.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InstanceState {
    Hidden,
    /// Revealed up to the given fraction in `(0, 1)`.
    Partial(f32),
    Revealed,
}

impl InstanceState {
    pub fn from_factor(v: f32) -> Self {
        if v <= 0.0 || v.is_nan() {
            Self::Hidden
        } else if v >= 1.0 {
            Self::Revealed
        } else {
            Self::Partial(v)
        }
    }

    #[inline]
    pub fn factor(self) -> f32 {
        match self {
            Self::Hidden => 0.0,
            Self::Partial(v) => v,
            Self::Revealed => 1.0,
        }
    }

    #[inline]
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Number of the instance's `elements_per_instance` elements to draw.
    ///
    /// Partial instances round up so that the frontier never lags behind the
    /// pen-tip cap.
    pub fn vertex_count(self, elements_per_instance: u32) -> u32 {
        match self {
            Self::Hidden => 0,
            Self::Revealed => elements_per_instance,
            Self::Partial(v) => {
                ((v * elements_per_instance as f32).ceil() as u32).min(elements_per_instance)
            }
        }
    }
}

/// Per-segment reveal factors for one `filledPercent`.
///
/// Pure function of the weights and the (clamped) progress.
#[derive(Debug, Clone, PartialEq)]
pub struct Visibility {
    percent: f32,
    factors: Vec<f32>,
}

impl Visibility {
    pub fn compute(weights: &SegmentWeights, percent: f32) -> Self {
        let percent = clamp_percent(percent);
        let n = weights.len();

        let factors = if percent <= 0.0 {
            vec![0.0; n]
        } else if percent >= 1.0 {
            vec![1.0; n]
        } else {
            let frontier = percent * weights.total();
            (0..n)
                .map(|i| {
                    let (start, end) = (weights.start(i), weights.end(i));
                    if frontier >= end {
                        1.0
                    } else if frontier <= start {
                        0.0
                    } else {
                        ((frontier - start) / weights.weight(i)).clamp(0.0, 1.0)
                    }
                })
                .collect()
        };

        Self { percent, factors }
    }

    /// The clamped progress these factors were computed for.
    #[inline]
    pub fn percent(&self) -> f32 {
        self.percent
    }

    #[inline]
    pub fn factors(&self) -> &[f32] {
        &self.factors
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    #[inline]
    pub fn state(&self, i: usize) -> InstanceState {
        InstanceState::from_factor(self.factors[i])
    }

    pub fn states(&self) -> Vec<InstanceState> {
        self.factors.iter().map(|&v| InstanceState::from_factor(v)).collect()
    }

    /// A cap at the start of segment `i` shows once the segment starts revealing.
    #[inline]
    pub fn start_cap_visible(&self, i: usize) -> bool {
        self.factors[i] > 0.0
    }

    /// A cap or join at the end of segment `i` shows once the segment is fully revealed.
    #[inline]
    pub fn end_cap_visible(&self, i: usize) -> bool {
        self.factors[i] >= 1.0
    }

    /// The pen tip shows as soon as anything is revealed.
    #[inline]
    pub fn pen_tip_visible(&self) -> bool {
        self.factors.iter().any(|&v| v > 0.0)
    }

    /// Index of the segment carrying the animated frontier (the last one with any reveal).
    pub fn frontier_segment(&self) -> Option<usize> {
        self.factors.iter().rposition(|&v| v > 0.0)
    }
}

/// Point where the reveal currently ends.
///
/// Path start while nothing is revealed, path end once everything is.
pub fn frontier_point(
    segments: &[CurveSegment],
    weights: &SegmentWeights,
    visibility: &Visibility,
) -> Option<Vec2> {
    let first = segments.first()?;
    let Some(k) = visibility.frontier_segment() else {
        return Some(first.a);
    };
    let seg = segments.get(k)?;
    let v = visibility.factors()[k];

    let t = match weights.weighting() {
        Weighting::Uniform => v,
        Weighting::ArcLength { samples } => seg.param_at_length_fraction(v, samples),
    };
    Some(if t >= 1.0 { seg.b } else { seg.eval(t) })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_lines() -> Vec<CurveSegment> {
        (0..4)
            .map(|i| {
                let x = i as f32 * 10.0;
                CurveSegment::line(Vec2::new(x, 0.0), Vec2::new(x + 10.0, 0.0))
            })
            .collect()
    }

    fn vis(percent: f32) -> Visibility {
        let w = SegmentWeights::compute(&four_lines(), Weighting::Uniform);
        Visibility::compute(&w, percent)
    }

    // ── visibility ────────────────────────────────────────────────────────

    #[test]
    fn zero_percent_hides_everything() {
        assert_eq!(vis(0.0).factors(), &[0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn full_percent_reveals_everything() {
        assert_eq!(vis(1.0).factors(), &[1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn half_percent_on_boundary_is_exact() {
        assert_eq!(vis(0.5).factors(), &[1.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn mid_segment_is_fractional() {
        let v = vis(0.375);
        assert_eq!(v.factors()[0], 1.0);
        assert!((v.factors()[1] - 0.5).abs() < 1e-6);
        assert_eq!(v.factors()[2], 0.0);
        assert_eq!(v.frontier_segment(), Some(1));
    }

    #[test]
    fn out_of_range_percent_is_clamped() {
        assert_eq!(vis(-3.0).factors(), vis(0.0).factors());
        assert_eq!(vis(7.0).factors(), vis(1.0).factors());
        assert_eq!(vis(f32::NAN).percent(), 0.0);
    }

    #[test]
    fn compute_is_deterministic() {
        assert_eq!(vis(0.61), vis(0.61));
    }

    #[test]
    fn arc_length_weighting_paces_by_length() {
        let segs = vec![
            CurveSegment::line(Vec2::new(0.0, 0.0), Vec2::new(30.0, 0.0)),
            CurveSegment::line(Vec2::new(30.0, 0.0), Vec2::new(40.0, 0.0)),
        ];
        let w = SegmentWeights::compute(&segs, Weighting::ArcLength { samples: 8 });
        let v = Visibility::compute(&w, 0.5);
        assert!((v.factors()[0] - 2.0 / 3.0).abs() < 1e-4);
        assert_eq!(v.factors()[1], 0.0);
    }

    // ── caps ──────────────────────────────────────────────────────────────

    #[test]
    fn cap_rules_follow_segment_factors() {
        let v = vis(0.375);
        assert!(v.start_cap_visible(0));
        assert!(v.end_cap_visible(0));
        assert!(v.start_cap_visible(1));
        assert!(!v.end_cap_visible(1));
        assert!(!v.start_cap_visible(2));
        assert!(v.pen_tip_visible());
        assert!(!vis(0.0).pen_tip_visible());
    }

    // ── frontier ──────────────────────────────────────────────────────────

    #[test]
    fn frontier_tracks_progress() {
        let segs = four_lines();
        let w = SegmentWeights::compute(&segs, Weighting::Uniform);
        let at = |p: f32| frontier_point(&segs, &w, &Visibility::compute(&w, p)).unwrap();

        assert_eq!(at(0.0), Vec2::new(0.0, 0.0));
        assert_eq!(at(1.0), Vec2::new(40.0, 0.0));
        assert_eq!(at(0.5), Vec2::new(20.0, 0.0));
    }

    #[test]
    fn arc_length_frontier_lands_at_distance() {
        // 30 units then 10 units: half the length is 20 units into segment 0.
        let segs = vec![
            CurveSegment::line(Vec2::new(0.0, 0.0), Vec2::new(30.0, 0.0)),
            CurveSegment::line(Vec2::new(30.0, 0.0), Vec2::new(40.0, 0.0)),
        ];
        let w = SegmentWeights::compute(&segs, Weighting::ArcLength { samples: 32 });
        let p = frontier_point(&segs, &w, &Visibility::compute(&w, 0.5)).unwrap();
        assert!((p.x - 20.0).abs() < 0.05, "frontier at {p:?}");
        assert_eq!(p.y, 0.0);

        // Uniform pacing would put it at the end of segment 0 instead.
        let uw = SegmentWeights::compute(&segs, Weighting::Uniform);
        let up = frontier_point(&segs, &uw, &Visibility::compute(&uw, 0.5)).unwrap();
        assert_eq!(up, Vec2::new(30.0, 0.0));
    }

    #[test]
    fn zero_weight_segment_flips_once_reached() {
        let dot = Vec2::new(10.0, 0.0);
        let segs = vec![
            CurveSegment::line(Vec2::new(0.0, 0.0), dot),
            CurveSegment::new(dot, dot, dot, dot),
            CurveSegment::line(dot, Vec2::new(20.0, 0.0)),
        ];
        let w = SegmentWeights::compute(&segs, Weighting::ArcLength { samples: 8 });
        assert_eq!(w.weight(1), 0.0);

        let before = Visibility::compute(&w, 0.4);
        assert_eq!(before.factors()[1], 0.0);

        let after = Visibility::compute(&w, 0.6);
        assert_eq!(after.factors()[0], 1.0);
        assert_eq!(after.factors()[1], 1.0);
        assert!((after.factors()[2] - 0.2).abs() < 1e-4);
    }

    #[test]
    fn frontier_of_empty_path_is_none() {
        let w = SegmentWeights::compute(&[], Weighting::Uniform);
        assert_eq!(frontier_point(&[], &w, &Visibility::compute(&w, 0.5)), None);
    }

    // ── instance state ────────────────────────────────────────────────────

    #[test]
    fn vertex_count_rounds_partial_up() {
        assert_eq!(InstanceState::Hidden.vertex_count(300), 0);
        assert_eq!(InstanceState::Revealed.vertex_count(300), 300);
        assert_eq!(InstanceState::from_factor(0.5).vertex_count(300), 150);
        assert_eq!(InstanceState::from_factor(0.001).vertex_count(300), 1);
    }

    #[test]
    fn states_are_index_aligned() {
        let states = vis(0.375).states();
        assert_eq!(states.len(), 4);
        assert_eq!(states[0], InstanceState::Revealed);
        assert!(matches!(states[1], InstanceState::Partial(_)));
        assert_eq!(states[3], InstanceState::Hidden);
    }
}
