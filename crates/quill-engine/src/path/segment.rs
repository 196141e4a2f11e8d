use crate::coords::{Vec2, ViewTransform};

/// Number of chords used when a caller does not pick an arc-length resolution.
pub const DEFAULT_FLATTEN_SAMPLES: u32 = 32;

/// One cubic bezier segment: endpoints `a`, `b` and control points `p1`, `p2`.
///
/// Evaluated as `B(t) = (1-t)³a + 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³b`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CurveSegment {
    pub a: Vec2,
    pub b: Vec2,
    pub p1: Vec2,
    pub p2: Vec2,
}

impl CurveSegment {
    #[inline]
    pub const fn new(a: Vec2, b: Vec2, p1: Vec2, p2: Vec2) -> Self {
        Self { a, b, p1, p2 }
    }

    /// Straight segment from `a` to `b`, with control points sitting on the endpoints.
    #[inline]
    pub const fn line(a: Vec2, b: Vec2) -> Self {
        Self { a, b, p1: a, p2: b }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.p1.is_finite() && self.p2.is_finite()
    }

    /// True when all four points coincide; such a segment has no direction.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b && self.a == self.p1 && self.a == self.p2
    }

    /// Point at parameter `t` in `[0, 1]`.
    pub fn eval(&self, t: f32) -> Vec2 {
        let nt = 1.0 - t;
        self.a * (nt * nt * nt)
            + self.p1 * (3.0 * nt * nt * t)
            + self.p2 * (3.0 * nt * t * t)
            + self.b * (t * t * t)
    }

    /// Direction leaving `a`, taken from the first control point distinct from it.
    ///
    /// Zero only for degenerate segments.
    pub fn start_tangent(&self) -> Vec2 {
        [self.p1, self.p2, self.b]
            .into_iter()
            .map(|p| p - self.a)
            .find(|d| *d != Vec2::zero())
            .unwrap_or_default()
    }

    /// Direction arriving at `b`, taken from the last control point distinct from it.
    pub fn end_tangent(&self) -> Vec2 {
        [self.p2, self.p1, self.a]
            .into_iter()
            .map(|p| self.b - p)
            .find(|d| *d != Vec2::zero())
            .unwrap_or_default()
    }

    /// Cumulative chord lengths after flattening into `samples` chords.
    ///
    /// Entry `i` is the length up to parameter `i / samples`; the first entry is 0.
    pub fn chord_lengths(&self, samples: u32) -> Vec<f32> {
        let n = samples.max(1);
        let mut out = Vec::with_capacity(n as usize + 1);
        let mut prev = self.a;
        let mut acc = 0.0;
        out.push(0.0);
        for i in 1..=n {
            let p = self.eval(i as f32 / n as f32);
            acc += prev.distance(p);
            out.push(acc);
            prev = p;
        }
        out
    }

    /// Approximate arc length using `samples` chords.
    pub fn arc_length(&self, samples: u32) -> f32 {
        self.chord_lengths(samples).last().copied().unwrap_or(0.0)
    }

    /// Curve parameter at which `fraction` of the arc length has been covered.
    ///
    /// `fraction` is clamped to `[0, 1]`. Zero-length segments map linearly.
    pub fn param_at_length_fraction(&self, fraction: f32, samples: u32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        let lengths = self.chord_lengths(samples);
        let total = lengths.last().copied().unwrap_or(0.0);
        if total <= 0.0 {
            return fraction;
        }

        let target = fraction * total;
        let n = (lengths.len() - 1) as f32;
        for i in 1..lengths.len() {
            if lengths[i] >= target {
                let span = lengths[i] - lengths[i - 1];
                let local = if span > 0.0 { (target - lengths[i - 1]) / span } else { 0.0 };
                return ((i - 1) as f32 + local) / n;
            }
        }
        1.0
    }

    /// Copy of this segment mapped through `xf`.
    #[inline]
    pub fn transformed(&self, xf: &ViewTransform) -> Self {
        Self {
            a: xf.apply(self.a),
            b: xf.apply(self.b),
            p1: xf.apply(self.p1),
            p2: xf.apply(self.p2),
        }
    }
}

/// Drops segments that cannot be drawn (degenerate or non-finite), keeping order.
///
/// The instance builder rejects such segments instead of skipping them, since
/// skipping would shift every later instance index. Call this first when that
/// shift is acceptable.
pub fn retain_drawable(segments: &[CurveSegment]) -> Vec<CurveSegment> {
    let kept: Vec<CurveSegment> = segments
        .iter()
        .filter(|s| s.is_finite() && !s.is_degenerate())
        .copied()
        .collect();
    if kept.len() != segments.len() {
        log::debug!("dropped {} undrawable curve segments", segments.len() - kept.len());
    }
    kept
}
