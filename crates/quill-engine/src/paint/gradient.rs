use crate::error::{BuildResult, GradientIssue};

use super::Color;

/// A single gradient stop.
///
/// `t` is the offset along the stroke in `[0, 1]`. Stop lists are validated
/// when they are resolved, not when they are authored.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Spreads `colors` evenly over `[0, 1]`.
///
/// A single color produces a flat two-stop gradient; an empty slice produces an
/// empty (invalid) stop list.
pub fn evenly_spaced(colors: &[Color]) -> Vec<ColorStop> {
    match colors {
        [] => Vec::new(),
        [c] => vec![ColorStop::new(0.0, *c), ColorStop::new(1.0, *c)],
        _ => {
            let last = (colors.len() - 1) as f32;
            colors
                .iter()
                .enumerate()
                .map(|(i, c)| ColorStop::new(i as f32 / last, *c))
                .collect()
        }
    }
}

/// Checks that `stops` is non-empty, finite, sorted by offset, and spans exactly `[0, 1]`.
pub fn validate_stops(stops: &[ColorStop]) -> Result<(), GradientIssue> {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return Err(GradientIssue::Empty),
    };

    let mut prev = f32::NEG_INFINITY;
    for (index, stop) in stops.iter().enumerate() {
        if !stop.t.is_finite() || !stop.color.is_finite() {
            return Err(GradientIssue::NonFinite { index });
        }
        if stop.t < prev {
            return Err(GradientIssue::Unsorted { index, offset: stop.t });
        }
        prev = stop.t;
    }

    if first.t != 0.0 {
        return Err(GradientIssue::MissingStart(first.t));
    }
    if last.t != 1.0 {
        return Err(GradientIssue::MissingEnd(last.t));
    }
    Ok(())
}

/// Color of a validated stop list at offset `x`.
///
/// Uses the last stop whose offset is `<= x`, so among stops sharing an offset the
/// later one wins at that exact offset while positions just before it still
/// interpolate toward the earlier one.
fn color_at(stops: &[ColorStop], x: f32) -> Color {
    let Some(k) = stops.iter().rposition(|s| s.t <= x) else {
        return stops.first().map_or(Color::transparent(), |s| s.color);
    };
    let lo = stops[k];
    match stops.get(k + 1) {
        None => lo.color,
        Some(hi) => {
            // hi.t > x >= lo.t, so the span is never zero here.
            let t = (x - lo.t) / (hi.t - lo.t);
            lo.color.lerp(hi.color, t)
        }
    }
}

/// Gradient sampled at evenly spaced offsets, ready for upload as a lookup table.
///
/// Sample `i` of `n` sits at offset `i / (n - 1)`; a one-sample table holds the
/// color at offset 0.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientTable {
    samples: Vec<Color>,
}

impl GradientTable {
    /// Validates `stops` and samples them `steps` times (`0` is treated as `1`).
    pub fn resolve(stops: &[ColorStop], steps: u32) -> BuildResult<Self> {
        validate_stops(stops)?;

        let steps = steps.max(1) as usize;
        let samples = if steps == 1 {
            vec![color_at(stops, 0.0)]
        } else {
            let denom = (steps - 1) as f32;
            (0..steps).map(|i| color_at(stops, i as f32 / denom)).collect()
        };

        log::trace!("resolved {} gradient stops into {} samples", stops.len(), samples.len());
        Ok(Self { samples })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn samples(&self) -> &[Color] {
        &self.samples
    }

    /// Samples as `[r, g, b, a]` rows, the layout of the shader-side table.
    pub fn to_rgba(&self) -> Vec<[f32; 4]> {
        self.samples.iter().map(|c| c.to_array()).collect()
    }

    /// Reads the table at `offset` in `[0, 1]`, interpolating between neighboring samples.
    ///
    /// Out-of-range offsets are clamped; NaN reads offset 0.
    pub fn sample(&self, offset: f32) -> Color {
        let n = self.samples.len();
        if n == 0 {
            return Color::transparent();
        }
        if n == 1 {
            return self.samples[0];
        }

        let offset = if offset.is_nan() { 0.0 } else { offset.clamp(0.0, 1.0) };
        let pos = offset * (n - 1) as f32;
        let i0 = (pos.floor() as usize).min(n - 1);
        let i1 = (i0 + 1).min(n - 1);
        self.samples[i0].lerp(self.samples[i1], pos - i0 as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
    const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

    fn stops(list: &[(f32, Color)]) -> Vec<ColorStop> {
        list.iter().map(|&(t, c)| ColorStop::new(t, c)).collect()
    }

    // ── resolve ───────────────────────────────────────────────────────────

    #[test]
    fn resolve_produces_exact_count_and_endpoints() {
        let s = stops(&[(0.0, RED), (0.3, GREEN), (1.0, BLUE)]);
        for n in [1u32, 2, 3, 7, 64, 256] {
            let table = GradientTable::resolve(&s, n).unwrap();
            assert_eq!(table.len(), n as usize);
            assert_eq!(table.samples()[0], RED);
            if n > 1 {
                assert_eq!(*table.samples().last().unwrap(), BLUE);
            }
        }
    }

    #[test]
    fn resolve_single_step_is_start_color() {
        let s = stops(&[(0.0, GREEN), (1.0, BLUE)]);
        let table = GradientTable::resolve(&s, 1).unwrap();
        assert_eq!(table.samples(), &[GREEN]);
    }

    #[test]
    fn resolve_zero_steps_is_clamped() {
        let s = stops(&[(0.0, GREEN), (1.0, BLUE)]);
        assert_eq!(GradientTable::resolve(&s, 0).unwrap().len(), 1);
    }

    #[test]
    fn resolve_interpolates_midpoint() {
        let s = stops(&[(0.0, Color::new(0.0, 0.0, 0.0, 0.0)), (1.0, Color::new(1.0, 1.0, 1.0, 1.0))]);
        let table = GradientTable::resolve(&s, 3).unwrap();
        assert_eq!(table.samples()[1], Color::new(0.5, 0.5, 0.5, 0.5));
    }

    #[test]
    fn duplicate_offset_is_a_hard_transition() {
        let s = stops(&[(0.0, RED), (0.5, RED), (0.5, BLUE), (1.0, BLUE)]);
        // The later stop wins on its exact offset...
        assert_eq!(color_at(&s, 0.5), BLUE);
        // ...while just before it the earlier stop is still in effect.
        assert_eq!(color_at(&s, 0.49), RED);

        let table = GradientTable::resolve(&s, 3).unwrap();
        assert_eq!(table.samples(), &[RED, BLUE, BLUE]);
    }

    #[test]
    fn duplicate_start_offset_uses_later_stop() {
        let s = stops(&[(0.0, RED), (0.0, GREEN), (1.0, BLUE)]);
        let table = GradientTable::resolve(&s, 1).unwrap();
        assert_eq!(table.samples(), &[GREEN]);
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn rejects_empty() {
        assert_eq!(validate_stops(&[]), Err(GradientIssue::Empty));
    }

    #[test]
    fn rejects_unsorted() {
        let s = stops(&[(0.0, RED), (0.7, GREEN), (0.4, GREEN), (1.0, BLUE)]);
        assert_eq!(validate_stops(&s), Err(GradientIssue::Unsorted { index: 2, offset: 0.4 }));
    }

    #[test]
    fn rejects_missing_endpoints() {
        let s = stops(&[(0.1, RED), (1.0, BLUE)]);
        assert_eq!(validate_stops(&s), Err(GradientIssue::MissingStart(0.1)));

        let s = stops(&[(0.0, RED), (0.9, BLUE)]);
        assert_eq!(validate_stops(&s), Err(GradientIssue::MissingEnd(0.9)));
    }

    #[test]
    fn rejects_non_finite() {
        let s = stops(&[(0.0, RED), (f32::NAN, GREEN), (1.0, BLUE)]);
        assert_eq!(validate_stops(&s), Err(GradientIssue::NonFinite { index: 1 }));
    }

    #[test]
    fn resolve_surfaces_invalid_gradient() {
        let err = GradientTable::resolve(&stops(&[(0.0, RED)]), 8).unwrap_err();
        assert_eq!(err, crate::error::BuildError::InvalidGradient(GradientIssue::MissingEnd(0.0)));
    }

    // ── helpers ───────────────────────────────────────────────────────────

    #[test]
    fn evenly_spaced_offsets() {
        let s = evenly_spaced(&[RED, GREEN, BLUE]);
        let offsets: Vec<f32> = s.iter().map(|s| s.t).collect();
        assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
        assert!(validate_stops(&evenly_spaced(&[RED])).is_ok());
        assert!(evenly_spaced(&[]).is_empty());
    }

    #[test]
    fn sample_reads_between_entries() {
        let s = stops(&[(0.0, Color::new(0.0, 0.0, 0.0, 1.0)), (1.0, Color::new(1.0, 0.0, 0.0, 1.0))]);
        let table = GradientTable::resolve(&s, 5).unwrap();
        assert_eq!(table.sample(0.0).r, 0.0);
        assert_eq!(table.sample(1.0).r, 1.0);
        assert!((table.sample(0.375).r - 0.375).abs() < 1e-6);
        assert_eq!(table.sample(2.0).r, 1.0);
        assert_eq!(table.sample(f32::NAN).r, 0.0);
    }
}
