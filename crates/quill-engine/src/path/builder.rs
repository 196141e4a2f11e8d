use crate::coords::{Vec2, ViewTransform};

use super::CurveSegment;

/// Incrementally authored chain of cubic segments.
///
/// Each new segment starts where the previous one ended, so the result is one
/// continuous stroke that the fill animation can walk from start to end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BezierPath {
    segments: Vec<CurveSegment>,
    start: Option<Vec2>,
}

impl BezierPath {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps already authored segments.
    pub fn from_segments(segments: Vec<CurveSegment>) -> Self {
        let start = segments.first().map(|s| s.a);
        Self { segments, start }
    }

    /// Sets the start point of an empty path.
    ///
    /// On a non-empty path this appends a smooth connector from the current end
    /// to `point`: its first control point mirrors the previous segment's last
    /// one, its second sits halfway along the jump.
    pub fn move_to(&mut self, point: Vec2) {
        match self.segments.last() {
            Some(last) => {
                let connector = CurveSegment::new(
                    last.b,
                    point,
                    last.b * 2.0 - last.p2,
                    (last.b + point) / 2.0,
                );
                self.segments.push(connector);
            }
            None => self.start = Some(point),
        }
    }

    /// Appends a cubic segment from the current point to `to`.
    ///
    /// Ignored (with a warning) when there is no current point yet.
    pub fn curve_to(&mut self, p1: Vec2, p2: Vec2, to: Vec2) {
        let Some(from) = self.current_point() else {
            log::warn!("curve_to called before move_to; segment dropped");
            return;
        };
        self.segments.push(CurveSegment::new(from, to, p1, p2));
    }

    /// Appends a straight segment from the current point to `to`.
    pub fn line_to(&mut self, to: Vec2) {
        if let Some(from) = self.current_point() {
            self.curve_to(from, to, to);
        } else {
            log::warn!("line_to called before move_to; segment dropped");
        }
    }

    /// Makes the joint into the last segment smooth by mirroring the previous
    /// segment's second control point into the last segment's first one.
    ///
    /// No-op until the path has more than two segments, so the first joint of
    /// a path is never rewritten.
    pub fn normalize_last_connection(&mut self) {
        let n = self.segments.len();
        if n <= 2 {
            return;
        }
        let prev = self.segments[n - 2];
        self.segments[n - 1].p1 = prev.b * 2.0 - prev.p2;
    }

    /// End of the last segment, or the start point of an empty path.
    pub fn current_point(&self) -> Option<Vec2> {
        self.segments.last().map(|s| s.b).or(self.start)
    }

    #[inline]
    pub fn segments(&self) -> &[CurveSegment] {
        &self.segments
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn into_segments(self) -> Vec<CurveSegment> {
        self.segments
    }

    /// Segments mapped into render space.
    pub fn transformed(&self, xf: &ViewTransform) -> Vec<CurveSegment> {
        self.segments.iter().map(|s| s.transformed(xf)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn curve_to_chains_from_start() {
        let mut p = BezierPath::new();
        p.move_to(v(0.0, 0.0));
        p.curve_to(v(1.0, 1.0), v(2.0, 1.0), v(3.0, 0.0));
        p.curve_to(v(4.0, -1.0), v(5.0, -1.0), v(6.0, 0.0));

        assert_eq!(p.len(), 2);
        assert_eq!(p.segments()[0].a, v(0.0, 0.0));
        assert_eq!(p.segments()[1].a, v(3.0, 0.0));
        assert_eq!(p.current_point(), Some(v(6.0, 0.0)));
    }

    #[test]
    fn curve_to_without_start_is_dropped() {
        let mut p = BezierPath::new();
        p.curve_to(v(1.0, 1.0), v(2.0, 1.0), v(3.0, 0.0));
        assert!(p.is_empty());
    }

    #[test]
    fn move_to_after_segments_adds_connector() {
        let mut p = BezierPath::new();
        p.move_to(v(0.0, 0.0));
        p.curve_to(v(0.0, 0.0), v(8.0, 0.0), v(10.0, 0.0));
        p.move_to(v(10.0, 10.0));

        assert_eq!(p.len(), 2);
        let c = p.segments()[1];
        assert_eq!(c.a, v(10.0, 0.0));
        assert_eq!(c.b, v(10.0, 10.0));
        assert_eq!(c.p1, v(12.0, 0.0));
        assert_eq!(c.p2, v(10.0, 5.0));
    }

    #[test]
    fn normalize_mirrors_previous_control_point() {
        let mut p = BezierPath::new();
        p.move_to(v(0.0, 0.0));
        p.curve_to(v(1.0, 2.0), v(3.0, 2.0), v(4.0, 0.0));
        p.curve_to(v(9.0, 9.0), v(7.0, -2.0), v(8.0, 0.0));
        p.curve_to(v(0.0, 0.0), v(11.0, 3.0), v(12.0, 0.0));
        p.normalize_last_connection();
        assert_eq!(p.segments()[2].p1, v(9.0, 2.0));
    }

    #[test]
    fn normalize_needs_more_than_two_segments() {
        let mut p = BezierPath::new();
        p.move_to(v(0.0, 0.0));
        p.curve_to(v(1.0, 2.0), v(3.0, 2.0), v(4.0, 0.0));
        let before = p.clone();
        p.normalize_last_connection();
        assert_eq!(p, before);

        p.curve_to(v(9.0, 9.0), v(7.0, -2.0), v(8.0, 0.0));
        let before = p.clone();
        p.normalize_last_connection();
        assert_eq!(p, before);
    }

    #[test]
    fn line_to_places_controls_on_endpoints() {
        let mut p = BezierPath::new();
        p.move_to(v(0.0, 0.0));
        p.line_to(v(10.0, 0.0));
        assert_eq!(p.segments()[0], CurveSegment::line(v(0.0, 0.0), v(10.0, 0.0)));
    }
}
