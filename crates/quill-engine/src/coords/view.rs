use super::{Vec2, Viewport};

/// Fraction of clip space the fitted content occupies (leaves a 5% border on each side).
pub const NDC_MARGIN: f32 = 0.9;

/// Axis-aligned affine map from path-authoring space into render space.
///
/// `apply(p) = p * scale + offset` (component-wise).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewTransform {
    pub scale: Vec2,
    pub offset: Vec2,
}

impl ViewTransform {
    #[inline]
    pub const fn identity() -> Self {
        Self { scale: Vec2::new(1.0, 1.0), offset: Vec2::zero() }
    }

    #[inline]
    pub const fn new(scale: Vec2, offset: Vec2) -> Self {
        Self { scale, offset }
    }

    /// Fits a view box (top-left origin, +Y down) of size `view_box`, magnified by
    /// `content_scale`, centered inside `viewport`, and maps the result to clip
    /// space (+Y up) shrunk by [`NDC_MARGIN`].
    ///
    /// Degenerate viewports are treated as 1x1.
    pub fn fit(view_box: Vec2, viewport: Viewport, content_scale: f32) -> Self {
        let vp = viewport.size();
        let s = if content_scale.is_finite() && content_scale > 0.0 { content_scale } else { 1.0 };

        let shift = Vec2::new(
            (vp.x - view_box.x * s).abs() / 2.0 / vp.x,
            (vp.y - view_box.y * s).abs() / 2.0 / vp.y,
        );

        Self {
            scale: Vec2::new(2.0 * NDC_MARGIN * s / vp.x, -2.0 * NDC_MARGIN * s / vp.y),
            offset: Vec2::new(
                NDC_MARGIN * (2.0 * shift.x - 1.0),
                NDC_MARGIN * (1.0 - 2.0 * shift.y),
            ),
        }
    }

    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        p.scale(self.scale) + self.offset
    }

    /// Maps a stroke width into render space using the horizontal factor.
    ///
    /// After [`fit`](Self::fit) the result is in clip-space x units, so a width
    /// equal to the viewport width maps to `2 * NDC_MARGIN`.
    #[inline]
    pub fn apply_length(&self, len: f32) -> f32 {
        len * self.scale.x.abs()
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
    }

    #[test]
    fn identity_is_noop() {
        let t = ViewTransform::identity();
        assert_eq!(t.apply(Vec2::new(3.0, -4.0)), Vec2::new(3.0, -4.0));
        assert_eq!(t.apply_length(2.0), 2.0);
    }

    #[test]
    fn fit_maps_corners_to_margin() {
        // View box exactly fills the viewport.
        let t = ViewTransform::fit(Vec2::new(200.0, 100.0), Viewport::new(200.0, 100.0), 1.0);
        assert!(close(t.apply(Vec2::new(0.0, 0.0)), Vec2::new(-0.9, 0.9)));
        assert!(close(t.apply(Vec2::new(200.0, 100.0)), Vec2::new(0.9, -0.9)));
        assert!(close(t.apply(Vec2::new(100.0, 50.0)), Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn fit_centers_smaller_content() {
        let t = ViewTransform::fit(Vec2::new(100.0, 100.0), Viewport::new(200.0, 100.0), 1.0);
        // Center of the view box lands on the center of clip space.
        assert!(close(t.apply(Vec2::new(50.0, 50.0)), Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn fit_scales_line_width_horizontally() {
        let t = ViewTransform::fit(Vec2::new(100.0, 100.0), Viewport::new(200.0, 100.0), 2.0);
        assert!((t.apply_length(10.0) - 10.0 * 1.8 * 2.0 / 200.0).abs() < 1e-6);
    }

    #[test]
    fn viewport_wide_stroke_spans_fitted_clip_width() {
        let t = ViewTransform::fit(Vec2::new(640.0, 360.0), Viewport::new(640.0, 360.0), 1.0);
        assert!((t.apply_length(640.0) - 2.0 * NDC_MARGIN).abs() < 1e-5);
    }

    #[test]
    fn fit_tolerates_zero_viewport() {
        let t = ViewTransform::fit(Vec2::new(10.0, 10.0), Viewport::new(0.0, 0.0), 1.0);
        assert!(t.scale.is_finite() && t.offset.is_finite());
    }
}
