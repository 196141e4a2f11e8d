use super::Vec2;

/// Drawable size the rendered path is fitted into.
///
/// Units are whatever the caller's view box is scaled into (usually physical
/// pixels of the target surface).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Size as a vector, with each axis clamped to at least one unit.
    #[inline]
    pub fn size(self) -> Vec2 {
        let w = if self.width.is_finite() { self.width.max(1.0) } else { 1.0 };
        let h = if self.height.is_finite() { self.height.max(1.0) } else { 1.0 };
        Vec2::new(w, h)
    }
}
