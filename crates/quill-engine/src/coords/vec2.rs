use core::ops::{Add, Div, Mul, Sub};

/// 2D point or vector.
///
/// Used for both user (view-box) space and render space; the two are only
/// distinguished by which side of a [`ViewTransform`](super::ViewTransform) a value sits on.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn dot(self, rhs: Vec2) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    #[inline]
    pub fn distance(self, rhs: Vec2) -> f32 {
        (self - rhs).length()
    }

    /// Linear interpolation; `t = 0` yields `self`, `t = 1` yields `rhs`.
    #[inline]
    pub fn lerp(self, rhs: Vec2, t: f32) -> Vec2 {
        self + (rhs - self) * t
    }

    /// Component-wise product.
    #[inline]
    pub fn scale(self, s: Vec2) -> Vec2 {
        Vec2::new(self.x * s.x, self.y * s.y)
    }

    /// Unsigned angle in radians between two non-zero vectors, in `[0, π]`.
    ///
    /// Returns `0.0` if either vector has zero length.
    pub fn angle_between(self, rhs: Vec2) -> f32 {
        let len = self.length() * rhs.length();
        if len <= 0.0 {
            return 0.0;
        }
        (self.dot(rhs) / len).clamp(-1.0, 1.0).acos()
    }

    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}
