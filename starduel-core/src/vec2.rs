//! Planar vector math for the arena.
//!
//! Angles are signed degrees throughout, matching the turn-decision
//! convention of the brains: positive means counterclockwise (to the
//! left of the reference direction).

use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit heading for a rotation angle in degrees (0° points along +x).
    pub fn from_angle_deg(deg: f32) -> Self {
        let (sin, cos) = deg.to_radians().sin_cos();
        Self { x: cos, y: sin }
    }

    #[inline]
    pub fn magnitude_sq(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn magnitude(self) -> f32 {
        self.magnitude_sq().sqrt()
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// z component of the 3D cross product; positive when `other` is
    /// counterclockwise of `self`.
    #[inline]
    pub fn cross(self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Signed angle in degrees from `reference`'s direction to `self`'s,
    /// in `(-180, 180]`. Positive when `self` is counterclockwise (left)
    /// of `reference`. Either vector being zero yields 0.
    pub fn angle_to_deg(self, reference: Vec2) -> f32 {
        let raw = reference.cross(self).atan2(reference.dot(self)).to_degrees();
        // atan2 returns [-180, 180]; fold the negative seam onto +180.
        if raw <= -180.0 {
            raw + 360.0
        } else {
            raw
        }
    }

    /// Normalize to the given length. The zero vector stays zero rather
    /// than producing NaNs.
    pub fn with_magnitude(self, m: f32) -> Vec2 {
        let len = self.magnitude();
        if len <= f32::EPSILON {
            return Vec2::ZERO;
        }
        self * (m / len)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}
