//! Vector and rotation math for scene transforms
//!
//! Rotations follow the usual game-engine conventions: left-handed axes,
//! Euler angles in degrees applied Z first, then X, then Y.

use core::f32::consts::PI;
use core::ops::{Add, Mul, Neg, Sub};

use embassy_time::Duration;

use crate::transition::Interpolate;

const DEG_TO_RAD: f32 = PI / 180.0;

/// Dot product above which `slerp` falls back to `nlerp`
const SLERP_LINEAR_THRESHOLD: f32 = 0.9995;

/// Calculate progress (0.0-1.0) based on elapsed time and duration
///
/// Uses integer ticks, so exact ratios such as 5 s / 10 s give exact results.
/// A zero duration counts as already finished.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    let total = duration.as_ticks();
    let elapsed = elapsed.as_ticks();
    if total == 0 || elapsed >= total {
        return 1.0;
    }

    (elapsed as f64 / total as f64) as f32
}

/// Blend two floats
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Hermite smoothstep on the 0.0-1.0 range
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Three-component vector
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn length(self) -> f32 {
        libm::sqrtf(self.dot(self))
    }

    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Unit vector in the same direction, or zero for a zero vector
    #[must_use]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return Self::ZERO;
        }
        self * (1.0 / len)
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Interpolate for Vec3 {
    fn interpolate(&self, end: &Self, t: f32) -> Self {
        Self {
            x: lerp(self.x, end.x, t),
            y: lerp(self.y, end.y, t),
            z: lerp(self.z, end.z, t),
        }
    }
}

/// Unit quaternion rotation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `degrees` around `axis`
    pub fn from_axis_angle(axis: Vec3, degrees: f32) -> Self {
        let axis = axis.normalized();
        let half = degrees * DEG_TO_RAD * 0.5;
        let s = libm::sinf(half);
        Self::new(axis.x * s, axis.y * s, axis.z * s, libm::cosf(half))
    }

    /// Rotation from Euler angles in degrees, applied Z, X, then Y
    pub fn from_euler_degrees(x: f32, y: f32, z: f32) -> Self {
        let qx = Self::from_axis_angle(Vec3::RIGHT, x);
        let qy = Self::from_axis_angle(Vec3::UP, y);
        let qz = Self::from_axis_angle(Vec3::FORWARD, z);
        qy * qx * qz
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn length(self) -> f32 {
        libm::sqrtf(self.dot(self))
    }

    /// Unit-length copy, or identity for a degenerate quaternion
    #[must_use]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len == 0.0 || !len.is_finite() {
            return Self::IDENTITY;
        }
        let inv = 1.0 / len;
        Self::new(self.x * inv, self.y * inv, self.z * inv, self.w * inv)
    }

    /// Angle between two rotations in degrees
    pub fn angle_to(self, other: Self) -> f32 {
        let d = libm::fabsf(self.normalized().dot(other.normalized())).min(1.0);
        2.0 * libm::acosf(d) / DEG_TO_RAD
    }

    /// Rotate a vector
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let u = Vec3::new(self.x, self.y, self.z);
        let t = u.cross(v) * 2.0;
        v + t * self.w + u.cross(t)
    }

    /// Normalized linear interpolation along the shortest arc
    #[must_use]
    pub fn nlerp(self, end: Self, t: f32) -> Self {
        let end = if self.dot(end) < 0.0 { -end } else { end };
        Self::new(
            lerp(self.x, end.x, t),
            lerp(self.y, end.y, t),
            lerp(self.z, end.z, t),
            lerp(self.w, end.w, t),
        )
        .normalized()
    }

    /// Spherical interpolation along the shortest arc
    #[must_use]
    pub fn slerp(self, end: Self, t: f32) -> Self {
        let mut cos = self.dot(end);
        let end = if cos < 0.0 {
            cos = -cos;
            -end
        } else {
            end
        };
        if cos > SLERP_LINEAR_THRESHOLD {
            return self.nlerp(end, t);
        }

        let theta = libm::acosf(cos);
        let sin = libm::sinf(theta);
        let a = libm::sinf((1.0 - t) * theta) / sin;
        let b = libm::sinf(t * theta) / sin;
        Self::new(
            self.x * a + end.x * b,
            self.y * a + end.y * b,
            self.z * a + end.z * b,
            self.w * a + end.w * b,
        )
        .normalized()
    }
}

impl Mul for Quat {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl Neg for Quat {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Interpolate for Quat {
    fn interpolate(&self, end: &Self, t: f32) -> Self {
        self.nlerp(*end, t)
    }
}
