use crate::NORMALIZE_EPSILON;
use crate::error::VectorError;
use std::fmt;

#[cfg(any(test, feature = "approx"))]
use approx::{AbsDiffEq, RelativeEq};

mod ops;

/// An ordered pair of `f32` components.
///
/// Operators always return a new vector. The named mutators (`normalize`,
/// `rotate`, `rotate_deg`, `set`, `set_xy`, `scale_to_length`) and the
/// compound-assignment operators change the receiver in place.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };
    /// Direction a degenerate vector takes when normalized.
    pub const UP: Vector2 = Vector2 { x: 0.0, y: 1.0 };

    /// Creates a vector. Nothing is validated; NaN and infinities pass through.
    pub const fn new(x: f32, y: f32) -> Vector2 {
        Vector2 { x, y }
    }

    pub const fn splat(v: f32) -> Vector2 {
        Vector2 { x: v, y: v }
    }

    /// Unit vector pointing `angle` radians counter-clockwise from +x.
    pub fn from_angle(angle: f32) -> Vector2 {
        Vector2::new(angle.cos(), angle.sin())
    }

    pub fn xy(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn set_xy(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Copies the components of `other` into `self`.
    pub fn set(&mut self, other: Vector2) {
        self.x = other.x;
        self.y = other.y;
    }

    pub fn dot(self, other: Vector2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Squared length. Cheaper than [`length`](Self::length) for comparisons.
    pub fn length_sqr(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn length(self) -> f32 {
        self.length_sqr().sqrt()
    }

    pub fn distance_sqr(self, other: Vector2) -> f32 {
        (self - other).length_sqr()
    }

    pub fn distance(self, other: Vector2) -> f32 {
        (self - other).length()
    }

    /// Rotates in place by `angle` radians.
    pub fn rotate(&mut self, angle: f32) {
        let (sn, cs) = angle.sin_cos();
        let x = self.x;
        self.x = cs * x - sn * self.y;
        self.y = sn * x + cs * self.y;
    }

    /// Rotates in place by `angle` degrees.
    pub fn rotate_deg(&mut self, angle: f32) {
        self.rotate(angle.to_radians());
    }

    /// Returns a copy rotated by `angle` radians.
    pub fn rotated(self, angle: f32) -> Vector2 {
        let mut vec = self;
        vec.rotate(angle);
        vec
    }

    /// Scales `self` to unit length in place.
    ///
    /// A vector shorter than [`NORMALIZE_EPSILON`] has no usable direction and
    /// becomes [`Vector2::UP`] instead.
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Returns the unit vector in the direction of `self`, leaving `self`
    /// untouched. Degenerate vectors give [`Vector2::UP`], as in
    /// [`normalize`](Self::normalize).
    pub fn normalized(self) -> Vector2 {
        let len = self.length();
        if len < NORMALIZE_EPSILON {
            log::trace!("normalizing degenerate vector {:?}, falling back to {:?}", self, Vector2::UP);
            return Vector2::UP;
        }
        Vector2::new(self.x / len, self.y / len)
    }

    /// Keeps the direction and sets the magnitude to `length`.
    ///
    /// A zero vector ends up as `(0, length)`. Negative lengths flip the
    /// direction; they are not rejected.
    pub fn scale_to_length(&mut self, length: f32) {
        self.normalize();
        *self *= length;
    }

    /// Truncates both components toward zero.
    pub fn to_int_pair(self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector<{}, {}>", self.x, self.y)
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Vector2 {
        Vector2::new(x, y)
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from([x, y]: [f32; 2]) -> Vector2 {
        Vector2::new(x, y)
    }
}

impl From<Vector2> for (f32, f32) {
    fn from(vec: Vector2) -> (f32, f32) {
        vec.xy()
    }
}

impl From<Vector2> for [f32; 2] {
    fn from(vec: Vector2) -> [f32; 2] {
        [vec.x, vec.y]
    }
}

impl TryFrom<&[f32]> for Vector2 {
    type Error = VectorError;

    fn try_from(slice: &[f32]) -> Result<Vector2, VectorError> {
        match slice {
            [x, y] => Ok(Vector2::new(*x, *y)),
            _ => Err(VectorError::SliceLength(slice.len())),
        }
    }
}

#[cfg(any(test, feature = "approx"))]
impl AbsDiffEq for Vector2 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Vector2, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl RelativeEq for Vector2 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Vector2, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}
