//! Free functions over [`Vector2`].

use crate::Vector2;
use rand::Rng;

pub fn dot(vec1: Vector2, vec2: Vector2) -> f32 {
    vec1.x * vec2.x + vec1.y * vec2.y
}

/// Angle in radians between two **unit** vectors, as `acos(dot(vec1, vec2))`.
///
/// Nothing is normalized. If the inputs are not unit length the result is
/// wrong, and once the dot product leaves `[-1, 1]` it is NaN. Use
/// [`angle_between_normalized`] for arbitrary vectors.
pub fn angle_between(vec1: Vector2, vec2: Vector2) -> f32 {
    dot(vec1, vec2).acos()
}

/// Angle in radians between two vectors of any length.
///
/// Both inputs are normalized first, so a degenerate input is treated as
/// [`Vector2::UP`]. The dot product is clamped to `[-1, 1]` to absorb rounding.
pub fn angle_between_normalized(vec1: Vector2, vec2: Vector2) -> f32 {
    dot(vec1.normalized(), vec2.normalized()).clamp(-1.0, 1.0).acos()
}

/// Perpendicular, rotated +90 degrees.
pub fn right(vec: Vector2) -> Vector2 {
    Vector2::new(-vec.y, vec.x)
}

pub fn left(vec: Vector2) -> Vector2 {
    -right(vec)
}

/// Reflects `incident` about a surface with the given `normal`.
/// `normal` must be unit length; it is not checked.
pub fn reflect(incident: Vector2, normal: Vector2) -> Vector2 {
    incident - 2.0 * dot(normal, incident) * normal
}

/// Both components uniform in `[-1, 1)`, from the thread-local RNG.
pub fn random_vector() -> Vector2 {
    Vector2::new(rand::random_range(-1.0..1.0), rand::random_range(-1.0..1.0))
}

pub fn random_vector_with<R: Rng + ?Sized>(rng: &mut R) -> Vector2 {
    Vector2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0))
}

/// A random unit vector. Follows [`Vector2::normalize`], so the rare
/// near-zero draw comes back as [`Vector2::UP`].
pub fn random_direction() -> Vector2 {
    let mut vec = random_vector();
    vec.normalize();
    vec
}

pub fn random_direction_with<R: Rng + ?Sized>(rng: &mut R) -> Vector2 {
    let mut vec = random_vector_with(rng);
    vec.normalize();
    vec
}

pub fn vector_from_angle(angle: f32) -> Vector2 {
    Vector2::from_angle(angle)
}

pub fn copy(vec: Vector2) -> Vector2 {
    Vector2::new(vec.x, vec.y)
}
