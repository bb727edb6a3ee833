//! A small 2D vector type for geometry and physics code.
//!
//! [`Vector2`] is a plain `Copy` pair of `f32` components with the usual
//! operators, plus a handful of in-place mutators. The free helpers in
//! [`library`] cover dot products, perpendiculars, reflection and random
//! directions.
//!
//! Two operations clamp instead of faulting:
//!
//! * dividing by a vector with a zero component (or by a zero scalar) yields
//!   [`Vector2::ZERO`];
//! * normalizing a vector shorter than [`NORMALIZE_EPSILON`] yields
//!   [`Vector2::UP`].

pub mod error;
pub mod library;
pub mod vector;

pub use error::VectorError;
pub use vector::Vector2;

/// Lengths below this are treated as zero by [`Vector2::normalize`].
pub const NORMALIZE_EPSILON: f32 = 0.00001;
