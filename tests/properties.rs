use approx::{assert_abs_diff_eq, assert_relative_eq};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::{FRAC_PI_2, TAU};
use vecmath2::Vector2;
use vecmath2::library::*;

const SAMPLES: usize = 500;

fn sample_vectors(seed: u64) -> Vec<Vector2> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..SAMPLES)
        .map(|_| Vector2::new(rng.random_range(-100.0..100.0), rng.random_range(-100.0..100.0)))
        .collect()
}

#[test]
fn addition_commutes() {
    let a = sample_vectors(1);
    let b = sample_vectors(2);
    for (a, b) in a.into_iter().zip(b) {
        assert_eq!(a + b, b + a);
    }
}

#[test]
fn subtract_self_and_double_negation() {
    for v in sample_vectors(3) {
        assert_eq!(v - v, Vector2::ZERO);
        assert_eq!(-(-v), v);
    }
}

#[test]
fn length_sqr_is_self_dot() {
    for v in sample_vectors(4) {
        assert_eq!(v.length_sqr(), dot(v, v));
    }
}

#[test]
fn right_is_perpendicular_and_left_opposes_it() {
    for v in sample_vectors(5) {
        assert_eq!(dot(right(v), v), 0.0);
        assert_eq!(left(v), -right(v));
    }
}

#[test]
fn copy_round_trips_without_sharing() {
    for v in sample_vectors(6) {
        let original = v;
        let mut c = copy(v);
        assert_eq!(c, v);
        c.rotate(1.0);
        c += 3.0;
        assert_eq!(v, original);
    }
}

#[test]
fn normalize_gives_unit_length_and_is_idempotent() {
    for v in sample_vectors(7) {
        let once = v.normalized();
        let twice = once.normalized();
        assert_relative_eq!(once.length(), 1.0, max_relative = 1e-5);
        assert_relative_eq!(twice.length(), 1.0, max_relative = 1e-5);
        assert_abs_diff_eq!(once.x, twice.x, epsilon = 1e-6);
        assert_abs_diff_eq!(once.y, twice.y, epsilon = 1e-6);
    }
}

#[test]
fn degenerate_normalize() {
    assert_eq!(Vector2::ZERO.length(), 0.0);
    let mut v = Vector2::new(0.0, 0.0);
    v.normalize();
    assert_eq!(v, Vector2::new(0.0, 1.0));
}

#[test]
fn division_clamp_quirk() {
    // (4, 4) / (2, 0) would be (2, inf) componentwise; the clamp zeroes both.
    assert_eq!(Vector2::new(4.0, 4.0) / Vector2::new(2.0, 0.0), Vector2::new(0.0, 0.0));
    assert_eq!(Vector2::new(4.0, 4.0) / 0.0, Vector2::new(0.0, 0.0));
}

#[test]
fn scale_to_length_sets_magnitude() {
    let mut v = Vector2::new(3.0, 4.0);
    v.scale_to_length(10.0);
    assert_relative_eq!(v.length(), 10.0, max_relative = 1e-6);
    let expected = Vector2::new(3.0, 4.0).normalized() * 10.0;
    assert_relative_eq!(v.x, expected.x);
    assert_relative_eq!(v.y, expected.y);

    for mut v in sample_vectors(8) {
        v.scale_to_length(2.5);
        assert_relative_eq!(v.length(), 2.5, max_relative = 1e-5);
    }
}

#[test]
fn rotation_identities() {
    for v in sample_vectors(9) {
        let mut zero = v;
        zero.rotate(0.0);
        assert_eq!(zero, v);

        let mut full = v;
        full.rotate(TAU);
        assert_abs_diff_eq!(full.x, v.x, epsilon = 1e-4);
        assert_abs_diff_eq!(full.y, v.y, epsilon = 1e-4);

        let mut turned = v;
        turned.rotate(1.3);
        assert_relative_eq!(turned.length(), v.length(), max_relative = 1e-5);
    }

    let mut v = Vector2::new(1.0, 0.0);
    v.rotate(FRAC_PI_2);
    assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(v.y, 1.0, epsilon = 1e-6);
}

#[test]
fn to_int_pair_truncates() {
    assert_eq!(Vector2::new(-1.5, 1.5).to_int_pair(), (-1, 1));
}
