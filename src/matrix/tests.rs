// src/matrix/tests.rs

use super::*;
use std::f64::consts::FRAC_PI_2;
use test_log::test;

const EPSILON: f64 = 1e-9;

fn assert_point_eq(actual: (f64, f64), expected: (f64, f64)) {
    assert!(
        (actual.0 - expected.0).abs() < EPSILON && (actual.1 - expected.1).abs() < EPSILON,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

#[test]
fn identity_leaves_points_unchanged() {
    let m = Matrix::identity();
    assert_eq!(m, Matrix::default());
    assert_point_eq(m.transform_point(3.5, -2.0), (3.5, -2.0));
}

#[test]
fn new_stores_coefficients_in_cairo_order() {
    let m = Matrix::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
    assert_eq!(
        (m.xx(), m.yx(), m.xy(), m.yy(), m.x0(), m.y0()),
        (1.0, 2.0, 3.0, 4.0, 5.0, 6.0)
    );
    // x' = xx*x + xy*y + x0, y' = yx*x + yy*y + y0
    assert_point_eq(m.transform_point(1.0, 1.0), (9.0, 12.0));
}

#[test]
fn setters_change_single_coefficients() {
    let mut m = Matrix::identity();
    m.set_x0(10.0);
    m.set_yy(2.0);
    assert_point_eq(m.transform_point(1.0, 1.0), (11.0, 2.0));
}

#[test]
fn rotation_quarter_turn() {
    let m = Matrix::from_rotation(FRAC_PI_2);
    assert_point_eq(m.transform_point(1.0, 0.0), (0.0, 1.0));

    let mut r = Matrix::identity();
    r.rotate(FRAC_PI_2);
    assert_point_eq(r.transform_point(0.0, 1.0), (-1.0, 0.0));
}

#[test]
fn scale_and_translate_apply_before_existing_transform() {
    let mut m = Matrix::from_translation(10.0, 20.0);
    m.scale(2.0, 3.0);
    // Scale first, then translate.
    assert_point_eq(m.transform_point(1.0, 1.0), (12.0, 23.0));

    let mut t = Matrix::from_scale(2.0, 2.0);
    t.translate(1.0, 1.0);
    // Translate first, then scale.
    assert_point_eq(t.transform_point(0.0, 0.0), (2.0, 2.0));
}

#[test]
fn distance_ignores_translation() {
    let m = Matrix::new(2.0, 0.0, 0.0, 2.0, 100.0, 100.0);
    assert_point_eq(m.transform_distance(1.0, 1.0), (2.0, 2.0));
}

#[test]
fn invert_round_trips_points() {
    let m = Matrix::new(2.0, 0.5, -1.0, 3.0, 7.0, -4.0);
    let inverse = m.inverted().expect("matrix is invertible");
    let p = m.transform_point(1.25, -3.0);
    assert_point_eq(inverse.transform_point(p.0, p.1), (1.25, -3.0));
}

#[test]
fn degenerate_matrix_fails_to_invert() {
    let m = Matrix::from_scale(0.0, 1.0);
    let err = m.inverted().expect_err("a zero scale has no inverse");
    assert_eq!(err.status(), Status::INVALID_MATRIX);
}

#[test]
fn multiply_applies_left_operand_first() {
    let scale = Matrix::from_scale(2.0, 2.0);
    let shift = Matrix::from_translation(1.0, 0.0);

    // scale then shift: (1,1) -> (2,2) -> (3,2)
    assert_point_eq((scale * shift).transform_point(1.0, 1.0), (3.0, 2.0));
    // shift then scale: (1,1) -> (2,1) -> (4,2)
    assert_point_eq(Matrix::multiply(&shift, &scale).transform_point(1.0, 1.0), (4.0, 2.0));
}
