// src/matrix.rs

//! Affine transformations backed by `cairo_matrix_t`.
//!
//! A matrix maps a point `(x, y)` to
//! `(xx * x + xy * y + x0, yx * x + yy * y + y0)`. All arithmetic is done by
//! libcairo; this type only owns the six coefficients.

use crate::ffi;
use crate::status::{CairoError, Status};
use std::ops::Mul;

#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Matrix(ffi::cairo_matrix_t);

macro_rules! coefficient {
    ($($get:ident, $set:ident;)*) => {
        $(
            #[inline]
            pub fn $get(&self) -> f64 {
                self.0.$get
            }

            #[inline]
            pub fn $set(&mut self, value: f64) {
                self.0.$get = value;
            }
        )*
    };
}

impl Matrix {
    const ZERO: ffi::cairo_matrix_t = ffi::cairo_matrix_t {
        xx: 0.0,
        yx: 0.0,
        xy: 0.0,
        yy: 0.0,
        x0: 0.0,
        y0: 0.0,
    };

    /// Builds a matrix from its six coefficients.
    pub fn new(xx: f64, yx: f64, xy: f64, yy: f64, x0: f64, y0: f64) -> Self {
        let mut raw = Self::ZERO;
        // SAFETY: `raw` is a valid, writable cairo_matrix_t.
        unsafe { ffi::cairo_matrix_init(&mut raw, xx, yx, xy, yy, x0, y0) };
        Matrix(raw)
    }

    pub fn identity() -> Self {
        let mut raw = Self::ZERO;
        unsafe { ffi::cairo_matrix_init_identity(&mut raw) };
        Matrix(raw)
    }

    pub fn from_scale(sx: f64, sy: f64) -> Self {
        let mut raw = Self::ZERO;
        unsafe { ffi::cairo_matrix_init_scale(&mut raw, sx, sy) };
        Matrix(raw)
    }

    pub fn from_rotation(radians: f64) -> Self {
        let mut raw = Self::ZERO;
        unsafe { ffi::cairo_matrix_init_rotate(&mut raw, radians) };
        Matrix(raw)
    }

    pub fn from_translation(tx: f64, ty: f64) -> Self {
        let mut raw = Self::ZERO;
        unsafe { ffi::cairo_matrix_init_translate(&mut raw, tx, ty) };
        Matrix(raw)
    }

    coefficient! {
        xx, set_xx;
        yx, set_yx;
        xy, set_xy;
        yy, set_yy;
        x0, set_x0;
        y0, set_y0;
    }

    /// Applies a rotation by `radians`: coordinates are rotated first, then
    /// the existing transformation is applied.
    pub fn rotate(&mut self, radians: f64) {
        unsafe { ffi::cairo_matrix_rotate(&mut self.0, radians) };
    }

    /// Applies a scale: coordinates are scaled first, then the existing
    /// transformation is applied.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        unsafe { ffi::cairo_matrix_scale(&mut self.0, sx, sy) };
    }

    /// Applies a translation by `(tx, ty)`: coordinates are translated first,
    /// then the existing transformation is applied.
    pub fn translate(&mut self, tx: f64, ty: f64) {
        unsafe { ffi::cairo_matrix_translate(&mut self.0, tx, ty) };
    }

    /// Replaces the matrix with its inverse.
    ///
    /// A degenerate matrix has no inverse: `INVALID_MATRIX` is returned and
    /// the coefficients should not be relied upon. Use [`Matrix::inverted`]
    /// to keep the original.
    pub fn invert(&mut self) -> Result<(), CairoError> {
        let status = unsafe { ffi::cairo_matrix_invert(&mut self.0) };
        Status::from_raw(status).into_result()
    }

    /// Returns the inverse, leaving `self` unchanged.
    pub fn inverted(&self) -> Result<Matrix, CairoError> {
        let mut copy = *self;
        copy.invert()?;
        Ok(copy)
    }

    /// The transformation that applies `a` first, then `b`.
    pub fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
        let mut raw = Self::ZERO;
        // SAFETY: all three pointers are valid for the call.
        unsafe { ffi::cairo_matrix_multiply(&mut raw, &a.0, &b.0) };
        Matrix(raw)
    }

    /// Transforms a point, including the translation component.
    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        let (mut x, mut y) = (x, y);
        unsafe { ffi::cairo_matrix_transform_point(&self.0, &mut x, &mut y) };
        (x, y)
    }

    /// Transforms a distance vector; the translation component is ignored.
    pub fn transform_distance(&self, dx: f64, dy: f64) -> (f64, f64) {
        let (mut dx, mut dy) = (dx, dy);
        unsafe { ffi::cairo_matrix_transform_distance(&self.0, &mut dx, &mut dy) };
        (dx, dy)
    }

    pub fn as_raw(&self) -> &ffi::cairo_matrix_t {
        &self.0
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix::identity()
    }
}

impl From<ffi::cairo_matrix_t> for Matrix {
    fn from(raw: ffi::cairo_matrix_t) -> Self {
        Matrix(raw)
    }
}

/// `a * b` applies `a` first, then `b`.
impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        Matrix::multiply(&self, &rhs)
    }
}

#[cfg(test)]
mod tests;
