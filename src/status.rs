// src/status.rs

//! Translation of libcairo status codes into Rust values.
//!
//! Cairo reports every failure through one integer space: zero is success,
//! and codes in `1..CAIRO_STATUS_LAST_STATUS` each name a specific error.
//! [`Status`] carries any raw code; [`CairoError`] only ever holds an
//! in-range error code.

use crate::ffi;
use std::ffi::CStr;
use std::fmt;
use thiserror::Error;

/// A raw cairo status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status(ffi::cairo_status_t);

impl Status {
    pub const SUCCESS: Status = Status(ffi::CAIRO_STATUS_SUCCESS);
    pub const NO_MEMORY: Status = Status(ffi::CAIRO_STATUS_NO_MEMORY);
    pub const INVALID_MATRIX: Status = Status(ffi::CAIRO_STATUS_INVALID_MATRIX);
    pub const NULL_POINTER: Status = Status(ffi::CAIRO_STATUS_NULL_POINTER);
    pub const INVALID_STRING: Status = Status(ffi::CAIRO_STATUS_INVALID_STRING);
    pub const READ_ERROR: Status = Status(ffi::CAIRO_STATUS_READ_ERROR);
    pub const WRITE_ERROR: Status = Status(ffi::CAIRO_STATUS_WRITE_ERROR);
    pub const SURFACE_FINISHED: Status = Status(ffi::CAIRO_STATUS_SURFACE_FINISHED);
    pub const SURFACE_TYPE_MISMATCH: Status = Status(ffi::CAIRO_STATUS_SURFACE_TYPE_MISMATCH);
    pub const INVALID_FORMAT: Status = Status(ffi::CAIRO_STATUS_INVALID_FORMAT);
    pub const FILE_NOT_FOUND: Status = Status(ffi::CAIRO_STATUS_FILE_NOT_FOUND);
    pub const INVALID_STRIDE: Status = Status(ffi::CAIRO_STATUS_INVALID_STRIDE);
    pub const INVALID_SIZE: Status = Status(ffi::CAIRO_STATUS_INVALID_SIZE);
    pub const PNG_ERROR: Status = Status(ffi::CAIRO_STATUS_PNG_ERROR);

    pub const fn from_raw(raw: ffi::cairo_status_t) -> Self {
        Status(raw)
    }

    pub const fn raw(self) -> ffi::cairo_status_t {
        self.0
    }

    pub const fn is_success(self) -> bool {
        self.0 == ffi::CAIRO_STATUS_SUCCESS
    }

    /// Returns the structured error for this code, or `None` for success and
    /// for codes outside the defined error range.
    pub fn to_error(self) -> Option<CairoError> {
        CairoError::from_raw(self.0)
    }

    /// `Ok(())` unless this code is an in-range error.
    pub fn into_result(self) -> Result<(), CairoError> {
        match self.to_error() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// The native human-readable description of this code.
    pub fn description(self) -> &'static str {
        // SAFETY: cairo_status_to_string returns a pointer to a static,
        // NUL-terminated string for every input, including unknown codes.
        unsafe {
            let ptr = ffi::cairo_status_to_string(self.0);
            if ptr.is_null() {
                return "<unknown error status>";
            }
            CStr::from_ptr(ptr).to_str().unwrap_or("<invalid status string>")
        }
    }
}

impl From<ffi::cairo_status_t> for Status {
    fn from(raw: ffi::cairo_status_t) -> Self {
        Status(raw)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// An error status reported by libcairo.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{description} (cairo status {code})")]
pub struct CairoError {
    code: ffi::cairo_status_t,
    description: &'static str,
}

impl CairoError {
    /// Builds an error from a raw code if it lies in `1..CAIRO_STATUS_LAST_STATUS`.
    pub fn from_raw(code: ffi::cairo_status_t) -> Option<Self> {
        if code == ffi::CAIRO_STATUS_SUCCESS || code >= ffi::CAIRO_STATUS_LAST_STATUS {
            return None;
        }
        Some(CairoError {
            code,
            description: Status(code).description(),
        })
    }

    pub fn code(&self) -> ffi::cairo_status_t {
        self.code
    }

    pub fn status(&self) -> Status {
        Status(self.code)
    }

    pub fn description(&self) -> &'static str {
        self.description
    }
}

macro_rules! error_ctor {
    ($($name:ident => $status:ident),* $(,)?) => {
        impl CairoError {
            $(
                pub(crate) fn $name() -> Self {
                    CairoError {
                        code: Status::$status.0,
                        description: Status::$status.description(),
                    }
                }
            )*
        }
    };
}

error_ctor! {
    read_error => READ_ERROR,
    invalid_stride => INVALID_STRIDE,
    invalid_size => INVALID_SIZE,
    surface_type_mismatch => SURFACE_TYPE_MISMATCH,
    null_pointer => NULL_POINTER,
}
