// src/ffi.rs

//! Raw declarations for the parts of libcairo this crate binds.
//!
//! Linking is configured by `build.rs`. Everything here is a direct mirror
//! of `cairo.h`; the safe wrappers live in the sibling modules.

#![allow(non_camel_case_types)]

use libc::{c_char, c_double, c_int, c_uchar, c_uint, c_void};

#[repr(C)]
pub struct cairo_surface_t {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct cairo_t {
    _opaque: [u8; 0],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct cairo_matrix_t {
    pub xx: c_double,
    pub yx: c_double,
    pub xy: c_double,
    pub yy: c_double,
    pub x0: c_double,
    pub y0: c_double,
}

pub type cairo_status_t = c_uint;
pub type cairo_format_t = c_int;
pub type cairo_content_t = c_uint;
pub type cairo_surface_type_t = c_uint;

pub type cairo_read_func_t =
    unsafe extern "C" fn(closure: *mut c_void, data: *mut c_uchar, length: c_uint) -> cairo_status_t;

pub type cairo_write_func_t =
    unsafe extern "C" fn(closure: *mut c_void, data: *const c_uchar, length: c_uint) -> cairo_status_t;

// cairo_status_t (values as of cairo 1.18)
pub const CAIRO_STATUS_SUCCESS: cairo_status_t = 0;
pub const CAIRO_STATUS_NO_MEMORY: cairo_status_t = 1;
pub const CAIRO_STATUS_INVALID_MATRIX: cairo_status_t = 5;
pub const CAIRO_STATUS_NULL_POINTER: cairo_status_t = 7;
pub const CAIRO_STATUS_INVALID_STRING: cairo_status_t = 8;
pub const CAIRO_STATUS_READ_ERROR: cairo_status_t = 10;
pub const CAIRO_STATUS_WRITE_ERROR: cairo_status_t = 11;
pub const CAIRO_STATUS_SURFACE_FINISHED: cairo_status_t = 12;
pub const CAIRO_STATUS_SURFACE_TYPE_MISMATCH: cairo_status_t = 13;
pub const CAIRO_STATUS_INVALID_FORMAT: cairo_status_t = 16;
pub const CAIRO_STATUS_FILE_NOT_FOUND: cairo_status_t = 18;
pub const CAIRO_STATUS_INVALID_STRIDE: cairo_status_t = 24;
pub const CAIRO_STATUS_INVALID_SIZE: cairo_status_t = 32;
pub const CAIRO_STATUS_PNG_ERROR: cairo_status_t = 39;
pub const CAIRO_STATUS_LAST_STATUS: cairo_status_t = 45;

// cairo_format_t
pub const CAIRO_FORMAT_INVALID: cairo_format_t = -1;
pub const CAIRO_FORMAT_ARGB32: cairo_format_t = 0;
pub const CAIRO_FORMAT_RGB24: cairo_format_t = 1;
pub const CAIRO_FORMAT_A8: cairo_format_t = 2;
pub const CAIRO_FORMAT_A1: cairo_format_t = 3;
pub const CAIRO_FORMAT_RGB16_565: cairo_format_t = 4;
pub const CAIRO_FORMAT_RGB30: cairo_format_t = 5;
pub const CAIRO_FORMAT_RGB96F: cairo_format_t = 6;
pub const CAIRO_FORMAT_RGBA128F: cairo_format_t = 7;

// cairo_content_t
pub const CAIRO_CONTENT_COLOR: cairo_content_t = 0x1000;
pub const CAIRO_CONTENT_ALPHA: cairo_content_t = 0x2000;
pub const CAIRO_CONTENT_COLOR_ALPHA: cairo_content_t = 0x3000;

// cairo_surface_type_t
pub const CAIRO_SURFACE_TYPE_IMAGE: cairo_surface_type_t = 0;
pub const CAIRO_SURFACE_TYPE_PDF: cairo_surface_type_t = 1;
pub const CAIRO_SURFACE_TYPE_PS: cairo_surface_type_t = 2;
pub const CAIRO_SURFACE_TYPE_XLIB: cairo_surface_type_t = 3;
pub const CAIRO_SURFACE_TYPE_XCB: cairo_surface_type_t = 4;
pub const CAIRO_SURFACE_TYPE_GLITZ: cairo_surface_type_t = 5;
pub const CAIRO_SURFACE_TYPE_QUARTZ: cairo_surface_type_t = 6;
pub const CAIRO_SURFACE_TYPE_WIN32: cairo_surface_type_t = 7;
pub const CAIRO_SURFACE_TYPE_BEOS: cairo_surface_type_t = 8;
pub const CAIRO_SURFACE_TYPE_DIRECTFB: cairo_surface_type_t = 9;
pub const CAIRO_SURFACE_TYPE_SVG: cairo_surface_type_t = 10;
pub const CAIRO_SURFACE_TYPE_OS2: cairo_surface_type_t = 11;
pub const CAIRO_SURFACE_TYPE_WIN32_PRINTING: cairo_surface_type_t = 12;
pub const CAIRO_SURFACE_TYPE_QUARTZ_IMAGE: cairo_surface_type_t = 13;
pub const CAIRO_SURFACE_TYPE_SCRIPT: cairo_surface_type_t = 14;
pub const CAIRO_SURFACE_TYPE_QT: cairo_surface_type_t = 15;
pub const CAIRO_SURFACE_TYPE_RECORDING: cairo_surface_type_t = 16;
pub const CAIRO_SURFACE_TYPE_VG: cairo_surface_type_t = 17;
pub const CAIRO_SURFACE_TYPE_GL: cairo_surface_type_t = 18;
pub const CAIRO_SURFACE_TYPE_DRM: cairo_surface_type_t = 19;
pub const CAIRO_SURFACE_TYPE_TEE: cairo_surface_type_t = 20;
pub const CAIRO_SURFACE_TYPE_XML: cairo_surface_type_t = 21;
pub const CAIRO_SURFACE_TYPE_SKIA: cairo_surface_type_t = 22;
pub const CAIRO_SURFACE_TYPE_SUBSURFACE: cairo_surface_type_t = 23;
pub const CAIRO_SURFACE_TYPE_COGL: cairo_surface_type_t = 24;

extern "C" {
    pub fn cairo_status_to_string(status: cairo_status_t) -> *const c_char;
    pub fn cairo_version_string() -> *const c_char;

    // Surfaces
    pub fn cairo_surface_reference(surface: *mut cairo_surface_t) -> *mut cairo_surface_t;
    pub fn cairo_surface_destroy(surface: *mut cairo_surface_t);
    pub fn cairo_surface_get_reference_count(surface: *mut cairo_surface_t) -> c_uint;
    pub fn cairo_surface_status(surface: *mut cairo_surface_t) -> cairo_status_t;
    pub fn cairo_surface_flush(surface: *mut cairo_surface_t);
    pub fn cairo_surface_mark_dirty(surface: *mut cairo_surface_t);
    pub fn cairo_surface_finish(surface: *mut cairo_surface_t);
    pub fn cairo_surface_get_type(surface: *mut cairo_surface_t) -> cairo_surface_type_t;
    pub fn cairo_surface_get_content(surface: *mut cairo_surface_t) -> cairo_content_t;

    // Image surfaces
    pub fn cairo_format_stride_for_width(format: cairo_format_t, width: c_int) -> c_int;
    pub fn cairo_image_surface_create(
        format: cairo_format_t,
        width: c_int,
        height: c_int,
    ) -> *mut cairo_surface_t;
    pub fn cairo_image_surface_get_data(surface: *mut cairo_surface_t) -> *mut c_uchar;
    pub fn cairo_image_surface_get_format(surface: *mut cairo_surface_t) -> cairo_format_t;
    pub fn cairo_image_surface_get_width(surface: *mut cairo_surface_t) -> c_int;
    pub fn cairo_image_surface_get_height(surface: *mut cairo_surface_t) -> c_int;
    pub fn cairo_image_surface_get_stride(surface: *mut cairo_surface_t) -> c_int;

    // PNG
    pub fn cairo_surface_write_to_png(
        surface: *mut cairo_surface_t,
        filename: *const c_char,
    ) -> cairo_status_t;
    pub fn cairo_surface_write_to_png_stream(
        surface: *mut cairo_surface_t,
        write_func: cairo_write_func_t,
        closure: *mut c_void,
    ) -> cairo_status_t;
    pub fn cairo_image_surface_create_from_png(filename: *const c_char) -> *mut cairo_surface_t;
    pub fn cairo_image_surface_create_from_png_stream(
        read_func: cairo_read_func_t,
        closure: *mut c_void,
    ) -> *mut cairo_surface_t;

    // Drawing contexts, used to convert between pixel formats
    pub fn cairo_create(target: *mut cairo_surface_t) -> *mut cairo_t;
    pub fn cairo_destroy(cr: *mut cairo_t);
    pub fn cairo_status(cr: *mut cairo_t) -> cairo_status_t;
    pub fn cairo_set_source_surface(
        cr: *mut cairo_t,
        surface: *mut cairo_surface_t,
        x: c_double,
        y: c_double,
    );
    pub fn cairo_paint(cr: *mut cairo_t);

    // Matrices
    pub fn cairo_matrix_init(
        matrix: *mut cairo_matrix_t,
        xx: c_double,
        yx: c_double,
        xy: c_double,
        yy: c_double,
        x0: c_double,
        y0: c_double,
    );
    pub fn cairo_matrix_init_identity(matrix: *mut cairo_matrix_t);
    pub fn cairo_matrix_init_translate(matrix: *mut cairo_matrix_t, tx: c_double, ty: c_double);
    pub fn cairo_matrix_init_scale(matrix: *mut cairo_matrix_t, sx: c_double, sy: c_double);
    pub fn cairo_matrix_init_rotate(matrix: *mut cairo_matrix_t, radians: c_double);
    pub fn cairo_matrix_translate(matrix: *mut cairo_matrix_t, tx: c_double, ty: c_double);
    pub fn cairo_matrix_scale(matrix: *mut cairo_matrix_t, sx: c_double, sy: c_double);
    pub fn cairo_matrix_rotate(matrix: *mut cairo_matrix_t, radians: c_double);
    pub fn cairo_matrix_invert(matrix: *mut cairo_matrix_t) -> cairo_status_t;
    pub fn cairo_matrix_multiply(
        result: *mut cairo_matrix_t,
        a: *const cairo_matrix_t,
        b: *const cairo_matrix_t,
    );
    pub fn cairo_matrix_transform_distance(
        matrix: *const cairo_matrix_t,
        dx: *mut c_double,
        dy: *mut c_double,
    );
    pub fn cairo_matrix_transform_point(
        matrix: *const cairo_matrix_t,
        x: *mut c_double,
        y: *mut c_double,
    );
}
