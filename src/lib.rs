// src/lib.rs

//! Safe bindings to libcairo image surfaces.
//!
//! Image surfaces can be created empty or from raw pixels, encoded to and
//! decoded from PNG (by libcairo) and JPEG (by the `image` crate), and loaded
//! from files whose format is detected from their leading bytes. Native
//! status codes are translated into [`CairoError`].

pub mod config;
pub mod error;
pub mod ffi;
pub mod font;
pub mod format;
pub mod matrix;
pub mod status;
pub mod stream;
pub mod surface;

pub use crate::error::{Error, Result};
pub use crate::font::{FontConfig, FontMatch};
pub use crate::format::{Content, ImageFormat, SurfaceType};
pub use crate::matrix::Matrix;
pub use crate::status::{CairoError, Status};
pub use crate::stream::DataProvider;
pub use crate::surface::{EncodedFormat, ImageSurface, Surface, SurfaceData};

/// The version string of the linked libcairo, e.g. `"1.18.0"`.
pub fn cairo_version() -> &'static str {
    // SAFETY: cairo_version_string returns a static NUL-terminated string.
    unsafe {
        let ptr = ffi::cairo_version_string();
        if ptr.is_null() {
            return "unknown";
        }
        std::ffi::CStr::from_ptr(ptr).to_str().unwrap_or("unknown")
    }
}
