// src/surface.rs

//! Owning wrappers around `cairo_surface_t` handles.
//!
//! A [`Surface`] holds one native reference. Cloning takes another
//! reference and dropping releases one, so the native object lives exactly
//! as long as its last owner, matching cairo's own retain/release rules.

mod image_surface;
mod jpeg;
mod png;
mod sniff;

pub use self::image_surface::{ImageSurface, SurfaceData};
pub use self::sniff::EncodedFormat;

use crate::error::{self, Error};
use crate::ffi;
use crate::format::{Content, SurfaceType};
use crate::status::{CairoError, Status};
use log::{trace, warn};
use std::ffi::CString;
use std::path::Path;
use std::ptr::NonNull;

#[derive(Debug)]
pub struct Surface {
    ptr: NonNull<ffi::cairo_surface_t>,
}

impl Surface {
    /// Takes ownership of a freshly created handle.
    ///
    /// If cairo put the handle into an error state (it never returns NULL,
    /// only "nil" surfaces carrying a status), the handle is destroyed here
    /// and the status is returned.
    ///
    /// # Safety
    ///
    /// `ptr` must be a surface pointer returned by a cairo constructor whose
    /// reference is being transferred to the new `Surface`.
    pub(crate) unsafe fn from_raw_full(ptr: *mut ffi::cairo_surface_t) -> Result<Surface, CairoError> {
        let ptr = NonNull::new(ptr).ok_or_else(CairoError::null_pointer)?;
        let status = Status::from_raw(ffi::cairo_surface_status(ptr.as_ptr()));
        if let Some(err) = status.to_error() {
            trace!("Destroying surface {:p} created in error state: {}", ptr, err);
            ffi::cairo_surface_destroy(ptr.as_ptr());
            return Err(err);
        }
        trace!("Took ownership of surface {:p}", ptr);
        Ok(Surface { ptr })
    }

    #[inline]
    pub fn as_raw(&self) -> *mut ffi::cairo_surface_t {
        self.ptr.as_ptr()
    }

    /// Does any pending drawing and restores temporary changes cairo made to
    /// the surface. Call before touching the surface's memory directly.
    pub fn flush(&self) {
        unsafe { ffi::cairo_surface_flush(self.as_raw()) };
    }

    /// Tells cairo the surface was drawn to by other means, so cached areas
    /// must be re-read. [`Surface::flush`] must have been called first.
    pub fn mark_dirty(&self) {
        unsafe { ffi::cairo_surface_mark_dirty(self.as_raw()) };
    }

    /// Finishes the surface and drops its references to external resources.
    /// Later drawing sets the `SURFACE_FINISHED` status.
    pub fn finish(&self) {
        unsafe { ffi::cairo_surface_finish(self.as_raw()) };
    }

    pub fn surface_type(&self) -> SurfaceType {
        SurfaceType::from(unsafe { ffi::cairo_surface_get_type(self.as_raw()) })
    }

    /// Whether the surface holds color, alpha, or both.
    pub fn content(&self) -> Content {
        let raw = unsafe { ffi::cairo_surface_get_content(self.as_raw()) };
        Content::from_raw(raw).unwrap_or_else(|| {
            warn!("Unknown cairo content value {:#x}, assuming color+alpha", raw);
            Content::ColorAlpha
        })
    }

    /// Whether an error has previously occurred on this surface.
    pub fn status(&self) -> Status {
        Status::from_raw(unsafe { ffi::cairo_surface_status(self.as_raw()) })
    }

    /// Number of native references currently held, including this one.
    pub fn reference_count(&self) -> u32 {
        unsafe { ffi::cairo_surface_get_reference_count(self.as_raw()) }
    }
}

impl Clone for Surface {
    fn clone(&self) -> Self {
        // SAFETY: self.ptr is a live surface; referencing returns the same pointer.
        unsafe { ffi::cairo_surface_reference(self.as_raw()) };
        Surface { ptr: self.ptr }
    }
}

impl Drop for Surface {
    fn drop(&mut self) {
        trace!("Releasing surface {:p}", self.ptr);
        unsafe { ffi::cairo_surface_destroy(self.as_raw()) };
    }
}

/// Converts a filesystem path into the C string cairo's file APIs expect.
pub(crate) fn path_to_cstring(path: &Path) -> error::Result<CString> {
    #[cfg(unix)]
    let bytes = {
        use std::os::unix::ffi::OsStrExt;
        path.as_os_str().as_bytes()
    };
    #[cfg(not(unix))]
    let bytes = path
        .to_str()
        .ok_or_else(|| Error::InvalidPath(path.to_path_buf()))?
        .as_bytes();
    CString::new(bytes).map_err(|_| Error::InvalidPath(path.to_path_buf()))
}

#[cfg(test)]
mod tests;
