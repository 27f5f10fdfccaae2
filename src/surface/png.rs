// src/surface/png.rs

//! PNG encode and decode, all done by libcairo (via libpng).

use super::{path_to_cstring, ImageSurface, Surface};
use crate::error::Result;
use crate::ffi;
use crate::status::Status;
use crate::stream::{self, DataProvider};
use log::debug;
use std::path::Path;

impl Surface {
    /// Writes the surface's contents to a PNG file.
    pub fn write_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let c_path = path_to_cstring(path)?;
        let status = unsafe { ffi::cairo_surface_write_to_png(self.as_raw(), c_path.as_ptr()) };
        Status::from_raw(status).into_result()?;
        debug!("Wrote PNG to {}", path.display());
        Ok(())
    }

    /// Encodes the surface's contents as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut provider = DataProvider::new();
        // SAFETY: the provider outlives the call and is not touched until it returns.
        let status = unsafe {
            ffi::cairo_surface_write_to_png_stream(
                self.as_raw(),
                stream::write_func,
                provider.as_closure(),
            )
        };
        Status::from_raw(status).into_result()?;
        let bytes = provider.into_inner();
        debug!("Encoded surface to {} PNG bytes", bytes.len());
        Ok(bytes)
    }
}

impl ImageSurface {
    /// Decodes PNG bytes into a new image surface.
    pub fn from_png(data: &[u8]) -> Result<ImageSurface> {
        let mut provider = DataProvider::from_bytes(data);
        // SAFETY: the provider outlives the call, and the returned surface
        // keeps no reference to it.
        let surface = unsafe {
            Surface::from_raw_full(ffi::cairo_image_surface_create_from_png_stream(
                stream::read_func,
                provider.as_closure(),
            ))?
        };
        debug!(
            "Decoded {} PNG bytes ({} consumed)",
            data.len(),
            provider.position()
        );
        Ok(ImageSurface::try_from(surface)?)
    }

    /// Loads a PNG file into a new image surface.
    pub fn from_png_file<P: AsRef<Path>>(path: P) -> Result<ImageSurface> {
        let path = path.as_ref();
        let c_path = path_to_cstring(path)?;
        let surface =
            unsafe { Surface::from_raw_full(ffi::cairo_image_surface_create_from_png(c_path.as_ptr()))? };
        debug!("Loaded PNG from {}", path.display());
        Ok(ImageSurface::try_from(surface)?)
    }
}
