// src/surface/image_surface.rs

//! Image surfaces: cairo surfaces backed by a pixel buffer in memory.

use super::Surface;
use crate::ffi;
use crate::format::{ImageFormat, SurfaceType};
use crate::status::CairoError;
use log::{debug, warn};
use std::ops::Deref;
use std::ptr::NonNull;
use std::slice;

/// A surface that renders into a memory buffer allocated by cairo.
#[derive(Debug, Clone)]
pub struct ImageSurface(Surface);

impl ImageSurface {
    /// Creates a surface of the given format and size with every channel of
    /// every pixel set to 0.
    pub fn create(format: ImageFormat, width: u32, height: u32) -> Result<Self, CairoError> {
        let w = i32::try_from(width).map_err(|_| CairoError::invalid_size())?;
        let h = i32::try_from(height).map_err(|_| CairoError::invalid_size())?;
        // SAFETY: cairo_image_surface_create always returns a surface we own,
        // possibly in an error state, which from_raw_full checks.
        let surface = unsafe {
            Surface::from_raw_full(ffi::cairo_image_surface_create(format.to_raw(), w, h))?
        };
        debug!("Created {} image surface {}x{}", format, width, height);
        Ok(ImageSurface(surface))
    }

    /// Creates a surface holding a copy of `bytes`.
    ///
    /// `stride` must be what cairo expects for `width` pixels of `format`
    /// (see [`ImageFormat::stride_for_width`]) and `bytes` must hold at
    /// least `stride * height` bytes.
    pub fn from_pixels(
        bytes: &[u8],
        format: ImageFormat,
        width: u32,
        height: u32,
        stride: usize,
    ) -> Result<Self, CairoError> {
        if format.stride_for_width(width) != Some(stride) {
            return Err(CairoError::invalid_stride());
        }
        let len = stride
            .checked_mul(height as usize)
            .ok_or_else(CairoError::invalid_size)?;
        if bytes.len() < len {
            return Err(CairoError::invalid_size());
        }

        let mut surface = Self::create(format, width, height)?;
        if surface.stride() != stride {
            return Err(CairoError::invalid_stride());
        }
        if len > 0 {
            surface
                .with_data_mut(|pixels| pixels.copy_from_slice(&bytes[..len]))
                .ok_or_else(CairoError::null_pointer)?;
        }
        Ok(surface)
    }

    /// Whether a surface of type `surface_type` can be viewed as an image surface.
    pub fn is_compatible(surface_type: SurfaceType) -> bool {
        matches!(surface_type, SurfaceType::Image)
    }

    /// The pixel format, or `None` if the surface is not a valid image surface.
    pub fn format(&self) -> Option<ImageFormat> {
        ImageFormat::from_raw(unsafe { ffi::cairo_image_surface_get_format(self.as_raw()) })
    }

    pub fn width(&self) -> u32 {
        unsafe { ffi::cairo_image_surface_get_width(self.as_raw()) as u32 }
    }

    pub fn height(&self) -> u32 {
        unsafe { ffi::cairo_image_surface_get_height(self.as_raw()) as u32 }
    }

    /// Bytes per row, including padding.
    pub fn stride(&self) -> usize {
        unsafe { ffi::cairo_image_surface_get_stride(self.as_raw()) as usize }
    }

    fn data_len(&self) -> usize {
        self.stride() * self.height() as usize
    }

    /// Runs `f` over the pixel memory for direct inspection or modification.
    ///
    /// The surface is flushed before and marked dirty after. Returns `None`
    /// if the surface has no pixel memory (for example once finished), or if
    /// another handle shares the surface: a clone or a live [`SurfaceData`]
    /// view would otherwise alias the mutable slice.
    pub fn with_data_mut<R>(&mut self, f: impl FnOnce(&mut [u8]) -> R) -> Option<R> {
        let references = self.reference_count();
        if references != 1 {
            warn!(
                "Refusing mutable pixel access to surface {:p} with {} references",
                self.as_raw(),
                references
            );
            return None;
        }
        self.flush();
        let ptr = NonNull::new(unsafe { ffi::cairo_image_surface_get_data(self.as_raw()) })?;
        // SAFETY: cairo guarantees stride * height bytes at the data pointer
        // for as long as the surface is alive, and we hold it for the call.
        let pixels = unsafe { slice::from_raw_parts_mut(ptr.as_ptr(), self.data_len()) };
        let result = f(pixels);
        self.mark_dirty();
        Some(result)
    }

    /// A zero-copy view of the pixel memory.
    ///
    /// The view holds its own native reference, so the memory stays valid
    /// after this `ImageSurface` is dropped. Drawing to the surface while a
    /// view exists changes what the view sees.
    pub fn data(&self) -> Option<SurfaceData> {
        self.flush();
        let ptr = NonNull::new(unsafe { ffi::cairo_image_surface_get_data(self.as_raw()) })?;
        Some(SurfaceData {
            owner: self.0.clone(),
            ptr,
            len: self.data_len(),
        })
    }

    /// Copies the pixel memory out.
    pub fn to_vec(&self) -> Option<Vec<u8>> {
        self.data().map(|data| data.to_vec())
    }

    pub fn into_surface(self) -> Surface {
        self.0
    }
}

impl Deref for ImageSurface {
    type Target = Surface;

    fn deref(&self) -> &Surface {
        &self.0
    }
}

impl TryFrom<Surface> for ImageSurface {
    type Error = CairoError;

    fn try_from(surface: Surface) -> Result<Self, CairoError> {
        let surface_type = surface.surface_type();
        if ImageSurface::is_compatible(surface_type) {
            Ok(ImageSurface(surface))
        } else {
            warn!("Cannot view a {:?} surface as an image surface", surface_type);
            Err(CairoError::surface_type_mismatch())
        }
    }
}

impl From<ImageSurface> for Surface {
    fn from(image: ImageSurface) -> Surface {
        image.0
    }
}

/// Read-only pixel memory of an image surface, kept alive by its own
/// reference on the native surface.
#[derive(Debug)]
pub struct SurfaceData {
    owner: Surface,
    ptr: NonNull<u8>,
    len: usize,
}

impl SurfaceData {
    /// The surface this memory belongs to.
    pub fn surface(&self) -> &Surface {
        &self.owner
    }
}

impl Deref for SurfaceData {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        // SAFETY: `owner` keeps the native surface, and so its buffer, alive.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl AsRef<[u8]> for SurfaceData {
    fn as_ref(&self) -> &[u8] {
        self
    }
}
