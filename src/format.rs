// src/format.rs

//! Pixel formats, content kinds, and surface backends as reported by cairo.

use crate::ffi;
use std::fmt;

/// Memory layout of an image surface's pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// 32-bit premultiplied ARGB, native endian.
    Argb32,
    /// 32-bit RGB with the upper 8 bits unused, native endian.
    Rgb24,
    /// 8-bit alpha.
    A8,
    /// 1-bit alpha, packed.
    A1,
    /// 16-bit RGB 5-6-5.
    Rgb16_565,
    /// 30-bit RGB, 10 bits per channel.
    Rgb30,
    /// 3 floats per pixel.
    Rgb96F,
    /// 4 floats per pixel, premultiplied.
    Rgba128F,
}

impl ImageFormat {
    /// Maps a native format; `None` for `CAIRO_FORMAT_INVALID` and unknown values.
    pub fn from_raw(raw: ffi::cairo_format_t) -> Option<Self> {
        match raw {
            ffi::CAIRO_FORMAT_ARGB32 => Some(ImageFormat::Argb32),
            ffi::CAIRO_FORMAT_RGB24 => Some(ImageFormat::Rgb24),
            ffi::CAIRO_FORMAT_A8 => Some(ImageFormat::A8),
            ffi::CAIRO_FORMAT_A1 => Some(ImageFormat::A1),
            ffi::CAIRO_FORMAT_RGB16_565 => Some(ImageFormat::Rgb16_565),
            ffi::CAIRO_FORMAT_RGB30 => Some(ImageFormat::Rgb30),
            ffi::CAIRO_FORMAT_RGB96F => Some(ImageFormat::Rgb96F),
            ffi::CAIRO_FORMAT_RGBA128F => Some(ImageFormat::Rgba128F),
            _ => None,
        }
    }

    pub fn to_raw(self) -> ffi::cairo_format_t {
        match self {
            ImageFormat::Argb32 => ffi::CAIRO_FORMAT_ARGB32,
            ImageFormat::Rgb24 => ffi::CAIRO_FORMAT_RGB24,
            ImageFormat::A8 => ffi::CAIRO_FORMAT_A8,
            ImageFormat::A1 => ffi::CAIRO_FORMAT_A1,
            ImageFormat::Rgb16_565 => ffi::CAIRO_FORMAT_RGB16_565,
            ImageFormat::Rgb30 => ffi::CAIRO_FORMAT_RGB30,
            ImageFormat::Rgb96F => ffi::CAIRO_FORMAT_RGB96F,
            ImageFormat::Rgba128F => ffi::CAIRO_FORMAT_RGBA128F,
        }
    }

    /// The row stride cairo requires for `width` pixels of this format, or
    /// `None` if the width is too large for the format.
    pub fn stride_for_width(self, width: u32) -> Option<usize> {
        let width = i32::try_from(width).ok()?;
        // SAFETY: pure computation on plain integers.
        let stride = unsafe { ffi::cairo_format_stride_for_width(self.to_raw(), width) };
        usize::try_from(stride).ok()
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImageFormat::Argb32 => "ARGB32",
            ImageFormat::Rgb24 => "RGB24",
            ImageFormat::A8 => "A8",
            ImageFormat::A1 => "A1",
            ImageFormat::Rgb16_565 => "RGB16_565",
            ImageFormat::Rgb30 => "RGB30",
            ImageFormat::Rgb96F => "RGB96F",
            ImageFormat::Rgba128F => "RGBA128F",
        };
        f.write_str(name)
    }
}

/// Whether a surface carries color, alpha, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Content {
    Color,
    Alpha,
    ColorAlpha,
}

impl Content {
    pub fn from_raw(raw: ffi::cairo_content_t) -> Option<Self> {
        match raw {
            ffi::CAIRO_CONTENT_COLOR => Some(Content::Color),
            ffi::CAIRO_CONTENT_ALPHA => Some(Content::Alpha),
            ffi::CAIRO_CONTENT_COLOR_ALPHA => Some(Content::ColorAlpha),
            _ => None,
        }
    }

    pub fn to_raw(self) -> ffi::cairo_content_t {
        match self {
            Content::Color => ffi::CAIRO_CONTENT_COLOR,
            Content::Alpha => ffi::CAIRO_CONTENT_ALPHA,
            Content::ColorAlpha => ffi::CAIRO_CONTENT_COLOR_ALPHA,
        }
    }
}

/// The backend a surface was created by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceType {
    Image,
    Pdf,
    Ps,
    Xlib,
    Xcb,
    Glitz,
    Quartz,
    Win32,
    BeOs,
    DirectFb,
    Svg,
    Os2,
    Win32Printing,
    QuartzImage,
    Script,
    Qt,
    Recording,
    Vg,
    Gl,
    Drm,
    Tee,
    Xml,
    Skia,
    Subsurface,
    Cogl,
    /// A backend newer than this binding.
    Unknown(ffi::cairo_surface_type_t),
}

impl From<ffi::cairo_surface_type_t> for SurfaceType {
    fn from(raw: ffi::cairo_surface_type_t) -> Self {
        match raw {
            ffi::CAIRO_SURFACE_TYPE_IMAGE => SurfaceType::Image,
            ffi::CAIRO_SURFACE_TYPE_PDF => SurfaceType::Pdf,
            ffi::CAIRO_SURFACE_TYPE_PS => SurfaceType::Ps,
            ffi::CAIRO_SURFACE_TYPE_XLIB => SurfaceType::Xlib,
            ffi::CAIRO_SURFACE_TYPE_XCB => SurfaceType::Xcb,
            ffi::CAIRO_SURFACE_TYPE_GLITZ => SurfaceType::Glitz,
            ffi::CAIRO_SURFACE_TYPE_QUARTZ => SurfaceType::Quartz,
            ffi::CAIRO_SURFACE_TYPE_WIN32 => SurfaceType::Win32,
            ffi::CAIRO_SURFACE_TYPE_BEOS => SurfaceType::BeOs,
            ffi::CAIRO_SURFACE_TYPE_DIRECTFB => SurfaceType::DirectFb,
            ffi::CAIRO_SURFACE_TYPE_SVG => SurfaceType::Svg,
            ffi::CAIRO_SURFACE_TYPE_OS2 => SurfaceType::Os2,
            ffi::CAIRO_SURFACE_TYPE_WIN32_PRINTING => SurfaceType::Win32Printing,
            ffi::CAIRO_SURFACE_TYPE_QUARTZ_IMAGE => SurfaceType::QuartzImage,
            ffi::CAIRO_SURFACE_TYPE_SCRIPT => SurfaceType::Script,
            ffi::CAIRO_SURFACE_TYPE_QT => SurfaceType::Qt,
            ffi::CAIRO_SURFACE_TYPE_RECORDING => SurfaceType::Recording,
            ffi::CAIRO_SURFACE_TYPE_VG => SurfaceType::Vg,
            ffi::CAIRO_SURFACE_TYPE_GL => SurfaceType::Gl,
            ffi::CAIRO_SURFACE_TYPE_DRM => SurfaceType::Drm,
            ffi::CAIRO_SURFACE_TYPE_TEE => SurfaceType::Tee,
            ffi::CAIRO_SURFACE_TYPE_XML => SurfaceType::Xml,
            ffi::CAIRO_SURFACE_TYPE_SKIA => SurfaceType::Skia,
            ffi::CAIRO_SURFACE_TYPE_SUBSURFACE => SurfaceType::Subsurface,
            ffi::CAIRO_SURFACE_TYPE_COGL => SurfaceType::Cogl,
            other => SurfaceType::Unknown(other),
        }
    }
}
