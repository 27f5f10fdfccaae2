// src/surface/sniff.rs

//! Picks a decoder from the leading "magic" bytes of encoded image data.

use super::ImageSurface;
use crate::error::Result;
use crate::status::CairoError;
use log::{debug, warn};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_SIGNATURE: [u8; 2] = [0xFF, 0xD8];

/// Longest signature checked; the number of bytes read from a file.
pub const SNIFF_LEN: usize = PNG_SIGNATURE.len();

/// An encoded image format that can be loaded into an [`ImageSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodedFormat {
    Png,
    Jpeg,
}

impl EncodedFormat {
    /// Classifies `header` by its leading bytes.
    ///
    /// Input that matches neither signature in full, including input shorter
    /// than a signature, is a read error.
    pub fn detect(header: &[u8]) -> std::result::Result<EncodedFormat, CairoError> {
        if header.starts_with(&PNG_SIGNATURE) {
            Ok(EncodedFormat::Png)
        } else if header.starts_with(&JPEG_SIGNATURE) {
            Ok(EncodedFormat::Jpeg)
        } else {
            warn!(
                "Unrecognized image signature {:02x?}",
                &header[..header.len().min(SNIFF_LEN)]
            );
            Err(CairoError::read_error())
        }
    }

    /// The conventional file extension.
    pub fn extension(self) -> &'static str {
        match self {
            EncodedFormat::Png => "png",
            EncodedFormat::Jpeg => "jpg",
        }
    }

    /// Guesses the format from a file extension, ignoring case.
    pub fn from_extension(path: &Path) -> Option<EncodedFormat> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(EncodedFormat::Png),
            "jpg" | "jpeg" | "jpe" | "jfif" => Some(EncodedFormat::Jpeg),
            _ => None,
        }
    }
}

impl fmt::Display for EncodedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodedFormat::Png => f.write_str("PNG"),
            EncodedFormat::Jpeg => f.write_str("JPEG"),
        }
    }
}

impl ImageSurface {
    /// Loads a PNG or JPEG file, choosing the decoder from its leading bytes.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ImageSurface> {
        let path = path.as_ref();
        let mut header = Vec::with_capacity(SNIFF_LEN);
        File::open(path)?
            .take(SNIFF_LEN as u64)
            .read_to_end(&mut header)?;

        let format = EncodedFormat::detect(&header)?;
        debug!("Detected {} data in {}", format, path.display());
        match format {
            EncodedFormat::Png => ImageSurface::from_png_file(path),
            EncodedFormat::Jpeg => ImageSurface::from_jpeg_file(path),
        }
    }

    /// Decodes PNG or JPEG bytes, choosing the decoder from the leading bytes.
    pub fn from_bytes(data: &[u8]) -> Result<ImageSurface> {
        match EncodedFormat::detect(data)? {
            EncodedFormat::Png => ImageSurface::from_png(data),
            EncodedFormat::Jpeg => ImageSurface::from_jpeg(data),
        }
    }
}
