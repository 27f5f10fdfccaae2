// src/surface/jpeg.rs

//! JPEG encode and decode.
//!
//! libcairo has no JPEG support, so the codec is the `image` crate's. It
//! streams through the same [`DataProvider`] the PNG path uses, reading and
//! writing via its `std::io` side. Decoded images become RGB24 surfaces.

use super::{ImageSurface, Surface};
use crate::error::Result;
use crate::ffi;
use crate::format::ImageFormat;
use crate::status::{CairoError, Status};
use crate::stream::DataProvider;
use image::codecs::jpeg::{JpegDecoder, JpegEncoder};
use image::{ColorType, DynamicImage, RgbImage};
use log::{debug, trace};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

const MIN_QUALITY: u8 = 1;
const MAX_QUALITY: u8 = 100;

/// Pixels ready for the encoder.
enum Samples {
    Rgb(Vec<u8>),
    Luma(Vec<u8>),
}

impl ImageSurface {
    /// Encodes the surface as JPEG bytes. `quality` is clamped to 1..=100.
    pub fn to_jpeg(&self, quality: u8) -> Result<Vec<u8>> {
        let mut provider = DataProvider::new();
        self.encode_jpeg(&mut provider, quality)?;
        let bytes = provider.into_inner();
        debug!("Encoded surface to {} JPEG bytes (quality {})", bytes.len(), quality);
        Ok(bytes)
    }

    /// Writes the surface to a JPEG file. `quality` is clamped to 1..=100.
    pub fn write_jpeg<P: AsRef<Path>>(&self, path: P, quality: u8) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.encode_jpeg(&mut writer, quality)?;
        writer.flush()?;
        debug!("Wrote JPEG to {}", path.display());
        Ok(())
    }

    /// Decodes JPEG bytes into a new RGB24 image surface.
    pub fn from_jpeg(data: &[u8]) -> Result<ImageSurface> {
        let mut provider = DataProvider::from_bytes(data);
        let surface = Self::decode_jpeg(&mut provider)?;
        debug!(
            "Decoded {} JPEG bytes ({} consumed) into {}x{} surface",
            data.len(),
            provider.position(),
            surface.width(),
            surface.height()
        );
        Ok(surface)
    }

    /// Loads a JPEG file into a new RGB24 image surface.
    pub fn from_jpeg_file<P: AsRef<Path>>(path: P) -> Result<ImageSurface> {
        let path = path.as_ref();
        let surface = Self::decode_jpeg(BufReader::new(File::open(path)?))?;
        debug!("Loaded JPEG from {}", path.display());
        Ok(surface)
    }

    fn encode_jpeg<W: Write>(&self, writer: &mut W, quality: u8) -> Result<()> {
        let quality = quality.clamp(MIN_QUALITY, MAX_QUALITY);
        let (width, height) = (self.width(), self.height());
        let mut encoder = JpegEncoder::new_with_quality(writer, quality);
        match self.samples()? {
            Samples::Rgb(rgb) => encoder.encode(&rgb, width, height, ColorType::Rgb8)?,
            Samples::Luma(luma) => encoder.encode(&luma, width, height, ColorType::L8)?,
        }
        Ok(())
    }

    fn decode_jpeg<R: Read>(reader: R) -> Result<ImageSurface> {
        let decoder = JpegDecoder::new(reader)?;
        let image = DynamicImage::from_decoder(decoder)?.into_rgb8();
        Self::from_rgb8(&image)
    }

    /// Packs `image` into a new RGB24 surface.
    fn from_rgb8(image: &RgbImage) -> Result<ImageSurface> {
        let mut surface = ImageSurface::create(ImageFormat::Rgb24, image.width(), image.height())?;
        let width = image.width() as usize;
        let stride = surface.stride();
        if width == 0 || image.height() == 0 {
            return Ok(surface);
        }
        let src = image.as_raw();
        surface
            .with_data_mut(|pixels| {
                let rows = src.chunks_exact(width * 3).zip(pixels.chunks_exact_mut(stride));
                for (row_in, row_out) in rows {
                    for (rgb, px) in row_in.chunks_exact(3).zip(row_out.chunks_exact_mut(4)) {
                        let value = 0xff00_0000
                            | ((rgb[0] as u32) << 16)
                            | ((rgb[1] as u32) << 8)
                            | (rgb[2] as u32);
                        px.copy_from_slice(&value.to_ne_bytes());
                    }
                }
            })
            .ok_or_else(CairoError::null_pointer)?;
        Ok(surface)
    }

    /// Extracts encoder input. ARGB32 colors are premultiplied, which is the
    /// same as compositing over black. Alpha-only formats encode as
    /// grayscale; other color formats are painted into RGB24 first.
    fn samples(&self) -> Result<Samples> {
        match self.format() {
            Some(ImageFormat::Argb32) | Some(ImageFormat::Rgb24) => {
                Ok(Samples::Rgb(self.rgb24_samples()))
            }
            Some(ImageFormat::A8) => Ok(Samples::Luma(self.a8_samples())),
            Some(ImageFormat::A1) => {
                Ok(Samples::Luma(self.painted_copy(ImageFormat::A8)?.a8_samples()))
            }
            other => {
                trace!("Converting {:?} surface to RGB24 for JPEG encoding", other);
                Ok(Samples::Rgb(self.painted_copy(ImageFormat::Rgb24)?.rgb24_samples()))
            }
        }
    }

    fn rgb24_samples(&self) -> Vec<u8> {
        let width = self.width() as usize;
        let mut rgb = Vec::with_capacity(width * self.height() as usize * 3);
        if width == 0 {
            return rgb;
        }
        if let Some(data) = self.data() {
            for row in data.chunks_exact(self.stride()) {
                for px in row[..width * 4].chunks_exact(4) {
                    let value = u32::from_ne_bytes([px[0], px[1], px[2], px[3]]);
                    rgb.extend_from_slice(&[(value >> 16) as u8, (value >> 8) as u8, value as u8]);
                }
            }
        }
        rgb
    }

    fn a8_samples(&self) -> Vec<u8> {
        let width = self.width() as usize;
        let mut luma = Vec::with_capacity(width * self.height() as usize);
        if width == 0 {
            return luma;
        }
        if let Some(data) = self.data() {
            for row in data.chunks_exact(self.stride()) {
                luma.extend_from_slice(&row[..width]);
            }
        }
        luma
    }

    /// Paints this surface into a new surface of `format` with cairo.
    fn painted_copy(&self, format: ImageFormat) -> Result<ImageSurface> {
        let target = ImageSurface::create(format, self.width(), self.height())?;
        let source: &Surface = self;
        // SAFETY: both surfaces are alive for the whole block and the
        // context is destroyed before leaving it.
        let status = unsafe {
            let cr = ffi::cairo_create(target.as_raw());
            ffi::cairo_set_source_surface(cr, source.as_raw(), 0.0, 0.0);
            ffi::cairo_paint(cr);
            let status = ffi::cairo_status(cr);
            ffi::cairo_destroy(cr);
            status
        };
        Status::from_raw(status).into_result()?;
        target.flush();
        Ok(target)
    }
}
