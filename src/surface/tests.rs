// src/surface/tests.rs

use super::*;
use crate::format::ImageFormat;
use test_log::test;

const WIDTH: u32 = 7;
const HEIGHT: u32 = 5;

/// An RGB24 surface whose pixels encode their own coordinates.
fn gradient_rgb24(width: u32, height: u32) -> ImageSurface {
    let stride = ImageFormat::Rgb24.stride_for_width(width).unwrap();
    let mut bytes = vec![0u8; stride * height as usize];
    for y in 0..height as usize {
        for x in 0..width as usize {
            let value: u32 = ((x as u32 * 37) << 16) | ((y as u32 * 51) << 8) | ((x + y) as u32 * 13);
            let offset = y * stride + x * 4;
            bytes[offset..offset + 4].copy_from_slice(&value.to_ne_bytes());
        }
    }
    ImageSurface::from_pixels(&bytes, ImageFormat::Rgb24, width, height, stride)
        .expect("valid RGB24 pixels")
}

fn pixel(surface: &ImageSurface, x: usize, y: usize) -> u32 {
    let data = surface.data().expect("image surface has pixel memory");
    let offset = y * surface.stride() + x * 4;
    u32::from_ne_bytes([data[offset], data[offset + 1], data[offset + 2], data[offset + 3]])
}

#[test]
fn new_image_surface_reports_its_shape() {
    let surface = ImageSurface::create(ImageFormat::Argb32, WIDTH, HEIGHT).unwrap();
    assert_eq!(surface.width(), WIDTH);
    assert_eq!(surface.height(), HEIGHT);
    assert_eq!(surface.format(), Some(ImageFormat::Argb32));
    assert_eq!(surface.stride(), ImageFormat::Argb32.stride_for_width(WIDTH).unwrap());
    assert_eq!(surface.surface_type(), SurfaceType::Image);
    assert_eq!(surface.content(), Content::ColorAlpha);
    assert!(surface.status().is_success());
    assert!(surface.data().unwrap().iter().all(|&b| b == 0));
}

#[test]
fn content_follows_format() {
    let rgb = ImageSurface::create(ImageFormat::Rgb24, 1, 1).unwrap();
    assert_eq!(rgb.content(), Content::Color);
    let alpha = ImageSurface::create(ImageFormat::A8, 1, 1).unwrap();
    assert_eq!(alpha.content(), Content::Alpha);
}

#[test]
fn oversized_surface_fails_with_status() {
    let err = ImageSurface::create(ImageFormat::Argb32, 1 << 20, 1).expect_err("width is too large");
    assert!(err.status() == Status::INVALID_SIZE || err.status() == Status::NO_MEMORY);
}

#[test]
fn clone_and_drop_track_native_references() {
    let surface = ImageSurface::create(ImageFormat::A8, 4, 4).unwrap();
    assert_eq!(surface.reference_count(), 1);
    {
        let clone = surface.clone();
        assert_eq!(clone.as_raw(), surface.as_raw());
        assert_eq!(surface.reference_count(), 2);
    }
    assert_eq!(surface.reference_count(), 1);
}

#[test]
fn pixel_view_outlives_the_image_surface() {
    let surface = gradient_rgb24(WIDTH, HEIGHT);
    let expected = surface.to_vec().unwrap();
    let view = surface.data().unwrap();
    assert_eq!(view.surface().reference_count(), 2);

    drop(surface);
    assert_eq!(view.surface().reference_count(), 1);
    assert_eq!(&view[..], expected.as_slice());
}

#[test]
fn with_data_mut_writes_are_visible() {
    let mut surface = ImageSurface::create(ImageFormat::Rgb24, 2, 2).unwrap();
    let stride = surface.stride();
    surface
        .with_data_mut(|pixels| {
            pixels[stride..stride + 4].copy_from_slice(&0x00ab_cdefu32.to_ne_bytes());
        })
        .unwrap();
    assert_eq!(pixel(&surface, 0, 1) & 0x00ff_ffff, 0x00ab_cdef);
}

#[test]
fn with_data_mut_is_refused_while_shared() {
    let mut surface = ImageSurface::create(ImageFormat::A8, 4, 4).unwrap();

    let mut clone = surface.clone();
    assert!(surface.with_data_mut(|pixels| pixels[0] = 1).is_none());
    assert!(clone.with_data_mut(|pixels| pixels[0] = 2).is_none());
    drop(clone);

    let view = surface.data().unwrap();
    assert!(surface.with_data_mut(|pixels| pixels[0] = 3).is_none());
    assert_eq!(view[0], 0);
    drop(view);

    let written = surface.with_data_mut(|pixels| {
        pixels[0] = 4;
        pixels.len()
    });
    assert_eq!(written, Some(16));
    assert_eq!(surface.data().unwrap()[0], 4);
}

#[test]
fn from_pixels_rejects_bad_stride_and_short_buffers() {
    let stride = ImageFormat::Argb32.stride_for_width(3).unwrap();
    let bytes = vec![0u8; stride * 2];

    let err = ImageSurface::from_pixels(&bytes, ImageFormat::Argb32, 3, 2, stride + 4).unwrap_err();
    assert_eq!(err.status(), Status::INVALID_STRIDE);

    let err = ImageSurface::from_pixels(&bytes[..stride], ImageFormat::Argb32, 3, 2, stride).unwrap_err();
    assert_eq!(err.status(), Status::INVALID_SIZE);

    let surface = ImageSurface::from_pixels(&bytes, ImageFormat::Argb32, 3, 2, stride).unwrap();
    assert_eq!(surface.to_vec().unwrap(), bytes);
}

#[test]
fn image_surface_conversion_checks_type() {
    let surface: Surface = ImageSurface::create(ImageFormat::Rgb24, 1, 1).unwrap().into();
    let image = ImageSurface::try_from(surface).expect("image surfaces convert back");
    assert!(ImageSurface::is_compatible(image.surface_type()));
    assert!(!ImageSurface::is_compatible(SurfaceType::Pdf));
}

#[test]
fn finish_releases_pixel_memory() {
    let surface = ImageSurface::create(ImageFormat::Rgb24, 3, 3).unwrap();
    surface.finish();
    assert!(surface.data().is_none());
}

#[test]
fn png_bytes_round_trip_exactly() {
    let original = gradient_rgb24(WIDTH, HEIGHT);
    let png = original.to_png().expect("encode PNG");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));

    let decoded = ImageSurface::from_png(&png).expect("decode PNG");
    assert_eq!((decoded.width(), decoded.height()), (WIDTH, HEIGHT));
    for y in 0..HEIGHT as usize {
        for x in 0..WIDTH as usize {
            assert_eq!(
                pixel(&decoded, x, y) & 0x00ff_ffff,
                pixel(&original, x, y) & 0x00ff_ffff,
                "pixel ({}, {})",
                x,
                y
            );
        }
    }
}

#[test]
fn truncated_png_fails_without_leaking() {
    let png = gradient_rgb24(WIDTH, HEIGHT).to_png().unwrap();
    // Signature plus part of IHDR: the header itself cannot be read.
    let err = ImageSurface::from_png(&png[..20]).expect_err("data is truncated");
    assert!(!err.status().is_success());
}

#[test]
fn jpeg_bytes_round_trip_approximately() {
    let mut original = ImageSurface::create(ImageFormat::Rgb24, 16, 16).unwrap();
    let stride = original.stride();
    original
        .with_data_mut(|pixels| {
            for row in pixels.chunks_exact_mut(stride) {
                for px in row.chunks_exact_mut(4) {
                    px.copy_from_slice(&0x00_40_80_c0u32.to_ne_bytes());
                }
            }
        })
        .unwrap();

    let jpeg = original.to_jpeg(95).expect("encode JPEG");
    assert!(jpeg.starts_with(&[0xFF, 0xD8]));

    let decoded = ImageSurface::from_jpeg(&jpeg).expect("decode JPEG");
    assert_eq!((decoded.width(), decoded.height()), (16, 16));
    assert_eq!(decoded.format(), Some(ImageFormat::Rgb24));
    let value = pixel(&decoded, 8, 8);
    for (shift, expected) in [(16, 0x40i32), (8, 0x80), (0, 0xc0)] {
        let channel = ((value >> shift) & 0xff) as i32;
        assert!((channel - expected).abs() <= 8, "channel {:#x} vs {:#x}", channel, expected);
    }
}

#[test]
fn jpeg_encodes_alpha_only_surfaces() {
    let surface = ImageSurface::create(ImageFormat::A8, 8, 8).unwrap();
    let jpeg = surface.to_jpeg(0).expect("quality is clamped, A8 encodes as grayscale");
    let decoded = ImageSurface::from_jpeg(&jpeg).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (8, 8));
}

#[test]
fn garbage_is_not_a_jpeg() {
    let err = ImageSurface::from_jpeg(&[0xFF, 0xD8, 0x00, 0x01]).expect_err("not a JPEG stream");
    assert!(matches!(err, Error::Jpeg(_)));
}

#[test]
fn from_bytes_dispatches_on_signature() {
    let surface = gradient_rgb24(3, 3);
    let from_png = ImageSurface::from_bytes(&surface.to_png().unwrap()).unwrap();
    assert_eq!(from_png.width(), 3);
    let from_jpeg = ImageSurface::from_bytes(&surface.to_jpeg(80).unwrap()).unwrap();
    assert_eq!(from_jpeg.height(), 3);

    let err = ImageSurface::from_bytes(b"not an image").unwrap_err();
    assert_eq!(err.status(), Status::READ_ERROR);
}

#[test]
fn file_entry_points_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let surface = gradient_rgb24(WIDTH, HEIGHT);

    let png_path = dir.path().join("out.png");
    surface.write_png(&png_path).unwrap();
    let png = ImageSurface::from_png_file(&png_path).unwrap();
    assert_eq!(pixel(&png, 2, 3) & 0x00ff_ffff, pixel(&surface, 2, 3) & 0x00ff_ffff);

    // The extension is deliberately wrong: loading sniffs the content.
    let jpeg_path = dir.path().join("out.png.bin");
    surface.write_jpeg(&jpeg_path, 90).unwrap();
    let jpeg = ImageSurface::from_file(&jpeg_path).unwrap();
    assert_eq!((jpeg.width(), jpeg.height()), (WIDTH, HEIGHT));
    let sniffed_png = ImageSurface::from_file(&png_path).unwrap();
    assert_eq!(sniffed_png.width(), WIDTH);
}

#[test]
fn missing_files_report_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.png");

    let err = ImageSurface::from_png_file(&missing).unwrap_err();
    assert_eq!(err.status(), Status::FILE_NOT_FOUND);

    let err = ImageSurface::from_file(&missing).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert_eq!(err.status(), Status::FILE_NOT_FOUND);

    let garbage = dir.path().join("garbage.bin");
    std::fs::write(&garbage, b"\x00\x01\x02\x03\x04\x05\x06\x07\x08").unwrap();
    let err = ImageSurface::from_file(&garbage).unwrap_err();
    assert_eq!(err.status(), Status::READ_ERROR);
}

#[test]
fn paths_with_nul_bytes_are_rejected() {
    let surface = ImageSurface::create(ImageFormat::Rgb24, 1, 1).unwrap();
    let err = surface.write_png("bad\0name.png").unwrap_err();
    assert!(matches!(err, Error::InvalidPath(_)));
}
