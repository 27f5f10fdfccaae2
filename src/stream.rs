// src/stream.rs

//! In-memory byte relay for libcairo's streaming read/write callbacks.
//!
//! A [`DataProvider`] is created right before a native `*_stream` call,
//! handed to it as the opaque `closure` pointer together with [`read_func`]
//! or [`write_func`], and consumed once the call returns. It knows nothing
//! about PNG or JPEG framing; it only moves bytes.
//!
//! The same provider also implements [`std::io::Read`] and
//! [`std::io::Write`] so that Rust codecs can stream through it.

use crate::ffi;
use crate::status::CairoError;
use libc::{c_uchar, c_uint, c_void};
use log::trace;
use std::borrow::Cow;
use std::io;
use std::slice;

/// A byte buffer with a read cursor.
///
/// Decoding borrows the input and only reads; encoding owns a growing
/// buffer and only appends. Appending never consults or moves the cursor,
/// and the cursor never passes the end of the buffer.
#[derive(Debug, Default)]
pub struct DataProvider<'a> {
    data: Cow<'a, [u8]>,
    read_position: usize,
}

impl<'a> DataProvider<'a> {
    /// An empty provider to collect encoder output.
    pub fn new() -> Self {
        DataProvider {
            data: Cow::Owned(Vec::new()),
            read_position: 0,
        }
    }

    /// A provider that serves `data` to a decoder, starting at offset 0.
    pub fn from_bytes(data: &'a [u8]) -> Self {
        DataProvider {
            data: Cow::Borrowed(data),
            read_position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.read_position
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes left between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.read_position
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Takes the accumulated bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.data.into_owned()
    }

    /// Copies up to `dest.len()` bytes from the cursor and advances it by the
    /// number copied.
    ///
    /// Fewer bytes than requested are copied when fewer remain. When nothing
    /// remains at all this is end of data and `READ_ERROR` is returned.
    pub fn read_into(&mut self, dest: &mut [u8]) -> Result<usize, CairoError> {
        if self.remaining() == 0 {
            trace!(
                "DataProvider: end of data at offset {} ({} bytes requested)",
                self.read_position,
                dest.len()
            );
            return Err(CairoError::read_error());
        }

        let size = dest.len().min(self.remaining());
        let start = self.read_position;
        dest[..size].copy_from_slice(&self.data[start..start + size]);
        self.read_position += size;
        trace!(
            "DataProvider: read {} of {} requested bytes, cursor now {}",
            size,
            dest.len(),
            self.read_position
        );
        Ok(size)
    }

    /// Appends `src` in full at the end of the buffer.
    pub fn append(&mut self, src: &[u8]) {
        self.data.to_mut().extend_from_slice(src);
        trace!(
            "DataProvider: appended {} bytes, buffer now {} bytes",
            src.len(),
            self.data.len()
        );
    }

    /// The opaque closure pointer for a native streaming call.
    ///
    /// The pointer is only valid while `self` is mutably borrowed, so it must
    /// not outlive the native call it is passed to.
    pub(crate) fn as_closure(&mut self) -> *mut c_void {
        self as *mut DataProvider<'a> as *mut c_void
    }
}

/// `cairo_read_func_t` backed by a [`DataProvider`].
///
/// # Safety
///
/// `closure` must come from [`DataProvider::as_closure`] on a provider that
/// is alive and not otherwise borrowed for the duration of the call, and
/// `data` must be valid for `length` writable bytes.
pub unsafe extern "C" fn read_func(
    closure: *mut c_void,
    data: *mut c_uchar,
    length: c_uint,
) -> ffi::cairo_status_t {
    if closure.is_null() || (data.is_null() && length > 0) {
        return ffi::CAIRO_STATUS_READ_ERROR;
    }
    let provider = &mut *(closure as *mut DataProvider<'_>);
    let dest: &mut [u8] = if length == 0 {
        &mut []
    } else {
        slice::from_raw_parts_mut(data, length as usize)
    };
    match provider.read_into(dest) {
        Ok(_) => ffi::CAIRO_STATUS_SUCCESS,
        Err(err) => err.code(),
    }
}

/// `cairo_write_func_t` backed by a [`DataProvider`]. Always succeeds.
///
/// # Safety
///
/// `closure` must come from [`DataProvider::as_closure`] on a provider that
/// is alive and not otherwise borrowed for the duration of the call, and
/// `data` must be valid for `length` readable bytes.
pub unsafe extern "C" fn write_func(
    closure: *mut c_void,
    data: *const c_uchar,
    length: c_uint,
) -> ffi::cairo_status_t {
    if closure.is_null() {
        return ffi::CAIRO_STATUS_WRITE_ERROR;
    }
    let provider = &mut *(closure as *mut DataProvider<'_>);
    if length > 0 && !data.is_null() {
        provider.append(slice::from_raw_parts(data, length as usize));
    }
    ffi::CAIRO_STATUS_SUCCESS
}

/// End of data is `Ok(0)` here, as the `Read` contract requires.
impl io::Read for DataProvider<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() || self.remaining() == 0 {
            return Ok(0);
        }
        self.read_into(buf)
            .map_err(|e| io::Error::new(io::ErrorKind::UnexpectedEof, e))
    }
}

impl io::Write for DataProvider<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
