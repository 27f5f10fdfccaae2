// src/error.rs

//! The crate-wide error type.
//!
//! Every failure, whether reported by libcairo, the JPEG codec, the
//! filesystem or FontConfig, is an [`Error`] that can name the cairo
//! status closest to it.

use crate::status::{CairoError, Status};
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Cairo(#[from] CairoError),
    #[error("JPEG codec error: {0}")]
    Jpeg(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Path cannot be passed to cairo: {}", .0.display())]
    InvalidPath(PathBuf),
    #[error("FontConfig could not be initialized")]
    FontConfigInit,
    #[error("Invalid font pattern '{0}'")]
    FontPattern(String),
}

impl Error {
    /// The native status closest to this error.
    ///
    /// Codec and I/O failures have no status of their own; they are reported
    /// the way libcairo reports its own stream failures.
    pub fn status(&self) -> Status {
        match self {
            Error::Cairo(err) => err.status(),
            Error::Jpeg(image::ImageError::Encoding(_)) => Status::WRITE_ERROR,
            Error::Jpeg(image::ImageError::Unsupported(_)) => Status::INVALID_FORMAT,
            Error::Jpeg(image::ImageError::Limits(_)) => Status::NO_MEMORY,
            Error::Jpeg(image::ImageError::IoError(err)) | Error::Io(err)
                if err.kind() == std::io::ErrorKind::NotFound =>
            {
                Status::FILE_NOT_FOUND
            }
            Error::Jpeg(_) | Error::Io(_) => Status::READ_ERROR,
            Error::InvalidPath(_) | Error::FontPattern(_) => Status::INVALID_STRING,
            Error::FontConfigInit => Status::NO_MEMORY,
        }
    }
}
