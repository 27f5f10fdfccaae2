// src/font.rs

//! Font file lookup through FontConfig.
//!
//! Cairo's FreeType font backend needs a font file; FontConfig resolves a
//! pattern such as `"DejaVu Sans:bold"` to the best installed match.

use crate::error::{Error, Result};
use libc::{c_char, c_int};
use log::{debug, trace, warn};
use std::ffi::{CStr, CString};
use std::path::PathBuf;
use std::ptr::NonNull;

use fontconfig_sys::constants::{FC_FAMILY, FC_FILE, FC_INDEX};
use fontconfig_sys::{
    FcChar8, FcConfig, FcConfigDestroy, FcConfigSubstitute, FcDefaultSubstitute, FcFontMatch,
    FcInitLoadConfigAndFonts, FcMatchPattern, FcNameParse, FcPattern, FcPatternDestroy,
    FcPatternGetInteger, FcPatternGetString, FcResult, FcResultMatch, FcResultNoMatch,
};

/// A matched font face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontMatch {
    /// Path of the font file.
    pub path: PathBuf,
    /// Face index within the file (collections hold several faces).
    pub index: i32,
    /// Family name, if the match carries one.
    pub family: Option<String>,
}

/// Destroys an `FcPattern` on drop.
struct SafeFcPattern(NonNull<FcPattern>);

impl SafeFcPattern {
    fn new(ptr: *mut FcPattern) -> Option<Self> {
        NonNull::new(ptr).map(SafeFcPattern)
    }

    #[inline]
    fn raw(&self) -> *mut FcPattern {
        self.0.as_ptr()
    }

    fn get_string(&self, object: *const c_char) -> Option<&CStr> {
        let mut value: *mut FcChar8 = std::ptr::null_mut();
        // SAFETY: the returned string is owned by the pattern and valid for
        // as long as `self` is borrowed.
        let result = unsafe { FcPatternGetString(self.raw(), object, 0, &mut value) };
        if result != FcResultMatch || value.is_null() {
            return None;
        }
        Some(unsafe { CStr::from_ptr(value as *const c_char) })
    }

    fn get_integer(&self, object: *const c_char) -> Option<i32> {
        let mut value: c_int = 0;
        let result = unsafe { FcPatternGetInteger(self.raw(), object, 0, &mut value) };
        (result == FcResultMatch).then_some(value)
    }
}

impl Drop for SafeFcPattern {
    fn drop(&mut self) {
        trace!("Destroying FcPattern {:p}", self.0);
        unsafe { FcPatternDestroy(self.raw()) };
    }
}

/// An owned, loaded FontConfig configuration.
#[derive(Debug)]
pub struct FontConfig {
    config: NonNull<FcConfig>,
}

impl FontConfig {
    /// Loads the default configuration and scans the configured font directories.
    pub fn new() -> Result<Self> {
        // SAFETY: FFI call with no preconditions; NULL signals failure.
        let config = NonNull::new(unsafe { FcInitLoadConfigAndFonts() })
            .ok_or(Error::FontConfigInit)?;
        debug!("Loaded FontConfig configuration {:p}", config);
        Ok(FontConfig { config })
    }

    /// Finds the installed font that best matches `pattern`.
    ///
    /// `Ok(None)` means FontConfig found nothing, or the best match has no
    /// backing file.
    pub fn match_font(&self, pattern: &str) -> Result<Option<FontMatch>> {
        let c_pattern =
            CString::new(pattern).map_err(|_| Error::FontPattern(pattern.to_string()))?;

        // SAFETY: all FontConfig calls below receive live pointers; the
        // patterns are destroyed by their guards.
        let query = SafeFcPattern::new(unsafe { FcNameParse(c_pattern.as_ptr() as *const FcChar8) })
            .ok_or_else(|| Error::FontPattern(pattern.to_string()))?;
        unsafe {
            FcConfigSubstitute(self.config.as_ptr(), query.raw(), FcMatchPattern);
            FcDefaultSubstitute(query.raw());
        }

        let mut result: FcResult = FcResultNoMatch;
        let matched = unsafe { FcFontMatch(self.config.as_ptr(), query.raw(), &mut result) };
        let Some(matched) = SafeFcPattern::new(matched) else {
            trace!("FcFontMatch found nothing for '{}'", pattern);
            return Ok(None);
        };
        if result != FcResultMatch {
            trace!("FcFontMatch result {} for '{}'", result, pattern);
            return Ok(None);
        }

        let Some(file) = matched.get_string(FC_FILE.as_ptr() as *const c_char) else {
            warn!("Font matched for '{}' has no file", pattern);
            return Ok(None);
        };
        let font = FontMatch {
            path: cstr_to_path(file),
            index: matched.get_integer(FC_INDEX.as_ptr() as *const c_char).unwrap_or(0),
            family: matched
                .get_string(FC_FAMILY.as_ptr() as *const c_char)
                .map(|family| family.to_string_lossy().into_owned()),
        };
        debug!("Pattern '{}' matched {}", pattern, font.path.display());
        Ok(Some(font))
    }
}

impl Drop for FontConfig {
    fn drop(&mut self) {
        trace!("Destroying FcConfig {:p}", self.config);
        unsafe { FcConfigDestroy(self.config.as_ptr()) };
    }
}

#[cfg(unix)]
fn cstr_to_path(s: &CStr) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(OsStr::from_bytes(s.to_bytes()))
}

#[cfg(not(unix))]
fn cstr_to_path(s: &CStr) -> PathBuf {
    PathBuf::from(s.to_string_lossy().into_owned())
}
