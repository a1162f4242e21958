//! C-linkage boundary for the metadata extractor.
//!
//! Exposes exactly three functions:
//! - [`read_metadata`]: allocate and return one owned record, or null
//! - [`free_metadata`]: release a record exactly once, no-op on null
//! - [`edit_metadata`]: validate, write and persist one field edit
//!
//! # Safety
//! All pointers crossing the boundary are null-checked, panics are caught
//! before they can unwind into the caller, and every owned string travels
//! with the record and dies with it in [`free_metadata`].

use std::ffi::{c_char, c_int, CStr, CString};
use std::panic::catch_unwind;
use std::path::Path;
use std::ptr;

use tagmeta_core::{edit, MetadataExtractor, TrackMetadata};
use tracing::warn;

/// The wire record consumed by the host.
///
/// Field order is part of the contract. Every string field is an owned,
/// NUL-terminated allocation and never null, with one exception: `date` is
/// null when the source file carries no DATE property.
#[repr(C)]
pub struct RawTrackMetadata {
    pub title: *mut c_char,
    pub album: *mut c_char,
    pub artist: *mut c_char,
    pub album_artist: *mut c_char,
    pub genre: *mut c_char,
    pub comment: *mut c_char,
    pub codec: *mut c_char,
    pub tag_type: *mut c_char,
    pub date: *mut c_char,
    pub year: c_int,
    pub duration: c_int,
    pub bitrate: c_int,
    pub frequency: c_int,
    pub channels: c_int,
    pub track: c_int,
    pub track_total: c_int,
    pub disc: c_int,
    pub disc_total: c_int,
    pub has_image: c_int,
}

/// Read and normalize metadata from `filename`.
///
/// Returns an owned record on success; the caller must release it with
/// [`free_metadata`] exactly once. Returns null when the file cannot be
/// opened or parsed, carries no tag, or the argument is null/invalid.
/// A partially-populated record is never returned.
///
/// # Safety
/// `filename` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn read_metadata(filename: *const c_char) -> *mut RawTrackMetadata {
    if filename.is_null() {
        return ptr::null_mut();
    }
    let Ok(path) = CStr::from_ptr(filename).to_str() else {
        return ptr::null_mut();
    };
    let path = path.to_owned();

    let outcome = catch_unwind(move || {
        MetadataExtractor::new()
            .extract(Path::new(&path))
            .map(into_raw)
    });

    match outcome {
        Ok(Ok(raw)) => Box::into_raw(Box::new(raw)),
        Ok(Err(e)) => {
            warn!(error = %e, "metadata extraction failed");
            ptr::null_mut()
        }
        Err(_) => ptr::null_mut(),
    }
}

/// Release a record returned by [`read_metadata`], including all of its
/// owned strings. No-op on null; must be called exactly once per record.
///
/// # Safety
/// `meta` must be null or a pointer obtained from [`read_metadata`] that has
/// not been released yet.
#[no_mangle]
pub unsafe extern "C" fn free_metadata(meta: *mut RawTrackMetadata) {
    if meta.is_null() {
        return;
    }
    let raw = Box::from_raw(meta);
    release_string(raw.title);
    release_string(raw.album);
    release_string(raw.artist);
    release_string(raw.album_artist);
    release_string(raw.genre);
    release_string(raw.comment);
    release_string(raw.codec);
    release_string(raw.tag_type);
    release_string(raw.date);
}

/// Validate, apply and persist one field edit.
///
/// Returns 1 only after the edit reached disk; 0 on any failure (null
/// arguments, unsupported field name, invalid value, unreadable or
/// unwritable file). Never silently succeeds.
///
/// # Safety
/// Each argument must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn edit_metadata(
    filename: *const c_char,
    field: *const c_char,
    value: *const c_char,
) -> c_int {
    if filename.is_null() || field.is_null() || value.is_null() {
        return 0;
    }
    let Ok(path) = CStr::from_ptr(filename).to_str() else {
        return 0;
    };
    let Ok(field) = CStr::from_ptr(field).to_str() else {
        return 0;
    };
    let Ok(value) = CStr::from_ptr(value).to_str() else {
        return 0;
    };
    let (path, field, value) = (path.to_owned(), field.to_owned(), value.to_owned());

    let outcome = catch_unwind(move || edit(Path::new(&path), &field, &value));

    match outcome {
        Ok(Ok(())) => 1,
        Ok(Err(e)) => {
            warn!(error = %e, "metadata edit failed");
            0
        }
        Err(_) => 0,
    }
}

fn into_raw(meta: TrackMetadata) -> RawTrackMetadata {
    RawTrackMetadata {
        title: owned_c_string(meta.title),
        album: owned_c_string(meta.album),
        artist: owned_c_string(meta.artist),
        album_artist: owned_c_string(meta.album_artist),
        genre: owned_c_string(meta.genre),
        comment: owned_c_string(meta.comment),
        codec: owned_c_string(meta.codec),
        tag_type: owned_c_string(meta.tag_type),
        date: meta.date.map_or(ptr::null_mut(), owned_c_string),
        year: meta.year,
        duration: meta.duration,
        bitrate: meta.bitrate,
        frequency: meta.frequency,
        channels: meta.channels,
        track: meta.track,
        track_total: meta.track_total,
        disc: meta.disc,
        disc_total: meta.disc_total,
        has_image: meta.has_image.indicator(),
    }
}

/// Tag text may legally contain NUL bytes; they cannot cross a C string
/// boundary, so they are stripped rather than failing the whole record.
fn owned_c_string(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c) => c.into_raw(),
        Err(e) => {
            let cleaned: Vec<u8> = e.into_vec().into_iter().filter(|&b| b != 0).collect();
            CString::new(cleaned).map_or(ptr::null_mut(), CString::into_raw)
        }
    }
}

unsafe fn release_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
