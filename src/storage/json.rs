//! Strict JSON file persistence.
//!
//! Stores one JSON value per file, UTF-8 encoded. Every failure
//! surfaces to the caller as a [`StorageError`]; the forgiving variant
//! lives in [`super::logged`].

use std::fs;
use std::io;
use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::error::{BoxError, Result, StorageError};
use crate::storage::Format;

/// Save a value to a JSON file.
///
/// Creates the file if absent and fully replaces existing content. The
/// write is not atomic: a crash mid-write can leave a truncated file,
/// which later reads report as [`StorageError::Decode`].
pub fn write<T, P>(path: P, value: &T, format: Format) -> Result<()>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let bytes = match format {
        Format::Compact => serde_json::to_vec(value),
        Format::Pretty => serde_json::to_vec_pretty(value),
    }
    .map_err(|e| StorageError::encode(path, e))?;

    fs::write(path, &bytes).map_err(|e| StorageError::io(path, e))?;

    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Load a saved value from a JSON file.
///
/// A file holding JSON `null`, or nothing but whitespace, yields
/// `T::default()` rather than an absent value.
pub fn read<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    read_with(path, || Ok(T::default()))
}

/// Load a saved value, building the null-case fallback with `make`.
///
/// Like [`read`], but for target types whose baseline value cannot be
/// produced infallibly. A failing `make` surfaces as
/// [`StorageError::Construction`].
pub fn read_with<T, P, F>(path: P, make: F) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
    F: FnOnce() -> std::result::Result<T, BoxError>,
{
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => StorageError::not_found(path),
        _ => StorageError::io(path, e),
    })?;

    // An empty file is a present file with no usable value, same as one
    // holding the literal `null`.
    if bytes.iter().all(u8::is_ascii_whitespace) {
        log::debug!("{} holds no value, building default", path.display());
        return make().map_err(|e| StorageError::construction(path, e));
    }

    let value: Value = serde_json::from_slice(&bytes).map_err(|e| StorageError::decode(path, e))?;

    if value.is_null() {
        log::debug!("{} holds null, building default", path.display());
        return make().map_err(|e| StorageError::construction(path, e));
    }

    serde_json::from_value(value).map_err(|e| StorageError::decode(path, e))
}
