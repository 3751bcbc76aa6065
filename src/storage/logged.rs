//! Best-effort JSON file persistence.
//!
//! Wraps [`super::json`] so that failures never propagate: a failed
//! write leaves prior file content untouched, a failed read yields
//! `None`, and either case reports through the optional sink. A missing
//! file on read is an expected first-run condition and stays silent.
//!
//! Single-shot calls, no retries. Callers that need precise error
//! signaling should use [`super::json`] directly.

use std::any;
use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{BoxError, StorageError};
use crate::sink::{DiagnosticSink, Severity};
use crate::storage::{Format, json};

/// Save a value, reporting any failure instead of returning it.
///
/// The caller cannot distinguish success from a swallowed failure
/// except through the sink.
pub fn write<T, P>(path: P, value: &T, format: Format, sink: Option<&dyn DiagnosticSink>)
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    if let Err(e) = json::write(path, value, format) {
        report::<T>("writing", &e, sink);
    }
}

/// Load a saved value, yielding `None` instead of an error.
pub fn read<T, P>(path: P, sink: Option<&dyn DiagnosticSink>) -> Option<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    read_with(path, || Ok(T::default()), sink)
}

/// Load a saved value with an explicit null-case fallback.
pub fn read_with<T, P, F>(path: P, make: F, sink: Option<&dyn DiagnosticSink>) -> Option<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
    F: FnOnce() -> std::result::Result<T, BoxError>,
{
    match json::read_with(path, make) {
        Ok(value) => Some(value),
        Err(StorageError::NotFound { .. }) => None,
        Err(e) => {
            report::<T>("reading", &e, sink);
            None
        }
    }
}

/// Emit one diagnostic for a swallowed failure.
fn report<T: ?Sized>(action: &str, error: &StorageError, sink: Option<&dyn DiagnosticSink>) {
    if let Some(sink) = sink {
        let message = format!(
            "{} when {} {}",
            error.kind_name(),
            action,
            any::type_name::<T>()
        );
        sink.emit(Severity::Error, &message, Some(error));
    }
}
