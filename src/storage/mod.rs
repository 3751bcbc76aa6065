//! JSON file persistence.
//!
//! Two layers over the same read/write contract:
//! - [`json`]: strict operations, every failure surfaces as
//!   [`StorageError`](crate::error::StorageError)
//! - [`logged`]: best-effort wrappers that swallow failures, reporting
//!   them to an optional [`DiagnosticSink`](crate::sink::DiagnosticSink)
//!
//! Each call opens, uses, and releases the file within its own scope.
//! No state is held between calls; the file is the state. Concurrent
//! writers to the same path are not coordinated: last writer wins.

pub mod json;
pub mod logged;

/// Output encoding for [`json::write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Single JSON line with no insignificant whitespace.
    #[default]
    Compact,
    /// Indented, human-readable JSON.
    Pretty,
}
