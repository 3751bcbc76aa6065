// src/sink.rs

//! Diagnostic reporting for the best-effort storage layer.

use std::error::Error;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Error,
}

/// Receiver for storage diagnostics.
///
/// The logged storage layer emits at most one diagnostic per failed
/// operation. Implementations must not panic: emitting a diagnostic is
/// assumed to always succeed.
pub trait DiagnosticSink {
    /// Report one diagnostic with an optional underlying cause.
    fn emit(&self, severity: Severity, message: &str, cause: Option<&(dyn Error + 'static)>);
}

/// Sink that forwards diagnostics to the [`log`] facade.
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&self, severity: Severity, message: &str, cause: Option<&(dyn Error + 'static)>) {
        match (severity, cause) {
            (Severity::Warn, Some(cause)) => log::warn!("{message}: {cause}"),
            (Severity::Warn, None) => log::warn!("{message}"),
            (Severity::Error, Some(cause)) => log::error!("{message}: {cause}"),
            (Severity::Error, None) => log::error!("{message}"),
        }
    }
}
