// src/lib.rs

//! json-store: persist runtime values as JSON text files.
//!
//! Two layers over the same read/write contract:
//! - [`storage::json`] is strict: every failure surfaces as a
//!   [`StorageError`].
//! - [`storage::logged`] is best-effort: failures are swallowed and
//!   reported through an optional [`DiagnosticSink`], and the caller
//!   always gets something usable back.
//!
//! ```no_run
//! use json_store::{Format, LogSink};
//! use json_store::storage::{json, logged};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, Serialize, Deserialize)]
//! struct Prefs {
//!     theme: String,
//! }
//!
//! # fn main() -> json_store::Result<()> {
//! let prefs = Prefs { theme: "dark".into() };
//! json::write("prefs.json", &prefs, Format::Pretty)?;
//!
//! // Best-effort: a missing file stays silent, anything else goes to the sink.
//! let loaded: Option<Prefs> = logged::read("prefs.json", Some(&LogSink));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod sink;
pub mod storage;

pub use error::{BoxError, Result, StorageError};
pub use sink::{DiagnosticSink, LogSink, Severity};
pub use storage::Format;
