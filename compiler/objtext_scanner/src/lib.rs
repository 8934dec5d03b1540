//! Host-facing surface of the Object Text bare-string scanner.
//!
//! - [`scanner`]: the external scanner lifecycle hooks.
//! - [`driver`]: walks whole documents and scans every value position.
//! - [`report`] and [`cli`]: output and configuration for the `objtext` tool.
//!
//! The scanning logic itself lives in `objtext_lexer_core`.

pub mod cli;
pub mod driver;
pub mod report;
pub mod scanner;
pub mod tracing_setup;

pub use driver::{scan_values, ValueReport, ValueScanner};
pub use scanner::{BareStringScanner, ExternalScanner, StateError, SERIALIZATION_BUFFER_SIZE};
