/// Lexical errors.
///
/// Defines the faults the scanner recognises while turning source text into
/// tokens. Every one of them is recoverable: the scanner reports it and
/// continues with the rest of the input.
pub mod scan_error;
/// Diagnostic reporting.
///
/// The [`Reporter`] trait is the seam between the front end and whoever
/// presents problems to the user. Two implementations ship with the crate:
/// one that prints to standard error and one that collects diagnostics in
/// memory.
pub mod report;

pub use report::{Diagnostic, Diagnostics, Reporter, StderrReporter};
pub use scan_error::{ScanError, ScanErrorKind};
