use std::fmt;

/// Receives the diagnostics produced while processing source code.
///
/// Implementors decide what happens to a diagnostic: print it, collect it,
/// or both. Reporting never aborts the caller; the scanner keeps going after
/// every call.
pub trait Reporter {
    /// Reports a diagnostic on `line`.
    ///
    /// `place` describes where on the line the problem is (for example
    /// `at 'foo'`). The scanner passes an empty string.
    fn report(&mut self, line: usize, place: &str, message: &str);

    /// Reports a diagnostic that has no more precise location than its line.
    fn error(&mut self, line: usize, message: &str) {
        self.report(line, "", message);
    }
}

/// A single reported problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The source line.
    pub line:    usize,
    /// Location within the line, possibly empty.
    pub place:   String,
    /// Human readable description.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error {}: {}", self.line, self.place, self.message)
    }
}

/// Collects diagnostics in memory.
///
/// # Example
/// ```
/// use loxide::error::{Diagnostics, Reporter};
///
/// let mut diagnostics = Diagnostics::default();
/// diagnostics.error(3, "Unexpected character.");
///
/// assert_eq!(diagnostics.len(), 1);
/// assert_eq!(diagnostics.to_string(), "[line 3] Error : Unexpected character.");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// All diagnostics collected so far, in report order.
    #[must_use]
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Number of collected diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Reporter for Diagnostics {
    fn report(&mut self, line: usize, place: &str, message: &str) {
        self.entries.push(Diagnostic { line,
                                       place: place.to_string(),
                                       message: message.to_string() });
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}

/// Writes every diagnostic to standard error as soon as it is reported.
///
/// Whether a run failed is read from its [`Outcome`](crate::Outcome), so the
/// reporter keeps no state.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrReporter;

impl Reporter for StderrReporter {
    fn report(&mut self, line: usize, place: &str, message: &str) {
        let diagnostic = Diagnostic { line,
                                      place: place.to_string(),
                                      message: message.to_string() };
        eprintln!("{diagnostic}");
    }
}
