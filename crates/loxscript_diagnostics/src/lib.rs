//! loxscript_diagnostics: diagnostic messages and error collection.
//!
//! Malformed lexemes never abort a scan; they are recorded here and the
//! scan continues. Each diagnostic carries the source line its lexeme
//! began on, a stable code, and resolved message text. Collections are
//! per call, so concurrent scans never share reporting state.

use std::fmt;

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message template with a code and category.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic code (e.g., 1002).
    pub code: u32,
    /// The category of this diagnostic.
    pub category: DiagnosticCategory,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with its source line and resolved message text.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// The line the offending lexeme began on (1-based).
    pub line: u32,
    /// The resolved message text.
    pub message_text: String,
    /// The diagnostic code.
    pub code: u32,
    /// The category.
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// Create a diagnostic at the given line.
    pub fn new(line: u32, message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            line,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Whether this is an error diagnostic.
    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] {} LS{}: {}",
            self.line, self.category, self.code, self.message_text
        )
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// An ordered collection of diagnostics accumulated during one scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.category == DiagnosticCategory::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.category == DiagnosticCategory::Error)
            .count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn extend(&mut self, other: DiagnosticCollection) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }

    /// Sort diagnostics by line, then by code.
    pub fn sort(&mut self) {
        self.diagnostics
            .sort_by(|a, b| a.line.cmp(&b.line).then(a.code.cmp(&b.code)));
    }
}

// ============================================================================
// Diagnostic messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage {
                code: $code,
                category: DiagnosticCategory::Error,
                message: $msg,
            }
        };
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage {
                code: $code,
                category: DiagnosticCategory::Warning,
                message: $msg,
            }
        };
    }

    // Scanner errors (1000-1099)
    pub const UNEXPECTED_CHARACTER_0: DiagnosticMessage =
        diag!(1001, Error, "Unexpected character '{0}'.");
    pub const UNTERMINATED_STRING_LITERAL: DiagnosticMessage =
        diag!(1002, Error, "Unterminated string literal.");
    pub const UNTERMINATED_BLOCK_COMMENT: DiagnosticMessage =
        diag!(1003, Error, "Unterminated block comment.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message_substitutes_placeholders() {
        assert_eq!(format_message("Unexpected character '{0}'.", &["@"]),
            "Unexpected character '@'.");
        assert_eq!(format_message("no placeholders", &[]), "no placeholders");
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new(3, &messages::UNTERMINATED_STRING_LITERAL, &[]);
        assert_eq!(
            diag.to_string(),
            "[line 3] error LS1002: Unterminated string literal."
        );
    }

    #[test]
    fn test_collection_counts_and_order() {
        let mut collection = DiagnosticCollection::new();
        assert!(collection.is_empty());
        assert!(!collection.has_errors());

        collection.add(Diagnostic::new(2, &messages::UNTERMINATED_BLOCK_COMMENT, &[]));
        collection.add(Diagnostic::new(1, &messages::UNEXPECTED_CHARACTER_0, &["#"]));

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.error_count(), 2);
        assert!(collection.has_errors());

        // Insertion order is preserved until an explicit sort.
        assert_eq!(collection.diagnostics()[0].line, 2);
        collection.sort();
        assert_eq!(collection.diagnostics()[0].line, 1);
    }
}
