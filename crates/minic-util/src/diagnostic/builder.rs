//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API before handing them to a
//! [`Handler`](super::Handler).

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::span::Span;

/// Fluent builder for [`Diagnostic`] values
///
/// # Examples
///
/// ```
/// use minic_util::diagnostic::{DiagnosticBuilder, Handler};
/// use minic_util::diagnostic::codes::E_ILLEGAL_CHAR;
/// use minic_util::span::Span;
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("ignoring illegal character '#'")
///     .code(E_ILLEGAL_CHAR)
///     .span(Span::point(1, 2))
///     .emit(&handler);
///
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
}

impl DiagnosticBuilder {
    /// Start building an error-level diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
        }
    }

    /// Start building a warning-level diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
        }
    }

    /// Set the source location
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Finish building and return the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
        }
    }

    /// Finish building and emit the diagnostic to the handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::codes::{E_UNTERMINATED_STRING, W_INT_OVERFLOW};

    #[test]
    fn test_build_error() {
        let diag = DiagnosticBuilder::error("unterminated string literal")
            .code(E_UNTERMINATED_STRING)
            .span(Span::new(4, 8, 2, 1))
            .build();

        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "unterminated string literal");
        assert_eq!(diag.code, Some(E_UNTERMINATED_STRING));
        assert_eq!(diag.span.line, 2);
    }

    #[test]
    fn test_build_warning() {
        let diag = DiagnosticBuilder::warning("integer literal too large").build();
        assert_eq!(diag.level, Level::Warning);
        assert_eq!(diag.code, None);
        assert_eq!(diag.span, Span::DUMMY);
    }

    #[test]
    fn test_emit_to_handler() {
        let handler = Handler::new();
        DiagnosticBuilder::warning("integer literal too large")
            .code(W_INT_OVERFLOW)
            .emit(&handler);

        assert!(!handler.has_errors());
        assert_eq!(handler.warning_count(), 1);
        assert_eq!(handler.diagnostics()[0].code, Some(W_INT_OVERFLOW));
    }
}
