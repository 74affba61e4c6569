//! Diagnostic codes for categorizing scanner errors and warnings.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages, enabling callers to match on the kind of a lexical
//! problem without parsing its message text.

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` is "E" for errors or "W" for warnings
/// - `number` is a 4-digit number (padded with zeros)
///
/// # Examples
///
/// ```
/// use minic_util::diagnostic::DiagnosticCode;
///
/// let code = DiagnosticCode::new("E", 1001);
/// assert_eq!(code.prefix, "E");
/// assert_eq!(code.as_string(), "E1001");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Format the code as a string like `E1001`
    pub fn as_string(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({}{:04})", self.prefix, self.number)
    }
}

/// An illegal character that belongs to no token
pub const E_ILLEGAL_CHAR: DiagnosticCode = DiagnosticCode::new("E", 1001);
/// A string literal closed by a line terminator or end of input
pub const E_UNTERMINATED_STRING: DiagnosticCode = DiagnosticCode::new("E", 1002);
/// An integer literal outside the representable range
pub const W_INT_OVERFLOW: DiagnosticCode = DiagnosticCode::new("W", 1001);
/// A string literal longer than the allowed maximum
pub const W_STRING_TOO_LONG: DiagnosticCode = DiagnosticCode::new("W", 1002);
/// A backslash escape outside the recognized set
pub const W_BAD_ESCAPE: DiagnosticCode = DiagnosticCode::new("W", 1003);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_formatting() {
        assert_eq!(E_ILLEGAL_CHAR.as_string(), "E1001");
        assert_eq!(W_BAD_ESCAPE.as_string(), "W1003");
        assert_eq!(format!("{}", E_UNTERMINATED_STRING), "E1002");
    }

    #[test]
    fn test_code_equality() {
        assert_eq!(E_ILLEGAL_CHAR, DiagnosticCode::new("E", 1001));
        assert_ne!(E_ILLEGAL_CHAR, W_INT_OVERFLOW);
    }
}
