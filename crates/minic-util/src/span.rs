//! Span module - Source location tracking.
//!
//! This module provides the [`Span`] type for representing source code
//! locations, combining byte offsets with line/column information for
//! human-readable output.

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (start, end)
/// - The line and column of the range's first character (1-based)
///
/// # Examples
///
/// ```
/// use minic_util::span::Span;
///
/// // Create a span with byte offsets and line/column info
/// let span = Span::new(10, 20, 1, 5);
/// assert_eq!(span.len(), 10);
///
/// // Create a point span (single location)
/// let point = Span::point(1, 5);
/// assert!(point.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 1,
        column: 1,
    };

    /// Create a new span
    ///
    /// # Examples
    ///
    /// ```
    /// use minic_util::span::Span;
    ///
    /// let span = Span::new(0, 5, 1, 1);
    /// assert_eq!(span.start, 0);
    /// assert_eq!(span.end, 5);
    /// ```
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a zero-width span at the given line and column
    #[inline]
    pub const fn point(line: u32, column: u32) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
            column,
        }
    }

    /// Length of the span in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no bytes
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(3, 7, 2, 4);
        assert_eq!(span.start, 3);
        assert_eq!(span.end, 7);
        assert_eq!(span.line, 2);
        assert_eq!(span.column, 4);
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_point() {
        let span = Span::point(5, 12);
        assert_eq!(span.line, 5);
        assert_eq!(span.column, 12);
        assert!(span.is_empty());
    }

    #[test]
    fn test_span_display() {
        let span = Span::new(0, 3, 2, 9);
        assert_eq!(format!("{}", span), "2:9");
    }

    #[test]
    fn test_dummy_span() {
        assert_eq!(Span::DUMMY.line, 1);
        assert_eq!(Span::DUMMY.column, 1);
        assert!(Span::DUMMY.is_empty());
    }
}
