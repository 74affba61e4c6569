//! Integer literal scanning.

use minic_util::diagnostic::codes;

use crate::token::TokenKind;
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans an integer literal.
    ///
    /// Consumes a maximal run of ASCII digits and decodes it as an `int`.
    /// A literal outside the representable range saturates to `i32::MAX`
    /// and reports an overflow warning; a token is still emitted, so the
    /// downstream parser sees a well-formed stream.
    pub(crate) fn scan_number(&mut self) -> TokenKind {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);

        match text.parse::<i32>() {
            Ok(value) => TokenKind::IntLit(value),
            Err(_) => {
                self.report_warning(
                    codes::W_INT_OVERFLOW,
                    format!("integer literal '{}' is too large; using {}", text, i32::MAX),
                );
                TokenKind::IntLit(i32::MAX)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use minic_util::diagnostic::codes;
    use minic_util::Handler;

    use crate::token::TokenKind;
    use crate::Scanner;

    fn scan_one(source: &str) -> TokenKind {
        let handler = Handler::new();
        Scanner::new(source, &handler).next_token().kind
    }

    #[test]
    fn test_decimal_integers() {
        assert_eq!(scan_one("0"), TokenKind::IntLit(0));
        assert_eq!(scan_one("42"), TokenKind::IntLit(42));
        assert_eq!(scan_one("123456"), TokenKind::IntLit(123456));
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(scan_one("007"), TokenKind::IntLit(7));
    }

    #[test]
    fn test_max_value_is_exact() {
        let handler = Handler::new();
        let mut scanner = Scanner::new("2147483647", &handler);
        assert_eq!(scanner.next_token().kind, TokenKind::IntLit(i32::MAX));
        assert_eq!(handler.warning_count(), 0);
    }

    #[test]
    fn test_overflow_saturates() {
        let handler = Handler::new();
        let mut scanner = Scanner::new("2147483648", &handler);
        assert_eq!(scanner.next_token().kind, TokenKind::IntLit(i32::MAX));
        assert_eq!(handler.warning_count(), 1);
        assert_eq!(
            handler.diagnostics()[0].code,
            Some(codes::W_INT_OVERFLOW)
        );
    }

    #[test]
    fn test_overflow_reported_at_token_position() {
        let handler = Handler::new();
        let mut scanner = Scanner::new("x 99999999999999999999", &handler);
        let _ = scanner.next_token();
        let token = scanner.next_token();

        assert_eq!(token.kind, TokenKind::IntLit(i32::MAX));
        assert_eq!((token.line, token.column), (1, 3));

        let diag = &handler.diagnostics()[0];
        assert_eq!((diag.span.line, diag.span.column), (1, 3));
    }

    #[test]
    fn test_number_stops_at_letter() {
        // "12ab" is INTLITERAL then ID, per maximal munch on digits
        let handler = Handler::new();
        let mut scanner = Scanner::new("12ab", &handler);
        assert_eq!(scanner.next_token().kind, TokenKind::IntLit(12));
        assert_eq!(
            scanner.next_token().kind,
            TokenKind::Ident("ab".to_string())
        );
    }

    #[test]
    fn test_minus_is_not_part_of_literal() {
        let handler = Handler::new();
        let mut scanner = Scanner::new("-5", &handler);
        assert_eq!(scanner.next_token().kind, TokenKind::Minus);
        assert_eq!(scanner.next_token().kind, TokenKind::IntLit(5));
    }
}
