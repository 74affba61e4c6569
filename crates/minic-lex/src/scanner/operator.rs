//! Operator and punctuation scanning.
//!
//! Two-character operators are tried before their one-character
//! prefixes, so `<=` beats `<` and `==` beats `=`. Single `&` and `|`
//! are not tokens in this language; they are reported as illegal
//! characters.

use minic_util::diagnostic::codes;

use crate::token::TokenKind;
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans `=` or `==`.
    pub(crate) fn scan_equals(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::Equals
        } else {
            TokenKind::Assign
        }
    }

    /// Scans `!` or `!=`.
    pub(crate) fn scan_bang(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::NotEquals
        } else {
            TokenKind::Not
        }
    }

    /// Scans `<` or `<=`.
    pub(crate) fn scan_less(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::LessEq
        } else {
            TokenKind::Less
        }
    }

    /// Scans `>` or `>=`.
    pub(crate) fn scan_greater(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::GreaterEq
        } else {
            TokenKind::Greater
        }
    }

    /// Scans `&&`.
    ///
    /// Returns `None` for a lone `&`, which is reported as an illegal
    /// character and consumed.
    pub(crate) fn scan_ampersand(&mut self) -> Option<TokenKind> {
        self.cursor.advance();
        if self.cursor.match_char('&') {
            Some(TokenKind::And)
        } else {
            self.report_error(codes::E_ILLEGAL_CHAR, "ignoring illegal character '&'");
            None
        }
    }

    /// Scans `||`.
    ///
    /// Returns `None` for a lone `|`, which is reported as an illegal
    /// character and consumed.
    pub(crate) fn scan_pipe(&mut self) -> Option<TokenKind> {
        self.cursor.advance();
        if self.cursor.match_char('|') {
            Some(TokenKind::Or)
        } else {
            self.report_error(codes::E_ILLEGAL_CHAR, "ignoring illegal character '|'");
            None
        }
    }
}
