//! Identifier and reserved-word scanning.

use crate::token::{keyword_from_ident, TokenKind};
use crate::Scanner;

/// Returns true for characters that may continue an identifier.
fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

impl<'a> Scanner<'a> {
    /// Scans an identifier or reserved word.
    ///
    /// Consumes a maximal run of letters, digits, and underscores, then
    /// checks the result against the reserved-word table. Maximal munch
    /// means `classify` is one identifier, never `class` plus `ify`.
    pub(crate) fn scan_identifier(&mut self) -> TokenKind {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);

        keyword_from_ident(text).unwrap_or_else(|| TokenKind::Ident(text.to_string()))
    }
}
