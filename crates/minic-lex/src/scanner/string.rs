//! String literal scanning.
//!
//! Strings are delimited by double quotes and must close on the line
//! they open. The recognized escapes are `\n`, `\t`, `\\`, and `\"`;
//! anything else after a backslash is reported and passed through
//! literally.

use minic_util::diagnostic::codes;

use crate::token::TokenKind;
use crate::Scanner;

/// Maximum raw length (characters between the quotes) of a string
/// literal. Longer literals are truncated with a warning.
pub(crate) const MAX_STRING_LEN: usize = 1024;

impl<'a> Scanner<'a> {
    /// Scans a string literal.
    ///
    /// Returns `None` when the literal is unterminated: the partial
    /// lexeme is discarded, the terminating newline (if any) is left for
    /// trivia skipping, and the caller's dispatch loop continues.
    pub(crate) fn scan_string(&mut self) -> Option<TokenKind> {
        self.cursor.advance(); // opening quote

        let mut value = String::new();
        let mut raw_len = 0usize;

        loop {
            if self.cursor.is_at_end() || self.cursor.current_char() == '\n' {
                self.report_error(codes::E_UNTERMINATED_STRING, "unterminated string literal");
                return None;
            }

            let c = self.cursor.current_char();

            if c == '"' {
                self.cursor.advance();
                break;
            }

            if c == '\\' {
                self.cursor.advance();
                raw_len += 1;

                if self.cursor.is_at_end() || self.cursor.current_char() == '\n' {
                    self.report_error(
                        codes::E_UNTERMINATED_STRING,
                        "unterminated string literal",
                    );
                    return None;
                }

                let escaped = self.cursor.current_char();
                self.cursor.advance();
                raw_len += 1;

                match escaped {
                    'n' => value.push('\n'),
                    't' => value.push('\t'),
                    '\\' => value.push('\\'),
                    '"' => value.push('"'),
                    other => {
                        self.report_warning(
                            codes::W_BAD_ESCAPE,
                            format!("unrecognized escape sequence '\\{}'", other),
                        );
                        value.push('\\');
                        value.push(other);
                    },
                }
            } else {
                value.push(c);
                self.cursor.advance();
                raw_len += 1;
            }
        }

        if raw_len > MAX_STRING_LEN {
            self.report_warning(
                codes::W_STRING_TOO_LONG,
                format!(
                    "string literal is {} characters long; truncating to {}",
                    raw_len, MAX_STRING_LEN
                ),
            );
            truncate_chars(&mut value, MAX_STRING_LEN);
        }

        Some(TokenKind::StrLit(value))
    }
}

/// Truncates a string to at most `max` characters, respecting UTF-8
/// boundaries.
fn truncate_chars(value: &mut String, max: usize) {
    if let Some((index, _)) = value.char_indices().nth(max) {
        value.truncate(index);
    }
}
