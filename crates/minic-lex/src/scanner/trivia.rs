//! Whitespace and comment skipping.
//!
//! This module handles the trivia that precedes every token: whitespace
//! and line comments (`//` to end of line, the language's only comment
//! form).

use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Skips whitespace and comments.
    ///
    /// Called before scanning each token. A `/` not followed by a second
    /// `/` is left for the operator dispatch (division).
    pub(crate) fn skip_trivia(&mut self) {
        loop {
            if self.cursor.is_at_end() {
                return;
            }

            match self.cursor.current_char() {
                ' ' | '\t' | '\r' | '\n' => {
                    self.cursor.advance();
                },
                '/' => {
                    if self.cursor.peek_char(1) == '/' {
                        self.skip_line_comment();
                    } else {
                        return;
                    }
                },
                _ => return,
            }
        }
    }

    /// Skips a line comment, leaving the cursor at the terminator.
    fn skip_line_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();

        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
    }
}
