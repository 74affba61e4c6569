//! Core scanner implementation.
//!
//! This module contains the main Scanner struct, its token dispatch loop,
//! and the diagnostic reporting helpers used by the other scanner modules.

use minic_util::diagnostic::codes;
use minic_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Scanner for the Mini language.
///
/// The scanner transforms source text into a stream of position-tagged
/// tokens. Lexical problems are reported to the supplied [`Handler`] and
/// never stop the scan: every call to [`next_token`](Scanner::next_token)
/// either consumes at least one character or returns `Eof`, so iteration
/// always terminates.
///
/// One scanner instance is bound to one source text; construct a fresh
/// one per input and discard it after `Eof`.
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Sink for lexical diagnostics.
    handler: &'a Handler,

    /// Starting byte offset of the current lexeme.
    pub(crate) token_start: usize,

    /// Line where the current lexeme starts (1-based).
    token_start_line: u32,

    /// Column where the current lexeme starts (1-based).
    token_start_column: u32,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner over the given source text.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace and comments, records the lexeme start position,
    /// then dispatches on the first character's class. Characters that
    /// belong to no token are reported and skipped; the loop continues
    /// until a token (possibly `Eof`) can be produced.
    ///
    /// Once `Eof` has been returned, every further call returns `Eof` at
    /// the same position.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_trivia();

            self.token_start = self.cursor.position();
            self.token_start_line = self.cursor.line();
            self.token_start_column = self.cursor.column();

            if self.cursor.is_at_end() {
                return self.emit(TokenKind::Eof);
            }

            let kind = match self.cursor.current_char() {
                '{' => {
                    self.cursor.advance();
                    TokenKind::LCurly
                },
                '}' => {
                    self.cursor.advance();
                    TokenKind::RCurly
                },
                '(' => {
                    self.cursor.advance();
                    TokenKind::LParen
                },
                ')' => {
                    self.cursor.advance();
                    TokenKind::RParen
                },
                ',' => {
                    self.cursor.advance();
                    TokenKind::Comma
                },
                ';' => {
                    self.cursor.advance();
                    TokenKind::Semicolon
                },
                '+' => {
                    self.cursor.advance();
                    TokenKind::Plus
                },
                '-' => {
                    self.cursor.advance();
                    TokenKind::Minus
                },
                '*' => {
                    self.cursor.advance();
                    TokenKind::Times
                },
                // A comment lead-in is consumed by skip_trivia, so a '/'
                // seen here is always the division operator.
                '/' => {
                    self.cursor.advance();
                    TokenKind::Divide
                },
                '=' => self.scan_equals(),
                '!' => self.scan_bang(),
                '<' => self.scan_less(),
                '>' => self.scan_greater(),
                '&' => match self.scan_ampersand() {
                    Some(kind) => kind,
                    None => continue,
                },
                '|' => match self.scan_pipe() {
                    Some(kind) => kind,
                    None => continue,
                },
                '"' => match self.scan_string() {
                    Some(kind) => kind,
                    None => continue,
                },
                c if c == '_' || c.is_ascii_alphabetic() => self.scan_identifier(),
                c if c.is_ascii_digit() => self.scan_number(),
                c => {
                    self.cursor.advance();
                    self.report_error(
                        codes::E_ILLEGAL_CHAR,
                        format!("ignoring illegal character '{}'", c),
                    );
                    continue;
                },
            };

            return self.emit(kind);
        }
    }

    /// Packages a kind into a token at the recorded lexeme start.
    fn emit(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.token_start_line, self.token_start_column)
    }

    /// Reports an error-level diagnostic spanning the current lexeme.
    pub(crate) fn report_error(&mut self, code: DiagnosticCode, message: impl Into<String>) {
        let span = self.lexeme_span();
        DiagnosticBuilder::error(message)
            .code(code)
            .span(span)
            .emit(self.handler);
    }

    /// Reports a warning-level diagnostic spanning the current lexeme.
    pub(crate) fn report_warning(&mut self, code: DiagnosticCode, message: impl Into<String>) {
        let span = self.lexeme_span();
        DiagnosticBuilder::warning(message)
            .code(code)
            .span(span)
            .emit(self.handler);
    }

    /// Span from the recorded lexeme start to the cursor position.
    fn lexeme_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }
}

/// Iterates over the tokens of the source, stopping before `Eof`.
impl<'a> Iterator for Scanner<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
