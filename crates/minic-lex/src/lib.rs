//! minic-lex - Lexical Analyzer for the Mini Programming Language
//!
//! This crate provides a complete scanner (tokenizer) for the Mini
//! programming language. It transforms source text into a stream of
//! position-tagged tokens that can be consumed by a parser or dumped by
//! the `minic` harness.
//!
//! # Overview
//!
//! The scanner is a maximal-munch automaton over a character cursor:
//! before each token it consumes whitespace and `//` comments, records
//! the position of the lexeme's first character, then classifies the
//! next run of characters into exactly one [`TokenKind`]. Malformed
//! input never aborts the scan; problems are reported to a
//! [`Handler`](minic_util::Handler) as diagnostics and scanning
//! continues until `Eof`.
//!
//! # Example Usage
//!
//! ```
//! use minic_lex::{Scanner, TokenKind};
//! use minic_util::Handler;
//!
//! let source = "int x = 42;";
//! let handler = Handler::new();
//! let mut scanner = Scanner::new(source, &handler);
//!
//! // Iterate through tokens (iteration stops before Eof)
//! for token in &mut scanner {
//!     println!("{}:{} {}", token.line, token.column, token.kind.name());
//! }
//!
//! // Or pull tokens one at a time
//! let mut scanner = Scanner::new(source, &handler);
//! assert_eq!(scanner.next_token().kind, TokenKind::Int);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`scanner`] - Main scanner implementation
//! - [`cursor`] - Character cursor for source traversal
//!
//! # Token Categories
//!
//! ## Reserved words
//!
//! `boolean`, `class`, `do`, `else`, `false`, `if`, `int`, `print`,
//! `public`, `return`, `static`, `String`, `true`, `void`, `while`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`, minus the reserved words.
//!
//! ## Literals
//!
//! - **Integer**: `42`, `0`, `2147483647` (overflow saturates with a warning)
//! - **String**: `"hello"`, `"line\n"` (escapes `\n` `\t` `\\` `\"`)
//!
//! ## Operators and punctuation
//!
//! `{` `}` `(` `)` `,` `;` `+` `-` `*` `/` `!` `&&` `||`
//! `=` `==` `!=` `<` `<=` `>` `>=`
//!
//! ## Special
//!
//! - **Eof**: end-of-input marker, returned forever once reached

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod scanner;
pub mod token;

#[cfg(test)]
mod properties;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use scanner::Scanner;
pub use token::{keyword_from_ident, Token, TokenKind};
