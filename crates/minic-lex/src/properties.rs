//! Property-based tests for the scanner's iteration contract.
//!
//! These check the guarantees that hold for arbitrary input, valid or
//! not: scanning terminates, `Eof` is a stable terminal value, and
//! token positions move monotonically forward through the source.

use proptest::prelude::*;

use crate::{Scanner, Token, TokenKind};
use minic_util::Handler;

fn scan_with_limit(source: &str) -> (Vec<Token>, Token) {
    let handler = Handler::new();
    let mut scanner = Scanner::new(source, &handler);
    let mut tokens = Vec::new();

    // Every call consumes at least one character or returns Eof, so the
    // token count is bounded by the source length.
    for _ in 0..=source.len() {
        let token = scanner.next_token();
        if token.is_eof() {
            return (tokens, token);
        }
        tokens.push(token);
    }

    let token = scanner.next_token();
    assert!(token.is_eof(), "scanner failed to reach Eof");
    (tokens, token)
}

proptest! {
    #[test]
    fn scanning_terminates_with_stable_eof(source in ".*") {
        let handler = Handler::new();
        let mut scanner = Scanner::new(&source, &handler);

        let mut calls = 0usize;
        loop {
            let token = scanner.next_token();
            if token.is_eof() {
                // The terminal token is stable across further calls.
                prop_assert_eq!(scanner.next_token(), token.clone());
                prop_assert_eq!(scanner.next_token(), token);
                break;
            }
            calls += 1;
            prop_assert!(calls <= source.len(), "more tokens than characters");
        }
    }

    #[test]
    fn token_positions_are_monotonic(source in ".*") {
        let (tokens, eof) = scan_with_limit(&source);

        let mut prev: Option<(u32, u32)> = None;
        for token in &tokens {
            prop_assert!(token.line >= 1);
            prop_assert!(token.column >= 1);
            if let Some((line, column)) = prev {
                prop_assert!(token.line >= line);
                if token.line == line {
                    prop_assert!(token.column > column);
                }
            }
            prev = Some((token.line, token.column));
        }

        if let Some((line, _)) = prev {
            prop_assert!(eof.line >= line);
        }
    }

    #[test]
    fn identifiers_round_trip(name in "[a-zA-Z_][a-zA-Z0-9_]{0,40}") {
        prop_assume!(crate::keyword_from_ident(&name).is_none());

        let (tokens, _) = scan_with_limit(&name);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].kind, &TokenKind::Ident(name));
    }

    #[test]
    fn plain_strings_round_trip(content in "[a-zA-Z0-9 ,.!?]{0,60}") {
        let source = format!("\"{}\"", content);

        let (tokens, _) = scan_with_limit(&source);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].kind, &TokenKind::StrLit(content));
    }

    #[test]
    fn small_integers_round_trip(value in 0i32..=i32::MAX) {
        let source = value.to_string();

        let (tokens, _) = scan_with_limit(&source);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].kind, &TokenKind::IntLit(value));
    }
}
