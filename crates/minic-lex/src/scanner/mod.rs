//! Scanner module.
//!
//! This module organizes the scanner implementation into smaller, focused
//! components:
//! - `core` - Main Scanner struct and dispatch
//! - `trivia` - Whitespace and comment skipping
//! - `identifier` - Identifier and reserved-word scanning
//! - `number` - Integer literal scanning
//! - `string` - String literal scanning
//! - `operator` - Operator and punctuation scanning

mod core;
mod identifier;
mod number;
mod operator;
mod string;
mod trivia;

pub use self::core::Scanner;
