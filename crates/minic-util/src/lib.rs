//! minic-util - Core Utilities and Foundation Types
//!
//! This crate provides the foundation types shared across the minic
//! toolchain: source location tracking ([`span`]) and the diagnostic
//! reporting infrastructure ([`diagnostic`]).
//!
//! The central design point is that lexical problems are *diagnostics*,
//! not control flow. A [`Handler`] collects every problem found in a
//! pass, in order, with its exact source position, so callers can report
//! them together instead of stopping at the first one.
//!
//! # Examples
//!
//! ```
//! use minic_util::{DiagnosticBuilder, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::warning("integer literal too large")
//!     .span(Span::point(1, 1))
//!     .emit(&handler);
//!
//! assert_eq!(handler.warning_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use span::Span;
