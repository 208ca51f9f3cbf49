//! # Introduction
//!
//! `wln-locants` parses the locant sublanguage of Wiswesser Line Notation
//! (WLN): strings describing a benzene ring carrying substituents at ring
//! positions `A`–`F`, optionally preceded by a substituent run applying
//! before the ring symbol itself.
//!
//! ## Parsing pipeline
//!
//! ```text
//! Notation → Lexer → Symbols → Parser → MultisubstitutedRing
//! ```
//!
//! 1. [`lexer`] — classifies each character into the closed 39-symbol
//!    alphabet (uppercase letters, digits, space, `&`, `-`).
//! 2. [`parser`] — recursive descent over the symbol stream, building a
//!    [`ast::MultisubstitutedRing`] or failing with a positional
//!    [`parser::ParseError`].
//! 3. [`ast`] — the parse-tree records, re-serializable to the exact source
//!    notation via `Display`.
//!
//! This crate only recognizes syntax. Chemical validation (duplicate
//! locants, ring-size consistency) and resolution of substituent runs into
//! structure belong to downstream stages, which receive the raw symbol
//! sequences per locant.
//!
//! ## Example
//!
//! ```
//! use wln_locants::{ast::Locant, parse_locants};
//!
//! let ring = parse_locants("QR BQ").unwrap();
//! assert_eq!(ring.leading.as_ref().unwrap().to_string(), "Q");
//! assert_eq!(ring.entries[0].locant, Locant::B);
//! assert_eq!(ring.to_string(), "QR BQ");
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;

use ast::MultisubstitutedRing;
use parser::{ParseError, Parser};

/// Parse one locant notation string into its syntax tree.
///
/// Pure function: no shared state, safe to call concurrently. The input is
/// the locant fragment of a larger WLN string, already isolated by the
/// caller.
pub fn parse_locants(input: &str) -> Result<MultisubstitutedRing, ParseError> {
    Parser::new(input)?.parse()
}
