//! Recursive descent parser for locant notation
//!
//! Implements the grammar
//!
//! ```text
//! wln              := (letter | digit | '&' | '-')+
//! benzene          := 'R'
//! benz_locant      := 'A' | 'B' | 'C' | 'D' | 'E' | 'F'
//! multisubstituted := wln? benzene (space benz_locant wln)* EOF
//! ```
//!
//! The optional leading `wln` and the mandatory `benzene` overlap, because
//! the ring-marker letter is itself a valid run symbol. The parser resolves
//! this by trying the maximal leading run first and shrinking it one symbol
//! at a time until the rest of the input matches, so a marker letter inside
//! an active run stays in the run unless closing the run is the only way to
//! complete the parse.

use crate::ast::{
    BenzeneMarker, Locant, MultisubstitutedRing, SubstitutionEntry, WlnRun, RING_MARKER,
};
use crate::lexer::{LexError, Lexer, Symbol};
use log::{debug, trace};

/// Parser error type.
///
/// Every variant carries the character offset where the parse died, and the
/// offending character where one exists. The first error on the chosen parse
/// path is final; there is no recovery or resynchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A character outside the notation alphabet (lexer stage).
    #[error("unrecognized character '{found}' at offset {offset}")]
    UnrecognizedCharacter { found: char, offset: usize },
    /// No position at which the mandatory ring marker can match.
    #[error("expected ring marker 'R' at offset {offset}")]
    ExpectedRingMarker { offset: usize },
    /// The symbol after a locant-introducing space is not a letter `A`–`F`.
    #[error("invalid locant at offset {offset}: expected a letter 'A' through 'F'")]
    InvalidLocant { found: Option<char>, offset: usize },
    /// A locant with no substituent run after it; runs are never empty.
    #[error("expected a substituent run after the locant at offset {offset}")]
    EmptySubstituent { offset: usize },
    /// Symbols left over after a structurally complete match.
    #[error("trailing input '{found}' at offset {offset}")]
    TrailingInput { found: char, offset: usize },
}

impl ParseError {
    /// Returns the character offset where this error occurred.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnrecognizedCharacter { offset, .. }
            | ParseError::ExpectedRingMarker { offset }
            | ParseError::InvalidLocant { offset, .. }
            | ParseError::EmptySubstituent { offset }
            | ParseError::TrailingInput { offset, .. } => *offset,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::UnrecognizedCharacter {
            found: err.ch,
            offset: err.offset,
        }
    }
}

/// True for errors raised after the ring marker matched. A backtracking
/// attempt that found the marker explains the input better than one that
/// did not, so its error is preferred when every attempt fails.
fn after_marker(err: &ParseError) -> bool {
    matches!(
        err,
        ParseError::InvalidLocant { .. }
            | ParseError::EmptySubstituent { .. }
            | ParseError::TrailingInput { .. }
    )
}

/// Recursive descent parser over the lexer's symbol stream.
pub struct Parser {
    symbols: Vec<Symbol>,
    position: usize,
}

impl Parser {
    /// Lex the source and set up a parser over the symbol stream.
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let symbols = Lexer::new(source).tokenize()?;
        Ok(Self {
            symbols,
            position: 0,
        })
    }

    /// Parse the entire input as one `multisubstituted` production.
    ///
    /// Attempts the maximal leading run first and shrinks it on failure.
    /// When every attempt fails, errors raised after the ring marker
    /// matched outrank errors where no marker was found; within a class the
    /// deepest offset wins, ties keeping the longest-run attempt.
    pub fn parse(&mut self) -> Result<MultisubstitutedRing, ParseError> {
        let max = self.measure_run(0);

        let mut best = match self.parse_multisubstituted(max) {
            Ok(ring) => {
                debug!("parsed ring with {} substitution entries", ring.entries.len());
                return Ok(ring);
            }
            Err(err) => err,
        };

        for len in (0..max).rev() {
            trace!("retrying with leading run of {} symbols", len);
            match self.parse_multisubstituted(len) {
                Ok(ring) => {
                    debug!("parsed ring with {} substitution entries", ring.entries.len());
                    return Ok(ring);
                }
                Err(err) => {
                    if (after_marker(&err), err.offset()) > (after_marker(&best), best.offset()) {
                        best = err;
                    }
                }
            }
        }

        Err(best)
    }

    /// One full parse attempt with the leading run covering exactly
    /// `leading_len` symbols (0 means no leading run).
    fn parse_multisubstituted(
        &mut self,
        leading_len: usize,
    ) -> Result<MultisubstitutedRing, ParseError> {
        self.position = 0;

        let leading = if leading_len > 0 {
            let symbols = self.symbols[..leading_len].to_vec();
            self.position = leading_len;
            Some(WlnRun::new(symbols))
        } else {
            None
        };

        let ring = self.parse_benzene()?;

        let mut entries = Vec::new();
        while matches!(self.peek(), Symbol::Space(_)) {
            self.advance();
            let locant = self.parse_benz_locant()?;
            let run = self.parse_wln()?;
            entries.push(SubstitutionEntry { locant, run });
        }

        let next = self.peek();
        match next.to_char() {
            None => Ok(MultisubstitutedRing {
                leading,
                ring,
                entries,
            }),
            Some(found) => Err(ParseError::TrailingInput {
                found,
                offset: next.offset(),
            }),
        }
    }

    /// `benzene := 'R'`
    fn parse_benzene(&mut self) -> Result<BenzeneMarker, ParseError> {
        match self.peek() {
            Symbol::Letter(ch, offset) if ch == RING_MARKER => {
                self.advance();
                Ok(BenzeneMarker { offset })
            }
            sym => Err(ParseError::ExpectedRingMarker {
                offset: sym.offset(),
            }),
        }
    }

    /// `benz_locant := 'A'..'F'`
    fn parse_benz_locant(&mut self) -> Result<Locant, ParseError> {
        let sym = self.peek();
        if let Symbol::Letter(ch, offset) = sym {
            if let Some(locant) = Locant::from_char(ch) {
                self.advance();
                return Ok(locant);
            }
            return Err(ParseError::InvalidLocant {
                found: Some(ch),
                offset,
            });
        }
        Err(ParseError::InvalidLocant {
            found: sym.to_char(),
            offset: sym.offset(),
        })
    }

    /// `wln := (letter | digit | '&' | '-')+`, greedy.
    ///
    /// Only used for the runs after a locant, where a space or end of input
    /// always terminates the run, so no backtracking is needed here.
    fn parse_wln(&mut self) -> Result<WlnRun, ParseError> {
        let len = self.measure_run(self.position);
        if len == 0 {
            return Err(ParseError::EmptySubstituent {
                offset: self.peek().offset(),
            });
        }
        let symbols = self.symbols[self.position..self.position + len].to_vec();
        self.position += len;
        Ok(WlnRun::new(symbols))
    }

    /// Length of the maximal run of run-eligible symbols starting at `from`.
    fn measure_run(&self, from: usize) -> usize {
        self.symbols[from..]
            .iter()
            .take_while(|sym| sym.is_run_symbol())
            .count()
    }

    /// Current symbol. The stream always ends in `Eof` and the parser never
    /// advances past it, so the index is always in bounds.
    fn peek(&self) -> Symbol {
        self.symbols[self.position]
    }

    fn advance(&mut self) {
        self.position += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<MultisubstitutedRing, ParseError> {
        Parser::new(input)?.parse()
    }

    fn run_text(run: &WlnRun) -> String {
        run.to_string()
    }

    #[test]
    fn test_bare_ring() {
        let ring = parse("R").unwrap();
        assert_eq!(ring.leading, None);
        assert_eq!(ring.ring, BenzeneMarker { offset: 0 });
        assert!(ring.entries.is_empty());
    }

    #[test]
    fn test_leading_run_before_marker() {
        let ring = parse("QR BQ").unwrap();
        assert_eq!(run_text(ring.leading.as_ref().unwrap()), "Q");
        assert_eq!(ring.ring, BenzeneMarker { offset: 1 });
        assert_eq!(ring.entries.len(), 1);
        assert_eq!(ring.entries[0].locant, Locant::B);
        assert_eq!(run_text(&ring.entries[0].run), "Q");
    }

    #[test]
    fn test_three_entries_in_source_order() {
        let ring = parse("R AO BQ CQ").unwrap();
        assert_eq!(ring.leading, None);
        let shape: Vec<(Locant, String)> = ring
            .entries
            .iter()
            .map(|e| (e.locant, run_text(&e.run)))
            .collect();
        assert_eq!(
            shape,
            vec![
                (Locant::A, "O".to_string()),
                (Locant::B, "Q".to_string()),
                (Locant::C, "Q".to_string()),
            ]
        );
    }

    #[test]
    fn test_entries_keep_written_order_not_locant_order() {
        let ring = parse("R DQ AO").unwrap();
        assert_eq!(ring.entries[0].locant, Locant::D);
        assert_eq!(ring.entries[1].locant, Locant::A);
    }

    #[test]
    fn test_marker_letter_inside_run() {
        // Both R's are run-eligible; only the last one can be the marker.
        let ring = parse("RR").unwrap();
        assert_eq!(run_text(ring.leading.as_ref().unwrap()), "R");
        assert_eq!(ring.ring, BenzeneMarker { offset: 1 });
    }

    #[test]
    fn test_run_with_digits_and_separators() {
        let ring = parse("1&-R B2-Z").unwrap();
        assert_eq!(run_text(ring.leading.as_ref().unwrap()), "1&-");
        assert_eq!(run_text(&ring.entries[0].run), "2-Z");
    }

    #[test]
    fn test_z_is_valid_inside_run() {
        let ring = parse("R BZ").unwrap();
        assert_eq!(ring.entries[0].locant, Locant::B);
        assert_eq!(run_text(&ring.entries[0].run), "Z");
    }

    #[test]
    fn test_empty_input_expects_marker() {
        assert_eq!(
            parse("").unwrap_err(),
            ParseError::ExpectedRingMarker { offset: 0 }
        );
    }

    #[test]
    fn test_no_marker_anywhere() {
        assert_eq!(
            parse("QQ").unwrap_err(),
            ParseError::ExpectedRingMarker { offset: 2 }
        );
    }

    #[test]
    fn test_invalid_locant_after_space() {
        assert_eq!(
            parse("R GQ").unwrap_err(),
            ParseError::InvalidLocant {
                found: Some('G'),
                offset: 2
            }
        );
    }

    #[test]
    fn test_digit_after_space_is_invalid_locant() {
        assert_eq!(
            parse("R 1Q").unwrap_err(),
            ParseError::InvalidLocant {
                found: Some('1'),
                offset: 2
            }
        );
    }

    #[test]
    fn test_space_at_end_is_invalid_locant() {
        assert_eq!(
            parse("R ").unwrap_err(),
            ParseError::InvalidLocant {
                found: None,
                offset: 2
            }
        );
    }

    #[test]
    fn test_missing_run_after_locant() {
        assert_eq!(
            parse("R B").unwrap_err(),
            ParseError::EmptySubstituent { offset: 3 }
        );
    }

    #[test]
    fn test_double_space_is_invalid_locant() {
        // Second space cannot start a locant.
        assert_eq!(
            parse("R  BQ").unwrap_err(),
            ParseError::InvalidLocant {
                found: Some(' '),
                offset: 2
            }
        );
    }

    #[test]
    fn test_misplaced_space_is_trailing_input() {
        // The only attempt that finds the ring marker reads it at offset 0,
        // leaving 'B' unconsumed.
        assert_eq!(
            parse("RB Q").unwrap_err(),
            ParseError::TrailingInput {
                found: 'B',
                offset: 1
            }
        );
    }

    #[test]
    fn test_symbols_after_bare_ring_are_trailing() {
        assert_eq!(
            parse("RQ").unwrap_err(),
            ParseError::TrailingInput {
                found: 'Q',
                offset: 1
            }
        );
    }

    #[test]
    fn test_unrecognized_character_at_offset() {
        assert_eq!(
            parse("R Bq").unwrap_err(),
            ParseError::UnrecognizedCharacter {
                found: 'q',
                offset: 3
            }
        );
    }

    #[test]
    fn test_error_offset_accessor() {
        let err = parse("R GQ").unwrap_err();
        assert_eq!(err.offset(), 2);
    }
}
