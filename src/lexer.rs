//! Lexer for WLN locant notation
//!
//! Converts raw notation text into a flat [`Symbol`] stream consumed by the
//! parser. The alphabet is closed: uppercase letters, digits, space, `&` and
//! `-`. Anything else — lowercase included — is rejected at its offset.

use std::fmt;

/// All symbol variants produced by the lexer.
///
/// Every variant carries the character offset where it appears so that parse
/// errors can report an exact position without a separate symbol→offset
/// table. `Eof` is a sentinel appended once at the end of the stream; it
/// never occurs inside a substituent run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// An uppercase letter `A`..=`Z`.
    Letter(char, usize),
    /// A decimal digit.
    Digit(u8, usize),
    Space(usize),
    Ampersand(usize),
    Hyphen(usize),
    /// End of input, at offset `input.len()`.
    Eof(usize),
}

impl Symbol {
    /// Returns the character offset where this symbol appears.
    pub fn offset(&self) -> usize {
        match self {
            Symbol::Letter(_, off)
            | Symbol::Digit(_, off)
            | Symbol::Space(off)
            | Symbol::Ampersand(off)
            | Symbol::Hyphen(off)
            | Symbol::Eof(off) => *off,
        }
    }

    /// Returns the source character this symbol was lexed from, or `None`
    /// for the end-of-input sentinel.
    pub fn to_char(&self) -> Option<char> {
        match self {
            Symbol::Letter(ch, _) => Some(*ch),
            Symbol::Digit(d, _) => Some((b'0' + d) as char),
            Symbol::Space(_) => Some(' '),
            Symbol::Ampersand(_) => Some('&'),
            Symbol::Hyphen(_) => Some('-'),
            Symbol::Eof(_) => None,
        }
    }

    /// True for the symbols a substituent run may contain: letters, digits,
    /// `&` and `-`. Space and end of input terminate a run.
    pub fn is_run_symbol(&self) -> bool {
        matches!(
            self,
            Symbol::Letter(_, _) | Symbol::Digit(_, _) | Symbol::Ampersand(_) | Symbol::Hyphen(_)
        )
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Letter(ch, _) => write!(f, "letter '{}'", ch),
            Symbol::Digit(d, _) => write!(f, "digit '{}'", d),
            Symbol::Space(_) => write!(f, "space"),
            Symbol::Ampersand(_) => write!(f, "'&'"),
            Symbol::Hyphen(_) => write!(f, "'-'"),
            Symbol::Eof(_) => write!(f, "end of input"),
        }
    }
}

/// Lexer error: a character outside the 39-symbol alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized character '{ch}' at offset {offset}")]
pub struct LexError {
    pub ch: char,
    pub offset: usize,
}

/// Lexer for locant notation.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    /// Create a new lexer for the given notation string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Classify the entire input, one symbol per character, ending with
    /// [`Symbol::Eof`]. Stops at the first character outside the alphabet.
    pub fn tokenize(&mut self) -> Result<Vec<Symbol>, LexError> {
        let mut symbols = Vec::with_capacity(self.input.len() + 1);

        while let Some(ch) = self.peek() {
            let offset = self.position;
            let symbol = match ch {
                'A'..='Z' => Symbol::Letter(ch, offset),
                '0'..='9' => Symbol::Digit(ch as u8 - b'0', offset),
                ' ' => Symbol::Space(offset),
                '&' => Symbol::Ampersand(offset),
                '-' => Symbol::Hyphen(offset),
                _ => return Err(LexError { ch, offset }),
            };
            symbols.push(symbol);
            self.advance();
        }

        symbols.push(Symbol::Eof(self.position));
        Ok(symbols)
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }
}
