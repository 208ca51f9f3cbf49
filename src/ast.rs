//! AST definitions for parsed locant notation
//!
//! All nodes are plain immutable records built once per successful parse.
//! [`MultisubstitutedRing`] re-serializes to the exact source notation via
//! its `Display` impl.

use crate::lexer::Symbol;
use std::fmt;

/// The fixed letter denoting a benzene ring in this sublanguage.
pub const RING_MARKER: char = 'R';

/// One contiguous substituent/notation fragment between ring-locant
/// boundaries: letters, digits, `&` and `-`, never a space.
///
/// Always non-empty; the parser only builds runs from one-or-more matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WlnRun {
    pub symbols: Vec<Symbol>,
}

impl WlnRun {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        debug_assert!(!symbols.is_empty(), "substituent run is never empty");
        Self { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for WlnRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            if let Some(ch) = symbol.to_char() {
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

/// Confirms the ring-marker letter matched; carries only its source offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenzeneMarker {
    pub offset: usize,
}

/// A ring attachment position. Only the six letters `A`–`F` are admissible;
/// any other letter after a space is a parse error even though it would be
/// valid inside a [`WlnRun`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locant {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Locant {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'A' => Some(Locant::A),
            'B' => Some(Locant::B),
            'C' => Some(Locant::C),
            'D' => Some(Locant::D),
            'E' => Some(Locant::E),
            'F' => Some(Locant::F),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Locant::A => 'A',
            Locant::B => 'B',
            Locant::C => 'C',
            Locant::D => 'D',
            Locant::E => 'E',
            Locant::F => 'F',
        }
    }
}

impl fmt::Display for Locant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A substituent attached at a ring position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionEntry {
    pub locant: Locant,
    pub run: WlnRun,
}

/// Root AST node: a benzene ring with an optional leading substituent run
/// and zero or more `(locant, run)` entries in source order.
///
/// Source order is ring-traversal order as written; the grammar does not
/// require ascending locants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultisubstitutedRing {
    pub leading: Option<WlnRun>,
    pub ring: BenzeneMarker,
    pub entries: Vec<SubstitutionEntry>,
}

impl fmt::Display for MultisubstitutedRing {
    /// Re-serializes to the exact notation the ring was parsed from.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(leading) = &self.leading {
            write!(f, "{}", leading)?;
        }
        write!(f, "{}", RING_MARKER)?;
        for entry in &self.entries {
            write!(f, " {}{}", entry.locant, entry.run)?;
        }
        Ok(())
    }
}
