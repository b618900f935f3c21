//! The 26-letter alphabet and the [`Letter`] index type.
//!
//! All letter arithmetic in the machine is modulo 26 over this alphabet.

use std::fmt;

use crate::error::EnigmaError;

/// Number of symbols on the keyboard, lamp board and every rotor.
pub const ALPHABET_LEN: usize = 26;

/// The alphabet in index order.
pub const ALPHABET: [char; ALPHABET_LEN] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// A single alphabet symbol, stored as its index in `[0, 26)`.
///
/// # Invariants
///
/// - The wrapped index is always `< ALPHABET_LEN`. Every constructor checks
///   it, so downstream table lookups never go out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// The letter `A`.
    pub const A: Self = Self(0);

    /// Parse an upper-case `A-Z` symbol.
    pub fn from_char(symbol: char) -> Result<Self, EnigmaError> {
        if symbol.is_ascii_uppercase() {
            Ok(Self(symbol as u8 - b'A'))
        } else {
            Err(EnigmaError::InvalidLetter { symbol })
        }
    }

    /// Build a letter from its alphabet index.
    pub fn from_index(index: usize) -> Result<Self, EnigmaError> {
        if index < ALPHABET_LEN {
            Ok(Self::wrapping(index))
        } else {
            Err(EnigmaError::InvalidLetterIndex { index })
        }
    }

    /// Wrap an arbitrary index into the alphabet (mod 26).
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn wrapping(index: usize) -> Self {
        Self((index % ALPHABET_LEN) as u8)
    }

    /// Index of this letter in the alphabet.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// The symbol for this letter.
    pub fn to_char(self) -> char {
        ALPHABET[self.index()]
    }

    /// Move `delta` positions along the alphabet, wrapping in both directions.
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn shifted(self, delta: i64) -> Self {
        let len = ALPHABET_LEN as i64;
        Self::wrapping((i64::from(self.0) + delta).rem_euclid(len) as usize)
    }

    /// All 26 letters in alphabet order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ALPHABET_LEN).map(Self::wrapping)
    }
}

impl TryFrom<char> for Letter {
    type Error = EnigmaError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_char(symbol)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.to_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
