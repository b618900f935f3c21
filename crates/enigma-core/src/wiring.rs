//! Rotor and reflector wiring tables.
//!
//! A wiring is written as a string of 26 letters where position `i` holds the
//! letter that contact `i` is wired to. Tables are parsed and checked once at
//! construction; after that every lookup is a plain array index.

use crate::{
    alphabet::{ALPHABET_LEN, Letter},
    error::EnigmaError,
};

/// Built-in rotor wirings, indexed by rotor type (historical rotors I, II, III).
pub const ROTOR_WIRINGS: [&str; 3] = [
    "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
    "AJDKSIRUXBLHWTMCQGZNPYFVOE",
    "BDFHJLCPRTXVZNYEIWGAKMUSQO",
];

/// Built-in reflector wiring.
pub const REFLECTOR_WIRING: &str = "IXUHFEZDAOMTKQJWNSRLCYPBVG";

/// A permutation of the alphabet.
///
/// # Invariants
///
/// - Bijective: every letter appears exactly once in `map`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wiring {
    map: [Letter; ALPHABET_LEN],
}

impl Wiring {
    /// Parse a 26-letter wiring string.
    ///
    /// Rejects strings of the wrong length, symbols outside `A-Z`, and
    /// repeated letters.
    pub fn parse(wiring: &str) -> Result<Self, EnigmaError> {
        let count = wiring.chars().count();
        if count != ALPHABET_LEN {
            return Err(EnigmaError::InvalidWiring {
                reason: format!("expected {ALPHABET_LEN} letters, got {count}"),
            });
        }

        let mut map = [Letter::A; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];

        for (slot, symbol) in map.iter_mut().zip(wiring.chars()) {
            let letter = Letter::from_char(symbol).map_err(|_| EnigmaError::InvalidWiring {
                reason: format!("symbol {symbol:?} is not in the alphabet"),
            })?;

            if seen[letter.index()] {
                return Err(EnigmaError::InvalidWiring {
                    reason: format!("letter {letter} is wired more than once"),
                });
            }
            seen[letter.index()] = true;
            *slot = letter;
        }

        Ok(Self { map })
    }

    /// Letter wired to contact `letter`.
    pub fn map(&self, letter: Letter) -> Letter {
        self.map[letter.index()]
    }

    /// The unique wiring `inv` with `inv.map(self.map(x)) == x` for all `x`.
    pub fn inverse(&self) -> Self {
        let mut map = [Letter::A; ALPHABET_LEN];
        for letter in Letter::all() {
            map[self.map(letter).index()] = letter;
        }
        Self { map }
    }

    /// The wiring as a 26-letter string.
    pub fn as_string(&self) -> String {
        self.map.iter().map(|l| l.to_char()).collect()
    }
}

/// The fixed reflector.
///
/// # Invariants
///
/// - Involution: `reflect(reflect(x)) == x`.
/// - No fixed points: `reflect(x) != x`. This is what guarantees that a letter
///   never enciphers to itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    wiring: Wiring,
}

impl Reflector {
    /// Parse and check a reflector wiring string.
    pub fn parse(wiring: &str) -> Result<Self, EnigmaError> {
        let wiring = Wiring::parse(wiring)?;

        for letter in Letter::all() {
            let image = wiring.map(letter);
            if image == letter {
                return Err(EnigmaError::InvalidReflector {
                    reason: format!("letter {letter} reflects to itself"),
                });
            }
            if wiring.map(image) != letter {
                return Err(EnigmaError::InvalidReflector {
                    reason: format!("{letter} -> {image} but {image} -> {}", wiring.map(image)),
                });
            }
        }

        Ok(Self { wiring })
    }

    /// The built-in reflector.
    pub fn standard() -> Result<Self, EnigmaError> {
        Self::parse(REFLECTOR_WIRING)
    }

    /// Reflect a signal.
    pub fn reflect(&self, letter: Letter) -> Letter {
        self.wiring.map(letter)
    }

    /// Underlying wiring.
    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }
}

/// Parsed built-in wiring for rotor type `type_index`.
pub fn rotor_wiring(type_index: usize) -> Result<Wiring, EnigmaError> {
    let table =
        ROTOR_WIRINGS.get(type_index).ok_or(EnigmaError::InvalidRotorIndex { index: type_index })?;
    Wiring::parse(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn builtin_tables_parse() {
        for index in 0..ROTOR_WIRINGS.len() {
            assert!(rotor_wiring(index).is_ok());
        }
        assert!(Reflector::standard().is_ok());
    }

    #[test]
    fn rotor_index_out_of_table() {
        assert_eq!(rotor_wiring(3), Err(EnigmaError::InvalidRotorIndex { index: 3 }));
    }

    #[test]
    fn inverse_undoes_wiring() {
        for index in 0..ROTOR_WIRINGS.len() {
            let wiring = rotor_wiring(index).unwrap();
            let inverse = wiring.inverse();
            for l in Letter::all() {
                assert_eq!(inverse.map(wiring.map(l)), l);
                assert_eq!(wiring.map(inverse.map(l)), l);
            }
        }
    }

    #[test]
    fn rotor_one_inverse_starts_with_u() {
        // Rotor I wires U -> A, so its inverse wires A -> U.
        let inverse = rotor_wiring(0).unwrap().inverse();
        assert_eq!(inverse.map(letter('A')), letter('U'));
        assert_eq!(inverse.as_string(), "UWYGADFPVZBECKMTHXSLRINQOJ");
    }

    #[test]
    fn wiring_rejects_short_string() {
        let err = Wiring::parse("ABC").unwrap_err();
        assert!(matches!(err, EnigmaError::InvalidWiring { .. }));
    }

    #[test]
    fn wiring_rejects_repeated_letter() {
        let err = Wiring::parse("AACDEFGHIJKLMNOPQRSTUVWXYZ").unwrap_err();
        assert_eq!(err.to_string(), "invalid wiring: letter A is wired more than once");
    }

    #[test]
    fn wiring_rejects_foreign_symbol() {
        let err = Wiring::parse("aBCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap_err();
        assert!(matches!(err, EnigmaError::InvalidWiring { .. }));
    }

    #[test]
    fn reflector_is_involution() {
        let reflector = Reflector::standard().unwrap();
        for l in Letter::all() {
            assert_eq!(reflector.reflect(reflector.reflect(l)), l);
            assert_ne!(reflector.reflect(l), l);
        }
    }

    #[test]
    fn reflector_rejects_non_involution() {
        let err = Reflector::parse(ROTOR_WIRINGS[0]).unwrap_err();
        assert!(matches!(err, EnigmaError::InvalidReflector { .. }));
    }

    #[test]
    fn reflector_rejects_fixed_point() {
        // Identity is an involution but every letter maps to itself.
        let err = Reflector::parse("ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap_err();
        assert_eq!(err.to_string(), "invalid reflector: letter A reflects to itself");
    }
}
