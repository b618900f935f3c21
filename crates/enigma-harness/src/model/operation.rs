//! Operations for model-based testing.
//!
//! Operations represent everything a display or keyboard can do to a machine.
//! They are generated randomly (proptest, the fuzzer, or a seeded RNG) and
//! applied to both the model and the real machine.

use arbitrary::Arbitrary;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Raw key symbol as a byte. Anything outside `b'A'..=b'Z'` must be rejected.
pub type ModelKey = u8;

/// Operations that can be applied to a machine.
#[derive(Debug, Clone, PartialEq, Eq, Arbitrary)]
pub enum Operation {
    /// Press a key.
    PressKey {
        /// Key symbol.
        key: ModelKey,
    },

    /// Release a key.
    ReleaseKey {
        /// Key symbol.
        key: ModelKey,
    },

    /// Step one rotor by hand (0 = slow, 2 = fast; anything else is invalid).
    AdvanceRotor {
        /// Rotor index.
        rotor: u8,
    },

    /// Turn all rotors to the given offsets (slow to fast).
    SetOffsets {
        /// Requested offsets; values of 26 or more are invalid.
        offsets: [u8; 3],
    },
}

/// Result of applying an operation.
///
/// Used to compare model and real machine behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult {
    /// Operation succeeded without lighting a lamp.
    Ok,

    /// Key press succeeded and lit this lamp.
    Lamp(char),

    /// Operation was rejected.
    Error(OperationError),
}

impl OperationResult {
    /// Check if operation succeeded.
    pub fn is_ok(&self) -> bool {
        !self.is_err()
    }

    /// Check if operation failed.
    pub fn is_err(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Expected errors that can occur during operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationError {
    /// Key symbol outside `A-Z`.
    InvalidLetter,

    /// Rotor index outside 0..3.
    InvalidRotor,

    /// Offset outside 0..26.
    InvalidOffset,
}

/// Generate `len` operations from `seed`.
///
/// Mostly valid keys, with a sprinkling of invalid symbols, rotor indices
/// and offsets. The same seed always yields the same sequence.
pub fn random_operations(seed: u64, len: usize) -> Vec<Operation> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..len)
        .map(|_| match rng.gen_range(0..20u8) {
            0..=9 => Operation::PressKey { key: random_key(&mut rng) },
            10..=16 => Operation::ReleaseKey { key: random_key(&mut rng) },
            17 | 18 => Operation::AdvanceRotor { rotor: rng.gen_range(0..4) },
            _ => Operation::SetOffsets {
                offsets: [rng.gen_range(0..27), rng.gen_range(0..27), rng.gen_range(0..27)],
            },
        })
        .collect()
}

fn random_key(rng: &mut ChaCha8Rng) -> ModelKey {
    if rng.gen_bool(0.05) { rng.r#gen() } else { rng.gen_range(b'A'..=b'Z') }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_operations_are_reproducible() {
        assert_eq!(random_operations(7, 64), random_operations(7, 64));
        assert_ne!(random_operations(7, 64), random_operations(8, 64));
    }

    #[test]
    fn result_classification() {
        assert!(OperationResult::Ok.is_ok());
        assert!(OperationResult::Lamp('Q').is_ok());
        assert!(OperationResult::Error(OperationError::InvalidRotor).is_err());
    }
}
