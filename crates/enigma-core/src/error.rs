//! Error types for the Enigma core.
//!
//! Two families of failure exist:
//! - Configuration errors: bad rotor index, bad offset, broken wiring tables.
//!   These fail construction and never leave a partially-built value behind.
//! - Usage errors: a symbol outside the 26-letter alphabet handed to the
//!   machine.

use thiserror::Error;

/// Errors from building or driving an Enigma machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// Rotor type or slot index outside the wiring table.
    #[error("invalid rotor index: {index} (expected 0, 1 or 2)")]
    InvalidRotorIndex {
        /// The rejected index.
        index: usize,
    },

    /// Rotor offset outside `[0, 26)`.
    #[error("invalid rotor offset: {offset} (expected 0..26)")]
    InvalidOffset {
        /// The rejected offset.
        offset: usize,
    },

    /// Symbol outside the `A-Z` alphabet.
    #[error("invalid letter: {symbol:?}")]
    InvalidLetter {
        /// The rejected symbol.
        symbol: char,
    },

    /// Alphabet index outside `[0, 26)`.
    #[error("invalid letter index: {index}")]
    InvalidLetterIndex {
        /// The rejected index.
        index: usize,
    },

    /// Wiring string is not a bijection over the alphabet.
    #[error("invalid wiring: {reason}")]
    InvalidWiring {
        /// What is wrong with the wiring.
        reason: String,
    },

    /// Reflector wiring is not a fixed-point-free involution.
    #[error("invalid reflector: {reason}")]
    InvalidReflector {
        /// What is wrong with the reflector.
        reason: String,
    },

    /// Rotor window string could not be parsed.
    #[error("invalid rotor window: {reason}")]
    InvalidWindow {
        /// What is wrong with the window string.
        reason: String,
    },
}

impl EnigmaError {
    /// Returns true if this error comes from machine configuration.
    ///
    /// Configuration errors are fatal for construction. Everything else is a
    /// usage error on an already-built machine and leaves its state untouched.
    pub fn is_configuration(&self) -> bool {
        match self {
            Self::InvalidRotorIndex { .. }
            | Self::InvalidOffset { .. }
            | Self::InvalidWiring { .. }
            | Self::InvalidReflector { .. }
            | Self::InvalidWindow { .. } => true,

            Self::InvalidLetter { .. } | Self::InvalidLetterIndex { .. } => false,
        }
    }
}
