//! Machine configuration.
//!
//! Configuration is limited to the wiring table (three rotor wirings plus the
//! reflector) and the initial rotor offsets. Everything is validated when the
//! machine is built.

use crate::{
    alphabet::{ALPHABET_LEN, Letter},
    error::EnigmaError,
    rotor::{Rotor, RotorSlot},
    wiring::{self, Reflector, Wiring},
};

/// Configuration for a [`crate::Machine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    /// Rotor wirings, slow to fast.
    pub rotors: [Wiring; 3],
    /// Reflector wiring.
    pub reflector: Reflector,
    /// Initial offsets, slow to fast.
    pub offsets: [usize; 3],
}

impl MachineConfig {
    /// The built-in wiring table with all rotors at `A`.
    pub fn standard() -> Result<Self, EnigmaError> {
        Ok(Self {
            rotors: [wiring::rotor_wiring(0)?, wiring::rotor_wiring(1)?, wiring::rotor_wiring(2)?],
            reflector: Reflector::standard()?,
            offsets: [0; 3],
        })
    }

    /// Replace the initial offsets.
    pub fn with_offsets(mut self, offsets: [usize; 3]) -> Self {
        self.offsets = offsets;
        self
    }

    /// Set the initial offsets from a three-letter window string such as
    /// `"AQZ"` (slow, medium, fast).
    pub fn with_window(self, window: &str) -> Result<Self, EnigmaError> {
        Ok(self.with_offsets(parse_window(window)?))
    }

    /// Check every offset is in range.
    pub fn validate(&self) -> Result<(), EnigmaError> {
        if let Some(&offset) = self.offsets.iter().find(|&&o| o >= ALPHABET_LEN) {
            return Err(EnigmaError::InvalidOffset { offset });
        }
        Ok(())
    }

    /// Build the three rotors described by this configuration.
    pub(crate) fn build_rotors(&self) -> Result<[Rotor; 3], EnigmaError> {
        self.validate()?;

        let [slow, medium, fast] = RotorSlot::ALL;
        Ok([
            Rotor::with_wiring(slow, self.rotors[0].clone(), self.offsets[0])?,
            Rotor::with_wiring(medium, self.rotors[1].clone(), self.offsets[1])?,
            Rotor::with_wiring(fast, self.rotors[2].clone(), self.offsets[2])?,
        ])
    }
}

/// Parse a rotor window string into offsets.
pub fn parse_window(window: &str) -> Result<[usize; 3], EnigmaError> {
    let letters = window
        .chars()
        .map(Letter::from_char)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| EnigmaError::InvalidWindow { reason: e.to_string() })?;

    match letters.as_slice() {
        [slow, medium, fast] => Ok([slow.index(), medium.index(), fast.index()]),
        _ => Err(EnigmaError::InvalidWindow {
            reason: format!("expected 3 letters, got {}", letters.len()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_starts_at_aaa() {
        let config = MachineConfig::standard().unwrap();
        assert_eq!(config.offsets, [0, 0, 0]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn window_sets_offsets() {
        let config = MachineConfig::standard().unwrap().with_window("BMZ").unwrap();
        assert_eq!(config.offsets, [1, 12, 25]);
    }

    #[test]
    fn window_rejects_wrong_length() {
        let err = parse_window("AB").unwrap_err();
        assert_eq!(err.to_string(), "invalid rotor window: expected 3 letters, got 2");
    }

    #[test]
    fn window_rejects_lower_case() {
        assert!(matches!(parse_window("abc"), Err(EnigmaError::InvalidWindow { .. })));
    }

    #[test]
    fn validate_rejects_offset_out_of_range() {
        let config = MachineConfig::standard().unwrap().with_offsets([0, 26, 0]);
        assert_eq!(config.validate(), Err(EnigmaError::InvalidOffset { offset: 26 }));
        assert!(config.build_rotors().is_err());
    }

    #[test]
    fn rotors_land_in_their_slots() {
        let rotors = MachineConfig::standard().unwrap().build_rotors().unwrap();
        assert_eq!(rotors.map(|r| r.slot()), RotorSlot::ALL);
    }
}
