//! Model machine.
//!
//! Rotor positions are kept as a three-digit base-26 counter and each rotor's
//! substitution is computed in closed form: with skew `k = offset - 1`, the
//! forward path maps `i` to `wiring[i + k] - k`, and the return path solves
//! that equation for `i` by searching the wiring string.

use std::collections::BTreeSet;

use enigma_core::{REFLECTOR_WIRING, ROTOR_WIRINGS};

use super::operation::{ModelKey, Operation, OperationError, OperationResult};

const N: usize = 26;

/// Observable state for oracle comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservableState {
    /// Rotor offsets, slow to fast.
    pub offsets: [usize; 3],
    /// Keys held down, in alphabet order.
    pub keys_down: Vec<char>,
    /// Lit lamps, in alphabet order.
    pub lit_lamps: Vec<char>,
    /// How many times observers have been notified.
    pub notifications: usize,
}

/// Reference machine using the built-in wiring table.
#[derive(Debug, Clone, Default)]
pub struct ModelMachine {
    offsets: [usize; 3],
    keys_down: BTreeSet<char>,
    lit_lamp: Option<char>,
    notifications: usize,
}

impl ModelMachine {
    /// A model machine at the given offsets (slow to fast).
    pub fn new(offsets: [usize; 3]) -> Self {
        Self { offsets, ..Self::default() }
    }

    /// Apply an operation and return the result.
    ///
    /// The result should match the real machine's result.
    pub fn apply(&mut self, op: &Operation) -> OperationResult {
        match *op {
            Operation::PressKey { key } => self.press(key),
            Operation::ReleaseKey { key } => self.release(key),
            Operation::AdvanceRotor { rotor } => self.advance(rotor),
            Operation::SetOffsets { offsets } => self.set_offsets(offsets),
        }
    }

    /// Extract observable state for comparison.
    pub fn observable_state(&self) -> ObservableState {
        ObservableState {
            offsets: self.offsets,
            keys_down: self.keys_down.iter().copied().collect(),
            lit_lamps: self.lit_lamp.into_iter().collect(),
            notifications: self.notifications,
        }
    }

    fn press(&mut self, key: ModelKey) -> OperationResult {
        if !key.is_ascii_uppercase() {
            return OperationResult::Error(OperationError::InvalidLetter);
        }

        let [slow, medium, fast] = self.offsets;
        let counter = ((slow * N + medium) * N + fast + 1) % (N * N * N);
        self.offsets = [counter / (N * N), (counter / N) % N, counter % N];

        let lamp = self.encipher(usize::from(key - b'A'));
        self.keys_down.insert(char::from(key));
        self.lit_lamp = Some(lamp);
        self.notifications += 1;

        OperationResult::Lamp(lamp)
    }

    fn release(&mut self, key: ModelKey) -> OperationResult {
        if !key.is_ascii_uppercase() {
            return OperationResult::Error(OperationError::InvalidLetter);
        }

        // Any release turns off the single lit lamp.
        self.keys_down.remove(&char::from(key));
        self.lit_lamp = None;
        self.notifications += 1;

        OperationResult::Ok
    }

    fn advance(&mut self, rotor: u8) -> OperationResult {
        let Some(offset) = self.offsets.get_mut(usize::from(rotor)) else {
            return OperationResult::Error(OperationError::InvalidRotor);
        };

        *offset = (*offset + 1) % N;
        self.notifications += 1;

        OperationResult::Ok
    }

    fn set_offsets(&mut self, offsets: [u8; 3]) -> OperationResult {
        if offsets.iter().any(|&o| usize::from(o) >= N) {
            return OperationResult::Error(OperationError::InvalidOffset);
        }

        self.offsets = offsets.map(usize::from);
        self.notifications += 1;

        OperationResult::Ok
    }

    fn encipher(&self, key: usize) -> char {
        let mut signal = key;
        for rotor in [2, 1, 0] {
            signal = forward(ROTOR_WIRINGS[rotor].as_bytes(), signal, self.offsets[rotor]);
        }

        signal = index_of(REFLECTOR_WIRING.as_bytes()[signal]);

        for rotor in [0, 1, 2] {
            signal = backward(ROTOR_WIRINGS[rotor].as_bytes(), signal, self.offsets[rotor]);
        }

        char::from(b'A' + u8::try_from(signal).unwrap_or(0))
    }
}

fn index_of(symbol: u8) -> usize {
    usize::from(symbol - b'A')
}

fn forward(wiring: &[u8], signal: usize, offset: usize) -> usize {
    let skew = (offset + N - 1) % N;
    (index_of(wiring[(signal + skew) % N]) + N - skew) % N
}

fn backward(wiring: &[u8], signal: usize, offset: usize) -> usize {
    let skew = (offset + N - 1) % N;
    let target = b'A' + u8::try_from((signal + skew) % N).unwrap_or(0);
    let contact = wiring.iter().position(|&w| w == target).unwrap_or(0);
    (contact + N - skew) % N
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(model: &mut ModelMachine, key: char) -> OperationResult {
        model.apply(&Operation::PressKey { key: key as u8 })
    }

    #[test]
    fn first_press_from_aaa() {
        let mut model = ModelMachine::default();
        assert_eq!(press(&mut model, 'A'), OperationResult::Lamp('X'));
        assert_eq!(model.observable_state().offsets, [0, 0, 1]);
    }

    #[test]
    fn hello_world_from_aaa() {
        let mut model = ModelMachine::default();
        let lamps: String = "HELLOWORLD"
            .chars()
            .map(|c| match press(&mut model, c) {
                OperationResult::Lamp(l) => l,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(lamps, "SRFZIZJCWB");
    }

    #[test]
    fn release_clears_last_lamp_regardless_of_key() {
        let mut model = ModelMachine::default();
        press(&mut model, 'A');
        model.apply(&Operation::ReleaseKey { key: b'B' });

        let state = model.observable_state();
        assert_eq!(state.keys_down, vec!['A']);
        assert!(state.lit_lamps.is_empty());
        assert_eq!(state.notifications, 2);
    }

    #[test]
    fn invalid_operations_do_not_notify() {
        let mut model = ModelMachine::default();
        assert!(model.apply(&Operation::PressKey { key: b'a' }).is_err());
        assert!(model.apply(&Operation::AdvanceRotor { rotor: 3 }).is_err());
        assert!(model.apply(&Operation::SetOffsets { offsets: [0, 26, 0] }).is_err());
        assert_eq!(model.observable_state().notifications, 0);
    }
}
