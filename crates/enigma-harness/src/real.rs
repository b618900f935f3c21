//! Real machine wrapper that mirrors [`ModelMachine`]'s interface.
//!
//! [`ModelMachine`]: crate::ModelMachine

use std::{cell::Cell, rc::Rc};

use enigma_core::{EnigmaError, Letter, Machine, MachineConfig, MachineState};

use crate::model::{ObservableState, Operation, OperationError, OperationResult};

/// A built-in [`Machine`] with a counting observer attached.
#[derive(Debug)]
pub struct RealMachine {
    machine: Machine,
    notifications: Rc<Cell<usize>>,
}

impl RealMachine {
    /// A machine at the given offsets (slow to fast).
    pub fn new(offsets: [usize; 3]) -> Result<Self, EnigmaError> {
        let mut machine = Machine::new(MachineConfig::standard()?.with_offsets(offsets))?;

        let notifications = Rc::new(Cell::new(0));
        let counter = Rc::clone(&notifications);
        machine.add_observer(move |_: &MachineState| counter.set(counter.get() + 1));

        Ok(Self { machine, notifications })
    }

    /// The wrapped machine.
    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    /// Apply an operation and return the result.
    pub fn apply(&mut self, op: &Operation) -> OperationResult {
        let result = match *op {
            Operation::PressKey { key } => {
                letter(key).map(|key| OperationResult::Lamp(self.machine.key_pressed(key).to_char()))
            },
            Operation::ReleaseKey { key } => letter(key).map(|key| {
                self.machine.key_released(key);
                OperationResult::Ok
            }),
            Operation::AdvanceRotor { rotor } => {
                self.machine.manual_rotor_advance(usize::from(rotor)).map(|()| OperationResult::Ok)
            },
            Operation::SetOffsets { offsets } => {
                self.machine.set_rotor_offsets(offsets.map(usize::from)).map(|()| OperationResult::Ok)
            },
        };

        result.unwrap_or_else(|e| OperationResult::Error(classify(&e)))
    }

    /// Extract observable state for comparison.
    pub fn observable_state(&self) -> ObservableState {
        let state = self.machine.state();
        ObservableState {
            offsets: state.rotor_offsets(),
            keys_down: Letter::all().filter(|&l| state.is_key_down(l)).map(Letter::to_char).collect(),
            lit_lamps: Letter::all().filter(|&l| state.is_lamp_on(l)).map(Letter::to_char).collect(),
            notifications: self.notifications.get(),
        }
    }
}

fn letter(key: u8) -> Result<Letter, EnigmaError> {
    Letter::from_char(char::from(key))
}

fn classify(err: &EnigmaError) -> OperationError {
    match err {
        EnigmaError::InvalidRotorIndex { .. } => OperationError::InvalidRotor,
        EnigmaError::InvalidOffset { .. } => OperationError::InvalidOffset,
        EnigmaError::InvalidLetter { .. }
        | EnigmaError::InvalidLetterIndex { .. }
        | EnigmaError::InvalidWiring { .. }
        | EnigmaError::InvalidReflector { .. }
        | EnigmaError::InvalidWindow { .. } => OperationError::InvalidLetter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_notifications() {
        let mut real = RealMachine::new([0, 0, 0]).unwrap();
        real.apply(&Operation::PressKey { key: b'A' });
        real.apply(&Operation::ReleaseKey { key: b'A' });
        real.apply(&Operation::PressKey { key: b'!' });

        assert_eq!(real.observable_state().notifications, 2);
    }

    #[test]
    fn maps_errors() {
        let mut real = RealMachine::new([0, 0, 0]).unwrap();
        assert_eq!(
            real.apply(&Operation::AdvanceRotor { rotor: 5 }),
            OperationResult::Error(OperationError::InvalidRotor)
        );
        assert_eq!(
            real.apply(&Operation::SetOffsets { offsets: [0, 0, 99] }),
            OperationResult::Error(OperationError::InvalidOffset)
        );
    }
}
