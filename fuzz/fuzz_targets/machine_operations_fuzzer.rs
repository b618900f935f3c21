//! Fuzz target for the [`Machine`] key/lamp state machine
//!
//! Drive arbitrary operation sequences through the real machine and the
//! reference model in lockstep.
//!
//! # Strategy
//!
//! - Event sequences: Arbitrary presses, releases, manual rotor steps and
//!   offset changes
//! - Invalid input: Key symbols outside `A-Z`, rotor indices past 2, offsets
//!   past 25
//!
//! # Invariants
//!
//! - Every result matches the model
//! - At most one lamp is lit
//! - A key never lights its own lamp
//! - Rejected operations change nothing and notify no one
//! - NEVER panic on invalid input
//!
//! [`Machine`]: enigma_core::Machine

#![no_main]

use arbitrary::Arbitrary;
use enigma_harness::{ModelMachine, Operation, OperationResult, RealMachine};
use libfuzzer_sys::fuzz_target;

/// Fuzz input: starting offsets plus an operation sequence.
#[derive(Debug, Clone, Arbitrary)]
struct FuzzInput {
    offsets: [u8; 3],
    ops: Vec<Operation>,
}

fuzz_target!(|input: FuzzInput| {
    let offsets = input.offsets.map(|o| usize::from(o % 26));

    let mut model = ModelMachine::new(offsets);
    let Ok(mut real) = RealMachine::new(offsets) else {
        panic!("in-range offsets must build");
    };

    for op in input.ops.iter().take(1024) {
        let before = real.observable_state();

        let model_result = model.apply(op);
        let real_result = real.apply(op);
        assert_eq!(model_result, real_result, "divergence on {op:?}");

        let after = real.observable_state();
        assert!(after.lit_lamps.len() <= 1, "lamps lit: {:?}", after.lit_lamps);

        match real_result {
            OperationResult::Lamp(lamp) => {
                if let Operation::PressKey { key } = op {
                    assert_ne!(char::from(*key), lamp, "key lit its own lamp");
                }
            },
            OperationResult::Error(_) => assert_eq!(before, after),
            OperationResult::Ok => {},
        }

        assert_eq!(model.observable_state(), after);
    }
});
