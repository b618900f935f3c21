//! Model-based testing harness for the Enigma core.
//!
//! The `model` module holds an independent reference implementation of the
//! machine. Operations are applied to both the model and a real
//! [`enigma_core::Machine`], and their observable states are compared.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod model;
pub mod real;

pub use model::{
    ModelKey, ModelMachine, ObservableState, Operation, OperationError, OperationResult,
    random_operations,
};
pub use real::RealMachine;
