//! Reference model for model-based testing.
//!
//! The model computes the cipher in closed form straight from the wiring
//! strings: no cached inverse, no `Letter` type, no observers. It is the
//! oracle the real machine is checked against.
//!
//! # Design Principles
//!
//! - Simplicity: The model should be obviously correct
//! - Captures WHAT, not HOW
//! - Deterministic: Same inputs produce same outputs

mod machine;
pub mod operation;

pub use machine::{ModelMachine, ObservableState};
pub use operation::{ModelKey, Operation, OperationError, OperationResult, random_operations};
