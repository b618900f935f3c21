//! Enigma Cipher Core
//!
//! Rotor stepping and the rotor/reflector signal path of the three-rotor
//! Enigma machine.
//!
//! # Design
//!
//! The core is a pure, synchronous state machine. Key presses go in, lamp
//! letters come out, and registered [`Observer`]s are told after each change
//! so they can re-read whatever they render. There is no I/O and no global
//! state: each [`Machine`] owns its rotors and key/lamp state.
//!
//! # Properties
//!
//! - Reciprocal: at the same rotor offsets, if `X` enciphers to `Y` then `Y`
//!   enciphers to `X`.
//! - No self-encipherment: a letter never lights its own lamp.
//! - Deterministic: the same offsets and key sequence always light the same
//!   lamps.
//!
//! # Example
//!
//! ```
//! use enigma_core::{Machine, MachineConfig};
//!
//! let config = MachineConfig::standard()?.with_window("AAA")?;
//! let mut machine = Machine::new(config)?;
//! assert_eq!(machine.encipher("HELLOWORLD")?, "SRFZIZJCWB");
//! # Ok::<(), enigma_core::EnigmaError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod alphabet;
pub mod config;
pub mod error;
pub mod machine;
pub mod rotor;
pub mod wiring;

pub use alphabet::{ALPHABET, ALPHABET_LEN, Letter};
pub use config::{MachineConfig, parse_window};
pub use error::EnigmaError;
pub use machine::{Machine, MachineState, Observer};
pub use rotor::{Rotor, RotorSlot};
pub use wiring::{REFLECTOR_WIRING, ROTOR_WIRINGS, Reflector, Wiring, rotor_wiring};
