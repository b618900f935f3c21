//! The Enigma machine: stepping, the signal path, and key/lamp state.
//!
//! A key press runs the whole pipeline synchronously:
//!
//! ```text
//! key ─► step rotors ─► fast ─► medium ─► slow ─► reflector
//!                                                    │
//! lamp ◄──────────── fast ◄─ medium ◄─ slow ◄────────┘
//! ```
//!
//! Every state change ends with a notification to the registered observers.
//!
//! # Stepping
//!
//! The fast rotor steps on every key press. When it wraps it steps the medium
//! rotor, and when that wraps it steps the slow rotor. The historical
//! double-step of the middle rotor is not modeled.
//!
//! # Lamps
//!
//! Only one lamp is lit at a time. Releasing any key turns off the lamp lit by
//! the most recent key press, whichever key is released.

use std::fmt;

use crate::{
    alphabet::{ALPHABET_LEN, Letter},
    config::MachineConfig,
    error::EnigmaError,
    rotor::{Rotor, RotorSlot},
    wiring::Reflector,
};

/// Something that re-renders when the machine changes.
///
/// The observer receives a read-only view of the machine and queries whatever
/// it needs from it. The borrowed view is the only argument; no event data is
/// pushed, so observers must re-read keys, lamps and rotor windows themselves.
/// Closures taking `&MachineState` implement this trait.
pub trait Observer {
    /// Called after every state change, in registration order.
    fn update(&mut self, state: &MachineState);
}

impl<F> Observer for F
where
    F: FnMut(&MachineState),
{
    fn update(&mut self, state: &MachineState) {
        self(state);
    }
}

/// Rotors, reflector and key/lamp state of one machine.
#[derive(Debug, Clone)]
pub struct MachineState {
    /// Slow, medium, fast.
    rotors: [Rotor; 3],
    reflector: Reflector,
    keys: [bool; ALPHABET_LEN],
    lamps: [bool; ALPHABET_LEN],
    /// Output of the most recent key press. Releasing any key clears this
    /// lamp.
    last_lamp: Option<Letter>,
}

impl MachineState {
    /// Whether `key` is currently held down.
    pub fn is_key_down(&self, key: Letter) -> bool {
        self.keys[key.index()]
    }

    /// Whether the lamp for `lamp` is lit.
    pub fn is_lamp_on(&self, lamp: Letter) -> bool {
        self.lamps[lamp.index()]
    }

    /// The lit lamp, if any.
    pub fn lit_lamp(&self) -> Option<Letter> {
        Letter::all().find(|&l| self.is_lamp_on(l))
    }

    /// Letter shown in the window of rotor `index` (0 = slow, 2 = fast).
    pub fn rotor_window_letter(&self, index: usize) -> Result<Letter, EnigmaError> {
        let slot = RotorSlot::try_from(index)?;
        Ok(self.rotor(slot).current_letter())
    }

    /// The three rotor offsets, slow to fast.
    pub fn rotor_offsets(&self) -> [usize; 3] {
        [self.rotors[0].offset(), self.rotors[1].offset(), self.rotors[2].offset()]
    }

    /// The rotor in `slot`.
    pub fn rotor(&self, slot: RotorSlot) -> &Rotor {
        &self.rotors[slot.index()]
    }

    fn rotor_mut(&mut self, slot: RotorSlot) -> &mut Rotor {
        &mut self.rotors[slot.index()]
    }

    /// Odometer stepping with single-level carry.
    fn step(&mut self) {
        if self.rotor_mut(RotorSlot::Fast).advance() {
            tracing::trace!("fast rotor carried");
            if self.rotor_mut(RotorSlot::Medium).advance() {
                tracing::trace!("medium rotor carried");
                self.rotor_mut(RotorSlot::Slow).advance();
            }
        }
    }

    /// Signal path at the current offsets. Does not step.
    fn encipher_letter(&self, key: Letter) -> Letter {
        let forward = [RotorSlot::Fast, RotorSlot::Medium, RotorSlot::Slow]
            .into_iter()
            .fold(key, |signal, slot| self.rotor(slot).substitute_forward(signal));

        let reflected = self.reflector.reflect(forward);

        RotorSlot::ALL
            .into_iter()
            .fold(reflected, |signal, slot| self.rotor(slot).substitute_backward(signal))
    }
}

/// A simulated Enigma machine.
///
/// All operations are synchronous and run to completion. A machine owns all
/// of its state, so several independent machines can coexist. Callers that
/// drive one machine from several threads must serialize access to it.
pub struct Machine {
    state: MachineState,
    observers: Vec<Box<dyn Observer>>,
}

impl Machine {
    /// Build a machine from `config`.
    pub fn new(config: MachineConfig) -> Result<Self, EnigmaError> {
        let rotors = config.build_rotors()?;

        let state = MachineState {
            rotors,
            reflector: config.reflector,
            keys: [false; ALPHABET_LEN],
            lamps: [false; ALPHABET_LEN],
            last_lamp: None,
        };

        Ok(Self { state, observers: Vec::new() })
    }

    /// The built-in wiring table with all rotors at `A`.
    pub fn standard() -> Result<Self, EnigmaError> {
        Self::new(MachineConfig::standard()?)
    }

    /// Read-only view of the machine state.
    pub fn state(&self) -> &MachineState {
        &self.state
    }

    /// Register an observer. It is notified after every state change.
    pub fn add_observer<O: Observer + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Press `key`: step the rotors, encipher, light the resulting lamp.
    ///
    /// Pressing a key that is already down steps and enciphers again.
    pub fn key_pressed(&mut self, key: Letter) -> Letter {
        self.state.step();
        let lamp = self.state.encipher_letter(key);

        if let Some(previous) = self.state.last_lamp {
            self.state.lamps[previous.index()] = false;
        }
        self.state.last_lamp = Some(lamp);
        self.state.keys[key.index()] = true;
        self.state.lamps[lamp.index()] = true;

        tracing::debug!(%key, %lamp, offsets = ?self.state.rotor_offsets(), "key pressed");

        self.notify();
        lamp
    }

    /// Release `key` and turn off the lamp lit by the most recent press.
    pub fn key_released(&mut self, key: Letter) {
        self.state.keys[key.index()] = false;
        if let Some(lamp) = self.state.last_lamp {
            self.state.lamps[lamp.index()] = false;
        }

        tracing::debug!(%key, "key released");

        self.notify();
    }

    /// Step rotor `index` by hand. No carry is passed on.
    pub fn manual_rotor_advance(&mut self, index: usize) -> Result<(), EnigmaError> {
        let slot = RotorSlot::try_from(index)?;
        self.state.rotor_mut(slot).advance();

        tracing::debug!(?slot, offsets = ?self.state.rotor_offsets(), "rotor advanced by hand");

        self.notify();
        Ok(())
    }

    /// Turn all rotors to `offsets` (slow to fast).
    ///
    /// Nothing changes unless every offset is valid.
    pub fn set_rotor_offsets(&mut self, offsets: [usize; 3]) -> Result<(), EnigmaError> {
        if let Some(&offset) = offsets.iter().find(|&&o| o >= ALPHABET_LEN) {
            return Err(EnigmaError::InvalidOffset { offset });
        }

        for (slot, offset) in RotorSlot::ALL.into_iter().zip(offsets) {
            self.state.rotor_mut(slot).set_offset(offset)?;
        }

        self.notify();
        Ok(())
    }

    /// Press and release each letter of `text` in turn.
    ///
    /// Stops at the first symbol outside `A-Z` without stepping for it.
    /// Letters before it have already been enciphered.
    pub fn encipher(&mut self, text: &str) -> Result<String, EnigmaError> {
        let mut out = String::with_capacity(text.len());
        for symbol in text.chars() {
            let key = Letter::from_char(symbol)?;
            let lamp = self.key_pressed(key);
            self.key_released(key);
            out.push(lamp.to_char());
        }
        Ok(out)
    }

    /// Whether `key` is currently held down.
    pub fn is_key_down(&self, key: Letter) -> bool {
        self.state.is_key_down(key)
    }

    /// Whether the lamp for `lamp` is lit.
    pub fn is_lamp_on(&self, lamp: Letter) -> bool {
        self.state.is_lamp_on(lamp)
    }

    /// The lit lamp, if any.
    pub fn lit_lamp(&self) -> Option<Letter> {
        self.state.lit_lamp()
    }

    /// Letter shown in the window of rotor `index` (0 = slow, 2 = fast).
    pub fn rotor_window_letter(&self, index: usize) -> Result<Letter, EnigmaError> {
        self.state.rotor_window_letter(index)
    }

    /// The three rotor offsets, slow to fast.
    pub fn rotor_offsets(&self) -> [usize; 3] {
        self.state.rotor_offsets()
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer.update(&self.state);
        }
    }
}

impl fmt::Debug for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
