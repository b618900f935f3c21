//! A single wired rotor.
//!
//! The rotor's wiring is fixed to its body while the body turns, so the
//! substitution a rotor contributes depends on both the wiring and the
//! current offset. Substitution is relative: the contact under the input
//! position is found, and the displacement its wire introduces is applied to
//! the input letter.

use crate::{
    alphabet::{ALPHABET_LEN, Letter},
    error::EnigmaError,
    wiring::{self, Wiring},
};

/// Position of a rotor in the machine, left to right.
///
/// The slot decides how the rotor carries: only the slow (leftmost) rotor
/// never passes a carry on, since nothing sits further left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorSlot {
    /// Leftmost rotor, stepped by the medium rotor's carry.
    Slow,
    /// Middle rotor, stepped by the fast rotor's carry.
    Medium,
    /// Rightmost rotor, stepped on every key press.
    Fast,
}

impl RotorSlot {
    /// All slots in left-to-right order.
    pub const ALL: [Self; 3] = [Self::Slow, Self::Medium, Self::Fast];

    /// Index of this slot (0 = slow, 2 = fast).
    pub fn index(self) -> usize {
        match self {
            Self::Slow => 0,
            Self::Medium => 1,
            Self::Fast => 2,
        }
    }
}

impl TryFrom<usize> for RotorSlot {
    type Error = EnigmaError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::Slow),
            1 => Ok(Self::Medium),
            2 => Ok(Self::Fast),
            _ => Err(EnigmaError::InvalidRotorIndex { index }),
        }
    }
}

/// A rotor: fixed wiring, its cached inverse, and a mutable offset.
///
/// # Invariants
///
/// - `inverse_wiring` is computed once from `wiring` and never changes.
/// - `offset < 26`.
#[derive(Debug, Clone)]
pub struct Rotor {
    slot: RotorSlot,
    wiring: Wiring,
    inverse_wiring: Wiring,
    offset: usize,
}

impl Rotor {
    /// Build rotor `type_index` from the built-in table.
    ///
    /// The type index also selects the slot the rotor sits in (0 = slow,
    /// 1 = medium, 2 = fast).
    pub fn new(type_index: usize, offset: usize) -> Result<Self, EnigmaError> {
        let slot = RotorSlot::try_from(type_index)?;
        Self::with_wiring(slot, wiring::rotor_wiring(type_index)?, offset)
    }

    /// Build a rotor with custom wiring for `slot`.
    pub fn with_wiring(slot: RotorSlot, wiring: Wiring, offset: usize) -> Result<Self, EnigmaError> {
        if offset >= ALPHABET_LEN {
            return Err(EnigmaError::InvalidOffset { offset });
        }

        let inverse_wiring = wiring.inverse();
        Ok(Self { slot, wiring, inverse_wiring, offset })
    }

    /// Slot this rotor sits in.
    pub fn slot(&self) -> RotorSlot {
        self.slot
    }

    /// Current rotational offset in `[0, 26)`.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Forward wiring.
    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    /// Inverse wiring, used on the return path.
    pub fn inverse_wiring(&self) -> &Wiring {
        &self.inverse_wiring
    }

    /// Letter visible in the rotor window.
    pub fn current_letter(&self) -> Letter {
        Letter::wrapping(self.offset)
    }

    /// Turn the rotor to `offset` directly.
    pub(crate) fn set_offset(&mut self, offset: usize) -> Result<(), EnigmaError> {
        if offset >= ALPHABET_LEN {
            return Err(EnigmaError::InvalidOffset { offset });
        }
        self.offset = offset;
        Ok(())
    }

    /// Step one position.
    ///
    /// Returns `true` when the offset wrapped from 25 to 0 and the rotor is
    /// not in the slow slot, i.e. when the next rotor to the left must step.
    pub fn advance(&mut self) -> bool {
        self.offset = (self.offset + 1) % ALPHABET_LEN;
        self.offset == 0 && self.slot != RotorSlot::Slow
    }

    /// Signal path towards the reflector.
    pub fn substitute_forward(&self, letter: Letter) -> Letter {
        substitute(&self.wiring, letter, self.offset)
    }

    /// Signal path back from the reflector.
    pub fn substitute_backward(&self, letter: Letter) -> Letter {
        substitute(&self.inverse_wiring, letter, self.offset)
    }
}

/// Offset-adjusted lookup through `table`.
///
/// The contact under `letter` is `letter + offset - 1`; the `- 1` is the fixed
/// skew between window letter and contact position. The wire's displacement
/// from that contact is added back onto `letter`.
fn substitute(table: &Wiring, letter: Letter, offset: usize) -> Letter {
    let contact = Letter::wrapping(letter.index() + offset + ALPHABET_LEN - 1);
    let wired = table.map(contact);

    #[allow(clippy::cast_possible_wrap)]
    let displacement = wired.index() as i64 - contact.index() as i64;
    letter.shifted(displacement)
}
