//! Modifier key combinations.
use core::ops::BitOr;

use bitfield_struct::bitfield;

/// Modifier combination attached to an emitted key. 1 bit for Left/Right,
/// 4 bits for modifier type. Represented in LSB format.
///
/// | bit4 | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- | --- |
/// | L/R | GUI | ALT |SHIFT| CTRL|
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct ModifierCombination {
    #[bits(1)]
    pub ctrl: bool,
    #[bits(1)]
    pub shift: bool,
    #[bits(1)]
    pub alt: bool,
    #[bits(1)]
    pub gui: bool,
    #[bits(1)]
    pub right: bool,
    #[bits(3)]
    _reserved: u8,
}

impl BitOr for ModifierCombination {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

pub const CTRL: ModifierCombination = ModifierCombination::new().with_ctrl(true);
pub const SHIFT: ModifierCombination = ModifierCombination::new().with_shift(true);
pub const ALT: ModifierCombination = ModifierCombination::new().with_alt(true);
pub const GUI: ModifierCombination = ModifierCombination::new().with_gui(true);
pub const RIGHT: ModifierCombination = ModifierCombination::new().with_right(true);

impl ModifierCombination {
    /// Returns `true` if no modifier is set.
    pub const fn is_empty(self) -> bool {
        !(self.ctrl() || self.shift() || self.alt() || self.gui())
    }

    /// Modifier byte of a boot keyboard report.
    ///
    /// Left modifiers occupy bits 0..=3 (ctrl, shift, alt, gui), right
    /// modifiers bits 4..=7 in the same order.
    pub const fn to_hid_modifier_bits(self) -> u8 {
        let mut bits = 0;
        if self.ctrl() {
            bits |= 1 << 0;
        }
        if self.shift() {
            bits |= 1 << 1;
        }
        if self.alt() {
            bits |= 1 << 2;
        }
        if self.gui() {
            bits |= 1 << 3;
        }
        if self.right() { bits << 4 } else { bits }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hid_modifier_bits() {
        assert_eq!(ModifierCombination::new().to_hid_modifier_bits(), 0);
        assert_eq!(CTRL.to_hid_modifier_bits(), 0b0000_0001);
        assert_eq!(SHIFT.to_hid_modifier_bits(), 0b0000_0010);
        assert_eq!((GUI | SHIFT).to_hid_modifier_bits(), 0b0000_1010);
        assert_eq!((RIGHT | ALT).to_hid_modifier_bits(), 0b0100_0000);
    }

    #[test]
    fn test_is_empty() {
        assert!(ModifierCombination::new().is_empty());
        // Side bit alone selects no modifier
        assert!(RIGHT.is_empty());
        assert!(!(CTRL | ALT).is_empty());
    }
}
