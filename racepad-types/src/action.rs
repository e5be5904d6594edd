//! Actions bound to pad inputs.
//!
//! - [`Action`] - what a single key position (or one encoder direction) does
//! - [`EncoderAction`] - the pair of actions bound to the rotary encoder

use crate::keycode::KeyCode;
use crate::modifier::ModifierCombination;

/// Pointer axis of a synthetic mouse motion.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
}

/// A binding stored in the layout.
///
/// `CycleMode` and `ToggleJiggler` are reserved: they are intercepted by the
/// event router and never reach the host.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Nothing bound.
    #[default]
    NoOp,
    /// Tap a key with the given modifiers held.
    EmitKey(KeyCode, ModifierCombination),
    /// Move the pointer one step along `axis`, in the direction of the sign (+1 or -1).
    EmitMouseMove(Axis, i8),
    /// Switch to the next mode.
    CycleMode,
    /// Start or stop the mouse jiggler.
    ToggleJiggler,
}

impl Action {
    /// Returns `true` for the actions handled by the pad itself.
    pub fn is_reserved(&self) -> bool {
        matches!(self, Action::CycleMode | Action::ToggleJiggler)
    }
}

/// EncoderAction is the action at a encoder position, stored in encoder_map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderAction {
    clockwise: Action,
    counter_clockwise: Action,
}

impl Default for EncoderAction {
    fn default() -> Self {
        Self {
            clockwise: Action::NoOp,
            counter_clockwise: Action::NoOp,
        }
    }
}

impl EncoderAction {
    /// Create a new encoder action.
    pub const fn new(clockwise: Action, counter_clockwise: Action) -> Self {
        Self {
            clockwise,
            counter_clockwise,
        }
    }

    /// Get the clockwise action.
    pub fn clockwise(&self) -> Action {
        self.clockwise
    }

    /// Get the counter clockwise action.
    pub fn counter_clockwise(&self) -> Action {
        self.counter_clockwise
    }
}
