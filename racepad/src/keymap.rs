use racepad_types::action::{Action, EncoderAction};

use crate::layer::{Mode, NUM_MODE};
use crate::layout::{get_default_encoder_map, get_default_keymap};

/// Number of physical keys
pub const NUM_KEY: usize = 16;

/// KeyMap is the binding table of the pad: one layer of key actions plus
/// one encoder action per mode.
///
/// The table is fixed at build time. Lookups are total, anything that isn't
/// bound resolves to [`Action::NoOp`].
#[derive(Debug, Clone)]
pub struct KeyMap {
    layers: [[Action; NUM_KEY]; NUM_MODE],
    encoders: [EncoderAction; NUM_MODE],
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new(get_default_keymap(), get_default_encoder_map())
    }
}

impl KeyMap {
    pub const fn new(layers: [[Action; NUM_KEY]; NUM_MODE], encoders: [EncoderAction; NUM_MODE]) -> Self {
        Self { layers, encoders }
    }

    /// Fetch the action at `position` in the layer of `mode`.
    pub fn lookup_key(&self, mode: Mode, position: u8) -> Action {
        self.layers[mode.index()]
            .get(position as usize)
            .copied()
            .unwrap_or(Action::NoOp)
    }

    /// Fetch the encoder action of `mode` for one rotation direction.
    pub fn lookup_encoder(&self, mode: Mode, clockwise: bool) -> Action {
        let encoder = self.encoders[mode.index()];
        if clockwise {
            encoder.clockwise()
        } else {
            encoder.counter_clockwise()
        }
    }
}
