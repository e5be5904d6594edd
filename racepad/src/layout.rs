//! The default sim racing layout.
//!
//! Positions are numbered row by row over the 4x4 grid, 0 is the top left
//! key. Position 12 cycles the mode in every layer.
use racepad_types::action::{Action, EncoderAction};
use racepad_types::modifier::ModifierCombination;

use crate::keymap::NUM_KEY;
use crate::layer::NUM_MODE;
use crate::{a, alt, ctrl, encoder, k, layer, shifted, wm};

/// Position of the mode cycle key
pub const CYCLE_KEY_POSITION: u8 = 12;
/// Position of the jiggler toggle in Utility mode
pub const JIGGLER_KEY_POSITION: u8 = 10;

const GUI_SHIFT: ModifierCombination = ModifierCombination::new().with_gui(true).with_shift(true);

#[rustfmt::skip]
const DEFAULT_KEYMAP: [[Action; NUM_KEY]; NUM_MODE] = [
    // Driving
    layer!([
        [k!(F5),          k!(F6),         k!(S),            ctrl!(K)],
        [alt!(R),         k!(AudioVolUp), k!(AudioVolDown), shifted!(W)],
        [k!(PageUp),      k!(H),          k!(Down),         k!(Up)],
        [a!(CycleMode),   k!(Minus),      k!(Equal),        k!(Escape)]
    ]),
    // Pit
    layer!([
        [ctrl!(A),        ctrl!(F),       ctrl!(A),         k!(F7)],
        [k!(Tab),         shifted!(Equal), k!(Delete),      k!(Down)],
        [k!(Up),          k!(Minus),      k!(Kc0),          k!(P)],
        [a!(CycleMode),   k!(Kc4),        k!(Kc3),          k!(Kc2)]
    ]),
    // Utility. End and the jiggler toggle trade places with the device's
    // original table, the toggle lives at position 10.
    layer!([
        [wm!(S, GUI_SHIFT), k!(Copy),       k!(Cut),          k!(AudioVolUp)],
        [k!(Undo),          k!(AudioVolDown), k!(MediaPlayPause), k!(AudioMute)],
        [k!(End),           k!(Home),       a!(ToggleJiggler), a!(NoOp)],
        [a!(CycleMode),     k!(Down),       k!(Left),         k!(Right)]
    ]),
];

#[rustfmt::skip]
const DEFAULT_ENCODER_MAP: [EncoderAction; NUM_MODE] = [
    // Driving: brake bias
    encoder!(k!(LeftBracket), k!(RightBracket)),
    // Pit: black box next/prev
    encoder!(k!(Tab), shifted!(Tab)),
    // Utility: volume
    encoder!(k!(AudioVolUp), k!(AudioVolDown)),
];

pub const fn get_default_keymap() -> [[Action; NUM_KEY]; NUM_MODE] {
    DEFAULT_KEYMAP
}

pub const fn get_default_encoder_map() -> [EncoderAction; NUM_MODE] {
    DEFAULT_ENCODER_MAP
}
