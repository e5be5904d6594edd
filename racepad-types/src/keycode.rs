//! Keycodes the pad can emit.
//!
//! [`KeyCode`] follows the USB HID keyboard/keypad usage page. A handful of
//! media usages live past the keypad page (`AudioMute`..`MediaPlayPause`);
//! those are not valid in a boot keyboard report and are translated to the
//! consumer page by [`KeyCode::process_as_consumer`].
use strum::FromRepr;

use crate::modifier::ModifierCombination;

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyCode {
    /// Reserved, no-key.
    No = 0x00,
    // Letters
    A = 0x04,
    B = 0x05,
    C = 0x06,
    D = 0x07,
    E = 0x08,
    F = 0x09,
    G = 0x0A,
    H = 0x0B,
    I = 0x0C,
    J = 0x0D,
    K = 0x0E,
    L = 0x0F,
    M = 0x10,
    N = 0x11,
    O = 0x12,
    P = 0x13,
    Q = 0x14,
    R = 0x15,
    S = 0x16,
    T = 0x17,
    U = 0x18,
    V = 0x19,
    W = 0x1A,
    X = 0x1B,
    Y = 0x1C,
    Z = 0x1D,
    // Number row
    Kc1 = 0x1E,
    Kc2 = 0x1F,
    Kc3 = 0x20,
    Kc4 = 0x21,
    Kc5 = 0x22,
    Kc6 = 0x23,
    Kc7 = 0x24,
    Kc8 = 0x25,
    Kc9 = 0x26,
    Kc0 = 0x27,
    Enter = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    /// `-` and `_`
    Minus = 0x2D,
    /// `=` and `+`
    Equal = 0x2E,
    /// `[` and `{`
    LeftBracket = 0x2F,
    /// `]` and `}`
    RightBracket = 0x30,
    Backslash = 0x31,
    Semicolon = 0x33,
    Quote = 0x34,
    Grave = 0x35,
    Comma = 0x36,
    Dot = 0x37,
    Slash = 0x38,
    CapsLock = 0x39,
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,
    PrintScreen = 0x46,
    ScrollLock = 0x47,
    Pause = 0x48,
    Insert = 0x49,
    Home = 0x4A,
    PageUp = 0x4B,
    Delete = 0x4C,
    End = 0x4D,
    PageDown = 0x4E,
    Right = 0x4F,
    Left = 0x50,
    Down = 0x51,
    Up = 0x52,
    NumLock = 0x53,
    KpSlash = 0x54,
    KpAsterisk = 0x55,
    KpMinus = 0x56,
    KpPlus = 0x57,
    KpEnter = 0x58,
    Kp1 = 0x59,
    Kp2 = 0x5A,
    Kp3 = 0x5B,
    Kp4 = 0x5C,
    Kp5 = 0x5D,
    Kp6 = 0x5E,
    Kp7 = 0x5F,
    Kp8 = 0x60,
    Kp9 = 0x61,
    Kp0 = 0x62,
    KpDot = 0x63,
    Application = 0x65,
    F13 = 0x68,
    F14 = 0x69,
    F15 = 0x6A,
    F16 = 0x6B,
    F17 = 0x6C,
    F18 = 0x6D,
    F19 = 0x6E,
    F20 = 0x6F,
    F21 = 0x70,
    F22 = 0x71,
    F23 = 0x72,
    F24 = 0x73,
    // Editing keys, honoured by most desktop hosts
    Undo = 0x7A,
    Cut = 0x7B,
    Copy = 0x7C,
    Paste = 0x7D,
    Find = 0x7E,
    // Media usages, sent on the consumer page
    AudioMute = 0xA8,
    AudioVolUp = 0xA9,
    AudioVolDown = 0xAA,
    MediaNextTrack = 0xAB,
    MediaPrevTrack = 0xAC,
    MediaStop = 0xAD,
    MediaPlayPause = 0xAE,
    // Modifiers
    LCtrl = 0xE0,
    LShift = 0xE1,
    LAlt = 0xE2,
    LGui = 0xE3,
    RCtrl = 0xE4,
    RShift = 0xE5,
    RAlt = 0xE6,
    RGui = 0xE7,
}

impl KeyCode {
    /// Returns `true` if the keycode fits in the keycode array of a boot keyboard report
    pub fn is_simple_key(self) -> bool {
        KeyCode::No <= self && self <= KeyCode::Find
    }

    /// Returns `true` if the keycode is a modifier keycode
    pub fn is_modifier(self) -> bool {
        KeyCode::LCtrl <= self && self <= KeyCode::RGui
    }

    /// Modifier combination equivalent to a modifier keycode, empty for any other key
    pub fn to_modifier_combination(self) -> ModifierCombination {
        match self {
            KeyCode::LCtrl => ModifierCombination::new().with_ctrl(true),
            KeyCode::LShift => ModifierCombination::new().with_shift(true),
            KeyCode::LAlt => ModifierCombination::new().with_alt(true),
            KeyCode::LGui => ModifierCombination::new().with_gui(true),
            KeyCode::RCtrl => ModifierCombination::new().with_ctrl(true).with_right(true),
            KeyCode::RShift => ModifierCombination::new().with_shift(true).with_right(true),
            KeyCode::RAlt => ModifierCombination::new().with_alt(true).with_right(true),
            KeyCode::RGui => ModifierCombination::new().with_gui(true).with_right(true),
            _ => ModifierCombination::new(),
        }
    }

    /// Media keycodes are sent through the consumer page
    pub fn process_as_consumer(self) -> Option<ConsumerKey> {
        match self {
            KeyCode::AudioMute => Some(ConsumerKey::Mute),
            KeyCode::AudioVolUp => Some(ConsumerKey::VolumeIncrement),
            KeyCode::AudioVolDown => Some(ConsumerKey::VolumeDecrement),
            KeyCode::MediaNextTrack => Some(ConsumerKey::NextTrack),
            KeyCode::MediaPrevTrack => Some(ConsumerKey::PrevTrack),
            KeyCode::MediaStop => Some(ConsumerKey::StopPlay),
            KeyCode::MediaPlayPause => Some(ConsumerKey::PlayPause),
            _ => None,
        }
    }
}

impl From<u8> for KeyCode {
    fn from(value: u8) -> Self {
        Self::from_repr(value).unwrap_or(KeyCode::No)
    }
}

/// Keys in consumer page
/// Ref: <https://www.usb.org/sites/default/files/documents/hut1_12v2.pdf#page=75>
#[non_exhaustive]
#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsumerKey {
    No = 0x00,
    NextTrack = 0xB5,
    PrevTrack = 0xB6,
    StopPlay = 0xB7,
    PlayPause = 0xCD,
    Mute = 0xE2,
    VolumeIncrement = 0xE9,
    VolumeDecrement = 0xEA,
}
