/// Raw input observed by the pad, already debounced.
///
/// Matrix scanning and encoder decoding live outside of this crate, they
/// only publish these events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// A key changed state. `position` is row-major over the 4x4 grid.
    Key { position: u8, pressed: bool },
    /// One detent of the rotary encoder
    EncoderRotate { clockwise: bool },
    /// The encoder's push button changed state
    EncoderButton { pressed: bool },
}

impl InputEvent {
    pub const fn key(position: u8, pressed: bool) -> Self {
        Self::Key { position, pressed }
    }
}
