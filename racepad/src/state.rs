use crate::clock::Timestamp;
use crate::jiggler::{Jiggler, JigglerState};
use crate::layer::{LayerState, Mode};

/// All mutable state of the pad.
///
/// Owned by [`Keyboard`](crate::keyboard::Keyboard) and handed to each
/// component by reference, so the core can be driven without any globals.
/// Invariant: the jiggler is only ever enabled in [`Mode::Utility`].
#[derive(Debug, Default)]
pub struct PadState {
    pub(crate) layer: LayerState,
    pub(crate) jiggler: JigglerState,
}

impl PadState {
    pub const fn new() -> Self {
        Self {
            layer: LayerState::new(),
            jiggler: JigglerState::new(),
        }
    }

    /// Current mode
    pub fn current(&self) -> Mode {
        self.layer.current()
    }

    /// Switch to the next mode, stopping the jiggler when leaving Utility.
    pub fn advance(&mut self) -> Mode {
        self.layer.advance(&mut self.jiggler)
    }

    /// Toggle the jiggler, a no-op outside Utility mode.
    pub fn toggle_jiggler(&mut self, jiggler: &Jiggler, now: Timestamp) -> bool {
        jiggler.toggle(&mut self.jiggler, self.layer.current(), now)
    }

    pub fn jiggler(&self) -> &JigglerState {
        &self.jiggler
    }
}
