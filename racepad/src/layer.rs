//! Mode (layer) state machine.
//!
//! The pad has three modes that are cycled in a fixed order, there is no way
//! to jump to a mode directly. Leaving Utility mode always stops the jiggler,
//! see [`LayerState::advance`].
use crate::jiggler::JigglerState;

/// Number of modes
pub const NUM_MODE: usize = 3;

/// The active operating context of the pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    /// In-car controls
    #[default]
    Driving = 0,
    /// Pit strategy and black box navigation
    Pit = 1,
    /// Desktop shortcuts, media keys and the mouse jiggler
    Utility = 2,
}

impl Mode {
    /// All modes in cycle order
    pub const ALL: [Mode; NUM_MODE] = [Mode::Driving, Mode::Pit, Mode::Utility];

    /// Index of the mode in the layout tables
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The mode after `self` in cycle order
    pub const fn next(self) -> Mode {
        match self {
            Mode::Driving => Mode::Pit,
            Mode::Pit => Mode::Utility,
            Mode::Utility => Mode::Driving,
        }
    }

    /// Name shown on the status display
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Driving => "Driving",
            Mode::Pit => "Pit",
            Mode::Utility => "Utility",
        }
    }
}

/// Holds the active mode.
#[derive(Debug, Default)]
pub struct LayerState {
    mode: Mode,
}

impl LayerState {
    pub const fn new() -> Self {
        Self { mode: Mode::Driving }
    }

    pub fn current(&self) -> Mode {
        self.mode
    }

    /// Switch to the next mode and return it.
    ///
    /// The jiggler is stopped in the same call whenever the new mode is not
    /// Utility, so no caller can observe a running jiggler outside Utility.
    pub fn advance(&mut self, jiggler: &mut JigglerState) -> Mode {
        self.mode = self.mode.next();
        if self.mode != Mode::Utility && jiggler.is_enabled() {
            debug!("Leaving utility mode, stopping jiggler");
            jiggler.disable();
        }
        info!("Switched to mode: {:?}", self.mode);
        self.mode
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::clock::Timestamp;

    #[test]
    fn test_cycle_order() {
        let mut layer = LayerState::new();
        let mut jiggler = JigglerState::new();
        assert_eq!(layer.current(), Mode::Driving);
        assert_eq!(layer.advance(&mut jiggler), Mode::Pit);
        assert_eq!(layer.advance(&mut jiggler), Mode::Utility);
        assert_eq!(layer.advance(&mut jiggler), Mode::Driving);
    }

    #[test]
    fn test_three_advances_return_to_start() {
        let mut jiggler = JigglerState::new();
        for start in Mode::ALL {
            let mut layer = LayerState { mode: start };
            for _ in 0..3 {
                layer.advance(&mut jiggler);
            }
            assert_eq!(layer.current(), start);
        }
    }

    #[test]
    fn test_leaving_utility_stops_jiggler() {
        let mut layer = LayerState { mode: Mode::Utility };
        let mut jiggler = JigglerState::new();
        jiggler.enable(Timestamp::from_millis(0));

        assert_eq!(layer.advance(&mut jiggler), Mode::Driving);
        assert!(!jiggler.is_enabled());
    }

    #[test]
    fn test_mode_index_matches_cycle() {
        for (i, mode) in Mode::ALL.iter().enumerate() {
            assert_eq!(mode.index(), i);
            assert_eq!(mode.next(), Mode::ALL[(i + 1) % NUM_MODE]);
        }
    }
}
