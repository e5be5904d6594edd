//! Mouse jiggler.
//!
//! While enabled, the jiggler nudges the pointer left and right on the
//! scheduler tick so the host never goes idle. It only runs in
//! [`Mode::Utility`]: it can only be switched on there, and
//! [`LayerState::advance`](crate::layer::LayerState::advance) switches it off
//! when the pad leaves that mode.
use embassy_time::Duration;
use racepad_types::action::{Action, Axis};

use crate::clock::Timestamp;
use crate::config::JigglerConfig;
use crate::layer::Mode;

/// Runtime state of the jiggler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JigglerState {
    enabled: bool,
    /// Sign of the next motion, +1 or -1
    direction: i8,
    /// Time of the last motion, or of the enabling toggle
    last_fire: Timestamp,
}

impl Default for JigglerState {
    fn default() -> Self {
        Self::new()
    }
}

impl JigglerState {
    pub const fn new() -> Self {
        Self {
            enabled: false,
            direction: 1,
            last_fire: Timestamp::from_millis(0),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn direction(&self) -> i8 {
        self.direction
    }

    pub fn last_fire(&self) -> Timestamp {
        self.last_fire
    }

    /// Enable the jiggler, the first motion comes one full interval after `now`.
    pub(crate) fn enable(&mut self, now: Timestamp) {
        self.enabled = true;
        self.last_fire = now;
    }

    pub(crate) fn disable(&mut self) {
        self.enabled = false;
    }

    /// Record a motion at `now` and flip the direction for the next one.
    fn fire(&mut self, now: Timestamp) -> i8 {
        let direction = self.direction;
        self.direction = -self.direction;
        self.last_fire = now;
        direction
    }
}

/// Jiggler engine, decides when a motion is due.
#[derive(Debug, Clone, Copy)]
pub struct Jiggler {
    interval: Duration,
}

impl Default for Jiggler {
    fn default() -> Self {
        Self::new(JigglerConfig::default())
    }
}

impl Jiggler {
    pub fn new(config: JigglerConfig) -> Self {
        Self {
            interval: config.interval,
        }
    }

    /// Flip the jiggler on or off. Only has an effect in Utility mode.
    ///
    /// Returns the enabled flag after the call.
    pub fn toggle(&self, state: &mut JigglerState, mode: Mode, now: Timestamp) -> bool {
        if mode != Mode::Utility {
            debug!("Jiggler toggle ignored in mode {:?}", mode);
            return state.enabled;
        }
        if state.enabled {
            state.disable();
        } else {
            state.enable(now);
        }
        info!("Jiggler enabled: {}", state.enabled);
        state.enabled
    }

    /// Called on every scheduler tick, returns the motion to emit if one is due.
    pub fn on_tick(&self, state: &mut JigglerState, mode: Mode, now: Timestamp) -> Option<Action> {
        if !state.enabled || mode != Mode::Utility {
            return None;
        }
        if !now.has_elapsed(state.last_fire, self.interval) {
            return None;
        }
        let direction = state.fire(now);
        trace!("Jiggler fired, direction {}", direction);
        Some(Action::EmitMouseMove(Axis::X, direction))
    }
}
