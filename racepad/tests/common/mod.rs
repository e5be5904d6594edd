#![allow(dead_code)]

use core::cell::Cell;

use racepad::clock::{Clock, Timestamp};
use racepad::config::PadConfig;
use racepad::display::StatusDisplay;
use racepad::hid::HostTransport;
use racepad::keyboard::Keyboard;
use racepad::keymap::KeyMap;
use racepad::layer::Mode;
use racepad::types::action::{Action, Axis};
use racepad::types::keycode::KeyCode;
use racepad::types::modifier::ModifierCombination;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Transport that records every emitted action
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub emitted: Vec<Action>,
}

impl RecordingTransport {
    pub fn take(&mut self) -> Vec<Action> {
        core::mem::take(&mut self.emitted)
    }
}

impl HostTransport for RecordingTransport {
    fn emit_key(&mut self, key: KeyCode, modifiers: ModifierCombination) {
        self.emitted.push(Action::EmitKey(key, modifiers));
    }

    fn emit_mouse_move(&mut self, axis: Axis, sign: i8) {
        self.emitted.push(Action::EmitMouseMove(axis, sign));
    }
}

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    ms: Cell<u32>,
}

impl ManualClock {
    pub fn new(ms: u32) -> Self {
        Self { ms: Cell::new(ms) }
    }

    pub fn set(&self, ms: u32) {
        self.ms.set(ms);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_millis(self.ms.get())
    }
}

/// Display that keeps the text currently on screen
#[derive(Debug, Default)]
pub struct ScreenBuffer {
    pub lines: Vec<String>,
    pub redraws: usize,
}

impl StatusDisplay for ScreenBuffer {
    fn clear(&mut self) {
        self.lines.clear();
        self.redraws += 1;
    }

    fn write_line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

pub type TestKeyboard<'a> = Keyboard<RecordingTransport, &'a ManualClock>;

pub fn create_test_keyboard(clock: &ManualClock) -> TestKeyboard<'_> {
    Keyboard::new(KeyMap::default(), RecordingTransport::default(), clock, PadConfig::default())
}

/// Press and release the key at `position`
pub fn tap(keyboard: &mut TestKeyboard<'_>, position: u8) {
    keyboard.on_key_event(position, true);
    keyboard.on_key_event(position, false);
}

/// Cycle until `mode` is active
pub fn switch_to(keyboard: &mut TestKeyboard<'_>, mode: Mode) {
    while keyboard.current_mode() != mode {
        keyboard.on_encoder_button(true);
        keyboard.on_encoder_button(false);
    }
}

pub fn key(k: KeyCode) -> Action {
    Action::EmitKey(k, ModifierCombination::new())
}
