pub mod common;

use racepad::layer::Mode;
use racepad::layout::CYCLE_KEY_POSITION;
use racepad::types::action::Action;
use racepad::types::keycode::KeyCode;
use racepad::types::modifier::{ALT, CTRL, ModifierCombination, SHIFT};

use crate::common::{ManualClock, create_test_keyboard, key, switch_to, tap};

#[test]
fn test_driving_keys() {
    let clock = ManualClock::new(0);
    let mut keyboard = create_test_keyboard(&clock);

    for position in [0, 3, 4, 5, 15] {
        tap(&mut keyboard, position);
    }
    assert_eq!(
        keyboard.transport().emitted,
        [
            key(KeyCode::F5),
            Action::EmitKey(KeyCode::K, CTRL),
            Action::EmitKey(KeyCode::R, ALT),
            key(KeyCode::AudioVolUp),
            key(KeyCode::Escape),
        ]
    );
}

#[test]
fn test_same_position_differs_by_mode() {
    let clock = ManualClock::new(0);
    let mut keyboard = create_test_keyboard(&clock);

    let mut emitted = Vec::new();
    for mode in Mode::ALL {
        switch_to(&mut keyboard, mode);
        tap(&mut keyboard, 5);
        emitted.extend(keyboard.transport_mut().take());
    }
    assert_eq!(
        emitted,
        [
            key(KeyCode::AudioVolUp),
            Action::EmitKey(KeyCode::Equal, SHIFT),
            key(KeyCode::AudioVolDown),
        ]
    );
}

#[test]
fn test_utility_shortcuts() {
    let clock = ManualClock::new(0);
    let mut keyboard = create_test_keyboard(&clock);
    switch_to(&mut keyboard, Mode::Utility);

    for position in [0, 1, 8, 11] {
        tap(&mut keyboard, position);
    }
    assert_eq!(
        keyboard.transport().emitted,
        [
            Action::EmitKey(KeyCode::S, ModifierCombination::new().with_gui(true).with_shift(true)),
            key(KeyCode::Copy),
            key(KeyCode::End),
        ]
    );
}

#[test]
fn test_out_of_range_position() {
    let clock = ManualClock::new(0);
    let mut keyboard = create_test_keyboard(&clock);
    keyboard.on_key_event(16, true);
    keyboard.on_key_event(200, true);
    assert!(keyboard.transport().emitted.is_empty());
    assert_eq!(keyboard.current_mode(), Mode::Driving);
}

#[test]
fn test_process_action_matches_key_press() {
    let clock = ManualClock::new(0);
    let mut keyboard = create_test_keyboard(&clock);

    keyboard.process_action(Action::CycleMode);
    tap(&mut keyboard, CYCLE_KEY_POSITION);
    assert_eq!(keyboard.current_mode(), Mode::Utility);
    keyboard.process_action(key(KeyCode::Home));
    assert_eq!(keyboard.transport().emitted, [key(KeyCode::Home)]);
}
