use crate::hid::{HostTransport, emit_action};
use crate::keymap::KeyMap;
use crate::layer::Mode;

/// Resolves rotary encoder detents against the bindings of the active mode.
///
/// The dispatcher keeps no state: the direction comes decoded from the
/// encoder driver and the mode is read from the pad state on every call.
pub struct EncoderDispatcher<'a> {
    keymap: &'a KeyMap,
}

impl<'a> EncoderDispatcher<'a> {
    pub fn new(keymap: &'a KeyMap) -> Self {
        Self { keymap }
    }

    /// Emit the action bound to one detent in `clockwise` direction.
    pub fn on_rotate<T: HostTransport + ?Sized>(&self, mode: Mode, clockwise: bool, transport: &mut T) {
        let action = self.keymap.lookup_encoder(mode, clockwise);
        debug!("Encoder rotated, clockwise: {}, action: {:?}", clockwise, action);
        emit_action(transport, action);
    }
}

#[cfg(test)]
mod test {
    use racepad_types::action::{Action, Axis, EncoderAction};
    use racepad_types::keycode::KeyCode;
    use racepad_types::modifier::{ModifierCombination, SHIFT};

    use super::*;
    use crate::keymap::NUM_KEY;
    use crate::layer::NUM_MODE;

    #[derive(Default)]
    struct Sink {
        keys: Vec<(KeyCode, ModifierCombination)>,
        moves: Vec<(Axis, i8)>,
    }

    impl HostTransport for Sink {
        fn emit_key(&mut self, key: KeyCode, modifiers: ModifierCombination) {
            self.keys.push((key, modifiers));
        }

        fn emit_mouse_move(&mut self, axis: Axis, sign: i8) {
            self.moves.push((axis, sign));
        }
    }

    #[test]
    fn test_pit_encoder() {
        let keymap = KeyMap::default();
        let dispatcher = EncoderDispatcher::new(&keymap);
        let mut sink = Sink::default();
        dispatcher.on_rotate(Mode::Pit, true, &mut sink);
        dispatcher.on_rotate(Mode::Pit, false, &mut sink);
        assert_eq!(
            sink.keys,
            vec![(KeyCode::Tab, ModifierCombination::new()), (KeyCode::Tab, SHIFT)]
        );
    }

    #[test]
    fn test_reserved_encoder_binding_is_dropped() {
        let mut encoders = [EncoderAction::default(); NUM_MODE];
        encoders[0] = EncoderAction::new(Action::CycleMode, Action::EmitMouseMove(Axis::Y, 1));
        let keymap = KeyMap::new([[Action::NoOp; NUM_KEY]; NUM_MODE], encoders);
        let dispatcher = EncoderDispatcher::new(&keymap);
        let mut sink = Sink::default();

        dispatcher.on_rotate(Mode::Driving, true, &mut sink);
        assert!(sink.keys.is_empty() && sink.moves.is_empty());

        dispatcher.on_rotate(Mode::Driving, false, &mut sink);
        assert_eq!(sink.moves, vec![(Axis::Y, 1)]);
    }
}
