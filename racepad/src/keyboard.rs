use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Ticker};
use racepad_types::action::Action;

use crate::channel::INPUT_EVENT_CHANNEL;
use crate::clock::{Clock, Timestamp};
use crate::config::PadConfig;
use crate::display::{DisplayAdapter, NoopDisplay, StatusDisplay};
use crate::encoder::EncoderDispatcher;
use crate::event::InputEvent;
use crate::hid::{HostTransport, emit_action};
use crate::input_device::Runnable;
use crate::jiggler::Jiggler;
use crate::keymap::KeyMap;
use crate::layer::Mode;
use crate::state::PadState;

/// The event router of the pad.
///
/// Owns the binding table and all pad state, and exposes one synchronous
/// entry point per kind of input. Every entry point runs to completion and
/// never blocks. Key presses bound to [`Action::CycleMode`] or
/// [`Action::ToggleJiggler`] are handled here, everything else is handed to
/// the host transport.
pub struct Keyboard<T: HostTransport, C: Clock, D: StatusDisplay = NoopDisplay> {
    keymap: KeyMap,
    state: PadState,
    jiggler: Jiggler,
    display: DisplayAdapter<D>,
    transport: T,
    clock: C,
    tick_interval: Duration,
}

impl<T: HostTransport, C: Clock> Keyboard<T, C, NoopDisplay> {
    pub fn new(keymap: KeyMap, transport: T, clock: C, config: PadConfig) -> Self {
        Self::new_with_display(keymap, transport, clock, NoopDisplay, config)
    }
}

impl<T: HostTransport, C: Clock, D: StatusDisplay> Keyboard<T, C, D> {
    pub fn new_with_display(keymap: KeyMap, transport: T, clock: C, display: D, config: PadConfig) -> Self {
        Self {
            keymap,
            state: PadState::new(),
            jiggler: Jiggler::new(config.jiggler),
            display: DisplayAdapter::new(display, config.display),
            transport,
            clock,
            tick_interval: config.tick.interval,
        }
    }

    /// A key changed state. Releases are ignored.
    pub fn on_key_event(&mut self, position: u8, pressed: bool) {
        if !pressed {
            return;
        }
        let action = self.keymap.lookup_key(self.state.current(), position);
        debug!("Key {} pressed in {:?}: {:?}", position, self.state.current(), action);
        self.process_action(action);
    }

    /// One encoder detent
    pub fn on_encoder_rotate(&mut self, clockwise: bool) {
        EncoderDispatcher::new(&self.keymap).on_rotate(self.state.current(), clockwise, &mut self.transport);
    }

    /// The encoder button cycles the mode on press.
    pub fn on_encoder_button(&mut self, pressed: bool) {
        if pressed {
            self.state.advance();
        }
    }

    /// Periodic callback, drives the jiggler and the status display.
    pub fn on_scheduler_tick(&mut self, now: Timestamp) {
        let mode = self.state.current();
        if let Some(action) = self.jiggler.on_tick(&mut self.state.jiggler, mode, now) {
            emit_action(&mut self.transport, action);
        }
        self.display.on_tick(mode, now);
    }

    /// Run an action as if it came from a key press.
    pub fn process_action(&mut self, action: Action) {
        match action {
            Action::CycleMode => {
                self.state.advance();
            }
            Action::ToggleJiggler => {
                let now = self.clock.now();
                self.state.toggle_jiggler(&self.jiggler, now);
            }
            _ => emit_action(&mut self.transport, action),
        }
    }

    pub fn process_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key { position, pressed } => self.on_key_event(position, pressed),
            InputEvent::EncoderRotate { clockwise } => self.on_encoder_rotate(clockwise),
            InputEvent::EncoderButton { pressed } => self.on_encoder_button(pressed),
        }
    }

    pub fn current_mode(&self) -> Mode {
        self.state.current()
    }

    pub fn current_mode_name(&self) -> &'static str {
        self.state.current().name()
    }

    pub fn state(&self) -> &PadState {
        &self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn display(&self) -> &D {
        self.display.display()
    }
}

impl<T: HostTransport, C: Clock, D: StatusDisplay> Runnable for Keyboard<T, C, D> {
    /// Drain [`INPUT_EVENT_CHANNEL`] and fire the scheduler tick.
    async fn run(&mut self) {
        let mut ticker = Ticker::every(self.tick_interval);
        loop {
            match select(INPUT_EVENT_CHANNEL.receive(), ticker.next()).await {
                Either::First(event) => self.process_event(event),
                Either::Second(_) => {
                    let now = self.clock.now();
                    self.on_scheduler_tick(now);
                }
            }
        }
    }
}
