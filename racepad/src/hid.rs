//! Host side of the emit path.
//!
//! [`HostTransport`] is what the core calls to send something to the host.
//! [`ReportTransport`] implements it by building USB HID reports and queueing
//! them in [`KEYBOARD_REPORT_CHANNEL`], where a USB/BLE writer task picks
//! them up.
use embassy_sync::channel::Sender;
use racepad_types::action::{Action, Axis};
use racepad_types::keycode::KeyCode;
use racepad_types::modifier::ModifierCombination;
use usbd_hid::descriptor::{KeyboardReport, MediaKeyboardReport, MouseReport};

use crate::channel::KEYBOARD_REPORT_CHANNEL;
use crate::config::MouseConfig;
use crate::{REPORT_CHANNEL_SIZE, RawMutex};

/// Capability to deliver emitted actions to the host.
///
/// Implementations must not block, failures are handled (and swallowed) by
/// the implementation.
pub trait HostTransport {
    /// Tap `key` with `modifiers` held: a key down followed by a key up.
    fn emit_key(&mut self, key: KeyCode, modifiers: ModifierCombination);

    /// Move the pointer one fixed step along `axis`, `sign` is +1 or -1.
    fn emit_mouse_move(&mut self, axis: Axis, sign: i8);
}

impl<T: HostTransport + ?Sized> HostTransport for &mut T {
    fn emit_key(&mut self, key: KeyCode, modifiers: ModifierCombination) {
        (**self).emit_key(key, modifiers)
    }

    fn emit_mouse_move(&mut self, axis: Axis, sign: i8) {
        (**self).emit_mouse_move(axis, sign)
    }
}

/// The generic emit path: forward an action to the host.
///
/// Reserved actions are handled by [`Keyboard`](crate::keyboard::Keyboard)
/// before they get here, any that slip through (e.g. bound to the encoder)
/// are dropped.
pub(crate) fn emit_action<T: HostTransport + ?Sized>(transport: &mut T, action: Action) {
    if action.is_reserved() {
        warn!("Reserved action {:?} reached the emit path, dropped", action);
        return;
    }
    match action {
        Action::EmitKey(key, modifiers) => transport.emit_key(key, modifiers),
        Action::EmitMouseMove(axis, sign) => transport.emit_mouse_move(axis, sign),
        _ => {}
    }
}

/// HID reports queued for the host
pub enum Report {
    /// Normal keyboard hid report
    KeyboardReport(KeyboardReport),
    /// Mouse hid report
    MouseReport(MouseReport),
    /// Media keyboard report
    MediaKeyboardReport(MediaKeyboardReport),
}

/// Transport that turns emitted actions into HID reports.
pub struct ReportTransport<'a> {
    sender: Sender<'a, RawMutex, Report, REPORT_CHANNEL_SIZE>,
    move_delta: i8,
}

impl ReportTransport<'static> {
    /// Transport writing to the global [`KEYBOARD_REPORT_CHANNEL`]
    pub fn new(config: MouseConfig) -> Self {
        Self::with_sender(KEYBOARD_REPORT_CHANNEL.sender(), config)
    }
}

impl<'a> ReportTransport<'a> {
    pub fn with_sender(sender: Sender<'a, RawMutex, Report, REPORT_CHANNEL_SIZE>, config: MouseConfig) -> Self {
        Self {
            sender,
            move_delta: config.move_delta,
        }
    }

    fn send_report(&self, report: Report) {
        if self.sender.try_send(report).is_err() {
            error!("Send report error: report channel is full");
        }
    }

    fn send_keyboard_report(&self, modifier: u8, keycode: KeyCode) {
        self.send_report(Report::KeyboardReport(KeyboardReport {
            modifier,
            reserved: 0,
            leds: 0,
            keycodes: [keycode as u8, 0, 0, 0, 0, 0],
        }));
    }

    fn send_media_report(&self, usage_id: u16) {
        self.send_report(Report::MediaKeyboardReport(MediaKeyboardReport { usage_id }));
    }
}

impl HostTransport for ReportTransport<'_> {
    fn emit_key(&mut self, key: KeyCode, modifiers: ModifierCombination) {
        if let Some(consumer) = key.process_as_consumer() {
            // Modifiers have no meaning on the consumer page
            self.send_media_report(consumer as u16);
            self.send_media_report(0);
            return;
        }

        let mut modifier = modifiers.to_hid_modifier_bits();
        let keycode = if key.is_modifier() {
            modifier |= key.to_modifier_combination().to_hid_modifier_bits();
            KeyCode::No
        } else if key.is_simple_key() {
            key
        } else {
            warn!("Unsupported key: {:?}", key);
            return;
        };

        self.send_keyboard_report(modifier, keycode);
        self.send_keyboard_report(0, KeyCode::No);
    }

    fn emit_mouse_move(&mut self, axis: Axis, sign: i8) {
        let delta = self.move_delta.saturating_mul(sign.signum());
        let (x, y) = match axis {
            Axis::X => (delta, 0),
            Axis::Y => (0, delta),
        };
        self.send_report(Report::MouseReport(MouseReport {
            buttons: 0,
            x,
            y,
            wheel: 0,
            pan: 0,
        }));
    }
}
