//! Seams between the pad core and the tasks around it.
use crate::channel::send_input_event;
use crate::event::InputEvent;

/// A long running task
pub trait Runnable {
    async fn run(&mut self);
}

/// A source of raw input, such as a key matrix scanner or an encoder decoder.
///
/// Debouncing and pulse decoding happen inside the device, it only yields
/// finished [`InputEvent`]s.
pub trait InputDevice {
    /// Wait for the next event from the device
    async fn read_event(&mut self) -> InputEvent;
}

/// Forwards every event of an [`InputDevice`] into
/// [`INPUT_EVENT_CHANNEL`](crate::channel::INPUT_EVENT_CHANNEL).
pub struct InputForwarder<'a, D: InputDevice> {
    device: &'a mut D,
}

impl<'a, D: InputDevice> InputForwarder<'a, D> {
    pub fn new(device: &'a mut D) -> Self {
        Self { device }
    }
}

impl<D: InputDevice> Runnable for InputForwarder<'_, D> {
    async fn run(&mut self) {
        loop {
            let event = self.device.read_event().await;
            send_input_event(event).await;
        }
    }
}
