//! Exposed channels which can be used to share data across tasks

use embassy_sync::channel::Channel;
pub use embassy_sync::{blocking_mutex, channel};

use crate::event::InputEvent;
use crate::hid::Report;
use crate::{EVENT_CHANNEL_SIZE, REPORT_CHANNEL_SIZE, RawMutex};

/// Channel for input events: key presses, encoder turns and encoder button presses
pub static INPUT_EVENT_CHANNEL: Channel<RawMutex, InputEvent, EVENT_CHANNEL_SIZE> = Channel::new();
/// Channel for reports sent to the host
pub static KEYBOARD_REPORT_CHANNEL: Channel<RawMutex, Report, REPORT_CHANNEL_SIZE> = Channel::new();

/// Publish an input event, waiting for a free slot if the channel is full.
pub async fn send_input_event(event: InputEvent) {
    INPUT_EVENT_CHANNEL.send(event).await;
}

#[cfg(test)]
mod test {
    use embassy_futures::block_on;
    use embassy_futures::join::join;

    use super::*;

    #[test]
    fn test_send_input_event_waits_when_full() {
        INPUT_EVENT_CHANNEL.clear();
        for _ in 0..EVENT_CHANNEL_SIZE {
            block_on(send_input_event(InputEvent::EncoderRotate { clockwise: true }));
        }
        assert_eq!(INPUT_EVENT_CHANNEL.len(), EVENT_CHANNEL_SIZE);

        // The cycle key press is held back until the consumer frees a slot
        let (_, first) = block_on(join(
            send_input_event(InputEvent::key(12, true)),
            INPUT_EVENT_CHANNEL.receive(),
        ));
        assert_eq!(first, InputEvent::EncoderRotate { clockwise: true });

        let mut drained = Vec::new();
        while let Ok(event) = INPUT_EVENT_CHANNEL.try_receive() {
            drained.push(event);
        }
        assert_eq!(drained.len(), EVENT_CHANNEL_SIZE);
        assert_eq!(drained.last(), Some(&InputEvent::key(12, true)));
    }
}
