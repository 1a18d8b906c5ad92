//! Input handling module for the stopwatch buttons
//!
//! The buttons are active low with pull-ups. They are sampled on a fixed
//! period; sampling slower than the contact bounce is what debounces them.
//! Each edge becomes one [`ButtonEvent`] in a bounded queue.

use embedded_hal::digital::InputPin;
use heapless::spsc::Queue;
use log::{debug, warn};

// Re-export the public types
pub mod types;
pub use types::*;

/// Sampling period in milliseconds
pub const POLL_PERIOD_MS: u32 = 30;

/// Queue slots; a `heapless` queue holds one less than its size
const QUEUE_SIZE: usize = 8;

/// One button and the last level seen on its pin
struct ButtonInput<P> {
    button: Button,
    pin: P,
    last_state: ButtonState,
}

/// Polls a fixed set of buttons and queues their edges
pub struct ButtonPoller<P, const N: usize> {
    inputs: [ButtonInput<P>; N],
    event_queue: Queue<ButtonEvent, QUEUE_SIZE>,
}

impl<P: InputPin, const N: usize> ButtonPoller<P, N> {
    /// Create a poller. Every button starts released, so a button held at
    /// boot reports a press on the first poll.
    pub fn new(buttons: [(Button, P); N]) -> Self {
        Self {
            inputs: buttons.map(|(button, pin)| ButtonInput {
                button,
                pin,
                last_state: ButtonState::Released,
            }),
            event_queue: Queue::new(),
        }
    }

    /// Sample every pin once and queue an event per edge.
    ///
    /// Returns the number of events queued. A pin that cannot be read keeps
    /// its previous state.
    pub fn poll(&mut self) -> usize {
        let mut queued = 0;
        for input in &mut self.inputs {
            let current_state = match input.pin.is_high() {
                Ok(high) => ButtonState::from_level(high),
                Err(e) => {
                    warn!("Failed to read {} button: {:?}", input.button, e);
                    continue;
                }
            };
            if current_state == input.last_state {
                continue;
            }
            input.last_state = current_state;

            let event = match current_state {
                ButtonState::Pressed => ButtonEvent::Pressed(input.button),
                ButtonState::Released => ButtonEvent::Released(input.button),
            };
            debug!("{}", event);
            if self.event_queue.enqueue(event).is_err() {
                warn!("Button event queue full!");
            } else {
                queued += 1;
            }
        }
        queued
    }

    /// Oldest queued event
    pub fn next_event(&mut self) -> Option<ButtonEvent> {
        self.event_queue.dequeue()
    }

    /// Oldest queued press, dropping releases on the way
    pub fn next_press(&mut self) -> Option<Button> {
        while let Some(event) = self.event_queue.dequeue() {
            if let ButtonEvent::Pressed(button) = event {
                return Some(button);
            }
        }
        None
    }
}
