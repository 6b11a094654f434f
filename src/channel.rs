//! Single-slot hand-off of press events between execution contexts.
//!
//! The producer context runs the decoder at its sampling cadence and pushes
//! each completed press; the consumer context drains at its own, typically
//! much slower, cadence. The slot enforces backpressure: a full slot stalls
//! the producer until the consumer drains, so no event is overwritten or
//! dropped.

use crate::types::PressEvent;
use heapless::spsc::{Consumer, Producer, Queue};

/// Bounded hand-off holding at most one undelivered [`PressEvent`].
///
/// Split once into a sender and a receiver half, one per execution context.
/// Construction is `const`, so the channel can live in a `static` shared
/// between cores or tasks.
pub struct EventChannel {
    // Queue<_, 2> keeps one usable slot; the spsc ring reserves one index
    // to tell full from empty.
    queue: Queue<PressEvent, 2>,
}

impl EventChannel {
    /// Creates an empty channel.
    pub const fn new() -> Self {
        Self {
            queue: Queue::new(),
        }
    }

    /// Splits the channel into its producer and consumer halves.
    pub fn split(&mut self) -> (EventSender<'_>, EventReceiver<'_>) {
        let (producer, consumer) = self.queue.split();
        (EventSender { producer }, EventReceiver { consumer })
    }
}

impl Default for EventChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer half of an [`EventChannel`].
pub struct EventSender<'a> {
    producer: Producer<'a, PressEvent>,
}

impl EventSender<'_> {
    /// Hands an event to the consumer context, waiting for a free slot.
    ///
    /// Spins while an earlier event is still undelivered. The wait is
    /// unbounded when the consumer never drains; callers that need a
    /// timeout must poll [`EventReceiver::try_receive`] from their own
    /// bounded loop instead of relying on the channel.
    pub fn send(&mut self, event: PressEvent) {
        let mut event = event;
        while let Err(returned) = self.producer.enqueue(event) {
            event = returned;
            core::hint::spin_loop();
        }
    }

    /// Returns true if a previously sent event is still undelivered.
    pub fn is_full(&self) -> bool {
        !self.producer.ready()
    }
}

/// Consumer half of an [`EventChannel`].
pub struct EventReceiver<'a> {
    consumer: Consumer<'a, PressEvent>,
}

impl EventReceiver<'_> {
    /// Takes the waiting event, if any, without blocking.
    pub fn try_receive(&mut self) -> Option<PressEvent> {
        self.consumer.dequeue()
    }
}
