use crate::event::PointerEvent;
use std::cell::{Cell, RefCell};

/// Trait for receiving published pen events.
pub trait InkSink {
    fn on_event(&mut self, event: &PointerEvent);
}

impl<F> InkSink for F
where
    F: FnMut(&PointerEvent),
{
    fn on_event(&mut self, event: &PointerEvent) {
        self(event)
    }
}

/// Sink that hands each event to a transport as its structured payload.
pub struct PayloadSink<F> {
    send: F,
}

impl<F> PayloadSink<F>
where
    F: FnMut(serde_json::Value),
{
    pub fn new(send: F) -> Self {
        Self { send }
    }
}

impl<F> InkSink for PayloadSink<F>
where
    F: FnMut(serde_json::Value),
{
    fn on_event(&mut self, event: &PointerEvent) {
        (self.send)(event.to_payload());
    }
}

/// Single-subscriber publisher.
///
/// Holds at most one sink. Subscribing replaces the current sink without
/// notifying it; publishing with no sink drops the event.
///
/// The publisher is `!Send`/`!Sync`: it lives on the window's message thread and
/// is shared with the interceptor through an `Rc`. A host that subscribes from
/// another thread must marshal onto the message thread first.
#[derive(Default)]
pub struct EventPublisher {
    slot: RefCell<Option<Box<dyn InkSink>>>,
    // Bumped on every subscribe/unsubscribe so `push` can tell whether the sink it
    // detached was replaced while it was delivering.
    generation: Cell<u64>,
}

impl EventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `sink`, discarding any previous one.
    pub fn subscribe(&self, sink: impl InkSink + 'static) {
        let previous = self.slot.replace(Some(Box::new(sink)));
        self.bump();
        if previous.is_some() {
            log::debug!("ink subscriber replaced");
        } else {
            log::debug!("ink subscriber attached");
        }
    }

    /// Clear the sink. Does nothing if there is none.
    pub fn unsubscribe(&self) {
        if self.slot.take().is_some() {
            log::debug!("ink subscriber detached");
        }
        self.bump();
    }

    pub fn has_subscriber(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Deliver `event` synchronously to the current sink, if any.
    pub fn push(&self, event: &PointerEvent) {
        let Some(mut sink) = self.slot.take() else {
            return;
        };
        let generation = self.generation.get();

        // The slot is empty while delivering so the sink may re-enter subscribe/unsubscribe.
        sink.on_event(event);

        if self.generation.get() == generation {
            *self.slot.borrow_mut() = Some(sink);
        }
    }

    fn bump(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}
