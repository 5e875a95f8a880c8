use std::collections::VecDeque;
use std::sync::mpsc::{Receiver, TryRecvError};

use crate::event::Event;

/// FIFO event queue for the main loop.
///
/// Each frame runs the same cycle:
/// 1. **Publish**: terminal input and ticker output are pushed into the queue.
/// 2. **Drain**: all pending events are pulled out in arrival order.
/// 3. **Apply**: each event is turned into a session action or ignored.
pub struct EventBus {
    queue: VecDeque<Event>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    pub fn publish(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// Move everything currently waiting on `rx` into the queue without
    /// blocking. Returns `false` once the sending side is gone.
    pub fn collect_from(&mut self, rx: &Receiver<Event>) -> bool {
        loop {
            match rx.try_recv() {
                Ok(event) => self.queue.push_back(event),
                Err(TryRecvError::Empty) => return true,
                Err(TryRecvError::Disconnected) => return false,
            }
        }
    }

    /// Remove and return all pending events, preserving insertion order.
    pub fn drain(&mut self) -> Vec<Event> {
        self.queue.drain(..).collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use std::sync::mpsc;

    #[test]
    fn drain_returns_all_and_empties() {
        let mut bus = EventBus::new();
        bus.publish(Event::Tick { now: Local::now() });
        bus.publish(Event::Resize { cols: 80, rows: 24 });
        assert!(bus.has_pending());
        let events = bus.drain();
        assert_eq!(events.len(), 2);
        assert!(!bus.has_pending());
    }

    #[test]
    fn drain_on_empty_returns_empty() {
        let mut bus = EventBus::new();
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn preserves_order() {
        let mut bus = EventBus::new();
        bus.publish(Event::Resize { cols: 80, rows: 24 });
        bus.publish(Event::Tick { now: Local::now() });
        bus.publish(Event::Resize { cols: 100, rows: 30 });
        let events = bus.drain();
        assert!(matches!(&events[0], Event::Resize { cols: 80, rows: 24 }));
        assert!(matches!(&events[1], Event::Tick { .. }));
        assert!(matches!(&events[2], Event::Resize { cols: 100, rows: 30 }));
    }

    #[test]
    fn collect_from_channel_keeps_order_after_local_events() {
        let (tx, rx) = mpsc::channel();
        let mut bus = EventBus::new();
        bus.publish(Event::Resize { cols: 1, rows: 1 });
        tx.send(Event::Tick { now: Local::now() }).unwrap();
        tx.send(Event::Resize { cols: 2, rows: 2 }).unwrap();

        assert!(bus.collect_from(&rx));
        let events = bus.drain();
        assert_eq!(events.len(), 3);
        assert!(matches!(&events[0], Event::Resize { cols: 1, rows: 1 }));
        assert!(matches!(&events[2], Event::Resize { cols: 2, rows: 2 }));
    }

    #[test]
    fn collect_from_reports_disconnect() {
        let (tx, rx) = mpsc::channel();
        tx.send(Event::Tick { now: Local::now() }).unwrap();
        drop(tx);

        let mut bus = EventBus::new();
        assert!(!bus.collect_from(&rx));
        assert_eq!(bus.drain().len(), 1);
    }
}
