//! Ordered observer registry.
//!
//! One `EventChannel` backs each outbound gesture stream. Subscribers are
//! invoked synchronously, in registration order, with no buffering.

use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Subscriber<E> = Rc<dyn Fn(&E)>;

pub struct EventChannel<E> {
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber<E>)>>,
    next_id: Cell<u64>,
}

impl<E> EventChannel<E> {
    pub fn new() -> Self {
        Self {
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    pub fn subscribe(&self, subscriber: impl Fn(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers
            .borrow_mut()
            .push((id, Rc::new(subscriber)));
        id
    }

    /// Removes a subscriber. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }

    pub fn has_subscribers(&self) -> bool {
        !self.subscribers.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.subscribers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.subscribers.borrow_mut().clear();
    }

    /// Delivers `event` to every subscriber registered at the time of the call.
    ///
    /// Subscribers may subscribe or unsubscribe from inside the callback; the
    /// change applies to the next emission. Returns the number of deliveries.
    pub fn emit(&self, event: &E) -> usize {
        let snapshot: SmallVec<[Subscriber<E>; 4]> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, subscriber)| Rc::clone(subscriber))
            .collect();
        for subscriber in &snapshot {
            subscriber(event);
        }
        snapshot.len()
    }
}

impl<E> Default for EventChannel<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for EventChannel<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventChannel")
            .field("subscribers", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivers_in_registration_order() {
        let channel = EventChannel::<u32>::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for label in ["a", "b", "c"] {
            let log = Rc::clone(&log);
            channel.subscribe(move |value: &u32| log.borrow_mut().push(format!("{label}{value}")));
        }

        assert_eq!(channel.emit(&7), 3);
        assert_eq!(*log.borrow(), vec!["a7", "b7", "c7"]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let channel = EventChannel::<u32>::new();
        let hits = Rc::new(Cell::new(0));
        let id = channel.subscribe({
            let hits = Rc::clone(&hits);
            move |_| hits.set(hits.get() + 1)
        });

        channel.emit(&1);
        assert!(channel.unsubscribe(id));
        assert!(!channel.unsubscribe(id));
        channel.emit(&2);

        assert_eq!(hits.get(), 1);
        assert!(!channel.has_subscribers());
    }

    #[test]
    fn subscriber_may_reenter_channel() {
        let channel = Rc::new(EventChannel::<u32>::new());
        let late_hits = Rc::new(Cell::new(0));

        channel.subscribe({
            let channel = Rc::downgrade(&channel);
            let late_hits = Rc::clone(&late_hits);
            move |_| {
                if let Some(channel) = channel.upgrade() {
                    let late_hits = Rc::clone(&late_hits);
                    channel.subscribe(move |_| late_hits.set(late_hits.get() + 1));
                }
            }
        });

        assert_eq!(channel.emit(&1), 1);
        assert_eq!(late_hits.get(), 0);
        assert_eq!(channel.emit(&2), 2);
        assert_eq!(late_hits.get(), 1);
    }
}
