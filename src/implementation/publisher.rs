use event_listener::{Event, EventListener};
use std::fmt::{self, Debug, Formatter};

type Callback = Box<dyn Fn(&Signal) + Send + Sync + 'static>;

/// The payload passed to every subscriber when a [`Publisher`] is triggered.
///
/// It carries no data; receiving it is the whole message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Signal;

/// Identifies one registration on a [`Publisher`].
///
/// Returned by [`Publisher::subscribe`] and accepted by [`Publisher::unsubscribe`]. Ids are never
/// reused by the publisher that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

struct Subscriber {
    id: SubscriptionId,
    callback: Callback,
}

/// An ordered registry of callbacks, all of which are invoked when the publisher is triggered.
///
/// Callbacks run synchronously on the thread that calls [`Publisher::trigger`], in the order
/// they were subscribed. Triggering a publisher with no subscribers does nothing.
///
/// If a callback panics, the panic propagates out of [`Publisher::trigger`] immediately: the
/// remaining callbacks are not invoked and listeners are not notified.
///
/// In addition to callbacks, any number of [`EventListener`]s can wait for the next trigger with
/// [`Publisher::listen`], either by blocking or by awaiting.
#[derive(Default)]
pub struct Publisher {
    subscribers: Vec<Subscriber>,
    next_id: u64,
    event: Event,
}

impl Debug for Publisher {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Publisher")
            .field(
                "subscribers",
                &self.subscribers.iter().map(|s| s.id).collect::<Vec<_>>(),
            )
            .field("next_id", &self.next_id)
            .field("event", &"..")
            .finish()
    }
}

impl Publisher {
    /// Construct a new `Publisher` with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback, to be invoked after all previously registered callbacks.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&Signal) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        log::trace!("subscribing {id:?}");
        self.subscribers.push(Subscriber {
            id,
            callback: Box::new(callback),
        });
        id
    }

    /// Remove a registration.
    ///
    /// Returns false if no callback is registered under this id, which is not an error.
    #[allow(clippy::must_use_candidate)] // It's fine to ignore whether anything was removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        if let Some(index) = self.subscribers.iter().position(|s| s.id == id) {
            log::trace!("unsubscribing {id:?}");
            self.subscribers.remove(index);
            true
        } else {
            log::trace!("{id:?} was not subscribed");
            false
        }
    }

    /// Invoke every registered callback in subscription order, then wake all listeners.
    ///
    /// Returns the number of callbacks invoked.
    #[allow(clippy::must_use_candidate)] // It's fine not to use the count.
    pub fn trigger(&self) -> usize {
        log::debug!("triggering {} subscriber(s)", self.subscribers.len());
        for Subscriber { id, callback } in &self.subscribers {
            log::trace!("invoking {id:?}");
            callback(&Signal);
        }
        self.event.notify(usize::MAX);
        self.subscribers.len()
    }

    /// Returns an [`EventListener`] that will be notified the next time this publisher is
    /// triggered.
    ///
    /// The listener can be awaited, or blocked on with
    /// [`Listener::wait`][event_listener::Listener::wait].
    #[must_use]
    pub fn listen(&self) -> EventListener {
        self.event.listen()
    }

    /// The number of registered callbacks
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Determine if this publisher has no registered callbacks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}
