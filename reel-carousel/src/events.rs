//! Carousel notifications
//!
//! Observers subscribe per [`EventKind`]. A handler returns `true` to let a
//! cancelable event proceed and `false` to cancel it; the return value is
//! ignored for events that cannot be canceled.

use std::fmt;

/// Event kinds handlers subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// See [`CarouselEvent::BeforeSelectedItemChange`].
    BeforeSelectedItemChange,
    /// See [`CarouselEvent::SelectedItemChange`].
    SelectedItemChange,
    /// See [`CarouselEvent::DataBound`].
    DataBound,
}

/// Notification published by a carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselEvent {
    /// A navigation step is about to move the selection. Cancelable.
    BeforeSelectedItemChange {
        /// Publishing carousel.
        carousel: String,
        /// Id of the candidate item.
        item_id: String,
        /// Logical index of the candidate item.
        index: usize,
    },
    /// The selection moved and has been committed.
    SelectedItemChange {
        /// Publishing carousel.
        carousel: String,
        /// Id of the newly active item.
        item_id: String,
        /// Logical index of the newly active item.
        index: usize,
    },
    /// Clones or padding were synthesized and the initial window computed.
    DataBound {
        /// Publishing carousel.
        carousel: String,
        /// Number of real items bound.
        item_count: usize,
    },
}

impl CarouselEvent {
    /// Kind this event is delivered under.
    pub fn kind(&self) -> EventKind {
        match self {
            CarouselEvent::BeforeSelectedItemChange { .. } => {
                EventKind::BeforeSelectedItemChange
            }
            CarouselEvent::SelectedItemChange { .. } => {
                EventKind::SelectedItemChange
            }
            CarouselEvent::DataBound { .. } => EventKind::DataBound,
        }
    }

    /// Whether handlers can cancel this event.
    pub fn is_cancelable(&self) -> bool {
        matches!(self, CarouselEvent::BeforeSelectedItemChange { .. })
    }
}

/// Handle returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn FnMut(&CarouselEvent) -> bool>;

/// Per-carousel observer registry.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    handlers: Vec<(SubscriptionId, EventKind, Handler)>,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriptions", &self.handlers.len())
            .finish()
    }
}

impl EventBus {
    /// Empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for events of `kind`.
    pub fn subscribe<F>(&mut self, kind: EventKind, handler: F) -> SubscriptionId
    where
        F: FnMut(&CarouselEvent) -> bool + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, kind, Box::new(handler)));
        id
    }

    /// Returns whether the subscription existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(sub, _, _)| *sub != id);
        self.handlers.len() != before
    }

    /// Deliver `event` to every matching handler in subscription order.
    /// Returns `false` when a cancelable event was canceled by any handler.
    pub fn publish(&mut self, event: &CarouselEvent) -> bool {
        let kind = event.kind();
        let mut proceed = true;
        for (_, _, handler) in
            self.handlers.iter_mut().filter(|(_, k, _)| *k == kind)
        {
            if !handler(event) {
                proceed = false;
            }
        }
        proceed || !event.is_cancelable()
    }
}
