//! Controller events and observer subscriptions
//!
//! Renderers subscribe to a controller instead of the controller reaching
//! into rendering code. Observers are called synchronously, in subscription
//! order, after the controller state has been updated.

use crate::controller::VisibilitySnapshot;
use crate::types::ViewMode;

/// Something observable happened on a controller
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerEvent {
    /// The visible set was recomputed
    VisibilityChanged(VisibilitySnapshot),
    /// The display layout changed
    ViewModeChanged(ViewMode),
}

/// Receives controller events
pub trait Observer: Send + Sync {
    fn on_event(&self, event: &ControllerEvent);
}

impl<F> Observer for F
where
    F: Fn(&ControllerEvent) + Send + Sync,
{
    fn on_event(&self, event: &ControllerEvent) {
        self(event)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Ordered set of observers
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    observers: Vec<(SubscriptionId, Box<dyn Observer>)>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Box<dyn Observer>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Returns false if the id was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn emit(&self, event: &ControllerEvent) {
        for (_, observer) in &self.observers {
            observer.on_event(event);
        }
    }
}
