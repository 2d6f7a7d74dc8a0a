//! In-process change bus for a single-threaded page.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use uiprefs_domain::event::PreferenceChanged;

use crate::ports::ChangePublisher;

type Handler = Rc<dyn Fn(&PreferenceChanged)>;

/// Handle returned by [`LocalEventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

impl SubscriptionId {
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn as_raw(self) -> u32 {
        self.0
    }
}

/// Synchronous subscriber list.
///
/// Handlers run in subscription order on the publishing call stack. A
/// handler may subscribe or unsubscribe while being notified; the change
/// takes effect from the next publish.
#[derive(Default)]
pub struct LocalEventBus {
    handlers: RefCell<Vec<(SubscriptionId, Handler)>>,
    next_id: Cell<u32>,
}

impl LocalEventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for every subsequent change.
    pub fn subscribe(&self, handler: impl Fn(&PreferenceChanged) + 'static) -> SubscriptionId {
        let handler: Handler = Rc::new(handler);
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get().wrapping_add(1));
        self.handlers.borrow_mut().push((id, handler));
        id
    }

    /// Remove a handler. Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        let before = handlers.len();
        handlers.retain(|(existing, _)| *existing != id);
        handlers.len() != before
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

impl ChangePublisher for LocalEventBus {
    fn publish(&self, change: &PreferenceChanged) {
        // Snapshot so handlers can (un)subscribe without a double borrow.
        let handlers: Vec<_> = self
            .handlers
            .borrow()
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        for handler in handlers {
            handler(change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uiprefs_domain::sidebar::SidebarState;
    use uiprefs_domain::theme::ThemeMode;

    fn recorder(bus: &LocalEventBus) -> (SubscriptionId, Rc<RefCell<Vec<PreferenceChanged>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = bus.subscribe(move |change| sink.borrow_mut().push(*change));
        (id, seen)
    }

    #[test]
    fn should_deliver_change_to_subscriber() {
        let bus = LocalEventBus::new();
        let (_, seen) = recorder(&bus);

        bus.publish(&PreferenceChanged::Theme(ThemeMode::Light));

        assert_eq!(
            *seen.borrow(),
            vec![PreferenceChanged::Theme(ThemeMode::Light)]
        );
    }

    #[test]
    fn should_deliver_change_to_multiple_subscribers() {
        let bus = LocalEventBus::new();
        let (_, first) = recorder(&bus);
        let (_, second) = recorder(&bus);

        bus.publish(&PreferenceChanged::Sidebar(SidebarState::Collapsed));

        assert_eq!(first.borrow().len(), 1);
        assert_eq!(second.borrow().len(), 1);
    }

    #[test]
    fn should_succeed_when_no_subscribers() {
        let bus = LocalEventBus::new();
        bus.publish(&PreferenceChanged::Theme(ThemeMode::Dark));
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn should_stop_delivering_after_unsubscribe() {
        let bus = LocalEventBus::new();
        let (id, seen) = recorder(&bus);

        assert!(bus.unsubscribe(id));
        bus.publish(&PreferenceChanged::Theme(ThemeMode::Light));

        assert!(seen.borrow().is_empty());
        assert!(!bus.unsubscribe(id));
    }

    #[test]
    fn should_allow_unsubscribing_from_within_handler() {
        let bus = Rc::new(LocalEventBus::new());
        let calls = Rc::new(Cell::new(0));
        let id_slot: Rc<Cell<Option<SubscriptionId>>> = Rc::new(Cell::new(None));

        let handler_bus = Rc::clone(&bus);
        let handler_calls = Rc::clone(&calls);
        let handler_slot = Rc::clone(&id_slot);
        let id = bus.subscribe(move |_| {
            handler_calls.set(handler_calls.get() + 1);
            if let Some(id) = handler_slot.get() {
                handler_bus.unsubscribe(id);
            }
        });
        id_slot.set(Some(id));

        bus.publish(&PreferenceChanged::Theme(ThemeMode::Light));
        bus.publish(&PreferenceChanged::Theme(ThemeMode::Dark));

        assert_eq!(calls.get(), 1);
        assert_eq!(bus.subscriber_count(), 0);
    }
}
