//! Change publisher port — notify interested parties of preference changes.

use std::rc::Rc;

use uiprefs_domain::event::PreferenceChanged;

/// Publishes preference changes to interested subscribers.
pub trait ChangePublisher {
    /// Publish a change to all current subscribers.
    fn publish(&self, change: &PreferenceChanged);
}

/// Discards every change.
impl ChangePublisher for () {
    fn publish(&self, _change: &PreferenceChanged) {}
}

impl<T: ChangePublisher + ?Sized> ChangePublisher for &T {
    fn publish(&self, change: &PreferenceChanged) {
        (**self).publish(change);
    }
}

impl<T: ChangePublisher + ?Sized> ChangePublisher for Rc<T> {
    fn publish(&self, change: &PreferenceChanged) {
        (**self).publish(change);
    }
}
