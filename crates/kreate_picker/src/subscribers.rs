//! Subscriber lists for picker notifications.
//!
//! This module provides a small wrapper around boxed callbacks so the
//! coordinator can expose notification channels without every collaborator
//! having to assign an ad hoc listener field. Any number of subscribers can
//! listen to a channel; each one gets a [`SubscriptionId`] it can later use to
//! unsubscribe.
//!
//! # Examples
//!
//! ```
//! use kreate_picker::Subscribers;
//!
//! let mut on_change: Subscribers<f32> = Subscribers::new();
//! let id = on_change.subscribe(|value: &f32| println!("changed to {value}"));
//! on_change.emit(&0.5);
//! assert!(on_change.unsubscribe(id));
//! ```

use std::fmt;

/// Handle returned when subscribing, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// An ordered list of callbacks that all receive `&T` when emitted.
///
/// # Type Parameters
///
/// - `T`: The notification payload. May be unsized, e.g. `[GradientStop]`.
pub struct Subscribers<T: ?Sized> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn FnMut(&T)>)>,
}

impl<T: ?Sized> Subscribers<T> {
    /// Create an empty subscriber list.
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Register a callback. Callbacks run in registration order.
    pub fn subscribe<F>(&mut self, f: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(f)));
        id
    }

    /// Remove a callback. Returns `false` if the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Call every subscriber with `value`, synchronously.
    pub fn emit(&mut self, value: &T) {
        for (_, f) in &mut self.entries {
            f(value);
        }
    }

    /// Check if a subscriber with this id is registered.
    pub fn contains(&self, id: SubscriptionId) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: ?Sized> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Subscribers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_emit_reaches_all_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subs: Subscribers<i32> = Subscribers::new();

        let first = Rc::clone(&log);
        subs.subscribe(move |v: &i32| first.borrow_mut().push(("first", *v)));
        let second = Rc::clone(&log);
        subs.subscribe(move |v: &i32| second.borrow_mut().push(("second", *v)));

        subs.emit(&7);
        assert_eq!(*log.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut subs: Subscribers<[u8]> = Subscribers::new();

        let counter = Rc::clone(&count);
        let id = subs.subscribe(move |bytes: &[u8]| *counter.borrow_mut() += bytes.len());
        subs.emit(&[1, 2, 3]);
        assert!(subs.contains(id));

        assert!(subs.unsubscribe(id));
        assert!(!subs.unsubscribe(id));
        assert!(subs.is_empty());

        subs.emit(&[1]);
        assert_eq!(*count.borrow(), 3);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut subs: Subscribers<()> = Subscribers::new();
        let a = subs.subscribe(|_: &()| {});
        subs.unsubscribe(a);
        let b = subs.subscribe(|_: &()| {});
        assert_ne!(a, b);
        assert_eq!(subs.len(), 1);
    }
}
