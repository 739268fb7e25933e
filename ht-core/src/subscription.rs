//! Single-target handler slots with idempotent (un)binding.
//!
//! A [`HandlerSlot`] holds at most one bound target. Binding again replaces
//! the previous target instead of stacking a second handler, and unbinding
//! with a stale [`SubscriptionId`] does nothing.

use std::cell::{Cell, RefCell};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct SubscriptionId(u64);

#[derive(Debug)]
pub struct HandlerSlot<T> {
    next_id: Cell<u64>,
    bound: RefCell<Option<(SubscriptionId, T)>>,
}

impl<T> Default for HandlerSlot<T> {
    fn default() -> Self {
        Self {
            next_id: Cell::new(0),
            bound: RefCell::new(None),
        }
    }
}

impl<T> HandlerSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `target`, discarding whatever was bound before.
    pub fn bind(&self, target: T) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get() + 1);
        self.next_id.set(id.0);
        *self.bound.borrow_mut() = Some((id, target));
        id
    }

    /// Remove the binding if `id` is still the current one.
    pub fn unbind(&self, id: SubscriptionId) -> bool {
        let mut bound = self.bound.borrow_mut();
        match bound.as_ref() {
            Some((current, _)) if *current == id => {
                *bound = None;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&self) {
        *self.bound.borrow_mut() = None;
    }

    pub fn is_bound(&self) -> bool {
        self.bound.borrow().is_some()
    }

    pub fn current_id(&self) -> Option<SubscriptionId> {
        self.bound.borrow().as_ref().map(|(id, _)| *id)
    }

    /// Run `f` against the bound target, if any.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.bound.borrow().as_ref().map(|(_, target)| f(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebinding_replaces_previous_target() {
        let slot = HandlerSlot::new();
        let first = slot.bind("dengue");
        let second = slot.bind("cholera");
        assert_ne!(first, second);
        assert_eq!(slot.with(|t| *t), Some("cholera"));
        assert_eq!(slot.current_id(), Some(second));
    }

    #[test]
    fn unbind_is_idempotent_and_ignores_stale_ids() {
        let slot = HandlerSlot::new();
        let first = slot.bind(1);
        let second = slot.bind(2);
        assert!(!slot.unbind(first));
        assert!(slot.is_bound());
        assert!(slot.unbind(second));
        assert!(!slot.unbind(second));
        assert!(!slot.is_bound());
        assert_eq!(slot.with(|t| *t), None);
    }
}
