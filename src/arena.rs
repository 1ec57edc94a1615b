//! Token-indexed storage for live interceptors.
//!
//! Win32 subclass callbacks are plain functions that receive one `usize` of
//! reference data. Instead of smuggling a pointer through it, the hook stores
//! its interceptor here and passes the slot index; the callback resolves the
//! index back to an `Rc`.

use std::rc::Rc;

/// Key of an occupied arena slot.
pub type ArenaKey = usize;

pub struct InterceptorArena<T> {
    slots: Vec<Option<Rc<T>>>,
}

impl<T> Default for InterceptorArena<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T> InterceptorArena<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` in the first free slot.
    pub fn insert(&mut self, value: Rc<T>) -> ArenaKey {
        match self.slots.iter().position(Option::is_none) {
            Some(key) => {
                self.slots[key] = Some(value);
                key
            }
            None => {
                self.slots.push(Some(value));
                self.slots.len() - 1
            }
        }
    }

    /// A new handle to the value at `key`, if occupied.
    ///
    /// Callers get their own `Rc` so the arena need not stay borrowed while the
    /// value runs (message handlers re-enter).
    pub fn get(&self, key: ArenaKey) -> Option<Rc<T>> {
        self.slots.get(key).and_then(|slot| slot.clone())
    }

    pub fn remove(&mut self, key: ArenaKey) -> Option<Rc<T>> {
        self.slots.get_mut(key).and_then(Option::take)
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
