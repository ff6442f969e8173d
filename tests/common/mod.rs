//! Shared helpers for integration tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

/// Records the arguments of a delegate invocation for later assertion.
///
/// Clones share one slot, so a copy can move into the delegate closure
/// while the test keeps the original to inspect.
pub struct Capture<A> {
    slot: Rc<RefCell<Option<A>>>,
}

impl<A> Capture<A> {
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
        }
    }

    /// Record one invocation's arguments, replacing any earlier recording.
    pub fn record(&self, args: A) {
        *self.slot.borrow_mut() = Some(args);
    }

    /// The most recently recorded arguments, if the delegate ever ran.
    pub fn taken(&self) -> Option<A> {
        self.slot.borrow_mut().take()
    }
}

impl<A> Clone for Capture<A> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

/// An equality delegate that must never run.
pub fn never_equals<T>(_: &T, _: &T) -> bool {
    panic!("equality delegate must not be invoked");
}

/// A hash delegate that must never run.
pub fn never_hash<T>(_: &T) -> u64 {
    panic!("hash delegate must not be invoked");
}
