//! Cancellable fixed-delay tasks.
//!
//! A `TimedTask` is a slot holding at most one pending `gloo_timers` timeout.
//! Scheduling replaces (and so cancels) whatever was pending, and dropping
//! the last clone of the slot cancels it too, so a component that goes away
//! takes its pending work with it.
//!
//! Outside `csr` builds there is no event loop to run timers on. The slot
//! then only records the pending task and its delay; tests inspect and run
//! it by hand.

#[cfg(all(test, not(feature = "csr")))]
#[path = "timer_test.rs"]
mod timer_test;

use std::cell::RefCell;
use std::rc::Rc;

#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;

#[cfg(not(feature = "csr"))]
struct Recorded {
    delay_ms: u32,
    task: Box<dyn FnOnce()>,
}

#[derive(Clone, Default)]
pub struct TimedTask {
    #[cfg(feature = "csr")]
    slot: Rc<RefCell<Option<Timeout>>>,
    #[cfg(not(feature = "csr"))]
    slot: Rc<RefCell<Option<Recorded>>>,
}

impl TimedTask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` after `delay_ms`, cancelling any task still pending here.
    #[cfg(feature = "csr")]
    pub fn schedule(&self, delay_ms: u32, task: impl FnOnce() + 'static) {
        let timeout = Timeout::new(delay_ms, task);
        // Dropping a `Timeout` clears it.
        drop(self.slot.borrow_mut().replace(timeout));
    }

    #[cfg(not(feature = "csr"))]
    pub fn schedule(&self, delay_ms: u32, task: impl FnOnce() + 'static) {
        drop(self.slot.borrow_mut().replace(Recorded { delay_ms, task: Box::new(task) }));
    }

    /// Delay of the recorded task, if one is pending.
    #[cfg(not(feature = "csr"))]
    pub fn pending_delay(&self) -> Option<u32> {
        self.slot.borrow().as_ref().map(|recorded| recorded.delay_ms)
    }

    /// Run the recorded task as if its delay had elapsed.
    #[cfg(not(feature = "csr"))]
    pub fn fire(&self) -> bool {
        let recorded = self.slot.borrow_mut().take();
        match recorded {
            Some(recorded) => {
                (recorded.task)();
                true
            }
            None => false,
        }
    }
}
