#![forbid(unsafe_code)]

//! One-shot readiness signal.

use std::cell::RefCell;
use std::rc::Rc;

type Waiter = Box<dyn FnOnce()>;

/// A one-shot signal marking the moment the host surface can accept nodes.
///
/// The signal replaces ad-hoc "has the container been created yet" checks:
/// consumers subscribe once and are called exactly once, either when the
/// signal fires or immediately if it already has.
#[derive(Clone, Default)]
pub struct ReadySignal {
    inner: Rc<RefCell<ReadyInner>>,
}

#[derive(Default)]
struct ReadyInner {
    fired: bool,
    waiters: Vec<Waiter>,
}

impl ReadySignal {
    /// Create an unfired signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the signal has fired.
    pub fn is_fired(&self) -> bool {
        self.inner.borrow().fired
    }

    /// Subscribe to the signal. Runs immediately if it already fired.
    pub fn subscribe(&self, waiter: impl FnOnce() + 'static) {
        {
            let mut inner = self.inner.borrow_mut();
            if !inner.fired {
                inner.waiters.push(Box::new(waiter));
                return;
            }
        }
        waiter();
    }

    /// Fire the signal, running waiters in subscription order.
    ///
    /// The first call wins; later calls return `false` and do nothing.
    pub fn fire(&self) -> bool {
        let waiters = {
            let mut inner = self.inner.borrow_mut();
            if inner.fired {
                return false;
            }
            inner.fired = true;
            std::mem::take(&mut inner.waiters)
        };
        for waiter in waiters {
            waiter();
        }
        true
    }
}
