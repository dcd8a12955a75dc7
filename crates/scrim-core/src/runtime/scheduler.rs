#![forbid(unsafe_code)]

//! FIFO task scheduler for deferred, same-thread work.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

type Task = Box<dyn FnOnce()>;

/// Clonable handle over a single-threaded FIFO task queue.
///
/// The scheduler is the "yield one turn" primitive: posting a task
/// guarantees it runs strictly after the current synchronous turn, so
/// registrations issued in the same turn are observed before the task.
#[derive(Clone, Default)]
pub struct Scheduler {
    inner: Rc<SchedulerInner>,
}

#[derive(Default)]
struct SchedulerInner {
    queue: RefCell<VecDeque<Task>>,
    draining: Cell<bool>,
}

impl Scheduler {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a task to run on a later turn.
    pub fn post(&self, task: impl FnOnce() + 'static) {
        self.inner.queue.borrow_mut().push_back(Box::new(task));
    }

    /// Number of tasks currently queued.
    pub fn pending(&self) -> usize {
        self.inner.queue.borrow().len()
    }

    /// Run the next queued task, if any. Returns whether a task ran.
    pub fn run_one(&self) -> bool {
        let task = self.inner.queue.borrow_mut().pop_front();
        match task {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }

    /// Drain the queue until no tasks remain, including tasks posted while
    /// draining. Returns the number of tasks run.
    ///
    /// Reentrant calls (a task calling `run_until_idle`) are no-ops; the
    /// outermost drain picks up everything.
    pub fn run_until_idle(&self) -> usize {
        if self.inner.draining.get() {
            return 0;
        }
        self.inner.draining.set(true);
        let mut ran = 0;
        while self.run_one() {
            ran += 1;
        }
        self.inner.draining.set(false);
        ran
    }
}
