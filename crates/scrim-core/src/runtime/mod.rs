#![forbid(unsafe_code)]

//! Single-threaded runtime primitives for the overlay host.
//!
//! Everything in this module is cooperative and event-loop-scheduled:
//!
//! - [`Scheduler`]: a FIFO task queue drained by the embedding loop.
//! - [`Promise`]: a single-fire completion cell with subscriber callbacks.
//! - [`ReadySignal`]: a one-shot signal gating deferred initialization.
//!
//! # Architecture
//!
//! All three types are clonable handles over `Rc<RefCell<..>>` state,
//! so the host, items, and templates can share them freely on one thread.
//! No locks are involved; correctness relies on single-threaded execution.
//!
//! # Invariants
//!
//! 1. Tasks run in post order; a task posting new tasks extends the same
//!    drain rather than starting a nested one.
//! 2. A `Promise` completes at most once; later completions are rejected.
//! 3. `Promise` callbacks run in registration order; subscribing after
//!    completion runs the callback immediately.
//! 4. A `ReadySignal` fires at most once; waiters run in FIFO order and
//!    late subscribers run immediately.

mod promise;
mod ready;
mod scheduler;

pub use promise::Promise;
pub use ready::ReadySignal;
pub use scheduler::Scheduler;
