#![forbid(unsafe_code)]

//! Core machinery for the scrim overlay host.
//!
//! This crate holds everything below the host: the generic item registry
//! and open/close handshake ([`registry`]), the retained element tree
//! ([`node`]), the composable overlay style model ([`style`]), and the
//! single-threaded runtime primitives ([`runtime`]). The `scrim-host`
//! crate builds the modal coordinator on top of these.
//!
//! Everything here is single-threaded by design: handles are
//! `Rc<RefCell<..>>`-backed clones, and deferred work goes through the
//! [`runtime::Scheduler`].

pub mod node;
pub mod placement;
pub mod registry;
pub mod runtime;
pub mod style;

pub use node::Node;
pub use placement::{CornerPosition, Placement, SideEdge};
pub use registry::{
    CloseHandle, CloseOutcome, ComponentBuilder, Item, ItemKind, Payload, Registry, Slot,
    SlotBuilder,
};
pub use runtime::{Promise, ReadySignal, Scheduler};
pub use style::{
    Anchor, Backdrop, Display, OverlayStyle, PointerEvents, Position, Rgb,
};
