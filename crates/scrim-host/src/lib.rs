#![forbid(unsafe_code)]

//! Modal host: lifecycle coordination for dialogs, side panels, and
//! snackbars over a single shared overlay container.
//!
//! The host sits between item declarations and the retained element
//! tree from `scrim-core`. Callers declare items with [`ItemOptions`]
//! (a custom builder or the kind's default template), and open them by
//! name with [`ModalHost::open`]; the host resolves the item, styles
//! the shared container for the item's kind, attaches the item's
//! elements, and completes the returned promise with the close outcome.
//!
//! Items may be declared before the embedding surface is ready: the
//! host queues them and registers everything when the surface's
//! [`scrim_core::runtime::ReadySignal`] fires.
//!
//! Known limitation: the shared container carries one set of open-time
//! styling, so when items of different kinds are open at once the most
//! recently opened kind's backdrop and pointer rules win.

pub mod animation;
pub mod bootstrap;
pub mod error;
pub mod factory;
pub mod host;
pub mod kind;
pub mod templates;

pub use animation::{AnimationPhase, AnimationSpec, AnimationState, Entrance, Exit};
pub use bootstrap::{overlay_container, CONTAINER_MARKER, DEFAULT_CLASS};
pub use error::HostError;
pub use factory::{create_item, Components, ItemBuilder, ItemOptions};
pub use host::{HostContext, ModalHost};
pub use kind::{KindUtils, DEFAULT_SIDE_EDGE, DEFAULT_SNACKBAR_CORNER};
pub use templates::{TemplateOptions, TemplateSet};
