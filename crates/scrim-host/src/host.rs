#![forbid(unsafe_code)]

//! The modal host coordinator.
//!
//! [`ModalHost`] ties the pieces together: it waits for the surface's
//! ready signal, validates and claims the shared overlay container,
//! drains registrations queued before readiness, and runs the open
//! lifecycle (defer one turn, resolve the item, style the container,
//! bridge append/remove, forward the close outcome).
//!
//! # Invariants
//!
//! - Items may be added at any time; adds before readiness are queued
//!   and registered in add order when the host initializes, so the last
//!   add of a name wins either way.
//! - `open` never runs in the calling turn. Its promise completes with
//!   `Err` instead of panicking on every failure path.
//! - The shared container is visible exactly while it has children;
//!   removing the last child also clears backdrop and pointer styling.
//!
//! # Failure Modes
//!
//! - A container without the bootstrap marker fails initialization; the
//!   error is logged and the host stays pending forever. This is the one
//!   unrecoverable condition.

use std::cell::RefCell;
use std::rc::Rc;

use scrim_core::node::Node;
use scrim_core::registry::{CloseOutcome, Item, Payload, Registry};
use scrim_core::runtime::{Promise, ReadySignal, Scheduler};
use scrim_core::style::{Display, OverlayStyle};

use crate::bootstrap;
use crate::error::HostError;
use crate::factory::{self, ItemOptions};
use crate::kind;

pub(crate) const LOG_TARGET: &str = "scrim::host";

/// Everything the host needs from its embedding surface.
pub struct HostContext {
    /// Task queue shared with the rest of the surface.
    pub scheduler: Scheduler,
    /// Fires when the surface can accept nodes.
    pub ready: ReadySignal,
    /// Root the overlay container attaches under.
    pub root: Node,
    /// The shared overlay container (adopted or created; see
    /// [`bootstrap::overlay_container`]).
    pub container: Node,
}

enum Lifecycle {
    /// Before initialization; adds accumulate here in order.
    Pending { queue: Vec<(String, Item)> },
    Ready,
}

struct HostInner {
    lifecycle: Lifecycle,
    registry: Registry,
    root: Node,
    container: Node,
}

/// Coordinator for dialogs, side panels, and snackbars over one shared
/// overlay container. Handles are clonable and share state.
#[derive(Clone)]
pub struct ModalHost {
    inner: Rc<RefCell<HostInner>>,
    scheduler: Scheduler,
}

impl ModalHost {
    /// Create a host bound to `ctx` and arm initialization on the ready
    /// signal.
    ///
    /// If the signal already fired, initialization runs before `new`
    /// returns. An initialization failure is logged and leaves the host
    /// pending; adds still queue but opens will reject.
    pub fn new(ctx: HostContext) -> Self {
        let host = Self {
            inner: Rc::new(RefCell::new(HostInner {
                lifecycle: Lifecycle::Pending { queue: Vec::new() },
                registry: Registry::new(),
                root: ctx.root,
                container: ctx.container,
            })),
            scheduler: ctx.scheduler,
        };
        {
            let host = host.clone();
            ctx.ready.subscribe(move || {
                if let Err(err) = host.init() {
                    tracing::error!(target: LOG_TARGET, %err, "host initialization failed");
                }
            });
        }
        host
    }

    /// Whether initialization has completed.
    pub fn is_ready(&self) -> bool {
        matches!(self.inner.borrow().lifecycle, Lifecycle::Ready)
    }

    /// The shared overlay container.
    pub fn container(&self) -> Node {
        self.inner.borrow().container.clone()
    }

    fn init(&self) -> Result<(), HostError> {
        let inner = &mut *self.inner.borrow_mut();
        if matches!(inner.lifecycle, Lifecycle::Ready) {
            return Ok(());
        }
        if inner.container.attribute(bootstrap::CONTAINER_MARKER).is_none() {
            return Err(HostError::Validation(format!(
                "overlay container is missing the `{}` marker",
                bootstrap::CONTAINER_MARKER
            )));
        }

        // Baseline surface styling wins over whatever an adopted
        // container carried; the surface starts empty, so it starts
        // hidden with no open-time overrides.
        inner.container.update_style(|style| {
            *style = style.merge(&OverlayStyle::overlay_base());
            style.backdrop = None;
            style.pointer_events = None;
        });

        let queue = match std::mem::replace(&mut inner.lifecycle, Lifecycle::Ready) {
            Lifecycle::Pending { queue } => queue,
            Lifecycle::Ready => Vec::new(),
        };
        let queued = queue.len();
        for (name, item) in queue {
            inner.registry.register(name, item);
        }

        let attached = inner
            .root
            .children()
            .iter()
            .any(|child| child.same_node(&inner.container));
        if !attached {
            inner.root.append_child(&inner.container);
        }

        tracing::debug!(target: LOG_TARGET, queued, "host initialized");
        Ok(())
    }

    /// Declare an item. Returns whether the declaration was accepted.
    ///
    /// Before readiness the item is queued; afterwards it registers
    /// immediately. Either way a later add of the same name replaces the
    /// earlier one.
    pub fn add_item(&self, options: ItemOptions) -> bool {
        let item = match factory::create_item(options, &self.scheduler) {
            Ok(item) => item,
            Err(err) => {
                tracing::warn!(target: LOG_TARGET, %err, "item rejected");
                return false;
            }
        };
        let name = item.name().to_string();
        let inner = &mut *self.inner.borrow_mut();
        match &mut inner.lifecycle {
            Lifecycle::Pending { queue } => {
                tracing::debug!(target: LOG_TARGET, item = %name, "queued before ready");
                queue.push((name, item));
            }
            Lifecycle::Ready => {
                inner.registry.register(name, item);
            }
        }
        true
    }

    /// Open the named item with an optional payload.
    ///
    /// The open always runs on a later scheduler turn, so adds issued in
    /// the same turn are observed first. The returned promise completes
    /// with the item's close outcome, or with an error if the open could
    /// not proceed.
    pub fn open(
        &self,
        name: &str,
        data: Option<Payload>,
    ) -> Promise<Result<CloseOutcome, HostError>> {
        let completion = Promise::pending();
        let host = self.clone();
        let name = name.to_string();
        let forward = completion.clone();
        self.scheduler.post(move || match host.open_now(&name, data) {
            Ok(closed) => {
                closed.on_complete(move |outcome| {
                    forward.complete(Ok(outcome.clone()));
                });
            }
            Err(err) => {
                tracing::error!(target: LOG_TARGET, %err, item = %name, "open failed");
                forward.complete(Err(err));
            }
        });
        completion
    }

    fn open_now(&self, name: &str, data: Option<Payload>) -> Result<Promise<CloseOutcome>, HostError> {
        let (item, container) = {
            let inner = self.inner.borrow();
            if matches!(inner.lifecycle, Lifecycle::Pending { .. }) {
                return Err(HostError::NotFound(format!(
                    "`{name}` requested before the host is ready"
                )));
            }
            let item = inner
                .registry
                .get(name)
                .ok_or_else(|| HostError::NotFound(format!("no item registered as `{name}`")))?;
            (item, inner.container.clone())
        };

        item.set_data(data);
        kind::apply_open_overlay(&container, item.kind());
        tracing::debug!(target: LOG_TARGET, item = %name, kind = ?item.kind(), "opening");

        let append = {
            let container = container.clone();
            move |node: &Node| container.append_child(node)
        };
        let remove = move |node: &Node| {
            container.remove_child(node);
            if container.child_count() == 0 {
                // Last item gone: hide the surface and drop open-time
                // styling so the next open starts clean.
                container.update_style(|style| {
                    style.display = Some(Display::None);
                    style.backdrop = None;
                    style.pointer_events = None;
                });
            }
        };
        Ok(item.open(append, remove))
    }
}
