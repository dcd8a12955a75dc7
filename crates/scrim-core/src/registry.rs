#![forbid(unsafe_code)]

//! Generic item registration and open lifecycle.
//!
//! This module is the upstream collaborator the overlay host builds on:
//! it knows how to hold named [`Item`]s, how to assemble an item's element
//! tree from slot builders, and how to run the open/close handshake. It
//! knows nothing about shared containers, ready boundaries, or kind
//! styling — those are host concerns.
//!
//! # Open/close handshake
//!
//! [`Item::open`] receives two callbacks: `append` attaches the item's
//! root element somewhere, `remove` detaches it. The item builds its root
//! from the registered slot builders, hands it to `append`, and returns a
//! [`Promise`] that completes when the item's own close action fires. The
//! close action detaches the root through `remove` exactly once, then
//! completes the promise with the supplied [`CloseOutcome`].
//!
//! # Invariants
//!
//! - An item always has a container slot builder (enforced at
//!   construction).
//! - Closing twice removes and completes only once.
//! - `Registry::register` overwrites an existing name silently.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use ahash::AHashMap;

use crate::node::Node;
use crate::placement::{CornerPosition, Placement, SideEdge};
use crate::runtime::Promise;

/// Category of an overlay item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Dialog,
    Side,
    Snackbar,
}

/// Result carried by an item's close action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseOutcome {
    /// Dismissed without an explicit choice (escape, backdrop, timeout).
    Dismissed,
    /// The primary action was taken.
    Confirmed,
    /// A custom close value.
    Custom(String),
}

/// Transient payload attached to an item at open time.
pub type Payload = Rc<dyn Any>;

/// Close callback handed to slot builders; calling [`CloseHandle::close`]
/// closes the item it was built for.
#[derive(Clone)]
pub struct CloseHandle {
    inner: Rc<dyn Fn(CloseOutcome)>,
}

impl CloseHandle {
    fn new(f: impl Fn(CloseOutcome) + 'static) -> Self {
        Self { inner: Rc::new(f) }
    }

    /// Close the item with `outcome`. Closing an already-closed item is a
    /// no-op.
    pub fn close(&self, outcome: CloseOutcome) {
        let close = &*self.inner;
        close(outcome);
    }
}

/// Builds one element of an item's tree, given the close handle and the
/// item itself.
pub type SlotBuilder = Rc<dyn Fn(&CloseHandle, &Item) -> Node>;

/// The four element slots an item may populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Container,
    Header,
    Body,
    Footer,
}

/// Collects slot builders during item construction.
///
/// Registering a slot twice replaces the earlier builder.
#[derive(Default)]
pub struct ComponentBuilder {
    container: Option<SlotBuilder>,
    header: Option<SlotBuilder>,
    body: Option<SlotBuilder>,
    footer: Option<SlotBuilder>,
}

impl ComponentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a builder for `slot`.
    pub fn build_component(&mut self, slot: Slot, builder: SlotBuilder) {
        let target = match slot {
            Slot::Container => &mut self.container,
            Slot::Header => &mut self.header,
            Slot::Body => &mut self.body,
            Slot::Footer => &mut self.footer,
        };
        *target = Some(builder);
    }

    pub fn has_container(&self) -> bool {
        self.container.is_some()
    }
}

struct ItemInner {
    name: String,
    kind: ItemKind,
    placement: Option<Placement>,
    container: SlotBuilder,
    header: Option<SlotBuilder>,
    body: Option<SlotBuilder>,
    footer: Option<SlotBuilder>,
    data: RefCell<Option<Payload>>,
}

/// One registrable overlay unit. Handles are clonable and share state.
#[derive(Clone)]
pub struct Item {
    inner: Rc<ItemInner>,
}

impl Item {
    /// Construct a dialog item. Returns `None` if `build` reports failure
    /// or registers no container slot.
    pub fn dialog(
        name: impl Into<String>,
        build: impl FnOnce(&mut ComponentBuilder) -> bool,
    ) -> Option<Self> {
        Self::with_kind(name.into(), ItemKind::Dialog, None, build)
    }

    /// Construct a side-panel item attached to `edge`.
    pub fn side(
        name: impl Into<String>,
        edge: SideEdge,
        build: impl FnOnce(&mut ComponentBuilder) -> bool,
    ) -> Option<Self> {
        Self::with_kind(
            name.into(),
            ItemKind::Side,
            Some(Placement::Edge(edge)),
            build,
        )
    }

    /// Construct a snackbar item pinned to `position`.
    pub fn snackbar(
        name: impl Into<String>,
        position: CornerPosition,
        build: impl FnOnce(&mut ComponentBuilder) -> bool,
    ) -> Option<Self> {
        Self::with_kind(
            name.into(),
            ItemKind::Snackbar,
            Some(Placement::Corner(position)),
            build,
        )
    }

    fn with_kind(
        name: String,
        kind: ItemKind,
        placement: Option<Placement>,
        build: impl FnOnce(&mut ComponentBuilder) -> bool,
    ) -> Option<Self> {
        let mut slots = ComponentBuilder::new();
        if !build(&mut slots) {
            return None;
        }
        let container = slots.container?;
        Some(Self {
            inner: Rc::new(ItemInner {
                name,
                kind,
                placement,
                container,
                header: slots.header,
                body: slots.body,
                footer: slots.footer,
                data: RefCell::new(None),
            }),
        })
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn kind(&self) -> ItemKind {
        self.inner.kind
    }

    pub fn placement(&self) -> Option<Placement> {
        self.inner.placement
    }

    /// Replace the transient payload (set on every open).
    pub fn set_data(&self, data: Option<Payload>) {
        *self.inner.data.borrow_mut() = data;
    }

    pub fn data(&self) -> Option<Payload> {
        self.inner.data.borrow().clone()
    }

    /// Downcast the payload to a concrete type.
    pub fn data_as<T: 'static>(&self) -> Option<Rc<T>> {
        self.data().and_then(|payload| payload.downcast::<T>().ok())
    }

    /// Run the open mechanics.
    ///
    /// Builds the root element from the container slot, appends header,
    /// body, and footer elements in that order, attaches the root via
    /// `append`, and returns a promise completed by the close action.
    pub fn open(
        &self,
        append: impl Fn(&Node),
        remove: impl Fn(&Node) + 'static,
    ) -> Promise<CloseOutcome> {
        let completion = Promise::pending();
        let attached: Rc<RefCell<Option<Node>>> = Rc::new(RefCell::new(None));

        let close = {
            let completion = completion.clone();
            let attached = Rc::clone(&attached);
            CloseHandle::new(move |outcome: CloseOutcome| {
                let detached = attached.borrow_mut().take();
                if let Some(node) = detached {
                    remove(&node);
                }
                completion.complete(outcome);
            })
        };

        let root = (self.inner.container)(&close, self);
        for slot in [&self.inner.header, &self.inner.body, &self.inner.footer]
        .into_iter()
        .flatten()
        {
            root.append_child(&slot(&close, self));
        }

        // A builder may close synchronously; in that case the root never
        // attaches.
        if completion.is_complete() {
            return completion;
        }
        *attached.borrow_mut() = Some(root.clone());
        append(&root);
        completion
    }
}

impl std::fmt::Debug for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Item")
            .field("name", &self.inner.name)
            .field("kind", &self.inner.kind)
            .field("placement", &self.inner.placement)
            .finish()
    }
}

/// Name-keyed item store.
#[derive(Default)]
pub struct Registry {
    items: AHashMap<String, Item>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `item` under `name`, silently overwriting any previous
    /// registration.
    pub fn register(&mut self, name: impl Into<String>, item: Item) {
        self.items.insert(name.into(), item);
    }

    pub fn get(&self, name: &str) -> Option<Item> {
        self.items.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
