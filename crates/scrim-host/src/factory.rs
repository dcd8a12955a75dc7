#![forbid(unsafe_code)]

//! Turns declarative [`ItemOptions`] into registrable [`Item`]s.
//!
//! Callers describe an item by name, kind, optional placement, and
//! either a custom root builder or template fragments. The factory
//! validates the description, resolves the kind utilities, wires the
//! chosen builders into the item's slots, and hands back the item.
//!
//! # Failure Modes
//!
//! - Empty or whitespace-only names are rejected with
//!   [`HostError::Validation`].
//! - Slot assembly failing underneath (no container produced) surfaces
//!   as [`HostError::Unexpected`]; with the builders wired here that
//!   indicates a bug rather than bad input.

use std::rc::Rc;

use scrim_core::node::Node;
use scrim_core::placement::Placement;
use scrim_core::registry::{CloseHandle, Item, ItemKind, Slot, SlotBuilder};
use scrim_core::runtime::Scheduler;

use crate::error::HostError;
use crate::kind::{DEFAULT_SIDE_EDGE, DEFAULT_SNACKBAR_CORNER, KindUtils};
use crate::templates::{TemplateOptions, TemplateSet};

/// Custom root builder: receives the close handle, the item, and the
/// kind utilities, and returns the item's root element.
pub type ItemBuilder = Rc<dyn Fn(&CloseHandle, &Item, &KindUtils) -> Node>;

/// How an item's element tree gets built.
pub enum Components {
    /// A single caller-supplied builder producing the whole root.
    Builder(ItemBuilder),
    /// The kind's default template, filled with these fragments.
    Templates(TemplateOptions),
}

/// Declarative description of one overlay item.
pub struct ItemOptions {
    name: String,
    kind: ItemKind,
    placement: Option<Placement>,
    components: Components,
}

impl ItemOptions {
    fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            kind,
            placement: None,
            components: Components::Templates(TemplateOptions::default()),
        }
    }

    pub fn dialog(name: impl Into<String>) -> Self {
        Self::new(name, ItemKind::Dialog)
    }

    pub fn side(name: impl Into<String>) -> Self {
        Self::new(name, ItemKind::Side)
    }

    pub fn snackbar(name: impl Into<String>) -> Self {
        Self::new(name, ItemKind::Snackbar)
    }

    /// Request a placement. Placements a kind cannot honor are
    /// normalized to the kind's default.
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    /// Build the item's root with a custom builder instead of templates.
    pub fn builder(mut self, builder: ItemBuilder) -> Self {
        self.components = Components::Builder(builder);
        self
    }

    /// Build the item from the kind's default template with `options`.
    pub fn templates(mut self, options: TemplateOptions) -> Self {
        self.components = Components::Templates(options);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }
}

/// Construct an [`Item`] from `options`.
pub fn create_item(options: ItemOptions, scheduler: &Scheduler) -> Result<Item, HostError> {
    let name = options.name.trim();
    if name.is_empty() {
        return Err(HostError::Validation("item name is required".into()));
    }
    let name = name.to_string();

    let utils = KindUtils::resolve(options.kind, options.placement, scheduler.clone());

    let slots: Vec<(Slot, SlotBuilder)> = match options.components {
        Components::Builder(custom) => {
            let utils = utils.clone();
            vec![(
                Slot::Container,
                Rc::new(move |close: &CloseHandle, item: &Item| custom(close, item, &utils))
                    as SlotBuilder,
            )]
        }
        Components::Templates(template_options) => {
            let set = TemplateSet::for_kind(options.kind);
            let mut slots = vec![(Slot::Container, (set.container)(&template_options, &utils))];
            if let Some(header) = set.header {
                slots.push((Slot::Header, header(&template_options, &utils)));
            }
            if let Some(body) = set.body {
                slots.push((Slot::Body, body(&template_options, &utils)));
            }
            if let Some(footer) = set.footer {
                slots.push((Slot::Footer, footer(&template_options, &utils)));
            }
            slots
        }
    };

    let build = move |builder: &mut scrim_core::registry::ComponentBuilder| -> bool {
        for (slot, slot_builder) in slots {
            builder.build_component(slot, slot_builder);
        }
        true
    };

    let item = match utils.kind() {
        ItemKind::Dialog => Item::dialog(name.clone(), build),
        ItemKind::Side => {
            let edge = match utils.placement() {
                Some(Placement::Edge(edge)) => edge,
                _ => DEFAULT_SIDE_EDGE,
            };
            Item::side(name.clone(), edge, build)
        }
        ItemKind::Snackbar => {
            let corner = match utils.placement() {
                Some(Placement::Corner(corner)) => corner,
                _ => DEFAULT_SNACKBAR_CORNER,
            };
            Item::snackbar(name.clone(), corner, build)
        }
    };

    item.ok_or_else(|| HostError::Unexpected(format!("item `{name}` could not be constructed")))
}
