#![forbid(unsafe_code)]

//! Default template sets per item kind.
//!
//! A template set is four builders (container, header, body, footer),
//! each taking the caller's [`TemplateOptions`] plus the resolved
//! [`KindUtils`] and returning a [`SlotBuilder`]. The factory composes
//! these when an item is declared with template fragments instead of a
//! custom builder.
//!
//! Template roots carry deterministic classes (`scrim-dialog`,
//! `scrim-dialog__confirm`, `scrim-side__close`, ...) so embedders can
//! locate and style them.

pub mod dialog;
pub mod side;
pub mod snackbar;

use scrim_core::registry::{ItemKind, SlotBuilder};

use crate::kind::KindUtils;

/// Content fragments for the default templates. All fields are optional;
/// button labels fall back to "OK" / "Cancel".
#[derive(Debug, Clone, Default)]
pub struct TemplateOptions {
    pub title: Option<String>,
    pub message: Option<String>,
    pub confirm_label: Option<String>,
    pub dismiss_label: Option<String>,
}

impl TemplateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = Some(label.into());
        self
    }

    pub fn dismiss_label(mut self, label: impl Into<String>) -> Self {
        self.dismiss_label = Some(label.into());
        self
    }
}

/// Builds one slot from template options and kind utilities.
pub type TemplateBuilder = fn(&TemplateOptions, &KindUtils) -> SlotBuilder;

/// The four sub-builders of a kind's default template.
///
/// `container` is always present; the other slots are per-kind (a
/// snackbar has no header or footer).
pub struct TemplateSet {
    pub container: TemplateBuilder,
    pub header: Option<TemplateBuilder>,
    pub body: Option<TemplateBuilder>,
    pub footer: Option<TemplateBuilder>,
}

impl TemplateSet {
    /// The default template set for `kind`.
    pub fn for_kind(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Dialog => Self {
                container: dialog::build_container,
                header: Some(dialog::build_header),
                body: Some(dialog::build_body),
                footer: Some(dialog::build_footer),
            },
            ItemKind::Side => Self {
                container: side::build_container,
                header: Some(side::build_header),
                body: Some(side::build_body),
                footer: None,
            },
            ItemKind::Snackbar => Self {
                container: snackbar::build_container,
                header: None,
                body: Some(snackbar::build_body),
                footer: None,
            },
        }
    }
}
