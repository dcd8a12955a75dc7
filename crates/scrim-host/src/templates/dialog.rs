#![forbid(unsafe_code)]

//! Default dialog template: titled header, message body, confirm/dismiss
//! footer.

use std::rc::Rc;

use scrim_core::node::Node;
use scrim_core::registry::{CloseOutcome, SlotBuilder};

use crate::kind::KindUtils;
use crate::templates::TemplateOptions;

pub fn build_container(_options: &TemplateOptions, utils: &KindUtils) -> SlotBuilder {
    let utils = utils.clone();
    Rc::new(move |_close, _item| {
        let node = Node::new("container");
        node.set_class("scrim-dialog");
        node.set_style(utils.container_style(None));
        node
    })
}

pub fn build_header(options: &TemplateOptions, _utils: &KindUtils) -> SlotBuilder {
    let title = options.title.clone();
    Rc::new(move |_close, _item| {
        let node = Node::new("header");
        node.set_class("scrim-dialog__header");
        if let Some(title) = &title {
            node.set_text(title);
        }
        node
    })
}

pub fn build_body(options: &TemplateOptions, _utils: &KindUtils) -> SlotBuilder {
    let message = options.message.clone();
    Rc::new(move |_close, _item| {
        let node = Node::new("body");
        node.set_class("scrim-dialog__body");
        if let Some(message) = &message {
            node.set_text(message);
        }
        node
    })
}

pub fn build_footer(options: &TemplateOptions, _utils: &KindUtils) -> SlotBuilder {
    let confirm_label = options
        .confirm_label
        .clone()
        .unwrap_or_else(|| "OK".to_string());
    let dismiss_label = options
        .dismiss_label
        .clone()
        .unwrap_or_else(|| "Cancel".to_string());
    Rc::new(move |close, _item| {
        let footer = Node::new("footer");
        footer.set_class("scrim-dialog__footer");

        let confirm = Node::new("button");
        confirm.set_class("scrim-dialog__confirm");
        confirm.set_text(&confirm_label);
        {
            let close = close.clone();
            confirm.set_on_activate(Rc::new(move || close.close(CloseOutcome::Confirmed)));
        }
        footer.append_child(&confirm);

        let dismiss = Node::new("button");
        dismiss.set_class("scrim-dialog__dismiss");
        dismiss.set_text(&dismiss_label);
        {
            let close = close.clone();
            dismiss.set_on_activate(Rc::new(move || close.close(CloseOutcome::Dismissed)));
        }
        footer.append_child(&dismiss);

        footer
    })
}
