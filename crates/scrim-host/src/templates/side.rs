#![forbid(unsafe_code)]

//! Default side-panel template: header with a close control, message
//! body. The entrance animation plays when the container is built.

use std::rc::Rc;

use scrim_core::node::Node;
use scrim_core::registry::{CloseOutcome, SlotBuilder};

use crate::kind::KindUtils;
use crate::templates::TemplateOptions;

pub fn build_container(_options: &TemplateOptions, utils: &KindUtils) -> SlotBuilder {
    let utils = utils.clone();
    Rc::new(move |_close, _item| {
        let node = Node::new("container");
        node.set_class("scrim-side");
        node.set_style(utils.container_style(None));
        utils.run_animation(&node);
        node
    })
}

pub fn build_header(options: &TemplateOptions, _utils: &KindUtils) -> SlotBuilder {
    let title = options.title.clone();
    Rc::new(move |close, _item| {
        let node = Node::new("header");
        node.set_class("scrim-side__header");
        if let Some(title) = &title {
            node.set_text(title);
        }

        let dismiss = Node::new("button");
        dismiss.set_class("scrim-side__close");
        {
            let close = close.clone();
            dismiss.set_on_activate(Rc::new(move || close.close(CloseOutcome::Dismissed)));
        }
        node.append_child(&dismiss);
        node
    })
}

pub fn build_body(options: &TemplateOptions, _utils: &KindUtils) -> SlotBuilder {
    let message = options.message.clone();
    Rc::new(move |_close, _item| {
        let node = Node::new("body");
        node.set_class("scrim-side__body");
        if let Some(message) = &message {
            node.set_text(message);
        }
        node
    })
}
