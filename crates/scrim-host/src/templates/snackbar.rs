#![forbid(unsafe_code)]

//! Default snackbar template: a message that dismisses itself when
//! activated. The fade entrance plays when the container is built.

use std::rc::Rc;

use scrim_core::node::Node;
use scrim_core::registry::{CloseOutcome, SlotBuilder};

use crate::kind::KindUtils;
use crate::templates::TemplateOptions;

pub fn build_container(_options: &TemplateOptions, utils: &KindUtils) -> SlotBuilder {
    let utils = utils.clone();
    Rc::new(move |close, _item| {
        let node = Node::new("container");
        node.set_class("scrim-snackbar");
        node.set_style(utils.container_style(None));
        {
            let close = close.clone();
            node.set_on_activate(Rc::new(move || close.close(CloseOutcome::Dismissed)));
        }
        utils.run_animation(&node);
        node
    })
}

pub fn build_body(options: &TemplateOptions, _utils: &KindUtils) -> SlotBuilder {
    let message = options.message.clone();
    Rc::new(move |_close, _item| {
        let node = Node::new("body");
        node.set_class("scrim-snackbar__body");
        if let Some(message) = &message {
            node.set_text(message);
        }
        node
    })
}
