#![forbid(unsafe_code)]

//! Retained element tree.
//!
//! [`Node`] is the minimal element the overlay machinery needs: a tagged
//! node with attributes, an optional class and text, an [`OverlayStyle`],
//! ordered children, and an optional activation callback templates use to
//! wire close actions. Handles are clonable and share state
//! (`Rc<RefCell<..>>`, single-threaded).
//!
//! # Invariants
//!
//! - Children keep insertion order.
//! - `remove_child` matches by handle identity, never by structure.
//! - There are no parent back-pointers; whoever appended a child is
//!   responsible for removing it.

use std::cell::RefCell;
use std::rc::Rc;

use ahash::AHashMap;

use crate::style::OverlayStyle;

/// Clonable handle to a retained element.
#[derive(Clone)]
pub struct Node {
    inner: Rc<RefCell<NodeInner>>,
}

struct NodeInner {
    tag: &'static str,
    attributes: AHashMap<String, String>,
    class: Option<String>,
    text: Option<String>,
    style: OverlayStyle,
    children: Vec<Node>,
    on_activate: Option<Rc<dyn Fn()>>,
}

impl Node {
    /// Create a detached node with the given tag.
    pub fn new(tag: &'static str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(NodeInner {
                tag,
                attributes: AHashMap::new(),
                class: None,
                text: None,
                style: OverlayStyle::default(),
                children: Vec::new(),
                on_activate: None,
            })),
        }
    }

    pub fn tag(&self) -> &'static str {
        self.inner.borrow().tag
    }

    /// Whether two handles refer to the same element.
    pub fn same_node(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    // --- Tree operations ---

    /// Append `child` to this node's children. Appending a node to itself
    /// is ignored.
    pub fn append_child(&self, child: &Node) {
        if self.same_node(child) {
            return;
        }
        self.inner.borrow_mut().children.push(child.clone());
    }

    /// Remove `child` by handle identity. Returns whether it was present.
    pub fn remove_child(&self, child: &Node) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.children.len();
        inner.children.retain(|c| !c.same_node(child));
        inner.children.len() != before
    }

    pub fn child_count(&self) -> usize {
        self.inner.borrow().children.len()
    }

    /// Snapshot of the current children, in order.
    pub fn children(&self) -> Vec<Node> {
        self.inner.borrow().children.clone()
    }

    /// Depth-first search (self included) for a node with the given class.
    pub fn find_by_class(&self, class: &str) -> Option<Node> {
        if self.inner.borrow().class.as_deref() == Some(class) {
            return Some(self.clone());
        }
        for child in self.children() {
            if let Some(found) = child.find_by_class(class) {
                return Some(found);
            }
        }
        None
    }

    // --- Attributes, class, text ---

    pub fn set_attribute(&self, name: &str, value: &str) {
        self.inner
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.inner.borrow().attributes.get(name).cloned()
    }

    pub fn set_class(&self, class: &str) {
        self.inner.borrow_mut().class = Some(class.to_string());
    }

    pub fn class(&self) -> Option<String> {
        self.inner.borrow().class.clone()
    }

    pub fn set_text(&self, text: &str) {
        self.inner.borrow_mut().text = Some(text.to_string());
    }

    pub fn text(&self) -> Option<String> {
        self.inner.borrow().text.clone()
    }

    // --- Style ---

    pub fn style(&self) -> OverlayStyle {
        self.inner.borrow().style.clone()
    }

    pub fn set_style(&self, style: OverlayStyle) {
        self.inner.borrow_mut().style = style;
    }

    /// Field-wise merge of `overrides` into the current style.
    pub fn merge_style(&self, overrides: &OverlayStyle) {
        let mut inner = self.inner.borrow_mut();
        inner.style = inner.style.merge(overrides);
    }

    /// Edit the style in place. Unlike [`Node::merge_style`] this can also
    /// clear fields back to unset.
    pub fn update_style(&self, edit: impl FnOnce(&mut OverlayStyle)) {
        edit(&mut self.inner.borrow_mut().style);
    }

    // --- Activation ---

    /// Install the activation callback (replacing any prior one).
    pub fn set_on_activate(&self, callback: Rc<dyn Fn()>) {
        self.inner.borrow_mut().on_activate = Some(callback);
    }

    /// Trigger the activation callback, if installed.
    ///
    /// The callback runs without any borrow held, so it may mutate this
    /// node or the tree it lives in.
    pub fn activate(&self) {
        let callback = self.inner.borrow().on_activate.clone();
        if let Some(callback) = callback {
            callback();
        }
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Node")
            .field("tag", &inner.tag)
            .field("class", &inner.class)
            .field("children", &inner.children.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Display, OverlayStyle};
    use std::cell::Cell;

    #[test]
    fn append_and_remove_children() {
        let parent = Node::new("container");
        let a = Node::new("panel");
        let b = Node::new("panel");

        parent.append_child(&a);
        parent.append_child(&b);
        assert_eq!(parent.child_count(), 2);

        assert!(parent.remove_child(&a));
        assert_eq!(parent.child_count(), 1);
        assert!(parent.children()[0].same_node(&b));
    }

    #[test]
    fn remove_unrelated_child_is_false() {
        let parent = Node::new("container");
        let stranger = Node::new("panel");
        assert!(!parent.remove_child(&stranger));
    }

    #[test]
    fn removal_is_by_identity_not_structure() {
        let parent = Node::new("container");
        let a = Node::new("panel");
        let lookalike = Node::new("panel");
        parent.append_child(&a);
        assert!(!parent.remove_child(&lookalike));
        assert_eq!(parent.child_count(), 1);
    }

    #[test]
    fn self_append_is_ignored() {
        let node = Node::new("container");
        node.append_child(&node.clone());
        assert_eq!(node.child_count(), 0);
    }

    #[test]
    fn attributes_class_text_round_trip() {
        let node = Node::new("panel");
        node.set_attribute("data-id", "42");
        node.set_class("scrim-panel");
        node.set_text("hello");

        assert_eq!(node.attribute("data-id").as_deref(), Some("42"));
        assert_eq!(node.attribute("missing"), None);
        assert_eq!(node.class().as_deref(), Some("scrim-panel"));
        assert_eq!(node.text().as_deref(), Some("hello"));
    }

    #[test]
    fn find_by_class_searches_depth_first() {
        let root = Node::new("container");
        let header = Node::new("header");
        let button = Node::new("button");
        button.set_class("confirm");
        header.append_child(&button);
        root.append_child(&header);

        let found = root.find_by_class("confirm").expect("button present");
        assert!(found.same_node(&button));
        assert!(root.find_by_class("absent").is_none());
    }

    #[test]
    fn merge_style_keeps_unset_fields() {
        let node = Node::new("container");
        node.set_style(OverlayStyle::new().display(Display::Block).inset(0));
        node.merge_style(&OverlayStyle::new().display(Display::None));

        let style = node.style();
        assert_eq!(style.display, Some(Display::None));
        assert_eq!(style.inset, Some(0));
    }

    #[test]
    fn update_style_can_clear_fields() {
        let node = Node::new("container");
        node.set_style(OverlayStyle::new().opacity(0.5));
        node.update_style(|style| style.opacity = None);
        assert_eq!(node.style().opacity, None);
    }

    #[test]
    fn activate_runs_installed_callback() {
        let node = Node::new("button");
        let hits = Rc::new(Cell::new(0));
        {
            let hits = Rc::clone(&hits);
            node.set_on_activate(Rc::new(move || hits.set(hits.get() + 1)));
        }
        node.activate();
        node.activate();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn activate_without_callback_is_noop() {
        Node::new("button").activate();
    }

    #[test]
    fn activation_callback_may_mutate_the_tree() {
        let parent = Node::new("container");
        let child = Node::new("panel");
        parent.append_child(&child);

        {
            let parent2 = parent.clone();
            let child2 = child.clone();
            child.set_on_activate(Rc::new(move || {
                parent2.remove_child(&child2);
            }));
        }
        child.activate();
        assert_eq!(parent.child_count(), 0);
    }
}
