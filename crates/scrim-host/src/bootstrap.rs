#![forbid(unsafe_code)]

//! Locates or creates the shared overlay container.
//!
//! The host never styles an element it did not claim: adoption is keyed
//! on the [`CONTAINER_MARKER`] attribute, and only direct children of
//! the root are considered. When nothing is adoptable a fresh, detached
//! container is created; attaching it to the root is the host's job at
//! init time.

use scrim_core::node::Node;

/// Attribute that marks an element as the overlay container.
pub const CONTAINER_MARKER: &str = "data-scrim-host";

/// Class applied to containers this module creates.
pub const DEFAULT_CLASS: &str = "scrim-overlay";

/// Adopt the root's marked direct child, or create a detached container.
///
/// A created container carries the marker and `class_name` (falling back
/// to [`DEFAULT_CLASS`]); an adopted one is returned untouched.
pub fn overlay_container(root: &Node, class_name: Option<&str>) -> Node {
    for child in root.children() {
        if child.attribute(CONTAINER_MARKER).is_some() {
            return child;
        }
    }
    let container = Node::new("container");
    container.set_attribute(CONTAINER_MARKER, "");
    container.set_class(class_name.unwrap_or(DEFAULT_CLASS));
    container
}
