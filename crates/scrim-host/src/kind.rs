#![forbid(unsafe_code)]

//! Per-kind defaults and the utilities handed to builders.
//!
//! Two distinct sets of rules live here:
//!
//! - [`KindUtils`]: item-side defaults (resting anchor, entrance/exit
//!   animation) resolved from an item's kind and placement, exposed to
//!   container builders and templates.
//! - [`apply_open_overlay`]: the coordinator-side rules applied to the
//!   shared container when an item opens (backdrop and pointer routing).

use scrim_core::node::Node;
use scrim_core::placement::{CornerPosition, Placement, SideEdge};
use scrim_core::registry::ItemKind;
use scrim_core::runtime::Scheduler;
use scrim_core::style::{Anchor, Backdrop, Display, OverlayStyle, PointerEvents, Position};

use crate::animation::{self, AnimationSpec};

/// Edge a side panel attaches to when none is requested.
pub const DEFAULT_SIDE_EDGE: SideEdge = SideEdge::Right;

/// Corner a snackbar pins to when none is requested.
pub const DEFAULT_SNACKBAR_CORNER: CornerPosition = CornerPosition::BottomRight;

/// Kind-resolved capabilities passed to container builders and templates.
#[derive(Clone)]
pub struct KindUtils {
    kind: ItemKind,
    placement: Option<Placement>,
    animation: Option<AnimationSpec>,
    scheduler: Scheduler,
}

impl KindUtils {
    /// Resolve utilities for `kind`, normalizing the requested placement
    /// to something the kind understands (edge for side panels, corner
    /// for snackbars, nothing for dialogs).
    pub(crate) fn resolve(
        kind: ItemKind,
        requested: Option<Placement>,
        scheduler: Scheduler,
    ) -> Self {
        let placement = match kind {
            ItemKind::Dialog => None,
            ItemKind::Side => {
                let edge = match requested {
                    Some(Placement::Edge(edge)) => edge,
                    _ => DEFAULT_SIDE_EDGE,
                };
                Some(Placement::Edge(edge))
            }
            ItemKind::Snackbar => {
                let corner = match requested {
                    Some(Placement::Corner(corner)) => corner,
                    _ => DEFAULT_SNACKBAR_CORNER,
                };
                Some(Placement::Corner(corner))
            }
        };
        let animation = match placement {
            Some(Placement::Edge(edge)) => Some(AnimationSpec::side(edge)),
            Some(Placement::Corner(_)) => Some(AnimationSpec::snackbar()),
            None => None,
        };
        Self {
            kind,
            placement,
            animation,
            scheduler,
        }
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// The kind's default entrance/exit animation, if it has one.
    pub fn animation(&self) -> Option<&AnimationSpec> {
        self.animation.as_ref()
    }

    /// The kind's default positional style for an item's container
    /// element, merged with `overrides` (overrides win).
    pub fn container_style(&self, overrides: Option<&OverlayStyle>) -> OverlayStyle {
        let anchor = match self.placement {
            None => Anchor::Center,
            Some(Placement::Edge(edge)) => Anchor::Edge(edge),
            Some(Placement::Corner(corner)) => Anchor::Corner(corner),
        };
        let mut defaults = OverlayStyle::new()
            .position(Position::Absolute)
            .anchor(anchor);
        if self.kind == ItemKind::Snackbar {
            // The container swallows clicks for snackbars; the snackbar's
            // own subtree still intercepts.
            defaults = defaults.pointer_events(PointerEvents::Auto);
        }
        match overrides {
            Some(overrides) => defaults.merge(overrides),
            None => defaults,
        }
    }

    /// Play the kind's default entrance animation against a live element.
    /// No-op for kinds without one (dialogs).
    pub fn run_animation(&self, node: &Node) {
        if let Some(spec) = &self.animation {
            animation::run_animation(&self.scheduler, node, spec);
        }
    }
}

/// Apply the open-time overlay rules for `kind` to the shared container.
///
/// Dialogs and side panels dim the page behind a translucent black
/// backdrop and keep pointer events on the container (blocking the page
/// underneath). Snackbars clear the backdrop and disable container
/// pointer events so clicks pass through.
pub(crate) fn apply_open_overlay(container: &Node, kind: ItemKind) {
    container.update_style(|style| {
        style.display = Some(Display::Block);
        match kind {
            ItemKind::Dialog | ItemKind::Side => {
                style.backdrop = Some(Backdrop::DIM);
                style.pointer_events = Some(PointerEvents::Auto);
            }
            ItemKind::Snackbar => {
                style.backdrop = None;
                style.pointer_events = Some(PointerEvents::None);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Entrance;

    #[test]
    fn dialog_resolves_centered_with_no_animation() {
        let utils = KindUtils::resolve(ItemKind::Dialog, None, Scheduler::new());
        assert_eq!(utils.placement(), None);
        assert!(utils.animation().is_none());
        assert_eq!(
            utils.container_style(None).anchor,
            Some(Anchor::Center)
        );
    }

    #[test]
    fn side_defaults_to_right_edge() {
        let utils = KindUtils::resolve(ItemKind::Side, None, Scheduler::new());
        assert_eq!(utils.placement(), Some(Placement::Edge(SideEdge::Right)));
        assert_eq!(
            utils.animation().map(|a| a.entrance),
            Some(Entrance::SlideIn(SideEdge::Right))
        );
    }

    #[test]
    fn mismatched_placement_is_normalized() {
        let utils = KindUtils::resolve(
            ItemKind::Side,
            Some(Placement::Corner(CornerPosition::TopLeft)),
            Scheduler::new(),
        );
        assert_eq!(utils.placement(), Some(Placement::Edge(DEFAULT_SIDE_EDGE)));

        let utils = KindUtils::resolve(
            ItemKind::Snackbar,
            Some(Placement::Edge(SideEdge::Left)),
            Scheduler::new(),
        );
        assert_eq!(
            utils.placement(),
            Some(Placement::Corner(DEFAULT_SNACKBAR_CORNER))
        );
    }

    #[test]
    fn snackbar_container_style_intercepts_its_own_clicks() {
        let utils = KindUtils::resolve(
            ItemKind::Snackbar,
            Some(Placement::Corner(CornerPosition::TopRight)),
            Scheduler::new(),
        );
        let style = utils.container_style(None);
        assert_eq!(style.anchor, Some(Anchor::Corner(CornerPosition::TopRight)));
        assert_eq!(style.pointer_events, Some(PointerEvents::Auto));
    }

    #[test]
    fn container_style_overrides_win() {
        let utils = KindUtils::resolve(ItemKind::Dialog, None, Scheduler::new());
        let style = utils.container_style(Some(
            &OverlayStyle::new().anchor(Anchor::Edge(SideEdge::Top)).inset(2),
        ));
        assert_eq!(style.anchor, Some(Anchor::Edge(SideEdge::Top)));
        assert_eq!(style.inset, Some(2));
        assert_eq!(style.position, Some(Position::Absolute));
    }

    #[test]
    fn dialog_run_animation_is_noop() {
        let scheduler = Scheduler::new();
        let utils = KindUtils::resolve(ItemKind::Dialog, None, scheduler.clone());
        let node = Node::new("container");
        utils.run_animation(&node);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(node.style().offset, None);
    }

    #[test]
    fn overlay_rules_per_kind() {
        let container = Node::new("overlay");

        apply_open_overlay(&container, ItemKind::Dialog);
        let style = container.style();
        assert_eq!(style.display, Some(Display::Block));
        assert_eq!(style.backdrop, Some(Backdrop::DIM));
        assert_eq!(style.pointer_events, Some(PointerEvents::Auto));

        apply_open_overlay(&container, ItemKind::Snackbar);
        let style = container.style();
        assert_eq!(style.backdrop, None);
        assert_eq!(style.pointer_events, Some(PointerEvents::None));
    }
}
