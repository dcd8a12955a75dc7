#![forbid(unsafe_code)]

//! Overlay style model.
//!
//! A deliberately small, typed subset of presentation state: only the
//! properties the overlay coordinator derives (visibility, backdrop,
//! pointer routing, anchoring, transient animation offsets). Every field
//! is optional so styles compose by field-wise merge where the incoming
//! side wins; unset fields leave the base untouched.

use crate::placement::{CornerPosition, SideEdge};

/// Whether the element occupies the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

/// Whether the element intercepts pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvents {
    Auto,
    None,
}

/// Positioning scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Pinned to the viewport.
    Fixed,
    /// Positioned within the nearest positioned ancestor.
    Absolute,
}

/// Where an item rests within the shared container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Center,
    Edge(SideEdge),
    Corner(CornerPosition),
}

/// Solid color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Backdrop tint (color + opacity).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backdrop {
    /// Backdrop color.
    pub color: Rgb,
    /// Opacity in `[0.0, 1.0]`.
    pub opacity: f32,
}

impl Backdrop {
    /// Translucent dark scrim used behind dialogs and side panels.
    pub const DIM: Backdrop = Backdrop::new(Rgb::BLACK, 0.2);

    pub const fn new(color: Rgb, opacity: f32) -> Self {
        Self { color, opacity }
    }
}

/// Composable overlay style. Unset fields inherit from whatever the style
/// is merged over.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayStyle {
    pub display: Option<Display>,
    pub position: Option<Position>,
    pub anchor: Option<Anchor>,
    /// Uniform inset from every viewport edge; `Some(0)` spans the viewport.
    pub inset: Option<u16>,
    pub backdrop: Option<Backdrop>,
    pub pointer_events: Option<PointerEvents>,
    /// Transient translation in cells, used by entrance/exit animations.
    pub offset: Option<(i32, i32)>,
    /// Transient opacity override, used by fade animations.
    pub opacity: Option<f32>,
}

impl OverlayStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Baseline for the shared container: a fixed, full-viewport,
    /// hidden-by-default overlay surface.
    pub fn overlay_base() -> Self {
        Self::new()
            .position(Position::Fixed)
            .inset(0)
            .display(Display::None)
    }

    pub fn display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn inset(mut self, inset: u16) -> Self {
        self.inset = Some(inset);
        self
    }

    pub fn backdrop(mut self, backdrop: Backdrop) -> Self {
        self.backdrop = Some(backdrop);
        self
    }

    pub fn pointer_events(mut self, pointer_events: PointerEvents) -> Self {
        self.pointer_events = Some(pointer_events);
        self
    }

    pub fn offset(mut self, x: i32, y: i32) -> Self {
        self.offset = Some((x, y));
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Field-wise merge; set fields of `overrides` win.
    pub fn merge(&self, overrides: &OverlayStyle) -> OverlayStyle {
        OverlayStyle {
            display: overrides.display.or(self.display),
            position: overrides.position.or(self.position),
            anchor: overrides.anchor.or(self.anchor),
            inset: overrides.inset.or(self.inset),
            backdrop: overrides.backdrop.or(self.backdrop),
            pointer_events: overrides.pointer_events.or(self.pointer_events),
            offset: overrides.offset.or(self.offset),
            opacity: overrides.opacity.or(self.opacity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn overlay_base_is_fixed_full_viewport_hidden() {
        let base = OverlayStyle::overlay_base();
        assert_eq!(base.display, Some(Display::None));
        assert_eq!(base.position, Some(Position::Fixed));
        assert_eq!(base.inset, Some(0));
        assert_eq!(base.backdrop, None);
        assert_eq!(base.pointer_events, None);
    }

    #[test]
    fn merge_prefers_override_fields() {
        let base = OverlayStyle::new()
            .display(Display::Block)
            .backdrop(Backdrop::DIM);
        let overrides = OverlayStyle::new().display(Display::None);

        let merged = base.merge(&overrides);
        assert_eq!(merged.display, Some(Display::None));
        assert_eq!(merged.backdrop, Some(Backdrop::DIM));
    }

    #[test]
    fn merge_keeps_base_where_override_unset() {
        let base = OverlayStyle::new()
            .anchor(Anchor::Center)
            .pointer_events(PointerEvents::Auto);
        let merged = base.merge(&OverlayStyle::new());
        assert_eq!(merged, base);
    }

    proptest! {
        #[test]
        fn merge_is_override_biased_per_field(
            base_inset in proptest::option::of(0u16..10),
            over_inset in proptest::option::of(0u16..10),
            base_offset in proptest::option::of((-5i32..5, -5i32..5)),
            over_offset in proptest::option::of((-5i32..5, -5i32..5)),
        ) {
            let mut base = OverlayStyle::new();
            base.inset = base_inset;
            base.offset = base_offset;
            let mut overrides = OverlayStyle::new();
            overrides.inset = over_inset;
            overrides.offset = over_offset;

            let merged = base.merge(&overrides);
            prop_assert_eq!(merged.inset, over_inset.or(base_inset));
            prop_assert_eq!(merged.offset, over_offset.or(base_offset));
        }
    }
}
