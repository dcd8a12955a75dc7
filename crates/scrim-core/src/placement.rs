#![forbid(unsafe_code)]

//! Placement vocabulary shared by items and styles.

/// Edge a slide-in panel is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SideEdge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Corner (or centered edge) position for transient notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerPosition {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// Resolved placement of an overlay item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Attached to a viewport edge (side panels).
    Edge(SideEdge),
    /// Pinned to a viewport corner (snackbars).
    Corner(CornerPosition),
}
