#![forbid(unsafe_code)]

//! Entrance and exit animations for side panels and snackbars.
//!
//! Animations are expressed two ways:
//!
//! - [`AnimationState`] tracks a time-based phase against a wall clock
//!   (`web_time::Instant`), for callers that drive frames themselves.
//! - [`run_animation`] plays a spec against a live [`Node`] through the
//!   [`Scheduler`], one keyframe per scheduled turn over a fixed frame
//!   count, so it is deterministic under `run_until_idle`.
//!
//! Transient style fields (`offset`, `opacity`) are cleared when the
//! final keyframe lands; a finished animation leaves no style residue.

use scrim_core::node::Node;
use scrim_core::placement::SideEdge;
use scrim_core::runtime::Scheduler;
use web_time::{Duration, Instant};

/// Distance, in cells, a sliding element starts away from its rest point.
const SLIDE_DISTANCE: i32 = 32;

/// Keyframes per scheduler-driven animation.
const FRAMES: u32 = 8;

/// Entrance variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entrance {
    SlideIn(SideEdge),
    FadeIn,
}

/// Exit variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    SlideOut(SideEdge),
    FadeOut,
}

/// A kind's default animation pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSpec {
    pub entrance: Entrance,
    pub exit: Exit,
    pub duration: Duration,
}

impl AnimationSpec {
    /// Default for side panels: slide in from the attached edge.
    pub fn side(edge: SideEdge) -> Self {
        Self {
            entrance: Entrance::SlideIn(edge),
            exit: Exit::SlideOut(edge),
            duration: Duration::from_millis(200),
        }
    }

    /// Default for snackbars: fade.
    pub fn snackbar() -> Self {
        Self {
            entrance: Entrance::FadeIn,
            exit: Exit::FadeOut,
            duration: Duration::from_millis(150),
        }
    }
}

/// Animation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationPhase {
    #[default]
    Idle,
    Entering,
    Exiting,
}

/// Time-based animation progress tracker.
#[derive(Debug, Clone, Copy)]
pub struct AnimationState {
    phase: AnimationPhase,
    started_at: Instant,
    duration: Duration,
}

impl AnimationState {
    pub fn new(duration: Duration) -> Self {
        Self {
            phase: AnimationPhase::Idle,
            started_at: Instant::now(),
            duration,
        }
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    pub fn start_entering(&mut self) {
        self.phase = AnimationPhase::Entering;
        self.started_at = Instant::now();
    }

    pub fn start_exiting(&mut self) {
        self.phase = AnimationPhase::Exiting;
        self.started_at = Instant::now();
    }

    /// Eased progress in `[0.0, 1.0]` at `now`. Idle reports 1.0.
    pub fn progress_at(&self, now: Instant) -> f32 {
        if self.phase == AnimationPhase::Idle || self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let linear = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        ease_out_cubic(linear)
    }

    pub fn is_complete_at(&self, now: Instant) -> bool {
        self.progress_at(now) >= 1.0
    }
}

/// Ease-out cubic: fast start, gentle settle.
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inverted = 1.0 - t;
    1.0 - inverted * inverted * inverted
}

/// Translation for a slide at `progress`, moving toward rest from `edge`.
pub fn slide_offset(progress: f32, edge: SideEdge) -> (i32, i32) {
    let remaining = ((1.0 - progress.clamp(0.0, 1.0)) * SLIDE_DISTANCE as f32).round() as i32;
    match edge {
        SideEdge::Left => (-remaining, 0),
        SideEdge::Right => (remaining, 0),
        SideEdge::Top => (0, -remaining),
        SideEdge::Bottom => (0, remaining),
    }
}

/// Opacity for a fade at `progress`.
pub fn fade_opacity(progress: f32) -> f32 {
    progress.clamp(0.0, 1.0)
}

/// Play the entrance animation of `spec` against `node`.
///
/// The initial keyframe is applied synchronously; subsequent keyframes
/// each take one scheduler turn. The final frame clears the transient
/// `offset`/`opacity` fields.
pub fn run_animation(scheduler: &Scheduler, node: &Node, spec: &AnimationSpec) {
    apply_keyframe(node, spec.entrance, 0.0);
    schedule_keyframe(scheduler.clone(), node.clone(), spec.entrance, 1);
}

fn schedule_keyframe(scheduler: Scheduler, node: Node, entrance: Entrance, frame: u32) {
    let next_scheduler = scheduler.clone();
    scheduler.post(move || {
        if frame >= FRAMES {
            node.update_style(|style| {
                style.offset = None;
                style.opacity = None;
            });
            return;
        }
        let progress = ease_out_cubic(frame as f32 / FRAMES as f32);
        apply_keyframe(&node, entrance, progress);
        schedule_keyframe(next_scheduler, node, entrance, frame + 1);
    });
}

fn apply_keyframe(node: &Node, entrance: Entrance, progress: f32) {
    node.update_style(|style| match entrance {
        Entrance::SlideIn(edge) => style.offset = Some(slide_offset(progress, edge)),
        Entrance::FadeIn => style.opacity = Some(fade_opacity(progress)),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_cubic_is_bounded_and_monotonic() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);

        let mut last = 0.0;
        for step in 0..=10 {
            let value = ease_out_cubic(step as f32 / 10.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn slide_offset_moves_toward_rest() {
        assert_eq!(slide_offset(0.0, SideEdge::Right), (SLIDE_DISTANCE, 0));
        assert_eq!(slide_offset(1.0, SideEdge::Right), (0, 0));
        assert_eq!(slide_offset(0.0, SideEdge::Left), (-SLIDE_DISTANCE, 0));
        assert_eq!(slide_offset(0.0, SideEdge::Top), (0, -SLIDE_DISTANCE));
        assert_eq!(slide_offset(0.0, SideEdge::Bottom), (0, SLIDE_DISTANCE));
    }

    #[test]
    fn fade_opacity_clamps() {
        assert_eq!(fade_opacity(-0.5), 0.0);
        assert_eq!(fade_opacity(0.5), 0.5);
        assert_eq!(fade_opacity(1.5), 1.0);
    }

    #[test]
    fn progress_tracks_wall_clock() {
        let mut state = AnimationState::new(Duration::from_millis(100));
        assert_eq!(state.progress_at(Instant::now()), 1.0); // idle

        state.start_entering();
        let start = Instant::now();
        assert!(state.progress_at(start) < 1.0);
        assert!(state.is_complete_at(start + Duration::from_millis(200)));
        assert_eq!(state.phase(), AnimationPhase::Entering);
    }

    #[test]
    fn zero_duration_is_immediately_complete() {
        let mut state = AnimationState::new(Duration::ZERO);
        state.start_entering();
        assert!(state.is_complete_at(Instant::now()));
    }

    #[test]
    fn run_animation_applies_then_clears_transient_fields() {
        let scheduler = Scheduler::new();
        let node = Node::new("panel");
        run_animation(&scheduler, &node, &AnimationSpec::side(SideEdge::Right));

        // Initial keyframe lands synchronously, fully offset.
        assert_eq!(node.style().offset, Some((SLIDE_DISTANCE, 0)));

        scheduler.run_until_idle();
        assert_eq!(node.style().offset, None);
        assert_eq!(node.style().opacity, None);
    }

    #[test]
    fn fade_animation_drives_opacity() {
        let scheduler = Scheduler::new();
        let node = Node::new("toast");
        run_animation(&scheduler, &node, &AnimationSpec::snackbar());
        assert_eq!(node.style().opacity, Some(0.0));

        scheduler.run_until_idle();
        assert_eq!(node.style().opacity, None);
    }
}
