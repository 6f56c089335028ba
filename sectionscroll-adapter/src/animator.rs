use sectionscroll::{Easing, Point};

use crate::Throttle;

/// Progress above this snaps to 1 so the animation lands exactly on its target.
const SETTLE_PROGRESS: f64 = 0.999;

/// Identifies the request a tick belongs to.
///
/// A tick only runs when its ticket's target equals the animator's latest requested target, so
/// callbacks scheduled for a superseded `scroll_to` become no-ops.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationTicket {
    pub target: Point,
}

/// One scroll-to transition. `delta` is captured once at start.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAnimation {
    pub from: Point,
    pub delta: Point,
    pub target: Point,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl ScrollAnimation {
    pub fn new(from: Point, target: Point, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            delta: target - from,
            target,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    /// Eased progress in `[0, 1]`.
    pub fn progress(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0);
        let eased = self.easing.sample(t);
        if eased > SETTLE_PROGRESS { 1.0 } else { eased }
    }

    pub fn position_at(&self, progress: f64) -> Point {
        if progress >= 1.0 {
            return self.target;
        }
        self.from + self.delta * progress
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}

/// A position produced by an animation tick.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationFrame {
    pub position: Point,
    /// `true` on the final tick; the animation has been retired.
    pub done: bool,
}

/// Drives at most one scroll-to animation at a time.
///
/// The adapter calls [`ScrollAnimator::tick`] from its frame/timer callback. Ticks are throttled
/// to one per `throttle_ms`, except the completing tick, which always runs.
#[derive(Clone, Debug)]
pub struct ScrollAnimator {
    active: Option<ScrollAnimation>,
    latest_target: Option<Point>,
    throttle: Throttle,
    duration_ms: u64,
    easing: Easing,
}

impl ScrollAnimator {
    pub fn new(duration_ms: u64, throttle_ms: u64, easing: Easing) -> Self {
        Self {
            active: None,
            latest_target: None,
            throttle: Throttle::new(throttle_ms),
            duration_ms,
            easing,
        }
    }

    /// Applies to animations started after this call.
    pub fn reconfigure(&mut self, duration_ms: u64, throttle_ms: u64, easing: Easing) {
        self.duration_ms = duration_ms;
        self.throttle.set_interval_ms(throttle_ms);
        self.easing = easing;
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    pub fn animation(&self) -> Option<&ScrollAnimation> {
        self.active.as_ref()
    }

    pub fn latest_target(&self) -> Option<Point> {
        self.latest_target
    }

    /// Starts animating from `current` to `target`, replacing any running animation.
    pub fn scroll_to(&mut self, current: Point, target: Point, now_ms: u64) -> AnimationTicket {
        self.cancel();
        vtrace!(
            from_x = current.x,
            from_y = current.y,
            to_x = target.x,
            to_y = target.y,
            now_ms,
            "ScrollAnimator::scroll_to"
        );
        self.active = Some(ScrollAnimation::new(
            current,
            target,
            now_ms,
            self.duration_ms,
            self.easing,
        ));
        self.latest_target = Some(target);
        AnimationTicket { target }
    }

    pub fn cancel(&mut self) {
        self.active = None;
        self.throttle.reset();
    }

    /// Advances the animation `ticket` belongs to.
    ///
    /// Returns `None` for stale tickets, when nothing is running, or when throttled.
    pub fn tick(&mut self, ticket: AnimationTicket, now_ms: u64) -> Option<AnimationFrame> {
        if self.latest_target != Some(ticket.target) {
            vtrace!(now_ms, "ScrollAnimator::tick: stale ticket");
            return None;
        }
        let animation = self.active?;

        let progress = animation.progress(now_ms);
        let done = progress >= 1.0;
        if !done && !self.throttle.try_fire(now_ms) {
            return None;
        }
        if done {
            self.active = None;
            self.throttle.reset();
        }

        Some(AnimationFrame {
            position: animation.position_at(progress),
            done,
        })
    }

    /// Advances whatever animation is currently running.
    pub fn tick_active(&mut self, now_ms: u64) -> Option<AnimationFrame> {
        let ticket = AnimationTicket {
            target: self.active?.target,
        };
        self.tick(ticket, now_ms)
    }
}
