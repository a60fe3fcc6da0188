use std::time::Duration;

use super::{Animatable, Transition};

/// Result of advancing a tween by one step
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceResult<T> {
    /// Value unchanged, no write needed
    NoChange,
    /// Value changed to the contained new value
    Changed(T),
}

impl<T> AdvanceResult<T> {
    pub fn is_changed(&self) -> bool {
        matches!(self, AdvanceResult::Changed(_))
    }
}

/// A single animated value driven by an external clock.
///
/// The tween never reads wall time. Every call takes `now`, the host's
/// monotonic timestamp, which keeps playback deterministic: feeding the
/// same sequence of timestamps always yields the same sequence of values.
#[derive(Debug, Clone)]
pub struct Tween<T: Animatable> {
    start: T,
    target: T,
    current: T,
    transition: Transition,
    started_at: Option<Duration>,
    finished: bool,
}

impl<T: Animatable> Tween<T> {
    /// Create a tween resting at `value`.
    pub fn new(value: T, transition: Transition) -> Self {
        Self {
            start: value.clone(),
            target: value.clone(),
            current: value,
            transition,
            started_at: None,
            finished: true,
        }
    }

    /// Begin animating from the current value toward `target`.
    ///
    /// Re-targeting mid-flight restarts from wherever the value is now.
    /// Requesting the target the tween is already at, or already moving
    /// toward, is a no-op so repeated events don't restart playback.
    pub fn animate_to(&mut self, target: T, now: Duration) {
        if target == self.target {
            return;
        }
        self.start = self.current.clone();
        self.target = target;
        self.started_at = Some(now);
        self.finished = false;
    }

    /// Advance to `now`, returning the new value if it changed.
    pub fn advance(&mut self, now: Duration) -> AdvanceResult<T> {
        if self.finished {
            return AdvanceResult::NoChange;
        }
        let started_at = match self.started_at {
            Some(t) => t,
            None => return AdvanceResult::NoChange,
        };

        let elapsed_ms =
            now.saturating_sub(started_at).as_secs_f32() * 1000.0 - self.transition.delay_ms;
        if elapsed_ms < 0.0 {
            // Still inside the delay window.
            return AdvanceResult::NoChange;
        }

        let progress = if self.transition.duration_ms <= 0.0 {
            1.0
        } else {
            (elapsed_ms / self.transition.duration_ms).min(1.0)
        };

        let value = if progress >= 1.0 {
            self.finished = true;
            // Land exactly on the target, not on a lerp of it.
            self.target.clone()
        } else {
            let eased = self.transition.easing.evaluate(progress);
            T::lerp(&self.start, &self.target, eased)
        };

        if value == self.current {
            return AdvanceResult::NoChange;
        }
        self.current = value.clone();
        AdvanceResult::Changed(value)
    }

    /// Jump straight to the target and stop.
    ///
    /// Returns the target value if this actually moved the tween, `None`
    /// when it was already resting there, so callers can skip the write.
    pub fn snap_to_target(&mut self) -> Option<T> {
        let moved = !self.finished || self.current != self.target;
        self.finished = true;
        if moved {
            self.current = self.target.clone();
            Some(self.current.clone())
        } else {
            None
        }
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Easing;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_new_tween_is_at_rest() {
        let mut tween = Tween::new(0.5_f32, Transition::new(100.0, Easing::Linear));
        assert!(tween.is_finished());
        assert_eq!(tween.advance(ms(1000)), AdvanceResult::NoChange);
    }

    #[test]
    fn test_delay_window_produces_no_change() {
        let transition = Transition::new(100.0, Easing::Linear).delay(50.0);
        let mut tween = Tween::new(0.0_f32, transition);
        tween.animate_to(1.0, ms(0));
        assert_eq!(tween.advance(ms(25)), AdvanceResult::NoChange);
        assert_eq!(tween.advance(ms(49)), AdvanceResult::NoChange);
        // Half way through after the delay has elapsed.
        assert_eq!(tween.advance(ms(100)), AdvanceResult::Changed(0.5));
    }

    #[test]
    fn test_lands_exactly_on_target() {
        let mut tween = Tween::new(0.0_f32, Transition::new(800.0, Easing::QuintOut));
        tween.animate_to(1.0, ms(0));
        assert_eq!(tween.advance(ms(800)), AdvanceResult::Changed(1.0));
        assert!(tween.is_finished());
        assert_eq!(tween.advance(ms(900)), AdvanceResult::NoChange);
    }

    #[test]
    fn test_retarget_restarts_from_current_value() {
        let mut tween = Tween::new(0.0_f32, Transition::new(100.0, Easing::Linear));
        tween.animate_to(1.0, ms(0));
        assert_eq!(tween.advance(ms(50)), AdvanceResult::Changed(0.5));
        tween.animate_to(0.0, ms(50));
        // One quarter of the way back down.
        assert_eq!(tween.advance(ms(75)), AdvanceResult::Changed(0.375));
        assert_eq!(tween.advance(ms(150)), AdvanceResult::Changed(0.0));
    }

    #[test]
    fn test_same_target_does_not_restart() {
        let mut tween = Tween::new(0.0_f32, Transition::new(100.0, Easing::Linear));
        tween.animate_to(1.0, ms(0));
        tween.advance(ms(60));
        tween.animate_to(1.0, ms(60));
        // Progress keeps counting from the original start time.
        assert_eq!(tween.advance(ms(80)), AdvanceResult::Changed(0.8));
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut tween = Tween::new(0.0_f32, Transition::new(0.0, Easing::Linear));
        tween.animate_to(1.0, ms(10));
        assert_eq!(tween.advance(ms(10)), AdvanceResult::Changed(1.0));
        assert!(tween.is_finished());
    }

    #[test]
    fn test_snap_to_target() {
        let mut tween = Tween::new(0.0_f32, Transition::new(100.0, Easing::Linear));
        tween.animate_to(1.0, ms(0));
        tween.advance(ms(30));
        assert_eq!(tween.snap_to_target(), Some(1.0));
        assert!(tween.is_finished());
        // Second snap is a no-op.
        assert_eq!(tween.snap_to_target(), None);
        assert_eq!(tween.advance(ms(500)), AdvanceResult::NoChange);
    }
}
