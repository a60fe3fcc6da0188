//! One-shot entrance reveals.
//!
//! An entrance group hides its elements at registration, waits for its
//! trigger, then tweens every element from the hidden state to the
//! terminal state with a per-element stagger. Groups play exactly once:
//! scrolling back above the threshold never rewinds or replays them.

use std::time::Duration;

use crate::animation::{AdvanceResult, Easing, Transition, Tween};
use crate::stage::{ElementId, Stage, Visual};
use crate::viewport::Viewport;

/// Identifier for a registered entrance group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntranceId(pub(crate) usize);

/// Condition that starts an entrance group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Fire as soon as the group is registered.
    Immediate,
    /// Fire when `source`'s top edge crosses the line at `fraction` of
    /// the viewport height. 0.8 means the lower fifth of the screen.
    TopCrosses { source: ElementId, fraction: f32 },
    /// Fire when at least `fraction` of `source`'s height is visible.
    Visible { source: ElementId, fraction: f32 },
}

impl Trigger {
    pub fn top_crosses(source: ElementId, fraction: f32) -> Self {
        Trigger::TopCrosses { source, fraction }
    }

    pub fn visible(source: ElementId, fraction: f32) -> Self {
        Trigger::Visible { source, fraction }
    }

    /// A trigger whose source element is gone can never fire; the
    /// section's fallback timer is what rescues that case.
    pub(crate) fn is_met(&self, stage: &Stage, viewport: &Viewport) -> bool {
        match self {
            Trigger::Immediate => true,
            Trigger::TopCrosses { source, fraction } => match stage.rect(*source) {
                Some(rect) => viewport.top_crosses(&rect, *fraction),
                None => false,
            },
            Trigger::Visible { source, fraction } => match stage.rect(*source) {
                Some(rect) => viewport.visible_fraction(&rect) >= *fraction,
                None => false,
            },
        }
    }
}

/// How a group of elements enters.
///
/// Element `i` animates from `from` to `to` over `duration_ms`, starting
/// `base_delay_ms + i * stagger_ms` after the trigger fires.
#[derive(Debug, Clone)]
pub struct EntranceSpec {
    pub from: Visual,
    pub to: Visual,
    pub trigger: Trigger,
    pub duration_ms: f32,
    pub base_delay_ms: f32,
    pub stagger_ms: f32,
    pub easing: Easing,
}

impl EntranceSpec {
    /// Reveal starting from `from`, ending fully visible.
    pub fn new(from: Visual) -> Self {
        Self {
            from,
            to: Visual::visible(),
            trigger: Trigger::Immediate,
            duration_ms: 1000.0,
            base_delay_ms: 0.0,
            stagger_ms: 0.0,
            easing: Easing::QuartOut,
        }
    }

    /// Override the terminal state, e.g. to land on a raised elevation.
    pub fn to(mut self, to: Visual) -> Self {
        self.to = to;
        self
    }

    pub fn trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn delay(mut self, base_delay_ms: f32) -> Self {
        self.base_delay_ms = base_delay_ms;
        self
    }

    pub fn stagger(mut self, stagger_ms: f32) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

pub(crate) struct EntranceGroup {
    elements: Vec<ElementId>,
    spec: EntranceSpec,
    tweens: Vec<Tween<Visual>>,
    fired: bool,
    done: bool,
}

impl EntranceGroup {
    pub fn new(elements: Vec<ElementId>, spec: EntranceSpec) -> Self {
        // An empty group is trivially complete so fallbacks never wait
        // on it.
        let done = elements.is_empty();
        Self {
            elements,
            spec,
            tweens: Vec::new(),
            fired: done,
            done,
        }
    }

    /// Hide every element at the `from` state. Runs once at
    /// registration, before the trigger is evaluated.
    pub fn prepare(&self, stage: &mut Stage) {
        for &element in &self.elements {
            stage.set_base(element, self.spec.from);
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn contains(&self, element: ElementId) -> bool {
        self.elements.contains(&element)
    }

    /// Evaluate the trigger and arm the per-element tweens on the first
    /// tick or scroll where it holds. Returns true if the group fired.
    pub fn try_fire(&mut self, stage: &Stage, viewport: &Viewport, now: Duration) -> bool {
        if self.fired || !self.spec.trigger.is_met(stage, viewport) {
            return false;
        }
        self.fired = true;
        self.tweens = (0..self.elements.len())
            .map(|i| {
                let transition = Transition::new(self.spec.duration_ms, self.spec.easing.clone())
                    .delay(self.spec.base_delay_ms + i as f32 * self.spec.stagger_ms);
                let mut tween = Tween::new(self.spec.from, transition);
                tween.animate_to(self.spec.to, now);
                tween
            })
            .collect();
        log::debug!(
            "entrance fired for {} element(s) ({:?})",
            self.elements.len(),
            self.spec.trigger
        );
        true
    }

    pub fn advance(&mut self, stage: &mut Stage, now: Duration) {
        if self.done || !self.fired {
            return;
        }
        let mut all_finished = true;
        for (tween, &element) in self.tweens.iter_mut().zip(&self.elements) {
            if let AdvanceResult::Changed(visual) = tween.advance(now) {
                stage.set_base(element, visual);
            }
            if !tween.is_finished() {
                all_finished = false;
            }
        }
        if all_finished {
            self.done = true;
        }
    }

    /// Jump every element to the terminal state and retire the group.
    ///
    /// Consumes the trigger if it has not fired yet, so a later scroll
    /// past the threshold is a no-op. Calling this on a completed group
    /// does nothing, which is what makes trigger and fallback safe to
    /// race against each other.
    pub fn force_complete(&mut self, stage: &mut Stage) {
        if self.done {
            return;
        }
        if self.fired {
            for (tween, &element) in self.tweens.iter_mut().zip(&self.elements) {
                if let Some(visual) = tween.snap_to_target() {
                    stage.set_base(element, visual);
                }
            }
        } else {
            self.fired = true;
            for &element in &self.elements {
                stage.set_base(element, self.spec.to);
            }
        }
        self.done = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn setup() -> (Stage, Viewport) {
        (Stage::new(), Viewport::new(1440.0, 900.0))
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_prepare_hides_elements() {
        let (mut stage, _) = setup();
        let el = stage.insert(Rect::new(0.0, 0.0, 100.0, 100.0));
        let spec = EntranceSpec::new(Visual::hidden().offset_y(50.0));
        let group = EntranceGroup::new(vec![el], spec);
        group.prepare(&mut stage);
        let visual = stage.visual(el).unwrap();
        assert_eq!(visual.opacity, 0.0);
        assert_eq!(visual.offset.y, 50.0);
    }

    #[test]
    fn test_fires_once_and_never_replays() {
        let (mut stage, mut viewport) = setup();
        let el = stage.insert(Rect::new(0.0, 2000.0, 100.0, 100.0));
        let spec = EntranceSpec::new(Visual::hidden())
            .trigger(Trigger::top_crosses(el, 0.8))
            .duration(100.0);
        let mut group = EntranceGroup::new(vec![el], spec);
        group.prepare(&mut stage);

        assert!(!group.try_fire(&stage, &viewport, ms(0)));

        viewport.scroll_y = 1500.0;
        assert!(group.try_fire(&stage, &viewport, ms(100)));
        group.advance(&mut stage, ms(200));
        assert!(group.is_done());
        assert_eq!(stage.visual(el).unwrap().opacity, 1.0);

        // Scrolling back above the threshold changes nothing.
        viewport.scroll_y = 0.0;
        assert!(!group.try_fire(&stage, &viewport, ms(300)));
        let writes = stage.write_count();
        group.advance(&mut stage, ms(400));
        assert_eq!(stage.write_count(), writes);
    }

    #[test]
    fn test_stagger_orders_completion() {
        let (mut stage, viewport) = setup();
        let elements: Vec<_> = (0..3)
            .map(|i| stage.insert(Rect::new(0.0, i as f32 * 120.0, 100.0, 100.0)))
            .collect();
        let spec = EntranceSpec::new(Visual::hidden())
            .duration(800.0)
            .stagger(200.0)
            .easing(Easing::Linear);
        let mut group = EntranceGroup::new(elements.clone(), spec);
        group.prepare(&mut stage);
        group.try_fire(&stage, &viewport, ms(0));

        // At 800ms the first card is done, the second is mid-flight,
        // the third quarter way in.
        group.advance(&mut stage, ms(800));
        assert_eq!(stage.visual(elements[0]).unwrap().opacity, 1.0);
        assert_eq!(stage.visual(elements[1]).unwrap().opacity, 0.75);
        assert_eq!(stage.visual(elements[2]).unwrap().opacity, 0.5);
        assert!(!group.is_done());

        group.advance(&mut stage, ms(1200));
        assert!(group.is_done());
        assert_eq!(stage.visual(elements[2]).unwrap().opacity, 1.0);
    }

    #[test]
    fn test_force_complete_before_fire_consumes_trigger() {
        let (mut stage, mut viewport) = setup();
        let el = stage.insert(Rect::new(0.0, 5000.0, 100.0, 100.0));
        let spec = EntranceSpec::new(Visual::hidden()).trigger(Trigger::top_crosses(el, 0.8));
        let mut group = EntranceGroup::new(vec![el], spec);
        group.prepare(&mut stage);

        group.force_complete(&mut stage);
        assert!(group.is_done());
        assert_eq!(stage.visual(el).unwrap(), Visual::visible());

        // The trigger condition later becoming true is ignored.
        viewport.scroll_y = 5000.0;
        assert!(!group.try_fire(&stage, &viewport, ms(1000)));
    }

    #[test]
    fn test_empty_group_is_trivially_done() {
        let group = EntranceGroup::new(Vec::new(), EntranceSpec::new(Visual::hidden()));
        assert!(group.is_done());
    }
}
