//! Visibility fallback timers.
//!
//! A fallback guards a set of elements against triggers that never
//! fire (a dead trigger source, a viewport that never scrolls). When it
//! comes due it forces the covered entrance groups to their terminal
//! state. Firing is one-shot and group completion makes timer and
//! trigger mutually idempotent: whichever runs first wins and the other
//! becomes a no-op.

use std::time::Duration;

use crate::stage::ElementId;

use super::SectionId;

/// Identifier for an armed fallback timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FallbackId(pub(crate) usize);

pub(crate) struct FallbackTimer {
    pub section: SectionId,
    pub elements: Vec<ElementId>,
    pub due_at: Duration,
    pub fired: bool,
}

impl FallbackTimer {
    pub fn new(section: SectionId, elements: Vec<ElementId>, due_at: Duration) -> Self {
        Self {
            section,
            elements,
            due_at,
            fired: false,
        }
    }

    pub fn is_due(&self, now: Duration) -> bool {
        !self.fired && now >= self.due_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_exactly_at_deadline() {
        let timer = FallbackTimer::new(SectionId(0), Vec::new(), Duration::from_millis(2000));
        assert!(!timer.is_due(Duration::from_millis(1999)));
        assert!(timer.is_due(Duration::from_millis(2000)));
        assert!(timer.is_due(Duration::from_millis(2001)));
    }

    #[test]
    fn test_fired_timer_is_never_due_again() {
        let mut timer = FallbackTimer::new(SectionId(0), Vec::new(), Duration::from_millis(100));
        assert!(timer.is_due(Duration::from_millis(100)));
        timer.fired = true;
        assert!(!timer.is_due(Duration::from_millis(5000)));
    }
}
