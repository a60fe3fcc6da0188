//! Scroll-linked parallax.
//!
//! A parallax binding maps a source section's progress through the
//! viewport onto a target element's overlay. It is pure with respect to
//! scroll position: the same scroll offset always produces the same
//! overlay, and a still page produces no writes.

use crate::animation::Animatable;
use crate::stage::{ElementId, Overlay, Stage};
use crate::viewport::{ScrollSpan, Viewport};

/// Identifier for a parallax binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParallaxId(pub(crate) usize);

/// How scroll progress maps onto a target element.
///
/// `offset_percent` is the vertical drift across the span, expressed as
/// a percentage of the target's own height so backgrounds of any size
/// drift proportionally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxSpec {
    /// Element whose rect defines the scroll span, usually the section
    /// container.
    pub source: ElementId,
    /// Element receiving the drift.
    pub target: ElementId,
    pub span: ScrollSpan,
    pub offset_percent: (f32, f32),
    pub scale: (f32, f32),
}

impl ParallaxSpec {
    pub fn new(source: ElementId, target: ElementId) -> Self {
        Self {
            source,
            target,
            span: ScrollSpan::TopToLeave,
            offset_percent: (0.0, 0.0),
            scale: (1.0, 1.0),
        }
    }

    pub fn span(mut self, span: ScrollSpan) -> Self {
        self.span = span;
        self
    }

    pub fn offset_percent(mut self, from: f32, to: f32) -> Self {
        self.offset_percent = (from, to);
        self
    }

    pub fn scale(mut self, from: f32, to: f32) -> Self {
        self.scale = (from, to);
        self
    }
}

pub(crate) struct ParallaxBinding {
    spec: ParallaxSpec,
    fraction: f32,
}

impl ParallaxBinding {
    pub fn new(spec: ParallaxSpec) -> Self {
        Self {
            spec,
            fraction: 0.0,
        }
    }

    /// The last sampled progress through the span.
    #[allow(dead_code)]
    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    /// Sample the span at the current scroll position and write the
    /// target's overlay. Bindings whose source or target is gone go
    /// quiet rather than holding a stale drift.
    pub fn apply(&mut self, stage: &mut Stage, viewport: &Viewport) {
        let source_rect = match stage.rect(self.spec.source) {
            Some(rect) => rect,
            None => return,
        };
        let target_height = match stage.rect(self.spec.target) {
            Some(rect) => rect.height,
            None => return,
        };
        let fraction = viewport.scroll_progress(&source_rect, self.spec.span);
        self.fraction = fraction;

        let (from_pct, to_pct) = self.spec.offset_percent;
        let (from_scale, to_scale) = self.spec.scale;
        let overlay = Overlay {
            dy: f32::lerp(&from_pct, &to_pct, fraction) / 100.0 * target_height,
            scale: f32::lerp(&from_scale, &to_scale, fraction),
            elevation: 0.0,
        };
        stage.set_parallax(self.spec.target, overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    #[test]
    fn test_endpoints_are_exact() {
        let mut stage = Stage::new();
        let source = stage.insert(Rect::new(0.0, 0.0, 1440.0, 900.0));
        let target = stage.insert(Rect::new(0.0, 0.0, 1440.0, 900.0));
        let spec = ParallaxSpec::new(source, target)
            .offset_percent(0.0, 50.0)
            .scale(1.0, 1.15);
        let mut binding = ParallaxBinding::new(spec);
        let mut viewport = Viewport::new(1440.0, 900.0);

        binding.apply(&mut stage, &viewport);
        let visual = stage.visual(target).unwrap();
        assert_eq!(visual.offset.y, 0.0);
        assert_eq!(visual.scale, 1.0);

        viewport.scroll_y = 900.0;
        binding.apply(&mut stage, &viewport);
        let visual = stage.visual(target).unwrap();
        assert_eq!(visual.offset.y, 450.0);
        assert_eq!(visual.scale, 1.15);
        assert_eq!(binding.fraction(), 1.0);
    }

    #[test]
    fn test_clamped_beyond_span() {
        let mut stage = Stage::new();
        let source = stage.insert(Rect::new(0.0, 0.0, 1440.0, 900.0));
        let target = stage.insert(Rect::new(0.0, 0.0, 1440.0, 600.0));
        let spec = ParallaxSpec::new(source, target).offset_percent(0.0, 50.0);
        let mut binding = ParallaxBinding::new(spec);
        let mut viewport = Viewport::new(1440.0, 900.0);
        viewport.scroll_y = 5000.0;

        binding.apply(&mut stage, &viewport);
        // 50% of the target's 600px height.
        assert_eq!(stage.visual(target).unwrap().offset.y, 300.0);
    }

    #[test]
    fn test_still_scroll_produces_no_writes() {
        let mut stage = Stage::new();
        let source = stage.insert(Rect::new(0.0, 0.0, 1440.0, 900.0));
        let target = stage.insert(Rect::new(0.0, 0.0, 1440.0, 900.0));
        let spec = ParallaxSpec::new(source, target).offset_percent(0.0, 50.0);
        let mut binding = ParallaxBinding::new(spec);
        let mut viewport = Viewport::new(1440.0, 900.0);
        viewport.scroll_y = 300.0;

        binding.apply(&mut stage, &viewport);
        let writes = stage.write_count();
        binding.apply(&mut stage, &viewport);
        binding.apply(&mut stage, &viewport);
        assert_eq!(stage.write_count(), writes);
    }

    #[test]
    fn test_monotone_in_scroll() {
        let mut stage = Stage::new();
        let source = stage.insert(Rect::new(0.0, 900.0, 1440.0, 1200.0));
        let target = stage.insert(Rect::new(0.0, 1000.0, 800.0, 500.0));
        let spec = ParallaxSpec::new(source, target)
            .span(ScrollSpan::EnterToLeave)
            .offset_percent(0.0, 15.0)
            .scale(1.0, 1.05);
        let mut binding = ParallaxBinding::new(spec);
        let mut viewport = Viewport::new(1440.0, 900.0);

        let mut prev_dy = f32::MIN;
        let mut prev_scale = f32::MIN;
        for step in 0..40 {
            viewport.scroll_y = step as f32 * 60.0;
            binding.apply(&mut stage, &viewport);
            let visual = stage.visual(target).unwrap();
            assert!(visual.offset.y >= prev_dy);
            assert!(visual.scale >= prev_scale);
            prev_dy = visual.offset.y;
            prev_scale = visual.scale;
        }
        // The very ends of the sweep pin to the configured range.
        assert!((prev_dy - 75.0).abs() < 1e-3);
        assert!((prev_scale - 1.05).abs() < 1e-6);
    }
}
