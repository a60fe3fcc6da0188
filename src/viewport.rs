//! Viewport state and scroll geometry.
//!
//! All trigger and parallax decisions reduce to comparing element rects
//! in document space against the viewport's scroll window. Keeping that
//! arithmetic here means the director modules stay free of coordinate
//! juggling.

use crate::geometry::Rect;

/// Coarse layout bucket derived from viewport width.
///
/// Choreography presets read this to pick entrance distances, marquee
/// pacing and gaps; a narrow layout moves elements half as far so
/// reveals don't sweep across the whole screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutProfile {
    Mobile,
    Desktop,
}

impl LayoutProfile {
    /// Widths strictly below this are mobile.
    pub const BREAKPOINT: f32 = 768.0;

    pub fn of_width(width: f32) -> Self {
        if width < Self::BREAKPOINT {
            LayoutProfile::Mobile
        } else {
            LayoutProfile::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, LayoutProfile::Mobile)
    }
}

/// How a scroll-linked binding maps a section's travel to progress 0..1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollSpan {
    /// 0 when the section's top reaches the viewport top, 1 when its
    /// bottom leaves through the top. Used by sections that start the
    /// page already in view.
    TopToLeave,
    /// 0 when the section's top enters through the viewport bottom,
    /// 1 when its bottom leaves through the top.
    EnterToLeave,
}

/// The host's scroll window over the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    /// Document y currently aligned with the viewport top.
    pub scroll_y: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            scroll_y: 0.0,
        }
    }

    pub fn profile(&self) -> LayoutProfile {
        LayoutProfile::of_width(self.width)
    }

    /// True once `rect`'s top edge has crossed the horizontal line at
    /// `fraction` of the viewport height, measuring from the top.
    ///
    /// `fraction` 0.8 fires when the element's top rises above the
    /// lower fifth of the screen, the usual reveal threshold.
    pub fn top_crosses(&self, rect: &Rect, fraction: f32) -> bool {
        rect.y - self.scroll_y <= fraction * self.height
    }

    /// Fraction of `rect`'s height currently inside the viewport,
    /// clamped to [0.0, 1.0]. Zero-height rects report 0.
    pub fn visible_fraction(&self, rect: &Rect) -> f32 {
        if rect.height <= 0.0 {
            return 0.0;
        }
        let top = rect.y.max(self.scroll_y);
        let bottom = rect.bottom().min(self.scroll_y + self.height);
        ((bottom - top).max(0.0) / rect.height).min(1.0)
    }

    /// Progress of `rect` through `span`, clamped to [0.0, 1.0].
    pub fn scroll_progress(&self, rect: &Rect, span: ScrollSpan) -> f32 {
        let raw = match span {
            ScrollSpan::TopToLeave => {
                if rect.height <= 0.0 {
                    return 0.0;
                }
                (self.scroll_y - rect.y) / rect.height
            }
            ScrollSpan::EnterToLeave => {
                let travel = rect.height + self.height;
                if travel <= 0.0 {
                    return 0.0;
                }
                (self.scroll_y + self.height - rect.y) / travel
            }
        };
        raw.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport_at(scroll_y: f32) -> Viewport {
        let mut viewport = Viewport::new(1440.0, 900.0);
        viewport.scroll_y = scroll_y;
        viewport
    }

    #[test]
    fn test_profile_breakpoint() {
        assert_eq!(LayoutProfile::of_width(767.9), LayoutProfile::Mobile);
        assert_eq!(LayoutProfile::of_width(768.0), LayoutProfile::Desktop);
        assert!(Viewport::new(375.0, 667.0).profile().is_mobile());
    }

    #[test]
    fn test_top_crosses() {
        let rect = Rect::new(0.0, 1000.0, 100.0, 200.0);
        // Threshold line sits at 80% of 900 = 720 below the scroll top,
        // so the top crosses once scroll_y >= 280.
        assert!(!viewport_at(279.0).top_crosses(&rect, 0.8));
        assert!(viewport_at(280.0).top_crosses(&rect, 0.8));
        assert!(viewport_at(500.0).top_crosses(&rect, 0.8));
    }

    #[test]
    fn test_visible_fraction() {
        let rect = Rect::new(0.0, 1000.0, 100.0, 400.0);
        // Entirely below the fold.
        assert_eq!(viewport_at(0.0).visible_fraction(&rect), 0.0);
        // Bottom edge of the viewport cuts the rect in half.
        assert_eq!(viewport_at(300.0).visible_fraction(&rect), 0.5);
        // Fully inside.
        assert_eq!(viewport_at(700.0).visible_fraction(&rect), 1.0);
        // Leaving through the top.
        assert_eq!(viewport_at(1200.0).visible_fraction(&rect), 0.5);
    }

    #[test]
    fn test_zero_height_rect_is_never_visible() {
        let rect = Rect::new(0.0, 100.0, 50.0, 0.0);
        assert_eq!(viewport_at(0.0).visible_fraction(&rect), 0.0);
    }

    #[test]
    fn test_top_to_leave_span() {
        let rect = Rect::new(0.0, 0.0, 1440.0, 900.0);
        assert_eq!(
            viewport_at(0.0).scroll_progress(&rect, ScrollSpan::TopToLeave),
            0.0
        );
        assert_eq!(
            viewport_at(450.0).scroll_progress(&rect, ScrollSpan::TopToLeave),
            0.5
        );
        assert_eq!(
            viewport_at(900.0).scroll_progress(&rect, ScrollSpan::TopToLeave),
            1.0
        );
        // Clamped past the end.
        assert_eq!(
            viewport_at(2000.0).scroll_progress(&rect, ScrollSpan::TopToLeave),
            1.0
        );
    }

    #[test]
    fn test_enter_to_leave_span() {
        let rect = Rect::new(0.0, 2000.0, 1440.0, 900.0);
        // Top touches the viewport bottom at scroll_y = 1100.
        assert_eq!(
            viewport_at(1100.0).scroll_progress(&rect, ScrollSpan::EnterToLeave),
            0.0
        );
        // Bottom leaves through the top at scroll_y = 2900.
        assert_eq!(
            viewport_at(2900.0).scroll_progress(&rect, ScrollSpan::EnterToLeave),
            1.0
        );
        let mid = viewport_at(2000.0).scroll_progress(&rect, ScrollSpan::EnterToLeave);
        assert_eq!(mid, 0.5);
    }

    #[test]
    fn test_progress_is_monotone_in_scroll() {
        let rect = Rect::new(0.0, 1500.0, 1440.0, 1200.0);
        let mut prev = -1.0;
        for step in 0..30 {
            let viewport = viewport_at(step as f32 * 150.0);
            let progress = viewport.scroll_progress(&rect, ScrollSpan::EnterToLeave);
            assert!(progress >= prev);
            prev = progress;
        }
    }
}
