//! Pricing section choreography.
//!
//! The heading animates the moment the section mounts. The tier grid
//! waits until a tenth of it is visible, then fades the container and
//! staggers the tier cards in, a one-shot just like the scroll-triggered
//! reveals elsewhere.

use crate::animation::{Easing, Transition};
use crate::director::{Director, EntranceSpec, HoverStyle, SectionId, Trigger};
use crate::geometry::Rect;
use crate::stage::{ElementId, Visual};

use super::content::PRICING_TIERS;

pub const SECTION_HEIGHT: f32 = 1200.0;

/// The curve framer-style tweens call "easeOut".
fn ease_out() -> Easing {
    Easing::CubicBezier(0.0, 0.0, 0.58, 1.0)
}

pub struct Pricing {
    pub section: SectionId,
    pub container: ElementId,
    pub heading: ElementId,
    pub grid: ElementId,
    pub tiers: Vec<ElementId>,
    pub rect: Rect,
}

pub fn mount(director: &mut Director, top: f32) -> Pricing {
    let width = director.viewport().width;
    let section = director.mount_section("pricing");
    let rect = Rect::new(0.0, top, width, SECTION_HEIGHT);
    let container = director.create_element(section, rect);
    let heading = director.create_element(
        section,
        Rect::new(width * 0.2, top + 110.0, width * 0.6, 200.0),
    );
    let grid = director.create_element(
        section,
        Rect::new(width * 0.15, top + 420.0, width * 0.7, 640.0),
    );
    let tier_width = width * 0.33;
    let tiers: Vec<ElementId> = (0..PRICING_TIERS.len())
        .map(|i| {
            director.create_element(
                section,
                Rect::new(
                    width * 0.15 + i as f32 * (tier_width + width * 0.04),
                    top + 420.0,
                    tier_width,
                    640.0,
                ),
            )
        })
        .collect();

    // The heading does not wait for scroll at all.
    director.register_entrance(
        section,
        &[heading],
        EntranceSpec::new(Visual::hidden().offset_y(20.0))
            .duration(600.0)
            .easing(Easing::CubicBezier(0.42, 0.0, 0.58, 1.0))
            .trigger(Trigger::Immediate),
    );
    director.register_entrance(
        section,
        &[grid],
        EntranceSpec::new(Visual::hidden())
            .duration(300.0)
            .easing(ease_out())
            .trigger(Trigger::visible(grid, 0.1)),
    );
    director.register_entrance(
        section,
        &tiers,
        EntranceSpec::new(Visual::hidden().offset_y(20.0))
            .duration(500.0)
            .delay(300.0)
            .stagger(200.0)
            .easing(ease_out())
            .trigger(Trigger::visible(grid, 0.1)),
    );

    for &tier in &tiers {
        director.register_hover(
            section,
            tier,
            HoverStyle::new().scale(1.02),
            HoverStyle::REST,
            Transition::new(300.0, Easing::CubicOut),
        );
    }

    Pricing {
        section,
        container,
        heading,
        grid,
        tiers,
        rect,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::Viewport;
    use std::time::Duration;

    #[test]
    fn test_heading_plays_on_mount() {
        let mut director = Director::new(Viewport::new(1440.0, 900.0));
        let pricing = mount(&mut director, 5000.0);
        // Far below the fold, yet the heading animates anyway.
        director.tick(Duration::from_millis(600));
        assert_eq!(director.visual(pricing.heading).unwrap().opacity, 1.0);
        assert_eq!(director.visual(pricing.grid).unwrap().opacity, 0.0);
    }

    #[test]
    fn test_grid_reveals_once_a_tenth_is_visible() {
        let mut director = Director::new(Viewport::new(1440.0, 900.0));
        let pricing = mount(&mut director, 5000.0);
        director.tick(Duration::from_millis(1000));

        // Grid spans 5420..6060; a tenth of 640 is 64px of overlap,
        // reached once the viewport bottom passes 5484.
        director.handle_scroll(4580.0);
        director.tick(Duration::from_millis(1100));
        assert_eq!(director.visual(pricing.tiers[0]).unwrap().opacity, 0.0);

        director.handle_scroll(4584.0);
        // Tiers finish at 1100 + 300 + 200 + 500 = 2100ms.
        director.tick(Duration::from_millis(2100));
        assert_eq!(director.visual(pricing.grid).unwrap().opacity, 1.0);
        for &tier in &pricing.tiers {
            assert_eq!(director.visual(tier).unwrap().opacity, 1.0);
        }
    }

    #[test]
    fn test_reveal_is_one_shot_after_scroll_away() {
        let mut director = Director::new(Viewport::new(1440.0, 900.0));
        let pricing = mount(&mut director, 5000.0);
        director.handle_scroll(5200.0);
        director.tick(Duration::from_millis(3000));
        let writes = director.write_count();

        director.handle_scroll(0.0);
        director.tick(Duration::from_millis(3100));
        director.handle_scroll(5200.0);
        director.tick(Duration::from_millis(3200));
        assert_eq!(director.write_count(), writes);
        assert_eq!(director.visual(pricing.tiers[1]).unwrap().opacity, 1.0);
    }
}
