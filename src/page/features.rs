//! Features section choreography.
//!
//! Heading, product mockup and three feature cards reveal in sequence
//! as the section scrolls in, with the mockup drifting on scroll the
//! whole time it is on screen. Cards get the light scale-up hover the
//! rest of the page's cards share.

use crate::animation::{Easing, Transition};
use crate::director::{
    Director, EntranceSpec, HoverStyle, ParallaxSpec, SectionId, Trigger,
};
use crate::geometry::Rect;
use crate::stage::{ElementId, Visual};
use crate::viewport::ScrollSpan;

use super::content::FEATURE_CARDS;

pub const SECTION_HEIGHT: f32 = 1500.0;

pub struct Features {
    pub section: SectionId,
    pub container: ElementId,
    pub heading: ElementId,
    pub mockup: ElementId,
    pub cards: Vec<ElementId>,
    pub rect: Rect,
}

pub fn mount(director: &mut Director, top: f32) -> Features {
    let width = director.viewport().width;
    let section = director.mount_section("features");
    let rect = Rect::new(0.0, top, width, SECTION_HEIGHT);
    let container = director.create_element(section, rect);
    let heading = director.create_element(
        section,
        Rect::new(width * 0.2, top + 120.0, width * 0.6, 140.0),
    );
    let mockup = director.create_element(
        section,
        Rect::new(width * 0.15, top + 320.0, width * 0.7, 560.0),
    );
    let card_width = width * 0.26;
    let cards: Vec<ElementId> = (0..FEATURE_CARDS.len())
        .map(|i| {
            director.create_element(
                section,
                Rect::new(
                    width * 0.08 + i as f32 * (card_width + width * 0.03),
                    top + 960.0,
                    card_width,
                    360.0,
                ),
            )
        })
        .collect();

    director.register_entrance(
        section,
        &[heading],
        EntranceSpec::new(Visual::hidden().offset_y(80.0))
            .duration(1400.0)
            .easing(Easing::QuintOut)
            .trigger(Trigger::top_crosses(container, 0.85)),
    );
    director.register_entrance(
        section,
        &[mockup],
        EntranceSpec::new(Visual::hidden().scale(0.9).offset_y(50.0))
            .duration(1600.0)
            .delay(400.0)
            .easing(Easing::QuintOut)
            .trigger(Trigger::top_crosses(container, 0.75)),
    );
    // Cards rest on an elevated shadow, so the entrance carries the
    // elevation through from the hidden state.
    director.register_entrance(
        section,
        &cards,
        EntranceSpec::new(Visual::hidden().offset_y(60.0).elevation(8.0))
            .to(Visual::visible().elevation(8.0))
            .duration(1200.0)
            .delay(600.0)
            .stagger(250.0)
            .easing(Easing::QuintOut)
            .trigger(Trigger::top_crosses(container, 0.65)),
    );

    for &card in &cards {
        director.register_hover(
            section,
            card,
            HoverStyle::new().scale(1.05).elevation(8.0),
            HoverStyle::REST,
            Transition::new(300.0, Easing::CubicOut),
        );
    }

    director.bind_parallax(
        section,
        ParallaxSpec::new(container, mockup)
            .span(ScrollSpan::EnterToLeave)
            .offset_percent(0.0, 15.0)
            .scale(1.0, 1.05),
    );

    Features {
        section,
        container,
        heading,
        mockup,
        cards,
        rect,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::Viewport;
    use std::time::Duration;

    #[test]
    fn test_reveal_waits_for_scroll() {
        let mut director = Director::new(Viewport::new(1440.0, 900.0));
        let features = mount(&mut director, 900.0);

        director.tick(Duration::from_millis(3000));
        assert_eq!(director.visual(features.heading).unwrap().opacity, 0.0);

        // Scrolling 320px puts the section top past every threshold.
        director.handle_scroll(320.0);
        director.tick(Duration::from_millis(4400));
        assert_eq!(director.visual(features.heading).unwrap().opacity, 1.0);
        // The last card's stagger slot is still mid-flight.
        let last = *features.cards.last().unwrap();
        let opacity = director.visual(last).unwrap().opacity;
        assert!(opacity > 0.0 && opacity < 1.0);
    }

    #[test]
    fn test_cards_keep_resting_elevation() {
        let mut director = Director::new(Viewport::new(1440.0, 900.0));
        let features = mount(&mut director, 0.0);
        director.tick(Duration::from_millis(6000));
        let card = director.visual(features.cards[0]).unwrap();
        assert_eq!(card.elevation, 8.0);
        assert_eq!(card.opacity, 1.0);

        director.pointer_enter(features.cards[0]);
        director.tick(Duration::from_millis(6300));
        let hovered = director.visual(features.cards[0]).unwrap();
        assert_eq!(hovered.elevation, 16.0);
        assert!((hovered.scale - 1.05).abs() < 1e-5);
    }
}
