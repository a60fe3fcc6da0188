//! Testimonials section choreography.
//!
//! Same reveal shape as the blog, plus the lift-and-shadow hover that
//! makes the quote cards feel pickable-up.

use crate::animation::{Easing, Transition};
use crate::director::{Director, EntranceSpec, FallbackId, HoverStyle, SectionId, Trigger};
use crate::geometry::Rect;
use crate::stage::{ElementId, Visual};

use super::content::TESTIMONIALS;
use super::FALLBACK_DELAY_MS;

pub const SECTION_HEIGHT: f32 = 900.0;

pub struct Testimonials {
    pub section: SectionId,
    pub container: ElementId,
    pub heading: ElementId,
    pub grid: ElementId,
    pub cards: Vec<ElementId>,
    pub fallback: FallbackId,
    pub rect: Rect,
}

pub fn mount(director: &mut Director, top: f32) -> Testimonials {
    let width = director.viewport().width;
    let section = director.mount_section("testimonials");
    let rect = Rect::new(0.0, top, width, SECTION_HEIGHT);
    let container = director.create_element(section, rect);
    let heading = director.create_element(
        section,
        Rect::new(width * 0.25, top + 100.0, width * 0.5, 110.0),
    );
    let grid = director.create_element(
        section,
        Rect::new(width * 0.06, top + 290.0, width * 0.88, 460.0),
    );
    let card_width = width * 0.27;
    let cards: Vec<ElementId> = (0..TESTIMONIALS.len())
        .map(|i| {
            director.create_element(
                section,
                Rect::new(
                    width * 0.06 + i as f32 * (card_width + width * 0.025),
                    top + 290.0,
                    card_width,
                    460.0,
                ),
            )
        })
        .collect();

    director.register_entrance(
        section,
        &[heading],
        EntranceSpec::new(Visual::hidden().offset_y(50.0))
            .duration(1000.0)
            .easing(Easing::QuartOut)
            .trigger(Trigger::top_crosses(heading, 0.8)),
    );
    director.register_entrance(
        section,
        &cards,
        EntranceSpec::new(Visual::hidden().offset_y(50.0).elevation(4.0))
            .to(Visual::visible().elevation(4.0))
            .duration(800.0)
            .stagger(150.0)
            .easing(Easing::CubicOut)
            .trigger(Trigger::top_crosses(grid, 0.8)),
    );

    for &card in &cards {
        director.register_hover(
            section,
            card,
            HoverStyle::new().lift(8.0).scale(1.02).elevation(12.0),
            HoverStyle::REST,
            Transition::new(300.0, Easing::CubicOut),
        );
    }

    let mut guarded = vec![heading];
    guarded.extend_from_slice(&cards);
    let fallback = director.arm_fallback(section, &guarded, FALLBACK_DELAY_MS);

    Testimonials {
        section,
        container,
        heading,
        grid,
        cards,
        fallback,
        rect,
    }
}
