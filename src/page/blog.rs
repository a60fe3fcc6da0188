//! Blog section choreography.
//!
//! The heading triggers off its own rect rather than the section
//! container, and a 2s fallback guards the whole reveal for hosts
//! where the scroll feed never arrives.

use crate::animation::{Easing, Transition};
use crate::director::{Director, EntranceSpec, FallbackId, HoverStyle, SectionId, Trigger};
use crate::geometry::Rect;
use crate::stage::{ElementId, Visual};

use super::content::BLOG_POSTS;
use super::FALLBACK_DELAY_MS;

pub const SECTION_HEIGHT: f32 = 1100.0;

pub struct Blog {
    pub section: SectionId,
    pub container: ElementId,
    pub heading: ElementId,
    pub grid: ElementId,
    pub cards: Vec<ElementId>,
    pub fallback: FallbackId,
    pub rect: Rect,
}

pub fn mount(director: &mut Director, top: f32) -> Blog {
    let width = director.viewport().width;
    let section = director.mount_section("blog");
    let rect = Rect::new(0.0, top, width, SECTION_HEIGHT);
    let container = director.create_element(section, rect);
    let heading = director.create_element(
        section,
        Rect::new(width * 0.25, top + 110.0, width * 0.5, 120.0),
    );
    let grid = director.create_element(
        section,
        Rect::new(width * 0.06, top + 320.0, width * 0.88, 620.0),
    );
    let card_width = width * 0.27;
    let cards: Vec<ElementId> = (0..BLOG_POSTS.len())
        .map(|i| {
            director.create_element(
                section,
                Rect::new(
                    width * 0.06 + i as f32 * (card_width + width * 0.025),
                    top + 320.0,
                    card_width,
                    620.0,
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
        EntranceSpec::new(Visual::hidden().offset_y(50.0).elevation(6.0))
            .to(Visual::visible().elevation(6.0))
            .duration(800.0)
            .stagger(200.0)
            .easing(Easing::CubicOut)
            .trigger(Trigger::top_crosses(grid, 0.8)),
    );

    for &card in &cards {
        director.register_hover(
            section,
            card,
            HoverStyle::new().scale(1.03).elevation(10.0),
            HoverStyle::REST,
            Transition::new(300.0, Easing::CubicOut),
        );
    }

    let mut guarded = vec![heading];
    guarded.extend_from_slice(&cards);
    let fallback = director.arm_fallback(section, &guarded, FALLBACK_DELAY_MS);

    Blog {
        section,
        container,
        heading,
        grid,
        cards,
        fallback,
        rect,
    }
}
