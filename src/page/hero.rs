//! Hero section choreography.
//!
//! The hero owns the heaviest reveal sequence on the page: a cascade of
//! eight entrance groups over the first two seconds, a video background
//! that zooms in while drifting on scroll, and the client logo marquee
//! with its hover pause.

use crate::animation::Easing;
use crate::director::{
    Director, EntranceSpec, MarqueeId, MarqueeRate, MarqueeSpec, ParallaxSpec, SectionId, Trigger,
};
use crate::geometry::Rect;
use crate::stage::{ElementId, Visual};
use crate::viewport::{LayoutProfile, ScrollSpan};

use super::content::LOGOS;

/// Copies of the logo sequence the host renders back to back.
pub const LOGO_COPIES: usize = 3;

pub struct Hero {
    pub section: SectionId,
    pub container: ElementId,
    pub video: ElementId,
    pub content: ElementId,
    pub badge: ElementId,
    /// The two heading lines. Their staggered reveal only runs on
    /// desktop; on mobile they simply stay visible.
    pub heading_lines: Vec<ElementId>,
    pub description: ElementId,
    pub button: ElementId,
    pub social_proof: ElementId,
    pub logo_strip: ElementId,
    pub logo_items: Vec<ElementId>,
    pub marquee: MarqueeId,
    pub rect: Rect,
}

fn pick(profile: LayoutProfile, desktop: f32, mobile: f32) -> f32 {
    if profile.is_mobile() {
        mobile
    } else {
        desktop
    }
}

pub fn mount(director: &mut Director, top: f32) -> Hero {
    let viewport = *director.viewport();
    let profile = viewport.profile();
    let width = viewport.width;
    let height = viewport.height.max(600.0);

    let section = director.mount_section("hero");
    let rect = Rect::new(0.0, top, width, height);
    let container = director.create_element(section, rect);
    let video = director.create_element(section, rect);
    let content = director.create_element(
        section,
        Rect::new(width * 0.2, top + height * 0.15, width * 0.6, height * 0.65),
    );
    let badge = director.create_element(
        section,
        Rect::new(width * 0.43, top + height * 0.18, width * 0.14, 44.0),
    );
    let heading_lines: Vec<ElementId> = (0..2)
        .map(|line| {
            director.create_element(
                section,
                Rect::new(
                    width * 0.3,
                    top + height * 0.26 + line as f32 * 80.0,
                    width * 0.4,
                    72.0,
                ),
            )
        })
        .collect();
    let description = director.create_element(
        section,
        Rect::new(width * 0.33, top + height * 0.46, width * 0.34, 56.0),
    );
    let button = director.create_element(
        section,
        Rect::new(width * 0.4, top + height * 0.55, width * 0.2, 64.0),
    );
    let social_proof = director.create_element(
        section,
        Rect::new(width * 0.34, top + height * 0.64, width * 0.32, 36.0),
    );

    let item_width = pick(profile, 120.0, 80.0);
    let gap = pick(profile, 48.0, 24.0);
    let strip_y = top + height * 0.73;
    let logo_strip = director.create_element(
        section,
        Rect::new(
            0.0,
            strip_y,
            LOGOS.len() as f32 * LOGO_COPIES as f32 * (item_width + gap),
            96.0,
        ),
    );
    let logo_items: Vec<ElementId> = (0..LOGOS.len() * LOGO_COPIES)
        .map(|i| {
            director.create_element(
                section,
                Rect::new(
                    i as f32 * (item_width + gap),
                    strip_y + 24.0,
                    item_width,
                    48.0,
                ),
            )
        })
        .collect();

    // Entrance cascade, all timed from the container crossing into
    // view. The page loads with the hero already on screen, so these
    // fire on the first frame.
    director.register_entrance(
        section,
        &[content],
        EntranceSpec::new(Visual::hidden().offset_y(pick(profile, 80.0, 40.0)))
            .duration(1500.0)
            .easing(Easing::QuintOut)
            .trigger(Trigger::top_crosses(container, 0.8)),
    );
    director.register_entrance(
        section,
        &[badge],
        EntranceSpec::new(
            Visual::hidden()
                .scale(0.6)
                .offset_y(pick(profile, 40.0, 20.0)),
        )
        .duration(1000.0)
        .delay(300.0)
        .easing(Easing::ElasticOut {
            amplitude: 1.0,
            period: 0.4,
        })
        .trigger(Trigger::top_crosses(container, 0.8)),
    );
    if !profile.is_mobile() {
        director.register_entrance(
            section,
            &heading_lines,
            EntranceSpec::new(Visual::hidden().offset_y(50.0))
                .duration(1000.0)
                .delay(500.0)
                .stagger(60.0)
                .easing(Easing::QuartOut)
                .trigger(Trigger::top_crosses(container, 0.8)),
        );
    }
    director.register_entrance(
        section,
        &[description],
        EntranceSpec::new(Visual::hidden().offset_y(pick(profile, 40.0, 20.0)))
            .duration(1200.0)
            .delay(700.0)
            .easing(Easing::QuartOut)
            .trigger(Trigger::top_crosses(container, 0.8)),
    );
    director.register_entrance(
        section,
        &[button],
        EntranceSpec::new(
            Visual::hidden()
                .scale(pick(profile, 0.9, 0.95))
                .offset_y(pick(profile, 20.0, 10.0)),
        )
        .duration(1000.0)
        .delay(900.0)
        .easing(Easing::QuartOut)
        .trigger(Trigger::top_crosses(container, 0.8)),
    );
    director.register_entrance(
        section,
        &[social_proof],
        EntranceSpec::new(Visual::hidden().offset_y(pick(profile, 30.0, 15.0)))
            .duration(1000.0)
            .delay(1100.0)
            .easing(Easing::QuartOut)
            .trigger(Trigger::top_crosses(container, 0.7)),
    );
    director.register_entrance(
        section,
        &logo_items,
        EntranceSpec::new(Visual::hidden().offset_y(pick(profile, 40.0, 20.0)))
            .duration(1000.0)
            .delay(1300.0)
            .stagger(100.0)
            .easing(Easing::QuartOut)
            .trigger(Trigger::top_crosses(container, 0.6)),
    );
    director.register_entrance(
        section,
        &[video],
        EntranceSpec::new(Visual::hidden().scale(pick(profile, 1.2, 1.1)))
            .duration(2000.0)
            .easing(Easing::QuartInOut)
            .trigger(Trigger::top_crosses(container, 0.9)),
    );

    // The strip always renders three copies, but the narrow layout
    // wraps at half the sequence width, a shorter loop that still
    // leaves a seam on some widths.
    let copies = if profile.is_mobile() { 2 } else { LOGO_COPIES as u32 };
    let marquee = director.start_marquee(
        section,
        logo_strip,
        &logo_items,
        MarqueeSpec::new()
            .gap(gap)
            .copies(copies)
            .rate(MarqueeRate::LoopDuration(pick(profile, 25.0, 20.0))),
    );

    director.bind_parallax(
        section,
        ParallaxSpec::new(container, video)
            .span(ScrollSpan::TopToLeave)
            .offset_percent(0.0, 50.0)
            .scale(1.0, 1.15),
    );

    Hero {
        section,
        container,
        video,
        content,
        badge,
        heading_lines,
        description,
        button,
        social_proof,
        logo_strip,
        logo_items,
        marquee,
        rect,
    }
}
