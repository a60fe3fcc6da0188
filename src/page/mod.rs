//! Preset choreography for the marketing landing page.
//!
//! Each submodule mounts one section through the [`Director`] API and
//! hands back the element ids it created, so a host can route pointer
//! events and inspect visuals without re-deriving the layout. Sections
//! stack vertically; [`mount_landing`] places each one at the bottom
//! edge of the previous.

use crate::director::Director;

pub mod blog;
pub mod content;
pub mod features;
pub mod hero;
pub mod pricing;
pub mod testimonials;

/// How long a scroll-triggered section may stay hidden before its
/// safety timer forces it visible.
pub const FALLBACK_DELAY_MS: f32 = 2000.0;

/// Handles for every mounted section of the landing page.
pub struct Landing {
    pub hero: hero::Hero,
    pub features: features::Features,
    pub blog: blog::Blog,
    pub testimonials: testimonials::Testimonials,
    pub pricing: pricing::Pricing,
}

/// Mounts the whole page in document order, stacking sections top to
/// bottom starting at scroll offset zero.
pub fn mount_landing(director: &mut Director) -> Landing {
    let hero = hero::mount(director, 0.0);
    let features = features::mount(director, hero.rect.bottom());
    let blog = blog::mount(director, features.rect.bottom());
    let testimonials = testimonials::mount(director, blog.rect.bottom());
    let pricing = pricing::mount(director, testimonials.rect.bottom());
    Landing {
        hero,
        features,
        blog,
        testimonials,
        pricing,
    }
}

impl Landing {
    /// Total scrollable height of the page.
    pub fn total_height(&self) -> f32 {
        self.pricing.rect.bottom()
    }

    /// Tears the whole page down, bottom section first.
    pub fn unmount(self, director: &mut Director) {
        director.unmount_section(self.pricing.section);
        director.unmount_section(self.testimonials.section);
        director.unmount_section(self.blog.section);
        director.unmount_section(self.features.section);
        director.unmount_section(self.hero.section);
    }
}
