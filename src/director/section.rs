use crate::stage::ElementId;

use super::{EntranceId, FallbackId, HoverId, MarqueeId, ParallaxId};

/// Identifier for a mounted section.
///
/// Like element ids, section ids are never reused; unmounting twice or
/// registering against an unmounted section is logged and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionId(pub(crate) usize);

/// Ownership record for one mounted section.
///
/// Everything listed here is released together when the section
/// unmounts, so no timer, binding or marquee can outlive the elements
/// it writes to.
pub(crate) struct Section {
    pub name: String,
    pub elements: Vec<ElementId>,
    pub entrances: Vec<EntranceId>,
    pub hovers: Vec<HoverId>,
    pub marquees: Vec<MarqueeId>,
    pub parallaxes: Vec<ParallaxId>,
    pub fallbacks: Vec<FallbackId>,
}

impl Section {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            elements: Vec::new(),
            entrances: Vec::new(),
            hovers: Vec::new(),
            marquees: Vec::new(),
            parallaxes: Vec::new(),
            fallbacks: Vec::new(),
        }
    }
}
