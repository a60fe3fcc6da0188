//! Animation orchestration.
//!
//! The [`Director`] is the single entry point hosts talk to. Input
//! events flow in ([`Director::tick`], [`Director::handle_scroll`],
//! pointer enter/leave, viewport changes) and composed visuals flow out
//! through the [`Stage`]. Registrations are grouped into sections whose
//! unmount releases every element, timer and binding at once, so a
//! torn-down section can never receive another write.

mod entrance;
mod fallback;
mod hover;
mod marquee;
mod parallax;
mod section;

pub use entrance::{EntranceId, EntranceSpec, Trigger};
pub use fallback::FallbackId;
pub use hover::{HoverId, HoverStyle};
pub use marquee::{MarqueeId, MarqueeRate, MarqueeSpec};
pub use parallax::{ParallaxId, ParallaxSpec};
pub use section::SectionId;

use std::time::Duration;

use crate::animation::Transition;
use crate::geometry::{Rect, Vec2};
use crate::stage::{ElementId, Stage, Visual, VisualFlags};
use crate::viewport::Viewport;

use entrance::EntranceGroup;
use fallback::FallbackTimer;
use hover::HoverBinding;
use marquee::Marquee;
use parallax::ParallaxBinding;
use section::Section;

/// Slot arena whose indices are never recycled.
///
/// Taken slots stay `None` forever, so an id that outlives its value
/// reads back as missing instead of aliasing something newer.
struct Slots<T> {
    entries: Vec<Option<T>>,
}

impl<T> Slots<T> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn insert(&mut self, value: T) -> usize {
        self.entries.push(Some(value));
        self.entries.len() - 1
    }

    /// Allocate an empty slot, for ids handed out on refused
    /// registrations.
    fn insert_dead(&mut self) -> usize {
        self.entries.push(None);
        self.entries.len() - 1
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index).and_then(|e| e.as_ref())
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.entries.get_mut(index).and_then(|e| e.as_mut())
    }

    fn take(&mut self, index: usize) -> Option<T> {
        self.entries.get_mut(index).and_then(|e| e.take())
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().filter_map(|e| e.as_ref())
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.iter_mut().filter_map(|e| e.as_mut())
    }
}

/// Orchestrates every animation on the page against an abstract stage.
///
/// The director holds no clock of its own; hosts feed monotonic
/// timestamps through [`Director::tick`] and the same event sequence
/// always produces the same visuals.
pub struct Director {
    stage: Stage,
    viewport: Viewport,
    clock: Duration,
    sections: Slots<Section>,
    entrances: Slots<EntranceGroup>,
    hovers: Slots<HoverBinding>,
    marquees: Slots<Marquee>,
    parallaxes: Slots<ParallaxBinding>,
    fallbacks: Slots<FallbackTimer>,
}

impl Director {
    pub fn new(viewport: Viewport) -> Self {
        crate::init();
        log::debug!(
            "director created ({}x{}, {:?})",
            viewport.width,
            viewport.height,
            viewport.profile()
        );
        Self {
            stage: Stage::new(),
            viewport,
            clock: Duration::ZERO,
            sections: Slots::new(),
            entrances: Slots::new(),
            hovers: Slots::new(),
            marquees: Slots::new(),
            parallaxes: Slots::new(),
            fallbacks: Slots::new(),
        }
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The last timestamp fed through [`Director::tick`].
    pub fn clock(&self) -> Duration {
        self.clock
    }

    // ---- Sections and elements ----

    pub fn mount_section(&mut self, name: &str) -> SectionId {
        let id = SectionId(self.sections.insert(Section::new(name)));
        log::debug!("section '{name}' mounted");
        id
    }

    /// Tear a section down: cancel its fallback timers, drop its hover
    /// bindings and marquees, retire its entrances and remove its
    /// elements. Stale ids kept by the host go inert rather than
    /// dangling. Unmounting twice is a no-op.
    pub fn unmount_section(&mut self, id: SectionId) {
        let section = match self.sections.take(id.0) {
            Some(section) => section,
            None => {
                log::debug!("unmount of already-unmounted section ignored");
                return;
            }
        };
        for fallback in &section.fallbacks {
            self.fallbacks.take(fallback.0);
        }
        for hover in &section.hovers {
            self.hovers.take(hover.0);
        }
        for marquee in &section.marquees {
            self.marquees.take(marquee.0);
        }
        for parallax in &section.parallaxes {
            self.parallaxes.take(parallax.0);
        }
        for entrance in &section.entrances {
            self.entrances.take(entrance.0);
        }
        for &element in &section.elements {
            self.stage.remove(element);
        }
        log::debug!(
            "section '{}' unmounted, {} element(s) released",
            section.name,
            section.elements.len()
        );
    }

    pub fn create_element(&mut self, section: SectionId, rect: Rect) -> ElementId {
        if self.sections.get(section.0).is_none() {
            log::warn!("element created on unmounted section; it will be inert");
            return self.stage.insert_dead();
        }
        let id = self.stage.insert(rect);
        if let Some(section) = self.sections.get_mut(section.0) {
            section.elements.push(id);
        }
        id
    }

    /// Update an element's layout rect, e.g. after the host re-laid
    /// out the page. Stale ids are dropped silently.
    pub fn set_rect(&mut self, element: ElementId, rect: Rect) {
        self.stage.set_rect(element, rect);
    }

    /// The composed visual for an element, `None` once it is gone.
    pub fn visual(&self, element: ElementId) -> Option<Visual> {
        self.stage.visual(element)
    }

    /// Drain the set of elements whose visuals changed since the last
    /// call, ordered by element id.
    pub fn take_dirty(&mut self) -> Vec<(ElementId, VisualFlags)> {
        self.stage.take_dirty()
    }

    /// Total composed-visual mutations so far. Freezes once nothing is
    /// animating, which makes it a cheap spy for teardown tests.
    pub fn write_count(&self) -> u64 {
        self.stage.write_count()
    }

    // ---- Registrations ----

    /// Register a one-shot entrance for `elements`. The elements are
    /// hidden at the spec's `from` state immediately; dead element ids
    /// are skipped with a warning.
    pub fn register_entrance(
        &mut self,
        section: SectionId,
        elements: &[ElementId],
        spec: EntranceSpec,
    ) -> EntranceId {
        if self.sections.get(section.0).is_none() {
            log::warn!("entrance registered on unmounted section; it will never play");
            return EntranceId(self.entrances.insert_dead());
        }
        let live: Vec<ElementId> = elements
            .iter()
            .copied()
            .filter(|&e| self.stage.contains(e))
            .collect();
        if live.len() < elements.len() {
            log::warn!(
                "entrance skipped {} dead element(s)",
                elements.len() - live.len()
            );
        }
        if live.is_empty() {
            log::warn!("entrance registered with no live elements; completing immediately");
        }
        let mut group = EntranceGroup::new(live, spec);
        group.prepare(&mut self.stage);
        group.try_fire(&self.stage, &self.viewport, self.clock);
        let id = EntranceId(self.entrances.insert(group));
        if let Some(section) = self.sections.get_mut(section.0) {
            section.entrances.push(id);
        }
        id
    }

    /// Bind a hover interaction to `element`. An element carries at
    /// most one binding; registering again replaces the old one and
    /// resets the overlay to the new rest style.
    pub fn register_hover(
        &mut self,
        section: SectionId,
        element: ElementId,
        hover: HoverStyle,
        rest: HoverStyle,
        transition: Transition,
    ) -> HoverId {
        if self.sections.get(section.0).is_none() {
            log::warn!("hover registered on unmounted section; it will be inert");
            return HoverId(self.hovers.insert_dead());
        }
        if !self.stage.contains(element) {
            log::warn!("hover registered for a dead element; it will be inert");
            return HoverId(self.hovers.insert_dead());
        }

        let replaced = self.remove_hover_for(element);
        if replaced {
            log::debug!("hover binding replaced for element {element:?}");
        }

        let binding = HoverBinding::new(section, element, hover, rest, transition);
        binding.prepare(&mut self.stage);
        let id = HoverId(self.hovers.insert(binding));
        if let Some(section) = self.sections.get_mut(section.0) {
            section.hovers.push(id);
        }
        id
    }

    /// Start a logo marquee on `strip`, measuring `items` for the wrap
    /// distance. Mixed item widths and fewer than three rendered copies
    /// are logged, not corrected.
    pub fn start_marquee(
        &mut self,
        section: SectionId,
        strip: ElementId,
        items: &[ElementId],
        spec: MarqueeSpec,
    ) -> MarqueeId {
        if self.sections.get(section.0).is_none() {
            log::warn!("marquee started on unmounted section; it will be inert");
            return MarqueeId(self.marquees.insert_dead());
        }
        if !self.stage.contains(strip) {
            log::warn!("marquee started on a dead strip element; it will be inert");
            return MarqueeId(self.marquees.insert_dead());
        }
        let marquee = Marquee::new(strip, items, &spec, &self.stage);
        log::debug!(
            "marquee started: wrap {:.1}px, {} item(s)",
            marquee.total_width(),
            items.len()
        );
        let id = MarqueeId(self.marquees.insert(marquee));
        if let Some(section) = self.sections.get_mut(section.0) {
            section.marquees.push(id);
        }
        id
    }

    /// Bind scroll-linked parallax. The target's overlay is written
    /// once immediately so the element starts at the correct drift for
    /// the current scroll position.
    pub fn bind_parallax(&mut self, section: SectionId, spec: ParallaxSpec) -> ParallaxId {
        if self.sections.get(section.0).is_none() {
            log::warn!("parallax bound on unmounted section; it will be inert");
            return ParallaxId(self.parallaxes.insert_dead());
        }
        let mut binding = ParallaxBinding::new(spec);
        binding.apply(&mut self.stage, &self.viewport);
        let id = ParallaxId(self.parallaxes.insert(binding));
        if let Some(section) = self.sections.get_mut(section.0) {
            section.parallaxes.push(id);
        }
        id
    }

    /// Arm a one-shot timer that forces `elements` to their terminal
    /// visible state `delay_ms` from the current clock, covering
    /// triggers that never fire.
    pub fn arm_fallback(
        &mut self,
        section: SectionId,
        elements: &[ElementId],
        delay_ms: f32,
    ) -> FallbackId {
        if self.sections.get(section.0).is_none() {
            log::warn!("fallback armed on unmounted section; it will never fire");
            return FallbackId(self.fallbacks.insert_dead());
        }
        let due_at = self.clock + Duration::from_secs_f32(delay_ms.max(0.0) / 1000.0);
        let timer = FallbackTimer::new(section, elements.to_vec(), due_at);
        let id = FallbackId(self.fallbacks.insert(timer));
        if let Some(section) = self.sections.get_mut(section.0) {
            section.fallbacks.push(id);
        }
        log::debug!(
            "fallback armed for {} element(s), due at {:?}",
            elements.len(),
            due_at
        );
        id
    }

    // ---- Marquee control ----

    pub fn pause_marquee(&mut self, id: MarqueeId) {
        match self.marquees.get_mut(id.0) {
            Some(marquee) => marquee.pause(),
            None => log::warn!("pause of unknown marquee ignored"),
        }
    }

    pub fn resume_marquee(&mut self, id: MarqueeId) {
        match self.marquees.get_mut(id.0) {
            Some(marquee) => marquee.resume(),
            None => log::warn!("resume of unknown marquee ignored"),
        }
    }

    // ---- Host events ----

    /// Pointer entered `element`: start its hover blend and pause any
    /// marquee whose strip it is.
    pub fn pointer_enter(&mut self, element: ElementId) {
        for binding in self.hovers.iter_mut() {
            if binding.element == element {
                binding.pointer_enter(self.clock);
            }
        }
        for marquee in self.marquees.iter_mut() {
            if marquee.strip == element {
                marquee.pause();
            }
        }
    }

    pub fn pointer_leave(&mut self, element: ElementId) {
        for binding in self.hovers.iter_mut() {
            if binding.element == element {
                binding.pointer_leave(self.clock);
            }
        }
        for marquee in self.marquees.iter_mut() {
            if marquee.strip == element {
                marquee.resume();
            }
        }
    }

    /// The host scrolled. Triggers are evaluated and parallax resampled
    /// right away; tween playback waits for the next tick.
    pub fn handle_scroll(&mut self, scroll_y: f32) {
        if self.viewport.scroll_y == scroll_y {
            return;
        }
        self.viewport.scroll_y = scroll_y;
        self.fire_triggers();
        self.apply_parallax();
    }

    /// The host viewport was resized.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        let old_profile = self.viewport.profile();
        self.viewport.width = width;
        self.viewport.height = height;
        let profile = self.viewport.profile();
        if profile != old_profile {
            log::debug!("viewport now {width}x{height}, layout profile {profile:?}");
        }
        self.fire_triggers();
        self.apply_parallax();
    }

    /// Advance the whole page to `now`.
    ///
    /// `now` is a monotonic timestamp; a value earlier than the last
    /// one is clamped forward so playback never rewinds.
    pub fn tick(&mut self, now: Duration) {
        let now = now.max(self.clock);
        let dt = now - self.clock;
        self.clock = now;

        self.fire_triggers();
        for group in self.entrances.iter_mut() {
            group.advance(&mut self.stage, now);
        }
        for binding in self.hovers.iter_mut() {
            binding.advance(&mut self.stage, now);
        }
        for marquee in self.marquees.iter_mut() {
            marquee.advance(&mut self.stage, dt);
        }
        self.apply_parallax();
        self.fire_due_fallbacks(now);
    }

    // ---- Internals ----

    fn fire_triggers(&mut self) {
        for group in self.entrances.iter_mut() {
            group.try_fire(&self.stage, &self.viewport, self.clock);
        }
    }

    fn apply_parallax(&mut self) {
        for binding in self.parallaxes.iter_mut() {
            binding.apply(&mut self.stage, &self.viewport);
        }
    }

    fn fire_due_fallbacks(&mut self, now: Duration) {
        for index in 0..self.fallbacks.len() {
            let (section, elements) = match self.fallbacks.get_mut(index) {
                Some(timer) if timer.is_due(now) => {
                    timer.fired = true;
                    (timer.section, timer.elements.clone())
                }
                _ => continue,
            };
            if let Some(section) = self.sections.get(section.0) {
                log::debug!("fallback due for section '{}'", section.name);
            }
            self.force_visible(&elements);
        }
    }

    /// Force every entrance group covering one of `elements` to its
    /// terminal state. Elements tracked by no group are pinned to plain
    /// visibility, keeping whatever elevation their base carries.
    fn force_visible(&mut self, elements: &[ElementId]) {
        let mut forced_groups = 0;
        for group in self.entrances.iter_mut() {
            if group.is_done() {
                continue;
            }
            if elements.iter().any(|&e| group.contains(e)) {
                group.force_complete(&mut self.stage);
                forced_groups += 1;
            }
        }
        for &element in elements {
            let covered = self.entrances.iter().any(|g| g.contains(element));
            if covered {
                continue;
            }
            if let Some(base) = self.stage.base(element) {
                self.stage.set_base(
                    element,
                    Visual {
                        opacity: 1.0,
                        offset: Vec2::ZERO,
                        scale: 1.0,
                        ..base
                    },
                );
            }
        }
        log::debug!(
            "fallback fired: forced {forced_groups} entrance group(s) over {} element(s)",
            elements.len()
        );
    }

    fn remove_hover_for(&mut self, element: ElementId) -> bool {
        let mut found = None;
        for index in 0..self.hovers.len() {
            if let Some(binding) = self.hovers.get(index) {
                if binding.element == element {
                    found = Some(index);
                    break;
                }
            }
        }
        let index = match found {
            Some(index) => index,
            None => return false,
        };
        if let Some(old) = self.hovers.take(index) {
            if let Some(section) = self.sections.get_mut(old.section.0) {
                section.hovers.retain(|h| h.0 != index);
            }
        }
        true
    }
}
