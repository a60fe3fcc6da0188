//! Element store and visual state tracking.
//!
//! The [`Stage`] owns every animatable element's visual state and records
//! which elements changed since the host last flushed. Hosts read composed
//! [`Visual`]s and mirror them onto whatever they render (DOM nodes, GPU
//! quads, a test buffer). The stage itself never touches a render surface.

use std::collections::HashMap;

use bitflags::bitflags;

use crate::geometry::{Rect, Vec2};
use crate::transform::Transform;

bitflags! {
    /// Which visual channels of an element changed since the last flush
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct VisualFlags: u8 {
        const OPACITY = 1 << 0;
        const TRANSFORM = 1 << 1;
        const ELEVATION = 1 << 2;
    }
}

/// Identifier for an element on the stage.
///
/// Ids are never reused. A stale id held after its element was removed
/// stays inert: reads return `None` and writes are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) usize);

/// The renderable state of one element.
///
/// `offset` is relative to the element's layout position, `scale` is
/// uniform about the element's own origin, and `elevation` is an abstract
/// shadow depth the host maps to whatever shadow treatment it has.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    pub opacity: f32,
    pub offset: Vec2,
    pub scale: f32,
    pub elevation: f32,
}

impl Visual {
    /// Fully visible at the layout position.
    pub fn visible() -> Self {
        Self {
            opacity: 1.0,
            offset: Vec2::ZERO,
            scale: 1.0,
            elevation: 0.0,
        }
    }

    /// Transparent, otherwise untransformed. The usual starting point
    /// for entrance reveals.
    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::visible()
        }
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    pub fn offset_y(mut self, dy: f32) -> Self {
        self.offset.y = dy;
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn elevation(mut self, elevation: f32) -> Self {
        self.elevation = elevation;
        self
    }

    /// The offset and scale expressed as a transform matrix, scale
    /// applied about the element origin before the translation.
    pub fn transform(&self) -> Transform {
        Transform::scale(self.scale).then(&Transform::translate(self.offset.x, self.offset.y))
    }
}

impl Default for Visual {
    fn default() -> Self {
        Self::visible()
    }
}

/// A contribution layered over an element's base visual.
///
/// Hover and parallax each own one overlay per element. Vertical offsets
/// add, scales multiply, elevations add; opacity belongs to the base
/// alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    pub dy: f32,
    pub scale: f32,
    pub elevation: f32,
}

impl Overlay {
    pub const NONE: Overlay = Overlay {
        dy: 0.0,
        scale: 1.0,
        elevation: 0.0,
    };
}

impl Default for Overlay {
    fn default() -> Self {
        Self::NONE
    }
}

struct Element {
    rect: Rect,
    base: Visual,
    hover: Overlay,
    parallax: Overlay,
}

impl Element {
    fn composed(&self) -> Visual {
        Visual {
            opacity: self.base.opacity,
            offset: self.base.offset + Vec2::y(self.hover.dy + self.parallax.dy),
            scale: self.base.scale * self.hover.scale * self.parallax.scale,
            elevation: self.base.elevation + self.hover.elevation + self.parallax.elevation,
        }
    }
}

/// Store of all live elements and their pending visual changes.
pub struct Stage {
    // Slot indices are never recycled so stale ids cannot alias a
    // later element.
    slots: Vec<Option<Element>>,
    dirty: HashMap<ElementId, VisualFlags>,
    writes: u64,
}

impl Stage {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            dirty: HashMap::new(),
            writes: 0,
        }
    }

    /// Add an element at `rect`. Elements start fully visible; an
    /// entrance registration is what hides them.
    pub(crate) fn insert(&mut self, rect: Rect) -> ElementId {
        let id = ElementId(self.slots.len());
        self.slots.push(Some(Element {
            rect,
            base: Visual::visible(),
            hover: Overlay::NONE,
            parallax: Overlay::NONE,
        }));
        id
    }

    /// Allocate an id with no element behind it. Handed out when a
    /// registration is refused so the caller still gets an id, just one
    /// that every later operation drops.
    pub(crate) fn insert_dead(&mut self) -> ElementId {
        let id = ElementId(self.slots.len());
        self.slots.push(None);
        id
    }

    pub(crate) fn remove(&mut self, id: ElementId) {
        if let Some(slot) = self.slots.get_mut(id.0) {
            *slot = None;
        }
        self.dirty.remove(&id);
    }

    pub fn contains(&self, id: ElementId) -> bool {
        matches!(self.slots.get(id.0), Some(Some(_)))
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn rect(&self, id: ElementId) -> Option<Rect> {
        self.element(id).map(|e| e.rect)
    }

    pub(crate) fn set_rect(&mut self, id: ElementId, rect: Rect) {
        if let Some(Some(element)) = self.slots.get_mut(id.0) {
            element.rect = rect;
        }
    }

    /// The composed visual: base plus hover and parallax overlays.
    pub fn visual(&self, id: ElementId) -> Option<Visual> {
        self.element(id).map(|e| e.composed())
    }

    /// The base visual before overlays are applied.
    pub fn base(&self, id: ElementId) -> Option<Visual> {
        self.element(id).map(|e| e.base)
    }

    pub(crate) fn set_base(&mut self, id: ElementId, base: Visual) {
        self.mutate(id, |e| e.base = base);
    }

    pub(crate) fn set_hover(&mut self, id: ElementId, overlay: Overlay) {
        self.mutate(id, |e| e.hover = overlay);
    }

    pub(crate) fn set_parallax(&mut self, id: ElementId, overlay: Overlay) {
        self.mutate(id, |e| e.parallax = overlay);
    }

    /// Drain the dirty set, ordered by element id for stable flushes.
    pub(crate) fn take_dirty(&mut self) -> Vec<(ElementId, VisualFlags)> {
        let mut batch: Vec<_> = self.dirty.drain().collect();
        batch.sort_by_key(|(id, _)| *id);
        batch
    }

    /// Total number of composed-visual mutations since creation. Writes
    /// dropped on dead elements do not count.
    pub fn write_count(&self) -> u64 {
        self.writes
    }

    fn element(&self, id: ElementId) -> Option<&Element> {
        self.slots.get(id.0).and_then(|s| s.as_ref())
    }

    fn mutate(&mut self, id: ElementId, apply: impl FnOnce(&mut Element)) {
        let element = match self.slots.get_mut(id.0) {
            Some(Some(e)) => e,
            _ => return,
        };
        let before = element.composed();
        apply(element);
        let after = element.composed();
        let flags = Self::diff_flags(&before, &after);
        if flags.is_empty() {
            return;
        }
        self.writes += 1;
        *self.dirty.entry(id).or_insert(VisualFlags::empty()) |= flags;
    }

    fn diff_flags(before: &Visual, after: &Visual) -> VisualFlags {
        let mut flags = VisualFlags::empty();
        if before.opacity != after.opacity {
            flags |= VisualFlags::OPACITY;
        }
        if before.offset != after.offset || before.scale != after.scale {
            flags |= VisualFlags::TRANSFORM;
        }
        if before.elevation != after.elevation {
            flags |= VisualFlags::ELEVATION;
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn test_elements_start_visible() {
        let mut stage = Stage::new();
        let id = stage.insert(rect());
        let visual = stage.visual(id).unwrap();
        assert_eq!(visual, Visual::visible());
        assert_eq!(stage.write_count(), 0);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut stage = Stage::new();
        let a = stage.insert(rect());
        stage.remove(a);
        let b = stage.insert(rect());
        assert_ne!(a, b);
        assert!(!stage.contains(a));
        assert!(stage.contains(b));
    }

    #[test]
    fn test_writes_on_dead_elements_are_dropped() {
        let mut stage = Stage::new();
        let id = stage.insert(rect());
        stage.remove(id);
        stage.set_base(id, Visual::hidden());
        assert_eq!(stage.write_count(), 0);
        assert_eq!(stage.visual(id), None);
        assert!(stage.take_dirty().is_empty());
    }

    #[test]
    fn test_overlays_compose() {
        let mut stage = Stage::new();
        let id = stage.insert(rect());
        stage.set_base(id, Visual::visible().offset_y(10.0).elevation(4.0));
        stage.set_hover(
            id,
            Overlay {
                dy: -8.0,
                scale: 1.02,
                elevation: 12.0,
            },
        );
        stage.set_parallax(
            id,
            Overlay {
                dy: 30.0,
                scale: 1.1,
                elevation: 0.0,
            },
        );
        let visual = stage.visual(id).unwrap();
        assert_eq!(visual.offset.y, 32.0);
        assert!((visual.scale - 1.122).abs() < 1e-5);
        assert_eq!(visual.elevation, 16.0);
        assert_eq!(visual.opacity, 1.0);
    }

    #[test]
    fn test_dirty_flags_track_channels() {
        let mut stage = Stage::new();
        let id = stage.insert(rect());
        stage.set_base(id, Visual::visible().opacity(0.5));
        let batch = stage.take_dirty();
        assert_eq!(batch, vec![(id, VisualFlags::OPACITY)]);

        stage.set_base(id, Visual::visible().opacity(0.5).offset_y(20.0));
        stage.set_base(
            id,
            Visual::visible().opacity(0.5).offset_y(20.0).elevation(2.0),
        );
        let batch = stage.take_dirty();
        assert_eq!(
            batch,
            vec![(id, VisualFlags::TRANSFORM | VisualFlags::ELEVATION)]
        );
        assert_eq!(stage.write_count(), 3);
    }

    #[test]
    fn test_identical_write_is_not_counted() {
        let mut stage = Stage::new();
        let id = stage.insert(rect());
        stage.set_base(id, Visual::visible());
        assert_eq!(stage.write_count(), 0);
        assert!(stage.take_dirty().is_empty());
    }

    #[test]
    fn test_dirty_batch_is_sorted() {
        let mut stage = Stage::new();
        let ids: Vec<_> = (0..5).map(|_| stage.insert(rect())).collect();
        for id in ids.iter().rev() {
            stage.set_base(*id, Visual::hidden());
        }
        let batch = stage.take_dirty();
        let batch_ids: Vec<_> = batch.iter().map(|(id, _)| *id).collect();
        assert_eq!(batch_ids, ids);
    }

    #[test]
    fn test_visual_transform_scales_then_translates() {
        let visual = Visual::visible().offset(Vec2::new(10.0, 20.0)).scale(2.0);
        let (x, y) = visual.transform().transform_point(3.0, 4.0);
        assert_eq!(x, 16.0);
        assert_eq!(y, 28.0);
    }
}
