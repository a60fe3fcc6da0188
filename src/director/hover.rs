//! Hover micro-interactions.
//!
//! A hover binding owns one element's hover overlay and blends it
//! between a rest style and a hover style as the pointer enters and
//! leaves. Leaving mid-flight reverses from wherever the blend is, so
//! rapid enter/leave sequences never jump.

use std::time::Duration;

use crate::animation::{AdvanceResult, Animatable, Transition, Tween};
use crate::stage::{ElementId, Overlay, Stage};

use super::SectionId;

/// Identifier for a hover binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoverId(pub(crate) usize);

/// Target styling for one end of a hover interaction.
///
/// `lift` raises the element in pixels (positive is up the page),
/// `scale` multiplies the element's base scale, and `elevation` adds
/// shadow depth on top of the base elevation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverStyle {
    pub lift: f32,
    pub scale: f32,
    pub elevation: f32,
}

impl HoverStyle {
    /// No lift, no scaling, no extra shadow.
    pub const REST: HoverStyle = HoverStyle {
        lift: 0.0,
        scale: 1.0,
        elevation: 0.0,
    };

    pub fn new() -> Self {
        Self::REST
    }

    pub fn lift(mut self, lift: f32) -> Self {
        self.lift = lift;
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

    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            lift: f32::lerp(&from.lift, &to.lift, t),
            scale: f32::lerp(&from.scale, &to.scale, t),
            elevation: f32::lerp(&from.elevation, &to.elevation, t),
        }
    }

    fn overlay(&self) -> Overlay {
        Overlay {
            dy: -self.lift,
            scale: self.scale,
            elevation: self.elevation,
        }
    }
}

impl Default for HoverStyle {
    fn default() -> Self {
        Self::REST
    }
}

pub(crate) struct HoverBinding {
    pub section: SectionId,
    pub element: ElementId,
    hover: HoverStyle,
    rest: HoverStyle,
    blend: Tween<f32>,
}

impl HoverBinding {
    pub fn new(
        section: SectionId,
        element: ElementId,
        hover: HoverStyle,
        rest: HoverStyle,
        transition: Transition,
    ) -> Self {
        Self {
            section,
            element,
            hover,
            rest,
            blend: Tween::new(0.0, transition),
        }
    }

    /// Write the rest overlay once at registration.
    pub fn prepare(&self, stage: &mut Stage) {
        stage.set_hover(self.element, self.rest.overlay());
    }

    pub fn pointer_enter(&mut self, now: Duration) {
        self.blend.animate_to(1.0, now);
    }

    pub fn pointer_leave(&mut self, now: Duration) {
        self.blend.animate_to(0.0, now);
    }

    pub fn advance(&mut self, stage: &mut Stage, now: Duration) {
        if let AdvanceResult::Changed(blend) = self.blend.advance(now) {
            let style = HoverStyle::lerp(&self.rest, &self.hover, blend);
            stage.set_hover(self.element, style.overlay());
        }
    }
}
