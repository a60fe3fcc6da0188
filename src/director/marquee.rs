//! Looping logo marquee.
//!
//! The strip element slides left at a constant rate and wraps modulo
//! the width of one rendered copy of the item sequence, which reads as
//! an endless belt as long as the host renders at least three copies.

use std::time::Duration;

use crate::geometry::Vec2;
use crate::stage::{ElementId, Stage, Visual};

/// Identifier for a running marquee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarqueeId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarqueeRate {
    /// Constant speed in pixels per second.
    PxPerSec(f32),
    /// Seconds for one full wrap; speed is derived from the measured
    /// wrap distance.
    LoopDuration(f32),
}

/// Marquee layout and pacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeSpec {
    /// Horizontal gap between items in pixels.
    pub gap: f32,
    /// How many copies of the item sequence the host renders.
    pub copies: u32,
    pub rate: MarqueeRate,
}

impl MarqueeSpec {
    pub fn new() -> Self {
        Self {
            gap: 48.0,
            copies: 3,
            rate: MarqueeRate::LoopDuration(25.0),
        }
    }

    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn copies(mut self, copies: u32) -> Self {
        self.copies = copies;
        self
    }

    pub fn rate(mut self, rate: MarqueeRate) -> Self {
        self.rate = rate;
        self
    }
}

impl Default for MarqueeSpec {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) struct Marquee {
    pub strip: ElementId,
    total_width: f32,
    speed: f32,
    x: f32,
    paused: bool,
}

impl Marquee {
    /// Measure the wrap distance and derive the speed.
    ///
    /// The wrap distance assumes uniform item widths and measures only
    /// the first item; mixed widths are logged, not corrected.
    pub fn new(strip: ElementId, items: &[ElementId], spec: &MarqueeSpec, stage: &Stage) -> Self {
        let widths: Vec<f32> = items
            .iter()
            .filter_map(|&item| stage.rect(item))
            .map(|rect| rect.width)
            .collect();

        let total_width = match widths.first() {
            Some(&first) => {
                let min = widths.iter().copied().fold(first, f32::min);
                let max = widths.iter().copied().fold(first, f32::max);
                if max - min > 0.5 {
                    log::warn!(
                        "marquee items have mixed widths ({min:.1}..{max:.1}px); \
                         wrap distance uses the first item and will drift"
                    );
                }
                items.len() as f32 * (first + spec.gap) / spec.copies.max(1) as f32
            }
            None => {
                log::warn!("marquee started with no measurable items; it will not move");
                0.0
            }
        };

        if spec.copies < 3 && total_width > 0.0 {
            log::warn!(
                "marquee rendered with {} cop(ies); fewer than 3 leaves a visible seam",
                spec.copies
            );
        }

        let speed = match spec.rate {
            MarqueeRate::PxPerSec(speed) => speed,
            MarqueeRate::LoopDuration(secs) => {
                if secs > 0.0 {
                    total_width / secs
                } else {
                    log::warn!("marquee loop duration must be positive; marquee will not move");
                    0.0
                }
            }
        };

        Self {
            strip,
            total_width,
            speed,
            x: 0.0,
            paused: false,
        }
    }

    pub fn total_width(&self) -> f32 {
        self.total_width
    }

    #[allow(dead_code)]
    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    #[allow(dead_code)]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Slide the strip by one frame's travel and wrap.
    pub fn advance(&mut self, stage: &mut Stage, dt: Duration) {
        if self.paused || self.total_width <= 0.0 || self.speed == 0.0 {
            return;
        }
        // f32 remainder keeps the sign of the dividend, so x stays in
        // (-total_width, 0].
        self.x = (self.x - self.speed * dt.as_secs_f32()) % self.total_width;
        let base = match stage.base(self.strip) {
            Some(base) => base,
            None => return,
        };
        stage.set_base(
            self.strip,
            Visual {
                offset: Vec2::new(self.x, base.offset.y),
                ..base
            },
        );
    }
}
