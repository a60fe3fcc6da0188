pub mod animation;
pub mod director;
pub mod geometry;
pub mod stage;
pub mod transform;
pub mod viewport;

// Ready-made choreography for the product landing page
pub mod page;

use std::sync::atomic::{AtomicBool, Ordering};

pub mod prelude {
    pub use crate::animation::{AdvanceResult, Animatable, Easing, Transition, Tween};
    pub use crate::director::{
        Director, EntranceId, EntranceSpec, FallbackId, HoverId, HoverStyle, MarqueeId,
        MarqueeRate, MarqueeSpec, ParallaxId, ParallaxSpec, SectionId, Trigger,
    };
    pub use crate::geometry::{Rect, Vec2};
    pub use crate::stage::{ElementId, Overlay, Stage, Visual, VisualFlags};
    pub use crate::transform::Transform;
    pub use crate::viewport::{LayoutProfile, ScrollSpan, Viewport};
    pub use crate::{init, is_initialized};
}

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Process-wide one-time initialization.
///
/// Safe to call from any thread and any number of times; only the first
/// call does anything. [`Director::new`](director::Director::new) calls
/// this itself, so hosts only need it when they want the init log line
/// before the first director exists.
pub fn init() {
    if !INITIALIZED.swap(true, Ordering::SeqCst) {
        log::debug!("animation engine initialized");
    }
}

/// Whether [`init`] has run in this process.
pub fn is_initialized() -> bool {
    INITIALIZED.load(Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        assert!(is_initialized());
        init();
        assert!(is_initialized());
    }
}
