use crate::geometry::Vec2;
use crate::stage::Visual;

/// Trait for types that can be animated by interpolating between values
pub trait Animatable: Clone + PartialEq + Send + Sync + 'static {
    /// Linear interpolation between two values
    /// t = 0.0 returns `from`, t = 1.0 returns `to`
    /// t can exceed [0, 1] range for overshoot effects
    fn lerp(from: &Self, to: &Self, t: f32) -> Self;
}

impl Animatable for f32 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Animatable for Vec2 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Vec2 {
            x: from.x + (to.x - from.x) * t,
            y: from.y + (to.y - from.y) * t,
        }
    }
}

impl Animatable for Visual {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Visual {
            opacity: from.opacity + (to.opacity - from.opacity) * t,
            offset: Vec2::lerp(&from.offset, &to.offset, t),
            scale: from.scale + (to.scale - from.scale) * t,
            elevation: from.elevation + (to.elevation - from.elevation) * t,
        }
    }
}
