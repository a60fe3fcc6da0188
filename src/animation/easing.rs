//! Easing curves for tweened animations.
//!
//! An [`Easing`] maps normalized time `t` in `[0.0, 1.0]` to an eased
//! progress value. Most curves stay inside `[0.0, 1.0]`; `ElasticOut`
//! deliberately overshoots above `1.0` before settling, which is what
//! gives badge pop-ins their snap.

use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub enum Easing {
    Linear,
    /// Quadratic ease-out: fast start, gentle landing.
    QuadOut,
    QuadInOut,
    /// Cubic ease-out, the workhorse for hover transitions.
    CubicOut,
    QuartOut,
    QuartInOut,
    /// Quintic ease-out: a long, dramatic deceleration for hero reveals.
    QuintOut,
    /// CSS-style cubic bezier with control points (x1, y1, x2, y2).
    CubicBezier(f32, f32, f32, f32),
    /// Springy overshoot that settles on 1.0. `amplitude` is the overshoot
    /// magnitude (values below 1.0 are treated as 1.0) and `period` the
    /// oscillation length in normalized time.
    ElasticOut { amplitude: f32, period: f32 },
    /// User-provided curve.
    Custom(Arc<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl Easing {
    /// Evaluate the curve at `t`, clamping `t` to `[0.0, 1.0]` first.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => Self::quad_out(t),
            Easing::QuadInOut => Self::quad_in_out(t),
            Easing::CubicOut => Self::cubic_out(t),
            Easing::QuartOut => Self::quart_out(t),
            Easing::QuartInOut => Self::quart_in_out(t),
            Easing::QuintOut => Self::quint_out(t),
            Easing::CubicBezier(x1, y1, x2, y2) => Self::cubic_bezier(t, *x1, *y1, *x2, *y2),
            Easing::ElasticOut { amplitude, period } => Self::elastic_out(t, *amplitude, *period),
            Easing::Custom(f) => f(t),
        }
    }

    /// Create a custom easing from a closure.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        Easing::Custom(Arc::new(f))
    }

    fn quad_out(t: f32) -> f32 {
        t * (2.0 - t)
    }

    fn quad_in_out(t: f32) -> f32 {
        if t < 0.5 {
            2.0 * t * t
        } else {
            -1.0 + (4.0 - 2.0 * t) * t
        }
    }

    fn cubic_out(t: f32) -> f32 {
        let u = 1.0 - t;
        1.0 - u * u * u
    }

    fn quart_out(t: f32) -> f32 {
        let u = 1.0 - t;
        1.0 - u * u * u * u
    }

    fn quart_in_out(t: f32) -> f32 {
        if t < 0.5 {
            8.0 * t * t * t * t
        } else {
            let u = 2.0 - 2.0 * t;
            1.0 - u * u * u * u / 2.0
        }
    }

    fn quint_out(t: f32) -> f32 {
        let u = 1.0 - t;
        1.0 - u * u * u * u * u
    }

    fn elastic_out(t: f32, amplitude: f32, period: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let a = amplitude.max(1.0);
        let p = if period > 0.0 { period } else { 0.3 };
        let two_pi = std::f32::consts::TAU;
        let s = p / two_pi * (1.0 / a).asin();
        a * 2.0_f32.powf(-10.0 * t) * ((t - s) * two_pi / p).sin() + 1.0
    }

    /// Cubic bezier evaluation using Newton-Raphson iteration.
    fn cubic_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
        // Solve for the parameter u where the curve's x equals t,
        // then evaluate y at that parameter.
        let mut u = t;
        for _ in 0..8 {
            let x = Self::bezier_component(u, x1, x2) - t;
            if x.abs() < 1e-5 {
                break;
            }
            let dx = Self::bezier_derivative(u, x1, x2);
            if dx.abs() < 1e-6 {
                break;
            }
            u -= x / dx;
            u = u.clamp(0.0, 1.0);
        }
        Self::bezier_component(u, y1, y2)
    }

    fn bezier_component(u: f32, c1: f32, c2: f32) -> f32 {
        let inv = 1.0 - u;
        3.0 * inv * inv * u * c1 + 3.0 * inv * u * u * c2 + u * u * u
    }

    fn bezier_derivative(u: f32, c1: f32, c2: f32) -> f32 {
        let inv = 1.0 - u;
        3.0 * inv * inv * c1 + 6.0 * inv * u * (c2 - c1) + 3.0 * u * u * (1.0 - c2)
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Linear
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Linear => write!(f, "Linear"),
            Easing::QuadOut => write!(f, "QuadOut"),
            Easing::QuadInOut => write!(f, "QuadInOut"),
            Easing::CubicOut => write!(f, "CubicOut"),
            Easing::QuartOut => write!(f, "QuartOut"),
            Easing::QuartInOut => write!(f, "QuartInOut"),
            Easing::QuintOut => write!(f, "QuintOut"),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "CubicBezier({x1}, {y1}, {x2}, {y2})")
            }
            Easing::ElasticOut { amplitude, period } => {
                write!(f, "ElasticOut({amplitude}, {period})")
            }
            Easing::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}
