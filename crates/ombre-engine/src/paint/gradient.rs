use std::f64::consts::{SQRT_2, TAU};
use std::fmt;

use ombre_css::{resolve_stops, Angle, ColorError, GradientConfig, GradientKind};

use crate::coords::{Rect, Vec2};

use super::Color;

/// A single gradient stop.
///
/// `t` is the position along the gradient parameter, in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Where the gradient parameter comes from, in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GradientShape {
    /// `t` is the projection onto the segment `start → end`.
    Linear { start: Vec2, end: Vec2 },
    /// `t` is the normalized elliptical distance from `center`.
    Radial { center: Vec2, radii: Vec2 },
    /// `t` is the clockwise sweep around `center`, starting at `start_angle`
    /// radians from the top.
    Conic { center: Vec2, start_angle: f32 },
}

/// Why a snapshot cannot be painted.
///
/// A browser handed the same CSS would drop the declaration, so the preview
/// shows the bare background in every one of these cases.
#[derive(Debug, Clone, PartialEq)]
pub enum Unpaintable {
    EmptyRect,
    NonFiniteAngle(Angle),
    Color(ColorError),
}

impl fmt::Display for Unpaintable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unpaintable::EmptyRect => f.write_str("preview area is empty"),
            Unpaintable::NonFiniteAngle(a) => write!(f, "angle {a}deg is not a finite number"),
            Unpaintable::Color(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Unpaintable {}

/// A gradient snapshot laid out inside a rectangle, ready for the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientPaint {
    pub rect: Rect,
    pub shape: GradientShape,
    pub stops: Vec<ColorStop>,
}

impl GradientPaint {
    /// Lays `config` out inside `rect` following CSS gradient geometry.
    ///
    /// Stops are spread evenly over `[0, 1]`; a lone stop sits at 0 and paints
    /// a solid fill. Radial gradients use an ellipse sized to the farthest
    /// corner. Angles follow CSS: 0deg points up, positive turns clockwise.
    pub fn layout(config: &GradientConfig, rect: Rect) -> Result<Self, Unpaintable> {
        if rect.is_empty() || !rect.is_finite() {
            return Err(Unpaintable::EmptyRect);
        }

        let angle = config.angle();
        if config.kind().uses_angle() && !angle.is_finite() {
            return Err(Unpaintable::NonFiniteAngle(angle));
        }

        let colors = resolve_stops(config).map_err(Unpaintable::Color)?;
        let last = colors.len().saturating_sub(1).max(1) as f32;
        let stops = colors
            .into_iter()
            .enumerate()
            .map(|(i, c)| ColorStop::new(i as f32 / last, Color::from(c)))
            .collect();

        let center = rect.center();
        let (w, h) = (rect.size.x as f64, rect.size.y as f64);

        let shape = match config.kind() {
            GradientKind::Linear => {
                let theta = angle.to_radians();
                let (dx, dy) = (theta.sin(), -theta.cos());
                let length = (w * dx).abs() + (h * dy).abs();
                let half = Vec2::new((dx * length * 0.5) as f32, (dy * length * 0.5) as f32);
                GradientShape::Linear { start: center - half, end: center + half }
            }
            GradientKind::Radial => GradientShape::Radial {
                center,
                radii: Vec2::new((w / SQRT_2) as f32, (h / SQRT_2) as f32),
            },
            GradientKind::Conic => GradientShape::Conic {
                center,
                // Reduce in f64 first so large angles keep their precision.
                start_angle: angle.to_radians().rem_euclid(TAU) as f32,
            },
        };

        Ok(Self { rect, shape, stops })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ombre_css::{ColorStops, Rgba};

    const EPS: f32 = 1e-3;

    fn config(kind: GradientKind, angle: impl Into<Angle>, colors: &[&str]) -> GradientConfig {
        let stops = ColorStops::from_vec(colors.iter().map(|c| c.to_string()).collect()).unwrap();
        GradientConfig::new(kind, angle, stops)
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    fn linear_ends(paint: &GradientPaint) -> (Vec2, Vec2) {
        match paint.shape {
            GradientShape::Linear { start, end } => (start, end),
            other => panic!("expected linear shape, got {other:?}"),
        }
    }

    const RECT: Rect = Rect::new(0.0, 0.0, 200.0, 100.0);

    // ── linear ────────────────────────────────────────────────────────────

    #[test]
    fn linear_90deg_runs_left_to_right() {
        let p = GradientPaint::layout(&config(GradientKind::Linear, 90, &["red", "blue"]), RECT).unwrap();
        let (s, e) = linear_ends(&p);
        assert!(close(s, Vec2::new(0.0, 50.0)), "{s:?}");
        assert!(close(e, Vec2::new(200.0, 50.0)), "{e:?}");
    }

    #[test]
    fn linear_0deg_runs_bottom_to_top() {
        let p = GradientPaint::layout(&config(GradientKind::Linear, 0, &["red", "blue"]), RECT).unwrap();
        let (s, e) = linear_ends(&p);
        assert!(close(s, Vec2::new(100.0, 100.0)), "{s:?}");
        assert!(close(e, Vec2::new(100.0, 0.0)), "{e:?}");
    }

    #[test]
    fn linear_45deg_reaches_the_corners() {
        let square = Rect::new(0.0, 0.0, 100.0, 100.0);
        let p = GradientPaint::layout(&config(GradientKind::Linear, 45, &["red", "blue"]), square).unwrap();
        let (s, e) = linear_ends(&p);
        assert!(close(s, Vec2::new(0.0, 100.0)), "{s:?}");
        assert!(close(e, Vec2::new(100.0, 0.0)), "{e:?}");
    }

    #[test]
    fn linear_angles_wrap_naturally() {
        let a = GradientPaint::layout(&config(GradientKind::Linear, -270, &["red"]), RECT).unwrap();
        let b = GradientPaint::layout(&config(GradientKind::Linear, 90, &["red"]), RECT).unwrap();
        let (sa, ea) = linear_ends(&a);
        let (sb, eb) = linear_ends(&b);
        assert!(close(sa, sb) && close(ea, eb));
    }

    #[test]
    fn nan_angle_is_unpaintable() {
        let c = config(GradientKind::Linear, Angle::NAN, &["red", "blue"]);
        assert!(matches!(GradientPaint::layout(&c, RECT), Err(Unpaintable::NonFiniteAngle(_))));
        let c = config(GradientKind::Conic, Angle::NAN, &["red", "blue"]);
        assert!(GradientPaint::layout(&c, RECT).is_err());
    }

    // ── radial / conic ────────────────────────────────────────────────────

    #[test]
    fn radial_uses_farthest_corner_ellipse() {
        let c = config(GradientKind::Radial, Angle::NAN, &["red", "blue"]);
        let p = GradientPaint::layout(&c, RECT).unwrap();
        let GradientShape::Radial { center, radii } = p.shape else { panic!("expected radial") };
        assert!(close(center, Vec2::new(100.0, 50.0)));
        // The corner (200, 100) lies exactly on the ellipse.
        let dx = 100.0 / radii.x;
        let dy = 50.0 / radii.y;
        assert!((dx * dx + dy * dy - 1.0).abs() < EPS);
    }

    #[test]
    fn conic_start_angle_is_reduced() {
        let c = config(GradientKind::Conic, 450, &["red", "blue"]);
        let p = GradientPaint::layout(&c, RECT).unwrap();
        let GradientShape::Conic { center, start_angle } = p.shape else { panic!("expected conic") };
        assert!(close(center, Vec2::new(100.0, 50.0)));
        assert!((start_angle - std::f32::consts::FRAC_PI_2).abs() < EPS);
    }

    // ── stops ─────────────────────────────────────────────────────────────

    #[test]
    fn stops_are_evenly_spaced() {
        let c = config(GradientKind::Linear, 0, &["red", "lime", "blue"]);
        let p = GradientPaint::layout(&c, RECT).unwrap();
        let ts: Vec<f32> = p.stops.iter().map(|s| s.t).collect();
        assert_eq!(ts, [0.0, 0.5, 1.0]);
        assert_eq!(p.stops[1].color, Color::from(Rgba::opaque(0, 255, 0)));
    }

    #[test]
    fn single_stop_sits_at_zero() {
        let p = GradientPaint::layout(&config(GradientKind::Radial, 0, &["red"]), RECT).unwrap();
        assert_eq!(p.stops.len(), 1);
        assert_eq!(p.stops[0].t, 0.0);
    }

    #[test]
    fn unresolvable_color_is_unpaintable() {
        let c = config(GradientKind::Linear, 0, &["red", "wat"]);
        assert!(matches!(GradientPaint::layout(&c, RECT), Err(Unpaintable::Color(_))));
    }

    #[test]
    fn empty_rect_is_unpaintable() {
        let c = GradientConfig::default();
        let empty = Rect::new(0.0, 0.0, 0.0, 10.0);
        assert_eq!(GradientPaint::layout(&c, empty), Err(Unpaintable::EmptyRect));
    }
}
