//! Paint model shared between the studio and the renderer.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - gradient layout: a CSS gradient snapshot placed inside a rectangle
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, GradientPaint, GradientShape, Unpaintable};
