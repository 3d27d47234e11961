//! Gradient state and CSS formatting for **Ombre**, the CSS gradient builder.
//!
//! This crate holds everything that is not presentation: the gradient snapshot,
//! the edits a user can make to it, and the pure function turning a snapshot
//! into CSS text. It has no window or GPU dependencies, so it can be tested and
//! reused without a display.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`config`] | `GradientConfig` snapshot and its operations |
//! | [`action`] | `Action`, the reducer input |
//! | [`kind`] | `GradientKind` (linear / radial / conic) |
//! | [`angle`] | `Angle`, unbounded degrees with a NaN placeholder |
//! | [`stops`] | `ColorStops`, the non-empty stop list |
//! | [`format`] | `format_gradient`, `css_declaration` |
//! | [`color`] | preview-only color resolution |
//! | [`error`] | `StateError`, `ColorError` |
//!
//! # Quick start
//!
//! ```rust
//! use ombre_css::{css_declaration, format_gradient, Action, GradientConfig, GradientKind};
//!
//! let config = GradientConfig::default();
//! assert_eq!(format_gradient(&config), "linear-gradient(90deg, #ff0000, #0000ff)");
//!
//! let config = config
//!     .apply(Action::SetKind(GradientKind::Conic))
//!     .apply(Action::RemoveStop { index: 1 });
//! assert_eq!(css_declaration(&config), "background: conic-gradient(from 90deg, #ff0000);");
//! ```

pub mod action;
pub mod angle;
pub mod color;
pub mod config;
pub mod error;
pub mod format;
pub mod kind;
pub mod stops;

pub use action::Action;
pub use angle::Angle;
pub use color::{parse_color, resolve_stops, Rgba};
pub use config::GradientConfig;
pub use error::{ColorError, StateError};
pub use format::{css_declaration, format_gradient, Declaration, GradientCss};
pub use kind::GradientKind;
pub use stops::{ColorStops, NEW_STOP_COLOR};
