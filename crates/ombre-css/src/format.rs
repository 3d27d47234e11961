//! CSS text for a gradient snapshot.
//!
//! The output must match what users paste into stylesheets byte for byte:
//!
//! - `linear-gradient(<angle>deg, <stops>)`
//! - `radial-gradient(<stops>)`
//! - `conic-gradient(from <angle>deg, <stops>)`
//!
//! where `<stops>` is the stop list joined with `", "`.

use std::fmt;

use crate::config::GradientConfig;
use crate::kind::GradientKind;

/// Formats the gradient expression, e.g. `linear-gradient(90deg, #ff0000, #0000ff)`.
pub fn format_gradient(config: &GradientConfig) -> String {
    GradientCss(config).to_string()
}

/// Formats the full declaration, e.g. `background: linear-gradient(...);`.
pub fn css_declaration(config: &GradientConfig) -> String {
    Declaration(config).to_string()
}

/// `Display` adapter writing the gradient expression without an intermediate `String`.
#[derive(Debug, Copy, Clone)]
pub struct GradientCss<'a>(pub &'a GradientConfig);

impl fmt::Display for GradientCss<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.0;
        f.write_str(config.kind().function_name())?;
        f.write_str("(")?;
        match config.kind() {
            GradientKind::Linear => write!(f, "{}deg, ", config.angle())?,
            GradientKind::Radial => {}
            GradientKind::Conic => write!(f, "from {}deg, ", config.angle())?,
        }
        for (i, stop) in config.stops().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(stop)?;
        }
        f.write_str(")")
    }
}

/// `Display` adapter writing `background: <gradient>;`.
#[derive(Debug, Copy, Clone)]
pub struct Declaration<'a>(pub &'a GradientConfig);

impl fmt::Display for Declaration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "background: {};", GradientCss(self.0))
    }
}

impl fmt::Display for GradientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        GradientCss(self).fmt(f)
    }
}
