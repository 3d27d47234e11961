use std::fmt;

/// A gradient mutation that was refused because it would break a snapshot invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// Removing the only remaining color stop.
    LastStop,
    /// `index` does not address a stop in a sequence of `len` stops.
    IndexOutOfRange { index: usize, len: usize },
    /// A color stop must be a non-empty string.
    EmptyColor,
    /// A stop sequence was built from zero colors.
    NoStops,
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::LastStop => f.write_str("cannot remove the last color stop"),
            StateError::IndexOutOfRange { index, len } => {
                write!(f, "color stop index {index} out of range for {len} stops")
            }
            StateError::EmptyColor => f.write_str("color stop must not be empty"),
            StateError::NoStops => f.write_str("a gradient needs at least one color stop"),
        }
    }
}

impl std::error::Error for StateError {}

/// A color string the preview cannot resolve to RGBA.
///
/// This never affects the stored snapshot or the formatted CSS; it only means
/// the preview will not paint the gradient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorError {
    pub input: String,
    pub message: String,
}

impl ColorError {
    pub(crate) fn new(input: &str, msg: impl Into<String>) -> Self {
        Self { input: input.to_string(), message: msg.into() }
    }
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unresolvable color {:?}: {}", self.input, self.message)
    }
}

impl std::error::Error for ColorError {}
