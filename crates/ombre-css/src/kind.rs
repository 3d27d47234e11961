use std::fmt;
use std::str::FromStr;

/// CSS gradient function family.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
    Conic,
}

impl GradientKind {
    /// Every kind, in selector order.
    pub const ALL: [GradientKind; 3] = [GradientKind::Linear, GradientKind::Radial, GradientKind::Conic];

    /// CSS function name, e.g. `linear-gradient`.
    pub const fn function_name(self) -> &'static str {
        match self {
            GradientKind::Linear => "linear-gradient",
            GradientKind::Radial => "radial-gradient",
            GradientKind::Conic => "conic-gradient",
        }
    }

    /// Whether the angle takes part in the formatted output.
    pub const fn uses_angle(self) -> bool {
        match self {
            GradientKind::Linear | GradientKind::Conic => true,
            GradientKind::Radial => false,
        }
    }

    /// Selector value (`linear`, `radial`, `conic`).
    pub const fn as_str(self) -> &'static str {
        match self {
            GradientKind::Linear => "linear",
            GradientKind::Radial => "radial",
            GradientKind::Conic => "conic",
        }
    }

    /// Next kind in selector order, wrapping around.
    pub const fn next(self) -> Self {
        match self {
            GradientKind::Linear => GradientKind::Radial,
            GradientKind::Radial => GradientKind::Conic,
            GradientKind::Conic => GradientKind::Linear,
        }
    }
}

impl fmt::Display for GradientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a selector value names no gradient kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown gradient kind {:?} (expected linear, radial or conic)", self.0)
    }
}

impl std::error::Error for UnknownKind {}

impl FromStr for GradientKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GradientKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
