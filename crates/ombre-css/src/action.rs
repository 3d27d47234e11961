use std::fmt;

use crate::angle::Angle;
use crate::kind::GradientKind;

/// One gradient edit, as dispatched by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetKind(GradientKind),
    SetAngle(Angle),
    /// Append a white stop.
    AddStop,
    SetStop { index: usize, color: String },
    RemoveStop { index: usize },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::SetKind(kind) => write!(f, "set kind {kind}"),
            Action::SetAngle(angle) => write!(f, "set angle {angle}deg"),
            Action::AddStop => f.write_str("add stop"),
            Action::SetStop { index, color } => write!(f, "set stop {index} to {color:?}"),
            Action::RemoveStop { index } => write!(f, "remove stop {index}"),
        }
    }
}
