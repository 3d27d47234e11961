use crate::action::Action;
use crate::angle::Angle;
use crate::error::StateError;
use crate::kind::GradientKind;
use crate::stops::ColorStops;

/// Immutable gradient snapshot.
///
/// Every operation borrows the current snapshot and returns a new one; the
/// receiver is left untouched. `revision` grows by one for every accepted
/// operation, so a presentation layer can detect change by comparing a single
/// integer. Refused operations return a copy with the same revision.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientConfig {
    kind: GradientKind,
    angle: Angle,
    stops: ColorStops,
    revision: u64,
}

impl GradientConfig {
    pub fn new(kind: GradientKind, angle: impl Into<Angle>, stops: ColorStops) -> Self {
        Self { kind, angle: angle.into(), stops, revision: 0 }
    }

    // ── read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn kind(&self) -> GradientKind {
        self.kind
    }

    #[inline]
    pub fn angle(&self) -> Angle {
        self.angle
    }

    #[inline]
    pub fn stops(&self) -> &ColorStops {
        &self.stops
    }

    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ── operations ────────────────────────────────────────────────────────

    pub fn with_kind(&self, kind: GradientKind) -> Self {
        self.next(|c| c.kind = kind)
    }

    pub fn with_angle(&self, angle: impl Into<Angle>) -> Self {
        let angle = angle.into();
        self.next(|c| c.angle = angle)
    }

    /// Appends a white stop.
    pub fn with_stop_added(&self) -> Self {
        let mut stops = self.stops.clone();
        stops.push_new();
        self.next(|c| c.stops = stops)
    }

    /// Replaces the color at `index`.
    pub fn try_with_stop(&self, index: usize, color: impl Into<String>) -> Result<Self, StateError> {
        let mut stops = self.stops.clone();
        stops.replace(index, color.into())?;
        Ok(self.next(|c| c.stops = stops))
    }

    /// Removes the stop at `index`; refused when it is the only stop.
    pub fn try_without_stop(&self, index: usize) -> Result<Self, StateError> {
        let mut stops = self.stops.clone();
        stops.remove(index)?;
        Ok(self.next(|c| c.stops = stops))
    }

    /// Like [`try_with_stop`](Self::try_with_stop), but a refused edit yields an
    /// unchanged snapshot.
    pub fn with_stop(&self, index: usize, color: impl Into<String>) -> Self {
        self.or_unchanged(self.try_with_stop(index, color))
    }

    /// Like [`try_without_stop`](Self::try_without_stop), but removing the last
    /// stop (or a missing one) yields an unchanged snapshot.
    pub fn without_stop(&self, index: usize) -> Self {
        self.or_unchanged(self.try_without_stop(index))
    }

    /// Reducer entry point: applies `action` and returns the resulting snapshot.
    pub fn try_apply(&self, action: Action) -> Result<Self, StateError> {
        match action {
            Action::SetKind(kind) => Ok(self.with_kind(kind)),
            Action::SetAngle(angle) => Ok(self.with_angle(angle)),
            Action::AddStop => Ok(self.with_stop_added()),
            Action::SetStop { index, color } => self.try_with_stop(index, color),
            Action::RemoveStop { index } => self.try_without_stop(index),
        }
    }

    /// Infallible reducer: refused actions leave the snapshot as it was.
    pub fn apply(&self, action: Action) -> Self {
        self.or_unchanged(self.try_apply(action))
    }

    fn next(&self, edit: impl FnOnce(&mut Self)) -> Self {
        let mut out = self.clone();
        edit(&mut out);
        out.revision = self.revision.wrapping_add(1);
        out
    }

    fn or_unchanged(&self, result: Result<Self, StateError>) -> Self {
        result.unwrap_or_else(|err| {
            log::debug!("gradient edit refused: {err}");
            self.clone()
        })
    }
}

impl Default for GradientConfig {
    /// Linear, 90 degrees, red to blue.
    fn default() -> Self {
        Self::new(GradientKind::Linear, Angle::DEFAULT, ColorStops::default())
    }
}
