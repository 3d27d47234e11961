use crate::error::StateError;

/// Color appended by "add stop".
pub const NEW_STOP_COLOR: &str = "#ffffff";

/// Ordered, non-empty sequence of CSS color strings.
///
/// Position in the sequence is the stop's position in the gradient. Colors are
/// stored verbatim; the only checks are "at least one stop" and "no empty
/// strings".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorStops(Vec<String>);

impl ColorStops {
    /// A sequence holding a single stop.
    pub fn new(first: impl Into<String>) -> Result<Self, StateError> {
        Self::from_vec(vec![first.into()])
    }

    /// Builds a sequence from `colors`, rejecting an empty list or empty strings.
    pub fn from_vec(colors: Vec<String>) -> Result<Self, StateError> {
        if colors.is_empty() {
            return Err(StateError::NoStops);
        }
        if colors.iter().any(|c| c.is_empty()) {
            return Err(StateError::EmptyColor);
        }
        Ok(Self(colors))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a sequence built through this type.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    #[inline]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Whether a stop can be removed without emptying the sequence.
    #[inline]
    pub fn can_remove(&self) -> bool {
        self.0.len() > 1
    }

    pub(crate) fn push_new(&mut self) {
        self.0.push(NEW_STOP_COLOR.to_string());
    }

    pub(crate) fn replace(&mut self, index: usize, color: String) -> Result<(), StateError> {
        if color.is_empty() {
            return Err(StateError::EmptyColor);
        }
        let len = self.0.len();
        let slot = self
            .0
            .get_mut(index)
            .ok_or(StateError::IndexOutOfRange { index, len })?;
        *slot = color;
        Ok(())
    }

    pub(crate) fn remove(&mut self, index: usize) -> Result<String, StateError> {
        let len = self.0.len();
        if index >= len {
            return Err(StateError::IndexOutOfRange { index, len });
        }
        if !self.can_remove() {
            return Err(StateError::LastStop);
        }
        Ok(self.0.remove(index))
    }
}

impl Default for ColorStops {
    /// Red to blue.
    fn default() -> Self {
        Self(vec!["#ff0000".to_string(), "#0000ff".to_string()])
    }
}

impl<'a> IntoIterator for &'a ColorStops {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops(colors: &[&str]) -> ColorStops {
        ColorStops::from_vec(colors.iter().map(|c| c.to_string()).collect()).unwrap()
    }

    #[test]
    fn default_is_red_then_blue() {
        let s = ColorStops::default();
        assert_eq!(s.as_slice(), ["#ff0000", "#0000ff"]);
    }

    #[test]
    fn from_vec_rejects_empty_list() {
        assert_eq!(ColorStops::from_vec(Vec::new()), Err(StateError::NoStops));
    }

    #[test]
    fn from_vec_rejects_empty_color() {
        let err = ColorStops::from_vec(vec!["red".into(), String::new()]);
        assert_eq!(err, Err(StateError::EmptyColor));
    }

    #[test]
    fn malformed_colors_are_kept_verbatim() {
        let s = stops(&["not-a-color", "#12"]);
        assert_eq!(s.get(0), Some("not-a-color"));
        assert_eq!(s.get(1), Some("#12"));
    }

    #[test]
    fn remove_refuses_last_stop() {
        let mut s = stops(&["red"]);
        assert_eq!(s.remove(0), Err(StateError::LastStop));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn remove_out_of_range() {
        let mut s = stops(&["red", "blue"]);
        assert_eq!(s.remove(2), Err(StateError::IndexOutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn replace_out_of_range() {
        let mut s = stops(&["red"]);
        assert_eq!(
            s.replace(3, "blue".into()),
            Err(StateError::IndexOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(s.as_slice(), ["red"]);
    }

    #[test]
    fn iter_preserves_order() {
        let s = stops(&["a", "b", "c"]);
        assert_eq!(s.iter().collect::<Vec<_>>(), ["a", "b", "c"]);
    }
}
