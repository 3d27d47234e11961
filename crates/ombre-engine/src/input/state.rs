use super::frame::InputFrame;
use super::types::{InputEvent, Modifiers};

/// Keyboard state the runtime carries between events.
///
/// winit reports modifiers separately from key events, so the current set is
/// kept here and stamped onto every translated key.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,
}

impl InputState {
    /// Applies `ev` to the held state and records it in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => self.modifiers = *m,
            // Releases are not delivered to an unfocused window.
            InputEvent::Focused(false) => self.modifiers = Modifiers::NONE,
            InputEvent::Key { modifiers, .. } => self.modifiers = *modifiers,
            InputEvent::Focused(true) | InputEvent::Text(_) => {}
        }
        frame.push_event(ev);
    }
}
