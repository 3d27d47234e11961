use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

use crate::input::{InputEvent, InputState, Key, KeyState, Modifiers, TextEvent};

/// Translates a winit `WindowEvent` into engine input events.
///
/// A key press that produces printable text yields two events: the key, then
/// the text. Events the input subsystem does not represent yield nothing.
pub(crate) fn translate_window_event(state: &InputState, event: &WindowEvent) -> Vec<InputEvent> {
    match event {
        WindowEvent::ModifiersChanged(m) => {
            vec![InputEvent::ModifiersChanged(map_modifiers(m.state()))]
        }

        WindowEvent::Focused(f) => vec![InputEvent::Focused(*f)],

        WindowEvent::KeyboardInput { event, .. } => translate_key(state.modifiers, event),

        WindowEvent::Ime(winit::event::Ime::Commit(text)) => printable(text)
            .map(|text| InputEvent::Text(TextEvent { text }))
            .into_iter()
            .collect(),

        _ => Vec::new(),
    }
}

fn translate_key(modifiers: Modifiers, event: &KeyEvent) -> Vec<InputEvent> {
    let state = match event.state {
        ElementState::Pressed => KeyState::Pressed,
        ElementState::Released => KeyState::Released,
    };

    let mut out = vec![InputEvent::Key {
        key: map_key(event.physical_key),
        state,
        modifiers,
        repeat: event.repeat,
    }];

    // Shortcut chords (Ctrl+C) are not text input.
    if state == KeyState::Pressed && !modifiers.command() {
        if let Some(text) = event.text.as_deref().and_then(printable) {
            out.push(InputEvent::Text(TextEvent { text }));
        }
    }
    out
}

/// Drops control characters; `None` when nothing printable is left.
fn printable(text: &str) -> Option<String> {
    let s: String = text.chars().filter(|c| !c.is_control()).collect();
    (!s.is_empty()).then_some(s)
}

fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        meta: m.super_key(),
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    let PhysicalKey::Code(code) = pk else {
        return Key::Unknown(0);
    };
    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,

        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,

        KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
        KeyCode::ControlLeft | KeyCode::ControlRight => Key::Control,
        KeyCode::AltLeft | KeyCode::AltRight => Key::Alt,
        KeyCode::SuperLeft | KeyCode::SuperRight => Key::Meta,

        KeyCode::KeyA => Key::A,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyR => Key::R,

        other => Key::Unknown(other as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_strips_control_characters() {
        assert_eq!(printable("a"), Some("a".to_string()));
        assert_eq!(printable("\r"), None);
        assert_eq!(printable("\u{8}"), None);
        assert_eq!(printable("\u{3}"), None);
        assert_eq!(printable("#\tf"), Some("#f".to_string()));
    }

    #[test]
    fn letter_keys_map() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyL)), Key::L);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::NumpadEnter)), Key::Enter);
        assert!(matches!(map_key(PhysicalKey::Code(KeyCode::KeyZ)), Key::Unknown(_)));
    }
}
