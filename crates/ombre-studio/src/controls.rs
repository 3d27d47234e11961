//! Key bindings.
//!
//! Browsing keys map to a [`Command`] here, without touching any state, so the
//! whole table can be tested without a window.

use ombre_css::GradientKind;
use ombre_engine::input::{InputEvent, Key, KeyState, Modifiers};

/// Degrees per arrow press.
pub const ANGLE_STEP: f64 = 1.0;
/// Degrees per arrow press with Shift held.
pub const ANGLE_STEP_COARSE: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    SetKind(GradientKind),
    CycleKind,
    NudgeAngle(f64),
    EditAngle,
    SelectPrevious,
    SelectNext,
    AddStop,
    EditStop,
    RemoveStop,
    Copy,
    Quit,
}

pub struct Controls;

impl Controls {
    /// Maps one input event to a command while no text edit is open.
    pub fn map(event: &InputEvent) -> Option<Command> {
        let InputEvent::Key { key, state: KeyState::Pressed, modifiers, repeat } = event else {
            return None;
        };
        let plain = !modifiers.command() && !modifiers.alt;

        // Holding an arrow keeps nudging; everything else fires once per press.
        if *repeat && !matches!(key, Key::ArrowLeft | Key::ArrowRight | Key::ArrowUp | Key::ArrowDown) {
            return None;
        }

        let command = match key {
            Key::C if modifiers.command() => Command::Copy,

            Key::L if plain => Command::SetKind(GradientKind::Linear),
            Key::R if plain => Command::SetKind(GradientKind::Radial),
            Key::C if plain => Command::SetKind(GradientKind::Conic),
            Key::Tab if plain => Command::CycleKind,

            Key::ArrowLeft => Command::NudgeAngle(-angle_step(modifiers)),
            Key::ArrowRight => Command::NudgeAngle(angle_step(modifiers)),
            Key::A if plain => Command::EditAngle,

            Key::ArrowUp => Command::SelectPrevious,
            Key::ArrowDown => Command::SelectNext,
            Key::N if plain => Command::AddStop,
            Key::E | Key::Enter if plain => Command::EditStop,
            Key::Delete | Key::Backspace => Command::RemoveStop,

            Key::Escape => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}

fn angle_step(modifiers: &Modifiers) -> f64 {
    if modifiers.shift { ANGLE_STEP_COARSE } else { ANGLE_STEP }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key) -> Option<Command> {
        Controls::map(&InputEvent::press(key, Modifiers::NONE))
    }

    fn press_with(key: Key, modifiers: Modifiers) -> Option<Command> {
        Controls::map(&InputEvent::press(key, modifiers))
    }

    fn command_modifier() -> Modifiers {
        if cfg!(target_os = "macos") {
            Modifiers { meta: true, ..Modifiers::NONE }
        } else {
            Modifiers { ctrl: true, ..Modifiers::NONE }
        }
    }

    // ── kind ──────────────────────────────────────────────────────────────

    #[test]
    fn letters_pick_the_kind() {
        assert_eq!(press(Key::L), Some(Command::SetKind(GradientKind::Linear)));
        assert_eq!(press(Key::R), Some(Command::SetKind(GradientKind::Radial)));
        assert_eq!(press(Key::C), Some(Command::SetKind(GradientKind::Conic)));
        assert_eq!(press(Key::Tab), Some(Command::CycleKind));
    }

    #[test]
    fn ctrl_c_copies_instead_of_switching_to_conic() {
        assert_eq!(press_with(Key::C, command_modifier()), Some(Command::Copy));
    }

    // ── angle ─────────────────────────────────────────────────────────────

    #[test]
    fn arrows_nudge_the_angle() {
        assert_eq!(press(Key::ArrowLeft), Some(Command::NudgeAngle(-1.0)));
        assert_eq!(press(Key::ArrowRight), Some(Command::NudgeAngle(1.0)));
        let shift = Modifiers { shift: true, ..Modifiers::NONE };
        assert_eq!(press_with(Key::ArrowRight, shift), Some(Command::NudgeAngle(15.0)));
        assert_eq!(press(Key::A), Some(Command::EditAngle));
    }

    #[test]
    fn held_arrow_repeats() {
        let ev = InputEvent::Key {
            key: Key::ArrowRight,
            state: KeyState::Pressed,
            modifiers: Modifiers::NONE,
            repeat: true,
        };
        assert_eq!(Controls::map(&ev), Some(Command::NudgeAngle(1.0)));
    }

    #[test]
    fn held_letter_does_not_repeat() {
        let ev = InputEvent::Key { key: Key::N, state: KeyState::Pressed, modifiers: Modifiers::NONE, repeat: true };
        assert_eq!(Controls::map(&ev), None);
    }

    // ── stops ─────────────────────────────────────────────────────────────

    #[test]
    fn stop_keys() {
        assert_eq!(press(Key::ArrowUp), Some(Command::SelectPrevious));
        assert_eq!(press(Key::ArrowDown), Some(Command::SelectNext));
        assert_eq!(press(Key::N), Some(Command::AddStop));
        assert_eq!(press(Key::E), Some(Command::EditStop));
        assert_eq!(press(Key::Enter), Some(Command::EditStop));
        assert_eq!(press(Key::Delete), Some(Command::RemoveStop));
        assert_eq!(press(Key::Backspace), Some(Command::RemoveStop));
    }

    // ── ignored ───────────────────────────────────────────────────────────

    #[test]
    fn releases_text_and_unknown_keys_are_ignored() {
        let release = InputEvent::Key {
            key: Key::L,
            state: KeyState::Released,
            modifiers: Modifiers::NONE,
            repeat: false,
        };
        assert_eq!(Controls::map(&release), None);
        assert_eq!(Controls::map(&InputEvent::text("l")), None);
        assert_eq!(press(Key::Unknown(42)), None);
        assert_eq!(press(Key::Shift), None);
    }

    #[test]
    fn escape_quits() {
        assert_eq!(press(Key::Escape), Some(Command::Quit));
    }
}
