//! Editing session: the current snapshot plus selection and open edit.
//!
//! Everything the studio does in response to a key lives here, so the whole
//! interaction can be replayed in tests from plain [`InputEvent`]s.

use ombre_css::{css_declaration, Action, GradientConfig};
use ombre_engine::input::InputEvent;

use crate::controls::{Command, Controls};
use crate::editor::{EditOutcome, EditTarget, LineEditor};

/// What the window should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing visible changed.
    Idle,
    /// Title or preview must be refreshed.
    Redraw,
    /// Copy the current declaration to the clipboard.
    Copy,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: GradientConfig,
    selected: usize,
    editor: Option<LineEditor>,
    /// Set when a key press opened the editor; the text that same press
    /// produces is not part of the edit.
    skip_text: bool,
}

impl Session {
    pub fn new(config: GradientConfig) -> Self {
        Self { config, selected: 0, editor: None, skip_text: false }
    }

    pub fn config(&self) -> &GradientConfig {
        &self.config
    }

    /// Index of the selected stop; always valid for the current snapshot.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn editor(&self) -> Option<&LineEditor> {
        self.editor.as_ref()
    }

    pub fn declaration(&self) -> String {
        css_declaration(&self.config)
    }

    /// Window title: the declaration, or the edit prompt while editing.
    pub fn title(&self) -> String {
        match &self.editor {
            Some(editor) => format!("{} | {}", editor.prompt(), self.declaration()),
            None => format!("[stop {}/{}] {}", self.selected + 1, self.config.stops().len(), self.declaration()),
        }
    }

    pub fn handle(&mut self, event: &InputEvent) -> Outcome {
        if std::mem::take(&mut self.skip_text) && matches!(event, InputEvent::Text(_)) {
            return Outcome::Idle;
        }

        if let Some(editor) = self.editor.as_mut() {
            return match editor.handle(event) {
                EditOutcome::Pending => Outcome::Redraw,
                EditOutcome::Cancel => {
                    self.editor = None;
                    Outcome::Redraw
                }
                EditOutcome::Commit(action) => {
                    self.editor = None;
                    self.dispatch(action);
                    Outcome::Redraw
                }
            };
        }

        match Controls::map(event) {
            Some(command) => self.run(command),
            None => Outcome::Idle,
        }
    }

    fn run(&mut self, command: Command) -> Outcome {
        let kind = self.config.kind();
        match command {
            Command::SetKind(k) => self.dispatch(Action::SetKind(k)),
            Command::CycleKind => self.dispatch(Action::SetKind(kind.next())),

            Command::NudgeAngle(delta) if kind.uses_angle() => {
                self.dispatch(Action::SetAngle(self.config.angle().offset(delta)))
            }
            Command::EditAngle if kind.uses_angle() => {
                self.open(LineEditor::new(EditTarget::Angle, self.config.angle().to_string()))
            }
            Command::NudgeAngle(_) | Command::EditAngle => Outcome::Idle,

            Command::SelectPrevious => self.select(self.selected.saturating_sub(1)),
            Command::SelectNext => self.select(self.selected + 1),

            Command::AddStop => {
                let outcome = self.dispatch(Action::AddStop);
                self.select(self.config.stops().len() - 1);
                outcome
            }
            Command::EditStop => {
                let current = self.config.stops().get(self.selected).unwrap_or_default();
                self.open(LineEditor::new(EditTarget::Stop(self.selected), current))
            }
            Command::RemoveStop => self.dispatch(Action::RemoveStop { index: self.selected }),

            Command::Copy => Outcome::Copy,
            Command::Quit => Outcome::Quit,
        }
    }

    fn open(&mut self, editor: LineEditor) -> Outcome {
        self.editor = Some(editor);
        self.skip_text = true;
        Outcome::Redraw
    }

    fn select(&mut self, index: usize) -> Outcome {
        let index = index.min(self.config.stops().len() - 1);
        if index == self.selected {
            return Outcome::Idle;
        }
        self.selected = index;
        Outcome::Redraw
    }

    fn dispatch(&mut self, action: Action) -> Outcome {
        let described = action.to_string();
        let next = self.config.apply(action);
        if next.revision() == self.config.revision() {
            return Outcome::Idle;
        }

        self.config = next;
        self.selected = self.selected.min(self.config.stops().len() - 1);
        log::info!("{described}: {}", self.declaration());
        Outcome::Redraw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ombre_css::{GradientKind, NEW_STOP_COLOR};
    use ombre_engine::input::{Key, Modifiers};

    fn press(s: &mut Session, key: Key) -> Outcome {
        s.handle(&InputEvent::press(key, Modifiers::NONE))
    }

    fn type_text(s: &mut Session, text: &str) {
        s.handle(&InputEvent::text(text));
    }

    /// A key press as the runtime delivers it: the key, then its text.
    fn stroke(s: &mut Session, key: Key, text: &str) -> Outcome {
        let outcome = press(s, key);
        type_text(s, text);
        outcome
    }

    fn clear_edit(s: &mut Session) {
        for _ in 0..s.editor().map_or(0, |e| e.text().chars().count()) {
            press(s, Key::Backspace);
        }
    }

    // ── kind / angle ──────────────────────────────────────────────────────

    #[test]
    fn switching_kinds_updates_the_declaration() {
        let mut s = Session::new(GradientConfig::default());
        assert_eq!(press(&mut s, Key::C), Outcome::Redraw);
        assert_eq!(s.declaration(), "background: conic-gradient(from 90deg, #ff0000, #0000ff);");
        press(&mut s, Key::Tab);
        assert_eq!(s.config().kind(), GradientKind::Linear);
    }

    #[test]
    fn reselecting_the_same_kind_still_counts_as_an_edit() {
        let mut s = Session::new(GradientConfig::default());
        assert_eq!(press(&mut s, Key::L), Outcome::Redraw);
        assert_eq!(s.config().revision(), 1);
    }

    #[test]
    fn arrows_nudge_the_angle() {
        let mut s = Session::new(GradientConfig::default());
        press(&mut s, Key::ArrowRight);
        press(&mut s, Key::ArrowRight);
        s.handle(&InputEvent::press(Key::ArrowLeft, Modifiers { shift: true, ..Modifiers::NONE }));
        assert_eq!(s.declaration(), "background: linear-gradient(77deg, #ff0000, #0000ff);");
    }

    #[test]
    fn angle_controls_are_inert_for_radial() {
        let mut s = Session::new(GradientConfig::default());
        press(&mut s, Key::R);
        let revision = s.config().revision();
        assert_eq!(press(&mut s, Key::ArrowRight), Outcome::Idle);
        assert_eq!(press(&mut s, Key::A), Outcome::Idle);
        assert!(s.editor().is_none());
        assert_eq!(s.config().revision(), revision);
    }

    #[test]
    fn angle_edit_commits_through_from_input() {
        let mut s = Session::new(GradientConfig::default());
        press(&mut s, Key::A);
        assert_eq!(s.editor().map(|e| e.text()), Some("90"));
        clear_edit(&mut s);
        type_text(&mut s, "-45");
        press(&mut s, Key::Enter);
        assert!(s.editor().is_none());
        assert_eq!(s.declaration(), "background: linear-gradient(-45deg, #ff0000, #0000ff);");
    }

    #[test]
    fn cleared_angle_becomes_nan() {
        let mut s = Session::new(GradientConfig::default());
        press(&mut s, Key::A);
        clear_edit(&mut s);
        press(&mut s, Key::Enter);
        assert_eq!(s.declaration(), "background: linear-gradient(NaNdeg, #ff0000, #0000ff);");
    }

    // ── stops ─────────────────────────────────────────────────────────────

    #[test]
    fn add_selects_the_new_stop() {
        let mut s = Session::new(GradientConfig::default());
        press(&mut s, Key::N);
        assert_eq!(s.selected(), 2);
        assert_eq!(s.config().stops().get(2), Some(NEW_STOP_COLOR));
    }

    #[test]
    fn edit_replaces_the_selected_stop() {
        let mut s = Session::new(GradientConfig::default());
        press(&mut s, Key::ArrowDown);
        press(&mut s, Key::E);
        clear_edit(&mut s);
        type_text(&mut s, "#00ff00");
        press(&mut s, Key::Enter);
        assert_eq!(s.declaration(), "background: linear-gradient(90deg, #ff0000, #00ff00);");
    }

    #[test]
    fn cancelled_edit_leaves_the_snapshot_alone() {
        let mut s = Session::new(GradientConfig::default());
        press(&mut s, Key::E);
        type_text(&mut s, "zzz");
        assert_eq!(press(&mut s, Key::Escape), Outcome::Redraw);
        assert!(s.editor().is_none());
        assert_eq!(s.config().revision(), 0);
    }

    #[test]
    fn escape_quits_only_outside_an_edit() {
        let mut s = Session::new(GradientConfig::default());
        press(&mut s, Key::E);
        assert_eq!(press(&mut s, Key::Escape), Outcome::Redraw);
        assert_eq!(press(&mut s, Key::Escape), Outcome::Quit);
    }

    #[test]
    fn empty_stop_edit_is_refused() {
        let mut s = Session::new(GradientConfig::default());
        press(&mut s, Key::E);
        clear_edit(&mut s);
        press(&mut s, Key::Enter);
        assert_eq!(s.config().revision(), 0);
        assert_eq!(s.config().stops().get(0), Some("#ff0000"));
    }

    #[test]
    fn selection_stays_in_range() {
        let mut s = Session::new(GradientConfig::default());
        assert_eq!(press(&mut s, Key::ArrowUp), Outcome::Idle);
        press(&mut s, Key::ArrowDown);
        assert_eq!(press(&mut s, Key::ArrowDown), Outcome::Idle);
        assert_eq!(s.selected(), 1);
    }

    #[test]
    fn removing_the_last_entry_moves_the_selection() {
        let mut s = Session::new(GradientConfig::default());
        press(&mut s, Key::ArrowDown);
        press(&mut s, Key::Delete);
        assert_eq!(s.selected(), 0);
        assert_eq!(s.declaration(), "background: linear-gradient(90deg, #ff0000);");
    }

    #[test]
    fn last_stop_cannot_be_removed() {
        let mut s = Session::new(GradientConfig::default());
        press(&mut s, Key::Delete);
        assert_eq!(press(&mut s, Key::Delete), Outcome::Idle);
        assert_eq!(s.config().stops().len(), 1);
    }

    #[test]
    fn opening_key_text_stays_out_of_the_stop_buffer() {
        let mut s = Session::new(GradientConfig::default());
        stroke(&mut s, Key::E, "e");
        assert_eq!(s.editor().map(|e| e.text()), Some("#ff0000"));
        press(&mut s, Key::Enter);
        assert_eq!(s.config().stops().get(0), Some("#ff0000"));
        assert_eq!(s.declaration(), "background: linear-gradient(90deg, #ff0000, #0000ff);");
    }

    #[test]
    fn opening_key_text_stays_out_of_the_angle_buffer() {
        let mut s = Session::new(GradientConfig::default());
        stroke(&mut s, Key::A, "a");
        assert_eq!(s.editor().map(|e| e.text()), Some("90"));
        press(&mut s, Key::Enter);
        assert_eq!(s.declaration(), "background: linear-gradient(90deg, #ff0000, #0000ff);");
    }

    #[test]
    fn text_typed_after_opening_still_lands() {
        let mut s = Session::new(GradientConfig::default());
        stroke(&mut s, Key::A, "a");
        clear_edit(&mut s);
        stroke(&mut s, Key::Unknown(0), "1");
        stroke(&mut s, Key::Unknown(0), "5");
        press(&mut s, Key::Enter);
        assert_eq!(s.declaration(), "background: linear-gradient(15deg, #ff0000, #0000ff);");
    }

    #[test]
    fn enter_opening_an_edit_does_not_swallow_the_next_character() {
        // Enter yields no text, so the first typed character must survive.
        let mut s = Session::new(GradientConfig::default());
        press(&mut s, Key::Enter);
        clear_edit(&mut s);
        stroke(&mut s, Key::Unknown(0), "t");
        assert_eq!(s.editor().map(|e| e.text()), Some("t"));
    }

    // ── misc ──────────────────────────────────────────────────────────────

    #[test]
    fn copy_is_reported() {
        let mut s = Session::new(GradientConfig::default());
        let ctrl = if cfg!(target_os = "macos") {
            Modifiers { meta: true, ..Modifiers::NONE }
        } else {
            Modifiers { ctrl: true, ..Modifiers::NONE }
        };
        assert_eq!(s.handle(&InputEvent::press(Key::C, ctrl)), Outcome::Copy);
        assert_eq!(s.config().kind(), GradientKind::Linear);
    }

    #[test]
    fn title_shows_selection_and_prompt() {
        let mut s = Session::new(GradientConfig::default());
        assert_eq!(s.title(), "[stop 1/2] background: linear-gradient(90deg, #ff0000, #0000ff);");
        press(&mut s, Key::A);
        assert!(s.title().starts_with("angle: 90_ | "));
    }
}
