//! One-line text editing for the angle and stop fields.

use ombre_css::{Action, Angle};
use ombre_engine::input::{InputEvent, Key, KeyState};

/// What the open edit will change on commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Angle,
    Stop(usize),
}

/// Result of feeding one event to a [`LineEditor`].
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    Pending,
    Commit(Action),
    Cancel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineEditor {
    target: EditTarget,
    buffer: String,
}

impl LineEditor {
    /// Opens an edit pre-filled with the field's current text.
    pub fn new(target: EditTarget, initial: impl Into<String>) -> Self {
        Self { target, buffer: initial.into() }
    }

    pub fn target(&self) -> EditTarget {
        self.target
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn handle(&mut self, event: &InputEvent) -> EditOutcome {
        match event {
            InputEvent::Text(t) => {
                self.buffer.push_str(&t.text);
                EditOutcome::Pending
            }
            InputEvent::Key { key, state: KeyState::Pressed, .. } => match key {
                Key::Enter => EditOutcome::Commit(self.action()),
                Key::Escape => EditOutcome::Cancel,
                Key::Backspace => {
                    self.buffer.pop();
                    EditOutcome::Pending
                }
                _ => EditOutcome::Pending,
            },
            _ => EditOutcome::Pending,
        }
    }

    /// The edit the buffer stands for right now.
    pub fn action(&self) -> Action {
        match self.target {
            EditTarget::Angle => Action::SetAngle(Angle::from_input(&self.buffer)),
            EditTarget::Stop(index) => Action::SetStop { index, color: self.buffer.clone() },
        }
    }

    /// Short prompt for the window title, e.g. `angle: 45_`.
    pub fn prompt(&self) -> String {
        match self.target {
            EditTarget::Angle => format!("angle: {}_", self.buffer),
            EditTarget::Stop(index) => format!("stop {}: {}_", index + 1, self.buffer),
        }
    }
}
