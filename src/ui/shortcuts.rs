// MailTriage - ui/shortcuts.rs
//
// Window-wide keyboard shortcuts: Ctrl/Cmd+Enter submits, Escape dismisses.
// Keys are consumed before the panels render so the text box never sees
// Ctrl+Enter as a newline.

use crate::app::controller::Command;

/// Shortcut keys pressed this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Shortcuts {
    pub submit: bool,
    pub escape: bool,
}

impl Shortcuts {
    /// Consume the shortcut key events from this frame's input.
    pub fn take(input: &mut egui::InputState) -> Self {
        let submit = input.consume_key(egui::Modifiers::COMMAND, egui::Key::Enter)
            || input.consume_key(egui::Modifiers::CTRL, egui::Key::Enter);
        let escape = input.consume_key(egui::Modifiers::NONE, egui::Key::Escape);
        Self { submit, escape }
    }

    /// Commands for the pressed keys. Submit is dropped while a request
    /// is in flight.
    pub fn commands(self, submitting: bool) -> Vec<Command> {
        let mut commands = Vec::new();
        if self.submit && !submitting {
            commands.push(Command::Submit);
        }
        if self.escape {
            commands.push(Command::Escape);
        }
        commands
    }
}
