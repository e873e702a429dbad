// MailTriage - ui/panels/tabs.rs
//
// Tab bar switching between the text and file input panels.

use crate::app::controller::Command;
use crate::app::state::FormState;
use crate::core::model::InputMode;

fn icon(mode: InputMode) -> &'static str {
    match mode {
        InputMode::TextDirect => "\u{270f}",
        InputMode::FileUpload => "\u{1f4c4}",
    }
}

/// Render the tab bar.
pub fn render(ui: &mut egui::Ui, state: &FormState, commands: &mut Vec<Command>) {
    ui.horizontal(|ui| {
        for mode in InputMode::all() {
            let label = format!("{}  {}", icon(*mode), mode.label());
            if ui
                .selectable_label(state.is_active(*mode), label)
                .clicked()
            {
                commands.push(Command::ActivateTab(*mode));
            }
        }
    });
}
