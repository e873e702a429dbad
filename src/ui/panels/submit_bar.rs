// MailTriage - ui/panels/submit_bar.rs
//
// Analyse button. Disabled with a spinner while a request is in flight.

use crate::app::controller::Command;
use crate::app::state::FormState;

/// Render the submit control.
pub fn render(ui: &mut egui::Ui, state: &FormState, commands: &mut Vec<Command>) {
    ui.horizontal(|ui| {
        if state.is_submitting() {
            ui.add_enabled(false, egui::Button::new("Analysing\u{2026}"));
            ui.add(egui::Spinner::new());
        } else {
            let button = egui::Button::new(egui::RichText::new("\u{1f50d}  Analyse email").strong());
            if ui.add_enabled(state.submit_enabled(), button).clicked() {
                commands.push(Command::Submit);
            }
            ui.label(egui::RichText::new("Ctrl+Enter").small().weak());
        }
    });
}
