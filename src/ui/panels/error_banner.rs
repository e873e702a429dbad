// MailTriage - ui/panels/error_banner.rs
//
// Inline error banner with a close control.

use crate::app::controller::Command;
use crate::app::state::FormState;
use crate::ui::theme;

/// Render the banner if one is visible.
pub fn render(ui: &mut egui::Ui, state: &FormState, commands: &mut Vec<Command>) {
    let Some(banner) = state.banner.current() else {
        return;
    };

    egui::Frame::group(ui.style())
        .fill(theme::banner_colour(banner.kind))
        .stroke(egui::Stroke::NONE)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("\u{26a0}").color(theme::BANNER_TEXT));
                // Plain label: the message may echo server text.
                ui.label(egui::RichText::new(&banner.message).color(theme::BANNER_TEXT));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let close = egui::Button::new(
                        egui::RichText::new("\u{2716}").color(theme::BANNER_TEXT),
                    )
                    .frame(false);
                    if ui.add(close).on_hover_text("Dismiss (Esc)").clicked() {
                        commands.push(Command::DismissError);
                    }
                });
            });
        });
}
