// MailTriage - ui/panels/text_input.rs
//
// Email text box with live validity border and character counter.

use crate::app::state::FormState;
use crate::core::format;
use crate::ui::theme;
use crate::util::constants::MAX_TEXT_CHARS;

/// Render the text panel. Edits `state.email_text` in place.
pub fn render(ui: &mut egui::Ui, state: &mut FormState) {
    let border = theme::text_border_colour(state.text_validity());

    let response = egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.5, border))
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut state.email_text)
                    .hint_text("Paste the email content here\u{2026}")
                    .desired_rows(theme::TEXT_ROWS)
                    .desired_width(f32::INFINITY)
                    .frame(false),
            )
        })
        .inner;

    if state.focus_text_requested {
        response.request_focus();
        state.focus_text_requested = false;
    }

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        let count = state.char_count();
        ui.colored_label(
            theme::char_count_colour(count),
            format!(
                "{} / {} characters",
                format::thousands(count),
                format::thousands(MAX_TEXT_CHARS)
            ),
        );
    });
}
