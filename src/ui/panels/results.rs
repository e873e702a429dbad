// MailTriage - ui/panels/results.rs
//
// Classification results: badges, metrics grid and the suggested reply
// with a copy control. Every value comes from `ResultView` and is drawn
// as a plain label.

use crate::app::controller::Command;
use crate::app::state::FormState;
use crate::core::render::{self, ResultView};
use crate::ui::theme;
use std::time::Instant;

/// Render the results section if results are visible.
///
/// Returns true while the entrance animation is still running, so the
/// caller keeps repainting.
pub fn render(
    ui: &mut egui::Ui,
    state: &mut FormState,
    now: Instant,
    commands: &mut Vec<Command>,
) -> bool {
    let copied = state.copy_feedback_active(now);
    let Some(shown) = state.results.as_mut() else {
        return false;
    };

    let entrance = render::entrance(now.saturating_duration_since(shown.revealed_at));

    let response = ui
        .scope(|ui| {
            ui.set_opacity(entrance.opacity);
            ui.add_space(entrance.offset);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                classification(ui, &shown.view);
                ui.add_space(theme::SECTION_SPACING);
                ui.separator();
                suggested_response(ui, &shown.view, copied, commands);
            });
        })
        .response;

    if shown.scroll_pending {
        response.scroll_to_me(Some(egui::Align::TOP));
        shown.scroll_pending = false;
    }

    !entrance.finished
}

fn classification(ui: &mut egui::Ui, view: &ResultView) {
    ui.strong("Classification");
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        let cat = theme::category_colours(&view.category_class);
        ui.label(
            egui::RichText::new(format!(" {} ", view.category))
                .strong()
                .color(cat.fg)
                .background_color(cat.bg),
        )
        .on_hover_text(&view.category_class);

        let pri = theme::priority_colours(&view.priority_class);
        ui.label(
            egui::RichText::new(format!(" {} ", view.priority))
                .strong()
                .color(pri.fg)
                .background_color(pri.bg),
        )
        .on_hover_text(&view.priority_class);
    });

    ui.add_space(4.0);
    egui::Grid::new("result_metrics")
        .num_columns(2)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            ui.label("Email type:");
            ui.label(&view.email_type);
            ui.end_row();

            ui.label("Confidence:");
            ui.label(&view.confidence);
            ui.end_row();

            ui.label("Word count:");
            ui.label(&view.word_count);
            ui.end_row();

            ui.label("Processing time:");
            ui.label(&view.processing_time);
            ui.end_row();
        });
}

fn suggested_response(
    ui: &mut egui::Ui,
    view: &ResultView,
    copied: bool,
    commands: &mut Vec<Command>,
) {
    ui.horizontal(|ui| {
        ui.strong("Suggested response");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let button = if copied {
                egui::Button::new("\u{2714}").fill(theme::COPY_OK_BG)
            } else {
                egui::Button::new("\u{1f4cb} Copy")
            };
            if ui.add(button).on_hover_text("Copy subject and body").clicked() {
                commands.push(Command::CopyResponse);
            }
        });
    });

    egui::Grid::new("result_response")
        .num_columns(2)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            ui.label("Subject:");
            ui.label(&view.response_subject);
            ui.end_row();
        });

    ui.add_space(4.0);
    egui::ScrollArea::vertical()
        .id_salt("response_body")
        .max_height(220.0)
        .show(ui, |ui| {
            ui.label(&view.response_body);
        });
}
