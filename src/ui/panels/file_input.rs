// MailTriage - ui/panels/file_input.rs
//
// Upload panel. With no file selected it shows the drop area (a file can
// be dropped on the window or picked with the native dialog); with a file
// selected it shows `name (size)` and a remove control.

use crate::app::controller::Command;
use crate::app::state::FormState;
use crate::core::format;
use crate::ui::theme;
use crate::util::constants::ALLOWED_EXTENSIONS;

/// Render the file panel.
pub fn render(ui: &mut egui::Ui, state: &FormState, commands: &mut Vec<Command>) {
    // Files dropped anywhere on the window land here while this tab is open.
    let dropped = ui
        .ctx()
        .input(|i| i.raw.dropped_files.first().and_then(|f| f.path.clone()));
    if let Some(path) = dropped {
        commands.push(Command::SelectFile(path));
    }

    match &state.selected_file {
        None => drop_area(ui, commands),
        Some(file) => {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(format!(
                        "\u{1f4c4}  {} ({})",
                        file.name,
                        format::file_size(file.size)
                    ));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("\u{2716} Remove").clicked() {
                            commands.push(Command::ClearFile);
                        }
                    });
                });
            });
        }
    }
}

fn drop_area(ui: &mut egui::Ui, commands: &mut Vec<Command>) {
    let hovering = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
    let mut frame = egui::Frame::group(ui.style());
    if hovering {
        frame = frame.stroke(egui::Stroke::new(2.0, ui.visuals().selection.stroke.color));
    }

    frame.show(ui, |ui| {
        ui.set_min_height(theme::DROP_AREA_HEIGHT);
        ui.vertical_centered(|ui| {
            ui.add_space(theme::SECTION_SPACING);
            ui.label(egui::RichText::new("\u{2b07}").size(28.0));
            ui.label("Drop a .txt or .pdf file here");
            ui.label(egui::RichText::new("up to 16 MB").small().weak());
            ui.add_space(4.0);
            if ui.button("Choose file\u{2026}").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Email files", ALLOWED_EXTENSIONS)
                    .add_filter("All files", &["*"])
                    .pick_file()
                {
                    commands.push(Command::SelectFile(path));
                }
            }
        });
    });
}
