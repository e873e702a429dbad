// MailTriage - gui.rs
//
// Top-level eframe::App implementation.
// Turns egui input into controller commands, lays out the panels and
// schedules repaints for the running timers.

use crate::app::controller::{ClipboardSink, Command, FormController};
use crate::core::model::InputMode;
use crate::core::samples;
use crate::platform::http::AnalysisTransport;
use crate::ui;
use crate::ui::shortcuts::Shortcuts;
use crate::util::error::ClipboardError;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Clipboard backed by the egui platform integration.
struct EguiClipboard {
    ctx: egui::Context,
}

impl ClipboardSink for EguiClipboard {
    fn write_text(&mut self, text: String) -> Result<(), ClipboardError> {
        self.ctx.copy_text(text);
        Ok(())
    }
}

/// The MailTriage application.
pub struct MailTriageApp {
    pub controller: FormController,
    endpoint: String,
}

impl MailTriageApp {
    /// Create the application. `ctx` is the egui context handed over by
    /// eframe; the controller uses it for clipboard writes.
    pub fn new(
        ctx: &egui::Context,
        transport: Arc<dyn AnalysisTransport>,
        endpoint: String,
    ) -> Self {
        let clipboard = Box::new(EguiClipboard { ctx: ctx.clone() });
        Self {
            controller: FormController::new(transport, clipboard),
            endpoint,
        }
    }

    /// Time until the next timer (banner or copy glyph) needs a frame.
    fn next_deadline(&self, now: Instant) -> Option<Duration> {
        let state = &self.controller.state;
        let banner = state.banner.remaining(now);
        let copy = state
            .copy_feedback_until
            .map(|until| until.saturating_duration_since(now));
        match (banner, copy) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

impl eframe::App for MailTriageApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.controller.poll(now);

        let mut commands = ctx
            .input_mut(Shortcuts::take)
            .commands(self.controller.state.is_submitting());

        // Menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Samples", |ui| {
                    for key in samples::keys() {
                        if ui.button(key).clicked() {
                            commands.push(Command::Prefill(key.to_string()));
                            ui.close_menu();
                        }
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(&self.endpoint).small().weak())
                        .on_hover_text("Analysis endpoint");
                });
            });
        });

        let mut animating = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    let margin = ((ui.available_width() - ui::theme::CONTENT_MAX_WIDTH) / 2.0)
                        .max(0.0);
                    ui.horizontal(|ui| {
                        ui.add_space(margin);
                        ui.vertical(|ui| {
                            ui.set_max_width(ui::theme::CONTENT_MAX_WIDTH);
                            let state = &mut self.controller.state;

                            ui.add_space(ui::theme::SECTION_SPACING);
                            ui.heading("Email classification");
                            ui.label(
                                egui::RichText::new(
                                    "Classify an email as productive or unproductive and get a suggested reply.",
                                )
                                .weak(),
                            );
                            ui.add_space(ui::theme::SECTION_SPACING);

                            ui::panels::tabs::render(ui, state, &mut commands);
                            ui.separator();

                            match state.active_tab {
                                InputMode::TextDirect => ui::panels::text_input::render(ui, state),
                                InputMode::FileUpload => {
                                    ui::panels::file_input::render(ui, state, &mut commands)
                                }
                            }

                            ui.add_space(ui::theme::SECTION_SPACING);
                            ui::panels::submit_bar::render(ui, state, &mut commands);
                            ui.add_space(ui::theme::SECTION_SPACING);
                            ui::panels::error_banner::render(ui, state, &mut commands);
                            ui.add_space(ui::theme::SECTION_SPACING);
                            animating =
                                ui::panels::results::render(ui, state, now, &mut commands);
                        });
                    });
                });
        });

        for command in commands {
            self.controller.dispatch(command, now);
        }

        // Spinner and entrance animation need continuous frames; otherwise
        // wake up only when a timer is due.
        if animating || self.controller.state.is_submitting() {
            ctx.request_repaint();
        } else if let Some(wait) = self.next_deadline(now) {
            ctx.request_repaint_after(wait);
        }
    }
}
