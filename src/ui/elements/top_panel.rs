// src/ui/elements/top_panel.rs
// Navigation strip: one button per screen, settings on the right, and the
// transient feedback line underneath.

use bevy_egui::egui;

use crate::ui::state::{AdminWindowState, Screen};
use crate::ui::UiFeedbackState;

/// Returns true when the refresh button was clicked; the caller re-requests
/// the active screen's data.
pub fn show_top_panel(
    ui: &mut egui::Ui,
    state: &mut AdminWindowState,
    ui_feedback: &UiFeedbackState,
) -> bool {
    let mut refresh_clicked = false;
    ui.horizontal(|ui| {
        ui.heading("ReviewDesk");
        ui.separator();
        for screen in Screen::ALL {
            if ui
                .selectable_label(state.screen == screen, screen.label())
                .clicked()
            {
                state.screen = screen;
            }
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("⚙ Settings").clicked() {
                state.show_settings_popup = true;
            }
            if ui
                .button("⟳")
                .on_hover_text("Reload this screen's data")
                .clicked()
            {
                refresh_clicked = true;
            }
            if !state.settings_api_key_status.is_empty() {
                ui.label(
                    egui::RichText::new(&state.settings_api_key_status)
                        .small()
                        .weak(),
                );
            }
        });
    });

    if !ui_feedback.last_message.is_empty() {
        let color = if ui_feedback.is_error {
            egui::Color32::RED
        } else {
            ui.style().visuals.text_color()
        };
        ui.colored_label(color, &ui_feedback.last_message);
    }
    ui.separator();
    refresh_clicked
}
