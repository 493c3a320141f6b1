// src/ui/elements/products/import_tab.rs
// Paste-or-pick JSON import. Applying replaces the whole form (status is
// forced back to draft by the normalizer) and jumps to the Basic tab for
// review.

use bevy::log::warn;
use bevy::prelude::EventWriter;
use bevy_egui::egui;

use crate::catalog::events::StatusFeedback;
use crate::catalog::form::import::import_product_json;
use crate::catalog::form::template::JSON_TEMPLATE;
use crate::ui::state::{ProductEditor, ProductFormTab};

pub fn show_import_tab(
    ui: &mut egui::Ui,
    editor: &mut ProductEditor,
    feedback_writer: &mut EventWriter<StatusFeedback>,
) {
    ui.label("Paste product JSON (AI output or an export) and apply it to the form.");
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        if ui.button("📁 Load File...").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("JSON files", &["json"])
                .set_title("Select product JSON file")
                .pick_file()
            {
                match std::fs::read_to_string(&path) {
                    Ok(contents) => {
                        editor.import_text = contents;
                        editor.import_error = None;
                    }
                    Err(e) => {
                        warn!("Failed to read '{}': {}", path.display(), e);
                        editor.import_error = Some(format!("Could not read file: {e}"));
                    }
                }
            }
        }
        if ui.button("Insert Template").clicked() {
            editor.import_text = JSON_TEMPLATE.to_string();
            editor.import_error = None;
        }
        if ui.button("📋 Copy Template").clicked() {
            ui.ctx().copy_text(JSON_TEMPLATE.to_string());
        }
        if ui.button("Clear").clicked() {
            editor.import_text.clear();
            editor.import_error = None;
        }
    });

    egui::ScrollArea::vertical()
        .max_height(ui.available_height() - 60.0)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut editor.import_text)
                    .code_editor()
                    .desired_rows(18)
                    .desired_width(f32::INFINITY),
            );
        });

    if let Some(error) = &editor.import_error {
        ui.colored_label(egui::Color32::LIGHT_RED, error);
    }

    if ui.button("Apply to Form").clicked() {
        match import_product_json(&editor.import_text) {
            Ok(form) => {
                editor.form = form;
                editor.import_error = None;
                editor.tab = ProductFormTab::Basic;
                feedback_writer.write(StatusFeedback {
                    message: format!("Imported '{}' — review and save", editor.form.name),
                    is_error: false,
                });
            }
            Err(message) => {
                editor.import_error = Some(message);
            }
        }
    }
}
