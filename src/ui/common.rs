// src/ui/common.rs
// Small shared widgets: status badges, the string-list row editor, inline
// validation labels, pagination.

use bevy_egui::egui;

use crate::api::types::{CollectionStatus, ContentStatus};
use crate::catalog::form::state::ListField;
use crate::catalog::form::ProductFormState;

pub fn status_badge(ui: &mut egui::Ui, status: ContentStatus) {
    let (text, color) = match status {
        ContentStatus::Draft => ("Draft", egui::Color32::GRAY),
        ContentStatus::Published => ("Published", egui::Color32::DARK_GREEN),
    };
    badge(ui, text, color);
}

pub fn collection_status_badge(ui: &mut egui::Ui, status: CollectionStatus) {
    let (text, color) = match status {
        CollectionStatus::Draft => ("Draft", egui::Color32::GRAY),
        CollectionStatus::Published => ("Published", egui::Color32::DARK_GREEN),
        CollectionStatus::Archived => ("Archived", egui::Color32::DARK_RED),
    };
    badge(ui, text, color);
}

fn badge(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    egui::Frame::new()
        .fill(color)
        .corner_radius(egui::CornerRadius::same(4))
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).color(egui::Color32::WHITE).small());
        });
}

/// Shows the validation message for `key`, if any.
pub fn field_error(
    ui: &mut egui::Ui,
    errors: &std::collections::HashMap<&'static str, String>,
    key: &str,
) {
    if let Some(message) = errors.get(key) {
        ui.colored_label(egui::Color32::LIGHT_RED, message);
    }
}

/// Editable row list with add/remove buttons. Mutations are applied after
/// the loop so indices stay valid while rendering.
pub fn string_list_editor(
    ui: &mut egui::Ui,
    form: &mut ProductFormState,
    field: ListField,
    enabled: bool,
) {
    ui.label(egui::RichText::new(field.label()).strong());

    let mut remove_index: Option<usize> = None;
    let rows = form.list(field).len();
    for index in 0..rows {
        ui.horizontal(|ui| {
            let mut value = form.list(field)[index].clone();
            let width = (ui.available_width() - 40.0).max(120.0);
            let response = ui.add_enabled(
                enabled,
                egui::TextEdit::singleline(&mut value).desired_width(width),
            );
            if response.changed() {
                form.set_list_row(field, index, value);
            }
            if ui
                .add_enabled(enabled, egui::Button::new("✖").small())
                .on_hover_text("Remove row")
                .clicked()
            {
                remove_index = Some(index);
            }
        });
    }
    if let Some(index) = remove_index {
        form.remove_list_row(field, index);
    }
    if ui
        .add_enabled(enabled, egui::Button::new("+ Add").small())
        .clicked()
    {
        form.add_list_row(field);
    }
    ui.add_space(6.0);
}

/// Prev/next pagination strip. Returns the newly selected page, if changed.
pub fn pagination_bar(
    ui: &mut egui::Ui,
    page: usize,
    total_items: usize,
    page_size: usize,
) -> Option<usize> {
    if total_items <= page_size {
        return None;
    }
    let page_count = total_items.div_ceil(page_size);
    let mut selected = None;
    ui.horizontal(|ui| {
        if ui.add_enabled(page > 0, egui::Button::new("◀ Prev")).clicked() {
            selected = Some(page - 1);
        }
        ui.label(format!("Page {} of {}", page + 1, page_count));
        if ui
            .add_enabled(page + 1 < page_count, egui::Button::new("Next ▶"))
            .clicked()
        {
            selected = Some(page + 1);
        }
    });
    selected
}
