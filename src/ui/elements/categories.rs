// src/ui/elements/categories.rs
// Category list plus the add/edit modal. Saves go over POST for new
// categories and full-replacement PUT for existing ones.

use bevy::prelude::EventWriter;
use bevy_egui::egui;
use egui_extras::{Column, TableBuilder};

use crate::api::types::CreateCategoryPayload;
use crate::catalog::events::{RequestFetch, RequestSaveCategory};
use crate::catalog::resources::{QueryCache, QueryKey};
use crate::ui::state::{AdminWindowState, CategoryFormFields, DeleteTarget};
use crate::ui::systems::ensure_fetched;

pub fn show_category_list(
    ui: &mut egui::Ui,
    state: &mut AdminWindowState,
    cache: &QueryCache,
    fetch_writer: &mut EventWriter<RequestFetch>,
) {
    ensure_fetched(cache, fetch_writer, QueryKey::Categories);

    ui.horizontal(|ui| {
        ui.heading("Categories");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("+ New Category").clicked() {
                state.show_category_popup = true;
                state.category_edit_id = None;
                state.category_form = CategoryFormFields {
                    is_active: true,
                    ..Default::default()
                };
                state.category_form_error = None;
            }
        });
    });
    ui.separator();

    let Some(categories) = cache.categories() else {
        ui.label("Loading categories…");
        return;
    };

    let mut edit_target: Option<String> = None;
    let mut delete_target: Option<DeleteTarget> = None;

    let row_height = ui.text_style_height(&egui::TextStyle::Body) + 8.0;
    TableBuilder::new(ui)
        .id_salt("category_list")
        .striped(true)
        .column(Column::auto().at_least(140.0))
        .column(Column::remainder().at_least(120.0))
        .column(Column::remainder().at_least(120.0))
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(110.0))
        .header(row_height, |mut header| {
            for title in ["Slug", "Name (TH)", "Name (EN)", "Active", "Order", "Actions"] {
                header.col(|ui| {
                    ui.label(egui::RichText::new(title).strong());
                });
            }
        })
        .body(|mut body| {
            for category in categories {
                body.row(row_height, |mut row| {
                    row.col(|ui| {
                        ui.label(&category.slug);
                    });
                    row.col(|ui| {
                        ui.label(category.name_th.as_deref().unwrap_or("—"));
                    });
                    row.col(|ui| {
                        ui.label(category.name_en.as_deref().unwrap_or("—"));
                    });
                    row.col(|ui| {
                        ui.label(if category.is_active != 0 { "Yes" } else { "No" });
                    });
                    row.col(|ui| {
                        ui.label(category.order_index.to_string());
                    });
                    row.col(|ui| {
                        ui.horizontal(|ui| {
                            if ui.small_button("Edit").clicked() {
                                edit_target = Some(category.id.clone());
                            }
                            if ui.small_button("Delete").clicked() {
                                delete_target = Some(DeleteTarget::Category {
                                    id: category.id.clone(),
                                    name: category.display_name().to_string(),
                                });
                            }
                        });
                    });
                });
            }
        });

    if let Some(id) = edit_target {
        if let Some(category) = categories.iter().find(|c| c.id == id) {
            state.show_category_popup = true;
            state.category_edit_id = Some(id);
            state.category_form = CategoryFormFields::from_item(category);
            state.category_form_error = None;
        }
    }
    if delete_target.is_some() {
        state.delete_target = delete_target;
    }
}

pub fn show_category_popup(
    ctx: &egui::Context,
    state: &mut AdminWindowState,
    save_writer: &mut EventWriter<RequestSaveCategory>,
) {
    if !state.show_category_popup {
        return;
    }

    let mut popup_open = state.show_category_popup;
    let mut save_clicked = false;
    let mut cancel_clicked = false;
    let title = if state.category_edit_id.is_some() {
        "Edit Category"
    } else {
        "New Category"
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut popup_open)
        .show(ctx, |ui| {
            let form = &mut state.category_form;
            ui.label("Slug:");
            ui.text_edit_singleline(&mut form.slug);
            ui.label("Name (TH):");
            ui.text_edit_singleline(&mut form.name_th);
            ui.label("Name (EN):");
            ui.text_edit_singleline(&mut form.name_en);
            ui.label("Description:");
            ui.add(egui::TextEdit::multiline(&mut form.description).desired_rows(2));
            ui.label("Hero image URL:");
            ui.text_edit_singleline(&mut form.hero_image);
            ui.horizontal(|ui| {
                ui.checkbox(&mut form.is_active, "Active");
                ui.label("Order:");
                ui.add(egui::DragValue::new(&mut form.order_index).range(0..=999));
            });
            if let Some(error) = &state.category_form_error {
                ui.colored_label(egui::Color32::LIGHT_RED, error);
            }
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    save_clicked = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel_clicked = true;
                }
            });
        });

    if save_clicked {
        if state.category_form.slug.trim().is_empty() {
            state.category_form_error = Some("Slug is required".to_string());
        } else {
            save_writer.write(RequestSaveCategory {
                id: state.category_edit_id.clone(),
                payload: category_payload(&state.category_form),
            });
            // Popup stays open until the mutation result closes it.
        }
    }
    if cancel_clicked || !popup_open {
        state.show_category_popup = false;
        state.category_edit_id = None;
        state.category_form = CategoryFormFields::default();
        state.category_form_error = None;
    }
}

fn category_payload(form: &CategoryFormFields) -> CreateCategoryPayload {
    let non_blank = |s: &str| {
        let t = s.trim();
        if t.is_empty() {
            None
        } else {
            Some(t.to_string())
        }
    };
    CreateCategoryPayload {
        slug: form.slug.trim().to_string(),
        name_th: non_blank(&form.name_th),
        name_en: non_blank(&form.name_en),
        description: non_blank(&form.description),
        hero_image: non_blank(&form.hero_image),
        is_active: i64::from(form.is_active),
        order_index: form.order_index,
    }
}
