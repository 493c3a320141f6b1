// src/ui/elements/brands.rs
// Brand list and modal form, including the SEO fields the public brand
// pages are rendered from.

use bevy::prelude::EventWriter;
use bevy_egui::egui;
use egui_extras::{Column, TableBuilder};

use crate::api::types::CreateBrandPayload;
use crate::catalog::events::{RequestFetch, RequestSaveBrand};
use crate::catalog::resources::{QueryCache, QueryKey};
use crate::ui::state::{AdminWindowState, BrandFormFields, DeleteTarget};
use crate::ui::systems::ensure_fetched;

pub fn show_brand_list(
    ui: &mut egui::Ui,
    state: &mut AdminWindowState,
    cache: &QueryCache,
    fetch_writer: &mut EventWriter<RequestFetch>,
) {
    ensure_fetched(cache, fetch_writer, QueryKey::Brands);

    ui.horizontal(|ui| {
        ui.heading("Brands");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("+ New Brand").clicked() {
                state.show_brand_popup = true;
                state.brand_edit_id = None;
                state.brand_form = BrandFormFields::default();
                state.brand_form_error = None;
            }
        });
    });
    ui.separator();

    let Some(page) = cache.brands() else {
        ui.label("Loading brands…");
        return;
    };

    ui.label(format!("{} brands", page.total));

    let mut edit_target: Option<String> = None;
    let mut delete_target: Option<DeleteTarget> = None;

    let row_height = ui.text_style_height(&egui::TextStyle::Body) + 8.0;
    TableBuilder::new(ui)
        .id_salt("brand_list")
        .striped(true)
        .column(Column::auto().at_least(140.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::remainder().at_least(160.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(110.0))
        .header(row_height, |mut header| {
            for title in ["Name", "Slug", "Tagline", "Indexed", "Actions"] {
                header.col(|ui| {
                    ui.label(egui::RichText::new(title).strong());
                });
            }
        })
        .body(|mut body| {
            for brand in &page.items {
                body.row(row_height, |mut row| {
                    row.col(|ui| {
                        ui.label(&brand.name);
                    });
                    row.col(|ui| {
                        ui.label(&brand.slug);
                    });
                    row.col(|ui| {
                        ui.label(brand.tagline.as_deref().unwrap_or("—"));
                    });
                    row.col(|ui| {
                        ui.label(if brand.is_indexable { "Yes" } else { "No" });
                    });
                    row.col(|ui| {
                        ui.horizontal(|ui| {
                            if ui.small_button("Edit").clicked() {
                                edit_target = Some(brand.id.clone());
                            }
                            if ui.small_button("Delete").clicked() {
                                delete_target = Some(DeleteTarget::Brand {
                                    id: brand.id.clone(),
                                    name: brand.name.clone(),
                                });
                            }
                        });
                    });
                });
            }
        });

    if let Some(id) = edit_target {
        if let Some(brand) = page.items.iter().find(|b| b.id == id) {
            state.show_brand_popup = true;
            state.brand_edit_id = Some(id);
            state.brand_form = BrandFormFields::from_item(brand);
            state.brand_form_error = None;
        }
    }
    if delete_target.is_some() {
        state.delete_target = delete_target;
    }
}

pub fn show_brand_popup(
    ctx: &egui::Context,
    state: &mut AdminWindowState,
    save_writer: &mut EventWriter<RequestSaveBrand>,
) {
    if !state.show_brand_popup {
        return;
    }

    let mut popup_open = state.show_brand_popup;
    let mut save_clicked = false;
    let mut cancel_clicked = false;
    let title = if state.brand_edit_id.is_some() {
        "Edit Brand"
    } else {
        "New Brand"
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut popup_open)
        .show(ctx, |ui| {
            let is_editing = state.brand_edit_id.is_some();
            let form = &mut state.brand_form;
            ui.label("Name:");
            let mut name = form.name.clone();
            if ui.text_edit_singleline(&mut name).changed() {
                if !is_editing {
                    form.slug = crate::catalog::form::state::generate_slug(&name);
                }
                form.name = name;
            }
            ui.label("Slug:");
            ui.text_edit_singleline(&mut form.slug);
            ui.label("Tagline:");
            ui.text_edit_singleline(&mut form.tagline);
            ui.label("Description:");
            ui.add(egui::TextEdit::multiline(&mut form.description).desired_rows(2));
            ui.label("Logo URL:");
            ui.text_edit_singleline(&mut form.logo_url);
            ui.collapsing("SEO", |ui| {
                ui.label("Meta title:");
                ui.text_edit_singleline(&mut form.meta_title);
                ui.label("Meta description:");
                ui.add(egui::TextEdit::multiline(&mut form.meta_description).desired_rows(2));
                ui.checkbox(&mut form.is_indexable, "Indexable");
                ui.checkbox(&mut form.is_followable, "Followable");
            });
            if let Some(error) = &state.brand_form_error {
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
        let form = &state.brand_form;
        if form.name.trim().is_empty() || form.slug.trim().is_empty() {
            state.brand_form_error = Some("Name and slug are required".to_string());
        } else {
            save_writer.write(RequestSaveBrand {
                id: state.brand_edit_id.clone(),
                payload: brand_payload(form),
            });
        }
    }
    if cancel_clicked || !popup_open {
        state.show_brand_popup = false;
        state.brand_edit_id = None;
        state.brand_form = BrandFormFields::default();
        state.brand_form_error = None;
    }
}

fn brand_payload(form: &BrandFormFields) -> CreateBrandPayload {
    let non_blank = |s: &str| {
        let t = s.trim();
        if t.is_empty() {
            None
        } else {
            Some(t.to_string())
        }
    };
    CreateBrandPayload {
        name: form.name.trim().to_string(),
        slug: form.slug.trim().to_string(),
        tagline: non_blank(&form.tagline),
        description: non_blank(&form.description),
        logo_url: non_blank(&form.logo_url),
        meta_title: non_blank(&form.meta_title),
        meta_description: non_blank(&form.meta_description),
        is_indexable: Some(form.is_indexable),
        is_followable: Some(form.is_followable),
    }
}
