// src/ui/elements/products/form.rs
// Tabbed product editor. Creation opens every tab; editing narrows to the
// fields the PATCH endpoint accepts, per EditableFieldsConfig.

use bevy::prelude::EventWriter;
use bevy_egui::egui;

use crate::api::types::ContentStatus;
use crate::catalog::events::{
    RequestCreateProduct, RequestFetch, RequestUpdateProduct, StatusFeedback,
};
use crate::catalog::form::payload::{build_create_payload, build_update_payload};
use crate::catalog::form::state::ListField;
use crate::catalog::form::ProductFormState;
use crate::catalog::resources::{EditableFieldsConfig, QueryCache, QueryKey};
use crate::ui::common::{field_error, status_badge, string_list_editor};
use crate::ui::state::{AdminWindowState, ProductFormTab};
use crate::ui::systems::ensure_fetched;

use super::import_tab::show_import_tab;

enum SaveAction {
    Save,
    SaveAndPublish,
}

#[allow(clippy::too_many_arguments)]
pub fn show_product_editor(
    ui: &mut egui::Ui,
    state: &mut AdminWindowState,
    cache: &QueryCache,
    config: &EditableFieldsConfig,
    fetch_writer: &mut EventWriter<RequestFetch>,
    create_writer: &mut EventWriter<RequestCreateProduct>,
    update_writer: &mut EventWriter<RequestUpdateProduct>,
    feedback_writer: &mut EventWriter<StatusFeedback>,
) {
    let Some(editor) = state.product_editor.as_mut() else {
        return;
    };
    let is_editing = editor.is_editing();

    // Populate from the detail fetch the first time it lands.
    if let Some(id) = editor.product_id.clone() {
        if !editor.loaded {
            ensure_fetched(cache, fetch_writer, QueryKey::Product(id.clone()));
            if let Some(detail) = cache.product(&id) {
                editor.form = ProductFormState::from_detail(detail);
                editor.loaded = true;
            } else {
                ui.label("Loading product…");
                return;
            }
        }
    }

    let mut close_editor = false;
    let mut action: Option<SaveAction> = None;

    ui.horizontal(|ui| {
        if ui.button("← Back").clicked() {
            close_editor = true;
        }
        ui.heading(if is_editing {
            "Edit Product"
        } else {
            "New Product"
        });
        status_badge(ui, editor.form.status);
    });
    ui.separator();

    ui.horizontal(|ui| {
        let tabs = [
            ProductFormTab::Basic,
            ProductFormTab::Details,
            ProductFormTab::ProsCons,
            ProductFormTab::Affiliate,
            ProductFormTab::Import,
        ];
        for tab in tabs {
            if !config.is_tab_visible(tab.key(), is_editing) {
                continue;
            }
            let mut label = egui::RichText::new(tab.label());
            if !config.is_tab_editable(tab.key(), is_editing) {
                label = label.weak();
            }
            if ui.selectable_label(editor.tab == tab, label).clicked() {
                editor.tab = tab;
            }
        }
    });
    ui.separator();

    egui::SidePanel::right("product_editor_actions")
        .resizable(false)
        .show_inside(ui, |ui| {
            ui.add_space(4.0);
            ui.label("Status:");
            egui::ComboBox::from_id_salt("product_form_status")
                .selected_text(match editor.form.status {
                    ContentStatus::Draft => "Draft",
                    ContentStatus::Published => "Published",
                })
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut editor.form.status, ContentStatus::Draft, "Draft");
                    ui.selectable_value(
                        &mut editor.form.status,
                        ContentStatus::Published,
                        "Published",
                    );
                });
            ui.add_space(4.0);
            let can_save = !editor.saving;
            if ui
                .add_enabled(can_save, egui::Button::new("Save"))
                .clicked()
            {
                action = Some(SaveAction::Save);
            }
            if editor.form.status == ContentStatus::Draft
                && ui
                    .add_enabled(can_save, egui::Button::new("Save & Publish"))
                    .clicked()
            {
                action = Some(SaveAction::SaveAndPublish);
            }
            if ui.button("Cancel").clicked() {
                close_editor = true;
            }
            if editor.saving {
                ui.add_space(4.0);
                ui.spinner();
            }
        });

    egui::ScrollArea::vertical().show(ui, |ui| match editor.tab {
        ProductFormTab::Basic => {
            basic_tab(ui, editor, cache, config, is_editing);
        }
        ProductFormTab::Details => {
            let enabled = config.is_tab_editable(ProductFormTab::Details.key(), is_editing);
            details_tab(ui, &mut editor.form, enabled);
        }
        ProductFormTab::ProsCons => {
            let enabled = config.is_tab_editable(ProductFormTab::ProsCons.key(), is_editing);
            pros_cons_tab(ui, &mut editor.form, enabled);
        }
        ProductFormTab::Affiliate => {
            let enabled = config.is_tab_editable(ProductFormTab::Affiliate.key(), is_editing);
            ui.label("Affiliate link:");
            ui.add_enabled(
                enabled,
                egui::TextEdit::singleline(&mut editor.form.affiliate_link)
                    .hint_text("https://…")
                    .desired_width(400.0),
            );
        }
        ProductFormTab::Import => {
            show_import_tab(ui, editor, feedback_writer);
        }
    });

    if let Some(action) = action {
        if !editor.form.validate() {
            feedback_writer.write(StatusFeedback {
                message: "Please fix the highlighted fields before saving".to_string(),
                is_error: true,
            });
            editor.tab = ProductFormTab::Basic;
        } else if let Some(id) = editor.product_id.clone() {
            let force_status = match action {
                SaveAction::Save => None,
                SaveAction::SaveAndPublish => Some(ContentStatus::Published),
            };
            let patch = build_update_payload(&editor.form, force_status);
            if patch.is_empty() {
                feedback_writer.write(StatusFeedback {
                    message: "No changes to save".to_string(),
                    is_error: false,
                });
            } else {
                editor.saving = true;
                update_writer.write(RequestUpdateProduct { id, patch });
            }
        } else {
            let status = match action {
                SaveAction::Save => editor.form.status,
                SaveAction::SaveAndPublish => ContentStatus::Published,
            };
            editor.saving = true;
            create_writer.write(RequestCreateProduct {
                payload: build_create_payload(&editor.form, status),
            });
        }
    }

    if close_editor {
        state.product_editor = None;
    }
}

fn basic_tab(
    ui: &mut egui::Ui,
    editor: &mut crate::ui::state::ProductEditor,
    cache: &QueryCache,
    config: &EditableFieldsConfig,
    is_editing: bool,
) {
    let form = &mut editor.form;

    ui.label("Name:");
    let mut name = form.name.clone();
    if ui
        .add_enabled(
            config.is_field_editable("name", is_editing),
            egui::TextEdit::singleline(&mut name).desired_width(400.0),
        )
        .changed()
    {
        form.set_name(name, is_editing);
    }
    field_error(ui, &form.errors, "name");

    ui.label("Slug:");
    ui.add_enabled(
        !is_editing,
        egui::TextEdit::singleline(&mut form.slug).desired_width(400.0),
    );
    field_error(ui, &form.errors, "slug");

    ui.label("Subtitle:");
    ui.add_enabled(
        config.is_field_editable("subtitle", is_editing),
        egui::TextEdit::singleline(&mut form.subtitle).desired_width(400.0),
    );

    ui.label("Category:");
    category_combo(
        ui,
        cache,
        &mut form.category_id,
        config.is_field_editable("categoryId", is_editing),
    );

    ui.label("Brand:");
    brand_combo(
        ui,
        cache,
        &mut form.brand_id,
        config.is_field_editable("brandId", is_editing),
    );

    ui.label("Image URL:");
    ui.add_enabled(
        config.is_field_editable("image", is_editing),
        egui::TextEdit::singleline(&mut form.image)
            .hint_text("https://…")
            .desired_width(400.0),
    );
}

fn details_tab(ui: &mut egui::Ui, form: &mut ProductFormState, enabled: bool) {
    ui.horizontal(|ui| {
        ui.label("Overall score:");
        ui.add_enabled(
            enabled,
            egui::DragValue::new(&mut form.overall_score)
                .range(0.0..=5.0)
                .speed(0.1),
        );
        ui.add_enabled(
            enabled,
            egui::Checkbox::new(&mut form.is_recommended, "Recommended"),
        );
    });
    field_error(ui, &form.errors, "overall_score");

    ui.horizontal(|ui| {
        ui.label("Price:");
        ui.add_enabled(enabled, egui::DragValue::new(&mut form.price).speed(1.0));
        ui.label("Currency:");
        ui.add_enabled(
            enabled,
            egui::TextEdit::singleline(&mut form.currency).desired_width(60.0),
        );
        ui.label("Label:");
        ui.add_enabled(
            enabled,
            egui::TextEdit::singleline(&mut form.price_label).desired_width(160.0),
        );
    });

    ui.horizontal(|ui| {
        ui.label("Last updated:");
        ui.add_enabled(
            enabled,
            egui::TextEdit::singleline(&mut form.last_updated)
                .hint_text("YYYY-MM-DD")
                .desired_width(100.0),
        );
    });
    ui.separator();

    ui.label(egui::RichText::new("Ratings").strong());
    let mut remove_rating: Option<usize> = None;
    for (index, rating) in form.ratings.iter_mut().enumerate() {
        ui.horizontal(|ui| {
            ui.add_enabled(
                enabled,
                egui::TextEdit::singleline(&mut rating.sub_category)
                    .hint_text("Sub-category")
                    .desired_width(200.0),
            );
            ui.add_enabled(
                enabled,
                egui::DragValue::new(&mut rating.score)
                    .range(0.0..=5.0)
                    .speed(0.1),
            );
            if ui
                .add_enabled(enabled, egui::Button::new("✖").small())
                .clicked()
            {
                remove_rating = Some(index);
            }
        });
    }
    if let Some(index) = remove_rating {
        form.remove_rating(index);
    }
    if ui
        .add_enabled(enabled, egui::Button::new("+ Add rating").small())
        .clicked()
    {
        form.add_rating();
    }
    ui.separator();

    ui.label(egui::RichText::new("Quick verdict").strong());
    ui.label("Quote:");
    ui.add_enabled(
        enabled,
        egui::TextEdit::singleline(&mut form.quick_verdict_quote).desired_width(400.0),
    );
    ui.label("Description:");
    ui.add_enabled(
        enabled,
        egui::TextEdit::multiline(&mut form.quick_verdict_description)
            .desired_rows(3)
            .desired_width(400.0),
    );
    string_list_editor(ui, form, ListField::QuickVerdictTags, enabled);
    ui.separator();

    ui.label(egui::RichText::new("Deal pricing").strong());
    ui.horizontal(|ui| {
        ui.label("Price:");
        ui.add_enabled(
            enabled,
            egui::DragValue::new(&mut form.pricing_price).speed(1.0),
        );
        ui.label("Currency:");
        ui.add_enabled(
            enabled,
            egui::TextEdit::singleline(&mut form.pricing_currency).desired_width(60.0),
        );
        ui.label("Label:");
        ui.add_enabled(
            enabled,
            egui::TextEdit::singleline(&mut form.pricing_label).desired_width(160.0),
        );
    });
}

fn pros_cons_tab(ui: &mut egui::Ui, form: &mut ProductFormState, enabled: bool) {
    for field in [
        ListField::KeyHighlights,
        ListField::Weaknesses,
        ListField::BeforePurchasePoints,
        ListField::AfterUsagePoints,
        ListField::Pros,
        ListField::Cons,
    ] {
        string_list_editor(ui, form, field, enabled);
    }
    ui.separator();
    ui.label(egui::RichText::new("Final verdict").strong());
    string_list_editor(ui, form, ListField::BuyIfPoints, enabled);
    string_list_editor(ui, form, ListField::SkipIfPoints, enabled);
}

fn category_combo(ui: &mut egui::Ui, cache: &QueryCache, selected_id: &mut String, enabled: bool) {
    let selected = cache
        .categories()
        .and_then(|cats| {
            cats.iter()
                .find(|c| c.id == *selected_id)
                .map(|c| c.display_name().to_string())
        })
        .unwrap_or_else(|| "None".to_string());
    ui.add_enabled_ui(enabled, |ui| {
        egui::ComboBox::from_id_salt("product_form_category")
            .selected_text(selected)
            .show_ui(ui, |ui| {
                if ui.selectable_label(selected_id.is_empty(), "None").clicked() {
                    selected_id.clear();
                }
                if let Some(categories) = cache.categories() {
                    for category in categories {
                        if ui
                            .selectable_label(*selected_id == category.id, category.display_name())
                            .clicked()
                        {
                            *selected_id = category.id.clone();
                        }
                    }
                }
            });
    });
}

fn brand_combo(ui: &mut egui::Ui, cache: &QueryCache, selected_id: &mut String, enabled: bool) {
    let selected = cache
        .brands()
        .and_then(|page| {
            page.items
                .iter()
                .find(|b| b.id == *selected_id)
                .map(|b| b.name.clone())
        })
        .unwrap_or_else(|| "None".to_string());
    ui.add_enabled_ui(enabled, |ui| {
        egui::ComboBox::from_id_salt("product_form_brand")
            .selected_text(selected)
            .show_ui(ui, |ui| {
                if ui.selectable_label(selected_id.is_empty(), "None").clicked() {
                    selected_id.clear();
                }
                if let Some(page) = cache.brands() {
                    for brand in &page.items {
                        if ui
                            .selectable_label(*selected_id == brand.id, &brand.name)
                            .clicked()
                        {
                            *selected_id = brand.id.clone();
                        }
                    }
                }
            });
    });
}
