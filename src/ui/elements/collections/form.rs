// src/ui/elements/collections/form.rs
// Collection metadata editor plus the ranked items list: add a product at
// the bottom, move rows up/down (orderIndex is rewritten contiguously),
// edit deal-pricing overrides in a small popup, remove via confirm.

use bevy::prelude::EventWriter;
use bevy_egui::egui;
use egui_extras::{Column, TableBuilder};

use crate::api::types::{
    CollectionItemPatch, CollectionStatus, CollectionType, CreateCollectionItemPayload,
};
use crate::catalog::events::{
    RequestAddCollectionItem, RequestCreateCollection, RequestFetch, RequestUpdateCollection,
    RequestUpdateCollectionItem,
};
use crate::catalog::form::collection::reorder_patches;
use crate::catalog::resources::{QueryCache, QueryKey};
use crate::ui::state::{AdminWindowState, DealEdit, DeleteTarget};
use crate::ui::systems::ensure_fetched;

#[allow(clippy::too_many_arguments)]
pub fn show_collection_editor(
    ui: &mut egui::Ui,
    state: &mut AdminWindowState,
    cache: &QueryCache,
    fetch_writer: &mut EventWriter<RequestFetch>,
    create_writer: &mut EventWriter<RequestCreateCollection>,
    update_writer: &mut EventWriter<RequestUpdateCollection>,
    add_item_writer: &mut EventWriter<RequestAddCollectionItem>,
    update_item_writer: &mut EventWriter<RequestUpdateCollectionItem>,
) {
    let Some(editor) = state.collection_editor.as_mut() else {
        return;
    };
    let is_editing = editor.is_editing();

    ensure_fetched(cache, fetch_writer, QueryKey::Categories);
    if let Some(id) = editor.collection_id.clone() {
        ensure_fetched(cache, fetch_writer, QueryKey::Collection(id.clone()));
        if !editor.loaded {
            if let Some(collection) = cache.collection(&id) {
                editor.form = crate::catalog::form::CollectionFormState::from_collection(collection);
                editor.loaded = true;
            } else {
                ui.label("Loading collection…");
                return;
            }
        }
    }

    let mut close_editor = false;
    let mut delete_target: Option<DeleteTarget> = None;

    ui.horizontal(|ui| {
        if ui.button("← Back").clicked() {
            close_editor = true;
        }
        ui.heading(if is_editing {
            "Edit Collection"
        } else {
            "New Collection"
        });
    });
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        let form = &mut editor.form;
        ui.horizontal(|ui| {
            ui.label("Type:");
            egui::ComboBox::from_id_salt("collection_type")
                .selected_text(form.kind.label())
                .show_ui(ui, |ui| {
                    for kind in CollectionType::ALL {
                        ui.selectable_value(&mut form.kind, kind, kind.label());
                    }
                });
            ui.label("Status:");
            egui::ComboBox::from_id_salt("collection_status")
                .selected_text(form.status.as_str())
                .show_ui(ui, |ui| {
                    for status in [
                        CollectionStatus::Draft,
                        CollectionStatus::Published,
                        CollectionStatus::Archived,
                    ] {
                        ui.selectable_value(&mut form.status, status, status.as_str());
                    }
                });
        });

        ui.label("Title (TH):");
        let mut title_th = form.title_th.clone();
        if ui
            .add(egui::TextEdit::singleline(&mut title_th).desired_width(400.0))
            .changed()
        {
            form.set_title_th(title_th, is_editing);
        }
        if let Some(error) = form.errors.get("title_th") {
            ui.colored_label(egui::Color32::LIGHT_RED, error);
        }

        ui.label("Slug:");
        ui.add_enabled(
            !is_editing,
            egui::TextEdit::singleline(&mut form.slug).desired_width(400.0),
        );
        if let Some(error) = form.errors.get("slug") {
            ui.colored_label(egui::Color32::LIGHT_RED, error);
        }

        ui.label("Title (EN):");
        ui.add(egui::TextEdit::singleline(&mut form.title_en).desired_width(400.0));
        ui.label("Excerpt:");
        ui.add(
            egui::TextEdit::multiline(&mut form.excerpt)
                .desired_rows(2)
                .desired_width(400.0),
        );
        ui.label("Cover image URL:");
        ui.add(egui::TextEdit::singleline(&mut form.cover_image).desired_width(400.0));

        ui.label("Category:");
        category_combo(ui, cache, &mut form.category_id);

        ui.horizontal(|ui| {
            if ui.button(if is_editing { "Save" } else { "Create" }).clicked()
                && form.validate()
            {
                match editor.collection_id.clone() {
                    Some(id) => {
                        update_writer.write(RequestUpdateCollection {
                            id,
                            payload: form.to_update_payload(),
                        });
                    }
                    None => {
                        create_writer.write(RequestCreateCollection {
                            payload: form.to_create_payload(),
                        });
                    }
                }
            }
        });

        if let Some(id) = editor.collection_id.clone() {
            ui.separator();
            items_section(
                ui,
                editor,
                cache,
                &id,
                fetch_writer,
                add_item_writer,
                update_item_writer,
                &mut delete_target,
            );
        } else {
            ui.separator();
            ui.label("Save the collection first, then add products to it.");
        }
    });

    show_deal_popup(ui.ctx(), editor, update_item_writer);

    if delete_target.is_some() {
        state.delete_target = delete_target;
    }
    if close_editor {
        state.collection_editor = None;
    }
}

#[allow(clippy::too_many_arguments)]
fn items_section(
    ui: &mut egui::Ui,
    editor: &mut crate::ui::state::CollectionEditor,
    cache: &QueryCache,
    collection_id: &str,
    fetch_writer: &mut EventWriter<RequestFetch>,
    add_item_writer: &mut EventWriter<RequestAddCollectionItem>,
    update_item_writer: &mut EventWriter<RequestUpdateCollectionItem>,
    delete_target: &mut Option<DeleteTarget>,
) {
    ui.label(egui::RichText::new("Ranked products").strong());

    let Some(collection) = cache.collection(collection_id) else {
        ui.label("Loading items…");
        return;
    };
    let mut items = collection.items.clone().unwrap_or_default();
    items.sort_by_key(|item| item.order_index);

    let row_height = ui.text_style_height(&egui::TextStyle::Body) + 8.0;
    let mut move_request: Option<(usize, bool)> = None;
    let mut deal_request: Option<DealEdit> = None;

    TableBuilder::new(ui)
        .id_salt("collection_items")
        .striped(true)
        .column(Column::auto().at_least(40.0))
        .column(Column::remainder().at_least(160.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(180.0))
        .header(row_height, |mut header| {
            for title in ["#", "Product", "Deal", "Actions"] {
                header.col(|ui| {
                    ui.label(egui::RichText::new(title).strong());
                });
            }
        })
        .body(|mut body| {
            for (index, item) in items.iter().enumerate() {
                body.row(row_height, |mut row| {
                    row.col(|ui| {
                        ui.label((index + 1).to_string());
                    });
                    let product_name = item
                        .product
                        .as_ref()
                        .map(|p| p.name.clone())
                        .unwrap_or_else(|| item.product_id.clone());
                    row.col(|ui| {
                        ui.label(&product_name);
                    });
                    row.col(|ui| {
                        match item.deal_price {
                            Some(price) => {
                                ui.label(format!("{} {}", price, item.currency));
                            }
                            None => {
                                ui.label("—");
                            }
                        };
                    });
                    row.col(|ui| {
                        ui.horizontal(|ui| {
                            if ui
                                .add_enabled(index > 0, egui::Button::new("▲").small())
                                .clicked()
                            {
                                move_request = Some((index, true));
                            }
                            if ui
                                .add_enabled(
                                    index + 1 < items.len(),
                                    egui::Button::new("▼").small(),
                                )
                                .clicked()
                            {
                                move_request = Some((index, false));
                            }
                            if ui.small_button("Deal").clicked() {
                                deal_request = Some(DealEdit {
                                    item_id: item.id.clone(),
                                    product_name: product_name.clone(),
                                    original_price: item
                                        .original_price
                                        .map(|p| p.to_string())
                                        .unwrap_or_default(),
                                    deal_price: item
                                        .deal_price
                                        .map(|p| p.to_string())
                                        .unwrap_or_default(),
                                    deal_badge: item.deal_badge.clone().unwrap_or_default(),
                                    deal_url: item.deal_url.clone().unwrap_or_default(),
                                    note: item.note.clone().unwrap_or_default(),
                                });
                            }
                            if ui.small_button("Remove").clicked() {
                                *delete_target = Some(DeleteTarget::CollectionItem {
                                    collection_id: collection_id.to_string(),
                                    item_id: item.id.clone(),
                                    name: product_name.clone(),
                                });
                            }
                        });
                    });
                });
            }
        });

    if let Some((index, up)) = move_request {
        for (item_id, patch) in reorder_patches(&items, index, up) {
            update_item_writer.write(RequestUpdateCollectionItem {
                collection_id: collection_id.to_string(),
                item_id,
                patch,
            });
        }
    }
    if deal_request.is_some() {
        editor.deal_edit = deal_request;
    }

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label("Add product:");
        ensure_fetched(cache, fetch_writer, QueryKey::Products);
        let selected = cache
            .products()
            .and_then(|page| {
                page.items
                    .iter()
                    .find(|p| p.id == editor.add_product_id)
                    .map(|p| p.name.clone())
            })
            .unwrap_or_else(|| "Select a product".to_string());
        egui::ComboBox::from_id_salt("collection_add_product")
            .selected_text(selected)
            .show_ui(ui, |ui| {
                if let Some(page) = cache.products() {
                    let member_ids: Vec<&str> =
                        items.iter().map(|i| i.product_id.as_str()).collect();
                    for product in &page.items {
                        if member_ids.contains(&product.id.as_str()) {
                            continue;
                        }
                        if ui
                            .selectable_label(editor.add_product_id == product.id, &product.name)
                            .clicked()
                        {
                            editor.add_product_id = product.id.clone();
                        }
                    }
                }
            });
        if ui
            .add_enabled(!editor.add_product_id.is_empty(), egui::Button::new("Add"))
            .clicked()
        {
            add_item_writer.write(RequestAddCollectionItem {
                payload: CreateCollectionItemPayload {
                    collection_id: collection_id.to_string(),
                    product_id: editor.add_product_id.clone(),
                    order_index: Some(items.len() as i64 + 1),
                    ..Default::default()
                },
            });
        }
    });
}

fn show_deal_popup(
    ctx: &egui::Context,
    editor: &mut crate::ui::state::CollectionEditor,
    update_item_writer: &mut EventWriter<RequestUpdateCollectionItem>,
) {
    let Some(deal) = editor.deal_edit.as_mut() else {
        return;
    };
    let Some(collection_id) = editor.collection_id.clone() else {
        return;
    };

    let mut popup_open = true;
    let mut save_clicked = false;
    let mut cancel_clicked = false;

    egui::Window::new(format!("Deal — {}", deal.product_name))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut popup_open)
        .show(ctx, |ui| {
            ui.label("Original price:");
            ui.text_edit_singleline(&mut deal.original_price);
            ui.label("Deal price:");
            ui.text_edit_singleline(&mut deal.deal_price);
            ui.label("Badge:");
            ui.text_edit_singleline(&mut deal.deal_badge);
            ui.label("Deal URL:");
            ui.text_edit_singleline(&mut deal.deal_url);
            ui.label("Note:");
            ui.text_edit_singleline(&mut deal.note);
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
        let non_blank = |s: &str| {
            let t = s.trim();
            if t.is_empty() {
                None
            } else {
                Some(t.to_string())
            }
        };
        update_item_writer.write(RequestUpdateCollectionItem {
            collection_id,
            item_id: deal.item_id.clone(),
            patch: CollectionItemPatch {
                original_price: deal.original_price.trim().parse().ok(),
                deal_price: deal.deal_price.trim().parse().ok(),
                deal_badge: non_blank(&deal.deal_badge),
                deal_url: non_blank(&deal.deal_url),
                note: non_blank(&deal.note),
                ..Default::default()
            },
        });
        // Closed by the mutation result handler on success.
    }
    if cancel_clicked || !popup_open {
        editor.deal_edit = None;
    }
}

fn category_combo(ui: &mut egui::Ui, cache: &QueryCache, selected_id: &mut String) {
    let selected = cache
        .categories()
        .and_then(|cats| {
            cats.iter()
                .find(|c| c.id == *selected_id)
                .map(|c| c.display_name().to_string())
        })
        .unwrap_or_else(|| "None".to_string());
    egui::ComboBox::from_id_salt("collection_category")
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
}
