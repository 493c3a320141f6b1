// src/ui/elements/collections/list.rs

use bevy::prelude::EventWriter;
use bevy_egui::egui;
use egui_extras::{Column, TableBuilder};

use crate::catalog::events::RequestFetch;
use crate::catalog::resources::{QueryCache, QueryKey};
use crate::ui::common::collection_status_badge;
use crate::ui::state::{AdminWindowState, CollectionEditor, DeleteTarget};
use crate::ui::systems::ensure_fetched;

pub fn show_collection_list(
    ui: &mut egui::Ui,
    state: &mut AdminWindowState,
    cache: &QueryCache,
    fetch_writer: &mut EventWriter<RequestFetch>,
) {
    ensure_fetched(cache, fetch_writer, QueryKey::Collections);

    ui.horizontal(|ui| {
        ui.heading("Collections");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("+ New Collection").clicked() {
                state.collection_editor = Some(CollectionEditor::default());
            }
        });
    });
    ui.separator();

    let Some(collections) = cache.collections() else {
        ui.label("Loading collections…");
        return;
    };

    let mut edit_target: Option<String> = None;
    let mut delete_target: Option<DeleteTarget> = None;

    let row_height = ui.text_style_height(&egui::TextStyle::Body) + 8.0;
    TableBuilder::new(ui)
        .id_salt("collection_list")
        .striped(true)
        .column(Column::remainder().at_least(180.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(110.0))
        .header(row_height, |mut header| {
            for title in ["Title", "Type", "Category", "Status", "Actions"] {
                header.col(|ui| {
                    ui.label(egui::RichText::new(title).strong());
                });
            }
        })
        .body(|mut body| {
            for collection in collections {
                body.row(row_height, |mut row| {
                    row.col(|ui| {
                        ui.label(&collection.title_th);
                    });
                    row.col(|ui| {
                        ui.label(collection.kind.label());
                    });
                    row.col(|ui| {
                        let name = collection
                            .category
                            .as_ref()
                            .and_then(|c| c.name_en.as_deref().or(c.name_th.as_deref()))
                            .unwrap_or("—");
                        ui.label(name);
                    });
                    row.col(|ui| {
                        collection_status_badge(ui, collection.status);
                    });
                    row.col(|ui| {
                        ui.horizontal(|ui| {
                            if ui.small_button("Edit").clicked() {
                                edit_target = Some(collection.id.clone());
                            }
                            if ui.small_button("Delete").clicked() {
                                delete_target = Some(DeleteTarget::Collection {
                                    id: collection.id.clone(),
                                    title: collection.title_th.clone(),
                                });
                            }
                        });
                    });
                });
            }
        });

    if let Some(id) = edit_target {
        state.collection_editor = Some(CollectionEditor {
            collection_id: Some(id),
            ..Default::default()
        });
    }
    if delete_target.is_some() {
        state.delete_target = delete_target;
    }
}
