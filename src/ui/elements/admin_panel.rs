// src/ui/elements/admin_panel.rs
// The one egui system: draws popups, the navigation strip, and whichever
// screen (or editor) is active. All mutations leave through event writers;
// nothing here touches the network.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::catalog::events::{
    RequestAddCollectionItem, RequestCreateCollection, RequestCreateProduct, RequestDeleteBrand,
    RequestDeleteCategory, RequestDeleteCollection, RequestDeleteProduct, RequestFetch,
    RequestRemoveCollectionItem, RequestSaveBrand, RequestSaveCategory, RequestUpdateCollection,
    RequestUpdateCollectionItem, RequestUpdateProduct, StatusFeedback,
};
use crate::catalog::resources::{
    ApiSession, EditableFieldsConfig, ProductListFilters, QueryCache, QueryKey,
};
use crate::ui::state::{AdminWindowState, Screen};
use crate::ui::UiFeedbackState;

use super::brands::{show_brand_list, show_brand_popup};
use super::categories::{show_category_list, show_category_popup};
use super::collections::{show_collection_editor, show_collection_list};
use super::dashboard::show_dashboard;
use super::popups::{show_delete_confirm_popup, show_settings_popup, DeleteWriters};
use super::products::{show_product_editor, show_product_list};
use super::top_panel::show_top_panel;

#[derive(SystemParam)]
pub struct ProductWriters<'w> {
    pub fetch: EventWriter<'w, RequestFetch>,
    pub create: EventWriter<'w, RequestCreateProduct>,
    pub update: EventWriter<'w, RequestUpdateProduct>,
    pub delete: EventWriter<'w, RequestDeleteProduct>,
    pub feedback: EventWriter<'w, StatusFeedback>,
}

#[derive(SystemParam)]
pub struct TaxonomyWriters<'w> {
    pub save_category: EventWriter<'w, RequestSaveCategory>,
    pub delete_category: EventWriter<'w, RequestDeleteCategory>,
    pub save_brand: EventWriter<'w, RequestSaveBrand>,
    pub delete_brand: EventWriter<'w, RequestDeleteBrand>,
}

#[derive(SystemParam)]
pub struct CollectionWriters<'w> {
    pub create: EventWriter<'w, RequestCreateCollection>,
    pub update: EventWriter<'w, RequestUpdateCollection>,
    pub delete: EventWriter<'w, RequestDeleteCollection>,
    pub add_item: EventWriter<'w, RequestAddCollectionItem>,
    pub update_item: EventWriter<'w, RequestUpdateCollectionItem>,
    pub remove_item: EventWriter<'w, RequestRemoveCollectionItem>,
}

#[allow(clippy::too_many_arguments)]
pub fn admin_panel_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<AdminWindowState>,
    cache: Res<QueryCache>,
    config: Res<EditableFieldsConfig>,
    mut session: ResMut<ApiSession>,
    mut list_filters: ResMut<ProductListFilters>,
    ui_feedback: Res<UiFeedbackState>,
    mut product_writers: ProductWriters,
    mut taxonomy_writers: TaxonomyWriters,
    mut collection_writers: CollectionWriters,
) {
    let ctx = contexts.ctx_mut();

    show_settings_popup(ctx, &mut state, &mut session);
    show_category_popup(ctx, &mut state, &mut taxonomy_writers.save_category);
    show_brand_popup(ctx, &mut state, &mut taxonomy_writers.save_brand);
    {
        let mut delete_writers = DeleteWriters {
            product: &mut product_writers.delete,
            category: &mut taxonomy_writers.delete_category,
            brand: &mut taxonomy_writers.delete_brand,
            collection: &mut collection_writers.delete,
            collection_item: &mut collection_writers.remove_item,
        };
        show_delete_confirm_popup(ctx, &mut state, &mut delete_writers);
    }

    // The public site lives one level above the API mount.
    let site_base = session.base_url.trim_end_matches("/api/v1").to_string();

    egui::CentralPanel::default().show(ctx, |ui| {
        if show_top_panel(ui, &mut state, &ui_feedback) {
            refresh_screen(&state, &mut list_filters, &mut product_writers.fetch);
        }

        match state.screen {
            Screen::Dashboard => {
                show_dashboard(ui, &mut state, &cache, &mut product_writers.fetch);
            }
            Screen::Products => {
                if state.product_editor.is_some() {
                    show_product_editor(
                        ui,
                        &mut state,
                        &cache,
                        &config,
                        &mut product_writers.fetch,
                        &mut product_writers.create,
                        &mut product_writers.update,
                        &mut product_writers.feedback,
                    );
                } else {
                    show_product_list(
                        ui,
                        &mut state,
                        &cache,
                        &mut product_writers.fetch,
                        &site_base,
                    );
                }
            }
            Screen::Categories => {
                show_category_list(ui, &mut state, &cache, &mut product_writers.fetch);
            }
            Screen::Brands => {
                show_brand_list(ui, &mut state, &cache, &mut product_writers.fetch);
            }
            Screen::Collections => {
                if state.collection_editor.is_some() {
                    show_collection_editor(
                        ui,
                        &mut state,
                        &cache,
                        &mut product_writers.fetch,
                        &mut collection_writers.create,
                        &mut collection_writers.update,
                        &mut collection_writers.add_item,
                        &mut collection_writers.update_item,
                    );
                } else {
                    show_collection_list(ui, &mut state, &cache, &mut product_writers.fetch);
                }
            }
        }
    });
}

/// Explicit refetch of whatever the active screen is showing. The dispatcher
/// refetches requested keys whether or not they are cached. A product-list
/// refetch also carries the screen's current filters server-side.
fn refresh_screen(
    state: &AdminWindowState,
    list_filters: &mut ProductListFilters,
    fetch: &mut EventWriter<RequestFetch>,
) {
    match state.screen {
        Screen::Dashboard => {
            let (from, to) = state.report_range();
            fetch.write(RequestFetch(QueryKey::ReportsOverview {
                from: from.clone(),
                to: to.clone(),
            }));
            fetch.write(RequestFetch(QueryKey::ReportsTopProducts {
                from: from.clone(),
                to: to.clone(),
            }));
            fetch.write(RequestFetch(QueryKey::ReportsTopPages { from, to }));
        }
        Screen::Products => {
            list_filters.0 = state.product_list_params();
            fetch.write(RequestFetch(QueryKey::Products));
            if let Some(id) = state
                .product_editor
                .as_ref()
                .and_then(|e| e.product_id.clone())
            {
                fetch.write(RequestFetch(QueryKey::Product(id)));
            }
        }
        Screen::Categories => {
            fetch.write(RequestFetch(QueryKey::Categories));
        }
        Screen::Brands => {
            fetch.write(RequestFetch(QueryKey::Brands));
        }
        Screen::Collections => {
            fetch.write(RequestFetch(QueryKey::Collections));
            if let Some(id) = state
                .collection_editor
                .as_ref()
                .and_then(|e| e.collection_id.clone())
            {
                fetch.write(RequestFetch(QueryKey::Collection(id)));
            }
        }
    }
}
