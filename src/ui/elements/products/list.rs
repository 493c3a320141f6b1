// src/ui/elements/products/list.rs
// Product table with client-side search/status/category/brand filtering and
// pagination over the cached list.

use bevy::prelude::EventWriter;
use bevy_egui::egui;
use egui_extras::{Column, TableBuilder};

use crate::api::types::{ContentStatus, ProductDetail};
use crate::catalog::events::RequestFetch;
use crate::catalog::resources::{QueryCache, QueryKey};
use crate::ui::common::{pagination_bar, status_badge};
use crate::ui::state::{AdminWindowState, DeleteTarget, ProductEditor, LIST_PAGE_SIZE};
use crate::ui::systems::ensure_fetched;

pub fn show_product_list(
    ui: &mut egui::Ui,
    state: &mut AdminWindowState,
    cache: &QueryCache,
    fetch_writer: &mut EventWriter<RequestFetch>,
    site_base: &str,
) {
    ensure_fetched(cache, fetch_writer, QueryKey::Products);
    ensure_fetched(cache, fetch_writer, QueryKey::Categories);
    ensure_fetched(cache, fetch_writer, QueryKey::Brands);

    ui.horizontal(|ui| {
        ui.label("Search:");
        if ui
            .add(
                egui::TextEdit::singleline(&mut state.product_search)
                    .hint_text("name or slug")
                    .desired_width(180.0),
            )
            .changed()
        {
            state.product_page = 0;
        }

        let status_label = match state.product_status_filter {
            None => "All statuses",
            Some(ContentStatus::Draft) => "Draft",
            Some(ContentStatus::Published) => "Published",
        };
        egui::ComboBox::from_id_salt("product_status_filter")
            .selected_text(status_label)
            .show_ui(ui, |ui| {
                for (label, value) in [
                    ("All statuses", None),
                    ("Draft", Some(ContentStatus::Draft)),
                    ("Published", Some(ContentStatus::Published)),
                ] {
                    if ui
                        .selectable_value(&mut state.product_status_filter, value, label)
                        .clicked()
                    {
                        state.product_page = 0;
                    }
                }
            });

        category_filter_combo(ui, state, cache);
        brand_filter_combo(ui, state, cache);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("+ New Product").clicked() {
                state.product_editor = Some(ProductEditor::default());
            }
        });
    });
    ui.separator();

    let Some(page) = cache.products() else {
        ui.label("Loading products…");
        return;
    };

    let filtered: Vec<&ProductDetail> = page
        .items
        .iter()
        .filter(|p| matches_filters(p, state))
        .collect();

    let start = state.product_page * LIST_PAGE_SIZE;
    if start >= filtered.len() && state.product_page > 0 {
        state.product_page = 0;
    }
    let start = state.product_page * LIST_PAGE_SIZE;
    let visible = &filtered[start..filtered.len().min(start + LIST_PAGE_SIZE)];

    ui.label(format!(
        "{} of {} products",
        filtered.len(),
        page.items.len()
    ));

    let row_height = ui.text_style_height(&egui::TextStyle::Body) + 8.0;
    let mut open_editor: Option<String> = None;
    let mut delete_target: Option<DeleteTarget> = None;

    TableBuilder::new(ui)
        .id_salt("product_list")
        .striped(true)
        .column(Column::remainder().at_least(160.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(170.0))
        .header(row_height, |mut header| {
            for title in ["Name", "Category", "Brand", "Score", "Status", "Actions"] {
                header.col(|ui| {
                    ui.label(egui::RichText::new(title).strong());
                });
            }
        })
        .body(|mut body| {
            for product in visible {
                body.row(row_height, |mut row| {
                    row.col(|ui| {
                        ui.label(&product.name);
                    });
                    row.col(|ui| {
                        let name = product
                            .category
                            .as_ref()
                            .map(|c| c.display_name().to_string())
                            .unwrap_or_else(|| "—".to_string());
                        ui.label(name);
                    });
                    row.col(|ui| {
                        ui.label(
                            product
                                .brand
                                .as_ref()
                                .map(|b| b.name.as_str())
                                .unwrap_or("—"),
                        );
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.1}", product.overall_score));
                    });
                    row.col(|ui| {
                        status_badge(ui, product.status);
                    });
                    row.col(|ui| {
                        ui.horizontal(|ui| {
                            if ui.small_button("Edit").clicked() {
                                open_editor = Some(product.id.clone());
                            }
                            if product.status == ContentStatus::Published
                                && ui
                                    .small_button("View")
                                    .on_hover_text("Open the public page")
                                    .clicked()
                            {
                                let url = format!("{site_base}/products/{}", product.slug);
                                if let Err(e) = open::that(&url) {
                                    bevy::log::warn!("Failed to open '{}': {}", url, e);
                                }
                            }
                            if ui.small_button("Delete").clicked() {
                                delete_target = Some(DeleteTarget::Product {
                                    id: product.id.clone(),
                                    name: product.name.clone(),
                                });
                            }
                        });
                    });
                });
            }
        });

    if let Some(new_page) = pagination_bar(ui, state.product_page, filtered.len(), LIST_PAGE_SIZE) {
        state.product_page = new_page;
    }

    if let Some(id) = open_editor {
        state.product_editor = Some(ProductEditor {
            product_id: Some(id),
            ..Default::default()
        });
    }
    if delete_target.is_some() {
        state.delete_target = delete_target;
    }
}

fn matches_filters(product: &ProductDetail, state: &AdminWindowState) -> bool {
    let search = state.product_search.trim().to_lowercase();
    if !search.is_empty()
        && !product.name.to_lowercase().contains(&search)
        && !product.slug.to_lowercase().contains(&search)
    {
        return false;
    }
    if let Some(status) = state.product_status_filter {
        if product.status != status {
            return false;
        }
    }
    if !state.product_category_filter.is_empty()
        && product.category_id.as_deref() != Some(state.product_category_filter.as_str())
    {
        return false;
    }
    if !state.product_brand_filter.is_empty()
        && product.brand_id.as_deref() != Some(state.product_brand_filter.as_str())
    {
        return false;
    }
    true
}

fn category_filter_combo(ui: &mut egui::Ui, state: &mut AdminWindowState, cache: &QueryCache) {
    let selected = cache
        .categories()
        .and_then(|cats| {
            cats.iter()
                .find(|c| c.id == state.product_category_filter)
                .map(|c| c.display_name().to_string())
        })
        .unwrap_or_else(|| "All categories".to_string());
    egui::ComboBox::from_id_salt("product_category_filter")
        .selected_text(selected)
        .show_ui(ui, |ui| {
            if ui
                .selectable_label(state.product_category_filter.is_empty(), "All categories")
                .clicked()
            {
                state.product_category_filter.clear();
                state.product_page = 0;
            }
            if let Some(categories) = cache.categories() {
                for category in categories {
                    if ui
                        .selectable_label(
                            state.product_category_filter == category.id,
                            category.display_name(),
                        )
                        .clicked()
                    {
                        state.product_category_filter = category.id.clone();
                        state.product_page = 0;
                    }
                }
            }
        });
}

fn brand_filter_combo(ui: &mut egui::Ui, state: &mut AdminWindowState, cache: &QueryCache) {
    let selected = cache
        .brands()
        .and_then(|page| {
            page.items
                .iter()
                .find(|b| b.id == state.product_brand_filter)
                .map(|b| b.name.clone())
        })
        .unwrap_or_else(|| "All brands".to_string());
    egui::ComboBox::from_id_salt("product_brand_filter")
        .selected_text(selected)
        .show_ui(ui, |ui| {
            if ui
                .selectable_label(state.product_brand_filter.is_empty(), "All brands")
                .clicked()
            {
                state.product_brand_filter.clear();
                state.product_page = 0;
            }
            if let Some(page) = cache.brands() {
                for brand in &page.items {
                    if ui
                        .selectable_label(state.product_brand_filter == brand.id, &brand.name)
                        .clicked()
                    {
                        state.product_brand_filter = brand.id.clone();
                        state.product_page = 0;
                    }
                }
            }
        });
}
