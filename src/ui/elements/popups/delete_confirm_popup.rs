// src/ui/elements/popups/delete_confirm_popup.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::catalog::events::{
    RequestDeleteBrand, RequestDeleteCategory, RequestDeleteCollection, RequestDeleteProduct,
    RequestRemoveCollectionItem,
};
use crate::ui::state::{AdminWindowState, DeleteTarget};

pub struct DeleteWriters<'a, 'w1, 'w2, 'w3, 'w4, 'w5> {
    pub product: &'a mut EventWriter<'w1, RequestDeleteProduct>,
    pub category: &'a mut EventWriter<'w2, RequestDeleteCategory>,
    pub brand: &'a mut EventWriter<'w3, RequestDeleteBrand>,
    pub collection: &'a mut EventWriter<'w4, RequestDeleteCollection>,
    pub collection_item: &'a mut EventWriter<'w5, RequestRemoveCollectionItem>,
}

pub fn show_delete_confirm_popup(
    ctx: &egui::Context,
    state: &mut AdminWindowState,
    writers: &mut DeleteWriters,
) {
    let Some(target) = state.delete_target.clone() else {
        return;
    };

    let mut popup_open = true;
    let mut delete_clicked = false;
    let mut cancel_clicked = false;

    egui::Window::new("Confirm Delete")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut popup_open)
        .show(ctx, |ui| {
            ui.label(format!("Permanently delete {}?", target.describe()));
            ui.colored_label(egui::Color32::YELLOW, "This action cannot be undone.");
            ui.separator();
            ui.horizontal(|ui| {
                if ui
                    .add(egui::Button::new("DELETE").fill(egui::Color32::DARK_RED))
                    .clicked()
                {
                    delete_clicked = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel_clicked = true;
                }
            });
        });

    if delete_clicked {
        match target {
            DeleteTarget::Product { id, name } => {
                writers.product.write(RequestDeleteProduct { id, name });
            }
            DeleteTarget::Category { id, name } => {
                writers.category.write(RequestDeleteCategory { id, name });
            }
            DeleteTarget::Brand { id, name } => {
                writers.brand.write(RequestDeleteBrand { id, name });
            }
            DeleteTarget::Collection { id, title } => {
                writers
                    .collection
                    .write(RequestDeleteCollection { id, title });
            }
            DeleteTarget::CollectionItem {
                collection_id,
                item_id,
                ..
            } => {
                writers.collection_item.write(RequestRemoveCollectionItem {
                    collection_id,
                    item_id,
                });
            }
        }
        state.delete_target = None;
    } else if cancel_clicked || !popup_open {
        state.delete_target = None;
    }
}
