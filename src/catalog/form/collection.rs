// src/catalog/form/collection.rs
// Collection form state plus the ranked-item reorder helper. Collections are
// small, so the update payload sends every editable field rather than
// diffing.

use std::collections::HashMap;

use super::state::generate_slug;
use crate::api::types::{
    Collection, CollectionItemPatch, CollectionItemRecord, CollectionStatus, CollectionType,
    CreateCollectionPayload, UpdateCollectionPayload,
};

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionFormState {
    pub kind: CollectionType,
    pub slug: String,
    pub title_th: String,
    pub title_en: String,
    pub excerpt: String,
    pub cover_image: String,
    pub category_id: String,
    pub status: CollectionStatus,
    pub errors: HashMap<&'static str, String>,
}

impl Default for CollectionFormState {
    fn default() -> Self {
        Self {
            kind: CollectionType::TopList,
            slug: String::new(),
            title_th: String::new(),
            title_en: String::new(),
            excerpt: String::new(),
            cover_image: String::new(),
            category_id: String::new(),
            status: CollectionStatus::Draft,
            errors: HashMap::new(),
        }
    }
}

impl CollectionFormState {
    pub fn from_collection(collection: &Collection) -> Self {
        Self {
            kind: collection.kind,
            slug: collection.slug.clone(),
            title_th: collection.title_th.clone(),
            title_en: collection.title_en.clone().unwrap_or_default(),
            excerpt: collection.excerpt.clone().unwrap_or_default(),
            cover_image: collection.cover_image.clone().unwrap_or_default(),
            category_id: collection.category_id.clone().unwrap_or_default(),
            status: collection.status,
            errors: HashMap::new(),
        }
    }

    /// Thai title is the primary one; the slug follows it while creating.
    pub fn set_title_th(&mut self, title: String, is_editing: bool) {
        if !is_editing {
            self.slug = generate_slug(&title);
        }
        self.title_th = title;
        self.errors.remove("title_th");
    }

    pub fn validate(&mut self) -> bool {
        self.errors.clear();
        if self.title_th.trim().is_empty() {
            self.errors
                .insert("title_th", "Title (TH) is required".to_string());
        }
        if self.slug.trim().is_empty() {
            self.errors.insert("slug", "Slug is required".to_string());
        }
        self.errors.is_empty()
    }

    pub fn to_create_payload(&self) -> CreateCollectionPayload {
        CreateCollectionPayload {
            kind: self.kind,
            slug: self.slug.trim().to_string(),
            title_th: self.title_th.trim().to_string(),
            title_en: non_blank(&self.title_en),
            excerpt: non_blank(&self.excerpt),
            cover_image: non_blank(&self.cover_image),
            category_id: non_blank(&self.category_id),
        }
    }

    pub fn to_update_payload(&self) -> UpdateCollectionPayload {
        UpdateCollectionPayload {
            kind: Some(self.kind),
            slug: Some(self.slug.trim().to_string()),
            title_th: Some(self.title_th.trim().to_string()),
            title_en: non_blank(&self.title_en),
            excerpt: non_blank(&self.excerpt),
            cover_image: non_blank(&self.cover_image),
            category_id: non_blank(&self.category_id),
            status: Some(self.status),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Swaps the item at `index` with its neighbor and returns the patches that
/// rewrite orderIndex to the new contiguous 1-based ranking. Items are
/// assumed pre-sorted by rank; out-of-range moves return nothing.
pub fn reorder_patches(
    items: &[CollectionItemRecord],
    index: usize,
    move_up: bool,
) -> Vec<(String, CollectionItemPatch)> {
    let target = if move_up {
        let Some(t) = index.checked_sub(1) else {
            return Vec::new();
        };
        t
    } else {
        index + 1
    };
    if index >= items.len() || target >= items.len() {
        return Vec::new();
    }
    let mut order: Vec<&CollectionItemRecord> = items.iter().collect();
    order.swap(index, target);
    order
        .iter()
        .enumerate()
        .filter(|(rank, item)| item.order_index != *rank as i64 + 1)
        .map(|(rank, item)| {
            (
                item.id.clone(),
                CollectionItemPatch {
                    order_index: Some(rank as i64 + 1),
                    ..Default::default()
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, order_index: i64) -> CollectionItemRecord {
        CollectionItemRecord {
            id: id.to_string(),
            order_index,
            ..Default::default()
        }
    }

    #[test]
    fn reorder_swaps_and_reindexes() {
        let items = vec![item("a", 1), item("b", 2), item("c", 3)];
        let patches = reorder_patches(&items, 2, true);
        let summary: Vec<(&str, i64)> = patches
            .iter()
            .map(|(id, p)| (id.as_str(), p.order_index.unwrap()))
            .collect();
        assert_eq!(summary, vec![("c", 2), ("b", 3)]);
    }

    #[test]
    fn reorder_repairs_gapped_indices() {
        let items = vec![item("a", 1), item("b", 5)];
        let patches = reorder_patches(&items, 0, false);
        let summary: Vec<(&str, i64)> = patches
            .iter()
            .map(|(id, p)| (id.as_str(), p.order_index.unwrap()))
            .collect();
        assert_eq!(summary, vec![("b", 1), ("a", 2)]);
    }

    #[test]
    fn reorder_at_the_edges_is_a_no_op() {
        let items = vec![item("a", 1), item("b", 2)];
        assert!(reorder_patches(&items, 0, true).is_empty());
        assert!(reorder_patches(&items, 1, false).is_empty());
    }

    #[test]
    fn title_tracks_slug_only_while_creating() {
        let mut form = CollectionFormState::default();
        form.set_title_th("Best Laptops 2025".to_string(), false);
        assert_eq!(form.slug, "best-laptops-2025");
        form.set_title_th("Renamed".to_string(), true);
        assert_eq!(form.slug, "best-laptops-2025");
    }

    #[test]
    fn update_payload_sends_blank_optionals_as_omitted() {
        let mut form = CollectionFormState::default();
        form.set_title_th("Guide".to_string(), false);
        let payload = form.to_update_payload();
        assert!(payload.title_en.is_none());
        assert_eq!(payload.title_th.as_deref(), Some("Guide"));
        assert_eq!(payload.status, Some(CollectionStatus::Draft));
    }
}
