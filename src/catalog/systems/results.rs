// src/catalog/systems/results.rs
// Settles finished tasks back into the cache. Mutations never patch cached
// data in place; they invalidate keys and the screens re-request on their
// next render.

use bevy::prelude::*;

use crate::catalog::events::{
    FetchTaskResult, MutationKind, MutationTaskResult, StatusFeedback,
};
use crate::catalog::resources::{QueryCache, QueryKey};

pub fn handle_fetch_results(
    mut events: EventReader<FetchTaskResult>,
    mut cache: ResMut<QueryCache>,
    mut feedback: EventWriter<StatusFeedback>,
) {
    for ev in events.read() {
        match &ev.result {
            Ok(payload) => {
                cache.store(ev.key.clone(), payload.clone());
            }
            Err(message) => {
                cache.settle(&ev.key);
                error!("Fetch failed for {:?}: {}", ev.key, message);
                feedback.write(StatusFeedback {
                    message: format!("Failed to load data: {message}"),
                    is_error: true,
                });
            }
        }
    }
}

pub fn handle_mutation_results(
    mut events: EventReader<MutationTaskResult>,
    mut cache: ResMut<QueryCache>,
    mut feedback: EventWriter<StatusFeedback>,
) {
    for ev in events.read() {
        match &ev.result {
            Ok(()) => {
                invalidate_for(&mut cache, &ev.kind);
                feedback.write(StatusFeedback {
                    message: success_message(&ev.kind, &ev.subject),
                    is_error: false,
                });
            }
            Err(message) => {
                error!("Mutation {:?} failed: {}", ev.kind, message);
                feedback.write(StatusFeedback {
                    message: format!("'{}': {}", ev.subject, message),
                    is_error: true,
                });
            }
        }
    }
}

fn invalidate_for(cache: &mut QueryCache, kind: &MutationKind) {
    match kind {
        MutationKind::ProductCreated | MutationKind::ProductDeleted => {
            cache.invalidate_products();
        }
        MutationKind::ProductUpdated { id } => {
            cache.invalidate(&QueryKey::Products);
            cache.invalidate(&QueryKey::Product(id.clone()));
            // Collection detail rows embed product names and prices.
            cache.invalidate_collections();
        }
        MutationKind::CategorySaved | MutationKind::CategoryDeleted => {
            cache.invalidate(&QueryKey::Categories);
            // Product rows show category names.
            cache.invalidate(&QueryKey::Products);
        }
        MutationKind::BrandSaved | MutationKind::BrandDeleted => {
            cache.invalidate(&QueryKey::Brands);
            cache.invalidate(&QueryKey::Products);
        }
        MutationKind::CollectionCreated | MutationKind::CollectionDeleted => {
            cache.invalidate_collections();
        }
        MutationKind::CollectionUpdated { id }
        | MutationKind::CollectionItemChanged { collection_id: id } => {
            cache.invalidate_collection(id);
        }
    }
}

fn success_message(kind: &MutationKind, subject: &str) -> String {
    match kind {
        MutationKind::ProductCreated => format!("Created '{subject}'"),
        MutationKind::ProductUpdated { .. } => format!("Saved '{subject}'"),
        MutationKind::ProductDeleted => format!("Deleted '{subject}'"),
        MutationKind::CategorySaved => format!("Saved category '{subject}'"),
        MutationKind::CategoryDeleted => format!("Deleted category '{subject}'"),
        MutationKind::BrandSaved => format!("Saved brand '{subject}'"),
        MutationKind::BrandDeleted => format!("Deleted brand '{subject}'"),
        MutationKind::CollectionCreated => format!("Created collection '{subject}'"),
        MutationKind::CollectionUpdated { .. } => format!("Saved collection '{subject}'"),
        MutationKind::CollectionDeleted => format!("Deleted collection '{subject}'"),
        MutationKind::CollectionItemChanged { .. } => "Collection updated".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{BrandPage, ProductPage};
    use crate::catalog::resources::FetchPayload;

    #[test]
    fn product_update_sweeps_its_detail_and_collections() {
        let mut cache = QueryCache::default();
        cache.store(
            QueryKey::Products,
            FetchPayload::Products(ProductPage::default()),
        );
        cache.store(
            QueryKey::Product("p-1".to_string()),
            FetchPayload::Product(Box::default()),
        );
        cache.store(QueryKey::Collections, FetchPayload::Collections(Vec::new()));
        cache.store(QueryKey::Brands, FetchPayload::Brands(BrandPage::default()));

        invalidate_for(
            &mut cache,
            &MutationKind::ProductUpdated {
                id: "p-1".to_string(),
            },
        );
        assert!(!cache.contains(&QueryKey::Products));
        assert!(!cache.contains(&QueryKey::Product("p-1".to_string())));
        assert!(!cache.contains(&QueryKey::Collections));
        assert!(cache.contains(&QueryKey::Brands));
    }

    #[test]
    fn category_save_also_drops_the_product_list() {
        let mut cache = QueryCache::default();
        cache.store(QueryKey::Categories, FetchPayload::Categories(Vec::new()));
        cache.store(
            QueryKey::Products,
            FetchPayload::Products(ProductPage::default()),
        );
        invalidate_for(&mut cache, &MutationKind::CategorySaved);
        assert!(!cache.contains(&QueryKey::Categories));
        assert!(!cache.contains(&QueryKey::Products));
    }

    #[test]
    fn item_change_drops_only_that_collection() {
        let mut cache = QueryCache::default();
        cache.store(
            QueryKey::Collection("c-1".to_string()),
            FetchPayload::Collection(Box::default()),
        );
        cache.store(
            QueryKey::Collection("c-2".to_string()),
            FetchPayload::Collection(Box::default()),
        );
        invalidate_for(
            &mut cache,
            &MutationKind::CollectionItemChanged {
                collection_id: "c-1".to_string(),
            },
        );
        assert!(!cache.contains(&QueryKey::Collection("c-1".to_string())));
        assert!(cache.contains(&QueryKey::Collection("c-2".to_string())));
    }
}
