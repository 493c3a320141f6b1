// src/catalog/plugin.rs
use bevy::prelude::*;

use super::events::{
    FetchTaskResult, MutationTaskResult, RequestAddCollectionItem, RequestCreateCollection,
    RequestCreateProduct, RequestDeleteBrand, RequestDeleteCategory, RequestDeleteCollection,
    RequestDeleteProduct, RequestFetch, RequestRemoveCollectionItem, RequestSaveBrand,
    RequestSaveCategory, RequestUpdateCollection, RequestUpdateCollectionItem,
    RequestUpdateProduct, StatusFeedback,
};
use super::resources::{ApiSession, EditableFieldsConfig, ProductListFilters, QueryCache};
use super::systems;
use crate::ui::systems::forward_events;

// Ordering within a frame: finished tasks re-enter as events first, then get
// settled into the cache, then fresh requests are dispatched.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
enum CatalogSystemSet {
    ForwardResults,
    SettleResults,
    DispatchRequests,
}

/// Query cache, async API dispatch, and mutation handling.
pub struct CatalogPlugin;

impl Plugin for CatalogPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                CatalogSystemSet::ForwardResults,
                CatalogSystemSet::SettleResults.after(CatalogSystemSet::ForwardResults),
                CatalogSystemSet::DispatchRequests.after(CatalogSystemSet::SettleResults),
            ),
        );

        app.init_resource::<QueryCache>()
            .init_resource::<ApiSession>()
            .init_resource::<ProductListFilters>()
            .init_resource::<EditableFieldsConfig>();

        app.add_event::<RequestFetch>()
            .add_event::<FetchTaskResult>()
            .add_event::<RequestCreateProduct>()
            .add_event::<RequestUpdateProduct>()
            .add_event::<RequestDeleteProduct>()
            .add_event::<RequestSaveCategory>()
            .add_event::<RequestDeleteCategory>()
            .add_event::<RequestSaveBrand>()
            .add_event::<RequestDeleteBrand>()
            .add_event::<RequestCreateCollection>()
            .add_event::<RequestUpdateCollection>()
            .add_event::<RequestDeleteCollection>()
            .add_event::<RequestAddCollectionItem>()
            .add_event::<RequestUpdateCollectionItem>()
            .add_event::<RequestRemoveCollectionItem>()
            .add_event::<MutationTaskResult>()
            .add_event::<StatusFeedback>();

        app.add_systems(
            Update,
            (
                forward_events::<FetchTaskResult>,
                forward_events::<MutationTaskResult>,
                apply_deferred,
            )
                .chain()
                .in_set(CatalogSystemSet::ForwardResults),
        );
        app.add_systems(
            Update,
            (
                systems::handle_fetch_results,
                systems::handle_mutation_results,
            )
                .chain()
                .in_set(CatalogSystemSet::SettleResults),
        );
        app.add_systems(
            Update,
            (
                systems::handle_fetch_requests,
                systems::handle_product_mutations,
                systems::handle_category_mutations,
                systems::handle_brand_mutations,
                systems::handle_collection_mutations,
            )
                .in_set(CatalogSystemSet::DispatchRequests),
        );

        info!("CatalogPlugin initialized.");
    }
}
