// src/catalog/systems/mutate.rs
// One handler per resource family. Each request spawns a background task
// whose outcome lands back on the main thread as a MutationTaskResult.

use std::future::Future;

use bevy::prelude::*;
use bevy_tokio_tasks::TokioTasksRuntime;

use crate::api::endpoints::{brands, categories, collection_items, collections, products};
use crate::api::ApiResult;
use crate::catalog::events::{
    MutationKind, MutationTaskResult, RequestAddCollectionItem, RequestCreateCollection,
    RequestCreateProduct, RequestDeleteBrand, RequestDeleteCategory, RequestDeleteCollection,
    RequestDeleteProduct, RequestRemoveCollectionItem, RequestSaveBrand, RequestSaveCategory,
    RequestUpdateCollection, RequestUpdateCollectionItem, RequestUpdateProduct,
};
use crate::catalog::resources::ApiSession;
use crate::ui::systems::SendEvent;

fn spawn_mutation<F, Fut>(
    commands: &mut Commands,
    runtime: &TokioTasksRuntime,
    kind: MutationKind,
    subject: String,
    task: F,
) where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = ApiResult<()>> + Send + 'static,
{
    let task_entity = commands.spawn_empty().id();
    runtime.spawn_background_task(move |mut ctx| async move {
        let result = task().await.map_err(|e| e.to_string());
        let event = MutationTaskResult {
            kind,
            subject,
            result,
        };
        ctx.run_on_main_thread(move |world_ctx| {
            world_ctx
                .world
                .commands()
                .entity(task_entity)
                .insert(SendEvent::<MutationTaskResult> { event });
        })
        .await;
    });
}

pub fn handle_product_mutations(
    mut commands: Commands,
    mut create_events: EventReader<RequestCreateProduct>,
    mut update_events: EventReader<RequestUpdateProduct>,
    mut delete_events: EventReader<RequestDeleteProduct>,
    session: Res<ApiSession>,
    runtime: Res<TokioTasksRuntime>,
) {
    for ev in create_events.read() {
        let client = session.client();
        let payload = ev.payload.clone();
        let subject = payload.name.clone();
        spawn_mutation(
            &mut commands,
            &runtime,
            MutationKind::ProductCreated,
            subject,
            move || async move { products::create(&client, &payload).await },
        );
    }
    for ev in update_events.read() {
        let client = session.client();
        let id = ev.id.clone();
        let patch = ev.patch.clone();
        spawn_mutation(
            &mut commands,
            &runtime,
            MutationKind::ProductUpdated { id: ev.id.clone() },
            ev.patch.name.clone().unwrap_or_else(|| "product".to_string()),
            move || async move { products::update(&client, &id, &patch).await },
        );
    }
    for ev in delete_events.read() {
        let client = session.client();
        let id = ev.id.clone();
        spawn_mutation(
            &mut commands,
            &runtime,
            MutationKind::ProductDeleted,
            ev.name.clone(),
            move || async move { products::delete(&client, &id).await },
        );
    }
}

pub fn handle_category_mutations(
    mut commands: Commands,
    mut save_events: EventReader<RequestSaveCategory>,
    mut delete_events: EventReader<RequestDeleteCategory>,
    session: Res<ApiSession>,
    runtime: Res<TokioTasksRuntime>,
) {
    for ev in save_events.read() {
        let client = session.client();
        let id = ev.id.clone();
        let payload = ev.payload.clone();
        let subject = payload.slug.clone();
        spawn_mutation(
            &mut commands,
            &runtime,
            MutationKind::CategorySaved,
            subject,
            move || async move {
                match id {
                    Some(id) => categories::update(&client, &id, &payload).await,
                    None => categories::create(&client, &payload).await,
                }
            },
        );
    }
    for ev in delete_events.read() {
        let client = session.client();
        let id = ev.id.clone();
        spawn_mutation(
            &mut commands,
            &runtime,
            MutationKind::CategoryDeleted,
            ev.name.clone(),
            move || async move { categories::delete(&client, &id).await },
        );
    }
}

pub fn handle_brand_mutations(
    mut commands: Commands,
    mut save_events: EventReader<RequestSaveBrand>,
    mut delete_events: EventReader<RequestDeleteBrand>,
    session: Res<ApiSession>,
    runtime: Res<TokioTasksRuntime>,
) {
    for ev in save_events.read() {
        let client = session.client();
        let id = ev.id.clone();
        let payload = ev.payload.clone();
        let subject = payload.name.clone();
        spawn_mutation(
            &mut commands,
            &runtime,
            MutationKind::BrandSaved,
            subject,
            move || async move {
                match id {
                    Some(id) => brands::update(&client, &id, &payload).await,
                    None => brands::create(&client, &payload).await,
                }
            },
        );
    }
    for ev in delete_events.read() {
        let client = session.client();
        let id = ev.id.clone();
        spawn_mutation(
            &mut commands,
            &runtime,
            MutationKind::BrandDeleted,
            ev.name.clone(),
            move || async move { brands::delete(&client, &id).await },
        );
    }
}

pub fn handle_collection_mutations(
    mut commands: Commands,
    mut create_events: EventReader<RequestCreateCollection>,
    mut update_events: EventReader<RequestUpdateCollection>,
    mut delete_events: EventReader<RequestDeleteCollection>,
    mut add_item_events: EventReader<RequestAddCollectionItem>,
    mut update_item_events: EventReader<RequestUpdateCollectionItem>,
    mut remove_item_events: EventReader<RequestRemoveCollectionItem>,
    session: Res<ApiSession>,
    runtime: Res<TokioTasksRuntime>,
) {
    for ev in create_events.read() {
        let client = session.client();
        let payload = ev.payload.clone();
        let subject = payload.title_th.clone();
        spawn_mutation(
            &mut commands,
            &runtime,
            MutationKind::CollectionCreated,
            subject,
            move || async move { collections::create(&client, &payload).await },
        );
    }
    for ev in update_events.read() {
        let client = session.client();
        let id = ev.id.clone();
        let payload = ev.payload.clone();
        let subject = payload
            .title_th
            .clone()
            .unwrap_or_else(|| "collection".to_string());
        spawn_mutation(
            &mut commands,
            &runtime,
            MutationKind::CollectionUpdated { id: ev.id.clone() },
            subject,
            move || async move { collections::update(&client, &id, &payload).await },
        );
    }
    for ev in delete_events.read() {
        let client = session.client();
        let id = ev.id.clone();
        spawn_mutation(
            &mut commands,
            &runtime,
            MutationKind::CollectionDeleted,
            ev.title.clone(),
            move || async move { collections::delete(&client, &id).await },
        );
    }
    for ev in add_item_events.read() {
        let client = session.client();
        let payload = ev.payload.clone();
        let collection_id = payload.collection_id.clone();
        spawn_mutation(
            &mut commands,
            &runtime,
            MutationKind::CollectionItemChanged { collection_id },
            "collection item".to_string(),
            move || async move { collection_items::create(&client, &payload).await },
        );
    }
    for ev in update_item_events.read() {
        let client = session.client();
        let item_id = ev.item_id.clone();
        let patch = ev.patch.clone();
        spawn_mutation(
            &mut commands,
            &runtime,
            MutationKind::CollectionItemChanged {
                collection_id: ev.collection_id.clone(),
            },
            "collection item".to_string(),
            move || async move { collection_items::update(&client, &item_id, &patch).await },
        );
    }
    for ev in remove_item_events.read() {
        let client = session.client();
        let item_id = ev.item_id.clone();
        spawn_mutation(
            &mut commands,
            &runtime,
            MutationKind::CollectionItemChanged {
                collection_id: ev.collection_id.clone(),
            },
            "collection item".to_string(),
            move || async move { collection_items::delete(&client, &item_id).await },
        );
    }
}
