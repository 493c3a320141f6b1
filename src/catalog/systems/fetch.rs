// src/catalog/systems/fetch.rs
// Turns RequestFetch events into background tokio tasks. Results come back
// through SendEvent entities so they re-enter the schedule as ordinary
// events on the main thread.

use bevy::prelude::*;
use bevy_tokio_tasks::TokioTasksRuntime;

use crate::api::endpoints::reports::ReportRangeParams;
use crate::api::endpoints::{
    brands, categories, collections, products, reports,
};
use crate::api::{ApiResult, HttpClient};
use crate::catalog::events::{FetchTaskResult, RequestFetch};
use crate::catalog::resources::{
    ApiSession, FetchPayload, ProductListFilters, QueryCache, QueryKey,
};
use crate::ui::systems::SendEvent;

pub fn handle_fetch_requests(
    mut commands: Commands,
    mut events: EventReader<RequestFetch>,
    mut cache: ResMut<QueryCache>,
    session: Res<ApiSession>,
    filters: Res<ProductListFilters>,
    runtime: Res<TokioTasksRuntime>,
) {
    for RequestFetch(key) in events.read() {
        if cache.is_in_flight(key) {
            continue;
        }
        cache.mark_in_flight(key.clone());
        debug!("Dispatching fetch for {:?}", key);

        let client = session.client();
        let key = key.clone();
        let product_params = filters.0.clone();
        let task_entity = commands.spawn_empty().id();
        runtime.spawn_background_task(move |mut ctx| async move {
            let result = run_fetch(&client, &key, &product_params)
                .await
                .map_err(|e| e.to_string());
            let event = FetchTaskResult { key, result };
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx
                    .world
                    .commands()
                    .entity(task_entity)
                    .insert(SendEvent::<FetchTaskResult> { event });
            })
            .await;
        });
    }
}

async fn run_fetch(
    client: &HttpClient,
    key: &QueryKey,
    product_params: &products::ProductListParams,
) -> ApiResult<FetchPayload> {
    match key {
        QueryKey::Products => products::list(client, product_params)
            .await
            .map(FetchPayload::Products),
        QueryKey::Product(id) => products::detail(client, id)
            .await
            .map(|d| FetchPayload::Product(Box::new(d))),
        QueryKey::Categories => categories::list(client).await.map(FetchPayload::Categories),
        QueryKey::Brands => brands::list(client).await.map(FetchPayload::Brands),
        QueryKey::Collections => collections::list(client)
            .await
            .map(FetchPayload::Collections),
        QueryKey::Collection(id) => collections::detail(client, id)
            .await
            .map(|c| FetchPayload::Collection(Box::new(c))),
        QueryKey::ReportsOverview { from, to } => {
            let range = ReportRangeParams {
                from: from.clone(),
                to: to.clone(),
            };
            reports::overview(client, &range)
                .await
                .map(|r| FetchPayload::ReportsOverview(Box::new(r)))
        }
        QueryKey::ReportsTopProducts { from, to } => {
            let range = ReportRangeParams {
                from: from.clone(),
                to: to.clone(),
            };
            reports::top_products(client, &range)
                .await
                .map(FetchPayload::ReportsTopProducts)
        }
        QueryKey::ReportsTopPages { from, to } => {
            let range = ReportRangeParams {
                from: from.clone(),
                to: to.clone(),
            };
            reports::top_pages(client, &range)
                .await
                .map(FetchPayload::ReportsTopPages)
        }
    }
}
