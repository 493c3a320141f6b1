// src/api/endpoints/collection_items.rs
// /admin/collection-items — membership records of products inside a
// collection. Bare envelope, updates over PATCH.

use crate::api::error::ApiResult;
use crate::api::http::{HttpClient, HttpMethod};
use crate::api::types::{CollectionItemPatch, CreateCollectionItemPayload};

const ENDPOINT: &str = "/admin/collection-items";

pub async fn create(client: &HttpClient, payload: &CreateCollectionItemPayload) -> ApiResult<()> {
    client
        .request_json(HttpMethod::Post, ENDPOINT, &[], Some(payload))
        .await?;
    Ok(())
}

pub async fn update(client: &HttpClient, id: &str, patch: &CollectionItemPatch) -> ApiResult<()> {
    client
        .request_json(
            HttpMethod::Patch,
            &format!("{ENDPOINT}/{id}"),
            &[],
            Some(patch),
        )
        .await?;
    Ok(())
}

pub async fn delete(client: &HttpClient, id: &str) -> ApiResult<()> {
    client
        .request_json(
            HttpMethod::Delete,
            &format!("{ENDPOINT}/{id}"),
            &[],
            None::<&()>,
        )
        .await?;
    Ok(())
}
