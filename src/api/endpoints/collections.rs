// src/api/endpoints/collections.rs
// /admin/collections — bare envelope. Detail includes ranked items. Updates
// over PATCH.

use crate::api::envelope::{decode, Envelope};
use crate::api::error::ApiResult;
use crate::api::http::{HttpClient, HttpMethod};
use crate::api::types::{Collection, CreateCollectionPayload, UpdateCollectionPayload};

const ENDPOINT: &str = "/admin/collections";

pub async fn list(client: &HttpClient) -> ApiResult<Vec<Collection>> {
    let body = client
        .request_json(HttpMethod::Get, ENDPOINT, &[], None::<&()>)
        .await?;
    decode(body, Envelope::Bare)
}

pub async fn detail(client: &HttpClient, id: &str) -> ApiResult<Collection> {
    let body = client
        .request_json(
            HttpMethod::Get,
            &format!("{ENDPOINT}/{id}"),
            &[],
            None::<&()>,
        )
        .await?;
    decode(body, Envelope::Bare)
}

pub async fn create(client: &HttpClient, payload: &CreateCollectionPayload) -> ApiResult<()> {
    client
        .request_json(HttpMethod::Post, ENDPOINT, &[], Some(payload))
        .await?;
    Ok(())
}

pub async fn update(
    client: &HttpClient,
    id: &str,
    payload: &UpdateCollectionPayload,
) -> ApiResult<()> {
    client
        .request_json(
            HttpMethod::Patch,
            &format!("{ENDPOINT}/{id}"),
            &[],
            Some(payload),
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
