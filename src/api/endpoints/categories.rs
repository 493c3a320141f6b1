// src/api/endpoints/categories.rs
// /admin/category — list wraps in {data}, mutations answer {success, message, data}.
// Updates are full replacements over PUT.

use crate::api::envelope::{decode, Envelope};
use crate::api::error::ApiResult;
use crate::api::http::{HttpClient, HttpMethod};
use crate::api::types::{CategoryItem, CreateCategoryPayload};

const ENDPOINT: &str = "/admin/category";

pub async fn list(client: &HttpClient) -> ApiResult<Vec<CategoryItem>> {
    let body = client
        .request_json(HttpMethod::Get, ENDPOINT, &[], None::<&()>)
        .await?;
    decode(body, Envelope::Data)
}

pub async fn create(client: &HttpClient, payload: &CreateCategoryPayload) -> ApiResult<()> {
    client
        .request_json(HttpMethod::Post, ENDPOINT, &[], Some(payload))
        .await?;
    Ok(())
}

pub async fn update(
    client: &HttpClient,
    id: &str,
    payload: &CreateCategoryPayload,
) -> ApiResult<()> {
    client
        .request_json(
            HttpMethod::Put,
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
