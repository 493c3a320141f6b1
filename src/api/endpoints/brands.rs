// src/api/endpoints/brands.rs
// /admin/brands — list answers a bare {items, total} page. Updates over PUT.

use crate::api::envelope::{decode, Envelope};
use crate::api::error::ApiResult;
use crate::api::http::{HttpClient, HttpMethod};
use crate::api::types::{BrandPage, CreateBrandPayload};

const ENDPOINT: &str = "/admin/brands";

pub async fn list(client: &HttpClient) -> ApiResult<BrandPage> {
    let body = client
        .request_json(HttpMethod::Get, ENDPOINT, &[], None::<&()>)
        .await?;
    decode(body, Envelope::Bare)
}

pub async fn create(client: &HttpClient, payload: &CreateBrandPayload) -> ApiResult<()> {
    client
        .request_json(HttpMethod::Post, ENDPOINT, &[], Some(payload))
        .await?;
    Ok(())
}

pub async fn update(client: &HttpClient, id: &str, payload: &CreateBrandPayload) -> ApiResult<()> {
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
