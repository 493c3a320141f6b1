// src/api/endpoints/products.rs
// /admin/products — bare envelope throughout. Create over POST, partial
// updates over PATCH.

use crate::api::envelope::{decode, Envelope};
use crate::api::error::ApiResult;
use crate::api::http::{HttpClient, HttpMethod};
use crate::api::types::{CreateProductPayload, ProductDetail, ProductPage, ProductPatch};

const ENDPOINT: &str = "/admin/products";

/// Server-side list filters. All optional; empty values are skipped when the
/// URL is built. Pagination stays client-side over the returned page, so no
/// page param is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductListParams {
    pub status: Option<String>,
    pub search: Option<String>,
    pub category_id: Option<String>,
    pub brand_id: Option<String>,
}

pub async fn list(client: &HttpClient, params: &ProductListParams) -> ApiResult<ProductPage> {
    let query = [
        ("status", params.status.clone()),
        ("search", params.search.clone()),
        ("categoryId", params.category_id.clone()),
        ("brandId", params.brand_id.clone()),
    ];
    let body = client
        .request_json(HttpMethod::Get, ENDPOINT, &query, None::<&()>)
        .await?;
    decode(body, Envelope::Bare)
}

pub async fn detail(client: &HttpClient, id: &str) -> ApiResult<ProductDetail> {
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

pub async fn create(client: &HttpClient, payload: &CreateProductPayload) -> ApiResult<()> {
    client
        .request_json(HttpMethod::Post, ENDPOINT, &[], Some(payload))
        .await?;
    Ok(())
}

pub async fn update(client: &HttpClient, id: &str, patch: &ProductPatch) -> ApiResult<()> {
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
