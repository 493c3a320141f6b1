// src/api/endpoints/reports.rs
// /admin/reports/* — analytics reads, bare envelope, optional from/to range.

use crate::api::envelope::{decode, Envelope};
use crate::api::error::ApiResult;
use crate::api::http::{HttpClient, HttpMethod};
use crate::api::types::{
    ReportsOverviewResponse, ReportsTopPagesResponse, ReportsTopProductsResponse,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportRangeParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl ReportRangeParams {
    fn query(&self) -> [(&'static str, Option<String>); 2] {
        [("from", self.from.clone()), ("to", self.to.clone())]
    }
}

pub async fn overview(
    client: &HttpClient,
    range: &ReportRangeParams,
) -> ApiResult<ReportsOverviewResponse> {
    let body = client
        .request_json(
            HttpMethod::Get,
            "/admin/reports/overview",
            &range.query(),
            None::<&()>,
        )
        .await?;
    decode(body, Envelope::Bare)
}

pub async fn top_products(
    client: &HttpClient,
    range: &ReportRangeParams,
) -> ApiResult<ReportsTopProductsResponse> {
    let body = client
        .request_json(
            HttpMethod::Get,
            "/admin/reports/top-products",
            &range.query(),
            None::<&()>,
        )
        .await?;
    decode(body, Envelope::Bare)
}

pub async fn top_pages(
    client: &HttpClient,
    range: &ReportRangeParams,
) -> ApiResult<ReportsTopPagesResponse> {
    let body = client
        .request_json(
            HttpMethod::Get,
            "/admin/reports/top-pages",
            &range.query(),
            None::<&()>,
        )
        .await?;
    decode(body, Envelope::Bare)
}
