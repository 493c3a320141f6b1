// src/api/types/report.rs

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportRange {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportsOverviewSummary {
    pub total_events: u64,
    pub page_views: u64,
    pub product_views: u64,
    pub unique_visitors: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportsDailyItem {
    pub date: String,
    pub total: u64,
    pub page_views: u64,
    pub product_views: u64,
    pub unique_visitors: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportsOverviewResponse {
    pub range: ReportRange,
    pub summary: ReportsOverviewSummary,
    pub daily: Vec<ReportsDailyItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportsTopProductItem {
    pub product_id: Option<String>,
    pub product_slug: Option<String>,
    pub views: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportsTopProductsResponse {
    pub range: ReportRange,
    pub items: Vec<ReportsTopProductItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportsTopPageItem {
    pub path: Option<String>,
    pub views: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportsTopPagesResponse {
    pub range: ReportRange,
    pub items: Vec<ReportsTopPageItem>,
}
