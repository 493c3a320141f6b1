// src/api/types/collection.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollectionType {
    #[default]
    TopList,
    Guide,
    Comparison,
}

impl CollectionType {
    pub const ALL: [CollectionType; 3] = [
        CollectionType::TopList,
        CollectionType::Guide,
        CollectionType::Comparison,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CollectionType::TopList => "Top list",
            CollectionType::Guide => "Guide",
            CollectionType::Comparison => "Comparison",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollectionStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl CollectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionStatus::Draft => "DRAFT",
            CollectionStatus::Published => "PUBLISHED",
            CollectionStatus::Archived => "ARCHIVED",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryRef {
    pub id: String,
    pub slug: String,
    pub name_th: Option<String>,
    pub name_en: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectionProductRef {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub image: Option<String>,
    pub subtitle: String,
    pub price: f64,
    pub currency: String,
}

/// A product's membership record within a collection: rank plus optional
/// deal-pricing overrides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectionItemRecord {
    pub id: String,
    pub collection_id: String,
    pub product_id: String,
    pub order_index: i64,
    pub original_price: Option<f64>,
    pub deal_price: Option<f64>,
    pub currency: String,
    pub deal_start_at: Option<String>,
    pub deal_end_at: Option<String>,
    pub deal_badge: Option<String>,
    pub deal_url: Option<String>,
    pub note: Option<String>,
    pub created_at: Option<String>,
    pub product: Option<CollectionProductRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Collection {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: CollectionType,
    pub slug: String,
    pub title_th: String,
    pub title_en: Option<String>,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub category_id: Option<String>,
    pub status: CollectionStatus,
    pub published_at: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub category: Option<CategoryRef>,
    /// Only the detail endpoint includes the ranked items.
    pub items: Option<Vec<CollectionItemRecord>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCollectionPayload {
    #[serde(rename = "type")]
    pub kind: CollectionType,
    pub slug: String,
    pub title_th: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCollectionPayload {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<CollectionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_th: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CollectionStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCollectionItemPayload {
    pub collection_id: String,
    pub product_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal_badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal_badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
