// src/api/types/product.rs

use serde::{Deserialize, Serialize};

use super::category::CategoryItem;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    #[default]
    Draft,
    Published,
}

impl ContentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Draft => "draft",
            ContentStatus::Published => "published",
        }
    }
}

/// BUY_IF / SKIP_IF discriminant on final-verdict bullets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerdictType {
    BuyIf,
    SkipIf,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Rating {
    pub id: Option<i64>,
    pub product_id: Option<String>,
    pub sub_category: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SortedContentItem {
    pub id: Option<i64>,
    pub content: String,
    pub sort_order: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuickVerdict {
    pub quote: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuickVerdictTag {
    pub tag: String,
    pub sort_order: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPricing {
    #[serde(deserialize_with = "lenient_f64")]
    pub price: f64,
    pub currency: String,
    pub price_label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandRef {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// Full product shape: the list and detail endpoints both answer with it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductDetail {
    pub id: String,
    pub category_id: Option<String>,
    pub brand_id: Option<String>,
    pub category: Option<CategoryItem>,
    pub brand: Option<BrandRef>,
    pub name: String,
    pub subtitle: String,
    pub slug: String,
    pub image: Option<String>,
    /// Historically serialized as a string ("4.5"); accept both.
    #[serde(deserialize_with = "lenient_f64")]
    pub overall_score: f64,
    pub is_recommended: bool,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: f64,
    pub currency: String,
    pub price_label: String,
    pub affiliate_link: Option<String>,
    pub last_updated: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub status: ContentStatus,
    pub ratings: Vec<Rating>,
    pub key_highlights: Vec<SortedContentItem>,
    pub weaknesses: Vec<SortedContentItem>,
    pub before_purchase_points: Vec<SortedContentItem>,
    pub after_usage_points: Vec<SortedContentItem>,
    pub pros: Vec<SortedContentItem>,
    pub cons: Vec<SortedContentItem>,
    pub quick_verdict: Option<QuickVerdict>,
    pub quick_verdict_tags: Vec<QuickVerdictTag>,
    pub pricing: Option<ProductPricing>,
    pub final_verdict_points: Vec<VerdictPointItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictPointItem {
    #[serde(rename = "type")]
    pub kind: VerdictType,
    pub text: String,
    #[serde(default)]
    pub order_index: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductPage {
    #[serde(default)]
    pub items: Vec<ProductDetail>,
    #[serde(default)]
    pub total: u64,
}

// --- Outbound payloads ---

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingPayload {
    pub sub_category: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortedContentPayload {
    pub content: String,
    pub sort_order: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagPayload {
    pub tag: String,
    pub sort_order: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickVerdictPayload {
    pub quote: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPayload {
    pub price: f64,
    pub currency: String,
    pub price_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictPointPayload {
    #[serde(rename = "type")]
    pub kind: VerdictType,
    pub text: String,
    pub order_index: i64,
}

/// Nested create shape for POST /admin/products. Built by
/// `catalog::form::payload::build_create_payload`; list members carry
/// contiguous 1-based sort indices and empty lists are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
    pub name: String,
    pub subtitle: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub overall_score: f64,
    pub is_recommended: bool,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub price_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate_link: Option<String>,
    pub last_updated: String,
    pub status: ContentStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ratings: Vec<RatingPayload>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub key_highlights: Vec<SortedContentPayload>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub weaknesses: Vec<SortedContentPayload>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub before_purchase_points: Vec<SortedContentPayload>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub after_usage_points: Vec<SortedContentPayload>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pros: Vec<SortedContentPayload>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cons: Vec<SortedContentPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_verdict: Option<QuickVerdictPayload>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub quick_verdict_tags: Vec<TagPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<PricingPayload>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub final_verdict_points: Vec<VerdictPointPayload>,
}

/// Partial update for PATCH /admin/products/{id}: only fields that changed
/// since the detail snapshot (plus force-included status on publish).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContentStatus>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.subtitle.is_none()
            && self.category_id.is_none()
            && self.brand_id.is_none()
            && self.image.is_none()
            && self.status.is_none()
    }
}

/// Accepts a JSON number or a numeric string; anything else falls back to 0.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detail_accepts_string_score() {
        let detail: ProductDetail = serde_json::from_value(json!({
            "id": "p-1",
            "name": "MacBook Air M3",
            "overallScore": "4.5",
            "status": "published"
        }))
        .unwrap();
        assert_eq!(detail.overall_score, 4.5);
        assert_eq!(detail.status, ContentStatus::Published);
    }

    #[test]
    fn detail_accepts_numeric_score_and_missing_lists() {
        let detail: ProductDetail = serde_json::from_value(json!({
            "id": "p-2",
            "name": "Dyson V15",
            "overallScore": 4,
        }))
        .unwrap();
        assert_eq!(detail.overall_score, 4.0);
        assert!(detail.ratings.is_empty());
        assert_eq!(detail.status, ContentStatus::Draft);
    }

    #[test]
    fn verdict_type_uses_wire_names() {
        assert_eq!(
            serde_json::to_string(&VerdictType::BuyIf).unwrap(),
            "\"BUY_IF\""
        );
        let kind: VerdictType = serde_json::from_str("\"SKIP_IF\"").unwrap();
        assert_eq!(kind, VerdictType::SkipIf);
    }

    #[test]
    fn empty_patch_serializes_to_empty_object() {
        let patch = ProductPatch::default();
        assert!(patch.is_empty());
        assert_eq!(serde_json::to_string(&patch).unwrap(), "{}");
    }
}
