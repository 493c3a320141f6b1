// src/api/types/category.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryItem {
    pub id: String,
    pub slug: String,
    pub name_th: Option<String>,
    pub name_en: Option<String>,
    pub description: Option<String>,
    pub hero_image: Option<String>,
    /// The backend stores this as 0/1, not a bool.
    pub is_active: i64,
    pub order_index: i64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl CategoryItem {
    /// Display name preference: English, then Thai, then slug.
    pub fn display_name(&self) -> &str {
        self.name_en
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.name_th.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or(&self.slug)
    }
}

/// Category create/replace payload. Updates go over PUT with the full shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryPayload {
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_th: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    pub is_active: i64,
    pub order_index: i64,
}
