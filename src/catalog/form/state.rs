// src/catalog/form/state.rs
// Flat, UI-facing product form state, distinct from the nested wire shape.
// Every string-list field keeps at least one row while being edited so the
// form always has something to render; blank rows are filtered out by the
// payload builders, never here.

use std::collections::HashMap;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::api::types::product::{ProductDetail, SortedContentItem};
use crate::api::types::{ContentStatus, ProductPatch, VerdictType};

/// Identifies one of the string-list fields on the product form. The UI's
/// generic row editor and the import normalizer address lists through this
/// instead of nine copies of the same handler set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListField {
    KeyHighlights,
    Weaknesses,
    BeforePurchasePoints,
    AfterUsagePoints,
    Pros,
    Cons,
    QuickVerdictTags,
    BuyIfPoints,
    SkipIfPoints,
}

impl ListField {
    pub const ALL: [ListField; 9] = [
        ListField::KeyHighlights,
        ListField::Weaknesses,
        ListField::BeforePurchasePoints,
        ListField::AfterUsagePoints,
        ListField::Pros,
        ListField::Cons,
        ListField::QuickVerdictTags,
        ListField::BuyIfPoints,
        ListField::SkipIfPoints,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ListField::KeyHighlights => "Key highlights",
            ListField::Weaknesses => "Weaknesses",
            ListField::BeforePurchasePoints => "Before purchase",
            ListField::AfterUsagePoints => "After usage",
            ListField::Pros => "Pros",
            ListField::Cons => "Cons",
            ListField::QuickVerdictTags => "Verdict tags",
            ListField::BuyIfPoints => "Buy if",
            ListField::SkipIfPoints => "Skip if",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingEntry {
    pub sub_category: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductFormState {
    pub name: String,
    pub subtitle: String,
    pub slug: String,
    /// Empty string means "no category selected".
    pub category_id: String,
    pub brand_id: String,
    pub image: String,
    pub overall_score: f64,
    pub is_recommended: bool,
    pub price: f64,
    pub currency: String,
    pub price_label: String,
    pub affiliate_link: String,
    /// YYYY-MM-DD, shown on the public review page.
    pub last_updated: String,
    pub status: ContentStatus,

    pub quick_verdict_quote: String,
    pub quick_verdict_description: String,
    pub pricing_price: f64,
    pub pricing_currency: String,
    pub pricing_label: String,

    pub key_highlights: Vec<String>,
    pub weaknesses: Vec<String>,
    pub before_purchase_points: Vec<String>,
    pub after_usage_points: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub quick_verdict_tags: Vec<String>,
    pub buy_if_points: Vec<String>,
    pub skip_if_points: Vec<String>,

    pub ratings: Vec<RatingEntry>,

    /// Per-field validation messages, rendered inline next to the widget.
    pub errors: HashMap<&'static str, String>,
    /// Editable projection captured when a detail fetch populated the form;
    /// the partial-update builder diffs against this.
    pub original: Option<ProductPatch>,
}

impl Default for ProductFormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            subtitle: String::new(),
            slug: String::new(),
            category_id: String::new(),
            brand_id: String::new(),
            image: String::new(),
            overall_score: 0.0,
            is_recommended: false,
            price: 0.0,
            currency: "THB".to_string(),
            price_label: String::new(),
            affiliate_link: String::new(),
            last_updated: chrono::Local::now().format("%Y-%m-%d").to_string(),
            status: ContentStatus::Draft,
            quick_verdict_quote: String::new(),
            quick_verdict_description: String::new(),
            pricing_price: 0.0,
            pricing_currency: "THB".to_string(),
            pricing_label: String::new(),
            key_highlights: vec![String::new()],
            weaknesses: vec![String::new()],
            before_purchase_points: vec![String::new()],
            after_usage_points: vec![String::new()],
            pros: vec![String::new()],
            cons: vec![String::new()],
            quick_verdict_tags: vec![String::new()],
            buy_if_points: vec![String::new()],
            skip_if_points: vec![String::new()],
            ratings: Vec::new(),
            errors: HashMap::new(),
            original: None,
        }
    }
}

impl ProductFormState {
    /// Populates the form from a detail fetch and captures the editable
    /// snapshot used for partial-update diffing.
    pub fn from_detail(detail: &ProductDetail) -> Self {
        let mut state = Self {
            name: detail.name.clone(),
            subtitle: detail.subtitle.clone(),
            slug: detail.slug.clone(),
            category_id: detail.category_id.clone().unwrap_or_default(),
            brand_id: detail.brand_id.clone().unwrap_or_default(),
            image: detail.image.clone().unwrap_or_default(),
            overall_score: detail.overall_score,
            is_recommended: detail.is_recommended,
            price: detail.price,
            currency: or_default(&detail.currency, "THB"),
            price_label: detail.price_label.clone(),
            affiliate_link: detail.affiliate_link.clone().unwrap_or_default(),
            last_updated: detail
                .last_updated
                .clone()
                .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string()),
            status: detail.status,
            quick_verdict_quote: detail
                .quick_verdict
                .as_ref()
                .map(|qv| qv.quote.clone())
                .unwrap_or_default(),
            quick_verdict_description: detail
                .quick_verdict
                .as_ref()
                .map(|qv| qv.description.clone())
                .unwrap_or_default(),
            pricing_price: detail.pricing.as_ref().map(|p| p.price).unwrap_or(0.0),
            pricing_currency: detail
                .pricing
                .as_ref()
                .map(|p| or_default(&p.currency, "THB"))
                .unwrap_or_else(|| "THB".to_string()),
            pricing_label: detail
                .pricing
                .as_ref()
                .map(|p| p.price_label.clone())
                .unwrap_or_default(),
            key_highlights: sorted_contents(&detail.key_highlights),
            weaknesses: sorted_contents(&detail.weaknesses),
            before_purchase_points: sorted_contents(&detail.before_purchase_points),
            after_usage_points: sorted_contents(&detail.after_usage_points),
            pros: sorted_contents(&detail.pros),
            cons: sorted_contents(&detail.cons),
            quick_verdict_tags: non_empty_or_placeholder(
                detail
                    .quick_verdict_tags
                    .iter()
                    .map(|t| t.tag.clone())
                    .collect(),
            ),
            buy_if_points: verdict_texts(detail, VerdictType::BuyIf),
            skip_if_points: verdict_texts(detail, VerdictType::SkipIf),
            ratings: detail
                .ratings
                .iter()
                .map(|r| RatingEntry {
                    sub_category: r.sub_category.clone(),
                    score: r.score,
                })
                .collect(),
            errors: HashMap::new(),
            original: None,
        };
        state.original = Some(state.editable_projection());
        state
    }

    /// Name change handler: while creating, the slug tracks the name.
    pub fn set_name(&mut self, name: String, is_editing: bool) {
        if !is_editing {
            self.slug = generate_slug(&name);
        }
        self.name = name;
        self.errors.remove("name");
    }

    pub fn list(&self, field: ListField) -> &Vec<String> {
        match field {
            ListField::KeyHighlights => &self.key_highlights,
            ListField::Weaknesses => &self.weaknesses,
            ListField::BeforePurchasePoints => &self.before_purchase_points,
            ListField::AfterUsagePoints => &self.after_usage_points,
            ListField::Pros => &self.pros,
            ListField::Cons => &self.cons,
            ListField::QuickVerdictTags => &self.quick_verdict_tags,
            ListField::BuyIfPoints => &self.buy_if_points,
            ListField::SkipIfPoints => &self.skip_if_points,
        }
    }

    pub fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::KeyHighlights => &mut self.key_highlights,
            ListField::Weaknesses => &mut self.weaknesses,
            ListField::BeforePurchasePoints => &mut self.before_purchase_points,
            ListField::AfterUsagePoints => &mut self.after_usage_points,
            ListField::Pros => &mut self.pros,
            ListField::Cons => &mut self.cons,
            ListField::QuickVerdictTags => &mut self.quick_verdict_tags,
            ListField::BuyIfPoints => &mut self.buy_if_points,
            ListField::SkipIfPoints => &mut self.skip_if_points,
        }
    }

    pub fn set_list_row(&mut self, field: ListField, index: usize, value: String) {
        if let Some(slot) = self.list_mut(field).get_mut(index) {
            *slot = value;
        }
    }

    pub fn add_list_row(&mut self, field: ListField) {
        self.list_mut(field).push(String::new());
    }

    /// Removal never drops below one row; the last row is blanked instead.
    pub fn remove_list_row(&mut self, field: ListField, index: usize) {
        let list = self.list_mut(field);
        if list.len() > 1 {
            if index < list.len() {
                list.remove(index);
            }
        } else if let Some(first) = list.first_mut() {
            first.clear();
        }
    }

    pub fn add_rating(&mut self) {
        self.ratings.push(RatingEntry::default());
    }

    pub fn remove_rating(&mut self, index: usize) {
        if index < self.ratings.len() {
            self.ratings.remove(index);
        }
    }

    /// Required-field checks. Messages land in `errors`, keyed by field.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();
        if self.name.trim().is_empty() {
            self.errors.insert("name", "Name is required".to_string());
        }
        if self.slug.trim().is_empty() {
            self.errors.insert("slug", "Slug is required".to_string());
        }
        if !(0.0..=5.0).contains(&self.overall_score) {
            self.errors
                .insert("overall_score", "Score must be between 0 and 5".to_string());
        }
        self.errors.is_empty()
    }

    /// The editable subset as a full patch (every allow-listed field present).
    /// Used both as the load-time snapshot and as the diff input.
    pub fn editable_projection(&self) -> ProductPatch {
        ProductPatch {
            name: Some(self.name.clone()),
            subtitle: Some(self.subtitle.clone()),
            category_id: Some(self.category_id.clone()),
            brand_id: Some(self.brand_id.clone()),
            image: Some(self.image.clone()),
            status: Some(self.status),
        }
    }
}

fn or_default(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// Orders server content items by sortOrder and keeps the editing invariant.
fn sorted_contents(items: &[SortedContentItem]) -> Vec<String> {
    let mut sorted: Vec<&SortedContentItem> = items.iter().collect();
    sorted.sort_by_key(|item| item.sort_order);
    non_empty_or_placeholder(sorted.into_iter().map(|item| item.content.clone()).collect())
}

fn verdict_texts(detail: &ProductDetail, kind: VerdictType) -> Vec<String> {
    let mut points: Vec<_> = detail
        .final_verdict_points
        .iter()
        .filter(|p| p.kind == kind)
        .collect();
    points.sort_by_key(|p| p.order_index);
    non_empty_or_placeholder(points.into_iter().map(|p| p.text.clone()).collect())
}

fn non_empty_or_placeholder(list: Vec<String>) -> Vec<String> {
    if list.is_empty() {
        vec![String::new()]
    } else {
        list
    }
}

/// Lowercases, folds away diacritics (NFKD) and collapses everything outside
/// [a-z0-9] into single hyphens.
pub fn generate_slug(name: &str) -> String {
    let folded: String = name.nfkd().filter(|c| !is_combining_mark(*c)).collect();
    let mut slug = String::with_capacity(folded.len());
    let mut last_was_hyphen = true; // Suppresses a leading hyphen
    for c in folded.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::product::VerdictPointItem;

    #[test]
    fn slug_generation_collapses_and_trims() {
        assert_eq!(generate_slug("MacBook Air M3 (15\")"), "macbook-air-m3-15");
        assert_eq!(generate_slug("  -- Dyson V15 --  "), "dyson-v15");
        assert_eq!(generate_slug("Café Crème"), "cafe-creme");
    }

    #[test]
    fn list_rows_never_drop_below_one() {
        let mut state = ProductFormState::default();
        state.set_list_row(ListField::Pros, 0, "quiet".to_string());
        state.remove_list_row(ListField::Pros, 0);
        assert_eq!(state.pros, vec![String::new()]);

        state.add_list_row(ListField::Pros);
        state.set_list_row(ListField::Pros, 1, "fast".to_string());
        state.remove_list_row(ListField::Pros, 0);
        assert_eq!(state.pros, vec!["fast".to_string()]);
    }

    #[test]
    fn name_change_tracks_slug_only_while_creating() {
        let mut state = ProductFormState::default();
        state.set_name("Sony WH-1000XM5".to_string(), false);
        assert_eq!(state.slug, "sony-wh-1000xm5");

        state.set_name("Renamed".to_string(), true);
        assert_eq!(state.slug, "sony-wh-1000xm5");
    }

    #[test]
    fn from_detail_splits_verdict_points_by_type_in_order() {
        let detail = ProductDetail {
            name: "X".to_string(),
            final_verdict_points: vec![
                VerdictPointItem {
                    kind: VerdictType::SkipIf,
                    text: "s1".to_string(),
                    order_index: 2,
                },
                VerdictPointItem {
                    kind: VerdictType::BuyIf,
                    text: "b1".to_string(),
                    order_index: 1,
                },
                VerdictPointItem {
                    kind: VerdictType::SkipIf,
                    text: "s0".to_string(),
                    order_index: 1,
                },
            ],
            ..Default::default()
        };
        let state = ProductFormState::from_detail(&detail);
        assert_eq!(state.buy_if_points, vec!["b1".to_string()]);
        assert_eq!(state.skip_if_points, vec!["s0".to_string(), "s1".to_string()]);
        assert!(state.original.is_some());
    }

    #[test]
    fn validate_requires_name_slug_and_score_range() {
        let mut state = ProductFormState::default();
        assert!(!state.validate());
        assert!(state.errors.contains_key("name"));
        assert!(state.errors.contains_key("slug"));

        state.set_name("Ok".to_string(), false);
        state.overall_score = 7.0;
        assert!(!state.validate());
        assert!(state.errors.contains_key("overall_score"));

        state.overall_score = 4.5;
        assert!(state.validate());
    }
}
