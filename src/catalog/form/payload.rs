// src/catalog/form/payload.rs
// Form state -> wire payloads. Create sends the full nested shape with
// blank rows filtered and sort indices re-packed 1-based; update sends only
// the allow-listed fields that differ from the load-time snapshot.

use super::state::ProductFormState;
use crate::api::types::product::{
    PricingPayload, QuickVerdictPayload, RatingPayload, SortedContentPayload, TagPayload,
    VerdictPointPayload,
};
use crate::api::types::{ContentStatus, CreateProductPayload, ProductPatch, VerdictType};

pub fn build_create_payload(state: &ProductFormState, status: ContentStatus) -> CreateProductPayload {
    CreateProductPayload {
        category_id: non_blank(&state.category_id),
        brand_id: non_blank(&state.brand_id),
        name: state.name.trim().to_string(),
        subtitle: state.subtitle.trim().to_string(),
        slug: state.slug.trim().to_string(),
        image: non_blank(&state.image),
        overall_score: state.overall_score,
        is_recommended: state.is_recommended,
        price: state.price,
        currency: non_blank(&state.currency),
        price_label: state.price_label.trim().to_string(),
        affiliate_link: non_blank(&state.affiliate_link),
        last_updated: state.last_updated.clone(),
        status,
        ratings: state
            .ratings
            .iter()
            .filter(|r| !r.sub_category.trim().is_empty())
            .map(|r| RatingPayload {
                sub_category: r.sub_category.trim().to_string(),
                score: r.score,
            })
            .collect(),
        key_highlights: indexed_contents(&state.key_highlights),
        weaknesses: indexed_contents(&state.weaknesses),
        before_purchase_points: indexed_contents(&state.before_purchase_points),
        after_usage_points: indexed_contents(&state.after_usage_points),
        pros: indexed_contents(&state.pros),
        cons: indexed_contents(&state.cons),
        quick_verdict: build_quick_verdict(state),
        quick_verdict_tags: indexed_tags(&state.quick_verdict_tags),
        pricing: build_pricing(state),
        final_verdict_points: build_verdict_points(state),
    }
}

/// Diff against the snapshot captured when the detail loaded. `force_status`
/// is included even when unchanged, so "Save & Publish" always carries it.
pub fn build_update_payload(
    state: &ProductFormState,
    force_status: Option<ContentStatus>,
) -> ProductPatch {
    let current = state.editable_projection();
    let original = state.original.clone().unwrap_or_default();
    let mut patch = ProductPatch {
        name: changed(current.name, &original.name),
        subtitle: changed(current.subtitle, &original.subtitle),
        category_id: changed(current.category_id, &original.category_id),
        brand_id: changed(current.brand_id, &original.brand_id),
        image: changed(current.image, &original.image),
        status: changed(current.status, &original.status),
    };
    if let Some(status) = force_status {
        patch.status = Some(status);
    }
    patch
}

fn changed<T: PartialEq>(current: Option<T>, original: &Option<T>) -> Option<T> {
    match (&current, original) {
        (Some(now), Some(before)) if now == before => None,
        _ => current,
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Drops blank rows, then assigns contiguous 1-based sort order over what
/// survives (gaps from removed rows must not leak into the payload).
fn indexed_contents(rows: &[String]) -> Vec<SortedContentPayload> {
    rows.iter()
        .map(|row| row.trim())
        .filter(|row| !row.is_empty())
        .enumerate()
        .map(|(i, row)| SortedContentPayload {
            content: row.to_string(),
            sort_order: i as i64 + 1,
        })
        .collect()
}

fn indexed_tags(rows: &[String]) -> Vec<TagPayload> {
    rows.iter()
        .map(|row| row.trim())
        .filter(|row| !row.is_empty())
        .enumerate()
        .map(|(i, row)| TagPayload {
            tag: row.to_string(),
            sort_order: i as i64 + 1,
        })
        .collect()
}

fn build_quick_verdict(state: &ProductFormState) -> Option<QuickVerdictPayload> {
    let quote = state.quick_verdict_quote.trim();
    let description = state.quick_verdict_description.trim();
    if quote.is_empty() && description.is_empty() {
        return None;
    }
    Some(QuickVerdictPayload {
        quote: quote.to_string(),
        description: description.to_string(),
    })
}

fn build_pricing(state: &ProductFormState) -> Option<PricingPayload> {
    if state.pricing_price == 0.0 && state.pricing_label.trim().is_empty() {
        return None;
    }
    Some(PricingPayload {
        price: state.pricing_price,
        currency: state.pricing_currency.trim().to_string(),
        price_label: state.pricing_label.trim().to_string(),
    })
}

/// BUY_IF points first, then SKIP_IF, each with its own contiguous 1-based
/// order index.
fn build_verdict_points(state: &ProductFormState) -> Vec<VerdictPointPayload> {
    let mut points = Vec::new();
    for (kind, rows) in [
        (VerdictType::BuyIf, &state.buy_if_points),
        (VerdictType::SkipIf, &state.skip_if_points),
    ] {
        points.extend(
            rows.iter()
                .map(|row| row.trim())
                .filter(|row| !row.is_empty())
                .enumerate()
                .map(|(i, row)| VerdictPointPayload {
                    kind,
                    text: row.to_string(),
                    order_index: i as i64 + 1,
                }),
        );
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::form::state::RatingEntry;

    fn filled_state() -> ProductFormState {
        let mut state = ProductFormState::default();
        state.set_name("Sony WH-1000XM5".to_string(), false);
        state.pros = vec![
            "  great ANC ".to_string(),
            "   ".to_string(),
            "light".to_string(),
        ];
        state
    }

    #[test]
    fn create_reindexes_after_filtering_blanks() {
        let payload = build_create_payload(&filled_state(), ContentStatus::Draft);
        let orders: Vec<i64> = payload.pros.iter().map(|p| p.sort_order).collect();
        assert_eq!(orders, vec![1, 2]);
        assert_eq!(payload.pros[0].content, "great ANC");
        assert_eq!(payload.pros[1].content, "light");
    }

    #[test]
    fn imported_lists_survive_payload_build_and_reimport() {
        use crate::catalog::form::import::import_product_json;

        // Import keeps the blank row for editing; the payload drops it and
        // re-packs the indices.
        let state = import_product_json(r#"{"name": "X", "pros": ["a", "", "b"]}"#).unwrap();
        assert_eq!(
            state.pros,
            vec!["a".to_string(), String::new(), "b".to_string()]
        );
        let payload = build_create_payload(&state, ContentStatus::Draft);
        let rows: Vec<(&str, i64)> = payload
            .pros
            .iter()
            .map(|p| (p.content.as_str(), p.sort_order))
            .collect();
        assert_eq!(rows, vec![("a", 1), ("b", 2)]);

        // Importing the wire shape back lands on the same filtered rows, so a
        // second build changes nothing.
        let reimported =
            import_product_json(&serde_json::to_string(&payload).unwrap()).unwrap();
        assert_eq!(reimported.pros, vec!["a".to_string(), "b".to_string()]);
        let rebuilt = build_create_payload(&reimported, ContentStatus::Draft);
        assert_eq!(rebuilt.pros.len(), payload.pros.len());
        assert_eq!(rebuilt.pros[1].sort_order, 2);
    }

    #[test]
    fn create_omits_empty_optional_sections() {
        let state = filled_state();
        let payload = build_create_payload(&state, ContentStatus::Draft);
        assert!(payload.quick_verdict.is_none());
        assert!(payload.pricing.is_none());
        assert!(payload.category_id.is_none());

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("quickVerdict").is_none());
        assert!(json.get("keyHighlights").is_none());
        assert_eq!(json["slug"], "sony-wh-1000xm5");
    }

    #[test]
    fn create_keeps_named_ratings_only() {
        let mut state = filled_state();
        state.ratings = vec![
            RatingEntry {
                sub_category: "Sound".to_string(),
                score: 4.8,
            },
            RatingEntry {
                sub_category: "  ".to_string(),
                score: 3.0,
            },
        ];
        let payload = build_create_payload(&state, ContentStatus::Draft);
        assert_eq!(payload.ratings.len(), 1);
        assert_eq!(payload.ratings[0].sub_category, "Sound");
    }

    #[test]
    fn verdict_points_order_buy_then_skip() {
        let mut state = filled_state();
        state.buy_if_points = vec!["b1".to_string(), String::new(), "b2".to_string()];
        state.skip_if_points = vec!["s1".to_string()];
        let payload = build_create_payload(&state, ContentStatus::Draft);
        let summary: Vec<(VerdictType, i64)> = payload
            .final_verdict_points
            .iter()
            .map(|p| (p.kind, p.order_index))
            .collect();
        assert_eq!(
            summary,
            vec![
                (VerdictType::BuyIf, 1),
                (VerdictType::BuyIf, 2),
                (VerdictType::SkipIf, 1)
            ]
        );
    }

    #[test]
    fn update_sends_only_changed_fields() {
        let mut state = filled_state();
        state.original = Some(state.editable_projection());
        state.subtitle = "New subtitle".to_string();

        let patch = build_update_payload(&state, None);
        assert_eq!(patch.subtitle.as_deref(), Some("New subtitle"));
        assert!(patch.name.is_none());
        assert!(patch.status.is_none());
    }

    #[test]
    fn update_without_changes_is_empty() {
        let mut state = filled_state();
        state.original = Some(state.editable_projection());
        assert!(build_update_payload(&state, None).is_empty());
    }

    #[test]
    fn publish_forces_status_even_when_unchanged() {
        let mut state = filled_state();
        state.status = ContentStatus::Published;
        state.original = Some(state.editable_projection());

        let patch = build_update_payload(&state, Some(ContentStatus::Published));
        assert_eq!(patch.status, Some(ContentStatus::Published));
    }
}
