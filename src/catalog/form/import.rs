// src/catalog/form/import.rs
// Turns pasted JSON (often AI-generated, loosely shaped) into a populated
// form state. Tolerant by design: recognized synonyms are folded into the
// canonical field, malformed members fall back to their defaults instead of
// failing the whole import. Only a missing/blank "name" is a hard error.

use serde_json::Value;

use super::state::{ListField, ProductFormState, RatingEntry};
use crate::api::types::ContentStatus;

/// Outcome of parsing one optional list member: either a concrete list
/// (possibly empty) or "nothing usable, keep the form default".
enum ListParse {
    Parsed(Vec<String>),
    UseDefault,
}

pub fn import_product_json(input: &str) -> Result<ProductFormState, String> {
    if input.trim().is_empty() {
        return Err("Please enter JSON data".to_string());
    }
    let value: Value =
        serde_json::from_str(input).map_err(|e| format!("Invalid JSON format: {e}"))?;
    let obj = value
        .as_object()
        .ok_or_else(|| "JSON must be an object with a valid \"name\" field".to_string())?;

    let name = match obj.get("name").and_then(Value::as_str) {
        Some(n) if !n.trim().is_empty() => n.trim().to_string(),
        _ => return Err("JSON must include a valid \"name\" field".to_string()),
    };

    let mut state = ProductFormState::default();
    state.name = name.clone();
    state.slug = match obj.get("slug").and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => super::state::generate_slug(&name),
    };
    state.subtitle = first_string(obj, &["subtitle", "shortDescription"]).unwrap_or_default();
    state.image = first_string(obj, &["image", "heroImage"]).unwrap_or_default();
    state.overall_score = first_number(obj, &["overallScore", "rating"]).unwrap_or(0.0);
    state.category_id = obj
        .get("categoryId")
        .and_then(Value::as_str)
        .map(str::to_string)
        .or_else(|| {
            obj.get("categoryIds")
                .and_then(Value::as_array)
                .and_then(|a| a.first())
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_default();
    state.brand_id = obj
        .get("brandId")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default();
    state.affiliate_link = obj
        .get("affiliateLink")
        .and_then(Value::as_str)
        .map(str::to_string)
        .or_else(|| first_affiliate_url(obj.get("affiliateLinks")))
        .unwrap_or_default();
    state.is_recommended = obj
        .get("isRecommended")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    state.price = first_number(obj, &["price"]).unwrap_or(0.0);
    if let Some(currency) = obj.get("currency").and_then(Value::as_str) {
        if !currency.trim().is_empty() {
            state.currency = currency.trim().to_string();
        }
    }
    state.price_label = obj
        .get("priceLabel")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default();
    if let Some(date) = obj.get("lastUpdated").and_then(Value::as_str) {
        if !date.trim().is_empty() {
            state.last_updated = date.trim().to_string();
        }
    }
    // Imports always land as drafts, whatever the payload claims.
    state.status = ContentStatus::Draft;

    if let Some(qv) = obj.get("quickVerdict").and_then(Value::as_object) {
        state.quick_verdict_quote = qv
            .get("quote")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_default();
        state.quick_verdict_description = qv
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_default();
    }
    if let Some(pricing) = obj.get("pricing").and_then(Value::as_object) {
        state.pricing_price = pricing.get("price").map(lenient_number).unwrap_or(0.0);
        if let Some(currency) = pricing.get("currency").and_then(Value::as_str) {
            if !currency.trim().is_empty() {
                state.pricing_currency = currency.trim().to_string();
            }
        }
        state.pricing_label = pricing
            .get("priceLabel")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_default();
    }

    apply_list(&mut state, ListField::KeyHighlights, obj.get("keyHighlights"));
    apply_list(&mut state, ListField::Weaknesses, obj.get("weaknesses"));
    apply_list(
        &mut state,
        ListField::BeforePurchasePoints,
        obj.get("beforePurchasePoints"),
    );
    apply_list(
        &mut state,
        ListField::AfterUsagePoints,
        obj.get("afterUsagePoints"),
    );
    apply_list(&mut state, ListField::Pros, obj.get("pros"));
    apply_list(&mut state, ListField::Cons, obj.get("cons"));
    apply_list(
        &mut state,
        ListField::QuickVerdictTags,
        obj.get("quickVerdictTags"),
    );

    state.ratings = parse_ratings(obj.get("ratings"));

    let (buy_if, skip_if) = parse_verdict_points(obj.get("finalVerdictPoints"));
    if let ListParse::Parsed(points) = buy_if {
        *state.list_mut(ListField::BuyIfPoints) = keep_at_least_one(points);
    }
    if let ListParse::Parsed(points) = skip_if {
        *state.list_mut(ListField::SkipIfPoints) = keep_at_least_one(points);
    }

    Ok(state)
}

fn apply_list(state: &mut ProductFormState, field: ListField, value: Option<&Value>) {
    if let ListParse::Parsed(items) = parse_string_list(value, field == ListField::QuickVerdictTags)
    {
        *state.list_mut(field) = keep_at_least_one(items);
    }
}

/// Arrays of strings or `{ "content": ... }` objects; tag lists additionally
/// accept `{ "tag": ... }`. Scalars are stringified so stray numbers keep
/// their row; only nulls and unrecognized objects/arrays are dropped. A
/// non-array value means "use default".
fn parse_string_list(value: Option<&Value>, accept_tag_objects: bool) -> ListParse {
    let Some(Value::Array(items)) = value else {
        return ListParse::UseDefault;
    };
    let mut parsed = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(s) => parsed.push(s.clone()),
            Value::Number(n) => parsed.push(n.to_string()),
            Value::Bool(b) => parsed.push(b.to_string()),
            Value::Object(o) => {
                if let Some(content) = o.get("content").and_then(Value::as_str) {
                    parsed.push(content.to_string());
                } else if accept_tag_objects {
                    if let Some(tag) = o.get("tag").and_then(Value::as_str) {
                        parsed.push(tag.to_string());
                    }
                }
            }
            _ => {}
        }
    }
    ListParse::Parsed(parsed)
}

fn parse_ratings(value: Option<&Value>) -> Vec<RatingEntry> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let obj = item.as_object()?;
            let sub_category = obj.get("subCategory").and_then(Value::as_str)?.trim();
            if sub_category.is_empty() {
                return None;
            }
            Some(RatingEntry {
                sub_category: sub_category.to_string(),
                score: obj.get("score").map(lenient_number).unwrap_or(0.0),
            })
        })
        .collect()
}

/// Splits `finalVerdictPoints` into BUY_IF / SKIP_IF text lists, each ordered
/// by orderIndex (missing index sorts first, ties keep input order).
fn parse_verdict_points(value: Option<&Value>) -> (ListParse, ListParse) {
    let Some(Value::Array(items)) = value else {
        return (ListParse::UseDefault, ListParse::UseDefault);
    };
    let mut buy: Vec<(i64, String)> = Vec::new();
    let mut skip: Vec<(i64, String)> = Vec::new();
    for item in items {
        let Some(obj) = item.as_object() else { continue };
        let Some(text) = obj.get("text").and_then(Value::as_str) else {
            continue;
        };
        let order = obj.get("orderIndex").and_then(Value::as_i64).unwrap_or(0);
        match obj.get("type").and_then(Value::as_str) {
            Some("BUY_IF") => buy.push((order, text.to_string())),
            Some("SKIP_IF") => skip.push((order, text.to_string())),
            _ => {}
        }
    }
    buy.sort_by_key(|(order, _)| *order);
    skip.sort_by_key(|(order, _)| *order);
    (
        ListParse::Parsed(buy.into_iter().map(|(_, text)| text).collect()),
        ListParse::Parsed(skip.into_iter().map(|(_, text)| text).collect()),
    )
}

fn first_string(obj: &serde_json::Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        obj.get(*key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
    })
}

fn first_number(obj: &serde_json::Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| {
        obj.get(*key).and_then(|v| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    })
}

fn first_affiliate_url(value: Option<&Value>) -> Option<String> {
    let first = value?.as_array()?.first()?;
    match first {
        Value::String(s) => Some(s.clone()),
        Value::Object(o) => o.get("url").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

fn lenient_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn keep_at_least_one(list: Vec<String>) -> Vec<String> {
    if list.is_empty() {
        vec![String::new()]
    } else {
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_input_and_bad_json() {
        assert_eq!(
            import_product_json("   ").unwrap_err(),
            "Please enter JSON data"
        );
        assert!(import_product_json("{not json")
            .unwrap_err()
            .starts_with("Invalid JSON format"));
    }

    #[test]
    fn requires_a_name() {
        let err = import_product_json(r#"{"slug": "x"}"#).unwrap_err();
        assert!(err.contains("\"name\""));
        let err = import_product_json(r#"{"name": "  "}"#).unwrap_err();
        assert!(err.contains("\"name\""));
    }

    #[test]
    fn folds_synonyms_into_canonical_fields() {
        let state = import_product_json(
            r#"{
                "name": "Sony WH-1000XM5",
                "heroImage": "https://cdn/img.jpg",
                "rating": "4.5",
                "shortDescription": "Flagship ANC headphones",
                "categoryIds": ["cat-1", "cat-2"],
                "affiliateLinks": [{"merchant": "Lazada", "url": "https://aff/1"}]
            }"#,
        )
        .unwrap();
        assert_eq!(state.image, "https://cdn/img.jpg");
        assert_eq!(state.overall_score, 4.5);
        assert_eq!(state.subtitle, "Flagship ANC headphones");
        assert_eq!(state.category_id, "cat-1");
        assert_eq!(state.affiliate_link, "https://aff/1");
    }

    #[test]
    fn canonical_fields_win_over_synonyms() {
        let state = import_product_json(
            r#"{
                "name": "X",
                "image": "canonical.jpg",
                "heroImage": "synonym.jpg",
                "overallScore": 4.0,
                "rating": 2.0
            }"#,
        )
        .unwrap();
        assert_eq!(state.image, "canonical.jpg");
        assert_eq!(state.overall_score, 4.0);
    }

    #[test]
    fn status_is_always_draft() {
        let state = import_product_json(r#"{"name": "X", "status": "published"}"#).unwrap();
        assert_eq!(state.status, ContentStatus::Draft);
    }

    #[test]
    fn malformed_lists_fall_back_to_default_rows() {
        let state = import_product_json(
            r#"{"name": "X", "pros": "not a list", "cons": [null, ["nested"]]}"#,
        )
        .unwrap();
        assert_eq!(state.pros, vec![String::new()]);
        assert_eq!(state.cons, vec![String::new()]);
    }

    #[test]
    fn stray_scalars_keep_their_list_row() {
        let state =
            import_product_json(r#"{"name": "X", "cons": ["ok", 42, true, "also ok"]}"#).unwrap();
        assert_eq!(
            state.cons,
            vec![
                "ok".to_string(),
                "42".to_string(),
                "true".to_string(),
                "also ok".to_string()
            ]
        );
    }

    #[test]
    fn string_lists_accept_content_objects() {
        let state = import_product_json(
            r#"{"name": "X", "keyHighlights": [{"content": "bright screen", "sortOrder": 1}, "long battery"]}"#,
        )
        .unwrap();
        assert_eq!(
            state.key_highlights,
            vec!["bright screen".to_string(), "long battery".to_string()]
        );
    }

    #[test]
    fn tag_lists_accept_objects_and_strings() {
        let state = import_product_json(
            r#"{"name": "X", "quickVerdictTags": [{"tag": "best-value"}, "premium", {"oops": 1}]}"#,
        )
        .unwrap();
        assert_eq!(
            state.quick_verdict_tags,
            vec!["best-value".to_string(), "premium".to_string()]
        );
    }

    #[test]
    fn verdict_points_split_by_type_and_ordered() {
        let state = import_product_json(
            r#"{
                "name": "X",
                "finalVerdictPoints": [
                    {"type": "SKIP_IF", "text": "you need XLR", "orderIndex": 1},
                    {"type": "BUY_IF", "text": "you travel often", "orderIndex": 2},
                    {"type": "BUY_IF", "text": "you want top ANC", "orderIndex": 1},
                    {"type": "OTHER", "text": "ignored"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(
            state.buy_if_points,
            vec!["you want top ANC".to_string(), "you travel often".to_string()]
        );
        assert_eq!(state.skip_if_points, vec!["you need XLR".to_string()]);
    }

    #[test]
    fn ratings_drop_unnamed_rows_and_accept_string_scores() {
        let state = import_product_json(
            r#"{
                "name": "X",
                "ratings": [
                    {"subCategory": "Sound", "score": "4.8"},
                    {"subCategory": "  ", "score": 3},
                    {"subCategory": "Comfort"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(state.ratings.len(), 2);
        assert_eq!(state.ratings[0].sub_category, "Sound");
        assert_eq!(state.ratings[0].score, 4.8);
        assert_eq!(state.ratings[1].score, 0.0);
    }
}
