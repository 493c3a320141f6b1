// src/catalog/form/template.rs
// Reference JSON handed to content writers (and their LLM prompts) so
// imports arrive in the canonical shape. Kept as a raw literal so the tab
// can copy it verbatim.

pub const JSON_TEMPLATE: &str = r#"{
  "name": "Product Name",
  "slug": "product-name",
  "subtitle": "One-line summary shown under the title",
  "categoryId": "",
  "brandId": "",
  "image": "https://example.com/hero.jpg",
  "overallScore": 4.5,
  "isRecommended": true,
  "price": 12900,
  "currency": "THB",
  "priceLabel": "Launch price",
  "affiliateLink": "https://example.com/buy",
  "lastUpdated": "2025-01-15",
  "keyHighlights": ["First highlight", "Second highlight"],
  "weaknesses": ["First weakness"],
  "beforePurchasePoints": ["Check compatibility before buying"],
  "afterUsagePoints": ["Impression after a month of use"],
  "pros": ["Pro one", "Pro two"],
  "cons": ["Con one"],
  "ratings": [
    { "subCategory": "Design", "score": 4.5 },
    { "subCategory": "Value", "score": 4.0 }
  ],
  "quickVerdict": {
    "quote": "Short punchy verdict",
    "description": "A paragraph expanding on the verdict"
  },
  "quickVerdictTags": ["best-value", "editors-pick"],
  "pricing": {
    "price": 12900,
    "currency": "THB",
    "priceLabel": "Street price"
  },
  "finalVerdictPoints": [
    { "type": "BUY_IF", "text": "You want the best in class", "orderIndex": 1 },
    { "type": "SKIP_IF", "text": "You are on a tight budget", "orderIndex": 1 }
  ]
}"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::form::import::import_product_json;

    #[test]
    fn template_imports_cleanly() {
        let state = import_product_json(JSON_TEMPLATE).unwrap();
        assert_eq!(state.name, "Product Name");
        assert_eq!(state.ratings.len(), 2);
        assert_eq!(state.buy_if_points.len(), 1);
        assert_eq!(state.skip_if_points.len(), 1);
    }
}
