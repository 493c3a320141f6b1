// src/ui/state.rs
// All per-window UI state in one resource, so the egui system only needs a
// single ResMut for navigation, editors, popup flags and filter inputs.

use bevy::prelude::Resource;

use crate::api::endpoints::products::ProductListParams;
use crate::api::types::{BrandItem, CategoryItem, ContentStatus};
use crate::catalog::form::{CollectionFormState, ProductFormState};
use crate::settings::FpsSetting;

pub const LIST_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Dashboard,
    Products,
    Categories,
    Brands,
    Collections,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Dashboard,
        Screen::Products,
        Screen::Categories,
        Screen::Brands,
        Screen::Collections,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Products => "Products",
            Screen::Categories => "Categories",
            Screen::Brands => "Brands",
            Screen::Collections => "Collections",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductFormTab {
    #[default]
    Basic,
    Details,
    ProsCons,
    Affiliate,
    Import,
}

impl ProductFormTab {
    pub fn label(&self) -> &'static str {
        match self {
            ProductFormTab::Basic => "Basic",
            ProductFormTab::Details => "Details",
            ProductFormTab::ProsCons => "Pros & Cons",
            ProductFormTab::Affiliate => "Affiliate",
            ProductFormTab::Import => "Import JSON",
        }
    }

    /// Key the editable-tabs allow-list is written against.
    pub fn key(&self) -> &'static str {
        match self {
            ProductFormTab::Basic => "basic",
            ProductFormTab::Details => "details",
            ProductFormTab::ProsCons => "prosCons",
            ProductFormTab::Affiliate => "affiliate",
            ProductFormTab::Import => "import",
        }
    }
}

/// Open product editor. `product_id` of None means a create flow.
#[derive(Debug, Clone, Default)]
pub struct ProductEditor {
    pub product_id: Option<String>,
    pub form: ProductFormState,
    pub tab: ProductFormTab,
    pub import_text: String,
    pub import_error: Option<String>,
    /// Set once the detail fetch has populated the form.
    pub loaded: bool,
    /// A save is in flight; cleared by the mutation result.
    pub saving: bool,
}

impl ProductEditor {
    pub fn is_editing(&self) -> bool {
        self.product_id.is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CategoryFormFields {
    pub slug: String,
    pub name_th: String,
    pub name_en: String,
    pub description: String,
    pub hero_image: String,
    pub is_active: bool,
    pub order_index: i64,
}

impl CategoryFormFields {
    pub fn from_item(item: &CategoryItem) -> Self {
        Self {
            slug: item.slug.clone(),
            name_th: item.name_th.clone().unwrap_or_default(),
            name_en: item.name_en.clone().unwrap_or_default(),
            description: item.description.clone().unwrap_or_default(),
            hero_image: item.hero_image.clone().unwrap_or_default(),
            is_active: item.is_active != 0,
            order_index: item.order_index,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BrandFormFields {
    pub name: String,
    pub slug: String,
    pub tagline: String,
    pub description: String,
    pub logo_url: String,
    pub meta_title: String,
    pub meta_description: String,
    pub is_indexable: bool,
    pub is_followable: bool,
}

impl BrandFormFields {
    pub fn from_item(item: &BrandItem) -> Self {
        Self {
            name: item.name.clone(),
            slug: item.slug.clone(),
            tagline: item.tagline.clone().unwrap_or_default(),
            description: item.description.clone().unwrap_or_default(),
            logo_url: item.logo_url.clone().unwrap_or_default(),
            meta_title: item.meta_title.clone().unwrap_or_default(),
            meta_description: item.meta_description.clone().unwrap_or_default(),
            is_indexable: item.is_indexable,
            is_followable: item.is_followable,
        }
    }
}

/// Deal-pricing override popup inputs, kept as strings until save so partial
/// numbers can be typed.
#[derive(Debug, Clone, Default)]
pub struct DealEdit {
    pub item_id: String,
    pub product_name: String,
    pub original_price: String,
    pub deal_price: String,
    pub deal_badge: String,
    pub deal_url: String,
    pub note: String,
}

#[derive(Debug, Clone, Default)]
pub struct CollectionEditor {
    pub collection_id: Option<String>,
    pub form: CollectionFormState,
    pub loaded: bool,
    pub add_product_id: String,
    pub deal_edit: Option<DealEdit>,
}

impl CollectionEditor {
    pub fn is_editing(&self) -> bool {
        self.collection_id.is_some()
    }
}

/// What the confirm-delete popup is about to remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Product {
        id: String,
        name: String,
    },
    Category {
        id: String,
        name: String,
    },
    Brand {
        id: String,
        name: String,
    },
    Collection {
        id: String,
        title: String,
    },
    CollectionItem {
        collection_id: String,
        item_id: String,
        name: String,
    },
}

impl DeleteTarget {
    pub fn describe(&self) -> String {
        match self {
            DeleteTarget::Product { name, .. } => format!("product '{name}'"),
            DeleteTarget::Category { name, .. } => format!("category '{name}'"),
            DeleteTarget::Brand { name, .. } => format!("brand '{name}'"),
            DeleteTarget::Collection { title, .. } => format!("collection '{title}'"),
            DeleteTarget::CollectionItem { name, .. } => {
                format!("'{name}' from this collection")
            }
        }
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct AdminWindowState {
    pub screen: Screen,

    // Product list filters. Empty id strings mean "no filter".
    pub product_search: String,
    pub product_status_filter: Option<ContentStatus>,
    pub product_category_filter: String,
    pub product_brand_filter: String,
    pub product_page: usize,
    pub product_editor: Option<ProductEditor>,

    pub show_category_popup: bool,
    pub category_edit_id: Option<String>,
    pub category_form: CategoryFormFields,
    pub category_form_error: Option<String>,

    pub show_brand_popup: bool,
    pub brand_edit_id: Option<String>,
    pub brand_form: BrandFormFields,
    pub brand_form_error: Option<String>,

    pub collection_editor: Option<CollectionEditor>,

    pub delete_target: Option<DeleteTarget>,

    pub show_settings_popup: bool,
    pub settings_api_base_input: String,
    pub settings_new_api_key_input: String,
    pub settings_api_key_status: String,
    pub settings_fps: FpsSetting,

    // Dashboard date range, YYYY-MM-DD. Blank means server defaults.
    pub report_from: String,
    pub report_to: String,
}

impl AdminWindowState {
    /// Report range as the cache keys expect it: trimmed, blank = unset.
    pub fn report_range(&self) -> (Option<String>, Option<String>) {
        let clean = |s: &str| {
            let t = s.trim();
            if t.is_empty() {
                None
            } else {
                Some(t.to_string())
            }
        };
        (clean(&self.report_from), clean(&self.report_to))
    }

    /// The list screen's filters as server-side query params, copied into
    /// `ProductListFilters` whenever the product list is refetched.
    pub fn product_list_params(&self) -> ProductListParams {
        let clean = |s: &str| {
            let t = s.trim();
            if t.is_empty() {
                None
            } else {
                Some(t.to_string())
            }
        };
        ProductListParams {
            status: self
                .product_status_filter
                .map(|s| s.as_str().to_string()),
            search: clean(&self.product_search),
            category_id: clean(&self.product_category_filter),
            brand_id: clean(&self.product_brand_filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_range_trims_and_drops_blanks() {
        let mut state = AdminWindowState::default();
        assert_eq!(state.report_range(), (None, None));
        state.report_from = " 2025-01-01 ".to_string();
        state.report_to = "   ".to_string();
        assert_eq!(
            state.report_range(),
            (Some("2025-01-01".to_string()), None)
        );
    }

    #[test]
    fn list_filters_map_to_server_params() {
        let mut state = AdminWindowState::default();
        assert_eq!(state.product_list_params(), ProductListParams::default());

        state.product_search = "  dyson ".to_string();
        state.product_status_filter = Some(ContentStatus::Published);
        state.product_brand_filter = "b-1".to_string();
        let params = state.product_list_params();
        assert_eq!(params.search.as_deref(), Some("dyson"));
        assert_eq!(params.status.as_deref(), Some("published"));
        assert_eq!(params.brand_id.as_deref(), Some("b-1"));
        assert!(params.category_id.is_none());
    }

    #[test]
    fn delete_target_descriptions_name_the_entity() {
        let target = DeleteTarget::Product {
            id: "p1".to_string(),
            name: "Dyson V15".to_string(),
        };
        assert_eq!(target.describe(), "product 'Dyson V15'");
    }
}
