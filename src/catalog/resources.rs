// src/catalog/resources.rs
// Query cache and session resources. The cache maps a QueryKey to its last
// fetched payload; mutations never edit cached data in place, they
// invalidate keys and let the next render's fetch repopulate them.

use std::collections::{HashMap, HashSet};

use bevy::prelude::*;

use crate::api::types::{
    BrandPage, CategoryItem, Collection, ProductDetail, ProductPage, ReportsOverviewResponse,
    ReportsTopPagesResponse, ReportsTopProductsResponse,
};

/// Identity of a cached dataset. Report keys carry their date range so two
/// ranges can coexist.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Products,
    Product(String),
    Categories,
    Brands,
    Collections,
    Collection(String),
    ReportsOverview {
        from: Option<String>,
        to: Option<String>,
    },
    ReportsTopProducts {
        from: Option<String>,
        to: Option<String>,
    },
    ReportsTopPages {
        from: Option<String>,
        to: Option<String>,
    },
}

#[derive(Debug, Clone)]
pub enum FetchPayload {
    Products(ProductPage),
    Product(Box<ProductDetail>),
    Categories(Vec<CategoryItem>),
    Brands(BrandPage),
    Collections(Vec<Collection>),
    Collection(Box<Collection>),
    ReportsOverview(Box<ReportsOverviewResponse>),
    ReportsTopProducts(ReportsTopProductsResponse),
    ReportsTopPages(ReportsTopPagesResponse),
}

#[derive(Resource, Debug, Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, FetchPayload>,
    in_flight: HashSet<QueryKey>,
}

impl QueryCache {
    pub fn contains(&self, key: &QueryKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_in_flight(&self, key: &QueryKey) -> bool {
        self.in_flight.contains(key)
    }

    pub fn mark_in_flight(&mut self, key: QueryKey) {
        self.in_flight.insert(key);
    }

    pub fn settle(&mut self, key: &QueryKey) {
        self.in_flight.remove(key);
    }

    pub fn store(&mut self, key: QueryKey, payload: FetchPayload) {
        self.in_flight.remove(&key);
        self.entries.insert(key, payload);
    }

    pub fn invalidate(&mut self, key: &QueryKey) {
        self.entries.remove(key);
    }

    /// Drops the product list and every cached detail.
    pub fn invalidate_products(&mut self) {
        self.entries
            .retain(|key, _| !matches!(key, QueryKey::Products | QueryKey::Product(_)));
    }

    pub fn invalidate_collections(&mut self) {
        self.entries
            .retain(|key, _| !matches!(key, QueryKey::Collections | QueryKey::Collection(_)));
    }

    pub fn invalidate_collection(&mut self, id: &str) {
        self.entries.remove(&QueryKey::Collections);
        self.entries.remove(&QueryKey::Collection(id.to_string()));
    }

    // Typed accessors used by the render systems.

    pub fn products(&self) -> Option<&ProductPage> {
        match self.entries.get(&QueryKey::Products) {
            Some(FetchPayload::Products(page)) => Some(page),
            _ => None,
        }
    }

    pub fn product(&self, id: &str) -> Option<&ProductDetail> {
        match self.entries.get(&QueryKey::Product(id.to_string())) {
            Some(FetchPayload::Product(detail)) => Some(detail),
            _ => None,
        }
    }

    pub fn categories(&self) -> Option<&Vec<CategoryItem>> {
        match self.entries.get(&QueryKey::Categories) {
            Some(FetchPayload::Categories(items)) => Some(items),
            _ => None,
        }
    }

    pub fn brands(&self) -> Option<&BrandPage> {
        match self.entries.get(&QueryKey::Brands) {
            Some(FetchPayload::Brands(page)) => Some(page),
            _ => None,
        }
    }

    pub fn collections(&self) -> Option<&Vec<Collection>> {
        match self.entries.get(&QueryKey::Collections) {
            Some(FetchPayload::Collections(items)) => Some(items),
            _ => None,
        }
    }

    pub fn collection(&self, id: &str) -> Option<&Collection> {
        match self.entries.get(&QueryKey::Collection(id.to_string())) {
            Some(FetchPayload::Collection(collection)) => Some(collection),
            _ => None,
        }
    }

    pub fn reports_overview(
        &self,
        from: &Option<String>,
        to: &Option<String>,
    ) -> Option<&ReportsOverviewResponse> {
        let key = QueryKey::ReportsOverview {
            from: from.clone(),
            to: to.clone(),
        };
        match self.entries.get(&key) {
            Some(FetchPayload::ReportsOverview(r)) => Some(r),
            _ => None,
        }
    }

    pub fn reports_top_products(
        &self,
        from: &Option<String>,
        to: &Option<String>,
    ) -> Option<&ReportsTopProductsResponse> {
        let key = QueryKey::ReportsTopProducts {
            from: from.clone(),
            to: to.clone(),
        };
        match self.entries.get(&key) {
            Some(FetchPayload::ReportsTopProducts(r)) => Some(r),
            _ => None,
        }
    }

    pub fn reports_top_pages(
        &self,
        from: &Option<String>,
        to: &Option<String>,
    ) -> Option<&ReportsTopPagesResponse> {
        let key = QueryKey::ReportsTopPages {
            from: from.clone(),
            to: to.clone(),
        };
        match self.entries.get(&key) {
            Some(FetchPayload::ReportsTopPages(r)) => Some(r),
            _ => None,
        }
    }
}

/// Server-side filters the next product list fetch should carry. Refresh
/// copies the list screen's current filters in here; the dispatcher reads
/// them when `QueryKey::Products` is requested.
#[derive(Resource, Debug, Clone, Default)]
pub struct ProductListFilters(pub crate::api::endpoints::products::ProductListParams);

/// Connection parameters for the admin API, assembled at startup from the
/// settings file, environment, and keyring.
#[derive(Resource, Debug, Clone)]
pub struct ApiSession {
    pub base_url: String,
    pub admin_key: Option<String>,
    pub bearer_token: Option<String>,
}

impl Default for ApiSession {
    fn default() -> Self {
        Self {
            base_url: crate::api::http::DEFAULT_API_BASE.to_string(),
            admin_key: None,
            bearer_token: None,
        }
    }
}

impl ApiSession {
    pub fn client(&self) -> crate::api::HttpClient {
        crate::api::HttpClient::new(
            &self.base_url,
            self.admin_key.clone(),
            self.bearer_token.clone(),
        )
    }
}

/// Which product-form tabs and fields are writable, per mode. Creation opens
/// everything; editing narrows to the allow-list the PATCH endpoint accepts.
#[derive(Resource, Debug, Clone)]
pub struct EditableFieldsConfig {
    editable_fields: Vec<&'static str>,
    editable_tabs: Vec<&'static str>,
    hidden_tabs_when_editing: Vec<&'static str>,
}

impl Default for EditableFieldsConfig {
    fn default() -> Self {
        Self {
            editable_fields: vec!["name", "subtitle", "categoryId", "brandId", "image", "status"],
            editable_tabs: vec!["basic"],
            hidden_tabs_when_editing: vec!["import"],
        }
    }
}

impl EditableFieldsConfig {
    pub fn is_field_editable(&self, field: &str, is_editing: bool) -> bool {
        !is_editing || self.editable_fields.contains(&field)
    }

    pub fn is_tab_editable(&self, tab: &str, is_editing: bool) -> bool {
        !is_editing || self.editable_tabs.contains(&tab)
    }

    pub fn is_tab_visible(&self, tab: &str, is_editing: bool) -> bool {
        !is_editing || !self.hidden_tabs_when_editing.contains(&tab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_invalidation_sweeps_details_but_not_brands() {
        let mut cache = QueryCache::default();
        cache.store(QueryKey::Products, FetchPayload::Products(ProductPage::default()));
        cache.store(
            QueryKey::Product("p-1".to_string()),
            FetchPayload::Product(Box::default()),
        );
        cache.store(QueryKey::Brands, FetchPayload::Brands(BrandPage::default()));

        cache.invalidate_products();
        assert!(!cache.contains(&QueryKey::Products));
        assert!(!cache.contains(&QueryKey::Product("p-1".to_string())));
        assert!(cache.contains(&QueryKey::Brands));
    }

    #[test]
    fn store_clears_in_flight() {
        let mut cache = QueryCache::default();
        cache.mark_in_flight(QueryKey::Categories);
        assert!(cache.is_in_flight(&QueryKey::Categories));
        cache.store(QueryKey::Categories, FetchPayload::Categories(Vec::new()));
        assert!(!cache.is_in_flight(&QueryKey::Categories));
        assert!(cache.categories().is_some());
    }

    #[test]
    fn editing_narrows_fields_to_the_allow_list() {
        let config = EditableFieldsConfig::default();
        assert!(config.is_field_editable("overallScore", false));
        assert!(!config.is_field_editable("overallScore", true));
        assert!(config.is_field_editable("subtitle", true));
        assert!(config.is_tab_editable("details", false));
        assert!(!config.is_tab_editable("details", true));
        assert!(config.is_tab_editable("basic", true));
    }

    #[test]
    fn import_tab_hides_while_editing() {
        let config = EditableFieldsConfig::default();
        assert!(config.is_tab_visible("import", false));
        assert!(!config.is_tab_visible("import", true));
        assert!(config.is_tab_visible("basic", true));
    }
}
