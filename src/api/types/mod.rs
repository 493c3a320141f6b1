// src/api/types/mod.rs
// Wire models for the admin REST API. Field names follow the backend's
// camelCase JSON; absent members are tolerated with Option + default so the
// UI keeps rendering when the backend omits them.

pub mod brand;
pub mod category;
pub mod collection;
pub mod product;
pub mod report;

pub use brand::{BrandItem, BrandPage, CreateBrandPayload};
pub use category::{CategoryItem, CreateCategoryPayload};
pub use collection::{
    Collection, CollectionItemRecord, CollectionItemPatch, CollectionStatus, CollectionType,
    CreateCollectionItemPayload, CreateCollectionPayload, UpdateCollectionPayload,
};
pub use product::{
    ContentStatus, CreateProductPayload, ProductDetail, ProductPage, ProductPatch, Rating,
    VerdictType,
};
pub use report::{
    ReportsOverviewResponse, ReportsTopPagesResponse, ReportsTopProductsResponse,
};
