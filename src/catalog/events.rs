// src/catalog/events.rs
// Request events sent by the UI, result events sent back by the async tasks.
// Fetches are generic over QueryKey; mutations get one event each so the
// handlers stay small and the payload types stay honest.

use bevy::prelude::*;

use crate::api::types::{
    CollectionItemPatch, CreateBrandPayload, CreateCategoryPayload, CreateCollectionItemPayload,
    CreateCollectionPayload, CreateProductPayload, ProductPatch, UpdateCollectionPayload,
};
use crate::catalog::resources::{FetchPayload, QueryKey};

// --- Fetch flow ---

/// Ask for a query to be (re)fetched. Deduplicated against in-flight keys.
#[derive(Event, Debug, Clone)]
pub struct RequestFetch(pub QueryKey);

#[derive(Event, Debug, Clone)]
pub struct FetchTaskResult {
    pub key: QueryKey,
    pub result: Result<FetchPayload, String>,
}

// --- Product mutations ---

#[derive(Event, Debug, Clone)]
pub struct RequestCreateProduct {
    pub payload: CreateProductPayload,
}

#[derive(Event, Debug, Clone)]
pub struct RequestUpdateProduct {
    pub id: String,
    pub patch: ProductPatch,
}

#[derive(Event, Debug, Clone)]
pub struct RequestDeleteProduct {
    pub id: String,
    pub name: String,
}

// --- Category mutations ---

#[derive(Event, Debug, Clone)]
pub struct RequestSaveCategory {
    /// None creates, Some replaces over PUT.
    pub id: Option<String>,
    pub payload: CreateCategoryPayload,
}

#[derive(Event, Debug, Clone)]
pub struct RequestDeleteCategory {
    pub id: String,
    pub name: String,
}

// --- Brand mutations ---

#[derive(Event, Debug, Clone)]
pub struct RequestSaveBrand {
    pub id: Option<String>,
    pub payload: CreateBrandPayload,
}

#[derive(Event, Debug, Clone)]
pub struct RequestDeleteBrand {
    pub id: String,
    pub name: String,
}

// --- Collection mutations ---

#[derive(Event, Debug, Clone)]
pub struct RequestCreateCollection {
    pub payload: CreateCollectionPayload,
}

#[derive(Event, Debug, Clone)]
pub struct RequestUpdateCollection {
    pub id: String,
    pub payload: UpdateCollectionPayload,
}

#[derive(Event, Debug, Clone)]
pub struct RequestDeleteCollection {
    pub id: String,
    pub title: String,
}

#[derive(Event, Debug, Clone)]
pub struct RequestAddCollectionItem {
    pub payload: CreateCollectionItemPayload,
}

/// One PATCH per item; reorders send several of these in a burst.
#[derive(Event, Debug, Clone)]
pub struct RequestUpdateCollectionItem {
    pub collection_id: String,
    pub item_id: String,
    pub patch: CollectionItemPatch,
}

#[derive(Event, Debug, Clone)]
pub struct RequestRemoveCollectionItem {
    pub collection_id: String,
    pub item_id: String,
}

// --- Mutation results ---

/// Which resource a finished mutation touched; drives cache invalidation and
/// post-save navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationKind {
    ProductCreated,
    ProductUpdated { id: String },
    ProductDeleted,
    CategorySaved,
    CategoryDeleted,
    BrandSaved,
    BrandDeleted,
    CollectionCreated,
    CollectionUpdated { id: String },
    CollectionDeleted,
    CollectionItemChanged { collection_id: String },
}

#[derive(Event, Debug, Clone)]
pub struct MutationTaskResult {
    pub kind: MutationKind,
    /// Human-readable subject for the feedback line ("MacBook Air M3").
    pub subject: String,
    pub result: Result<(), String>,
}

/// One-line status strip feedback, mirrored into the log.
#[derive(Event, Debug, Clone)]
pub struct StatusFeedback {
    pub message: String,
    pub is_error: bool,
}
