// src/api/endpoints/mod.rs
// Typed request functions per admin resource. Each endpoint declares the
// response envelope it answers with next to its request, so the backend's
// envelope variance stays a finite, visible set.

pub mod brands;
pub mod categories;
pub mod collection_items;
pub mod collections;
pub mod products;
pub mod reports;
