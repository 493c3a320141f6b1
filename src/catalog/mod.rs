// src/catalog/mod.rs
// Domain layer: form state and payload building, the query cache, and the
// async systems that talk to the admin API.

pub mod events;
pub mod form;
pub mod plugin;
pub mod resources;
pub mod systems;

pub use plugin::CatalogPlugin;
