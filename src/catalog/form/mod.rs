// src/catalog/form/mod.rs
// Form-state layer: flat editable state, JSON import normalization, and the
// wire-payload builders that feed the mutation systems.

pub mod collection;
pub mod import;
pub mod payload;
pub mod state;
pub mod template;

pub use collection::CollectionFormState;
pub use state::{ListField, ProductFormState};
