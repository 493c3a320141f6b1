// src/ui/elements/collections/mod.rs

pub mod form;
pub mod list;

pub use form::show_collection_editor;
pub use list::show_collection_list;
