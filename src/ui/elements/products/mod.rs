// src/ui/elements/products/mod.rs

pub mod form;
pub mod import_tab;
pub mod list;

pub use form::show_product_editor;
pub use list::show_product_list;
