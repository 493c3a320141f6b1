// src/ui/elements/mod.rs

pub mod admin_panel;
pub mod brands;
pub mod categories;
pub mod collections;
pub mod dashboard;
pub mod popups;
pub mod products;
pub mod top_panel;

pub use admin_panel::admin_panel_ui;
