// src/ui/elements/popups/mod.rs

pub mod delete_confirm_popup;
pub mod settings_popup;

pub use delete_confirm_popup::{show_delete_confirm_popup, DeleteWriters};
pub use settings_popup::show_settings_popup;
