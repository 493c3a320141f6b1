// src/ui/mod.rs
use bevy::prelude::*;
use bevy_egui::EguiContextPass;

pub mod common;
pub mod elements;
pub mod state;
pub mod systems;

use elements::admin_panel_ui;
use state::AdminWindowState;
use systems::{clear_ui_feedback_on_screen_change, handle_mutation_navigation, handle_ui_feedback};

#[derive(Resource, Default, Debug, Clone)]
pub struct UiFeedbackState {
    pub last_message: String,
    pub is_error: bool,
}

/// Plugin for the admin panel UI.
pub struct AdminUiPlugin;

impl Plugin for AdminUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiFeedbackState>()
            .init_resource::<AdminWindowState>()
            .add_systems(
                Update,
                (
                    handle_ui_feedback,
                    handle_mutation_navigation,
                    clear_ui_feedback_on_screen_change,
                ),
            )
            .add_systems(EguiContextPass, admin_panel_ui);

        info!("AdminUiPlugin initialized.");
    }
}
