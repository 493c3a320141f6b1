// src/ui/elements/popups/settings_popup.rs
// Connection settings: admin API base URL, the admin key (stored in the OS
// keyring, never in the settings file), and the render throttle.

use bevy::log::{error, info};
use bevy_egui::egui;

use crate::catalog::resources::ApiSession;
use crate::settings::{io::save_settings_to_file, AppSettings, FpsSetting};
use crate::ui::state::AdminWindowState;
use crate::{KEYRING_API_KEY_USERNAME, KEYRING_SERVICE_NAME};

pub fn show_settings_popup(
    ctx: &egui::Context,
    state: &mut AdminWindowState,
    session: &mut ApiSession,
) {
    if !state.show_settings_popup {
        return;
    }

    let mut popup_open = state.show_settings_popup;
    let mut close_clicked = false;

    egui::Window::new("Settings")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut popup_open)
        .show(ctx, |ui| {
            ui.label("API base URL:");
            ui.add(
                egui::TextEdit::singleline(&mut state.settings_api_base_input)
                    .desired_width(320.0),
            );
            if ui.button("Apply & Save").clicked() {
                let base = state.settings_api_base_input.trim().to_string();
                if !base.is_empty() {
                    session.base_url = base.clone();
                    let settings = AppSettings {
                        api_base_url: base,
                        fps_setting: state.settings_fps,
                    };
                    if let Err(e) = save_settings_to_file(&settings) {
                        error!("Failed to save settings: {}", e);
                    }
                }
            }
            ui.separator();

            ui.label("Admin API key:");
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut state.settings_new_api_key_input)
                        .password(true)
                        .hint_text("paste new key")
                        .desired_width(220.0),
                );
                if ui.button("Save Key").clicked() {
                    let key = state.settings_new_api_key_input.trim().to_string();
                    if key.is_empty() {
                        state.settings_api_key_status = "Key cannot be empty".to_string();
                    } else {
                        match keyring::Entry::new(KEYRING_SERVICE_NAME, KEYRING_API_KEY_USERNAME)
                            .and_then(|entry| entry.set_password(&key))
                        {
                            Ok(()) => {
                                info!("Admin API key stored in keyring.");
                                session.admin_key = Some(key);
                                state.settings_api_key_status = "Key Set".to_string();
                                state.settings_new_api_key_input.clear();
                            }
                            Err(e) => {
                                error!("Failed to store admin key: {}", e);
                                state.settings_api_key_status = "Keyring Error".to_string();
                            }
                        }
                    }
                }
                if ui.button("Clear Key").clicked() {
                    match keyring::Entry::new(KEYRING_SERVICE_NAME, KEYRING_API_KEY_USERNAME)
                        .and_then(|entry| entry.delete_credential())
                    {
                        Ok(()) | Err(keyring::Error::NoEntry) => {
                            session.admin_key = None;
                            state.settings_api_key_status = "No Key Set".to_string();
                        }
                        Err(e) => {
                            error!("Failed to clear admin key: {}", e);
                            state.settings_api_key_status = "Keyring Error".to_string();
                        }
                    }
                }
            });
            ui.label(
                egui::RichText::new(&state.settings_api_key_status)
                    .small()
                    .weak(),
            );
            ui.separator();

            ui.label("Frame rate:");
            ui.horizontal(|ui| {
                for fps in FpsSetting::ALL {
                    if ui
                        .selectable_label(state.settings_fps == fps, fps.label())
                        .clicked()
                    {
                        state.settings_fps = fps;
                        let settings = AppSettings {
                            api_base_url: state.settings_api_base_input.trim().to_string(),
                            fps_setting: fps,
                        };
                        if let Err(e) = save_settings_to_file(&settings) {
                            error!("Failed to save settings: {}", e);
                        }
                    }
                }
            });
            ui.separator();

            if ui.button("Close").clicked() {
                close_clicked = true;
            }
        });

    if close_clicked || !popup_open {
        state.show_settings_popup = false;
        state.settings_new_api_key_input.clear();
    }
}
