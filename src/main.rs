// src/main.rs

#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

use std::time::Duration;

use bevy::{
    log::LogPlugin,
    prelude::*,
    window::WindowPlugin,
    winit::{UpdateMode, WinitSettings},
};
use bevy_egui::EguiPlugin;
use bevy_framepace::{FramepaceSettings, Limiter};
use bevy_tokio_tasks::TokioTasksPlugin;
use clap::Parser;

mod api;
mod catalog;
mod cli;
mod settings;
mod ui;

use catalog::resources::ApiSession;
use catalog::CatalogPlugin;
use settings::{io::load_settings_from_file, AppSettings, FpsSetting};
use ui::state::AdminWindowState;
use ui::AdminUiPlugin;

pub const KEYRING_SERVICE_NAME: &str = "reviewdesk";
pub const KEYRING_API_KEY_USERNAME: &str = "admin_api_key";

fn main() {
    // .env is optional; it can carry REVIEWDESK_API_BASE / REVIEWDESK_ADMIN_KEY.
    dotenvy::dotenv().ok();

    let cli = cli::Cli::parse();
    if let Some(command) = cli.command {
        let result = match command {
            cli::Commands::ValidateImport { path } => cli::validate_import::run(&path),
            cli::Commands::PrintTemplate => {
                println!("{}", catalog::form::template::JSON_TEMPLATE);
                Ok(())
            }
        };
        if let Err(message) = result {
            eprintln!("Error: {message}");
            std::process::exit(1);
        }
        return;
    }

    App::new()
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::Continuous,
            unfocused_mode: UpdateMode::reactive_low_power(Duration::from_secs_f32(1.0 / 5.0)),
        })
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "ReviewDesk Admin".into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=error,naga=warn,bevy_tokio_tasks=warn".to_string(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        })
        .add_plugins(TokioTasksPlugin::default())
        .add_plugins(bevy_framepace::FramepacePlugin)
        .add_plugins(CatalogPlugin)
        .add_plugins(AdminUiPlugin)
        .add_systems(Startup, load_session_at_startup)
        .add_systems(Update, apply_fps_setting)
        .run();
}

/// Assembles the API session at startup: settings file for the base URL,
/// environment overrides, keyring for the admin key.
fn load_session_at_startup(
    mut session: ResMut<ApiSession>,
    mut window_state: ResMut<AdminWindowState>,
) {
    let settings: AppSettings = load_settings_from_file().unwrap_or_default();
    session.base_url = settings.api_base_url.clone();
    window_state.settings_fps = settings.fps_setting;

    if let Ok(base) = std::env::var("REVIEWDESK_API_BASE") {
        if !base.trim().is_empty() {
            info!("Using API base from REVIEWDESK_API_BASE.");
            session.base_url = base.trim().to_string();
        }
    }
    window_state.settings_api_base_input = session.base_url.clone();

    if let Ok(key) = std::env::var("REVIEWDESK_ADMIN_KEY") {
        if !key.trim().is_empty() {
            info!("Using admin key from REVIEWDESK_ADMIN_KEY.");
            session.admin_key = Some(key.trim().to_string());
            window_state.settings_api_key_status = "Key Set (env)".to_string();
        }
    }
    if let Ok(token) = std::env::var("REVIEWDESK_BEARER_TOKEN") {
        if !token.trim().is_empty() {
            session.bearer_token = Some(token.trim().to_string());
        }
    }

    if session.admin_key.is_none() {
        match keyring::Entry::new(KEYRING_SERVICE_NAME, KEYRING_API_KEY_USERNAME) {
            Ok(entry) => match entry.get_password() {
                Ok(key) => {
                    info!("Admin API key found in keyring on startup.");
                    session.admin_key = Some(key);
                    window_state.settings_api_key_status = "Key Set".to_string();
                }
                Err(keyring::Error::NoEntry) => {
                    info!("No admin API key in keyring on startup.");
                    window_state.settings_api_key_status = "No Key Set".to_string();
                }
                Err(e) => {
                    error!("Error accessing keyring on startup: {}", e);
                    window_state.settings_api_key_status = "Keyring Error".to_string();
                }
            },
            Err(e) => {
                error!("Error creating keyring entry on startup: {}", e);
                window_state.settings_api_key_status = "Keyring Error".to_string();
            }
        }
    }
}

fn apply_fps_setting(
    window_state: Res<AdminWindowState>,
    mut framepace: ResMut<FramepaceSettings>,
    mut last_applied: Local<Option<FpsSetting>>,
) {
    if *last_applied == Some(window_state.settings_fps) {
        return;
    }
    framepace.limiter = match window_state.settings_fps {
        FpsSetting::Thirty => Limiter::from_framerate(30.0),
        FpsSetting::Sixty => Limiter::from_framerate(60.0),
        FpsSetting::Auto => Limiter::Auto,
    };
    *last_applied = Some(window_state.settings_fps);
}
