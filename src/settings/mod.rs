pub mod io;

use serde::{Deserialize, Serialize};

/// Render throttle for the editor window. "Auto" defers to vsync.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FpsSetting {
    Thirty,
    #[default]
    Sixty,
    Auto,
}

impl FpsSetting {
    pub const ALL: [FpsSetting; 3] = [FpsSetting::Thirty, FpsSetting::Sixty, FpsSetting::Auto];

    pub fn label(&self) -> &'static str {
        match self {
            FpsSetting::Thirty => "30 FPS",
            FpsSetting::Sixty => "60 FPS",
            FpsSetting::Auto => "Auto",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AppSettings {
    /// Admin API base, e.g. "http://localhost:3001/api/v1". The
    /// REVIEWDESK_API_BASE environment variable overrides it.
    pub api_base_url: String,
    pub fps_setting: FpsSetting,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: crate::api::http::DEFAULT_API_BASE.to_string(),
            fps_setting: FpsSetting::default(),
        }
    }
}
