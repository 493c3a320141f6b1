// src/api/mod.rs
// Client side of the admin REST API: HTTP wrapper, envelope decoders, wire
// models, and typed per-resource endpoints. All network traffic in the app
// goes through this module (enforced by tests/no_direct_http_in_ui.rs).

pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod http;
pub mod types;

pub use error::{ApiError, ApiResult};
pub use http::HttpClient;
