// src/api/http.rs
// Thin wrapper around reqwest for the admin REST API. Builds URLs with query
// parameters, attaches the static admin key header and optional bearer token,
// and turns non-2xx responses into ApiError::Status.
//
// No retry, timeout, or cancellation policy of its own: reqwest defaults.

use bevy::log::debug;
use serde::Serialize;

use super::error::{ApiError, ApiResult};

pub const ADMIN_KEY_HEADER: &str = "X-ADMIN-KEY";
pub const DEFAULT_API_BASE: &str = "http://localhost:3001/api/v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    fn as_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Connection parameters captured once per spawned task (the bevy world is
/// not reachable from the tokio side).
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    admin_key: Option<String>,
    bearer_token: Option<String>,
}

impl HttpClient {
    pub fn new(base_url: &str, admin_key: Option<String>, bearer_token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            admin_key,
            bearer_token,
        }
    }

    /// Joins base + path and appends non-empty query parameters.
    pub fn build_url(&self, path: &str, params: &[(&str, Option<String>)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        let mut sep = '?';
        for (key, value) in params {
            if let Some(v) = value {
                if v.is_empty() {
                    continue;
                }
                url.push(sep);
                url.push_str(key);
                url.push('=');
                // The admin API only takes slugs, ids, dates and page numbers
                // as parameters; escape the few reserved characters they can
                // contain rather than pulling in a full urlencoding dep.
                for c in v.chars() {
                    match c {
                        ' ' => url.push_str("%20"),
                        '&' => url.push_str("%26"),
                        '#' => url.push_str("%23"),
                        '+' => url.push_str("%2B"),
                        '=' => url.push_str("%3D"),
                        _ => url.push(c),
                    }
                }
                sep = '&';
            }
        }
        url
    }

    /// Performs a request and returns the decoded JSON body.
    /// DELETE endpoints answer with small ack bodies; callers decode those
    /// into `serde_json::Value` and ignore them.
    pub async fn request_json(
        &self,
        method: HttpMethod,
        path: &str,
        params: &[(&str, Option<String>)],
        body: Option<&(impl Serialize + ?Sized)>,
    ) -> ApiResult<serde_json::Value> {
        let admin_key = self.admin_key.as_deref().ok_or(ApiError::MissingKey)?;
        let url = self.build_url(path, params);
        debug!("API request: {:?} {}", method, url);

        let client = reqwest::Client::new();
        let mut builder = client
            .request(method.as_reqwest(), &url)
            .header("Content-Type", "application/json")
            .header(ADMIN_KEY_HEADER, admin_key);
        if let Some(token) = &self.bearer_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(b) = body {
            builder = builder.json(b);
        }

        let response = builder.send().await.map_err(ApiError::transport)?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: if text.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown status")
                        .to_string()
                } else {
                    text
                },
            });
        }

        let text = response.text().await.map_err(ApiError::transport)?;
        if text.trim().is_empty() {
            // A few mutation endpoints answer 204-style with no body.
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&text).map_err(ApiError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HttpClient {
        HttpClient::new(
            "http://localhost:3001/api/v1/",
            Some("key".to_string()),
            None,
        )
    }

    #[test]
    fn build_url_skips_absent_and_empty_params() {
        let url = client().build_url(
            "/admin/products",
            &[
                ("status", Some("draft".to_string())),
                ("search", None),
                ("page", Some(String::new())),
                ("brandId", Some("b-1".to_string())),
            ],
        );
        assert_eq!(
            url,
            "http://localhost:3001/api/v1/admin/products?status=draft&brandId=b-1"
        );
    }

    #[test]
    fn build_url_without_params_has_no_query() {
        let url = client().build_url("/admin/brands", &[]);
        assert_eq!(url, "http://localhost:3001/api/v1/admin/brands");
    }

    #[test]
    fn build_url_escapes_reserved_characters() {
        let url = client().build_url(
            "/admin/products",
            &[("search", Some("air m3 & more".to_string()))],
        );
        assert_eq!(
            url,
            "http://localhost:3001/api/v1/admin/products?search=air%20m3%20%26%20more"
        );
    }
}
