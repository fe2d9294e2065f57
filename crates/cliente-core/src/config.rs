//! API Configuration
//!
//! Base URLs are baked in at build time; override with the
//! `CLIENTE_API_URL` / `CLIENTE_CREATE_API_URL` environment variables.

/// Fallback when no base URL is given at build time
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Header carrying the anti-forgery token
pub const CSRF_HEADER: &str = "X-CSRFToken";

// ========================
// Endpoint paths
// ========================

pub const TOKEN_PATH: &str = "/get-csrf-token/";
pub const LIST_PATH: &str = "/lista/";
pub const CREATE_PATH: &str = "/crear/";

pub fn edit_path(id: u64) -> String {
    format!("/editar/{}/", id)
}

pub fn update_path(id: u64) -> String {
    format!("/actualizar/{}/", id)
}

pub fn delete_path(id: u64) -> String {
    format!("/eliminar/{}/", id)
}

/// Where the remote API lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Origin for token, list, edit, update and delete calls
    pub base_url: String,
    /// Origin for create calls (None = same as base_url)
    pub create_base_url: Option<String>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            create_base_url: None,
        }
    }

    pub fn with_create_base_url(mut self, url: impl Into<String>) -> Self {
        self.create_base_url = Some(url.into());
        self
    }

    /// Full URL for a path on the main origin
    pub fn url(&self, path: &str) -> String {
        join(&self.base_url, path)
    }

    /// Full URL for the create endpoint
    pub fn create_url(&self) -> String {
        let base = self.create_base_url.as_deref().unwrap_or(&self.base_url);
        join(base, CREATE_PATH)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        let base_url = option_env!("CLIENTE_API_URL").unwrap_or(DEFAULT_BASE_URL);
        Self {
            base_url: base_url.to_string(),
            create_base_url: option_env!("CLIENTE_CREATE_API_URL").map(str::to_string),
        }
    }
}

fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join_trims_slashes() {
        let config = ApiConfig::new("http://api.local:8000/");
        assert_eq!(config.url(LIST_PATH), "http://api.local:8000/lista/");
        assert_eq!(config.url(&edit_path(7)), "http://api.local:8000/editar/7/");
    }

    #[test]
    fn test_create_url_uses_own_origin_when_set() {
        let config = ApiConfig::new("http://a:8000");
        assert_eq!(config.create_url(), "http://a:8000/crear/");

        let config = config.with_create_base_url("http://b:8000");
        assert_eq!(config.create_url(), "http://b:8000/crear/");
        assert_eq!(config.url(&delete_path(3)), "http://a:8000/eliminar/3/");
    }
}
