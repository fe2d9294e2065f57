//! Remote API
//!
//! `ClienteApi` is the seam between the coordinator and the HTTP server;
//! `HttpClienteApi` is the reqwest implementation (fetch on wasm).

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde_json::Value;

use crate::config::{self, ApiConfig, CSRF_HEADER};
use crate::error::{ClienteError, ClienteResult};
use crate::model::{Cliente, ClienteDraft, ClienteId};

/// Body field holding the anti-forgery token
const TOKEN_FIELD: &str = "csrfToken";
/// Body field holding the listing
const LIST_FIELD: &str = "elementos";

/// Operations the remote server offers.
///
/// `token` is the session anti-forgery token, sent as a header when set.
#[async_trait(?Send)]
pub trait ClienteApi {
    async fn fetch_csrf_token(&self) -> ClienteResult<String>;

    async fn list(&self, token: Option<&str>) -> ClienteResult<Vec<Cliente>>;

    async fn fetch_one(&self, id: ClienteId, token: Option<&str>) -> ClienteResult<Cliente>;

    /// Replace the editable fields of `id`. Only HTTP 200 counts as success.
    async fn update(&self, id: ClienteId, draft: &ClienteDraft, token: Option<&str>) -> ClienteResult<()>;

    /// Soft-delete `id` (a PUT with no body). Only HTTP 200 counts as success.
    async fn delete(&self, id: ClienteId, token: Option<&str>) -> ClienteResult<()>;

    async fn create(&self, draft: &ClienteDraft, token: Option<&str>) -> ClienteResult<()>;
}

/// reqwest-backed client
#[derive(Debug, Clone)]
pub struct HttpClienteApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpClienteApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn request(&self, method: Method, url: String, token: Option<&str>) -> RequestBuilder {
        log::debug!("[API] {} {}", method, url);
        let mut builder = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(CSRF_HEADER, token);
        }
        with_credentials(builder)
    }
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder
}

#[async_trait(?Send)]
impl ClienteApi for HttpClienteApi {
    async fn fetch_csrf_token(&self) -> ClienteResult<String> {
        let url = self.config.url(config::TOKEN_PATH);
        let response = self.request(Method::GET, url, None).send().await?;
        let body = json_body(expect_success(response)?).await?;
        parse_token(&body)
    }

    async fn list(&self, token: Option<&str>) -> ClienteResult<Vec<Cliente>> {
        let url = self.config.url(config::LIST_PATH);
        let response = self.request(Method::GET, url, token).send().await?;
        let body = json_body(expect_success(response)?).await?;
        parse_listing(body)
    }

    async fn fetch_one(&self, id: ClienteId, token: Option<&str>) -> ClienteResult<Cliente> {
        let url = self.config.url(&config::edit_path(id));
        let response = self.request(Method::GET, url, token).send().await?;
        let body = json_body(expect_success(response)?).await?;
        parse_edit_body(body)
    }

    async fn update(&self, id: ClienteId, draft: &ClienteDraft, token: Option<&str>) -> ClienteResult<()> {
        let url = self.config.url(&config::update_path(id));
        let response = self.request(Method::PUT, url, token).json(draft).send().await?;
        expect_ok(response).map(|_| ())
    }

    async fn delete(&self, id: ClienteId, token: Option<&str>) -> ClienteResult<()> {
        let url = self.config.url(&config::delete_path(id));
        let response = self.request(Method::PUT, url, token).send().await?;
        expect_ok(response).map(|_| ())
    }

    async fn create(&self, draft: &ClienteDraft, token: Option<&str>) -> ClienteResult<()> {
        let url = self.config.create_url();
        let response = self.request(Method::POST, url, token).json(draft).send().await?;
        expect_success(response).map(|_| ())
    }
}

// ========================
// Response handling
// ========================

fn expect_success(response: Response) -> ClienteResult<Response> {
    check_status(response.status(), StatusCode::is_success).map(|_| response)
}

fn expect_ok(response: Response) -> ClienteResult<Response> {
    check_status(response.status(), |s| *s == StatusCode::OK).map(|_| response)
}

fn check_status(status: StatusCode, accept: impl Fn(&StatusCode) -> bool) -> ClienteResult<()> {
    if accept(&status) {
        Ok(())
    } else {
        Err(ClienteError::Status { status: status.as_u16() })
    }
}

async fn json_body(response: Response) -> ClienteResult<Value> {
    Ok(response.json::<Value>().await?)
}

pub fn parse_token(body: &Value) -> ClienteResult<String> {
    body.get(TOKEN_FIELD)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ClienteError::Decode(format!("missing `{}` field", TOKEN_FIELD)))
}

/// Entries that do not decode are skipped so one bad row does not hide
/// the rest of the listing.
pub fn parse_listing(mut body: Value) -> ClienteResult<Vec<Cliente>> {
    let entries = match body.get_mut(LIST_FIELD).map(Value::take) {
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(ClienteError::Decode(format!("`{}` is not a list", LIST_FIELD))),
        None => return Err(ClienteError::Decode(format!("missing `{}` field", LIST_FIELD))),
    };

    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<Cliente>(entry) {
            Ok(cliente) => Some(cliente),
            Err(e) => {
                log::warn!("[API] skipping listing entry {}: {}", index, e);
                None
            }
        })
        .collect())
}

/// The edit endpoint answers with the record itself, an object wrapping
/// it, or a list holding it; take the first member that is a record.
pub fn parse_edit_body(body: Value) -> ClienteResult<Cliente> {
    if let Ok(cliente) = serde_json::from_value::<Cliente>(body.clone()) {
        return Ok(cliente);
    }
    let found = match body {
        Value::Object(map) => first_record(map.into_iter().map(|(_, v)| v)),
        Value::Array(items) => first_record(items),
        _ => None,
    };
    found.ok_or_else(|| ClienteError::Decode("edit response holds no cliente record".to_string()))
}

fn first_record(values: impl IntoIterator<Item = Value>) -> Option<Cliente> {
    values
        .into_iter()
        .filter(Value::is_object)
        .find_map(|v| serde_json::from_value::<Cliente>(v).ok())
}
