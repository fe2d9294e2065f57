//! Cliente Core
//!
//! Everything behind the admin console that is not markup:
//! - model: cliente records and drafts
//! - store: in-memory collection and view state
//! - filter: search over name and last-update date
//! - coordinator: load and mutations against the remote API
//! - token: per-session anti-forgery token
//! - api: HTTP client

pub mod api;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod filter;
pub mod model;
pub mod notify;
pub mod store;
pub mod token;
pub mod validation;

pub use api::{ClienteApi, HttpClienteApi};
pub use config::ApiConfig;
pub use coordinator::{Coordinator, Outcome};
pub use error::{ClienteError, ClienteResult};
pub use filter::{display_date, filter_clientes};
pub use model::{Cliente, ClienteDraft, ClienteId, DraftField};
pub use notify::{Confirm, Notice, NoticeLevel, Notifier};
pub use store::{RecordStore, ViewState, ViewStateHandle};
pub use token::SessionToken;
pub use validation::ValidationErrors;
