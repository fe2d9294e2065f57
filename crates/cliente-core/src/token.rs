//! Session Token Provider
//!
//! Fetches the anti-forgery token once per session and hands it to every
//! request that needs it. Clones share the same slot.

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::api::ClienteApi;

#[derive(Debug, Clone, Default)]
pub struct SessionToken {
    /// Result of the session's single fetch; `None` inside means it failed
    slot: Arc<OnceCell<Option<String>>>,
}

impl SessionToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the server for a token. Only the first call per session sends
    /// a request; calls made while it is pending wait for the same answer.
    /// Failure is logged and not retried, so read-only calls still work.
    pub async fn init<A: ClienteApi + ?Sized>(&self, api: &A) -> Option<&str> {
        self.slot
            .get_or_init(|| async {
                match api.fetch_csrf_token().await {
                    Ok(token) => {
                        log::info!("[TOKEN] session token acquired");
                        Some(token)
                    }
                    Err(e) => {
                        log::error!("[TOKEN] could not obtain CSRF token: {}", e);
                        None
                    }
                }
            })
            .await
            .as_deref()
    }

    pub fn get(&self) -> Option<&str> {
        self.slot.get().and_then(|token| token.as_deref())
    }
}
