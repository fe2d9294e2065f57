//! Cliente Commands
//!
//! Frontend entry points for the list and create screens. The coordinator
//! has already shown a toast for every failure, so callers may drop the
//! returned `Result`.

use cliente_core::{
    ApiConfig, ClienteResult, Coordinator, HttpClienteApi, Outcome, SessionToken,
};

use super::{BrowserConfirm, ToastNotifier};
use crate::models::{ClienteDraft, ClienteId};
use crate::store::{AppStore, StoreHandle};

pub type AppCoordinator = Coordinator<HttpClienteApi, ToastNotifier, BrowserConfirm>;

/// Wire the HTTP client, toasts and confirm dialog together
pub fn build_coordinator(store: AppStore) -> AppCoordinator {
    let config = ApiConfig::default();
    log::info!("[API] base url {}", config.base_url);
    Coordinator::new(
        HttpClienteApi::new(config),
        ToastNotifier::new(store),
        BrowserConfirm,
        SessionToken::new(),
    )
}

/// Make sure the session token was requested (only the first call sends)
pub async fn start_session(coord: &AppCoordinator) -> bool {
    coord.init_session().await
}

pub async fn load_clientes(coord: &AppCoordinator, store: AppStore) -> ClienteResult<usize> {
    coord.load(&StoreHandle(store)).await
}

pub async fn edit_cliente(coord: &AppCoordinator, store: AppStore, id: ClienteId) -> ClienteResult<()> {
    coord.fetch_for_edit(id, &StoreHandle(store)).await
}

pub async fn update_cliente(coord: &AppCoordinator, store: AppStore) -> ClienteResult<Outcome> {
    coord.update(&StoreHandle(store)).await
}

pub async fn delete_cliente(coord: &AppCoordinator, store: AppStore, id: ClienteId) -> ClienteResult<Outcome> {
    coord.delete(id, &StoreHandle(store)).await
}

pub async fn create_cliente(coord: &AppCoordinator, draft: &ClienteDraft) -> ClienteResult<()> {
    coord.init_session().await;
    coord.create(draft).await
}
