//! Mutation Coordinator
//!
//! Runs load / edit / update / delete / create against the remote API and
//! folds server-confirmed results back into the view state. Every failure
//! is turned into a notice here; the returned `Result` is informational.

use crate::api::ClienteApi;
use crate::error::{ClienteError, ClienteResult};
use crate::model::{ClienteDraft, ClienteId};
use crate::notify::{messages, Confirm, Notice, Notifier};
use crate::store::ViewStateHandle;
use crate::token::SessionToken;
use crate::validation::{self, INCOMPLETE_MESSAGE};

/// How a confirmed-or-declined operation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Server accepted the change and local state reflects it
    Applied,
    /// User declined the confirmation dialog; nothing was sent
    Cancelled,
}

pub struct Coordinator<A, N, C> {
    api: A,
    notifier: N,
    confirm: C,
    token: SessionToken,
}

impl<A, N, C> Coordinator<A, N, C>
where
    A: ClienteApi,
    N: Notifier,
    C: Confirm,
{
    pub fn new(api: A, notifier: N, confirm: C, token: SessionToken) -> Self {
        Self {
            api,
            notifier,
            confirm,
            token,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn confirmer(&self) -> &C {
        &self.confirm
    }

    pub fn token(&self) -> &SessionToken {
        &self.token
    }

    /// Acquire the session token. Call once when the view mounts.
    pub async fn init_session(&self) -> bool {
        self.token.init(&self.api).await.is_some()
    }

    /// Full fetch; replaces the collection on success, keeps the stale
    /// one on failure. Returns the number of records loaded.
    pub async fn load<S: ViewStateHandle>(&self, state: &S) -> ClienteResult<usize> {
        self.notifier.notify(Notice::info(messages::LOADING));

        match self.api.list(self.token.get()).await {
            Ok(records) => {
                let count = records.len();
                log::info!("[LOAD] {} clientes", count);
                state.update(|s| s.store.replace_all(records));
                if count == 0 {
                    self.notifier.notify(Notice::info(messages::EMPTY_LIST));
                }
                Ok(count)
            }
            Err(e) => {
                log::error!("[LOAD] list failed: {}", e);
                self.notifier.notify(Notice::error(messages::LOAD_FAILED));
                Err(e)
            }
        }
    }

    /// Fetch the authoritative record and open it for editing. Any
    /// previous selection is discarded first, even if the fetch fails.
    pub async fn fetch_for_edit<S: ViewStateHandle>(&self, id: ClienteId, state: &S) -> ClienteResult<()> {
        state.update(|s| s.selected = None);

        match self.api.fetch_one(id, self.token.get()).await {
            Ok(cliente) => {
                log::debug!("[EDIT] loaded cliente {}", id);
                state.update(|s| s.selected = Some(cliente));
                Ok(())
            }
            Err(e) => {
                log::error!("[EDIT] could not fetch cliente {}: {}", id, e);
                Err(e)
            }
        }
    }

    /// Send the selected record's editable fields. Requires a selection
    /// with no empty field and a confirmed dialog. On success the store
    /// is patched in place and the selection closed; on failure the
    /// selection stays open for another try.
    pub async fn update<S: ViewStateHandle>(&self, state: &S) -> ClienteResult<Outcome> {
        let Some(record) = state.read(|s| s.selected.clone()) else {
            self.notifier.notify(Notice::error(messages::NO_SELECTION));
            return Err(ClienteError::NoSelection);
        };

        let draft = record.draft();
        if let Err(errors) = validation::validate_edit(&draft) {
            self.notifier.notify(Notice::error(INCOMPLETE_MESSAGE));
            return Err(ClienteError::Validation(errors));
        }

        if !self.confirm.confirm(messages::CONFIRM_UPDATE) {
            return Ok(Outcome::Cancelled);
        }

        let id = record.id;
        match self.api.update(id, &draft, self.token.get()).await {
            Ok(()) => {
                log::info!("[UPDATE] cliente {} updated", id);
                state.update(|s| {
                    s.store.apply_update(id, record);
                    s.deselect(id);
                });
                self.notifier.notify(Notice::success(messages::UPDATED));
                Ok(Outcome::Applied)
            }
            Err(e) => {
                log::error!("[UPDATE] cliente {} failed: {}", id, e);
                self.notifier.notify(Notice::error(messages::UPDATE_FAILED));
                Err(e)
            }
        }
    }

    /// Soft-delete after confirmation. The record leaves the store only
    /// once the server answered 200.
    pub async fn delete<S: ViewStateHandle>(&self, id: ClienteId, state: &S) -> ClienteResult<Outcome> {
        if !self.confirm.confirm(messages::CONFIRM_DELETE) {
            return Ok(Outcome::Cancelled);
        }

        match self.api.delete(id, self.token.get()).await {
            Ok(()) => {
                log::info!("[DELETE] cliente {} removed", id);
                state.update(|s| {
                    s.store.apply_delete(id);
                    s.deselect(id);
                });
                self.notifier.notify(Notice::success(messages::DELETED));
                Ok(Outcome::Applied)
            }
            Err(e) => {
                log::error!("[DELETE] cliente {} failed: {}", id, e);
                self.notifier.notify(Notice::error(messages::DELETE_FAILED));
                Err(e)
            }
        }
    }

    /// Submit a new cliente. Field errors are returned for the form to
    /// show next to each input; nothing is sent in that case. The new
    /// record is not merged into any list: the create screen has its own
    /// session.
    pub async fn create(&self, draft: &ClienteDraft) -> ClienteResult<()> {
        validation::validate_new(draft).map_err(ClienteError::Validation)?;

        match self.api.create(draft, self.token.get()).await {
            Ok(()) => {
                log::info!("[CREATE] cliente created");
                self.notifier.notify(Notice::success(messages::CREATED));
                Ok(())
            }
            Err(e) => {
                log::error!("[CREATE] failed: {}", e);
                self.notifier.notify(Notice::error(messages::CREATE_FAILED));
                Err(e)
            }
        }
    }
}
