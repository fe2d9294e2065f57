//! Coordinator Integration Tests
//!
//! Drives the coordinator against scripted collaborators.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use cliente_core::notify::messages;
use cliente_core::{
    Cliente, ClienteApi, ClienteDraft, ClienteError, ClienteId, ClienteResult, Confirm, Coordinator,
    DraftField, Notice, NoticeLevel, Notifier, Outcome, RecordStore, SessionToken, ViewState,
    ViewStateHandle,
};

// ========================
// Scripted collaborators
// ========================

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Token,
    List(Option<String>),
    FetchOne(ClienteId),
    Update(ClienteId, ClienteDraft, Option<String>),
    Delete(ClienteId, Option<String>),
    Create(ClienteDraft, Option<String>),
}

struct MockApi {
    token: ClienteResult<String>,
    listing: RefCell<ClienteResult<Vec<Cliente>>>,
    record: RefCell<ClienteResult<Cliente>>,
    update: RefCell<ClienteResult<()>>,
    delete: RefCell<ClienteResult<()>>,
    create: RefCell<ClienteResult<()>>,
    calls: RefCell<Vec<Call>>,
}

impl MockApi {
    fn new() -> Self {
        Self {
            token: Ok("tok-123".to_string()),
            listing: RefCell::new(Ok(vec![])),
            record: RefCell::new(Err(ClienteError::Status { status: 404 })),
            update: RefCell::new(Ok(())),
            delete: RefCell::new(Ok(())),
            create: RefCell::new(Ok(())),
            calls: RefCell::new(vec![]),
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn log_call(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl ClienteApi for MockApi {
    async fn fetch_csrf_token(&self) -> ClienteResult<String> {
        self.log_call(Call::Token);
        self.token.clone()
    }

    async fn list(&self, token: Option<&str>) -> ClienteResult<Vec<Cliente>> {
        self.log_call(Call::List(token.map(str::to_string)));
        self.listing.borrow().clone()
    }

    async fn fetch_one(&self, id: ClienteId, _token: Option<&str>) -> ClienteResult<Cliente> {
        self.log_call(Call::FetchOne(id));
        self.record.borrow().clone()
    }

    async fn update(&self, id: ClienteId, draft: &ClienteDraft, token: Option<&str>) -> ClienteResult<()> {
        self.log_call(Call::Update(id, draft.clone(), token.map(str::to_string)));
        self.update.borrow().clone()
    }

    async fn delete(&self, id: ClienteId, token: Option<&str>) -> ClienteResult<()> {
        self.log_call(Call::Delete(id, token.map(str::to_string)));
        self.delete.borrow().clone()
    }

    async fn create(&self, draft: &ClienteDraft, token: Option<&str>) -> ClienteResult<()> {
        self.log_call(Call::Create(draft.clone(), token.map(str::to_string)));
        self.create.borrow().clone()
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    fn last(&self) -> Option<Notice> {
        self.notices.borrow().last().cloned()
    }

    fn messages(&self) -> Vec<String> {
        self.notices.borrow().iter().map(|n| n.message.clone()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

struct ScriptedConfirm {
    answer: bool,
    asked: Cell<usize>,
}

impl ScriptedConfirm {
    fn yes() -> Self {
        Self { answer: true, asked: Cell::new(0) }
    }

    fn no() -> Self {
        Self { answer: false, asked: Cell::new(0) }
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&self, _message: &str) -> bool {
        self.asked.set(self.asked.get() + 1);
        self.answer
    }
}

type TestCoordinator = Coordinator<MockApi, RecordingNotifier, ScriptedConfirm>;

fn coordinator(api: MockApi, confirm: ScriptedConfirm) -> TestCoordinator {
    Coordinator::new(api, RecordingNotifier::default(), confirm, SessionToken::new())
}

fn cliente(id: ClienteId, nombre: &str) -> Cliente {
    Cliente {
        id,
        nombre_completo: nombre.to_string(),
        numero_documento: format!("4000{}", id),
        email: format!("cliente{}@example.com", id),
        fecha_nacimiento: "1990-05-01".to_string(),
        fecha_creacion: Some("2023-01-01".to_string()),
        fecha_actualizado: Some("2023-06-15T10:00:00Z".to_string()),
        avatar_url: None,
    }
}

fn loaded_state(records: Vec<Cliente>) -> RefCell<ViewState> {
    RefCell::new(ViewState {
        store: RecordStore::new(records),
        ..Default::default()
    })
}

fn valid_draft() -> ClienteDraft {
    ClienteDraft {
        nombre_completo: "Marta Diaz".into(),
        numero_documento: "30111222".into(),
        email: "marta@example.com".into(),
        fecha_nacimiento: "1988-02-14".into(),
    }
}

// ========================
// Load
// ========================

#[tokio::test]
async fn test_load_replaces_collection_and_filter_applies() {
    let api = MockApi::new();
    *api.listing.borrow_mut() = Ok(vec![cliente(1, "Ana Gomez"), cliente(2, "Luis Paz")]);
    let coord = coordinator(api, ScriptedConfirm::yes());
    let state = loaded_state(vec![cliente(9, "Viejo")]);

    assert_eq!(coord.load(&state).await, Ok(2));
    assert!(state.read(|s| s.store.get(9).is_none()));

    state.update(|s| s.search = "ana".to_string());
    let ids: Vec<_> = state.read(|s| s.filtered()).iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1]);
    assert_eq!(coord.notifier().messages(), vec![messages::LOADING.to_string()]);
}

#[tokio::test]
async fn test_load_empty_shows_notice() {
    let coord = coordinator(MockApi::new(), ScriptedConfirm::yes());
    let state = loaded_state(vec![]);

    assert_eq!(coord.load(&state).await, Ok(0));
    assert!(state.read(|s| s.filtered().is_empty()));

    let last = coord.notifier().last().unwrap();
    assert_eq!(last.level, NoticeLevel::Info);
    assert_eq!(last.message, messages::EMPTY_LIST);
}

#[tokio::test]
async fn test_load_failure_keeps_stale_records() {
    let api = MockApi::new();
    *api.listing.borrow_mut() = Err(ClienteError::Transport("offline".into()));
    let coord = coordinator(api, ScriptedConfirm::yes());
    let state = loaded_state(vec![cliente(1, "Ana Gomez")]);

    assert!(coord.load(&state).await.is_err());
    assert_eq!(state.read(|s| s.store.len()), 1);
    assert_eq!(coord.notifier().last().unwrap().level, NoticeLevel::Error);
}

// ========================
// Session token
// ========================

#[tokio::test]
async fn test_token_is_fetched_once_and_attached() {
    let api = MockApi::new();
    *api.listing.borrow_mut() = Ok(vec![cliente(1, "Ana Gomez")]);
    let coord = coordinator(api, ScriptedConfirm::yes());
    let state = loaded_state(vec![]);

    assert!(coord.init_session().await);
    assert!(coord.init_session().await);
    coord.load(&state).await.unwrap();
    coord.delete(1, &state).await.unwrap();

    let token = Some("tok-123".to_string());
    assert_eq!(
        coord.api().calls(),
        vec![Call::Token, Call::List(token.clone()), Call::Delete(1, token)]
    );
}

#[tokio::test]
async fn test_missing_token_does_not_block_reads() {
    let mut api = MockApi::new();
    api.token = Err(ClienteError::Status { status: 403 });
    *api.listing.borrow_mut() = Ok(vec![cliente(1, "Ana Gomez")]);
    let coord = coordinator(api, ScriptedConfirm::yes());
    let state = loaded_state(vec![]);

    assert!(!coord.init_session().await);
    assert!(!coord.init_session().await);
    assert_eq!(coord.load(&state).await, Ok(1));
    assert_eq!(coord.api().calls(), vec![Call::Token, Call::List(None)]);
}

// ========================
// Fetch for edit
// ========================

#[tokio::test]
async fn test_fetch_for_edit_selects_server_copy() {
    let api = MockApi::new();
    let mut fresh = cliente(2, "Luis Paz");
    fresh.email = "luis.nuevo@example.com".into();
    *api.record.borrow_mut() = Ok(fresh.clone());
    let coord = coordinator(api, ScriptedConfirm::yes());
    let state = loaded_state(vec![cliente(1, "Ana Gomez"), cliente(2, "Luis Paz")]);

    coord.fetch_for_edit(2, &state).await.unwrap();
    assert_eq!(state.read(|s| s.selected.clone()), Some(fresh));
}

#[tokio::test]
async fn test_fetch_for_edit_failure_clears_previous_selection_silently() {
    let coord = coordinator(MockApi::new(), ScriptedConfirm::yes());
    let state = loaded_state(vec![cliente(1, "Ana Gomez")]);
    state.update(|s| s.selected = Some(cliente(1, "Ana Gomez")));

    assert!(coord.fetch_for_edit(5, &state).await.is_err());
    assert_eq!(state.read(|s| s.selected.clone()), None);
    assert!(coord.notifier().messages().is_empty());
}

// ========================
// Update
// ========================

#[tokio::test]
async fn test_update_success_patches_store_and_closes_selection() {
    let coord = coordinator(MockApi::new(), ScriptedConfirm::yes());
    coord.token().init(coord.api()).await;
    let state = loaded_state(vec![cliente(1, "Ana Gomez"), cliente(2, "Luis Paz")]);
    state.update(|s| {
        s.selected = Some(cliente(2, "Luis Paz"));
        s.edit_selected(DraftField::NombreCompleto, "Luis Alberto Paz".to_string());
    });

    assert_eq!(coord.update(&state).await, Ok(Outcome::Applied));

    state.read(|s| {
        assert_eq!(s.store.len(), 2);
        assert_eq!(s.store.records()[1].nombre_completo, "Luis Alberto Paz");
        assert!(s.selected.is_none());
    });

    let expected = cliente(2, "Luis Alberto Paz").draft();
    assert_eq!(
        coord.api().calls().last(),
        Some(&Call::Update(2, expected, Some("tok-123".to_string())))
    );
    assert_eq!(coord.notifier().last().unwrap().message, messages::UPDATED);
}

#[tokio::test]
async fn test_update_server_error_keeps_store_and_selection() {
    let api = MockApi::new();
    *api.update.borrow_mut() = Err(ClienteError::Status { status: 500 });
    let coord = coordinator(api, ScriptedConfirm::yes());
    let state = loaded_state(vec![cliente(1, "Ana Gomez")]);
    state.update(|s| {
        s.selected = Some(cliente(1, "Ana Gomez"));
        s.edit_selected(DraftField::Email, "ana.b@example.com".to_string());
    });

    assert_eq!(
        coord.update(&state).await,
        Err(ClienteError::Status { status: 500 })
    );
    state.read(|s| {
        assert_eq!(s.store.records()[0], cliente(1, "Ana Gomez"));
        assert_eq!(s.selected.as_ref().map(|c| c.email.as_str()), Some("ana.b@example.com"));
    });

    let last = coord.notifier().last().unwrap();
    assert_eq!(last.level, NoticeLevel::Error);
    assert_eq!(last.message, messages::UPDATE_FAILED);
}

#[tokio::test]
async fn test_update_rejects_empty_fields_without_network_call() {
    for field in DraftField::ALL {
        let confirm = ScriptedConfirm::yes();
        let coord = coordinator(MockApi::new(), confirm);
        let state = loaded_state(vec![cliente(1, "Ana Gomez")]);
        state.update(|s| {
            s.selected = Some(cliente(1, "Ana Gomez"));
            s.edit_selected(field, String::new());
        });

        let result = coord.update(&state).await;
        assert!(matches!(result, Err(ClienteError::Validation(_))), "{:?}", field);
        assert!(coord.api().calls().is_empty());
        assert_eq!(coord.confirmer().asked.get(), 0);
        assert!(state.read(|s| s.selected.is_some()));
    }
}

#[tokio::test]
async fn test_update_without_selection() {
    let coord = coordinator(MockApi::new(), ScriptedConfirm::yes());
    let state = loaded_state(vec![cliente(1, "Ana Gomez")]);

    assert_eq!(coord.update(&state).await, Err(ClienteError::NoSelection));
    assert_eq!(coord.notifier().last().unwrap().message, messages::NO_SELECTION);
    assert!(coord.api().calls().is_empty());
}

#[tokio::test]
async fn test_update_declined_sends_nothing() {
    let coord = coordinator(MockApi::new(), ScriptedConfirm::no());
    let state = loaded_state(vec![cliente(1, "Ana Gomez")]);
    state.update(|s| s.selected = Some(cliente(1, "Ana Gomez")));

    assert_eq!(coord.update(&state).await, Ok(Outcome::Cancelled));
    assert!(coord.api().calls().is_empty());
    assert!(state.read(|s| s.selected.is_some()));
}

// ========================
// Delete
// ========================

#[tokio::test]
async fn test_delete_confirmed_removes_record_from_view() {
    let coord = coordinator(MockApi::new(), ScriptedConfirm::yes());
    let state = loaded_state(vec![cliente(1, "Ana Gomez"), cliente(2, "Anabel Ruiz")]);
    state.update(|s| s.search = "ana".to_string());
    assert_eq!(state.read(|s| s.filtered().len()), 2);

    assert_eq!(coord.delete(1, &state).await, Ok(Outcome::Applied));

    let ids: Vec<_> = state.read(|s| s.filtered()).iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2]);
    assert_eq!(state.read(|s| s.store.len()), 1);
    assert_eq!(coord.notifier().last().unwrap().message, messages::DELETED);
}

#[tokio::test]
async fn test_delete_failure_leaves_store_untouched() {
    let api = MockApi::new();
    *api.delete.borrow_mut() = Err(ClienteError::Transport("connection reset".into()));
    let coord = coordinator(api, ScriptedConfirm::yes());
    let state = loaded_state(vec![cliente(1, "Ana Gomez")]);

    assert!(coord.delete(1, &state).await.is_err());
    assert_eq!(state.read(|s| s.store.len()), 1);
    assert_eq!(coord.notifier().last().unwrap().message, messages::DELETE_FAILED);
}

#[tokio::test]
async fn test_delete_declined_asks_but_sends_nothing() {
    let coord = coordinator(MockApi::new(), ScriptedConfirm::no());
    let state = loaded_state(vec![cliente(1, "Ana Gomez")]);

    assert_eq!(coord.delete(1, &state).await, Ok(Outcome::Cancelled));
    assert_eq!(coord.confirmer().asked.get(), 1);
    assert!(coord.api().calls().is_empty());
    assert_eq!(state.read(|s| s.store.len()), 1);
}

#[tokio::test]
async fn test_delete_of_selected_record_closes_edit() {
    let coord = coordinator(MockApi::new(), ScriptedConfirm::yes());
    let state = loaded_state(vec![cliente(1, "Ana Gomez")]);
    state.update(|s| s.selected = Some(cliente(1, "Ana Gomez")));

    coord.delete(1, &state).await.unwrap();
    assert!(state.read(|s| s.selected.is_none()));
}

// ========================
// Create
// ========================

#[tokio::test]
async fn test_create_invalid_draft_is_not_sent() {
    let coord = coordinator(MockApi::new(), ScriptedConfirm::yes());
    let mut draft = valid_draft();
    draft.email = "marta-at-example".into();

    let result = coord.create(&draft).await;
    match result {
        Err(ClienteError::Validation(errors)) => {
            assert_eq!(errors.get(DraftField::Email), Some("Email inválido"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert!(coord.api().calls().is_empty());
}

#[tokio::test]
async fn test_create_success_and_failure_notices() {
    let coord = coordinator(MockApi::new(), ScriptedConfirm::yes());
    coord.create(&valid_draft()).await.unwrap();
    assert_eq!(coord.notifier().last().unwrap().message, messages::CREATED);
    assert_eq!(coord.api().calls(), vec![Call::Create(valid_draft(), None)]);

    *coord.api().create.borrow_mut() = Err(ClienteError::Status { status: 400 });
    assert!(coord.create(&valid_draft()).await.is_err());
    assert_eq!(coord.notifier().last().unwrap().message, messages::CREATE_FAILED);
}
