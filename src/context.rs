//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::commands::{self, AppCoordinator};
use crate::models::Screen;
use crate::store::AppStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Global reactive store
    pub store: AppStore,
    /// Visible screen - read
    pub screen: ReadSignal<Screen>,
    /// Visible screen - write
    set_screen: WriteSignal<Screen>,
    /// Coordinator lives on the UI thread only
    coordinator: StoredValue<Rc<AppCoordinator>, LocalStorage>,
}

impl AppContext {
    pub fn new(
        store: AppStore,
        screen: (ReadSignal<Screen>, WriteSignal<Screen>),
        coordinator: AppCoordinator,
    ) -> Self {
        Self {
            store,
            screen: screen.0,
            set_screen: screen.1,
            coordinator: StoredValue::new_local(Rc::new(coordinator)),
        }
    }

    pub fn coordinator(&self) -> Rc<AppCoordinator> {
        self.coordinator.get_value()
    }

    /// Switch screens and record it in the browser history
    pub fn navigate(&self, screen: Screen) {
        if self.screen.get_untracked() != screen {
            commands::push_screen(screen);
            self.set_screen.set(screen);
        }
    }

    /// Follow a back/forward move that already changed the location
    pub fn sync_with_location(&self) {
        self.set_screen.set(commands::current_screen());
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
